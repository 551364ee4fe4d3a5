//! Sequential `PREFIX-N` identifiers
//!
//! Numbers come from a per-collection high-water mark that only grows, so an
//! id is never handed out twice even after its record is removed.

/// Donor id prefix
pub const DONOR_PREFIX: &str = "DNR";
/// Match request id prefix
pub const REQUEST_PREFIX: &str = "REQ";
/// Blood bag id prefix
pub const BAG_PREFIX: &str = "BAG";
/// Resource donation id prefix
pub const RESOURCE_PREFIX: &str = "RES";
/// Notification id prefix
pub const NOTIFICATION_PREFIX: &str = "NTF";

/// Next id above both the mark `issued` and every `PREFIX-N` in `existing`
///
/// Advances `issued` to the number handed out.
pub fn next_id<'a>(
    prefix: &str,
    issued: &mut u64,
    existing: impl IntoIterator<Item = &'a str>,
) -> String {
    let max_num = existing
        .into_iter()
        .filter_map(|id| {
            id.strip_prefix(prefix)
                .and_then(|s| s.strip_prefix('-'))
                .and_then(|n| n.parse::<u64>().ok())
        })
        .max()
        .unwrap_or(0)
        .max(*issued);

    *issued = max_num + 1;
    format!("{prefix}-{issued}")
}
