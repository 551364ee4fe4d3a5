//! Resource ledger commands

use lifeflow::core::models::NewResourceDonation;
use lifeflow::output::{RecordResult, Render, ResourceList, warn_durability};

use super::Context;
use crate::cli::ResourceAction;

/// Handle resource subcommands
pub fn resource_cmd(action: ResourceAction, ctx: &Context) -> anyhow::Result<()> {
    let (_, mut coordinator) = ctx.open()?;

    match action {
        ResourceAction::Add {
            kind,
            donor_name,
            details,
            verified,
        } => {
            let persisted = coordinator.record_resource_donation(NewResourceDonation {
                kind,
                donor_name,
                details,
                payment_verified: verified,
            })?;
            warn_durability(&persisted.durability);
            let entry = persisted.value;
            RecordResult {
                message: format!("Recorded {} donation {} from {}", entry.kind, entry.id, entry.donor_name),
                saved: persisted.durability.is_saved(),
                alerts: persisted.alerts,
                record: entry,
            }
            .render(ctx.mode);
        },
        ResourceAction::List => {
            ResourceList {
                resources: coordinator.directory().resources().to_vec(),
            }
            .render(ctx.mode);
        },
    }

    Ok(())
}
