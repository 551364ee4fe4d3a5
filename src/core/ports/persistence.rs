//! Persistence port
//!
//! Defines how directory collections are loaded and saved.

use crate::core::models::{Collection, Snapshot};

/// Durable storage for the directory
///
/// `load` must return, for every collection, the value of the last successful
/// `save` of that collection. `save` is all-or-nothing per collection.
pub trait Persistence: Send + Sync {
    /// Load every collection
    fn load(&self) -> anyhow::Result<Snapshot>;

    /// Replace one collection with its value in `snapshot`
    fn save(&self, collection: Collection, snapshot: &Snapshot) -> anyhow::Result<()>;

    /// Data written by another client since the last call, if any
    ///
    /// Writes made through this instance are never reported back.
    fn poll_external(&self) -> anyhow::Result<Option<Snapshot>>;
}
