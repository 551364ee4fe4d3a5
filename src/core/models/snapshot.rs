//! Whole-directory snapshots and collection names
//!
//! A snapshot is what the persistence port loads and what external
//! synchronization replaces, one collection at a time.

use serde::{Deserialize, Serialize};

use super::{AppNotification, BloodBagUnit, Donor, Recipient, ResourceDonation};

/// The five persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Registered donors
    Donors,
    /// Match requests
    Recipients,
    /// Blood bag inventory
    Bags,
    /// Resource donation ledger
    Resources,
    /// Notification feed
    Notifications,
}

impl Collection {
    /// All collections
    pub const ALL: [Self; 5] = [
        Self::Donors,
        Self::Recipients,
        Self::Bags,
        Self::Resources,
        Self::Notifications,
    ];

    /// Storage key of the collection
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Donors => "donors",
            Self::Recipients => "recipients",
            Self::Bags => "bags",
            Self::Resources => "resources",
            Self::Notifications => "notifications",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highest id number handed out per collection
///
/// Travels with its collection on save and sync, and never goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequences {
    /// Donor ids
    #[serde(default)]
    pub donors: u64,
    /// Match request ids
    #[serde(default)]
    pub recipients: u64,
    /// Blood bag ids
    #[serde(default)]
    pub bags: u64,
    /// Resource ledger ids
    #[serde(default)]
    pub resources: u64,
    /// Notification ids
    #[serde(default)]
    pub notifications: u64,
}

impl IdSequences {
    /// Mark for `collection`
    #[must_use]
    pub const fn get(&self, collection: Collection) -> u64 {
        match collection {
            Collection::Donors => self.donors,
            Collection::Recipients => self.recipients,
            Collection::Bags => self.bags,
            Collection::Resources => self.resources,
            Collection::Notifications => self.notifications,
        }
    }

    /// Raise the mark for `collection` to at least `issued`
    pub fn raise(&mut self, collection: Collection, issued: u64) {
        let mark = match collection {
            Collection::Donors => &mut self.donors,
            Collection::Recipients => &mut self.recipients,
            Collection::Bags => &mut self.bags,
            Collection::Resources => &mut self.resources,
            Collection::Notifications => &mut self.notifications,
        };
        *mark = (*mark).max(issued);
    }
}

/// Full contents of every collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Donors, newest first
    #[serde(default)]
    pub donors: Vec<Donor>,
    /// Match requests, newest first
    #[serde(default)]
    pub recipients: Vec<Recipient>,
    /// Blood bag units, newest first
    #[serde(default)]
    pub bags: Vec<BloodBagUnit>,
    /// Resource ledger, newest first
    #[serde(default)]
    pub resources: Vec<ResourceDonation>,
    /// Notifications, newest first
    #[serde(default)]
    pub notifications: Vec<AppNotification>,
    /// Id high-water marks
    #[serde(default)]
    pub sequences: IdSequences,
}

impl Snapshot {
    /// Collections of `other` that differ from `self`
    ///
    /// A collection whose records match but whose id mark in `other` is
    /// higher counts as changed, so the mark is picked up.
    #[must_use]
    pub fn changed_collections(&self, other: &Self) -> Vec<Collection> {
        Collection::ALL
            .into_iter()
            .filter(|&c| {
                let records_differ = match c {
                    Collection::Donors => self.donors != other.donors,
                    Collection::Recipients => self.recipients != other.recipients,
                    Collection::Bags => self.bags != other.bags,
                    Collection::Resources => self.resources != other.resources,
                    Collection::Notifications => self.notifications != other.notifications,
                };
                records_differ || other.sequences.get(c) > self.sequences.get(c)
            })
            .collect()
    }

    /// Copy one collection from `source` into `self`
    pub fn replace_from(&mut self, collection: Collection, source: &Self) {
        match collection {
            Collection::Donors => self.donors.clone_from(&source.donors),
            Collection::Recipients => self.recipients.clone_from(&source.recipients),
            Collection::Bags => self.bags.clone_from(&source.bags),
            Collection::Resources => self.resources.clone_from(&source.resources),
            Collection::Notifications => self.notifications.clone_from(&source.notifications),
        }
        self.sequences.raise(collection, source.sequences.get(collection));
    }
}
