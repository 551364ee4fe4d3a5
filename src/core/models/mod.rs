//! Domain models for lifeflow
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`BloodType`] - The eight ABO/Rh types
//! - [`Donor`] / [`Recipient`] - Who can give, who needs
//! - [`BloodBagUnit`] - A unit in inventory
//! - [`ResourceDonation`] - Food/clothes/money ledger entry
//! - [`AppNotification`] - An entry in the alert feed
//! - [`Snapshot`] - Everything the persistence port stores

mod actor;
mod blood_bag;
mod blood_type;
mod donor;
mod message;
mod notification;
mod outcome;
mod recipient;
mod resource;
mod snapshot;

pub use actor::{Actor, Role};
pub use blood_bag::{BloodBagUnit, DEFAULT_VOLUME, SHELF_LIFE_DAYS, expiry_for};
pub use blood_type::BloodType;
pub use donor::{DEFAULT_DONOR_AGE, Donor, DonorUpdate, NewDonor};
pub use message::{Channel, OutboundMessage};
pub use notification::{
    AppNotification, NotificationCategory, NotificationDraft, NotificationSettings,
};
pub use outcome::Outcome;
pub use recipient::{
    DEFAULT_CONDITION, DEFAULT_REQUEST_AGE, DEFAULT_REQUEST_CONTACT, NewMatchRequest, Recipient,
};
pub use resource::{NewResourceDonation, ResourceDonation, ResourceKind};
pub use snapshot::{Collection, IdSequences, Snapshot};
