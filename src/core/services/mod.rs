//! Coordination services
//!
//! Pure logic over domain models; all I/O goes through the ports.
//!
//! - [`compatibility`] - Which donor types may give to which recipients
//! - [`directory`] - Donors, match requests, inventory, resource ledger
//! - [`alerting`] - Notification feed and its triggers
//! - [`messaging`] - Donor alerts and urgent request e-mails
//! - [`chat`] - FAQ answers with a hosted-model fallback
//! - [`coordinator`] - Owns the state and drives the collaborators

pub mod alerting;
pub mod chat;
pub mod compatibility;
pub mod coordinator;
pub mod directory;
pub mod faq;
pub mod ids;
pub mod messaging;

pub use alerting::{AlertEngine, LOW_STOCK_THRESHOLD, NOTIFICATION_CAP, low_stock_title};
pub use chat::{ChatReply, ReplySource, reply};
pub use compatibility::{can_donate, compatible_donor_types, find_best_match};
pub use coordinator::{Coordinator, Durability, Persisted, UNSAVED_WARNING};
pub use directory::{Directory, MatchOutcome, is_valid_contact};
