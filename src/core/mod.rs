//! Core domain logic for lifeflow
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Donor, Recipient, BloodBagUnit, AppNotification)
//! - `services/` - Compatibility, directory, alerting and the coordinator
//! - `ports/` - Trait definitions for external dependencies

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::DomainError;
