//! lifeflow - Blood-donation coordination
//!
//! This library provides the coordination core (blood-type compatibility,
//! the donor/request/inventory directory, and the alerting engine) together
//! with the adapters, HTTP-agnostic API and configuration used by the CLI.

// Warn on all clippy lints in this crate
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![deny(unsafe_code)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
