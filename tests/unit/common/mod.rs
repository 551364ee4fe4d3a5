//! Shared test fixtures and helpers
//!
//! - `mocks.rs` - In-memory implementations of the collaborator ports
//! - `fixtures.rs` - Builders for domain inputs

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
