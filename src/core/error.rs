//! Domain errors
//!
//! Unknown ids are not errors (see [`Outcome`](super::models::Outcome)) and
//! "no compatible donor" is a plain `None`.

use thiserror::Error;

/// Errors raised by domain operations
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input; the operation was not applied
    #[error("{0}")]
    Validation(String),

    /// A collaborator (persistence, messaging) failed
    #[error("{collaborator} failed: {message}")]
    Collaborator {
        /// Which collaborator failed
        collaborator: &'static str,
        /// What it reported
        message: String,
    },
}

impl DomainError {
    /// Shorthand for a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this is a validation error
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
