//! API errors and their HTTP status mapping
//!
//! Malformed bodies and parameters are `BAD_REQUEST`. Domain rule violations
//! (bad contact number, unverified money donation) are `VALIDATION_FAILED`.
//! A failing messenger or data file surfaces as `UPSTREAM_FAILED`.

use serde::Serialize;
use thiserror::Error;

use crate::core::DomainError;

/// Error categories, one per HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown donor, bag or route (404)
    NotFound,
    /// Unparseable body, path or query (400)
    BadRequest,
    /// Input rejected by a domain rule (400)
    Validation,
    /// Messenger or persistence failure (502)
    Upstream,
    /// Anything else (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest | Self::Validation => 400,
            Self::Upstream => 502,
            Self::Internal => 500,
        }
    }

    /// Code string carried in the response envelope
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::Validation => "VALIDATION_FAILED",
            Self::Upstream => "UPSTREAM_FAILED",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// Handler error
#[derive(Debug, Clone, Error)]
#[error("{}: {message}", code.as_str())]
pub struct ApiError {
    /// Category (determines HTTP status)
    pub code: ErrorCode,
    /// Message shown to the caller
    pub message: String,
}

impl ApiError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Unknown record or route
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Unparseable input
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Input rejected by a domain rule
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }

    /// Unexpected failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::validation(message),
            err @ DomainError::Collaborator { .. } => Self::new(ErrorCode::Upstream, err.to_string()),
        }
    }
}

/// Error body of the response envelope
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Code string
    pub code: String,
    /// Message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}
