//! Text completion port
//!
//! The chat assistant treats the hosted model as an opaque
//! text-in/text-out function.

use thiserror::Error;

/// Why a completion could not be produced
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No network backend is available
    #[error("completion backend is offline")]
    Offline,

    /// The backend needs an API key that is not set
    #[error("API key not configured")]
    Unconfigured,

    /// The backend was reached but failed
    #[error("completion failed: {0}")]
    Failed(String),
}

/// A hosted text-completion service
pub trait TextCompletion: Send + Sync {
    /// Produce a reply to `prompt`
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Backend used when no network model is compiled in
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineCompletion;

impl TextCompletion for OfflineCompletion {
    fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Err(CompletionError::Offline)
    }
}
