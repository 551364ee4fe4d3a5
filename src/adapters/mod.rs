//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json_store` - JSON data file persistence with origin tagging
//! - `outbox` - JSON-lines outbox for composed messages
//! - `watch` - Data file watcher that wakes the server loop (feature `server`)
//! - `gemini` - Hosted text completion (feature `llm`)

#[cfg(feature = "llm")]
pub mod gemini;
pub mod json_store;
pub mod outbox;
#[cfg(feature = "notify")]
pub mod watch;

#[cfg(feature = "llm")]
pub use gemini::GeminiCompletion;
pub use json_store::{FileMeta, JsonFileStore};
pub use outbox::OutboxMessenger;
#[cfg(feature = "notify")]
pub use watch::DataFileWatcher;
