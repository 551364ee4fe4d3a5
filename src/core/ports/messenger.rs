//! Messaging port
//!
//! The core composes messages; delivering them is somebody else's job.

use crate::core::models::OutboundMessage;

/// Hands composed messages to a transport
pub trait Messenger: Send + Sync {
    /// Deliver (or queue for delivery) one message
    fn deliver(&self, message: &OutboundMessage) -> anyhow::Result<()>;
}
