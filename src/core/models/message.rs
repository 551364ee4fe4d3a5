//! Outbound messages handed to the messaging collaborator

use serde::{Deserialize, Serialize};

/// How a message should reach its recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Text message to a phone number
    Sms,
    /// E-mail
    Email,
}

/// A fully addressed message, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Delivery channel
    pub channel: Channel,
    /// Phone number or e-mail address
    pub to: String,
    /// Subject line (e-mail only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Message body
    pub body: String,
}
