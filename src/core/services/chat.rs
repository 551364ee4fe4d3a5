//! Chat assistant - FAQ first, hosted model second
//!
//! Never touches directory state.

use crate::core::ports::{CompletionError, TextCompletion};

use super::faq::local_answer;

/// Reply when no network model is available
pub const OFFLINE_REPLY: &str = "I'm currently offline, but I can still assist you! I've been pre-loaded with over 100 responses to help with: \n\n\
• Eligibility Requirements (age, weight, height)\n\
• Donation Rules & Frequency (whole blood, platelets, etc.)\n\
• Blood Types & Compatibility\n\
• Medications & Health Conditions\n\
• Travel Deferrals\n\
• Post-Donation Care\n\
• Team Info (Vaghu, Aayan, Akash, Shreyash)\n\n\
How can I help you save a life today?";

/// Reply when the hosted model has no API key
pub const UNCONFIGURED_REPLY: &str = "API Key not configured. Please check system settings.";

/// Reply when the hosted model could not be reached
pub const FAILURE_REPLY: &str = "I'm having trouble connecting to my advanced brain. Please ask a common question about donation eligibility or safety!";

/// Reply when the hosted model answered with nothing
pub const EMPTY_REPLY: &str =
    "I couldn't generate a specific response. Please try asking about eligibility or requirements.";

/// Instruction sent along with every hosted completion
pub const SYSTEM_INSTRUCTION: &str = "You are LifeFlow AI, a highly specialized medical assistant for a blood donation system.
You have access to 100+ protocols regarding blood donation.

Key Knowledge:
- Whole blood (56 days), Platelets (7 days), Power Red (112 days).
- Hemoglobin min: 12.5 (F) / 13.0 (M).
- Common deferrals: Antibiotics (7 days), Tattoos (3 months if non-sterile), Travel (3 months for malaria).
- Team: Vaghu (O+), Aayan (B-), Akash (AB+), Shreyash (O+).

Always provide professional, encouraging, and medically grounded advice. Refer users to doctors for complex personal medical history.";

/// Where a reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// Built-in FAQ
    Faq,
    /// Hosted model
    Model,
    /// Canned fallback after the model was unavailable
    Fallback,
}

/// A chat reply
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChatReply {
    /// Text shown to the user
    pub text: String,
    /// Where it came from
    pub source: ReplySource,
}

impl ChatReply {
    fn new(text: impl Into<String>, source: ReplySource) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// Answer `message`, consulting `backend` only when the FAQ has nothing
pub fn reply(message: &str, backend: &dyn TextCompletion) -> ChatReply {
    if let Some(answer) = local_answer(message) {
        return ChatReply::new(answer, ReplySource::Faq);
    }

    match backend.complete(message) {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                ChatReply::new(EMPTY_REPLY, ReplySource::Fallback)
            } else {
                ChatReply::new(text, ReplySource::Model)
            }
        },
        Err(CompletionError::Offline) => ChatReply::new(OFFLINE_REPLY, ReplySource::Fallback),
        Err(CompletionError::Unconfigured) => {
            ChatReply::new(UNCONFIGURED_REPLY, ReplySource::Fallback)
        },
        Err(CompletionError::Failed(reason)) => {
            log::warn!("Completion failed: {reason}");
            ChatReply::new(FAILURE_REPLY, ReplySource::Fallback)
        },
    }
}
