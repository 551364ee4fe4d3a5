//! Outbound message composition
//!
//! Only addressing and content live here; delivery belongs to the
//! [`Messenger`](crate::core::ports::Messenger) port.

use crate::core::error::DomainError;
use crate::core::models::{Channel, Donor, OutboundMessage};

/// Subject of the urgent blood request e-mail
pub const URGENT_SUBJECT: &str = "URGENT: Life-Saving Blood Donation Needed";

/// Contact address quoted in the e-mail signature
pub const TEAM_CONTACT: &str = "blooddonationlifeflowai@gmail.com";

/// SMS asking a donor to come in
#[must_use]
pub fn donor_alert(donor: &Donor) -> OutboundMessage {
    OutboundMessage {
        channel: Channel::Sms,
        to: donor.contact.clone(),
        subject: None,
        body: format!(
            "LifeFlow AI: Hi {}, a patient needs {} blood. If you are available and eligible, please visit the blood bank today.",
            donor.name, donor.blood_type
        ),
    }
}

/// Confirmation shown once a donor alert has been handed off
#[must_use]
pub fn alert_confirmation(donor: &Donor) -> String {
    format!("Alert sent to {} ({})", donor.name, donor.contact)
}

/// Urgent request e-mail to `to`, addressed to `donor_name`
pub fn urgent_request_email(to: &str, donor_name: &str) -> Result<OutboundMessage, DomainError> {
    let to = to.trim();
    let donor_name = donor_name.trim();
    if to.is_empty() || donor_name.is_empty() {
        return Err(DomainError::validation("Missing recipient info"));
    }

    Ok(OutboundMessage {
        channel: Channel::Email,
        to: to.to_string(),
        subject: Some(URGENT_SUBJECT.to_string()),
        body: format!(
            "Hello {donor_name},\n\n\
             We urgently need blood for a patient in critical condition. Your donation could save a life today. \
             If you are available and eligible to donate, please consider helping.\n\n\
             Your support would mean more than words can express.\n\n\
             Thank you,\n\
             LifeFlow AI Team\n\
             (Contact: {TEAM_CONTACT})"
        ),
    })
}
