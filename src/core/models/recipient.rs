//! Recipient model
//!
//! A recipient is a match *request* for a blood type, not a patient chart.
//! Requests are never edited and are kept after they are fulfilled.

use serde::{Deserialize, Serialize};

use super::BloodType;

/// Age recorded on a request that does not supply one
pub const DEFAULT_REQUEST_AGE: u32 = 30;

/// Contact recorded on a request that does not supply one
pub const DEFAULT_REQUEST_CONTACT: &str = "System Generated";

/// Condition recorded on a request whose condition is empty
pub const DEFAULT_CONDITION: &str = "Emergency";

/// A submitted match request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    /// Unique identifier (`REQ-N`)
    pub id: String,
    /// Patient or requester name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Blood type needed
    pub blood_type: BloodType,
    /// Contact for the request
    pub contact: String,
    /// Optional e-mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Free-text condition
    pub condition: String,
}

/// Input for a match request
#[derive(Debug, Clone, Deserialize)]
pub struct NewMatchRequest {
    /// Patient or requester name
    pub name: String,
    /// Blood type needed
    pub blood_type: BloodType,
    /// Age in years (defaults to 30)
    #[serde(default)]
    pub age: Option<u32>,
    /// Contact (defaults to "System Generated")
    #[serde(default)]
    pub contact: Option<String>,
    /// Optional e-mail address
    #[serde(default)]
    pub email: Option<String>,
    /// Condition (defaults to "Emergency")
    #[serde(default)]
    pub condition: Option<String>,
}

impl NewMatchRequest {
    /// Request with only the required fields set
    #[must_use]
    pub fn new(name: impl Into<String>, blood_type: BloodType) -> Self {
        Self {
            name: name.into(),
            blood_type,
            age: None,
            contact: None,
            email: None,
            condition: None,
        }
    }
}
