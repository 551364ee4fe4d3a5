//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::models::{
    AppNotification, BloodBagUnit, BloodType, Collection, Donor, Recipient, ResourceDonation,
};
use crate::core::services::Persisted;

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for taking a blood bag into inventory
#[derive(Debug, Deserialize)]
pub struct BagIntakeRequest {
    /// Blood type of the unit
    #[serde(alias = "bloodType")]
    pub blood_type: BloodType,
    /// Volume label (defaults to 450ml)
    #[serde(default)]
    pub volume: Option<String>,
}

/// Request body for a match lookup that records nothing
#[derive(Debug, Deserialize)]
pub struct MatchLookupRequest {
    /// Blood type needed
    #[serde(alias = "bloodType")]
    pub blood_type: BloodType,
}

/// Request body for the urgent request e-mail
#[derive(Debug, Deserialize)]
pub struct UrgentEmailRequest {
    /// Recipient address
    #[serde(default)]
    pub to: Option<String>,
    /// Name the e-mail is addressed to
    #[serde(default, alias = "donorName")]
    pub donor_name: Option<String>,
}

/// Request body for the chat assistant
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Question text
    pub message: String,
}

/// Request body for changing alert switches; absent fields stay as they are
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    /// Low-stock alerts
    #[serde(default)]
    pub inventory_alerts: Option<bool>,
    /// Match alerts
    #[serde(default)]
    pub match_alerts: Option<bool>,
    /// Sync/system alerts
    #[serde(default)]
    pub system_alerts: Option<bool>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Result of any mutation
#[derive(Debug, Serialize)]
pub struct MutationData<T> {
    /// The record after the change
    pub record: T,
    /// Whether the change reached durable storage
    pub saved: bool,
    /// Explanation when `saved` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Notifications raised by the change
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<AppNotification>,
}

impl<T> From<Persisted<T>> for MutationData<T> {
    fn from(persisted: Persisted<T>) -> Self {
        Self {
            saved: persisted.durability.is_saved(),
            warning: persisted.durability.warning().map(str::to_string),
            record: persisted.value,
            alerts: persisted.alerts,
        }
    }
}

/// Status endpoint response data
#[derive(Debug, Serialize)]
pub struct StatusData {
    /// Registered donors
    pub donors: usize,
    /// Match requests
    pub requests: usize,
    /// Units in inventory
    pub bags: usize,
    /// Resource ledger entries
    pub resources: usize,
    /// Unread notifications
    pub unread_notifications: usize,
    /// Units per blood type
    pub stock: BTreeMap<BloodType, usize>,
    /// Types at or below the low-stock threshold
    pub low_stock: Vec<BloodType>,
    /// Change counter
    pub revision: u64,
}

/// Donors list response data
#[derive(Debug, Serialize)]
pub struct DonorsData {
    /// Donors, newest first
    pub donors: Vec<Donor>,
}

/// Match requests list response data
#[derive(Debug, Serialize)]
pub struct RecipientsData {
    /// Requests, newest first
    pub recipients: Vec<Recipient>,
}

/// Inventory list response data
#[derive(Debug, Serialize)]
pub struct BagsData {
    /// Units, newest first
    pub bags: Vec<BloodBagUnit>,
}

/// Resource ledger response data
#[derive(Debug, Serialize)]
pub struct ResourcesData {
    /// Entries, newest first
    pub resources: Vec<ResourceDonation>,
}

/// Notification feed response data
#[derive(Debug, Serialize)]
pub struct NotificationsData {
    /// Notifications, newest first
    pub notifications: Vec<AppNotification>,
    /// How many are unread
    pub unread: usize,
}

/// Compatibility table row
#[derive(Debug, Serialize)]
pub struct CompatibilityData {
    /// Recipient blood type
    pub recipient: BloodType,
    /// Donor types that may give to it
    pub donor_types: Vec<BloodType>,
}

/// Match lookup response data
#[derive(Debug, Serialize)]
pub struct MatchData {
    /// Blood type needed
    pub blood_type: BloodType,
    /// Donor types considered
    pub donor_types: Vec<BloodType>,
    /// First compatible donor, if any
    pub matched: Option<Donor>,
}

/// Change feed response data
#[derive(Debug, Serialize)]
pub struct EventsData {
    /// Current change counter
    pub revision: u64,
    /// Collections changed after the requested revision
    pub changed: Vec<Collection>,
}

/// Outbound message response data
#[derive(Debug, Serialize)]
pub struct MessageData {
    /// Who the message was addressed to
    pub to: String,
    /// Confirmation text
    pub message: String,
}

/// Alert evaluation response data
#[derive(Debug, Serialize)]
pub struct AlertCheckData {
    /// Notifications raised
    pub alerts: Vec<AppNotification>,
    /// Whether new notifications were saved
    pub saved: bool,
}
