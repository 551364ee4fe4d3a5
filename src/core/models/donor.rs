//! Donor model
//!
//! A registered blood donor. Donors are owned by the directory and are the
//! candidates considered when a match request comes in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::BloodType;

/// Age recorded when a registration does not supply one
pub const DEFAULT_DONOR_AGE: u32 = 18;

/// A registered donor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    /// Unique identifier (`DNR-N`)
    pub id: String,

    /// Display name
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Donor blood type
    pub blood_type: BloodType,

    /// Ten-digit phone number
    pub contact: String,

    /// Optional e-mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Date of the most recent donation
    pub last_donation: NaiveDate,
}

/// Registration input for a donor
#[derive(Debug, Clone, Deserialize)]
pub struct NewDonor {
    /// Display name
    pub name: String,
    /// Age in years (defaults to 18)
    #[serde(default)]
    pub age: Option<u32>,
    /// Donor blood type
    pub blood_type: BloodType,
    /// Phone number, must be exactly ten digits
    pub contact: String,
    /// Optional e-mail address
    #[serde(default)]
    pub email: Option<String>,
}

/// Fields to merge into an existing donor; `None` leaves a field untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonorUpdate {
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New age
    #[serde(default)]
    pub age: Option<u32>,
    /// New blood type
    #[serde(default)]
    pub blood_type: Option<BloodType>,
    /// New phone number (validated like registration)
    #[serde(default)]
    pub contact: Option<String>,
    /// New e-mail address
    #[serde(default)]
    pub email: Option<String>,
    /// New last donation date
    #[serde(default)]
    pub last_donation: Option<NaiveDate>,
}

impl DonorUpdate {
    /// Whether the update carries no fields at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.blood_type.is_none()
            && self.contact.is_none()
            && self.email.is_none()
            && self.last_donation.is_none()
    }
}

impl Donor {
    /// Merge the supplied fields in place
    pub fn apply(&mut self, update: DonorUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(blood_type) = update.blood_type {
            self.blood_type = blood_type;
        }
        if let Some(contact) = update.contact {
            self.contact = contact;
        }
        if let Some(email) = update.email {
            self.email = Some(email).filter(|e| !e.trim().is_empty());
        }
        if let Some(date) = update.last_donation {
            self.last_donation = date;
        }
    }
}
