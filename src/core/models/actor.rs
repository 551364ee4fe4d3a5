//! The acting user, as supplied by the caller
//!
//! Authentication is not handled here; an `Actor` is plain input to the
//! alerting rules.

use serde::{Deserialize, Serialize};

use super::BloodType;

/// Role of the acting user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A blood donor
    #[default]
    Donor,
    /// Someone requesting blood
    Recipient,
    /// Blood-bank staff
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Donor => write!(f, "donor"),
            Self::Recipient => write!(f, "recipient"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "recipient" => Ok(Self::Recipient),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("Invalid role: {s}. Use: donor, recipient, admin")),
        }
    }
}

/// The current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Role
    pub role: Role,
    /// Blood type, when known
    #[serde(default)]
    pub blood_type: Option<BloodType>,
    /// Display name, when known
    #[serde(default)]
    pub name: Option<String>,
}

impl Actor {
    /// A donor of the given blood type
    #[must_use]
    pub const fn donor(blood_type: BloodType) -> Self {
        Self {
            role: Role::Donor,
            blood_type: Some(blood_type),
            name: None,
        }
    }

    /// Blood type if this actor is a donor who has one on record
    #[must_use]
    pub const fn donor_blood_type(&self) -> Option<BloodType> {
        match (self.role, self.blood_type) {
            (Role::Donor, Some(t)) => Some(t),
            _ => None,
        }
    }
}
