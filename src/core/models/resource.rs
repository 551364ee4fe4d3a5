//! Community resource donations (food, clothes, money)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of resource donated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Food parcels
    Food,
    /// Clothing
    Clothes,
    /// Monetary donation (requires verified payment)
    Money,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Clothes => write!(f, "clothes"),
            Self::Money => write!(f, "money"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "clothes" | "clothing" => Ok(Self::Clothes),
            "money" | "cash" => Ok(Self::Money),
            _ => Err(format!("Invalid resource kind: {s}. Use: food, clothes, money")),
        }
    }
}

/// An entry in the append-only resource ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDonation {
    /// Unique identifier (`RES-N`)
    pub id: String,
    /// What was donated
    pub kind: ResourceKind,
    /// Who donated it (free text, not a donor id)
    pub donor_name: String,
    /// Free-text details, e.g. "5kg Rice"
    pub details: String,
    /// Date recorded
    pub date: NaiveDate,
}

/// Input for recording a resource donation
#[derive(Debug, Clone, Deserialize)]
pub struct NewResourceDonation {
    /// What was donated
    pub kind: ResourceKind,
    /// Who donated it
    pub donor_name: String,
    /// Free-text details
    pub details: String,
    /// Set by the caller once an external payment check has passed
    #[serde(default)]
    pub payment_verified: bool,
}
