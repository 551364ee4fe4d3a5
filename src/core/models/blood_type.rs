//! ABO/Rh blood types
//!
//! A closed set of eight values, serialized in their display form (`"AB+"`).

use serde::{Deserialize, Serialize};

/// One of the eight ABO/Rh blood types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    /// A positive
    #[serde(rename = "A+")]
    APos,
    /// A negative
    #[serde(rename = "A-")]
    ANeg,
    /// B positive
    #[serde(rename = "B+")]
    BPos,
    /// B negative
    #[serde(rename = "B-")]
    BNeg,
    /// AB positive (universal recipient)
    #[serde(rename = "AB+")]
    AbPos,
    /// AB negative
    #[serde(rename = "AB-")]
    AbNeg,
    /// O positive
    #[serde(rename = "O+")]
    OPos,
    /// O negative (universal donor)
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodType {
    /// All blood types, in the order the inventory lists them
    pub const ALL: [Self; 8] = [
        Self::APos,
        Self::ANeg,
        Self::BPos,
        Self::BNeg,
        Self::AbPos,
        Self::AbNeg,
        Self::OPos,
        Self::ONeg,
    ];

    /// Display form, e.g. `"O-"`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APos => "A+",
            Self::ANeg => "A-",
            Self::BPos => "B+",
            Self::BNeg => "B-",
            Self::AbPos => "AB+",
            Self::AbNeg => "AB-",
            Self::OPos => "O+",
            Self::ONeg => "O-",
        }
    }
}

impl std::fmt::Display for BloodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BloodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!("Invalid blood type: {s}. Use: A+, A-, B+, B-, AB+, AB-, O+, O-")
            })
    }
}
