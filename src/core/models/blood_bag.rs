//! Blood bag inventory units

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::BloodType;

/// Shelf life of a whole-blood unit in days
pub const SHELF_LIFE_DAYS: u64 = 42;

/// Volume recorded when intake does not specify one
pub const DEFAULT_VOLUME: &str = "450ml";

/// A unit of blood held in inventory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodBagUnit {
    /// Unique identifier (`BAG-N`)
    pub id: String,
    /// Blood type of the unit
    pub blood_type: BloodType,
    /// Volume as entered at intake (display only)
    pub volume: String,
    /// Date the unit was taken in
    pub donation_date: NaiveDate,
    /// Date the unit expires
    pub expiry_date: NaiveDate,
}

impl BloodBagUnit {
    /// Build a unit taken in on `donation_date`, expiring after the fixed shelf life
    #[must_use]
    pub fn new(id: String, blood_type: BloodType, volume: String, donation_date: NaiveDate) -> Self {
        Self {
            id,
            blood_type,
            volume,
            donation_date,
            expiry_date: expiry_for(donation_date),
        }
    }

    /// Whether the unit is past its expiry date on `today`
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expiry_date
    }
}

/// Expiry date for a unit donated on `donation_date`
#[must_use]
pub fn expiry_for(donation_date: NaiveDate) -> NaiveDate {
    donation_date
        .checked_add_days(Days::new(SHELF_LIFE_DAYS))
        .unwrap_or(NaiveDate::MAX)
}
