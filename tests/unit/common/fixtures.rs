//! Test fixtures and builders
//!
//! Provides convenient builders for creating test data.

use chrono::NaiveDate;
use lifeflow::core::models::{
    BloodBagUnit, BloodType, NewDonor, NewMatchRequest, NotificationSettings, Snapshot,
};
use lifeflow::core::services::Coordinator;

use super::mocks::{FixedClock, MemoryStore, RecordingMessenger};

/// The day [`FixedClock::default`] is stopped on
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Builder for donor registrations
pub struct DonorBuilder {
    input: NewDonor,
}

impl DonorBuilder {
    pub fn new(name: &str, blood_type: BloodType) -> Self {
        Self {
            input: NewDonor {
                name: name.to_string(),
                age: Some(24),
                blood_type,
                contact: "9870000101".to_string(),
                email: None,
            },
        }
    }

    pub fn contact(mut self, contact: &str) -> Self {
        self.input.contact = contact.to_string();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.input.age = Some(age);
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.input.email = Some(email.to_string());
        self
    }

    pub fn build(self) -> NewDonor {
        self.input
    }
}

/// Match request with only the required fields
pub fn request(name: &str, blood_type: BloodType) -> NewMatchRequest {
    NewMatchRequest::new(name, blood_type)
}

/// A unit donated on [`today`]
pub fn bag(id: &str, blood_type: BloodType) -> BloodBagUnit {
    BloodBagUnit::new(id.to_string(), blood_type, "450ml".to_string(), today())
}

/// Snapshot with two units of every type, so no low-stock alert fires
pub fn stocked_snapshot() -> Snapshot {
    let bags = BloodType::ALL
        .into_iter()
        .enumerate()
        .flat_map(|(i, t)| [bag(&format!("BAG-{}", i * 2 + 1), t), bag(&format!("BAG-{}", i * 2 + 2), t)])
        .collect();
    Snapshot {
        bags,
        ..Snapshot::default()
    }
}

/// Coordinator over `store`, a recording messenger and the fixed clock
pub fn coordinator_with(store: &MemoryStore, messenger: &RecordingMessenger) -> Coordinator {
    Coordinator::open(
        Box::new(store.clone()),
        Box::new(messenger.clone()),
        Box::new(FixedClock::default()),
        NotificationSettings::default(),
    )
    .unwrap()
}

/// Coordinator over an empty in-memory store
pub fn coordinator() -> (Coordinator, MemoryStore) {
    let store = MemoryStore::new();
    let coordinator = coordinator_with(&store, &RecordingMessenger::new());
    (coordinator, store)
}
