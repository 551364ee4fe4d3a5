//! Tests for the coordinator: mutations, durability, triggers and sync

use lifeflow::core::DomainError;
use lifeflow::core::models::{
    Actor, BloodType, Channel, Collection, DonorUpdate, NotificationCategory, Outcome, Snapshot,
};
use lifeflow::core::services::{Durability, UNSAVED_WARNING};

use crate::common::{
    DonorBuilder, MemoryStore, RecordingMessenger, coordinator, coordinator_with, request,
    stocked_snapshot, today,
};

// =============================================================================
// MATCHING
// =============================================================================

#[test]
fn test_match_follows_registration_order() {
    let (mut coordinator, _store) = coordinator();

    coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();
    let first = coordinator
        .submit_match_request(request("Sahil", BloodType::OPos), None)
        .unwrap();
    assert_eq!(first.value.matched.unwrap().name, "Vaghu");

    coordinator
        .register_donor(
            DonorBuilder::new("Aayan", BloodType::ONeg)
                .contact("9870000102")
                .build(),
        )
        .unwrap();
    let second = coordinator
        .submit_match_request(request("Sahil", BloodType::OPos), None)
        .unwrap();
    assert_eq!(second.value.matched.unwrap().name, "Aayan");
}

#[test]
fn test_match_raises_donor_matched_alert() {
    let (mut coordinator, store) = coordinator();
    coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();

    let persisted = coordinator
        .submit_match_request(request("Sahil", BloodType::APos), None)
        .unwrap();

    assert_eq!(persisted.alerts.len(), 1);
    assert_eq!(persisted.alerts[0].title, "Donor Matched: Sahil");
    assert_eq!(store.saved().notifications.len(), 1);
    assert_eq!(store.saved().recipients.len(), 1);
}

#[test]
fn test_unmatched_request_raises_nothing() {
    let (mut coordinator, _store) = coordinator();
    let persisted = coordinator
        .submit_match_request(request("Riya", BloodType::ONeg), None)
        .unwrap();
    assert!(persisted.value.matched.is_none());
    assert!(persisted.alerts.is_empty());
}

#[test]
fn test_donor_actor_gets_personal_match() {
    let (mut coordinator, _store) = coordinator();
    coordinator
        .submit_match_request(request("Sahil", BloodType::BPos), None)
        .unwrap();
    let actor = Actor::donor(BloodType::ONeg);

    let persisted = coordinator
        .submit_match_request(request("Riya", BloodType::APos), Some(&actor))
        .unwrap();
    let titles: Vec<_> = persisted.alerts.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Match Available: Sahil"]);

    // Already unread: evaluating again is quiet
    let again = coordinator.evaluate_personal_match(&actor);
    assert!(again.value.is_none());
}

#[test]
fn test_own_request_is_not_a_personal_match() {
    let (mut coordinator, _store) = coordinator();
    let actor = Actor::donor(BloodType::ONeg);

    let persisted = coordinator
        .submit_match_request(request("Riya", BloodType::ONeg), Some(&actor))
        .unwrap();
    assert!(persisted.alerts.is_empty());
    assert!(coordinator.notifications().is_empty());
}

#[test]
fn test_lookup_records_nothing() {
    let (mut coordinator, store) = coordinator();
    coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();
    let saves = store.saves().len();

    assert_eq!(coordinator.find_match(BloodType::AbPos).unwrap().name, "Vaghu");
    assert!(coordinator.find_match(BloodType::ONeg).is_none());
    assert!(coordinator.directory().recipients().is_empty());
    assert_eq!(store.saves().len(), saves);
}

// =============================================================================
// PERSISTENCE
// =============================================================================

#[test]
fn test_register_saves_donor_collection() {
    let (mut coordinator, store) = coordinator();
    let persisted = coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();

    assert_eq!(persisted.durability, Durability::Saved);
    assert_eq!(persisted.value.last_donation, today());
    assert_eq!(store.saves(), vec![Collection::Donors]);
    assert_eq!(store.saved().donors, vec![persisted.value]);
}

#[test]
fn test_failed_save_keeps_change_in_memory() {
    let (mut coordinator, store) = coordinator();
    store.set_failing(true);

    let persisted = coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();

    assert!(!persisted.durability.is_saved());
    let warning = persisted.durability.warning().unwrap();
    assert!(warning.starts_with(UNSAVED_WARNING));
    assert!(warning.contains("disk full"));

    assert_eq!(coordinator.directory().donors().len(), 1);
    assert!(store.saved().donors.is_empty());

    // Later saves carry the whole collection, including the unsaved donor
    store.set_failing(false);
    coordinator
        .register_donor(
            DonorBuilder::new("Aayan", BloodType::ONeg)
                .contact("9870000102")
                .build(),
        )
        .unwrap();
    assert_eq!(store.saved().donors.len(), 2);
}

#[test]
fn test_removed_donor_id_is_not_reissued() {
    let (mut coordinator, store) = coordinator();
    coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();
    let aayan = coordinator
        .register_donor(DonorBuilder::new("Aayan", BloodType::BNeg).build())
        .unwrap()
        .value;
    assert!(coordinator.remove_donor(&aayan.id).applied().is_some());

    let akash = coordinator
        .register_donor(DonorBuilder::new("Akash", BloodType::AbPos).build())
        .unwrap()
        .value;
    assert_ne!(akash.id, aayan.id);
    assert_eq!(store.saved().sequences.donors, 3);
}

#[test]
fn test_validation_error_saves_nothing() {
    let (mut coordinator, store) = coordinator();
    let err = coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).contact("123").build())
        .unwrap_err();
    assert!(err.is_validation());
    assert!(store.saves().is_empty());
    assert_eq!(coordinator.revision(), 0);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let (mut coordinator, store) = coordinator();

    let update = DonorUpdate {
        age: Some(40),
        ..DonorUpdate::default()
    };
    assert!(coordinator.update_donor("DNR-9", update).unwrap().is_not_found());
    assert!(coordinator.remove_donor("DNR-9").is_not_found());
    assert!(coordinator.dispatch_blood_bag("BAG-9").is_not_found());
    assert!(store.saves().is_empty());
}

// =============================================================================
// INVENTORY
// =============================================================================

#[test]
fn test_intake_into_empty_inventory_raises_low_stock() {
    let (mut coordinator, store) = coordinator();
    let persisted = coordinator.intake_blood_bag(BloodType::OPos, "450ml");

    assert_eq!(persisted.alerts.len(), 8);
    assert!(persisted
        .alerts
        .iter()
        .all(|n| n.category == NotificationCategory::Inventory));
    assert_eq!(store.saves(), vec![Collection::Bags, Collection::Notifications]);
}

#[test]
fn test_well_stocked_intake_is_quiet() {
    let store = MemoryStore::with_snapshot(stocked_snapshot());
    let mut coordinator = coordinator_with(&store, &RecordingMessenger::new());

    let persisted = coordinator.intake_blood_bag(BloodType::AbNeg, "");
    assert!(persisted.alerts.is_empty());
    assert_eq!(persisted.value.id, "BAG-17");
    assert_eq!(store.saves(), vec![Collection::Bags]);
}

#[test]
fn test_dispatch_to_one_unit_raises_alert() {
    let store = MemoryStore::with_snapshot(stocked_snapshot());
    let mut coordinator = coordinator_with(&store, &RecordingMessenger::new());

    let persisted = coordinator.dispatch_blood_bag("BAG-1").applied().unwrap();
    assert_eq!(persisted.value.blood_type, BloodType::APos);
    assert_eq!(persisted.alerts.len(), 1);
    assert_eq!(persisted.alerts[0].title, "Critical Stock: A+");
    assert!(coordinator.directory().bags().iter().all(|b| b.id != "BAG-1"));
    assert!(store.saved().bags.iter().all(|b| b.id != "BAG-1"));
}

#[test]
fn test_check_inventory_dedups_unread() {
    let (mut coordinator, _store) = coordinator();
    assert_eq!(coordinator.check_inventory().alerts.len(), 8);
    assert!(coordinator.check_inventory().alerts.is_empty());

    coordinator.mark_all_read();
    assert_eq!(coordinator.check_inventory().alerts.len(), 8);
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

#[test]
fn test_mark_read_with_nothing_unread_saves_nothing() {
    let (mut coordinator, store) = coordinator();
    let persisted = coordinator.mark_all_read();
    assert_eq!(persisted.value, 0);
    assert!(store.saves().is_empty());
}

#[test]
fn test_clear_empties_feed() {
    let (mut coordinator, store) = coordinator();
    coordinator.check_inventory();
    assert_eq!(coordinator.unread_count(), 8);

    assert_eq!(coordinator.clear_notifications().value, 8);
    assert!(coordinator.notifications().is_empty());
    assert!(store.saved().notifications.is_empty());
}

#[test]
fn test_disabled_category_is_not_produced() {
    let (mut coordinator, _store) = coordinator();
    let mut settings = coordinator.settings();
    settings.inventory_alerts = false;
    coordinator.set_settings(settings);

    assert!(coordinator.check_inventory().alerts.is_empty());
}

// =============================================================================
// MESSAGING
// =============================================================================

#[test]
fn test_notify_donor_sends_sms() {
    let store = MemoryStore::new();
    let messenger = RecordingMessenger::new();
    let mut coordinator = coordinator_with(&store, &messenger);
    let donor = coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap()
        .value;

    let confirmation = coordinator.notify_donor(&donor.id).unwrap();
    assert_eq!(
        confirmation,
        Outcome::Applied("Alert sent to Vaghu (9870000101)".to_string())
    );

    let sent = messenger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].channel, Channel::Sms);
    assert_eq!(sent[0].to, "9870000101");
    assert!(sent[0].body.contains("O+"));

    assert!(coordinator.notify_donor("DNR-99").unwrap().is_not_found());
}

#[test]
fn test_messenger_failure_is_reported() {
    let store = MemoryStore::new();
    let mut coordinator = coordinator_with(&store, &RecordingMessenger::failing());
    let donor = coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap()
        .value;

    let err = coordinator.notify_donor(&donor.id).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Collaborator {
            collaborator: "messenger",
            ..
        }
    ));
}

#[test]
fn test_urgent_request_requires_recipient() {
    let store = MemoryStore::new();
    let messenger = RecordingMessenger::new();
    let coordinator = coordinator_with(&store, &messenger);

    let err = coordinator.send_urgent_request("", "Vaghu").unwrap_err();
    assert_eq!(err.to_string(), "Missing recipient info");
    assert!(messenger.sent().is_empty());

    let sent = coordinator
        .send_urgent_request("vaghu@example.com", "Vaghu")
        .unwrap();
    assert_eq!(sent.channel, Channel::Email);
    assert!(sent.body.starts_with("Hello Vaghu,"));
    assert_eq!(messenger.sent(), vec![sent]);
}

// =============================================================================
// CHANGE TRACKING & SYNC
// =============================================================================

#[test]
fn test_revision_tracks_touched_collections() {
    let store = MemoryStore::with_snapshot(stocked_snapshot());
    let mut coordinator = coordinator_with(&store, &RecordingMessenger::new());
    assert_eq!(coordinator.revision(), 0);

    coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap();
    assert_eq!(coordinator.revision(), 1);
    assert_eq!(coordinator.changed_since(0), vec![Collection::Donors]);

    coordinator.intake_blood_bag(BloodType::OPos, "450ml");
    assert_eq!(coordinator.revision(), 2);
    assert_eq!(coordinator.changed_since(1), vec![Collection::Bags]);
    assert_eq!(
        coordinator.changed_since(0),
        vec![Collection::Donors, Collection::Bags]
    );
    assert!(coordinator.changed_since(2).is_empty());
}

#[test]
fn test_sync_applies_external_donors() {
    let (mut coordinator, store) = coordinator();
    assert!(coordinator.sync_external().unwrap().is_empty());

    let mut other = coordinator_with(&MemoryStore::new(), &RecordingMessenger::new());
    other
        .register_donor(DonorBuilder::new("Aayan", BloodType::ONeg).build())
        .unwrap();
    let external = Snapshot {
        donors: other.directory().donors().to_vec(),
        ..Snapshot::default()
    };
    store.write_external(external);
    let saves_before = store.saves().len();

    let changed = coordinator.sync_external().unwrap();
    assert_eq!(changed, vec![Collection::Donors]);
    assert_eq!(coordinator.directory().donors()[0].name, "Aayan");
    assert_eq!(coordinator.notifications()[0].title, "Directory Synced");
    assert_eq!(coordinator.revision(), 1);
    assert_eq!(
        coordinator.changed_since(0),
        vec![Collection::Donors, Collection::Notifications]
    );

    // Applying a sync writes nothing back
    assert_eq!(store.saves().len(), saves_before);
    assert!(coordinator.sync_external().unwrap().is_empty());
}

#[test]
fn test_feed_only_sync_is_silent() {
    let (mut coordinator, store) = coordinator();

    let mut other = coordinator_with(&MemoryStore::new(), &RecordingMessenger::new());
    other.check_inventory();
    store.write_external(Snapshot {
        notifications: other.notifications().to_vec(),
        ..Snapshot::default()
    });

    let changed = coordinator.sync_external().unwrap();
    assert_eq!(changed, vec![Collection::Notifications]);
    assert_eq!(coordinator.unread_count(), 8);
    assert!(coordinator
        .notifications()
        .iter()
        .all(|n| n.title != "Directory Synced"));
}

#[test]
fn test_sync_of_bags_runs_low_stock_check() {
    let store = MemoryStore::with_snapshot(stocked_snapshot());
    let mut coordinator = coordinator_with(&store, &RecordingMessenger::new());

    let mut external = stocked_snapshot();
    let o_neg = external
        .bags
        .iter()
        .position(|b| b.blood_type == BloodType::ONeg)
        .unwrap();
    external.bags.remove(o_neg);
    store.write_external(external);
    let saves_before = store.saves().len();

    let changed = coordinator.sync_external().unwrap();
    assert_eq!(changed, vec![Collection::Bags]);
    let titles: Vec<_> = coordinator
        .notifications()
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert!(titles.contains(&"Critical Stock: O-"));
    assert!(titles.contains(&"Directory Synced"));
    assert_eq!(coordinator.unread_count(), 2);
    assert!(coordinator.changed_since(0).contains(&Collection::Notifications));
    assert_eq!(store.saves().len(), saves_before);
}

#[test]
fn test_sync_picks_up_higher_id_mark() {
    let (mut coordinator, store) = coordinator();
    let mut external = Snapshot::default();
    external.sequences.donors = 7;
    store.write_external(external);

    assert_eq!(coordinator.sync_external().unwrap(), vec![Collection::Donors]);
    let donor = coordinator
        .register_donor(DonorBuilder::new("Vaghu", BloodType::OPos).build())
        .unwrap()
        .value;
    assert_eq!(donor.id, "DNR-8");
}
