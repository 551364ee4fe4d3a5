//! Tests for the JSON data file and the outbox

use lifeflow::adapters::{JsonFileStore, OutboxMessenger};
use lifeflow::core::models::{BloodType, Channel, Collection, OutboundMessage, Snapshot};
use lifeflow::core::ports::{Messenger, Persistence};
use tempfile::TempDir;

use crate::common::{bag, stocked_snapshot};

fn data_path(temp: &TempDir) -> std::path::PathBuf {
    temp.path().join("lifeflow-data.json")
}

// =============================================================================
// DATA FILE
// =============================================================================

#[test]
fn test_missing_file_loads_empty() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(data_path(&temp));
    assert_eq!(store.load().unwrap(), Snapshot::default());
    assert!(store.meta().unwrap().is_none());
    assert!(store.poll_external().unwrap().is_none());
}

#[test]
fn test_save_replaces_only_one_collection() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(data_path(&temp));
    store.replace_all(&stocked_snapshot()).unwrap();

    let mut changed = Snapshot::default();
    changed.bags = vec![bag("BAG-1", BloodType::OPos)];
    store.save(Collection::Donors, &changed).unwrap();

    // Donors were saved (empty), bags were not touched
    let reloaded = JsonFileStore::new(data_path(&temp)).load().unwrap();
    assert_eq!(reloaded.bags.len(), 16);
    assert!(reloaded.donors.is_empty());

    let meta = store.meta().unwrap().unwrap();
    assert_eq!(meta.revision, 2);
    assert_eq!(meta.origin, store.origin());
}

#[test]
fn test_own_writes_are_not_external() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(data_path(&temp));
    store.load().unwrap();

    store.save(Collection::Bags, &stocked_snapshot()).unwrap();
    assert!(store.poll_external().unwrap().is_none());
}

#[test]
fn test_foreign_write_is_seen_once() {
    let temp = TempDir::new().unwrap();
    let ours = JsonFileStore::new(data_path(&temp));
    let theirs = JsonFileStore::new(data_path(&temp));
    ours.load().unwrap();
    theirs.load().unwrap();

    theirs.save(Collection::Bags, &stocked_snapshot()).unwrap();

    let external = ours.poll_external().unwrap().unwrap();
    assert_eq!(external.bags.len(), 16);
    assert!(ours.poll_external().unwrap().is_none());
}

#[test]
fn test_foreign_write_before_own_save_is_still_reported() {
    let temp = TempDir::new().unwrap();
    let ours = JsonFileStore::new(data_path(&temp));
    let theirs = JsonFileStore::new(data_path(&temp));
    ours.load().unwrap();
    theirs.load().unwrap();

    theirs.save(Collection::Bags, &stocked_snapshot()).unwrap();
    // Our save lands on top of theirs before we polled
    ours.save(Collection::Donors, &Snapshot::default()).unwrap();

    let external = ours.poll_external().unwrap().unwrap();
    assert_eq!(external.bags.len(), 16);
    assert!(ours.poll_external().unwrap().is_none());
}

#[test]
fn test_concurrent_writers_keep_the_file_whole() {
    let temp = TempDir::new().unwrap();
    let path = data_path(&temp);
    JsonFileStore::new(&path).replace_all(&stocked_snapshot()).unwrap();

    let writers: Vec<_> = [Collection::Bags, Collection::Donors]
        .into_iter()
        .map(|collection| {
            let path = path.clone();
            std::thread::spawn(move || {
                let store = JsonFileStore::new(path);
                (0..25).all(|_| store.save(collection, &stocked_snapshot()).is_ok())
            })
        })
        .collect();
    for writer in writers {
        assert!(writer.join().unwrap(), "every save succeeds");
    }

    let reloaded = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(reloaded.bags.len(), 16);
    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name != "lifeflow-data.json")
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn test_id_marks_survive_a_reload() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileStore::new(data_path(&temp));

    let mut snapshot = Snapshot::default();
    snapshot.sequences.donors = 4;
    store.save(Collection::Donors, &snapshot).unwrap();

    let reloaded = JsonFileStore::new(data_path(&temp)).load().unwrap();
    assert_eq!(reloaded.sequences.donors, 4);
    assert_eq!(reloaded.sequences.bags, 0);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(data_path(&temp), "{ not json").unwrap();
    let store = JsonFileStore::new(data_path(&temp));
    assert!(store.load().is_err());
}

// =============================================================================
// OUTBOX
// =============================================================================

#[test]
fn test_outbox_appends_json_lines() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out/lifeflow-outbox.jsonl");
    let outbox = OutboxMessenger::new(&path);

    for to in ["9870000101", "9870000102"] {
        outbox
            .deliver(&OutboundMessage {
                channel: Channel::Sms,
                to: to.to_string(),
                subject: None,
                body: "Please come in".to_string(),
            })
            .unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["to"], "9870000102");
    assert_eq!(lines[0]["channel"], "sms");
    assert!(lines[0]["queued_at"].is_string());
}
