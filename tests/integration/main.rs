//! Integration tests for the lifeflow CLI
//!
//! Each test runs the binary in its own temporary directory, so the data
//! file, config and outbox are isolated.


use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a lifeflow command in `temp`
fn lifeflow(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("lifeflow"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Run with `--json` and parse stdout
fn json(temp: &TempDir, args: &[&str]) -> Value {
    let output = lifeflow(temp).arg("--json").args(args).output().unwrap();
    assert!(
        output.status.success(),
        "{args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_init_creates_config_and_data() {
    let temp = TempDir::new().unwrap();

    lifeflow(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created lifeflow.toml"));

    assert!(temp.path().join("lifeflow.toml").exists());
    assert!(temp.path().join("lifeflow-data.json").exists());

    lifeflow(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_init_demo_seeds_directory() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp).args(["init", "--demo"]).assert().success();

    let status = json(&temp, &["status"]);
    assert_eq!(status["donors"], 4);
    assert_eq!(status["requests"], 2);
    assert_eq!(status["bags"], 3);
    assert_eq!(status["stock"]["O+"], 1);
}

#[test]
fn test_commands_work_without_init() {
    let temp = TempDir::new().unwrap();
    let listed = json(&temp, &["donor", "list"]);
    assert_eq!(listed["donors"], serde_json::json!([]));
}

#[test]
fn test_bad_contact_is_rejected() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .args(["donor", "add", "Vaghu", "-b", "O+", "-c", "98700001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 10 digits"));

    let listed = json(&temp, &["donor", "list"]);
    assert_eq!(listed["donors"].as_array().unwrap().len(), 0);
}

#[test]
fn test_data_flag_overrides_location() {
    let temp = TempDir::new().unwrap();
    json(
        &temp,
        &["--data", "custom/data.json", "donor", "add", "Vaghu", "-b", "O+", "-c", "9870000101"],
    );
    assert!(temp.path().join("custom/data.json").exists());
    assert!(!temp.path().join("lifeflow-data.json").exists());
}

#[test]
fn test_match_lookup_does_not_record() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp).args(["init", "--demo"]).assert().success();

    let report = json(&temp, &["match", "AB+"]);
    assert_eq!(report["matched"]["name"], "Vaghu");
    assert_eq!(report["donor_types"].as_array().unwrap().len(), 8);
    assert!(report.get("request").is_none());

    let status = json(&temp, &["status"]);
    assert_eq!(status["requests"], 2);
}

#[test]
fn test_human_output() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp).args(["init", "--demo"]).assert().success();

    lifeflow(&temp)
        .args(["donor", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shreyash"))
        .stdout(predicate::str::contains("9870000104"));

    lifeflow(&temp)
        .args(["match", "O-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No compatible donor available."));
}
