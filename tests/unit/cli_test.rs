//! CLI argument handling tests

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn lifeflow(temp: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("lifeflow"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lifeflow"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("first compatible donor"));
}

#[test]
fn test_no_args_shows_info() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("lifeflow init --demo"));
}

#[test]
fn test_invalid_blood_type_is_rejected() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .args(["match", "C+"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid blood type"));
}

#[test]
fn test_invalid_role_is_rejected() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .args(["--role", "nurse", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid role"));
}

#[test]
fn test_donor_add_requires_contact() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .args(["donor", "add", "Vaghu", "-b", "O+"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--contact"));
}

#[test]
fn test_resource_kind_is_parsed() {
    let temp = TempDir::new().unwrap();
    lifeflow(&temp)
        .args(["resource", "add", "gold", "--from", "Meera", "-d", "ring"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resource kind"));
}
