//! Non-interactive commands of the binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::common::fixtures::sample_document;

fn resumeforge(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resumeforge").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_preview_blank_document() {
    let data = TempDir::new().unwrap();
    resumeforge(&data)
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Your Name"));
}

#[test]
fn test_preview_json_snapshot() {
    let data = TempDir::new().unwrap();
    resumeforge(&data)
        .args(["preview", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"experienceEntries\""))
        .stdout(predicate::str::contains("\"skills\": []"));
}

#[test]
fn test_preview_from_input_snapshot() {
    let data = TempDir::new().unwrap();
    let snapshot = data.path().join("resume.json");
    fs::write(&snapshot, serde_json::to_string(&sample_document()).unwrap()).unwrap();

    resumeforge(&data)
        .arg("--input")
        .arg(&snapshot)
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Your Name").not());
}

#[test]
fn test_export_writes_pdf() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    resumeforge(&data)
        .arg("export")
        .arg("-o")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("resume.pdf"));

    let bytes = fs::read(out.path().join("resume.pdf")).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_malformed_snapshot_fails() {
    let data = TempDir::new().unwrap();
    let snapshot = data.path().join("broken.json");
    fs::write(&snapshot, "{ not json").unwrap();

    resumeforge(&data)
        .arg("-i")
        .arg(&snapshot)
        .arg("preview")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse resume snapshot"));
}
