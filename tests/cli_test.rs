use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("i18n-sheet").unwrap()
}

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("per-locale JSON"))
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--all"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_missing_config_prints_guide() {
    let temp_dir = TempDir::new().unwrap();

    cmd()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("i18nconfig.json file not found"))
        .stderr(predicate::str::contains("GOOGLE_SHEET_ID"));
}

#[test]
fn test_config_without_credentials_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("i18nconfig.json"),
        r#"{"GOOGLE_API_KEY": "key"}"#,
    )
    .unwrap();

    cmd()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("GOOGLE_API_KEY and GOOGLE_SHEET_ID must be set"));
}

#[test]
fn test_custom_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.json");
    fs::write(&config_path, "{ not json").unwrap();

    cmd()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON syntax"));
}

#[test]
fn test_sheet_and_all_conflict() {
    cmd()
        .args(["common", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_blank_sheet_name_rejected() {
    cmd()
        .arg(" ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sheet name cannot be empty"));
}
