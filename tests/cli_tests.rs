//! Integration tests for the campus CLI
//!
//! These tests run the campus binary and verify flags, exit codes and
//! configuration handling.

mod common;

use common::campus;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campus"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus"));
}

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_exit_choice_succeeds() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_end_of_input_succeeds() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_unknown_flag_with_json_format_emits_envelope() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--format", "json", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_invalid_format_value() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--format", "yaml"])
        .assert()
        .code(2);
}

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--config"])
        .arg(dir.path().join("nope.toml"))
        .write_stdin("8\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}

#[test]
fn test_malformed_config_fails_with_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "display = 3").unwrap();

    campus(dir.path())
        .args(["--format", "json", "--config"])
        .arg(&path)
        .write_stdin("8\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"toml_error\""));
}

#[test]
fn test_config_dir_building_types_in_prompt() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "building_types = [\"Lab\", \"Dorm\"]\n",
    )
    .unwrap();

    campus(dir.path())
        .write_stdin("1\nCS\nComputer Science\nLab\nNorth\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type (Lab/Dorm): "))
        .stdout(predicate::str::contains("Type: Lab"));
}

#[test]
fn test_config_distance_precision() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[display]\ndistance_precision = 2\n").unwrap();

    campus(dir.path())
        .arg("--quiet")
        .arg("--config")
        .arg(&path)
        .write_stdin(common::SAMPLE_MAP.to_string() + "4\nCS\nADM\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total distance: 7.00"));
}

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--quiet", "--verbose"])
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No buildings in campus map yet."))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("menu"));
}

#[test]
fn test_log_json() {
    let dir = tempdir().unwrap();
    campus(dir.path())
        .args(["--quiet", "--log-level", "debug", "--log-json"])
        .write_stdin("8\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}
