//! CLI integration tests for the cistern command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Invalid inputs are rejected with appropriate messages
//!
//! Note: These tests do not require a running server - they test
//! CLI parsing and help output only.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the cistern binary.
fn cistern() -> Command {
    Command::cargo_bin("cistern").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    cistern()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cistern"))
        .stdout(predicate::str::contains("control server"));
}

#[test]
fn test_version_displays() {
    cistern()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cistern"));
}

#[test]
fn test_help_lists_subcommands() {
    cistern()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("job"))
        .stdout(predicate::str::contains("jobstate"))
        .stdout(predicate::str::contains("remoteci"))
        .stdout(predicate::str::contains("user"))
        .stdout(predicate::str::contains("team"))
        .stdout(predicate::str::contains("test"))
        .stdout(predicate::str::contains("topic"))
        .stdout(predicate::str::contains("jobdefinition"))
        .stdout(predicate::str::contains("component"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Flag Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_verbose_flag_accepted() {
    cistern().args(["--verbose", "--help"]).assert().success();
}

#[test]
fn test_server_flag_accepted() {
    cistern()
        .args(["--server", "http://localhost:9999", "--help"])
        .assert()
        .success();
}

#[test]
fn test_format_accepts_json_and_table() {
    cistern()
        .args(["--format", "json", "--help"])
        .assert()
        .success();
    cistern()
        .args(["--format", "table", "--help"])
        .assert()
        .success();
}

#[test]
fn test_format_rejects_unknown_value() {
    cistern()
        .args(["--format", "xml", "user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Subcommand Parsing Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_user_create_requires_name() {
    cistern()
        .args(["user", "create", "--password", "p", "--team-id", "t1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_user_update_requires_etag() {
    cistern()
        .args(["user", "update", "u1", "--name", "bar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--etag"));
}

#[test]
fn test_user_create_accepts_state_flags() {
    cistern()
        .args(["user", "create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--active"))
        .stdout(predicate::str::contains("--no-active"));
}

#[test]
fn test_list_flags_documented() {
    cistern()
        .args(["remoteci", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("--where"))
        .stdout(predicate::str::contains("--long"));
}

#[test]
fn test_remoteci_subcommands_listed() {
    cistern()
        .args(["remoteci", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("get-data"))
        .stdout(predicate::str::contains("attach-test"))
        .stdout(predicate::str::contains("list-tests"))
        .stdout(predicate::str::contains("unattach-test"))
        .stdout(predicate::str::contains("reset-api-secret"));
}

#[test]
fn test_job_schedule_requires_remoteci() {
    cistern()
        .args(["job", "schedule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--remoteci-id"));
}

#[test]
fn test_topic_attach_team_requires_team() {
    cistern()
        .args(["topic", "attach-team", "to1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--team-id"));
}

#[test]
fn test_unknown_subcommand_rejected() {
    cistern()
        .args(["user", "frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
