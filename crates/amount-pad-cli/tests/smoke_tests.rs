//! Smoke tests for the amount-pad CLI
//!
//! These run the real binary and check its stdout, stderr and exit code.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the amount-pad binary with a clean environment
fn amount_pad() -> Command {
    let mut cmd = Command::cargo_bin("amount-pad").expect("amount-pad binary should exist");
    cmd.env_remove("AMOUNT_PAD_AMOUNT").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    amount_pad()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    amount_pad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn test_no_args_fails() {
    amount_pad().assert().failure();
}

#[test]
fn test_interactive_help() {
    amount_pad()
        .args(["interactive", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--amount"));
}

// ============================================================================
// Replay
// ============================================================================

#[test]
fn test_replay_addition() {
    amount_pad()
        .args(["--color", "never", "replay", "--amount", "12", "+", "3", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("committed 15"))
        .stdout(predicate::str::contains("change 15"));
}

#[test]
fn test_replay_subtraction_with_decimal() {
    amount_pad()
        .args(["-q", "replay", "-a", "10", "-", "4", ".", "5", "="])
        .assert()
        .success()
        .stdout("5.5\n");
}

#[test]
fn test_replay_quoted_script() {
    amount_pad()
        .args(["-q", "replay", "--amount", "3", "* 4 ="])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_replay_default_amount() {
    amount_pad()
        .args(["-q", "replay", "4", "2"])
        .assert()
        .success()
        .stdout("-42\n");
}

#[test]
fn test_replay_amount_from_env() {
    amount_pad()
        .env("AMOUNT_PAD_AMOUNT", "20")
        .args(["-q", "replay", "*", "2", "="])
        .assert()
        .success()
        .stdout("40\n");
}

#[test]
fn test_replay_pending_is_not_committed() {
    amount_pad()
        .args(["--color", "never", "replay", "--amount", "12", "+", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("committed 12"))
        .stdout(predicate::str::contains("display   12+3"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn test_replay_json() {
    let output = amount_pad()
        .args(["replay", "--format", "json", "--amount", "12", "+", "3", "=", "done"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["committed"], "15");
    assert_eq!(report["display"], "15");
    assert_eq!(report["events"][0]["event"], "change");
    assert_eq!(report["events"][1]["event"], "done");
}

#[test]
fn test_replay_unknown_key_fails() {
    amount_pad()
        .args(["replay", "1", "/", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid argument: unknown key '/'"));
}

#[test]
fn test_replay_requires_keys() {
    amount_pad().arg("replay").assert().failure();
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_layout() {
    amount_pad()
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("[ 1 ]"))
        .stdout(predicate::str::contains("[ ✓ ]"))
        .stdout(predicate::str::contains("btn-").not());
}

#[test]
fn test_layout_verbose_lists_ids() {
    amount_pad()
        .args(["-v", "layout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("btn-equals"))
        .stdout(predicate::str::contains("btn-sign"));
}
