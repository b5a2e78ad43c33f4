//! Binary smoke tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    Command::cargo_bin("bankist")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Terminal banking session simulator"));
}

#[test]
fn test_no_command_prints_hint() {
    Command::cargo_bin("bankist")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("bankist tui"));
}

#[test]
fn test_demo_prints_ledger() {
    Command::cargo_bin("bankist")
        .unwrap()
        .args(["demo", "js", "--pin", "1111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Jonas!"))
        .stdout(predicate::str::contains("deposit"))
        .stdout(predicate::str::contains("Balance:"));
}

#[test]
fn test_demo_rejects_bad_pin() {
    Command::cargo_bin("bankist")
        .unwrap()
        .args(["demo", "js", "--pin", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}
