//! Integration tests for the CLI surface: help, version, argument errors.

#![allow(clippy::expect_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use super::fake_vagrant::vagabond;

fn isolated() -> (TempDir, assert_cmd::Command) {
    let dir = TempDir::new().expect("tempdir");
    let cmd = vagabond(&dir.path().join("missing.yaml"));
    (dir, cmd)
}

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    let (_dir, mut cmd) = isolated();
    cmd.assert().code(2).stderr(predicate::str::contains(
        "Drive Vagrant through its machine-readable output",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    let (_dir, mut cmd) = isolated();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("up"))
        .stdout(predicate::str::contains("destroy"))
        .stdout(predicate::str::contains("ssh-config"))
        .stdout(predicate::str::contains("box"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    let (_dir, mut cmd) = isolated();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vagabond"));
}

#[test]
fn test_version_command_shows_version() {
    let (_dir, mut cmd) = isolated();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "vagabond {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_no_color_environment_accepts_any_value() {
    for value in ["1", "true", "yes"] {
        let (_dir, mut cmd) = isolated();
        cmd.env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vagabond"));
    }
}

#[test]
fn test_no_color_flag_without_environment() {
    let (_dir, mut cmd) = isolated();
    cmd.env_remove("NO_COLOR")
        .args(["--no-color", "version"])
        .assert()
        .success();
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let (_dir, mut cmd) = isolated();
    let output = cmd.args(["version", "--json"]).output().expect("run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_up_help_shows_operation_flags() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["up", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--cwd"))
        .stdout(predicate::str::contains("--no-provision"))
        .stdout(predicate::str::contains("--provision-with"))
        .stdout(predicate::str::contains("--provider"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let (_dir, mut cmd) = isolated();
    cmd.arg("halt").assert().code(2);
}

#[test]
fn test_missing_binary_reports_json_error() {
    let (_dir, mut cmd) = isolated();
    let output = cmd
        .args(["box", "list", "--json", "--binary", "vagabond-no-such-vagrant"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "EXECUTABLE_NOT_FOUND");
    assert!(
        value["message"]
            .as_str()
            .expect("message")
            .contains("vagabond-no-such-vagrant")
    );
}

#[test]
fn test_missing_binary_reports_human_error() {
    let (_dir, mut cmd) = isolated();
    cmd.args(["box", "list", "--binary", "vagabond-no-such-vagrant"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found in $PATH"));
}
