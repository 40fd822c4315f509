//! End-to-end tests running each command against the fake `vagrant` script.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use super::fake_vagrant::{FakeVagrant, vagabond};

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_box_list_human_table() {
    let fake = FakeVagrant::install();
    vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["box", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NAME"))
        .stdout(predicate::str::contains("my-vbox-debian"))
        .stdout(predicate::str::contains("virtualbox"));
}

#[test]
fn test_box_list_json_keeps_order() {
    let fake = FakeVagrant::install();
    let output = vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["box", "list", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value = json_stdout(&output);
    let names: Vec<&str> = value["boxes"]
        .as_array()
        .expect("boxes array")
        .iter()
        .map(|b| b["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["my-debian", "my-vbox-debian", "my-vmware-debian"]);
    assert_eq!(value["boxes"][2]["version"], "1.2.5");
}

#[test]
fn test_binary_from_environment_variable() {
    let fake = FakeVagrant::install();
    vagabond(&fake.dir.path().join("config.yaml"))
        .env("VAGABOND_BINARY", fake.binary())
        .args(["box", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-debian"));
}

#[test]
fn test_ssh_config_json_hosts() {
    let fake = FakeVagrant::install();
    let output = vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["ssh-config", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let value = json_stdout(&output);
    let host = &value["hosts"][0];
    assert_eq!(host["host"], "default");
    assert_eq!(host["hostname"], "192.168.121.165");
    assert_eq!(host["user"], "root");
    assert_eq!(host["port"], 22);
    assert_eq!(host["identity_files"][0], "/tmp/example/private_key");
}

#[test]
fn test_ssh_config_human_summary() {
    let fake = FakeVagrant::install();
    vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .arg("ssh-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Host default"))
        .stdout(predicate::str::contains("192.168.121.165"));
}

#[test]
fn test_up_runs_in_cwd_with_flags() {
    let fake = FakeVagrant::install();
    let project = TempDir::new().expect("project dir");
    let output = vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .arg("up")
        .arg("--cwd")
        .arg(project.path())
        .args(["--no-parallel", "--provider", "libvirt", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success(), "{output:?}");

    let value = json_stdout(&output);
    assert_eq!(value["action"], "up");
    let records = value["records"].as_array().expect("records");
    assert_eq!(records.len(), 1, "action records are dropped");
    assert_eq!(records[0]["kind"], "state");
    assert_eq!(records[0]["data"][0], "running");

    let cwd = fake.artifact("up.cwd").expect("script recorded cwd");
    let expected = project.path().canonicalize().expect("canonical project");
    assert_eq!(
        std::path::Path::new(cwd.trim())
            .canonicalize()
            .expect("canonical cwd"),
        expected
    );
    assert_eq!(
        fake.artifact("up.args").expect("script recorded args").trim(),
        "--machine-readable up --provision --destroy-on-error --no-parallel --provider libvirt --install-provider"
    );
}

#[test]
fn test_up_missing_cwd_never_runs_vagrant() {
    let fake = FakeVagrant::install();
    let output = vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["up", "--cwd", "/nonexistent/vagabond/project", "--json"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(json_stdout(&output)["code"], "DIRECTORY_SCOPE_FAILED");
    assert!(fake.artifact("up.cwd").is_none());
}

#[test]
fn test_destroy_failure_reports_invocation_error() {
    let fake = FakeVagrant::install();
    let output = vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["destroy", "--json"])
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let value = json_stdout(&output);
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "INVOCATION_FAILED");
    let message = value["message"].as_str().expect("message");
    assert!(message.contains("--machine-readable destroy --force --parallel"));
    assert!(
        message.contains("A Vagrant environment or target machine is required"),
        "got: {message}"
    );
}

#[test]
fn test_destroy_failure_prints_vagrant_diagnostic() {
    let fake = FakeVagrant::install();
    vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .arg("destroy")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "A Vagrant environment or target machine is required to run this command.",
        ))
        .stderr(predicate::str::contains("exited abnormally").not());
}

#[test]
fn test_verbose_logs_command_line_to_stderr() {
    let fake = FakeVagrant::install();
    vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["box", "list", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--machine-readable box list"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_verbose_streams_vagrant_output_to_stderr() {
    let fake = FakeVagrant::install();
    let output = vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["box", "list", "--json", "--verbose"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("1546015529,,box-name,my-debian"), "got: {stderr}");
    assert_eq!(json_stdout(&output)["boxes"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_default_run_does_not_stream_vagrant_output() {
    let fake = FakeVagrant::install();
    vagabond(&fake.dir.path().join("config.yaml"))
        .arg("--binary")
        .arg(fake.binary())
        .args(["box", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("box-name").not());
}
