//! Tests for `up` / `destroy` through `VagrantClient`: argument order and
//! working-directory handling.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use vagabond_cli::domain::{DestroyOptions, DirectoryAction, UpOptions, VagrantError};

use super::helpers::{
    EventLog, FakeDirs, PROJECT_DIR, RecordingExecutor, client, events, failed_output, ok_output,
};

const UP_OUTPUT: &str = "\
1547581456,default,metadata,provider,libvirt
1547581456,default,action,up,start
1547581456,default,ui,info,Bringing machine 'default' up with 'libvirt' provider...
1547581470,default,state,running
";

#[tokio::test]
async fn test_up_default_arguments() {
    let log = EventLog::default();
    let executor = RecordingExecutor::replying(ok_output(UP_OUTPUT), &log);
    let calls = executor.calls.clone();
    let client = client(executor, FakeDirs::new(&log));

    let records = client.up(&UpOptions::default()).await.unwrap();

    assert_eq!(
        calls.lock().unwrap()[0].1,
        vec![
            "--machine-readable",
            "up",
            "--provision",
            "--destroy-on-error",
            "--parallel",
            "--install-provider",
        ]
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, "state");
    assert_eq!(records[0].first(), "running");
}

#[tokio::test]
async fn test_up_flag_positions() {
    let log = EventLog::default();
    let executor = RecordingExecutor::replying(ok_output(""), &log);
    let calls = executor.calls.clone();
    let client = client(executor, FakeDirs::new(&log));

    let options = UpOptions {
        provision: false,
        provision_with: vec!["shell".to_string(), "ansible".to_string()],
        parallel: false,
        provider: "libvirt".to_string(),
        ..UpOptions::default()
    };
    client.up(&options).await.unwrap();

    let args = &calls.lock().unwrap()[0].1;
    assert_eq!(args[1], "up");
    assert_eq!(args[2], "--no-provision");
    assert_eq!(args[3], "--provision-with");
    assert_eq!(args[4], "shell,ansible");
    assert_eq!(args[5], "--destroy-on-error");
    assert_eq!(args[6], "--no-parallel");
    assert_eq!(args[7], "--provider");
    assert_eq!(args[8], "libvirt");
    assert_eq!(args[9], "--install-provider");
}

#[tokio::test]
async fn test_up_runs_inside_working_directory_and_restores() {
    let log = EventLog::default();
    let client = client(
        RecordingExecutor::replying(ok_output(""), &log),
        FakeDirs::new(&log),
    );

    let options = UpOptions {
        working_directory: Some(PathBuf::from(PROJECT_DIR)),
        ..UpOptions::default()
    };
    client.up(&options).await.unwrap();

    let events = events(&log);
    assert_eq!(events.len(), 4, "{events:?}");
    assert_eq!(events[0], "getwd");
    assert_eq!(events[1], "chdir /tmp/example");
    assert!(events[2].starts_with("exec vagrant --machine-readable up"));
    assert_eq!(events[3], "chdir /tmp/anotherexample");
}

#[tokio::test]
async fn test_up_without_working_directory_leaves_directory_alone() {
    let log = EventLog::default();
    let client = client(
        RecordingExecutor::replying(ok_output(""), &log),
        FakeDirs::new(&log),
    );

    client.up(&UpOptions::default()).await.unwrap();

    let events = events(&log);
    assert_eq!(events.len(), 1);
    assert!(events[0].starts_with("exec "));
}

#[tokio::test]
async fn test_up_enter_failure_never_runs_vagrant() {
    let log = EventLog::default();
    let mut dirs = FakeDirs::new(&log);
    dirs.fail_enter = true;
    let executor = RecordingExecutor::replying(ok_output(""), &log);
    let calls = executor.calls.clone();
    let client = client(executor, dirs);

    let options = UpOptions {
        working_directory: Some(PathBuf::from("/does/not/exist")),
        ..UpOptions::default()
    };
    let err = client.up(&options).await.unwrap_err();

    assert!(matches!(
        err,
        VagrantError::DirectoryScope {
            action: DirectoryAction::Enter,
            ..
        }
    ));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_up_failure_still_restores_directory() {
    let log = EventLog::default();
    let client = client(
        RecordingExecutor::replying(failed_output(1, "", "boom"), &log),
        FakeDirs::new(&log),
    );

    let options = UpOptions {
        working_directory: Some(PathBuf::from(PROJECT_DIR)),
        ..UpOptions::default()
    };
    let err = client.up(&options).await.unwrap_err();

    assert!(matches!(err, VagrantError::Invocation { .. }));
    assert_eq!(
        events(&log).last().map(String::as_str),
        Some("chdir /tmp/anotherexample")
    );
}

#[tokio::test]
async fn test_destroy_default_arguments() {
    let log = EventLog::default();
    let executor = RecordingExecutor::replying(ok_output(""), &log);
    let calls = executor.calls.clone();
    let client = client(executor, FakeDirs::new(&log));

    client.destroy(&DestroyOptions::default()).await.unwrap();

    assert_eq!(
        calls.lock().unwrap()[0].1,
        vec!["--machine-readable", "destroy", "--force", "--parallel"]
    );
}

#[tokio::test]
async fn test_destroy_without_force_omits_flag() {
    let log = EventLog::default();
    let executor = RecordingExecutor::replying(ok_output(""), &log);
    let calls = executor.calls.clone();
    let client = client(executor, FakeDirs::new(&log));

    let options = DestroyOptions {
        force: false,
        parallel: true,
        ..DestroyOptions::default()
    };
    client.destroy(&options).await.unwrap();

    let args = &calls.lock().unwrap()[0].1;
    assert!(!args.iter().any(|a| a.contains("force")));
    assert_eq!(args[2], "--parallel");
}

#[tokio::test]
async fn test_client_remains_usable_after_failure() {
    let log = EventLog::default();
    let client = client(
        RecordingExecutor::failing("failed to spawn vagrant", &log),
        FakeDirs::new(&log),
    );

    assert!(client.destroy(&DestroyOptions::default()).await.is_err());
    assert!(client.destroy(&DestroyOptions::default()).await.is_err());
    assert_eq!(events(&log).len(), 2);
}
