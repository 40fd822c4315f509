//! Infrastructure implementation of the `CommandExecutor` port.
//!
//! `TokioCommandExecutor` runs Vagrant through tokio with a hard timeout that
//! kills the child on expiry. With streaming on, both pipes are copied to
//! stderr as they arrive while still being captured for decoding.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

use crate::application::ports::CommandExecutor;

/// Production `CommandExecutor`.
///
/// `tokio::time::timeout` around `.output().await` only drops the future; the
/// child keeps running. The `select!` below kills it explicitly.
pub struct TokioCommandExecutor {
    timeout: Duration,
    stream: bool,
}

impl TokioCommandExecutor {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            stream: false,
        }
    }

    /// Copy the child's output to stderr live.
    #[must_use]
    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

impl CommandExecutor for TokioCommandExecutor {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    read_all(stdout_handle.as_mut(), self.stream),
                    read_all(stderr_handle.as_mut(), self.stream),
                );
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", self.timeout.as_secs())
            }
        }
    }
}

async fn read_all<H: AsyncRead + Unpin>(handle: Option<&mut H>, stream: bool) -> Vec<u8> {
    let mut buf = Vec::new();
    let Some(h) = handle else {
        return buf;
    };
    if !stream {
        let _ = h.read_to_end(&mut buf).await;
        return buf;
    }

    let mut sink = tokio::io::stderr();
    let mut chunk = [0u8; 8192];
    loop {
        match h.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                // Terminal write failures must not lose captured output.
                let _ = sink.write_all(&chunk[..n]).await;
            }
        }
    }
    let _ = sink.flush().await;
    buf
}
