//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! Port failures arrive as boxed errors and are kept as the `source`.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error carried as the `source` of a [`VagrantError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ── Client errors ─────────────────────────────────────────────────────────────

/// Errors returned by every client operation.
#[derive(Debug, Error)]
pub enum VagrantError {
    /// The configured binary could not be found on `$PATH`.
    #[error("`{binary}` not found in $PATH")]
    ExecutableNotFound {
        binary: String,
        #[source]
        source: BoxError,
    },

    /// The tool could not be run, or it exited abnormally.
    ///
    /// `diagnostic` holds the message of Vagrant's `error-exit` record.
    #[error("`{command}` failed{}", diagnostic_suffix(.diagnostic))]
    Invocation {
        command: String,
        diagnostic: Option<String>,
        #[source]
        source: BoxError,
    },

    /// Reading, entering, or restoring the working directory failed.
    #[error("cannot {action} working directory {}", path.display())]
    DirectoryScope {
        action: DirectoryAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assembled ssh-config text could not be decoded.
    #[error("failed to decode ssh_config")]
    Decode {
        #[source]
        source: BoxError,
    },
}

impl VagrantError {
    /// Stable machine-readable code, used in `--json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExecutableNotFound { .. } => "EXECUTABLE_NOT_FOUND",
            Self::Invocation { .. } => "INVOCATION_FAILED",
            Self::DirectoryScope { .. } => "DIRECTORY_SCOPE_FAILED",
            Self::Decode { .. } => "DECODE_FAILED",
        }
    }
}

#[allow(clippy::ref_option)]
fn diagnostic_suffix(diagnostic: &Option<String>) -> String {
    diagnostic
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

/// Which step of the working-directory scope failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryAction {
    Read,
    Enter,
    Restore,
}

impl std::fmt::Display for DirectoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Enter => "enter",
            Self::Restore => "restore",
        })
    }
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while validating a loaded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
