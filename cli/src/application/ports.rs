//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::Output;

use anyhow::Result;

use crate::domain::{ClientConfig, SshConfig};

// ── Command Executor Port ─────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandExecutor {
    /// Run a program and capture its stdout, stderr and exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or does not finish
    /// in time. A non-zero exit status is not an error at this level.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
}

// ── Executable Discovery Port ─────────────────────────────────────────────────

/// Confirms that a named executable exists and is invocable.
pub trait PathResolver {
    /// Resolve `binary` to the path that would be executed.
    ///
    /// # Errors
    ///
    /// Returns an error if the binary cannot be found.
    fn resolve(&self, binary: &str) -> Result<PathBuf>;
}

// ── Working Directory Port ────────────────────────────────────────────────────

/// Process-wide working directory access.
///
/// The working directory is global to the process: callers running
/// directory-scoped operations from several threads must serialize them.
pub trait DirectoryContext {
    /// Read the current working directory.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
    /// Change the current working directory.
    fn set_current_dir(&self, path: &Path) -> std::io::Result<()>;
}

// ── SSH Config Decoding Port ──────────────────────────────────────────────────

/// Decodes OpenSSH-config-formatted text.
pub trait SshConfigDecoder {
    /// Parse `text` into a structure queryable by host and keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid ssh_config syntax.
    fn decode(&self, text: &str) -> Result<SshConfig>;
}

// ── Configuration Port ────────────────────────────────────────────────────────

/// Abstracts loading the client configuration file.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<ClientConfig>;

    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
