//! Client configuration schema.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::record::DEFAULT_IGNORED_KINDS;

// ── Constants ────────────────────────────────────────────────────────────────

/// Binary invoked when nothing else is configured.
pub const DEFAULT_BINARY_NAME: &str = "vagrant";

/// `vagrant up` routinely takes several minutes.
pub const DEFAULT_TIMEOUT_SECS: u64 = 1800;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.vagabond/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Name or path of the Vagrant executable. Must resolve on `$PATH`.
    pub binary_name: String,
    /// Per-invocation timeout in seconds.
    pub timeout_secs: u64,
    /// Record kinds dropped while parsing.
    pub ignored_kinds: Vec<String>,
    /// Copy Vagrant's output to stderr while it runs.
    pub stream_output: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            binary_name: DEFAULT_BINARY_NAME.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ignored_kinds: DEFAULT_IGNORED_KINDS.iter().map(|k| (*k).to_string()).collect(),
            stream_output: false,
        }
    }
}

impl ClientConfig {
    /// Replace the binary name when `binary` is non-empty.
    #[must_use]
    pub fn with_binary(mut self, binary: Option<&str>) -> Self {
        if let Some(name) = binary.filter(|b| !b.is_empty()) {
            self.binary_name = name.to_string();
        }
        self
    }

    /// Turn live output on when `stream` is set; never turns it off.
    #[must_use]
    pub fn with_stream_output(mut self, stream: bool) -> Self {
        self.stream_output |= stream;
        self
    }

    /// Fill blanks left by a partial config file.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.binary_name.trim().is_empty() {
            self.binary_name = DEFAULT_BINARY_NAME.to_string();
        }
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Rejects configurations that could never run a command.
///
/// # Errors
///
/// Returns an error if the timeout is zero.
pub fn validate_config(config: &ClientConfig) -> Result<()> {
    if config.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            key: "timeout_secs".to_string(),
            value: "0".to_string(),
            reason: "Timeout must be at least one second.".to_string(),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
