//! Application context: unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the global flags. Commands never read the
//! config file or construct adapters themselves.

use anyhow::Result;

use crate::application::services::config_service;
use crate::domain::ClientConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::{SystemClient, system_client};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Binary override from `--binary` / `VAGABOND_BINARY`.
    pub binary: Option<String>,
    /// `--verbose`: also stream Vagrant's output.
    pub verbose: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Config file store.
    pub config_store: YamlConfigStore,
    binary: Option<String>,
    verbose: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store: YamlConfigStore,
            binary: flags.binary,
            verbose: flags.verbose,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Effective configuration: the config file with CLI overrides applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is unreadable or invalid.
    pub fn config(&self) -> Result<ClientConfig> {
        let config = config_service::load_config(&self.config_store)?;
        Ok(config
            .with_binary(self.binary.as_deref())
            .with_stream_output(self.verbose))
    }

    /// Client for the configured Vagrant binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the binary
    /// is not on `$PATH`.
    pub fn client(&self) -> Result<SystemClient> {
        let config = self.config()?;
        Ok(system_client(&config)?)
    }
}
