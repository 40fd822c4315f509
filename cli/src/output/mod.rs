//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

/// Whether ANSI styling may be written to a stream.
///
/// Off when `--no-color` is given, `NO_COLOR` is set, or the stream is not a
/// terminal.
#[must_use]
pub fn colors_enabled(no_color: bool, is_term: bool) -> bool {
    !no_color && is_term && std::env::var_os("NO_COLOR").is_none()
}

/// Whether log lines on stderr may carry ANSI styling.
#[must_use]
pub fn stderr_colors(no_color: bool) -> bool {
    colors_enabled(no_color, Term::stderr().is_term())
}

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = colors_enabled(no_color, is_tty);

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Dispatches rendering to the human or JSON renderer.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the box inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_boxes(&self, boxes: &[crate::domain::VagrantBox]) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_boxes(boxes);
                Ok(())
            }
            Self::Json(r) => r.render_boxes(boxes),
        }
    }

    /// Render the SSH endpoints of every host.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_endpoints(&self, endpoints: &[crate::domain::SshEndpoint]) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_endpoints(endpoints);
                Ok(())
            }
            Self::Json(r) => r.render_endpoints(endpoints),
        }
    }

    /// Render the outcome of `up` or `destroy`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_records(
        &self,
        action: &str,
        records: &[crate::domain::ProtocolRecord],
    ) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_records(action, records);
                Ok(())
            }
            Self::Json(r) => r.render_records(action, records),
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> anyhow::Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }
}
