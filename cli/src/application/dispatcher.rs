//! One request/response cycle: build the command line, run it, decode the output.

use crate::application::ports::CommandExecutor;
use crate::domain::{
    MACHINE_READABLE_FLAG, OutputParser, ProtocolRecord, VagrantError, error_exit_message,
};

/// Records decoded from one invocation, plus the invocation's failure if any.
///
/// A failing invocation may still emit structured lines, so the two are
/// independent outputs rather than a `Result`.
#[derive(Debug)]
pub struct CommandOutcome {
    pub records: Vec<ProtocolRecord>,
    pub error: Option<VagrantError>,
}

impl CommandOutcome {
    /// Drop the records if the invocation failed.
    ///
    /// # Errors
    ///
    /// Returns the invocation error when one was recorded.
    pub fn into_result(self) -> Result<Vec<ProtocolRecord>, VagrantError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.records),
        }
    }
}

/// Runs the configured binary in machine-readable mode through a [`CommandExecutor`].
///
/// Generic over `R: CommandExecutor` so that tests can inject a recording
/// executor without spawning real processes.
pub struct CommandDispatcher<R: CommandExecutor> {
    binary: String,
    parser: OutputParser,
    executor: R,
}

impl<R: CommandExecutor> CommandDispatcher<R> {
    pub fn new(binary: impl Into<String>, parser: OutputParser, executor: R) -> Self {
        Self {
            binary: binary.into(),
            parser,
            executor,
        }
    }

    /// Binary name passed to the executor.
    #[must_use]
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run `<binary> --machine-readable <subcommand_args...>`.
    ///
    /// Whatever output was captured is decoded even when the tool fails.
    pub async fn execute(&self, subcommand_args: &[String]) -> CommandOutcome {
        let mut args = Vec::with_capacity(subcommand_args.len() + 1);
        args.push(MACHINE_READABLE_FLAG);
        args.extend(subcommand_args.iter().map(String::as_str));
        let command = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!(%command, "running vagrant");

        let output = match self.executor.run(&self.binary, &args).await {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(%command, error = %format!("{err:#}"), "vagrant could not be run");
                return CommandOutcome {
                    records: Vec::new(),
                    error: Some(VagrantError::Invocation {
                        command,
                        diagnostic: None,
                        source: err.into(),
                    }),
                };
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        let records = self.parser.parse_stream(&text);
        tracing::debug!(records = records.len(), status = %output.status, "decoded vagrant output");

        let error = if output.status.success() {
            None
        } else {
            let diagnostic = error_exit_message(&records);
            tracing::debug!(
                %command,
                status = %output.status,
                ?diagnostic,
                "vagrant exited abnormally"
            );
            Some(VagrantError::Invocation {
                source: anyhow::anyhow!("{} {}", self.binary, output.status).into(),
                command,
                diagnostic,
            })
        };

        CommandOutcome { records, error }
    }
}
