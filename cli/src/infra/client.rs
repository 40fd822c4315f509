//! Production wiring of `VagrantClient`.

use crate::application::VagrantClient;
use crate::domain::{ClientConfig, VagrantError};
use crate::infra::command_runner::TokioCommandExecutor;
use crate::infra::directory::ProcessDirectory;
use crate::infra::path::WhichPathResolver;
use crate::infra::ssh_config::OpenSshConfigDecoder;

/// `VagrantClient` backed by real processes and the real working directory.
pub type SystemClient = VagrantClient<TokioCommandExecutor, ProcessDirectory, OpenSshConfigDecoder>;

/// Build a client that runs the configured binary on this machine.
///
/// # Errors
///
/// Returns [`VagrantError::ExecutableNotFound`] if the binary is not on `$PATH`.
pub fn system_client(config: &ClientConfig) -> Result<SystemClient, VagrantError> {
    VagrantClient::new(
        config,
        &WhichPathResolver,
        TokioCommandExecutor::new(config.timeout()).with_stream(config.stream_output),
        ProcessDirectory,
        OpenSshConfigDecoder,
    )
}
