//! Environment use-cases: `up`, `destroy`, `ssh-config`.
//!
//! Each runs inside the working directory named by its options, if any.

use crate::application::dispatcher::CommandDispatcher;
use crate::application::ports::{CommandExecutor, DirectoryContext, SshConfigDecoder};
use crate::application::working_dir::run_scoped;
use crate::domain::{
    DestroyOptions, Operation, ProtocolRecord, SshConfig, SshConfigOptions, UpOptions,
    VagrantError, assemble_ssh_config,
};

/// Run one operation in its working directory and return its records.
///
/// # Errors
///
/// Returns a directory-scope error or the invocation error.
pub async fn run_operation(
    dispatcher: &CommandDispatcher<impl CommandExecutor>,
    dirs: &impl DirectoryContext,
    operation: &Operation,
) -> Result<Vec<ProtocolRecord>, VagrantError> {
    run_scoped(dirs, operation.working_directory(), || async move {
        dispatcher
            .execute(&operation.subcommand_args())
            .await
            .into_result()
    })
    .await
}

/// Bring the environment up.
///
/// # Errors
///
/// Returns an error if the directory scope or `vagrant up` fails.
pub async fn up(
    dispatcher: &CommandDispatcher<impl CommandExecutor>,
    dirs: &impl DirectoryContext,
    options: &UpOptions,
) -> Result<Vec<ProtocolRecord>, VagrantError> {
    run_operation(dispatcher, dirs, &Operation::Up(options.clone())).await
}

/// Destroy the environment.
///
/// # Errors
///
/// Returns an error if the directory scope or `vagrant destroy` fails.
pub async fn destroy(
    dispatcher: &CommandDispatcher<impl CommandExecutor>,
    dirs: &impl DirectoryContext,
    options: &DestroyOptions,
) -> Result<Vec<ProtocolRecord>, VagrantError> {
    run_operation(dispatcher, dirs, &Operation::Destroy(options.clone())).await
}

/// Resolve the SSH configuration of every machine in the environment.
///
/// # Errors
///
/// Returns [`VagrantError::Decode`] if the assembled text cannot be decoded,
/// otherwise the directory-scope or invocation error.
pub async fn ssh_config(
    dispatcher: &CommandDispatcher<impl CommandExecutor>,
    dirs: &impl DirectoryContext,
    decoder: &impl SshConfigDecoder,
    options: &SshConfigOptions,
) -> Result<SshConfig, VagrantError> {
    let operation = &Operation::SshConfig(options.clone());
    run_scoped(dirs, operation.working_directory(), || async move {
        let records = dispatcher
            .execute(&operation.subcommand_args())
            .await
            .into_result()?;
        let text = assemble_ssh_config(&records);
        decoder
            .decode(&text)
            .map_err(|source| VagrantError::Decode {
                source: source.into(),
            })
    })
    .await
}
