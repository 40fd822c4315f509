//! `VagrantClient`: the public entry point bundling every port.

use crate::application::dispatcher::{CommandDispatcher, CommandOutcome};
use crate::application::ports::{CommandExecutor, DirectoryContext, PathResolver, SshConfigDecoder};
use crate::application::services::{boxes, environment};
use crate::domain::{
    ClientConfig, DestroyOptions, OutputParser, ProtocolRecord, SshConfig, SshConfigOptions,
    UpOptions, VagrantBox, VagrantError,
};

/// Structured client over Vagrant's machine-readable output.
///
/// Generic over every port so tests can inject doubles. The client holds no
/// mutable state; it stays usable after any failed operation.
pub struct VagrantClient<R: CommandExecutor, D: DirectoryContext, S: SshConfigDecoder> {
    dispatcher: CommandDispatcher<R>,
    dirs: D,
    decoder: S,
}

impl<R, D, S> VagrantClient<R, D, S>
where
    R: CommandExecutor,
    D: DirectoryContext,
    S: SshConfigDecoder,
{
    /// Build a client, checking that the configured binary can be found.
    ///
    /// # Errors
    ///
    /// Returns [`VagrantError::ExecutableNotFound`] if `resolver` cannot find
    /// the binary.
    pub fn new(
        config: &ClientConfig,
        resolver: &impl PathResolver,
        executor: R,
        dirs: D,
        decoder: S,
    ) -> Result<Self, VagrantError> {
        let config = config.clone().normalized();
        let path = resolver.resolve(&config.binary_name).map_err(|source| {
            VagrantError::ExecutableNotFound {
                binary: config.binary_name.clone(),
                source: source.into(),
            }
        })?;
        tracing::debug!(binary = %config.binary_name, path = %path.display(), "resolved vagrant binary");

        let parser = OutputParser::new(config.ignored_kinds);
        Ok(Self {
            dispatcher: CommandDispatcher::new(config.binary_name, parser, executor),
            dirs,
            decoder,
        })
    }

    /// Binary name every command runs.
    #[must_use]
    pub fn binary(&self) -> &str {
        self.dispatcher.binary()
    }

    /// Run an arbitrary subcommand in machine-readable mode.
    pub async fn execute(&self, subcommand_args: &[String]) -> CommandOutcome {
        self.dispatcher.execute(subcommand_args).await
    }

    /// `vagrant up`.
    ///
    /// # Errors
    ///
    /// See [`environment::up`].
    pub async fn up(&self, options: &UpOptions) -> Result<Vec<ProtocolRecord>, VagrantError> {
        environment::up(&self.dispatcher, &self.dirs, options).await
    }

    /// `vagrant destroy`.
    ///
    /// # Errors
    ///
    /// See [`environment::destroy`].
    pub async fn destroy(
        &self,
        options: &DestroyOptions,
    ) -> Result<Vec<ProtocolRecord>, VagrantError> {
        environment::destroy(&self.dispatcher, &self.dirs, options).await
    }

    /// `vagrant ssh-config`, decoded.
    ///
    /// # Errors
    ///
    /// See [`environment::ssh_config`].
    pub async fn ssh_config(&self, options: &SshConfigOptions) -> Result<SshConfig, VagrantError> {
        environment::ssh_config(&self.dispatcher, &self.dirs, &self.decoder, options).await
    }

    /// `vagrant box list`, aggregated.
    ///
    /// # Errors
    ///
    /// See [`boxes::list`].
    pub async fn box_list(&self) -> Result<Vec<VagrantBox>, VagrantError> {
        boxes::list(&self.dispatcher).await
    }
}
