//! `vagabond ssh-config`: show how to reach each machine.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::CwdArg;
use crate::domain::SshConfigOptions;

/// Arguments for the ssh-config command.
#[derive(Args, Debug, Clone, Default)]
pub struct SshConfigArgs {
    #[command(flatten)]
    pub cwd: CwdArg,

    /// Host name to emit instead of the machine name
    #[arg(long)]
    pub name: Option<String>,
}

/// Run the ssh-config command.
///
/// # Errors
///
/// Returns an error if Vagrant fails or its output cannot be decoded.
pub async fn run(app: &AppContext, args: SshConfigArgs) -> Result<ExitCode> {
    let client = app.client()?;
    let options = SshConfigOptions {
        working_directory: args.cwd.cwd,
        name: args.name.unwrap_or_default(),
    };
    let config = client.ssh_config(&options).await?;
    app.renderer().render_endpoints(&config.endpoints())?;
    Ok(ExitCode::SUCCESS)
}
