//! `vagabond destroy`: tear the environment down.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::CwdArg;
use crate::domain::DestroyOptions;

/// Arguments for the destroy command.
#[derive(Args, Debug, Clone, Default)]
pub struct DestroyArgs {
    #[command(flatten)]
    pub cwd: CwdArg,

    /// Let Vagrant ask for confirmation instead of passing --force
    #[arg(long)]
    pub no_force: bool,

    /// Destroy machines one at a time
    #[arg(long)]
    pub no_parallel: bool,
}

impl DestroyArgs {
    #[must_use]
    pub fn into_options(self) -> DestroyOptions {
        DestroyOptions {
            working_directory: self.cwd.cwd,
            force: !self.no_force,
            parallel: !self.no_parallel,
        }
    }
}

/// Run the destroy command.
///
/// # Errors
///
/// Returns an error if Vagrant cannot be found or `vagrant destroy` fails.
pub async fn run(app: &AppContext, args: DestroyArgs) -> Result<ExitCode> {
    let client = app.client()?;
    let records = client.destroy(&args.into_options()).await?;
    app.renderer().render_records("destroy", &records)?;
    Ok(ExitCode::SUCCESS)
}
