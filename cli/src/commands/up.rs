//! `vagabond up`: create and provision the environment.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::CwdArg;
use crate::domain::UpOptions;

/// Arguments for the up command.
#[derive(Args, Debug, Clone, Default)]
pub struct UpArgs {
    #[command(flatten)]
    pub cwd: CwdArg,

    /// Skip provisioners
    #[arg(long)]
    pub no_provision: bool,

    /// Run only the named provisioners (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub provision_with: Vec<String>,

    /// Keep machines that fail to come up
    #[arg(long)]
    pub no_destroy_on_error: bool,

    /// Bring machines up one at a time
    #[arg(long)]
    pub no_parallel: bool,

    /// Provider to back the machines
    #[arg(long)]
    pub provider: Option<String>,

    /// Do not install the provider if it is missing
    #[arg(long)]
    pub no_install_provider: bool,
}

impl UpArgs {
    /// Map flags onto [`UpOptions`]; anything not given keeps its default.
    #[must_use]
    pub fn into_options(self) -> UpOptions {
        UpOptions {
            working_directory: self.cwd.cwd,
            provision: !self.no_provision,
            provision_with: self.provision_with,
            destroy_on_error: !self.no_destroy_on_error,
            parallel: !self.no_parallel,
            provider: self.provider.unwrap_or_default(),
            install_provider: !self.no_install_provider,
        }
    }
}

/// Run the up command.
///
/// # Errors
///
/// Returns an error if Vagrant cannot be found or `vagrant up` fails.
pub async fn run(app: &AppContext, args: UpArgs) -> Result<ExitCode> {
    let client = app.client()?;
    let options = args.into_options();
    let records = client.up(&options).await?;
    app.renderer().render_records("up", &records)?;
    Ok(ExitCode::SUCCESS)
}
