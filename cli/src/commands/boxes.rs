//! `vagabond box`: inspect locally cached boxes.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;

/// Box subcommands.
#[derive(Subcommand)]
pub enum BoxCommand {
    /// List installed boxes
    List,
}

/// Run the box command.
///
/// # Errors
///
/// Returns an error if Vagrant cannot be found or `vagrant box list` fails.
pub async fn run(app: &AppContext, cmd: BoxCommand) -> Result<ExitCode> {
    match cmd {
        BoxCommand::List => list(app).await,
    }
}

async fn list(app: &AppContext) -> Result<ExitCode> {
    let client = app.client()?;
    let boxes = client.box_list().await?;
    app.renderer().render_boxes(&boxes)?;
    Ok(ExitCode::SUCCESS)
}
