//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Drive Vagrant through its machine-readable output
#[derive(Parser)]
#[command(
    name = "vagabond",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (also honours `NO_COLOR`)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug details and Vagrant's own output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Vagrant executable to run (overrides the config file)
    #[arg(long, global = true, env = "VAGABOND_BINARY")]
    pub binary: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create and provision the environment
    Up(commands::up::UpArgs),

    /// Destroy the environment
    Destroy(commands::destroy::DestroyArgs),

    /// Show SSH connection details for each machine
    SshConfig(commands::ssh_config::SshConfigArgs),

    /// Manage locally cached boxes
    #[command(name = "box", subcommand)]
    Boxes(commands::boxes::BoxCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose,
            binary,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            binary,
            verbose,
        });

        match command {
            Command::Up(args) => commands::up::run(&app, args).await,
            Command::Destroy(args) => commands::destroy::run(&app, args).await,
            Command::SshConfig(args) => commands::ssh_config::run(&app, args).await,
            Command::Boxes(cmd) => commands::boxes::run(&app, cmd).await,
            Command::Version => commands::version::run(&app),
        }
    }
}
