//! Command implementations

pub mod boxes;
pub mod destroy;
pub mod ssh_config;
pub mod up;
pub mod version;

use std::path::PathBuf;

use clap::Args;

/// Working-directory override shared by every environment command.
#[derive(Args, Debug, Clone, Default)]
pub struct CwdArg {
    /// Directory containing the Vagrantfile (defaults to the current one)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}
