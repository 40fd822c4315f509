//! Per-operation option structs and their argument builders.
//!
//! Each option struct is mapped by its own pure function; there is no shared
//! base type. Flag order is fixed and part of the contract.

use std::path::PathBuf;

/// Flag that forces Vagrant into its structured output mode.
pub const MACHINE_READABLE_FLAG: &str = "--machine-readable";

// ── Option structs ────────────────────────────────────────────────────────────

/// Options for `vagrant up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpOptions {
    /// Directory to run in. `None` keeps the current one.
    pub working_directory: Option<PathBuf>,
    pub provision: bool,
    /// Provisioners to run, joined with `,`.
    pub provision_with: Vec<String>,
    pub destroy_on_error: bool,
    pub parallel: bool,
    /// Provider name. Empty lets Vagrant pick.
    pub provider: String,
    pub install_provider: bool,
}

impl Default for UpOptions {
    fn default() -> Self {
        Self {
            working_directory: None,
            provision: true,
            provision_with: Vec::new(),
            destroy_on_error: true,
            parallel: true,
            provider: String::new(),
            install_provider: true,
        }
    }
}

/// Options for `vagrant destroy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyOptions {
    pub working_directory: Option<PathBuf>,
    /// Skip the confirmation prompt. Has no negative form.
    pub force: bool,
    pub parallel: bool,
}

impl Default for DestroyOptions {
    fn default() -> Self {
        Self {
            working_directory: None,
            force: true,
            parallel: true,
        }
    }
}

/// Options for `vagrant ssh-config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshConfigOptions {
    pub working_directory: Option<PathBuf>,
    /// Host name to emit instead of the machine name. Empty omits `--name`.
    pub name: String,
}

// ── Operation ─────────────────────────────────────────────────────────────────

/// One client operation together with its options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Up(UpOptions),
    Destroy(DestroyOptions),
    SshConfig(SshConfigOptions),
    BoxList,
}

impl Operation {
    /// Subcommand and flags, without the machine-readable prefix.
    #[must_use]
    pub fn subcommand_args(&self) -> Vec<String> {
        match self {
            Self::Up(options) => up_args(options),
            Self::Destroy(options) => destroy_args(options),
            Self::SshConfig(options) => ssh_config_args(options),
            Self::BoxList => box_list_args(),
        }
    }

    /// Full argument list as passed to the binary.
    #[must_use]
    pub fn command_line(&self) -> Vec<String> {
        let mut args = vec![MACHINE_READABLE_FLAG.to_string()];
        args.extend(self.subcommand_args());
        args
    }

    /// Directory the operation should run in, if any.
    #[must_use]
    pub fn working_directory(&self) -> Option<&std::path::Path> {
        match self {
            Self::Up(options) => options.working_directory.as_deref(),
            Self::Destroy(options) => options.working_directory.as_deref(),
            Self::SshConfig(options) => options.working_directory.as_deref(),
            Self::BoxList => None,
        }
    }
}

// ── Builders ──────────────────────────────────────────────────────────────────

fn toggle(args: &mut Vec<String>, enabled: bool, name: &str) {
    if enabled {
        args.push(format!("--{name}"));
    } else {
        args.push(format!("--no-{name}"));
    }
}

/// Arguments for `up`.
#[must_use]
pub fn up_args(options: &UpOptions) -> Vec<String> {
    let mut args = vec!["up".to_string()];
    toggle(&mut args, options.provision, "provision");
    if !options.provision_with.is_empty() {
        args.push("--provision-with".to_string());
        args.push(options.provision_with.join(","));
    }
    toggle(&mut args, options.destroy_on_error, "destroy-on-error");
    toggle(&mut args, options.parallel, "parallel");
    if !options.provider.is_empty() {
        args.push("--provider".to_string());
        args.push(options.provider.clone());
    }
    toggle(&mut args, options.install_provider, "install-provider");
    args
}

/// Arguments for `destroy`.
#[must_use]
pub fn destroy_args(options: &DestroyOptions) -> Vec<String> {
    let mut args = vec!["destroy".to_string()];
    if options.force {
        args.push("--force".to_string());
    }
    toggle(&mut args, options.parallel, "parallel");
    args
}

/// Arguments for `ssh-config`.
#[must_use]
pub fn ssh_config_args(options: &SshConfigOptions) -> Vec<String> {
    let mut args = vec!["ssh-config".to_string()];
    if !options.name.is_empty() {
        args.push("--name".to_string());
        args.push(options.name.clone());
    }
    args
}

/// Arguments for `box list`.
#[must_use]
pub fn box_list_args() -> Vec<String> {
    vec!["box".to_string(), "list".to_string()]
}
