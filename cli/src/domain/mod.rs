//! Domain layer: pure protocol decoding, argument building, and folds.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod inventory;
pub mod options;
pub mod record;
pub mod ssh;

pub use config::{ClientConfig, validate_config};
pub use error::{ConfigError, DirectoryAction, VagrantError};
pub use inventory::{VagrantBox, aggregate_boxes};
pub use options::{DestroyOptions, MACHINE_READABLE_FLAG, Operation, SshConfigOptions, UpOptions};
pub use record::{OutputParser, ProtocolRecord, error_exit_message};
pub use ssh::{SshConfig, SshEndpoint, SshHostBlock, assemble_ssh_config};
