//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`, never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod client;
pub mod dispatcher;
pub mod ports;
pub mod services;
pub mod working_dir;

pub use client::VagrantClient;
pub use dispatcher::{CommandDispatcher, CommandOutcome};
pub use ports::{CommandExecutor, ConfigStore, DirectoryContext, PathResolver, SshConfigDecoder};
