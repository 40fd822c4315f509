//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, `$PATH`
//! lookup, working-directory access, ssh_config decoding and config loading.
//!
//! Imports from `crate::domain` and `crate::application` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod client;
pub mod command_runner;
pub mod config;
pub mod directory;
pub mod path;
pub mod ssh_config;

pub use client::{SystemClient, system_client};
