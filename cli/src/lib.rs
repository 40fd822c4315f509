//! Vagabond library: a structured client over Vagrant's machine-readable
//! output, plus the CLI built on it. Exposes modules for integration testing.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
