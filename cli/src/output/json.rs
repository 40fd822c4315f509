//! JSON output helpers.
//!
//! Every `--json` document is a pretty-printed object written to stdout.
//! Failures use the error object produced by [`format_error`].

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::{ProtocolRecord, SshEndpoint, VagrantBox};

/// Format the JSON error object printed when a command fails.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

#[derive(Serialize)]
struct BoxesDocument<'a> {
    boxes: &'a [VagrantBox],
}

#[derive(Serialize)]
struct HostsDocument<'a> {
    hosts: &'a [SshEndpoint],
}

#[derive(Serialize)]
struct RecordsDocument<'a> {
    action: &'a str,
    records: &'a [ProtocolRecord],
}

/// `{"boxes": [...]}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_boxes(boxes: &[VagrantBox]) -> Result<String> {
    serde_json::to_string_pretty(&BoxesDocument { boxes }).context("JSON serialization failed")
}

/// `{"hosts": [...]}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_endpoints(hosts: &[SshEndpoint]) -> Result<String> {
    serde_json::to_string_pretty(&HostsDocument { hosts }).context("JSON serialization failed")
}

/// `{"action": "...", "records": [...]}`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_records(action: &str, records: &[ProtocolRecord]) -> Result<String> {
    serde_json::to_string_pretty(&RecordsDocument { action, records })
        .context("JSON serialization failed")
}

/// Writes JSON documents to stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_boxes(&self, boxes: &[VagrantBox]) -> Result<()> {
        println!("{}", format_boxes(boxes)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_endpoints(&self, endpoints: &[SshEndpoint]) -> Result<()> {
        println!("{}", format_endpoints(endpoints)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_records(&self, action: &str, records: &[ProtocolRecord]) -> Result<()> {
        println!("{}", format_records(action, records)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        let obj = serde_json::json!({ "version": version });
        println!(
            "{}",
            serde_json::to_string_pretty(&obj).context("JSON serialization failed")?
        );
        Ok(())
    }
}
