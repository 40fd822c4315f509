//! Infrastructure implementation of the `SshConfigDecoder` port.
//!
//! A line-oriented OpenSSH config reader covering what `vagrant ssh-config`
//! emits: `Host` blocks, `Keyword value` and `Keyword=value` options, comments
//! and quoted values. Options before the first `Host` apply to every host.

use anyhow::{Result, bail};

use crate::application::ports::SshConfigDecoder;
use crate::domain::{SshConfig, SshHostBlock};

const MAX_LINE_LENGTH: usize = 8192;

/// Production `SshConfigDecoder`.
pub struct OpenSshConfigDecoder;

impl SshConfigDecoder for OpenSshConfigDecoder {
    fn decode(&self, text: &str) -> Result<SshConfig> {
        parse(text)
    }
}

fn parse(text: &str) -> Result<SshConfig> {
    let mut blocks: Vec<SshHostBlock> = Vec::new();
    let mut current: Option<SshHostBlock> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        if raw.len() > MAX_LINE_LENGTH {
            bail!("line {line_number} exceeds maximum length of {MAX_LINE_LENGTH} bytes");
        }
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (keyword, value) = split_keyword(line);
        match keyword.to_ascii_lowercase().as_str() {
            "host" => {
                let patterns: Vec<String> = value
                    .split_whitespace()
                    .map(|p| unquote(p).to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                if patterns.is_empty() {
                    bail!("Host directive requires at least one pattern at line {line_number}");
                }
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(SshHostBlock {
                    patterns,
                    options: Vec::new(),
                });
            }
            "include" => {
                tracing::debug!(line = line_number, "skipping Include directive");
            }
            "match" => bail!("Match blocks are not supported (line {line_number})"),
            _ => {
                let value = unquote(value);
                if value.is_empty() {
                    bail!("missing value for {keyword} at line {line_number}");
                }
                current
                    .get_or_insert_with(|| SshHostBlock {
                        patterns: vec!["*".to_string()],
                        options: Vec::new(),
                    })
                    .options
                    .push((keyword.to_string(), value.to_string()));
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    Ok(SshConfig { blocks })
}

/// Split `Keyword value` or `Keyword=value` (optionally `Keyword = value`).
fn split_keyword(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (keyword, rest) = line.split_at(end);
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest);
    (keyword, rest.trim())
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
