//! SSH configuration assembled from `vagrant ssh-config`.
//!
//! Pure types and functions only; text decoding lives behind the
//! `SshConfigDecoder` port.

use serde::Serialize;

use crate::domain::record::ProtocolRecord;

/// Record kind carrying one host block.
pub const SSH_CONFIG_KIND: &str = "ssh-config";

/// Concatenate every `ssh-config` record into OpenSSH config text.
///
/// Literal `\n` escapes inside the payload become real newlines and each
/// block is terminated with a newline.
#[must_use]
pub fn assemble_ssh_config(records: &[ProtocolRecord]) -> String {
    let mut text = String::new();
    for record in records.iter().filter(|r| r.kind == SSH_CONFIG_KIND) {
        let Some(block) = record.data.first() else {
            continue;
        };
        text.push_str(&block.replace("\\n", "\n"));
        text.push('\n');
    }
    text
}

// ── Decoded structure ─────────────────────────────────────────────────────────

/// One `Host` block with its options in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshHostBlock {
    /// Host patterns; `*`, `?` and `!` negation are honoured.
    pub patterns: Vec<String>,
    /// `(keyword, value)` pairs; keywords keep their original case.
    pub options: Vec<(String, String)>,
}

impl SshHostBlock {
    /// `true` if `host` matches at least one positive pattern and no negated one.
    #[must_use]
    pub fn matches(&self, host: &str) -> bool {
        let mut matched = false;
        for pattern in &self.patterns {
            if let Some(negated) = pattern.strip_prefix('!') {
                if glob_match(negated, host) {
                    return false;
                }
            } else if glob_match(pattern, host) {
                matched = true;
            }
        }
        matched
    }
}

/// Decoded OpenSSH configuration, queryable by host and keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshConfig {
    pub blocks: Vec<SshHostBlock>,
}

impl SshConfig {
    /// First value of `key` for `host`, following OpenSSH's first-match rule.
    /// Keywords compare case-insensitively.
    #[must_use]
    pub fn get(&self, host: &str, key: &str) -> Option<&str> {
        self.get_all(host, key).into_iter().next()
    }

    /// Every value of `key` for `host`, in file order (e.g. repeated `IdentityFile`).
    #[must_use]
    pub fn get_all(&self, host: &str, key: &str) -> Vec<&str> {
        self.blocks
            .iter()
            .filter(|block| block.matches(host))
            .flat_map(|block| block.options.iter())
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Literal host names declared in the config, in order, without wildcards.
    #[must_use]
    pub fn hosts(&self) -> Vec<&str> {
        let mut hosts: Vec<&str> = Vec::new();
        for pattern in self.blocks.iter().flat_map(|b| b.patterns.iter()) {
            let literal = !pattern.contains(['*', '?', '!']);
            if literal && !hosts.contains(&pattern.as_str()) {
                hosts.push(pattern);
            }
        }
        hosts
    }

    /// Connection summary for every literal host.
    #[must_use]
    pub fn endpoints(&self) -> Vec<SshEndpoint> {
        self.hosts()
            .into_iter()
            .map(|host| SshEndpoint {
                host: host.to_string(),
                hostname: self.get(host, "HostName").map(str::to_string),
                user: self.get(host, "User").map(str::to_string),
                port: self.get(host, "Port").and_then(|p| p.parse().ok()),
                identity_files: self
                    .get_all(host, "IdentityFile")
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }
}

/// How to reach one machine over SSH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SshEndpoint {
    pub host: String,
    pub hostname: Option<String>,
    pub user: Option<String>,
    pub port: Option<u16>,
    pub identity_files: Vec<String>,
}

/// Glob match supporting `*` (any run) and `?` (one char).
/// Literal characters compare ASCII case-insensitively, as host names do.
fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let (mut p, mut t) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p].eq_ignore_ascii_case(&text[t]))
        {
            p += 1;
            t += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, t));
            p += 1;
        } else if let Some((star, consumed)) = backtrack {
            p = star + 1;
            t = consumed + 1;
            backtrack = Some((star, consumed + 1));
        } else {
            return false;
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}
