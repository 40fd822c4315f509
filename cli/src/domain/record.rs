//! Decoder for Vagrant's `--machine-readable` line protocol.
//!
//! Each meaningful line has the shape `timestamp,target,kind,data...`.
//! See <https://developer.hashicorp.com/vagrant/docs/cli/machine-readable>.
//!
//! Pure functions only: no I/O, no async.

use serde::Serialize;

/// Kinds that carry no structured meaning and are dropped while parsing.
pub const DEFAULT_IGNORED_KINDS: &[&str] = &["ui", "metadata", "action"];

/// Kind of the record Vagrant emits for the error that ended a run.
pub const ERROR_EXIT_KIND: &str = "error-exit";

const VAGRANT_COMMA: &str = "%!(VAGRANT_COMMA)";

/// One decoded line of machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtocolRecord {
    /// Opaque timestamp; upstream does not guarantee it is numeric.
    pub timestamp: String,
    /// Machine the line concerns. Empty for global lines.
    pub target: String,
    /// Semantic tag, e.g. `box-name`, `state`, `ssh-config`.
    pub kind: String,
    /// Remaining fields, split on `,`. Never empty.
    pub data: Vec<String>,
}

impl ProtocolRecord {
    /// First data field, or `""`.
    #[must_use]
    pub fn first(&self) -> &str {
        self.data.first().map_or("", String::as_str)
    }
}

/// Message of the last `error-exit` record, if any.
///
/// The first data field is the error class and the rest is the message.
/// Vagrant's comma and newline escapes are restored.
#[must_use]
pub fn error_exit_message(records: &[ProtocolRecord]) -> Option<String> {
    let record = records.iter().rev().find(|r| r.kind == ERROR_EXIT_KIND)?;
    let message = match record.data.get(1..) {
        Some(rest) if !rest.is_empty() => rest.join(","),
        _ => record.first().to_string(),
    };
    let message = message
        .replace(VAGRANT_COMMA, ",")
        .replace(ESCAPED_NEWLINE, "\n")
        .trim()
        .to_string();
    (!message.is_empty()).then_some(message)
}

/// Line parser with a configurable set of ignored kinds.
#[derive(Debug, Clone)]
pub struct OutputParser {
    ignored_kinds: Vec<String>,
}

impl Default for OutputParser {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_KINDS.iter().copied())
    }
}

impl OutputParser {
    /// Create a parser that drops the given kinds.
    pub fn new<I, S>(ignored_kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_kinds: ignored_kinds.into_iter().map(Into::into).collect(),
        }
    }

    /// Kinds this parser drops.
    #[must_use]
    pub fn ignored_kinds(&self) -> &[String] {
        &self.ignored_kinds
    }

    /// Decode one physical line.
    ///
    /// Returns `None` for blank lines, lines with fewer than four
    /// comma-separated segments, and lines whose kind is ignored.
    #[must_use]
    pub fn parse_line(&self, raw: &str) -> Option<ProtocolRecord> {
        let mut parts = raw.trim().splitn(4, ',');
        let timestamp = parts.next()?;
        let target = parts.next()?;
        let kind = parts.next()?;
        let rest = parts.next()?;

        if self.ignored_kinds.iter().any(|k| k == kind) {
            return None;
        }

        Some(ProtocolRecord {
            timestamp: timestamp.to_string(),
            target: target.to_string(),
            kind: kind.to_string(),
            data: rest.split(',').map(str::to_string).collect(),
        })
    }

    /// Decode a whole captured output, preserving source order.
    ///
    /// A literal `\n` escape only separates records when it is directly
    /// followed by the next record's timestamp; inside a data payload it is
    /// kept verbatim. Anything that is not a protocol line is skipped.
    #[must_use]
    pub fn parse_stream(&self, raw: &str) -> Vec<ProtocolRecord> {
        raw.lines()
            .flat_map(split_escaped_records)
            .filter_map(|line| self.parse_line(line))
            .collect()
    }
}

const ESCAPED_NEWLINE: &str = "\\n";

/// Split one physical line at escaped newlines that start a new record.
fn split_escaped_records(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut search = 0;
    while let Some(offset) = line[search..].find(ESCAPED_NEWLINE) {
        let at = search + offset;
        let next = at + ESCAPED_NEWLINE.len();
        if starts_record(&line[next..]) {
            pieces.push(&line[start..at]);
            start = next;
        }
        search = next;
    }
    pieces.push(&line[start..]);
    pieces
}

/// `true` when `text` begins with `<digits>,`, i.e. a record timestamp.
fn starts_record(text: &str) -> bool {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && text.as_bytes().get(digits) == Some(&b',')
}
