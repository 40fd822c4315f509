//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::domain::{ProtocolRecord, SshEndpoint, VagrantBox};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("vagabond {version}");
    }

    /// Render the box inventory as an aligned table.
    pub fn render_boxes(&self, boxes: &[VagrantBox]) {
        if boxes.is_empty() {
            self.ctx
                .info("No boxes installed. Add one: vagrant box add <name>");
            return;
        }
        if self.ctx.quiet {
            return;
        }
        let mut lines = format_box_table(boxes).into_iter();
        if let Some(header) = lines.next() {
            println!("  {}", header.style(self.ctx.styles.bold));
        }
        for line in lines {
            println!("  {line}");
        }
    }

    /// Render one section per SSH host.
    pub fn render_endpoints(&self, endpoints: &[SshEndpoint]) {
        if endpoints.is_empty() {
            self.ctx.warn("No SSH hosts reported");
            return;
        }
        for (i, endpoint) in endpoints.iter().enumerate() {
            if i > 0 && !self.ctx.quiet {
                println!();
            }
            self.ctx.header(&format!("Host {}", endpoint.host));
            if let Some(hostname) = &endpoint.hostname {
                self.ctx.kv("HostName:", hostname);
            }
            if let Some(user) = &endpoint.user {
                self.ctx.kv("User:    ", user);
            }
            if let Some(port) = endpoint.port {
                self.ctx.kv("Port:    ", &port.to_string());
            }
            for identity in &endpoint.identity_files {
                self.ctx.kv("Identity:", identity);
            }
        }
    }

    /// Render machine states reported by `up` / `destroy`, then a summary.
    pub fn render_records(&self, action: &str, records: &[ProtocolRecord]) {
        for record in records.iter().filter(|r| r.kind == "state") {
            let target = if record.target.is_empty() {
                "(global)"
            } else {
                record.target.as_str()
            };
            self.ctx.kv(&format!("{target}:"), record.first());
        }
        self.ctx.success(&format!("{action} completed"));
    }
}

/// Box table rows, header first, columns padded to the widest cell.
#[must_use]
pub fn format_box_table(boxes: &[VagrantBox]) -> Vec<String> {
    const HEADERS: [&str; 3] = ["NAME", "PROVIDER", "VERSION"];
    let name_width = boxes
        .iter()
        .map(|b| b.name.len())
        .chain([HEADERS[0].len()])
        .max()
        .unwrap_or_default();
    let provider_width = boxes
        .iter()
        .map(|b| b.provider.len())
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or_default();

    let row = |name: &str, provider: &str, version: &str| {
        format!("{name:<name_width$}  {provider:<provider_width$}  {version}")
            .trim_end()
            .to_string()
    };

    std::iter::once(row(HEADERS[0], HEADERS[1], HEADERS[2]))
        .chain(
            boxes
                .iter()
                .map(|b| row(&b.name, &b.provider, &b.version)),
        )
        .collect()
}
