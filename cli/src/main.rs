//! Vagabond - drive Vagrant through its machine-readable output

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vagabond_cli::cli::Cli;
use vagabond_cli::domain::VagrantError;
use vagabond_cli::output::json::format_error;
use vagabond_cli::output::stderr_colors;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, stderr_colors(cli.no_color));
    let json = cli.json;

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            if json {
                let code = e
                    .downcast_ref::<VagrantError>()
                    .map_or("COMMAND_FAILED", VagrantError::code);
                match format_error(&format!("{e:#}"), code) {
                    Ok(obj) => println!("{obj}"),
                    Err(_) => eprintln!("Error: {e:#}"),
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool, ansi: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}
