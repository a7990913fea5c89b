//! Deptree CLI binary.

use std::process::ExitCode;

use colored::Colorize;
use deptree::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the deptree CLI.
///
/// Everything runs synchronously on the main thread. Logs go to stderr so
/// that stdout only ever carries rendered output.
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Can be overridden via RUST_LOG, e.g. RUST_LOG=deptree=trace
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Starting deptree");

    match cli.execute() {
        Ok(()) => {
            tracing::debug!("Deptree completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
