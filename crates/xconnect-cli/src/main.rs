mod app;
mod cli;
mod commands;
mod types;
mod util;

use clap::Parser;

/// Main entry point for the XConnect CLI application.
///
/// Parses command-line arguments, installs logging and dispatches to the main
/// application logic.
fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing();
    app::run(cli)
}

/// Logs go to stderr so that stdout stays parseable with `--json`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
