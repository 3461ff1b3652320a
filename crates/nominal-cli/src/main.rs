//! # nominal CLI Entry Point
//!
//! Installs tracing, parses arguments, and dispatches to `nominal_cli::run`.

use clap::Parser;

use nominal_cli::Cli;
use nominal_core::SystemClock;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "dispatching");

    let output = nominal_cli::run(&cli, &SystemClock)?;
    println!("{output}");
    Ok(())
}
