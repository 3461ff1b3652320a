//! # nominal-cli — Command-Line Access to the Brands
//!
//! ## Subcommands
//!
//! - `string` — lift text into a `NonEmptyString` and transform it
//! - `date` — parse text or convert milliseconds, report renderings
//! - `now` — sample the current instant in milliseconds
//!
//! Argument parsing lives here so it can be exercised without a process;
//! `main` only installs tracing and prints.

pub mod date;
pub mod text;

use clap::Parser;

use nominal_core::{Clock, NominalError};

/// Branded scalar toolbox.
///
/// Constructs non-empty strings, parses and renders dates, and samples the
/// clock, all through the nominal brands.
#[derive(Parser, Debug)]
#[command(name = "nominal", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Construct and transform a non-empty string.
    String(text::StringArgs),
    /// Parse or convert a date.
    Date(date::DateArgs),
    /// Print milliseconds since the Unix epoch.
    Now,
}

/// Dispatch a parsed command and return what should be printed.
///
/// # Errors
///
/// Propagates validation and temporal failures from the handlers.
pub fn run(cli: &Cli, clock: &impl Clock) -> Result<String, NominalError> {
    match &cli.command {
        Commands::String(args) => Ok(text::run_string(args)?.into_string()),
        Commands::Date(args) => Ok(date::run_date(args)?.render(args.json)),
        Commands::Now => Ok(clock.now().to_string()),
    }
}
