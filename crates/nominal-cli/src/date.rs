//! # Date Subcommand
//!
//! Parses text or converts a millisecond count into a date, then reports
//! its ISO and UTC renderings alongside the millisecond offset.

use clap::{Args, Subcommand};
use serde::Serialize;

use nominal_core::{parse_date, Date, Milliseconds, NominalError, TemporalError};

/// Arguments for the date subcommand.
#[derive(Args, Debug)]
pub struct DateArgs {
    /// Emit the report as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: DateCommand,
}

/// Date operations.
#[derive(Subcommand, Debug)]
pub enum DateCommand {
    /// Parse a textual timestamp.
    Parse {
        /// RFC 3339, RFC 2822, or `YYYY[-MM[-DD]]` text.
        input: String,
    },
    /// Convert milliseconds since the Unix epoch.
    FromMillis {
        /// Millisecond offset; may be negative or fractional.
        #[arg(allow_hyphen_values = true)]
        millis: f64,
    },
}

/// Renderings of a valid date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateReport {
    /// ISO 8601 extended rendering.
    pub iso: String,
    /// RFC 7231 rendering.
    pub utc: String,
    /// Milliseconds since the Unix epoch.
    pub millis: Milliseconds,
}

impl DateReport {
    fn from_date(date: &Date) -> Result<Self, TemporalError> {
        Ok(Self {
            iso: date.to_iso_string()?,
            utc: date.to_utc_string(),
            millis: date.get_time(),
        })
    }

    /// Render as plain lines or as JSON.
    pub fn render(&self, json: bool) -> String {
        if json {
            // Three string/number fields cannot fail to serialize.
            serde_json::to_string_pretty(self).unwrap_or_default()
        } else {
            format!("{}\n{}\n{}", self.iso, self.utc, self.millis)
        }
    }
}

/// Run the date subcommand.
///
/// # Errors
///
/// Returns [`NominalError::Temporal`] if the input does not yield a valid
/// date.
pub fn run_date(args: &DateArgs) -> Result<DateReport, NominalError> {
    let date = match &args.command {
        DateCommand::Parse { input } => parse_date(input.as_str())
            .ok_or_else(|| TemporalError::Unparseable(input.clone()))?,
        DateCommand::FromMillis { millis } => Date::from_milliseconds(Milliseconds::new(*millis)),
    };
    Ok(DateReport::from_date(&date)?)
}
