//! # Error Types
//!
//! Recoverable failures of the validating constructors and the date parser.
//! All errors use `thiserror` for derive-based `Display` and `Error`.
//!
//! Fatal aborts (`NonEmptyString::unsafe_from_string`, `head`, `last`) are
//! panics, not variants here: they mark precondition violations that correct
//! programs never reach.

use thiserror::Error;

/// Top-level error type for the nominal brands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NominalError {
    /// A brand's construction-time invariant was not met.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A timestamp could not be produced or rendered.
    #[error("temporal error: {0}")]
    Temporal(#[from] TemporalError),
}

/// A value failed a brand's construction-time check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The carrier string was empty.
    #[error("{brand} requires a non-empty string")]
    EmptyString {
        /// Name of the brand that rejected the value.
        brand: &'static str,
    },
}

/// Failure in the timestamp collaborator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemporalError {
    /// The date's time value is not finite, so it has no calendar rendering.
    #[error("invalid date: time value is {0}")]
    InvalidDate(f64),

    /// The input could not be interpreted as a timestamp.
    #[error("unparseable date input: {0:?}")]
    Unparseable(String),
}
