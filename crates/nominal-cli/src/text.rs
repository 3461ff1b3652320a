//! # String Subcommand
//!
//! Lifts the argument into a `NonEmptyString` and applies transforms in a
//! fixed order: case, prepend, append, surround, reverse, then head or last.

use clap::Args;

use nominal_core::{NominalError, NonEmptyString};

/// Arguments for the string subcommand.
#[derive(Args, Debug)]
pub struct StringArgs {
    /// Text to lift; must be non-empty.
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Convert to uppercase.
    #[arg(long, conflicts_with = "lower")]
    pub upper: bool,

    /// Convert to lowercase.
    #[arg(long)]
    pub lower: bool,

    /// Prepend this string.
    #[arg(long, allow_hyphen_values = true)]
    pub prepend: Option<String>,

    /// Append this string.
    #[arg(long, allow_hyphen_values = true)]
    pub append: Option<String>,

    /// Surround with this string.
    #[arg(long, allow_hyphen_values = true)]
    pub surround: Option<String>,

    /// Reverse the characters.
    #[arg(long)]
    pub reverse: bool,

    /// Keep only the first character.
    #[arg(long, conflicts_with = "last")]
    pub head: bool,

    /// Keep only the last character.
    #[arg(long)]
    pub last: bool,
}

/// Run the string subcommand.
///
/// # Errors
///
/// Returns [`NominalError::Validation`] if the text is empty.
pub fn run_string(args: &StringArgs) -> Result<NonEmptyString, NominalError> {
    let mut value = NonEmptyString::new(args.text.as_str())?;
    if args.upper {
        value = value.to_uppercase();
    }
    if args.lower {
        value = value.to_lowercase();
    }
    if let Some(prefix) = &args.prepend {
        value = value.prepend(prefix);
    }
    if let Some(suffix) = &args.append {
        value = value.append(suffix);
    }
    if let Some(outer) = &args.surround {
        value = value.surround(outer);
    }
    if args.reverse {
        value = value.reverse();
    }
    if args.head {
        value = value.head();
    } else if args.last {
        value = value.last();
    }
    tracing::debug!(result = %value, "string transforms applied");
    Ok(value)
}
