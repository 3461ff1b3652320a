//! # Non-Empty Strings
//!
//! [`NonEmptyString`] is a brand over `String` whose carrier is never empty.
//! Non-emptiness is checked once, by [`NonEmptyString::from_string`] (or its
//! `Result`-returning twin [`NonEmptyString::new`]), and is then preserved by
//! every operation in this module:
//!
//! - case conversion, affixing and reversal never shorten a non-empty string
//!   to zero, so they re-wrap their result without re-checking;
//! - [`NonEmptyString::head`] and [`NonEmptyString::last`] take a character
//!   from a string known to have one.
//!
//! A character is a Unicode scalar value (`char`). `reverse`, `head` and
//! `last` operate on `char`s, not grapheme clusters, so combining sequences
//! can be split.
//!
//! Predicates and other read-only queries are left to the caller: borrow the
//! carrier with [`NonEmptyString::as_str`] and use `str` directly.

use std::str::FromStr;

use crate::derive::CombinePreserving;
use crate::error::ValidationError;
use crate::newtype::{unpack, Brand, Newtype};

const EMPTY_LIFT_MESSAGE: &str = "Failed to lift an empty string to NonEmptyString";

/// Brand tag for non-empty strings. Uninhabited; exists only as a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonEmptyStringBrand {}

impl Brand for NonEmptyStringBrand {
    type Carrier = String;
    const NAME: &'static str = "NonEmptyString";

    fn check(carrier: &String) -> Result<(), ValidationError> {
        if carrier.is_empty() {
            return Err(ValidationError::EmptyString { brand: Self::NAME });
        }
        Ok(())
    }
}

// Concatenating two non-empty strings is non-empty.
impl CombinePreserving for NonEmptyStringBrand {}

/// A string with at least one character.
pub type NonEmptyString = Newtype<NonEmptyStringBrand>;

impl Newtype<NonEmptyStringBrand> {
    /// Validate and wrap a string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyString`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_pack(value.into()).map_err(|e| {
            tracing::debug!(error = %e, "rejected empty string");
            e
        })
    }

    /// Smart constructor: `Some` iff `value` is non-empty.
    pub fn from_string(value: impl Into<String>) -> Option<Self> {
        Self::new(value).ok()
    }

    /// Lift a string known to be non-empty, such as a literal.
    ///
    /// # Panics
    ///
    /// Panics with `Failed to lift an empty string to NonEmptyString` if
    /// `value` is empty. Prefer [`NonEmptyString::from_string`].
    pub fn unsafe_from_string(value: impl Into<String>) -> Self {
        match Self::from_string(value) {
            Some(nes) => nes,
            None => {
                tracing::error!("{EMPTY_LIFT_MESSAGE}");
                panic!("{EMPTY_LIFT_MESSAGE}");
            }
        }
    }

    /// Render a number as a `NonEmptyString`. Every `f64` renders to at
    /// least one character (`NaN`, `inf`, `-0`, ...).
    pub fn from_number(n: f64) -> Self {
        Self::unsafe_from_string(n.to_string())
    }

    /// Unwrap back to the underlying `String`.
    pub fn un_non_empty_string(self) -> String {
        unpack(self)
    }

    /// Alias of [`NonEmptyString::un_non_empty_string`].
    pub fn into_string(self) -> String {
        self.un_non_empty_string()
    }

    /// Borrow the underlying string.
    pub fn as_str(&self) -> &str {
        self.as_carrier()
    }

    /// The first character.
    pub fn head(&self) -> Self {
        self.clone().over(|s| first_char(&s).to_string())
    }

    /// The last character.
    pub fn last(&self) -> Self {
        self.clone().over(|s| last_char(&s).to_string())
    }

    /// Uppercase copy, per `str::to_uppercase`.
    pub fn to_uppercase(&self) -> Self {
        self.clone().over(|s| s.to_uppercase())
    }

    /// Lowercase copy, per `str::to_lowercase`.
    pub fn to_lowercase(&self) -> Self {
        self.clone().over(|s| s.to_lowercase())
    }

    /// Prepend `prefix`.
    pub fn prepend(&self, prefix: &str) -> Self {
        self.clone().over(|s| format!("{prefix}{s}"))
    }

    /// Append `suffix`.
    pub fn append(&self, suffix: &str) -> Self {
        self.clone().over(|mut s| {
            s.push_str(suffix);
            s
        })
    }

    /// Surround with `outer`; same as `prepend(outer)` then `append(outer)`.
    pub fn surround(&self, outer: &str) -> Self {
        self.clone().over(|s| format!("{outer}{s}{outer}"))
    }

    /// Reverse the characters.
    pub fn reverse(&self) -> Self {
        self.clone().over(|s| s.chars().rev().collect())
    }
}

fn first_char(s: &str) -> char {
    match s.chars().next() {
        Some(c) => c,
        None => unreachable!("NonEmptyString carrier was empty in head"),
    }
}

fn last_char(s: &str) -> char {
    match s.chars().next_back() {
        Some(c) => c,
        None => unreachable!("NonEmptyString carrier was empty in last"),
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(nes: NonEmptyString) -> Self {
        nes.into_string()
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for NonEmptyString {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
