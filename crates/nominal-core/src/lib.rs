//! # nominal-core — Branded Scalar Newtypes
//!
//! A brand gives a primitive a distinct nominal type without changing its
//! representation. A [`Milliseconds`] is an `f64` at runtime, but it cannot
//! be passed where a plain `f64` (or any other brand) is expected, and a
//! [`NonEmptyString`] is a `String` that is known to be non-empty.
//!
//! ## Key Design Principles
//!
//! 1. **One generic wrapper.** Every brand is [`Newtype<B>`] for a tag type
//!    `B: Brand`. The wrapper is `#[repr(transparent)]` with a private field.
//!
//! 2. **Construction is the only checkpoint.** A brand's invariant is tested
//!    (or, for `Milliseconds`, deliberately absent) in its constructors.
//!    Nothing outside this crate can wrap a carrier without going through
//!    them.
//!
//! 3. **Instances are derived, never invented.** Equality, ordering, hashing,
//!    rendering, combination and arithmetic delegate to the carrier.
//!    Value-producing instances are opt-in per brand.
//!
//! 4. **Two failure modes.** Validating APIs return `Option`/`Result` and
//!    never panic. `unsafe_*` APIs either accept malformed input silently or
//!    abort with a fixed diagnostic.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - Panics only at the documented fatal-abort boundaries.
//! - All brands implement `Serialize`/`Deserialize` transparently.

pub mod derive;
pub mod error;
pub mod newtype;
pub mod temporal;
pub mod text;

// Re-export primary types for ergonomic imports.
pub use derive::{CombinePreserving, FieldPreserving, Semigroup};
pub use error::{NominalError, TemporalError, ValidationError};
pub use newtype::{unpack, Brand, Newtype};
pub use temporal::{
    is_date, now, parse_date, unsafe_parse_date, Clock, Date, DateInput, FixedClock, Milliseconds,
    SystemClock,
};
pub use text::NonEmptyString;
