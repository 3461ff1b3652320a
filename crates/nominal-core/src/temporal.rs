//! # Temporal Types — Milliseconds and Dates
//!
//! Defines the [`Milliseconds`] brand over `f64` and [`Date`], a timestamp
//! that may be invalid (its time value is then NaN).
//!
//! ## Milliseconds
//!
//! A millisecond count, usually relative to the Unix epoch. Construction
//! performs no validation: the brand only keeps millisecond counts from being
//! confused with unrelated numbers. Ordering, rendering, addition and the
//! full set of field operations are derived from `f64`.
//!
//! ## Dates
//!
//! [`unsafe_parse_date`] interprets a number or a string as a [`Date`] and
//! never fails; unparseable or out-of-range input yields an invalid `Date`.
//! It exists as the building block for [`parse_date`], which is the only
//! validating entry point and returns `None` instead of an invalid `Date`.
//!
//! Numeric input is clipped the way host platforms clip time values:
//! non-finite values and values beyond ±8.64e15 ms (±100,000,000 days) are
//! invalid; everything else is truncated toward zero. Instants that chrono
//! cannot represent are also invalid.
//!
//! Text input accepts RFC 3339 (any offset), RFC 2822 (including the output
//! of [`Date::to_utc_string`]), `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and
//! `YYYY-MM-DDTHH:MM[:SS[.fff]]`. Date-only and offset-less forms are UTC.
//!
//! ## Clock
//!
//! [`now`] samples the system clock on every call. Code that needs the
//! current instant should take a [`Clock`] so tests can substitute one.

use std::any::Any;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::derive::{CombinePreserving, FieldPreserving};
use crate::error::TemporalError;
use crate::newtype::{pack, Brand, Newtype};

/// Largest magnitude of a valid time value, in milliseconds.
pub const MAX_TIME_VALUE: f64 = 8.64e15;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

// ─── Milliseconds ────────────────────────────────────────────────────

/// Brand tag for millisecond counts. Uninhabited; exists only as a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MillisecondsBrand {}

impl Brand for MillisecondsBrand {
    type Carrier = f64;
    const NAME: &'static str = "Milliseconds";
}

impl CombinePreserving for MillisecondsBrand {}

impl FieldPreserving for MillisecondsBrand {
    const ZERO: f64 = 0.0;
    const ONE: f64 = 1.0;
}

/// A number of milliseconds.
pub type Milliseconds = Newtype<MillisecondsBrand>;

impl Newtype<MillisecondsBrand> {
    /// Lift a number to `Milliseconds`. Total; any `f64` is accepted.
    pub fn new(ms: f64) -> Self {
        pack(ms)
    }

    /// The underlying number of milliseconds.
    pub fn get(self) -> f64 {
        self.into_carrier()
    }
}

impl From<f64> for Milliseconds {
    fn from(ms: f64) -> Self {
        Milliseconds::new(ms)
    }
}

impl From<Milliseconds> for f64 {
    fn from(ms: Milliseconds) -> Self {
        ms.get()
    }
}

// ─── Date ────────────────────────────────────────────────────────────

/// Input accepted by the date parsers: a millisecond count or text.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch.
    Millis(f64),
    /// A textual timestamp.
    Text(String),
}

impl From<f64> for DateInput {
    fn from(ms: f64) -> Self {
        Self::Millis(ms)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::Millis(ms as f64)
    }
}

impl From<Milliseconds> for DateInput {
    fn from(ms: Milliseconds) -> Self {
        Self::Millis(ms.get())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A UTC instant, or the invalid date.
///
/// An invalid `Date` is what [`unsafe_parse_date`] produces for input it
/// cannot interpret. Its time value is NaN and it has no ISO rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date(Option<DateTime<Utc>>);

impl Date {
    /// The invalid date.
    pub const INVALID: Date = Date(None);

    /// Get a `Date` from `Milliseconds`. Out-of-range or non-finite input
    /// yields an invalid `Date`.
    pub fn from_milliseconds(ms: Milliseconds) -> Self {
        unsafe_parse_date(ms)
    }

    /// The time value in milliseconds since the Unix epoch; NaN if invalid.
    pub fn get_time(&self) -> Milliseconds {
        match self.0 {
            Some(dt) => Milliseconds::new(dt.timestamp_millis() as f64),
            None => Milliseconds::new(f64::NAN),
        }
    }

    /// Whether the time value is a finite number.
    pub fn is_valid(&self) -> bool {
        self.get_time().get().is_finite()
    }

    /// Access the inner `DateTime<Utc>`, if valid.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        self.0.as_ref()
    }

    /// Render in ISO 8601 extended form, e.g. `1970-01-01T00:00:00.000Z`.
    ///
    /// Years outside `0..=9999` use six digits and an explicit sign.
    ///
    /// # Errors
    ///
    /// Returns [`TemporalError::InvalidDate`] for an invalid date.
    pub fn to_iso_string(&self) -> Result<String, TemporalError> {
        let dt = self
            .0
            .ok_or_else(|| TemporalError::InvalidDate(self.get_time().get()))?;
        let year = dt.year();
        let year = if (0..=9999).contains(&year) {
            format!("{year:04}")
        } else if year < 0 {
            format!("-{:06}", year.unsigned_abs())
        } else {
            format!("+{year:06}")
        };
        Ok(format!("{year}-{}", dt.format("%m-%dT%H:%M:%S%.3fZ")))
    }

    /// Render in RFC 7231 form, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
    /// An invalid date renders as `Invalid Date`.
    pub fn to_utc_string(&self) -> String {
        let Some(dt) = self.0 else {
            return "Invalid Date".to_string();
        };
        let year = dt.year();
        let year = if year < 0 {
            format!("-{:04}", year.unsigned_abs())
        } else {
            format!("{year:04}")
        };
        format!(
            "{} {year} {}",
            dt.format("%a, %d %b"),
            dt.format("%H:%M:%S GMT")
        )
    }
}

impl From<DateTime<Utc>> for Date {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_millis(dt))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_utc_string())
    }
}

/// Interpret a number or string as a [`Date`], producing an invalid `Date`
/// when the input cannot be interpreted. Prefer [`parse_date`].
pub fn unsafe_parse_date(input: impl Into<DateInput>) -> Date {
    interpret(&input.into())
}

/// Safely parse a date: `None` unless the input yields a valid [`Date`].
pub fn parse_date(input: impl Into<DateInput>) -> Option<Date> {
    let input = input.into();
    let date = interpret(&input);
    if date.is_valid() {
        Some(date)
    } else {
        tracing::debug!(?input, "date input did not produce a valid date");
        None
    }
}

/// Check whether a foreign value is a [`Date`]. Says nothing about validity.
pub fn is_date(value: &dyn Any) -> bool {
    value.is::<Date>()
}

fn interpret(input: &DateInput) -> Date {
    match input {
        DateInput::Millis(ms) => Date(time_clip(*ms)),
        DateInput::Text(s) => Date(parse_text(s.trim())),
    }
}

fn time_clip(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE {
        return None;
    }
    DateTime::from_timestamp_millis(ms.trunc() as i64)
}

/// Drop sub-millisecond and leap-second detail so that a `Date` is exactly
/// its time value.
fn truncate_to_millis(dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(dt.timestamp_millis())
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    parse_text_exact(s).and_then(truncate_to_millis)
}

fn parse_text_exact(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    parse_date_only(s).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc())
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
fn parse_date_only(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = parse_fixed_digits(parts.next()?, 4)?;
    let month = match parts.next() {
        Some(p) => parse_fixed_digits(p, 2)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(p) => parse_fixed_digits(p, 2)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ─── Clock ───────────────────────────────────────────────────────────

/// A source of the current instant.
///
/// Every call to [`Clock::now`] samples afresh; implementations must not
/// cache. Any `Fn() -> Milliseconds` is a clock, including [`now`] itself.
pub trait Clock {
    /// Sample the current instant.
    fn now(&self) -> Milliseconds;
}

impl<F> Clock for F
where
    F: Fn() -> Milliseconds,
{
    fn now(&self) -> Milliseconds {
        (self)()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Milliseconds {
        now()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Milliseconds);

impl FixedClock {
    /// Create a clock that always reports `at`.
    pub fn new(at: Milliseconds) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Milliseconds {
        self.0
    }
}

/// Milliseconds since the Unix epoch, sampled now.
pub fn now() -> Milliseconds {
    Milliseconds::new(Utc::now().timestamp_millis() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_milliseconds_lift_and_lower() {
        assert_eq!(Milliseconds::new(1234.5).get(), 1234.5);
        assert!(Milliseconds::new(f64::INFINITY).get().is_infinite());
        let raw: f64 = Milliseconds::from(7.0).into();
        assert_eq!(raw, 7.0);
    }

    #[test]
    fn test_milliseconds_ordering() {
        let earlier = Milliseconds::new(1.0);
        let later = Milliseconds::new(2.0);
        assert!(earlier < later);
        assert_eq!(earlier.partial_cmp(&later), 1.0f64.partial_cmp(&2.0));
    }

    #[test]
    fn test_epoch_from_zero() {
        let date = Date::from_milliseconds(Milliseconds::new(0.0));
        assert!(date.is_valid());
        assert_eq!(date.get_time().get(), 0.0);
        assert_eq!(date.to_iso_string().unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(date.to_utc_string(), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_fractional_millis_truncate_toward_zero() {
        assert_eq!(unsafe_parse_date(1.9).get_time().get(), 1.0);
        assert_eq!(unsafe_parse_date(-1.9).get_time().get(), -1.0);
    }

    #[test]
    fn test_out_of_range_millis_are_invalid() {
        assert!(unsafe_parse_date(8.0e15).is_valid());
        assert!(!unsafe_parse_date(MAX_TIME_VALUE + 1.0).is_valid());
        assert!(!unsafe_parse_date(-MAX_TIME_VALUE - 1.0).is_valid());
        assert!(!unsafe_parse_date(f64::NAN).is_valid());
        assert!(!unsafe_parse_date(f64::INFINITY).is_valid());
    }

    #[test]
    fn test_unsafe_parse_unparseable_text() {
        let date = unsafe_parse_date("this will not parse");
        assert!(!date.is_valid());
        assert!(date.get_time().get().is_nan());
        assert_eq!(date, Date::INVALID);
    }

    #[test]
    fn test_parse_date_rejects_unparseable_text() {
        assert_eq!(parse_date("this will not parse"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_date_accepts_zero() {
        let date = parse_date(0i64).unwrap();
        assert_eq!(date.get_time().get(), 0.0);
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let date = parse_date("2026-01-15T17:00:00+05:00").unwrap();
        assert_eq!(date.to_iso_string().unwrap(), "2026-01-15T12:00:00.000Z");
    }

    #[test]
    fn test_parse_rfc3339_subseconds() {
        let date = parse_date("2026-01-15T12:00:00.123Z").unwrap();
        assert_eq!(date.get_time().get() % 1000.0, 123.0);
    }

    #[test]
    fn test_parse_date_only_forms() {
        let day = parse_date("2026-01-15").unwrap();
        assert_eq!(day.to_iso_string().unwrap(), "2026-01-15T00:00:00.000Z");
        let month = parse_date("2026-03").unwrap();
        assert_eq!(month.to_iso_string().unwrap(), "2026-03-01T00:00:00.000Z");
        let year = parse_date("2026").unwrap();
        assert_eq!(year.to_iso_string().unwrap(), "2026-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_rejects_impossible_calendar_dates() {
        assert_eq!(parse_date("2026-02-30"), None);
        assert_eq!(parse_date("2026-13"), None);
        assert_eq!(parse_date("26-01-01"), None);
    }

    #[test]
    fn test_parse_offsetless_datetime_is_utc() {
        let date = parse_date("2026-01-15T12:30").unwrap();
        assert_eq!(date.to_iso_string().unwrap(), "2026-01-15T12:30:00.000Z");
        let date = parse_date("2026-01-15T12:30:45.5").unwrap();
        assert_eq!(date.to_iso_string().unwrap(), "2026-01-15T12:30:45.500Z");
    }

    #[test]
    fn test_utc_string_parses_back() {
        let date = parse_date("2026-06-30T23:59:59Z").unwrap();
        let rendered = date.to_utc_string();
        assert_eq!(rendered, "Tue, 30 Jun 2026 23:59:59 GMT");
        assert_eq!(parse_date(rendered), Some(date));
    }

    #[test]
    fn test_iso_string_of_invalid_date_fails() {
        let err = Date::INVALID.to_iso_string().unwrap_err();
        assert!(matches!(err, TemporalError::InvalidDate(v) if v.is_nan()));
        assert_eq!(Date::INVALID.to_utc_string(), "Invalid Date");
        assert_eq!(Date::INVALID.to_string(), "Invalid Date");
    }

    #[test]
    fn test_iso_string_extended_years() {
        let far = unsafe_parse_date(253_402_300_800_000.0);
        assert_eq!(far.to_iso_string().unwrap(), "+010000-01-01T00:00:00.000Z");
        let before = unsafe_parse_date(-62_198_755_200_000.0);
        assert_eq!(before.to_iso_string().unwrap(), "-000001-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_sub_millisecond_text_equals_its_time_value() {
        let parsed = parse_date("1970-01-01T00:00:00.0005Z").unwrap();
        let rebuilt = Date::from_milliseconds(parsed.get_time());
        assert_eq!(parsed.get_time().get(), 0.0);
        assert_eq!(parsed, rebuilt);
        assert_eq!(parsed.to_iso_string().unwrap(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_leap_second_text_renders_its_time_value() {
        let parsed = parse_date("2016-12-31T23:59:60Z").unwrap();
        let rebuilt = Date::from_milliseconds(parsed.get_time());
        assert_eq!(parsed, rebuilt);
        assert_eq!(parsed.to_iso_string(), rebuilt.to_iso_string());
        assert_eq!(parsed.to_iso_string().unwrap(), "2017-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_from_datetime_drops_sub_millisecond_detail() {
        let dt = DateTime::from_timestamp(1, 999_999).unwrap();
        let date = Date::from(dt);
        assert_eq!(date, Date::from_milliseconds(Milliseconds::new(1000.0)));
        assert_eq!(date.get_time().get(), 1000.0);
    }

    #[test]
    fn test_is_date_type_membership() {
        assert!(is_date(&Date::INVALID));
        assert!(is_date(&unsafe_parse_date(0.0)));
        assert!(!is_date(&"2026-01-15"));
        assert!(!is_date(&Milliseconds::new(0.0)));
    }

    #[test]
    fn test_get_time_roundtrip_through_date() {
        let ms = Milliseconds::new(1_768_478_400_000.0);
        assert_eq!(Date::from_milliseconds(ms).get_time(), ms);
    }

    #[test]
    fn test_now_is_bracketed_by_system_clock() {
        let before = Utc::now().timestamp_millis() as f64;
        let sampled = now().get();
        let after = Utc::now().timestamp_millis() as f64;
        assert!(before <= sampled && sampled <= after);
    }

    #[test]
    fn test_clock_resamples_on_every_call() {
        let ticks = Cell::new(0.0);
        let clock = || {
            ticks.set(ticks.get() + 1.0);
            Milliseconds::new(ticks.get())
        };
        assert_eq!(clock.now().get(), 1.0);
        assert_eq!(clock.now().get(), 2.0);
    }

    #[test]
    fn test_system_clock_is_monotone_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(a <= b);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(Milliseconds::new(42.0));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().get(), 42.0);
    }

    #[test]
    fn test_now_fn_is_a_clock() {
        fn elapsed_since(clock: &impl Clock, start: Milliseconds) -> Milliseconds {
            clock.now() - start
        }
        assert!(elapsed_since(&now, Milliseconds::zero()).get() > 0.0);
    }
}
