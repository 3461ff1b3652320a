//! # Brand Kernel
//!
//! A brand is a compile-time-only nominal tag over exactly one carrier type.
//! [`Newtype<B>`] is the branded value: `#[repr(transparent)]` over
//! `B::Carrier`, with a zero-sized phantom marker and no runtime
//! discriminator.
//!
//! ## Security Invariant
//!
//! The carrier field is private and [`pack`] is crate-private. Downstream
//! code can read a branded value ([`unpack`], [`Newtype::as_carrier`]) but
//! can only obtain one through a brand's designated constructors, which are
//! the sole place a brand's invariant is checked or assumed.
//!
//! Two brands over the same carrier are distinct types. This does not
//! compile:
//!
//! ```compile_fail
//! use nominal_core::{Milliseconds, NonEmptyString};
//!
//! fn wants_text(_: NonEmptyString) {}
//! wants_text(Milliseconds::new(0.0));
//! ```
//!
//! Nor does forging a brand from outside the crate:
//!
//! ```compile_fail
//! use nominal_core::newtype::pack;
//! use nominal_core::text::NonEmptyStringBrand;
//!
//! let forged = pack::<NonEmptyStringBrand>(String::new());
//! ```
//!
//! ## Operations
//!
//! - [`pack`] — total, unchecked wrap. Callers establish the invariant first.
//! - [`unpack`] — total unwrap; returns exactly the value that was packed.
//! - [`over`] — lifts a carrier endofunction to a brand endofunction. The
//!   endofunction must preserve the brand's invariant; `over` does not check.

use std::marker::PhantomData;

use crate::error::ValidationError;

mod private {
    pub trait Sealed {}
    impl Sealed for crate::temporal::MillisecondsBrand {}
    impl Sealed for crate::text::NonEmptyStringBrand {}
}

/// A nominal tag over a carrier type.
///
/// Sealed: only the brands defined in this crate implement it, since only
/// this crate can [`pack`] values of a brand.
pub trait Brand: private::Sealed + 'static {
    /// The primitive this brand wraps.
    type Carrier;

    /// Human-readable brand name, used by `Debug` and diagnostics.
    const NAME: &'static str;

    /// Construction-time invariant. Brands without one accept everything.
    fn check(_carrier: &Self::Carrier) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// A value of brand `B`, represented exactly as `B::Carrier`.
#[repr(transparent)]
pub struct Newtype<B: Brand> {
    value: B::Carrier,
    brand: PhantomData<fn() -> B>,
}

impl<B: Brand> Newtype<B> {
    /// Wrap a carrier after running the brand's [`Brand::check`].
    ///
    /// # Errors
    ///
    /// Returns the brand's [`ValidationError`] if the carrier violates its
    /// invariant.
    pub fn try_pack(value: B::Carrier) -> Result<Self, ValidationError> {
        B::check(&value)?;
        Ok(pack(value))
    }

    /// Borrow the carrier.
    pub fn as_carrier(&self) -> &B::Carrier {
        &self.value
    }

    /// Recover the carrier. Same as [`unpack`].
    pub fn into_carrier(self) -> B::Carrier {
        self.value
    }

    /// Method form of [`over`]: unwrap, apply `f`, re-wrap. `f` must
    /// preserve the brand's invariant.
    pub(crate) fn over(self, f: impl Fn(B::Carrier) -> B::Carrier) -> Self {
        over(f)(self)
    }
}

/// Wrap a carrier as brand `B` without checking the brand's invariant.
pub(crate) fn pack<B: Brand>(value: B::Carrier) -> Newtype<B> {
    Newtype {
        value,
        brand: PhantomData,
    }
}

/// Recover the carrier of a branded value.
pub fn unpack<B: Brand>(branded: Newtype<B>) -> B::Carrier {
    branded.value
}

/// Lift an endofunction on the carrier to an endofunction on the brand.
pub(crate) fn over<B, F>(f: F) -> impl Fn(Newtype<B>) -> Newtype<B>
where
    B: Brand,
    F: Fn(B::Carrier) -> B::Carrier,
{
    move |branded: Newtype<B>| pack(f(branded.value))
}

impl<B: Brand> Clone for Newtype<B>
where
    B::Carrier: Clone,
{
    fn clone(&self) -> Self {
        pack(self.value.clone())
    }
}

impl<B: Brand> Copy for Newtype<B> where B::Carrier: Copy {}
