//! # Instance Derivation
//!
//! Lifts the carrier's own instances to every brand over it. Each impl here
//! unwraps, delegates to the carrier, and (for value-producing instances)
//! re-wraps. A derived instance never adds behavior the carrier lacks.
//!
//! Comparison, hashing and rendering cannot break a brand's invariant, so
//! they are derived for every brand. Instances that *produce* branded values
//! are opt-in: a brand implements [`CombinePreserving`] or
//! [`FieldPreserving`] to assert that the carrier's operation keeps its
//! invariant.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::newtype::{pack, Brand, Newtype};

// ─── Semigroup ───────────────────────────────────────────────────────

/// An associative binary combination.
pub trait Semigroup {
    /// Combine two values. Must be associative.
    fn combine(self, other: Self) -> Self;
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Semigroup for f64 {
    fn combine(self, other: Self) -> Self {
        self + other
    }
}

/// Marker: the carrier's [`Semigroup`] preserves this brand's invariant.
pub trait CombinePreserving: Brand {}

impl<B> Semigroup for Newtype<B>
where
    B: CombinePreserving,
    B::Carrier: Semigroup,
{
    fn combine(self, other: Self) -> Self {
        pack(self.into_carrier().combine(other.into_carrier()))
    }
}

// ─── Equality, ordering, hashing ─────────────────────────────────────

impl<B: Brand> PartialEq for Newtype<B>
where
    B::Carrier: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_carrier() == other.as_carrier()
    }
}

impl<B: Brand> Eq for Newtype<B> where B::Carrier: Eq {}

impl<B: Brand> PartialOrd for Newtype<B>
where
    B::Carrier: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_carrier().partial_cmp(other.as_carrier())
    }
}

impl<B: Brand> Ord for Newtype<B>
where
    B::Carrier: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_carrier().cmp(other.as_carrier())
    }
}

impl<B: Brand> Hash for Newtype<B>
where
    B::Carrier: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_carrier().hash(state);
    }
}

// ─── Rendering ───────────────────────────────────────────────────────

impl<B: Brand> fmt::Display for Newtype<B>
where
    B::Carrier: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_carrier(), f)
    }
}

impl<B: Brand> fmt::Debug for Newtype<B>
where
    B::Carrier: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(B::NAME).field(self.as_carrier()).finish()
    }
}

// ─── Field arithmetic ────────────────────────────────────────────────

/// Marker: the carrier's field operations preserve this brand's invariant.
pub trait FieldPreserving: Brand {
    /// Additive identity of the carrier.
    const ZERO: Self::Carrier;
    /// Multiplicative identity of the carrier.
    const ONE: Self::Carrier;
}

impl<B: FieldPreserving> Newtype<B> {
    /// The brand's additive identity.
    pub fn zero() -> Self {
        pack(B::ZERO)
    }

    /// The brand's multiplicative identity.
    pub fn one() -> Self {
        pack(B::ONE)
    }
}

macro_rules! lift_binary_op {
    ($op:ident, $method:ident) => {
        impl<B> $op for Newtype<B>
        where
            B: FieldPreserving,
            B::Carrier: $op<Output = B::Carrier>,
        {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                pack($op::$method(self.into_carrier(), rhs.into_carrier()))
            }
        }
    };
}

lift_binary_op!(Add, add);
lift_binary_op!(Sub, sub);
lift_binary_op!(Mul, mul);
lift_binary_op!(Div, div);
lift_binary_op!(Rem, rem);

impl<B> Neg for Newtype<B>
where
    B: FieldPreserving,
    B::Carrier: Neg<Output = B::Carrier>,
{
    type Output = Self;

    fn neg(self) -> Self {
        pack(-self.into_carrier())
    }
}

impl<B> Sum for Newtype<B>
where
    B: FieldPreserving,
    B::Carrier: Add<Output = B::Carrier>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

// ─── Serde interop ───────────────────────────────────────────────────

impl<B: Brand> Serialize for Newtype<B>
where
    B::Carrier: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_carrier().serialize(serializer)
    }
}

/// Deserializes the carrier, then routes it through [`Brand::check`] so
/// that invalid values are rejected rather than silently branded.
impl<'de, B: Brand> Deserialize<'de> for Newtype<B>
where
    B::Carrier: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = B::Carrier::deserialize(deserializer)?;
        Self::try_pack(raw).map_err(serde::de::Error::custom)
    }
}
