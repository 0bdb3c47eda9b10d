//! The numeric element trait.
//!
//! Every coefficient, interval endpoint and inner product in Berni is a
//! `Scalar`. The trait asks for field arithmetic and an ordering, which is
//! what the interval checks and the closed-form formulas need.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use berni_numbers::Rational;
use num_traits::{One, Zero};

use crate::convert::ConvertFrom;

/// An ordered field element usable as a polynomial coefficient.
///
/// # Laws
///
/// - `+`, `-`, `*`, `/` follow the field axioms (up to rounding for floats)
/// - `zero()` and `one()` are the additive and multiplicative identities
/// - `partial_cmp` agrees with the arithmetic on finite values
pub trait Scalar:
    Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// The type square roots land in.
    ///
    /// Floats are closed under `sqrt`; exact rationals are not, so they
    /// widen to `f64`.
    type Root: Scalar + ConvertFrom<Self>;

    /// Name used in error messages.
    const NAME: &'static str;

    /// Embeds an unsigned integer.
    fn from_u64(n: u64) -> Self;

    /// Principal square root.
    fn sqrt(&self) -> Self::Root;

    /// Computes `self^n` by repeated squaring.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }

    /// Returns true if the sign is negative.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

impl Scalar for f32 {
    type Root = f32;

    const NAME: &'static str = "f32";

    #[allow(clippy::cast_precision_loss)]
    fn from_u64(n: u64) -> Self {
        n as f32
    }

    fn sqrt(&self) -> f32 {
        f32::sqrt(*self)
    }

    #[allow(clippy::cast_precision_loss)]
    fn pow(&self, n: u32) -> Self {
        match i32::try_from(n) {
            Ok(n) => self.powi(n),
            Err(_) => self.powf(n as f32),
        }
    }
}

impl Scalar for f64 {
    type Root = f64;

    const NAME: &'static str = "f64";

    #[allow(clippy::cast_precision_loss)]
    fn from_u64(n: u64) -> Self {
        n as f64
    }

    fn sqrt(&self) -> f64 {
        f64::sqrt(*self)
    }

    fn pow(&self, n: u32) -> Self {
        match i32::try_from(n) {
            Ok(n) => self.powi(n),
            Err(_) => self.powf(f64::from(n)),
        }
    }
}

impl Scalar for Rational {
    type Root = f64;

    const NAME: &'static str = "Rational";

    fn from_u64(n: u64) -> Self {
        Rational::from_u64(n)
    }

    fn sqrt(&self) -> f64 {
        self.to_f64().sqrt()
    }

    fn pow(&self, n: u32) -> Self {
        Rational::pow(self, n)
    }

    fn is_negative(&self) -> bool {
        Rational::is_negative(self)
    }
}
