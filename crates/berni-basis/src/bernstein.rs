//! The Bernstein basis value type.
//!
//! `B_{n,i}` on `[α, β]` is
//!
//! ```text
//! B_{n,i}(x) = C(n,i) · ((x−α)/(β−α))^i · ((β−x)/(β−α))^(n−i)
//! ```
//!
//! Values are immutable; every transformation returns a new value.

use berni_scalar::{ConvertFrom, Scalar};
use log::debug;

use crate::error::BasisError;
use crate::interval::Interval;

/// The `index`-th Bernstein basis polynomial of degree `degree` on an
/// interval.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BernsteinPoly<T: Scalar> {
    degree: u32,
    index: u32,
    interval: Interval<T>,
}

impl<T: Scalar> BernsteinPoly<T> {
    /// Creates `B_{degree,index}` on `[lower, upper]`.
    ///
    /// The interval is checked lazily by the operations that depend on it.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::IndexOutOfRange` if `index > degree`.
    pub fn new(degree: u32, index: u32, lower: T, upper: T) -> Result<Self, BasisError> {
        Self::on(degree, index, Interval::new(lower, upper))
    }

    /// Creates `B_{degree,index}` on the unit interval `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::IndexOutOfRange` if `index > degree`.
    pub fn unit(degree: u32, index: u32) -> Result<Self, BasisError> {
        Self::on(degree, index, Interval::default())
    }

    /// Creates `B_{degree,index}` on an existing interval.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::IndexOutOfRange` if `index > degree`.
    pub fn on(degree: u32, index: u32, interval: Interval<T>) -> Result<Self, BasisError> {
        if index > degree {
            return Err(BasisError::IndexOutOfRange { degree, index });
        }
        Ok(Self {
            degree,
            index,
            interval,
        })
    }

    /// The full basis `B_{degree,0}, ..., B_{degree,degree}` on one interval.
    #[must_use]
    pub fn basis(degree: u32, interval: &Interval<T>) -> Vec<Self> {
        (0..=degree)
            .map(|index| Self {
                degree,
                index,
                interval: interval.clone(),
            })
            .collect()
    }

    /// Polynomial degree `n`.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Basis index `i`.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The interval `[α, β]`.
    #[must_use]
    pub fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    /// Lower endpoint α.
    #[must_use]
    pub fn lower(&self) -> &T {
        self.interval.lower()
    }

    /// Upper endpoint β.
    #[must_use]
    pub fn upper(&self) -> &T {
        self.interval.upper()
    }

    /// Re-expresses the same basis element over another element type.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::Conversion` if an endpoint is not representable
    /// in `S`.
    pub fn convert<S>(&self) -> Result<BernsteinPoly<S>, BasisError>
    where
        S: Scalar + ConvertFrom<T>,
    {
        debug!(from = T::NAME, to = S::NAME; "converting Bernstein element type");
        Ok(BernsteinPoly {
            degree: self.degree,
            index: self.index,
            interval: self.interval.convert()?,
        })
    }

    /// Evaluates the basis element at `x` from the closed form.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::InvalidInterval` if `α > β`, and
    /// `BasisError::DegenerateInterval` if `α = β` with a positive degree.
    pub fn eval(&self, x: &T) -> Result<T, BasisError> {
        self.interval.check()?;
        if self.degree == 0 {
            return Ok(T::one());
        }
        self.interval.check_nondegenerate()?;

        let width = self.interval.width();
        let t = (x.clone() - self.lower().clone()) / width.clone();
        let s = (self.upper().clone() - x.clone()) / width;

        let n = self.degree;
        let i = self.index;
        let powers = std::iter::repeat(t)
            .take(i as usize)
            .chain(std::iter::repeat(s).take((n - i) as usize));
        Ok(balanced_product(
            binomial_factors(n.into(), i.into()),
            powers,
        ))
    }
}

/// Computes `C(n, k)` in the element type.
///
/// Each partial product is itself a binomial coefficient, so floats stay
/// exact while the values fit in the mantissa. Returns zero for `k > n`.
#[must_use]
pub fn binomial<T: Scalar>(n: u64, k: u64) -> T {
    if k > n {
        return T::zero();
    }
    let k = k.min(n - k);
    (0..k).fold(T::one(), |acc, j| {
        acc * T::from_u64(n - j) / T::from_u64(j + 1)
    })
}

/// The factors `(n - j) / (j + 1)` whose product is `C(n, k)`.
///
/// Uses the shorter side of the symmetry so every factor is at least one.
pub(crate) fn binomial_factors<T: Scalar>(n: u64, k: u64) -> impl Iterator<Item = T> {
    let k = if k > n { 0 } else { k.min(n - k) };
    (0..k).map(move |j| T::from_u64(n - j) / T::from_u64(j + 1))
}

/// The factors `(j + 1) / (n - j)` whose product is `1 / C(n, k)`.
pub(crate) fn inverse_binomial_factors<T: Scalar>(n: u64, k: u64) -> impl Iterator<Item = T> {
    let k = if k > n { 0 } else { k.min(n - k) };
    (0..k).map(move |j| T::from_u64(j + 1) / T::from_u64(n - j))
}

/// Multiplies out two factor streams, drawing from `shrinking` while the
/// running product has magnitude at least one and from `growing` otherwise.
///
/// Floats keep the running product near the final value this way, so
/// large binomials and small powers never have to be formed on their own.
pub(crate) fn balanced_product<T: Scalar>(
    mut growing: impl Iterator<Item = T>,
    mut shrinking: impl Iterator<Item = T>,
) -> T {
    let one = T::one();
    let mut acc = T::one();
    loop {
        let magnitude = if acc.is_negative() { -acc.clone() } else { acc.clone() };
        let next = if magnitude >= one {
            shrinking.next().or_else(|| growing.next())
        } else {
            growing.next().or_else(|| shrinking.next())
        };
        match next {
            Some(factor) => acc = acc * factor,
            None => return acc,
        }
    }
}
