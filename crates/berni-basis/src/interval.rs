//! Basis intervals and the guards that validate them.
//!
//! Intervals are not checked when they are built. Every operation whose
//! result depends on the orientation or width of `[α, β]` calls one of the
//! guards below first.

use std::fmt;

use berni_scalar::{ConvertFrom, Scalar};

use crate::error::BasisError;

/// A closed interval `[lower, upper]` over which a basis is defined.
///
/// `Interval::default()` is the unit interval `[0, 1]`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T: Scalar> {
    lower: T,
    upper: T,
}

impl<T: Scalar> Interval<T> {
    /// Creates `[lower, upper]` without validating it.
    #[must_use]
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// The unit interval `[0, 1]`.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Lower endpoint α.
    #[must_use]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Upper endpoint β.
    #[must_use]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Returns `β - α`.
    #[must_use]
    pub fn width(&self) -> T {
        self.upper.clone() - self.lower.clone()
    }

    /// Checks that `α ≤ β`.
    ///
    /// # Errors
    ///
    /// See [`ensure_ordered`].
    pub fn check(&self) -> Result<(), BasisError> {
        ensure_ordered(&self.lower, &self.upper)
    }

    /// Checks that `α ≠ β`.
    ///
    /// # Errors
    ///
    /// See [`ensure_nondegenerate`].
    pub fn check_nondegenerate(&self) -> Result<(), BasisError> {
        ensure_nondegenerate(&self.lower, &self.upper)
    }

    /// Converts both endpoints into another element type.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::Conversion` if either endpoint is not
    /// representable in `S`.
    pub fn convert<S>(&self) -> Result<Interval<S>, BasisError>
    where
        S: Scalar + ConvertFrom<T>,
    {
        Ok(Interval::new(
            S::convert_from(&self.lower)?,
            S::convert_from(&self.upper)?,
        ))
    }
}

impl<T: Scalar> Default for Interval<T> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<T: Scalar> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Fails when the lower bound exceeds the upper bound.
///
/// Unordered endpoints (a NaN on either side) are rejected as well.
///
/// # Errors
///
/// Returns `BasisError::InvalidInterval` unless `lower <= upper`.
pub fn ensure_ordered<T: Scalar>(lower: &T, upper: &T) -> Result<(), BasisError> {
    if lower <= upper {
        Ok(())
    } else {
        Err(BasisError::InvalidInterval {
            lower: lower.to_string(),
            upper: upper.to_string(),
        })
    }
}

/// Fails when the interval has zero width.
///
/// # Errors
///
/// Returns `BasisError::DegenerateInterval` if `lower == upper`.
pub fn ensure_nondegenerate<T: Scalar>(lower: &T, upper: &T) -> Result<(), BasisError> {
    if lower == upper {
        Err(BasisError::DegenerateInterval {
            lower: lower.to_string(),
            upper: upper.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Fails unless both intervals have exactly the same endpoints.
///
/// # Errors
///
/// Returns `BasisError::IntervalMismatch` if either endpoint differs.
pub fn ensure_same<T: Scalar>(left: &Interval<T>, right: &Interval<T>) -> Result<(), BasisError> {
    if left == right {
        Ok(())
    } else {
        Err(BasisError::IntervalMismatch {
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}
