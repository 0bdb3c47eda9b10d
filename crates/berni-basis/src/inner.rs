//! L² inner products between basis elements on a shared interval.
//!
//! For `B_{m,i}` and `B_{n,j}` on `[α, β]`:
//!
//! ```text
//! ∫_α^β B_{m,i} · B_{n,j} dx = (β − α) · C(m,i) · C(n,j) / ((m + n + 1) · C(m+n, i+j))
//! ```
//!
//! The closed form is exact for rationals and needs no quadrature. The
//! binomial ratio is built factor by factor so floats stay finite at high
//! degree.

use berni_scalar::{ConvertFrom, Scalar};
use log::trace;

use crate::bernstein::{balanced_product, binomial_factors, inverse_binomial_factors, BernsteinPoly};
use crate::error::BasisError;
use crate::interval::{ensure_same, Interval};

/// Inner product of two basis elements over their common interval.
///
/// # Errors
///
/// Returns `BasisError::InvalidInterval` if either interval is inverted or
/// has a NaN endpoint, and `BasisError::IntervalMismatch` if the intervals
/// differ in either endpoint.
pub fn dot<T: Scalar>(b: &BernsteinPoly<T>, q: &BernsteinPoly<T>) -> Result<T, BasisError> {
    b.interval().check()?;
    q.interval().check()?;
    ensure_same(b.interval(), q.interval())?;

    let (m, i) = (u64::from(b.degree()), u64::from(b.index()));
    let (n, j) = (u64::from(q.degree()), u64::from(q.index()));
    trace!(m = m, i = i, n = n, j = j; "closed-form inner product");

    // C(m,i) · C(n,j) / C(m+n, i+j) never exceeds one.
    let ratio = balanced_product(
        binomial_factors::<T>(m, i).chain(binomial_factors::<T>(n, j)),
        inverse_binomial_factors::<T>(m + n, i + j),
    );
    Ok(b.interval().width() * ratio / T::from_u64(m + n + 1))
}

/// Induced norm `sqrt(dot(b, b)) / (β − α)`.
///
/// # Errors
///
/// Returns `BasisError::InvalidInterval` for an inverted interval,
/// `BasisError::DegenerateInterval` for a zero-width one, and
/// `BasisError::Conversion` if the width does not fit the root type.
pub fn norm<T: Scalar>(b: &BernsteinPoly<T>) -> Result<T::Root, BasisError> {
    let squared = dot(b, b)?;
    b.interval().check_nondegenerate()?;
    debug_assert!(squared >= T::zero(), "dot(b, b) must be non-negative");

    let width = <T::Root>::convert_from(&b.interval().width())?;
    Ok(squared.sqrt() / width)
}

/// Pairwise inner products of the full degree-`degree` basis.
///
/// Entry `[i][j]` is `dot(B_{degree,i}, B_{degree,j})`; the matrix is
/// symmetric.
///
/// # Errors
///
/// Returns `BasisError::InvalidInterval` if the interval is inverted.
pub fn gram_matrix<T: Scalar>(degree: u32, interval: &Interval<T>) -> Result<Vec<Vec<T>>, BasisError> {
    interval.check()?;
    let basis = BernsteinPoly::basis(degree, interval);
    let size = basis.len();

    let mut gram = vec![vec![T::zero(); size]; size];
    for (i, bi) in basis.iter().enumerate() {
        for (j, bj) in basis.iter().enumerate().skip(i) {
            let value = dot(bi, bj)?;
            gram[j][i] = value.clone();
            gram[i][j] = value;
        }
    }

    Ok(gram)
}

impl<T: Scalar> BernsteinPoly<T> {
    /// Inner product with another basis element; see [`dot`].
    ///
    /// # Errors
    ///
    /// See [`dot`].
    pub fn dot(&self, other: &Self) -> Result<T, BasisError> {
        dot(self, other)
    }

    /// Induced norm; see [`norm`].
    ///
    /// # Errors
    ///
    /// See [`norm`].
    pub fn norm(&self) -> Result<T::Root, BasisError> {
        norm(self)
    }
}
