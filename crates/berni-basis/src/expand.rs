//! Expansion of basis elements into the monomial basis.
//!
//! Uses the identity
//!
//! ```text
//! B_{n,i}(x) = C(n,i) · (x−α)^i · (x−β)^(n−i) · (−1)^(n−i) / (β−α)^n
//! ```
//!
//! so the expansion needs only linear factors, integer powers, one product
//! and one scaling.

use berni_poly::Polynomial;
use berni_scalar::{ConvertFrom, Scalar};
use log::trace;

use crate::bernstein::{binomial, BernsteinPoly};
use crate::error::BasisError;

impl<T: Scalar> BernsteinPoly<T> {
    /// Expands into the monomial basis over the same element type.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::InvalidInterval` if `α > β`, and
    /// `BasisError::DegenerateInterval` if `α = β` and the degree is
    /// positive. Degree zero always expands to the constant `1`.
    pub fn to_polynomial(&self) -> Result<Polynomial<T>, BasisError> {
        self.interval().check()?;
        trace!(degree = self.degree(), index = self.index(); "expanding basis element");

        let n = self.degree();
        let i = self.index();
        if n == 0 {
            return Ok(Polynomial::one());
        }
        self.interval().check_nondegenerate()?;

        let rising = Polynomial::linear_root(self.lower().clone()).pow(i);
        let falling = Polynomial::linear_root(self.upper().clone()).pow(n - i);

        let sign = if (n - i) % 2 == 0 { T::one() } else { -T::one() };
        let scale =
            binomial::<T>(n.into(), i.into()) * sign / self.interval().width().pow(n);

        Ok(rising.mul(&falling).scale(&scale))
    }

    /// Expands into the monomial basis over a wider element type.
    ///
    /// The endpoints are converted first, so the whole expansion runs in `S`.
    ///
    /// # Errors
    ///
    /// Returns `BasisError::Conversion` if an endpoint is not representable
    /// in `S`, plus the interval errors of [`BernsteinPoly::to_polynomial`].
    pub fn to_polynomial_as<S>(&self) -> Result<Polynomial<S>, BasisError>
    where
        S: Scalar + ConvertFrom<T>,
    {
        self.convert::<S>()?.to_polynomial()
    }
}
