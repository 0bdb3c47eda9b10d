//! Text rendering of basis elements.

use std::fmt;

use berni_scalar::Scalar;

use crate::bernstein::BernsteinPoly;
use crate::error::BasisError;

impl<T: Scalar> BernsteinPoly<T> {
    /// Renders the monomial expansion inside a constructor-style frame,
    /// e.g. `BernsteinPoly(3*x^2 - 3*x^3)`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`BernsteinPoly::to_polynomial`].
    pub fn render(&self) -> Result<String, BasisError> {
        Ok(format!("BernsteinPoly({})", self.to_polynomial()?))
    }
}

/// Writes the rendered expansion. Elements that cannot be expanded fall
/// back to their structural form, `BernsteinPoly(n=3, i=1, [1, 0])`.
impl<T: Scalar> fmt::Display for BernsteinPoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_polynomial() {
            Ok(p) => write!(f, "BernsteinPoly({p})"),
            Err(_) => write!(
                f,
                "BernsteinPoly(n={}, i={}, {})",
                self.degree(),
                self.index(),
                self.interval()
            ),
        }
    }
}
