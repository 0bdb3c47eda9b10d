//! Differentiation and integration by the power rule.
//!
//! For p(x) = a₀ + a₁x + ... + aₙxⁿ the antiderivative is
//!
//! ∫p(x)dx = a₀x + (a₁/2)x² + ... + (aₙ/(n+1))xⁿ⁺¹
//!
//! with the integration constant fixed at zero.

use berni_scalar::Scalar;

use crate::dense::Polynomial;

impl<T: Scalar> Polynomial<T> {
    /// Computes the formal derivative.
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree() == 0 {
            return Self::zero();
        }

        Self::new(
            self.coeffs()
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, c)| c.clone() * T::from_u64(k as u64))
                .collect(),
        )
    }

    /// Computes the antiderivative vanishing at zero.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut coeffs = Vec::with_capacity(self.coeffs().len() + 1);
        coeffs.push(T::zero());
        for (k, c) in self.coeffs().iter().enumerate() {
            coeffs.push(c.clone() / T::from_u64(k as u64 + 1));
        }

        Self::new(coeffs)
    }

    /// Computes the definite integral over `[a, b]`.
    #[must_use]
    pub fn integrate(&self, a: &T, b: &T) -> T {
        let primitive = self.antiderivative();
        primitive.eval(b) - primitive.eval(a)
    }
}
