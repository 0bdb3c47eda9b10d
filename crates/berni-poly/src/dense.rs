//! Dense univariate polynomials.

use berni_scalar::{ConversionError, ConvertFrom, Scalar};

/// A dense univariate polynomial in the monomial basis.
///
/// Coefficients are stored in ascending degree order and kept normalized:
/// no trailing zeros, and the zero polynomial is the single coefficient `0`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial<T: Scalar> {
    coeffs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Creates a polynomial from ascending coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<T>) -> Self {
        while coeffs.len() > 1 && coeffs.last().is_some_and(T::is_zero) {
            coeffs.pop();
        }

        if coeffs.is_empty() {
            coeffs.push(T::zero());
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![T::zero()],
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![T::one()],
        }
    }

    /// Creates the monic linear factor `x - root`.
    #[must_use]
    pub fn linear_root(root: T) -> Self {
        Self::new(vec![-root, T::one()])
    }

    /// Returns the degree. The zero polynomial reports degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> T {
        self.coeffs.get(i).cloned().unwrap_or_else(T::zero)
    }

    /// Returns all coefficients, lowest power first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Evaluates at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) + other.coeff(i)).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c.clone()).collect())
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|i| self.coeff(i) - other.coeff(i)).collect())
    }

    /// Multiplies two polynomials (schoolbook).
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![T::zero(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] = result[i + j].clone() + a.clone() * b.clone();
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &T) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x.clone() * c.clone()).collect())
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base);
            }
        }

        result
    }

    /// Converts every coefficient into another element type.
    ///
    /// # Errors
    ///
    /// Returns the first `ConversionError` raised by a coefficient.
    pub fn convert<S>(&self) -> Result<Polynomial<S>, ConversionError>
    where
        S: Scalar + ConvertFrom<T>,
    {
        let coeffs = self
            .coeffs
            .iter()
            .map(S::convert_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polynomial::new(coeffs))
    }
}

impl<T: Scalar> Default for Polynomial<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> std::iter::Sum for Polynomial<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc.add(&p))
    }
}
