//! Promotion rules for mixed operands.
//!
//! A basis element meeting a monomial-basis polynomial always resolves to
//! the monomial representation over the widened element type. Two basis
//! elements of different element types stay basis elements, both moved to
//! the widened type with their degree, index and interval untouched.

use berni_poly::Polynomial;
use berni_scalar::{Promote, Promoted, Scalar};
use log::debug;

use crate::bernstein::BernsteinPoly;
use crate::error::BasisError;

/// Brings a basis element and a polynomial to a common representation.
///
/// # Errors
///
/// Returns the interval errors of [`BernsteinPoly::to_polynomial`], or
/// `BasisError::Conversion` if a value does not fit the widened type.
pub fn promote_with_polynomial<S, T>(
    b: &BernsteinPoly<S>,
    p: &Polynomial<T>,
) -> Result<(Polynomial<Promoted<S, T>>, Polynomial<Promoted<S, T>>), BasisError>
where
    S: Promote<T>,
    T: Scalar,
{
    let common = <Promoted<S, T>>::NAME;
    debug!(lhs = S::NAME, rhs = T::NAME, common = common; "promoting basis element against polynomial");
    let lhs = b.to_polynomial_as::<Promoted<S, T>>()?;
    let rhs = p.convert::<Promoted<S, T>>()?;
    Ok((lhs, rhs))
}

/// Brings two basis elements to a common element type.
///
/// # Errors
///
/// Returns `BasisError::Conversion` if an endpoint does not fit the widened
/// type.
pub fn promote_pair<S, T>(
    b: &BernsteinPoly<S>,
    q: &BernsteinPoly<T>,
) -> Result<(BernsteinPoly<Promoted<S, T>>, BernsteinPoly<Promoted<S, T>>), BasisError>
where
    S: Promote<T>,
    T: Scalar,
{
    let common = <Promoted<S, T>>::NAME;
    debug!(lhs = S::NAME, rhs = T::NAME, common = common; "promoting basis element pair");
    Ok((b.convert()?, q.convert()?))
}

impl<S: Scalar> BernsteinPoly<S> {
    /// Adds a polynomial after promotion.
    ///
    /// # Errors
    ///
    /// See [`promote_with_polynomial`].
    pub fn add_polynomial<T>(&self, p: &Polynomial<T>) -> Result<Polynomial<Promoted<S, T>>, BasisError>
    where
        S: Promote<T>,
        T: Scalar,
    {
        let (lhs, rhs) = promote_with_polynomial(self, p)?;
        Ok(lhs.add(&rhs))
    }

    /// Subtracts a polynomial after promotion.
    ///
    /// # Errors
    ///
    /// See [`promote_with_polynomial`].
    pub fn sub_polynomial<T>(&self, p: &Polynomial<T>) -> Result<Polynomial<Promoted<S, T>>, BasisError>
    where
        S: Promote<T>,
        T: Scalar,
    {
        let (lhs, rhs) = promote_with_polynomial(self, p)?;
        Ok(lhs.sub(&rhs))
    }

    /// Multiplies by a polynomial after promotion.
    ///
    /// # Errors
    ///
    /// See [`promote_with_polynomial`].
    pub fn mul_polynomial<T>(&self, p: &Polynomial<T>) -> Result<Polynomial<Promoted<S, T>>, BasisError>
    where
        S: Promote<T>,
        T: Scalar,
    {
        let (lhs, rhs) = promote_with_polynomial(self, p)?;
        Ok(lhs.mul(&rhs))
    }

    /// Adds another basis element, possibly over a different element type
    /// or interval, in the monomial basis.
    ///
    /// # Errors
    ///
    /// See [`promote_pair`] and [`BernsteinPoly::to_polynomial`].
    pub fn add_bernstein<T>(&self, q: &BernsteinPoly<T>) -> Result<Polynomial<Promoted<S, T>>, BasisError>
    where
        S: Promote<T>,
        T: Scalar,
    {
        let (lhs, rhs) = promote_pair(self, q)?;
        Ok(lhs.to_polynomial()?.add(&rhs.to_polynomial()?))
    }

    /// Multiplies by another basis element in the monomial basis.
    ///
    /// # Errors
    ///
    /// See [`promote_pair`] and [`BernsteinPoly::to_polynomial`].
    pub fn mul_bernstein<T>(&self, q: &BernsteinPoly<T>) -> Result<Polynomial<Promoted<S, T>>, BasisError>
    where
        S: Promote<T>,
        T: Scalar,
    {
        let (lhs, rhs) = promote_pair(self, q)?;
        Ok(lhs.to_polynomial()?.mul(&rhs.to_polynomial()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berni_scalar::Rational;

    #[test]
    fn test_promote_with_polynomial_widens() {
        let b = BernsteinPoly::<Rational>::unit(2, 1).unwrap();
        let p = Polynomial::new(vec![0.5f64, 1.0]);

        let (lhs, rhs): (Polynomial<f64>, Polynomial<f64>) = promote_with_polynomial(&b, &p).unwrap();
        assert_eq!(lhs.coeffs(), &[0.0, 2.0, -2.0]);
        assert_eq!(rhs, p);
    }

    #[test]
    fn test_promote_pair_keeps_structure() {
        let b = BernsteinPoly::new(3, 1, 0.0f32, 2.0).unwrap();
        let q = BernsteinPoly::new(5, 4, -1.0f64, 1.0).unwrap();

        let (b64, q64) = promote_pair(&b, &q).unwrap();
        assert_eq!((b64.degree(), b64.index()), (3, 1));
        assert_eq!((b64.lower(), b64.upper()), (&0.0f64, &2.0f64));
        assert_eq!(q64, q);
    }

    #[test]
    fn test_promote_pair_reports_conversion_failure() {
        let narrow = BernsteinPoly::new(1, 0, 0.0f32, 1.0).unwrap();
        let exact = BernsteinPoly::new(1, 0, Rational::from_integer(0), Rational::new(1, 4))
            .unwrap();
        // Rational meets f32 in f32.
        let (e32, _) = promote_pair(&exact, &narrow).unwrap();
        assert_eq!(e32.upper(), &0.25f32);

        let vast = Rational::from_f64(1.0e300).unwrap();
        let huge = BernsteinPoly::new(1, 0, Rational::from_integer(0), vast).unwrap();
        assert!(matches!(
            promote_pair(&huge, &narrow),
            Err(BasisError::Conversion(_))
        ));
    }

    #[test]
    fn test_mixed_arithmetic() {
        let b = BernsteinPoly::<f32>::unit(1, 1).unwrap(); // x
        let p = Polynomial::new(vec![1.0f64, 1.0]); // 1 + x

        assert_eq!(b.add_polynomial(&p).unwrap().coeffs(), &[1.0, 2.0]);
        assert_eq!(b.sub_polynomial(&p).unwrap().coeffs(), &[-1.0]);
        assert_eq!(b.mul_polynomial(&p).unwrap().coeffs(), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_mixed_bernstein_arithmetic() {
        // B_{1,0} + B_{1,1} = 1 on any interval
        let left = BernsteinPoly::new(1, 0, Rational::from_integer(0), Rational::from_integer(2))
            .unwrap();
        let right = BernsteinPoly::new(1, 1, 0.0f64, 2.0).unwrap();
        assert_eq!(left.add_bernstein(&right).unwrap(), Polynomial::one());

        let product = left.mul_bernstein(&right).unwrap();
        // (1 - x/2)(x/2) = x/2 - x²/4
        assert_eq!(product.coeffs(), &[0.0, 0.5, -0.25]);
    }

    #[test]
    fn test_invalid_interval_propagates() {
        let b = BernsteinPoly::new(2, 1, 1.0f64, 0.0).unwrap();
        let p = Polynomial::<f64>::one();
        assert!(matches!(
            b.add_polynomial(&p),
            Err(BasisError::InvalidInterval { .. })
        ));
    }
}
