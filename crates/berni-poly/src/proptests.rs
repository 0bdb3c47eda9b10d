//! Property-based tests for monomial-basis arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::Polynomial;
    use berni_scalar::Rational;

    fn small_coeff() -> impl Strategy<Value = Rational> {
        (-50i64..50i64, 1i64..8i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    // Degree 0-4
    fn small_poly() -> impl Strategy<Value = Polynomial<Rational>> {
        proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
    }

    proptest! {
        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_eval_is_homomorphism(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), n in 0u32..5) {
            let expected = (0..n).fold(Polynomial::one(), |acc, _| acc.mul(&a));
            prop_assert_eq!(a.pow(n), expected);
        }

        #[test]
        fn poly_fundamental_theorem(a in small_poly(), lo in small_coeff(), hi in small_coeff()) {
            // ∫ p' over [lo, hi] = p(hi) - p(lo)
            let lhs = a.derivative().integrate(&lo, &hi);
            prop_assert_eq!(lhs, a.eval(&hi) - a.eval(&lo));
        }

        #[test]
        fn poly_derivative_of_antiderivative(a in small_poly()) {
            prop_assert_eq!(a.antiderivative().derivative(), a);
        }
    }
}
