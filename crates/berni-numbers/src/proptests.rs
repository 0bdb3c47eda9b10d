//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d))
    }

    proptest! {
        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn rational_division_inverts_multiplication(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((a.clone() * b.clone()) / b, a);
        }

        #[test]
        fn rational_reciprocal_is_inverse(a in rational()) {
            prop_assume!(!a.is_zero());
            prop_assert!((a.clone() * (Rational::one() / a)).is_one());
        }

        #[test]
        fn rational_f64_round_trip_is_exact(n in small_int(), shift in 0u32..20) {
            // Dyadic rationals are representable without rounding.
            let value = n as f64 / f64::from(1u32 << shift);
            let exact = Rational::from_f64(value).unwrap();
            prop_assert_eq!(exact.to_f64(), value);
        }
    }
}
