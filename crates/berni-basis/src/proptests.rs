//! Property-based tests for basis expansion and inner products.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::bernstein::BernsteinPoly;
    use crate::inner::{dot, gram_matrix};
    use crate::interval::Interval;
    use berni_poly::Polynomial;
    use berni_scalar::Rational;

    fn endpoint() -> impl Strategy<Value = Rational> {
        (-20i64..20i64, 1i64..6i64).prop_map(|(n, d)| Rational::new(n, d))
    }

    // Ordered, non-degenerate intervals
    fn ordered_interval() -> impl Strategy<Value = Interval<Rational>> {
        (endpoint(), 1i64..10i64, 1i64..4i64)
            .prop_map(|(lower, w, d)| {
                let upper = lower.clone() + Rational::new(w, d);
                Interval::new(lower, upper)
            })
    }

    fn degree_and_index() -> impl Strategy<Value = (u32, u32)> {
        (0u32..8).prop_flat_map(|n| (Just(n), 0..=n))
    }

    fn element() -> impl Strategy<Value = BernsteinPoly<Rational>> {
        (degree_and_index(), ordered_interval())
            .prop_map(|((n, i), interval)| BernsteinPoly::on(n, i, interval).unwrap())
    }

    proptest! {
        #[test]
        fn expansion_matches_closed_form(b in element(), x in endpoint()) {
            let p = b.to_polynomial().unwrap();
            prop_assert_eq!(p.eval(&x), b.eval(&x).unwrap());
        }

        #[test]
        fn partition_of_unity(n in 0u32..8, interval in ordered_interval()) {
            let total: Polynomial<Rational> = BernsteinPoly::basis(n, &interval)
                .iter()
                .map(|b| b.to_polynomial().unwrap())
                .sum();
            prop_assert_eq!(total, Polynomial::one());
        }

        #[test]
        fn dot_symmetric_in_index(n in 0u32..8, seed in any::<(u32, u32)>(), interval in ordered_interval()) {
            let i = seed.0 % (n + 1);
            let j = seed.1 % (n + 1);
            let bi = BernsteinPoly::on(n, i, interval.clone()).unwrap();
            let bj = BernsteinPoly::on(n, j, interval).unwrap();
            prop_assert_eq!(dot(&bi, &bj).unwrap(), dot(&bj, &bi).unwrap());
        }

        #[test]
        fn dot_agrees_with_integral(
            (m, i) in degree_and_index(),
            (n, j) in degree_and_index(),
            interval in ordered_interval(),
        ) {
            let b = BernsteinPoly::on(m, i, interval.clone()).unwrap();
            let q = BernsteinPoly::on(n, j, interval.clone()).unwrap();
            let product = b.to_polynomial().unwrap().mul(&q.to_polynomial().unwrap());
            let integral = product.integrate(interval.lower(), interval.upper());
            prop_assert_eq!(dot(&b, &q).unwrap(), integral);
        }

        #[test]
        fn self_dot_and_norm_non_negative(b in element()) {
            prop_assert!(b.dot(&b).unwrap() >= Rational::from_integer(0));
            prop_assert!(b.norm().unwrap() >= 0.0);
        }

        #[test]
        fn gram_matrix_symmetric(n in 0u32..6, interval in ordered_interval()) {
            let gram = gram_matrix(n, &interval).unwrap();
            for (i, row) in gram.iter().enumerate() {
                for (j, value) in row.iter().enumerate() {
                    prop_assert_eq!(value, &gram[j][i]);
                }
            }
        }

        #[test]
        fn float_expansion_close_to_closed_form(
            (n, i) in degree_and_index(),
            lower in 0.0f64..1.0,
            width in 1.0f64..2.0,
            t in 0.0f64..=1.0,
        ) {
            let b = BernsteinPoly::new(n, i, lower, lower + width).unwrap();
            let x = lower + t * width;
            let expanded = b.to_polynomial().unwrap().eval(&x);
            let direct = b.eval(&x).unwrap();
            prop_assert!((expanded - direct).abs() < 1e-6, "{} vs {}", expanded, direct);
        }

        #[test]
        fn float_dot_tracks_exact_at_high_degree(
            (m, i) in (100u32..400).prop_flat_map(|m| (Just(m), 0..=m)),
            (n, j) in (100u32..400).prop_flat_map(|n| (Just(n), 0..=n)),
        ) {
            let exact = dot(
                &BernsteinPoly::<Rational>::unit(m, i).unwrap(),
                &BernsteinPoly::<Rational>::unit(n, j).unwrap(),
            )
            .unwrap()
            .to_f64();
            let float = dot(
                &BernsteinPoly::<f64>::unit(m, i).unwrap(),
                &BernsteinPoly::<f64>::unit(n, j).unwrap(),
            )
            .unwrap();
            prop_assert!(float.is_finite());
            prop_assert!((float - exact).abs() <= 1e-10 * exact, "{} vs {}", float, exact);
        }
    }
}
