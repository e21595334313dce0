//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use typenum::{U2, U3, U4, U40};

    use crate::dense::Poly;
    use crate::lift::{const_poly, cross};
    use crate::poly;
    use nestpoly_rings::{Q, Z};

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating cubic polynomials
    fn cubic() -> impl Strategy<Value = Poly<i64, U4>> {
        proptest::collection::vec(small_coeff(), 0..=4)
            .prop_map(|v| Poly::try_from_vec(v).unwrap())
    }

    // Strategy for generating linear polynomials
    fn linear() -> impl Strategy<Value = Poly<i64, U2>> {
        proptest::collection::vec(small_coeff(), 0..=2)
            .prop_map(|v| Poly::try_from_vec(v).unwrap())
    }

    // Strategy for generating rational quadratics
    fn rational_quadratic() -> impl Strategy<Value = Poly<Q, U3>> {
        proptest::collection::vec((small_coeff(), 1i64..10), 3).prop_map(|v| {
            Poly::try_from_vec(v.into_iter().map(|(n, d)| Q::new(n, d)).collect()).unwrap()
        })
    }

    // Strategy for generating long polynomials that take the Karatsuba path
    fn long_poly() -> impl Strategy<Value = Poly<Z, U40>> {
        proptest::collection::vec(small_coeff().prop_map(Z::new), 40)
            .prop_map(|v| Poly::try_from_vec(v).unwrap())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in cubic(), b in linear()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn poly_add_associative(a in cubic(), b in linear(), c in cubic()) {
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn poly_mul_commutative(a in cubic(), b in linear()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn poly_mul_associative(a in linear(), b in cubic(), c in linear()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn poly_distributive(a in linear(), b in cubic(), c in cubic()) {
            // a * (b + c) = a * b + a * c
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_is_add_neg(a in cubic(), b in linear()) {
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        #[test]
        fn poly_rational_distributive(
            a in rational_quadratic(), b in rational_quadratic(), c in rational_quadratic()
        ) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn karatsuba_matches_evaluation(a in long_poly(), b in long_poly(), x in -3i64..=3) {
            let prod = a.clone() * b.clone();
            let x = Z::new(x);
            prop_assert_eq!(prod.at(x.clone()), a.at(x.clone()) * b.at(x));
        }

        // Evaluation is a ring homomorphism

        #[test]
        fn eval_respects_mul(a in cubic(), b in linear(), x in -5i64..=5) {
            prop_assert_eq!((a.clone() * b.clone()).at(x), a.at(x) * b.at(x));
        }

        #[test]
        fn eval_respects_add(a in cubic(), b in linear(), x in -5i64..=5) {
            prop_assert_eq!((a.clone() + b.clone()).at(x), a.at(x) + b.at(x));
        }

        #[test]
        fn composition_matches_pointwise(a in cubic(), b in linear(), x in -5i64..=5) {
            // (a o b)(x) = a(b(x))
            let composed = a.at(b.clone());
            prop_assert_eq!(composed.at(x), a.at(b.at(x)));
        }

        #[test]
        fn cross_matches_pointwise(a in linear(), b in cubic(), x in -5i64..=5, y in -5i64..=5) {
            let r = cross(a.clone(), b.clone());
            prop_assert_eq!(r.eval((x, y)), a.at(x) * b.at(y));
        }

        #[test]
        fn const_poly_ignores_outer_variable(a in cubic(), x in -5i64..=5, y in -5i64..=5) {
            prop_assert_eq!(const_poly(a.clone()).eval((x, y)), a.at(y));
        }

        #[test]
        fn scalar_mul_scales_values(a in cubic(), k in small_coeff(), x in -5i64..=5) {
            prop_assert_eq!((a.clone() * k).at(x), a.at(x) * k);
            prop_assert_eq!((k * a.clone()).at(x), k * a.at(x));
        }

        #[test]
        fn poly_factory_matches_from_coeffs(a in small_coeff(), b in small_coeff()) {
            let p: Poly<i64, U4> = Poly::from_coeffs((a, b));
            prop_assert_eq!(p.clone(), poly((a, b, 0i64, 0i64)));
            prop_assert_eq!(p.at(1), a + b);
        }
    }
}
