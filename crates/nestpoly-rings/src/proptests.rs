//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{CastFrom, Ring, Zero, Q, Z, Zp};

    type F101 = Zp<101>;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn z_add_commutative(a in small_int(), b in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn z_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn z_matches_i64(a in small_int(), b in small_int()) {
            prop_assert_eq!((Z::new(a) * Z::new(b)).to_i64(), Some(a * b));
            prop_assert_eq!((Z::new(a) - Z::new(b)).to_i64(), Some(a - b));
        }

        #[test]
        fn q_additive_inverse(n in small_int(), d in non_zero_int()) {
            let q = Q::new(n, d);
            prop_assert!((q.clone() + (-q)).is_zero());
        }

        #[test]
        fn q_mul_associative(
            a in small_int(), b in small_int(), c in small_int(), d in non_zero_int()
        ) {
            let a = Q::new(a, d);
            let b = Q::from_integer(b);
            let c = Q::new(c, d);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn zp_cast_respects_addition(a in small_int(), b in small_int()) {
            prop_assert_eq!(
                F101::cast_from(a) + F101::cast_from(b),
                F101::cast_from(a + b)
            );
        }

        #[test]
        fn zp_cast_respects_multiplication(a in small_int(), b in small_int()) {
            prop_assert_eq!(
                F101::cast_from(a) * F101::cast_from(b),
                F101::cast_from(a * b)
            );
        }

        #[test]
        fn mul_by_scalar_is_repeated_addition(a in small_int(), n in -20i64..20i64) {
            prop_assert_eq!(Z::new(a).mul_by_scalar(n), Z::new(a * n));
        }
    }
}
