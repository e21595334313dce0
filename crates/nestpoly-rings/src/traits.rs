//! Algebraic structure traits.
//!
//! This module defines the traits every polynomial coefficient is built on.
//! `Zero` is shared by scalars and polynomials alike, while `Ring` and
//! `Scalar` describe the non-polynomial leaves of a nested polynomial.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Types with an additive identity.
///
/// Implemented by every scalar ring and by every polynomial type, so that a
/// polynomial can be zero-filled at any nesting depth.
pub trait Zero: Sized {
    /// The additive identity.
    fn zero() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;
}

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Zero
    + Clone
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self + self + ... (n times).
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut result = self.clone();
        let abs_n = n.unsigned_abs();

        for _ in 1..abs_n {
            result = result + self.clone();
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }

    /// Computes self^n for non-negative n.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A ring element that is not itself a polynomial.
///
/// Scalars are the leaves of a nested polynomial. Generic polynomial code
/// branches on this trait wherever a coefficient may or may not be a
/// polynomial, so no polynomial type ever implements it.
pub trait Scalar: Ring {}

macro_rules! impl_primitive_ring {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                #[inline]
                fn zero() -> Self {
                    num_traits::Zero::zero()
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    num_traits::Zero::is_zero(self)
                }
            }

            impl Ring for $t {
                #[inline]
                fn one() -> Self {
                    num_traits::One::one()
                }

                #[inline]
                fn is_one(&self) -> bool {
                    num_traits::One::is_one(self)
                }
            }

            impl Scalar for $t {}
        )*
    };
}

impl_primitive_ring!(i8, i16, i32, i64, i128, isize, f32, f64);
