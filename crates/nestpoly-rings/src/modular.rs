//! Integers modulo a compile-time prime.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::coerce::{CastFrom, CommonType};
use crate::traits::{Ring, Scalar, Zero};

/// An element of Z/PZ.
///
/// Stored as the canonical representative in `0..P`. Products are reduced
/// through `u128`, so any `P` below `2^64` is supported.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Zp<const P: u64>(u64);

impl<const P: u64> Zp<P> {
    /// Creates a new element, reducing `value` modulo P.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates an element from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        let r = i128::from(value).rem_euclid(i128::from(P));
        // rem_euclid with a positive modulus lands in 0..P
        Self(u64::try_from(r).unwrap_or_default())
    }

    /// Returns the canonical representative.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }
}

impl<const P: u64> Zero for Zp<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> Ring for Zp<P> {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        self.0 == 1 % P
    }
}

impl<const P: u64> Scalar for Zp<P> {}

impl<const P: u64> Add for Zp<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let sum = (u128::from(self.0) + u128::from(rhs.0)) % u128::from(P);
        #[allow(clippy::cast_possible_truncation)]
        let sum = sum as u64;
        Self(sum)
    }
}

impl<const P: u64> Sub for Zp<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl<const P: u64> Mul for Zp<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let prod = (u128::from(self.0) * u128::from(rhs.0)) % u128::from(P);
        #[allow(clippy::cast_possible_truncation)]
        let prod = prod as u64;
        Self(prod)
    }
}

impl<const P: u64> Neg for Zp<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> AddAssign for Zp<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> SubAssign for Zp<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> MulAssign for Zp<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> fmt::Display for Zp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> CastFrom<Zp<P>> for Zp<P> {
    fn cast_from(value: Zp<P>) -> Self {
        value
    }
}

impl<const P: u64> CommonType<Zp<P>> for Zp<P> {
    type Output = Zp<P>;
}

macro_rules! impl_integer_interop {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const P: u64> CastFrom<$t> for Zp<P> {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn cast_from(value: $t) -> Self {
                    let r = (value as i128).rem_euclid(i128::from(P));
                    Self(r as u64)
                }
            }

            impl<const P: u64> CommonType<$t> for Zp<P> {
                type Output = Zp<P>;
            }

            impl<const P: u64> CommonType<Zp<P>> for $t {
                type Output = Zp<P>;
            }
        )*
    };
}

impl_integer_interop!(i8, i16, i32, i64, i128, isize);
