//! The ring of integers Z.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use dashu::integer::IBig;

use crate::coerce::{CastFrom, CommonType};
use crate::traits::{Ring, Scalar, Zero};

/// The ring of arbitrary precision integers.
///
/// This is a wrapper around `dashu::integer::IBig`, so polynomial
/// coefficients never overflow.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl Zero for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Ring for Z {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl Scalar for Z {}

// Implement arithmetic operations
impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for Z {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Z {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for Z {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl CastFrom<Z> for Z {
    fn cast_from(value: Z) -> Self {
        value
    }
}

impl CommonType<Z> for Z {
    type Output = Z;
}

macro_rules! impl_integer_interop {
    ($($t:ty),* $(,)?) => {
        $(
            impl CastFrom<$t> for Z {
                fn cast_from(value: $t) -> Self {
                    Self(IBig::from(value))
                }
            }

            impl CommonType<$t> for Z {
                type Output = Z;
            }

            impl CommonType<Z> for $t {
                type Output = Z;
            }
        )*
    };
}

impl_integer_interop!(i8, i16, i32, i64, i128, isize);
