//! The field of rational numbers Q.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use dashu::base::UnsignedAbs;
use dashu::integer::IBig;
use dashu::rational::RBig;

use crate::coerce::{CastFrom, CommonType};
use crate::integers::Z;
use crate::traits::{Ring, Scalar, Zero};

/// The field of arbitrary precision rational numbers.
///
/// Values are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, IBig::from(den).unsigned_abs()))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z(self.0.numerator().clone())
    }

    /// Returns the denominator.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z(IBig::from(self.0.denominator().clone()))
    }

    /// Returns the inner `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

impl Zero for Q {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }
}

impl Ring for Q {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl Scalar for Q {}

// Implement arithmetic operations
impl Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl AddAssign for Q {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Q {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for Q {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl CastFrom<Q> for Q {
    fn cast_from(value: Q) -> Self {
        value
    }
}

impl CastFrom<Z> for Q {
    fn cast_from(value: Z) -> Self {
        Self(RBig::from(value.0))
    }
}

impl CommonType<Q> for Q {
    type Output = Q;
}

impl CommonType<Z> for Q {
    type Output = Q;
}

impl CommonType<Q> for Z {
    type Output = Q;
}

macro_rules! impl_integer_interop {
    ($($t:ty),* $(,)?) => {
        $(
            impl CastFrom<$t> for Q {
                fn cast_from(value: $t) -> Self {
                    Self(RBig::from(IBig::from(value)))
                }
            }

            impl CommonType<$t> for Q {
                type Output = Q;
            }

            impl CommonType<Q> for $t {
                type Output = Q;
            }
        )*
    };
}

impl_integer_interop!(i8, i16, i32, i64, i128, isize);
