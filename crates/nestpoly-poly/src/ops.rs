//! Arithmetic operators.
//!
//! Binary operators accept any mix of polynomial and scalar operands and
//! produce the common type:
//!
//! | Operation          | Result                                   |
//! |--------------------|------------------------------------------|
//! | `Poly ± Poly`      | `Poly<Common<T, U>, max(N, M)>`          |
//! | `Poly ± S`         | `Poly<Common<T, S>, N>`, `N > 0`         |
//! | `Poly * Poly`      | `Poly<MulOf<T, U>, N + M - 1>`           |
//! | `Poly * S`         | `Poly<Common<T, S>, N>`                  |
//!
//! Compound assignment never changes the type of the target, so the right
//! operand must fit into it. Multiplying in place by a polynomial would grow
//! the target and is rejected:
//!
//! ```compile_fail
//! use nestpoly_poly::poly;
//!
//! let mut p = poly((1, 2));
//! p *= poly((3, 4));
//! ```
//!
//! ```compile_fail
//! use nestpoly_poly::poly;
//!
//! let mut p = poly((1, 2));
//! p += poly((1, 2, 3));
//! ```
//!
//! Big integers do not narrow into machine integers, so they cannot be
//! added into an `i32` polynomial:
//!
//! ```compile_fail
//! use nestpoly_poly::{poly, Poly, Z};
//! use typenum::U2;
//!
//! let mut p: Poly<i32, U2> = Poly::new();
//! p += poly((Z::new(1),));
//! ```

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nestpoly_rings::{CastFrom, Common, CommonType, Scalar, Zero};
use typenum::{NonZero, Unsigned};

use crate::algorithms::convolution::{add_into, convolve};
use crate::dense::Poly;
use crate::size::{FitsIn, MaxOf, MaxSize, ProductOf, ProductSize};

/// Multiplication of every scalar leaf by a scalar factor.
pub trait Scale<S> {
    /// Multiplies in place.
    fn scale(&mut self, factor: &S);
}

impl<C, S> Scale<S> for C
where
    C: Scalar + CastFrom<S>,
    S: Scalar,
{
    fn scale(&mut self, factor: &S) {
        let value = std::mem::replace(self, C::zero());
        *self = value * C::cast_from(factor.clone());
    }
}

impl<T, N, S> Scale<S> for Poly<T, N>
where
    T: Scale<S>,
    N: Unsigned,
    S: Scalar,
{
    fn scale(&mut self, factor: &S) {
        for c in self.coeffs_mut() {
            c.scale(factor);
        }
    }
}

/// The product of two coefficients, which may be scalars or polynomials.
pub trait RingMul<Rhs> {
    /// The product type.
    type Output;

    /// Multiplies without consuming either operand.
    fn ring_mul(&self, rhs: &Rhs) -> Self::Output;
}

/// Shorthand for the product type of `A` and `B`.
pub type MulOf<A, B> = <A as RingMul<B>>::Output;

impl<C, S> RingMul<S> for C
where
    C: Scalar + CommonType<S>,
    S: Scalar,
    Common<C, S>: Scalar + CastFrom<C> + CastFrom<S>,
{
    type Output = Common<C, S>;

    fn ring_mul(&self, rhs: &S) -> Self::Output {
        <Common<C, S> as CastFrom<C>>::cast_from(self.clone())
            * <Common<C, S> as CastFrom<S>>::cast_from(rhs.clone())
    }
}

impl<C, T, N> RingMul<Poly<T, N>> for C
where
    C: Scalar,
    Poly<T, N>: Clone + Mul<C>,
{
    type Output = <Poly<T, N> as Mul<C>>::Output;

    fn ring_mul(&self, rhs: &Poly<T, N>) -> Self::Output {
        rhs.clone() * self.clone()
    }
}

impl<T, N, R> RingMul<R> for Poly<T, N>
where
    Poly<T, N>: Clone + Mul<R>,
    R: Clone,
{
    type Output = <Poly<T, N> as Mul<R>>::Output;

    fn ring_mul(&self, rhs: &R) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl<T, N, U, M> Add<Poly<U, M>> for Poly<T, N>
where
    T: CommonType<U>,
    N: MaxSize<M>,
    M: Unsigned,
    Common<T, U>: CastFrom<T> + CastFrom<U> + Zero + Add<Output = Common<T, U>>,
{
    type Output = Poly<Common<T, U>, MaxOf<N, M>>;

    fn add(self, rhs: Poly<U, M>) -> Self::Output {
        let mut out: Self::Output = Poly::new();
        for (slot, c) in out.coeffs_mut().iter_mut().zip(self) {
            *slot = Common::<T, U>::cast_from(c);
        }
        for (slot, c) in out.coeffs_mut().iter_mut().zip(rhs) {
            add_into(slot, Common::<T, U>::cast_from(c));
        }
        out
    }
}

impl<T, N, U, M> Sub<Poly<U, M>> for Poly<T, N>
where
    T: CommonType<U>,
    N: MaxSize<M>,
    M: Unsigned,
    Common<T, U>: CastFrom<T>
        + CastFrom<U>
        + Zero
        + Add<Output = Common<T, U>>
        + Neg<Output = Common<T, U>>,
{
    type Output = Poly<Common<T, U>, MaxOf<N, M>>;

    fn sub(self, rhs: Poly<U, M>) -> Self::Output {
        let mut out: Self::Output = Poly::new();
        for (slot, c) in out.coeffs_mut().iter_mut().zip(self) {
            *slot = Common::<T, U>::cast_from(c);
        }
        for (slot, c) in out.coeffs_mut().iter_mut().zip(rhs) {
            add_into(slot, -Common::<T, U>::cast_from(c));
        }
        out
    }
}

impl<T, N, U, M> Mul<Poly<U, M>> for Poly<T, N>
where
    T: RingMul<U> + Clone + Zero + Add<Output = T>,
    U: Clone + Zero + Add<Output = U>,
    N: ProductSize<M>,
    M: Unsigned,
    MulOf<T, U>: Clone + Zero + Add<Output = MulOf<T, U>> + Sub<Output = MulOf<T, U>>,
{
    type Output = Poly<MulOf<T, U>, ProductOf<N, M>>;

    fn mul(self, rhs: Poly<U, M>) -> Self::Output {
        Poly::from_vec_unchecked(convolve(self.coeffs(), rhs.coeffs()))
    }
}

impl<T, N, S> Add<S> for Poly<T, N>
where
    S: Scalar,
    T: CommonType<S>,
    N: Unsigned + NonZero,
    Common<T, S>: CastFrom<T> + CastFrom<S> + Zero + Add<Output = Common<T, S>>,
{
    type Output = Poly<Common<T, S>, N>;

    fn add(self, rhs: S) -> Self::Output {
        let mut out = self.map(Common::<T, S>::cast_from);
        add_into(&mut out[0], Common::<T, S>::cast_from(rhs));
        out
    }
}

impl<T, N, S> Sub<S> for Poly<T, N>
where
    S: Scalar,
    T: CommonType<S>,
    N: Unsigned + NonZero,
    Common<T, S>: CastFrom<T> + CastFrom<S> + Zero + Add<Output = Common<T, S>>,
{
    type Output = Poly<Common<T, S>, N>;

    fn sub(self, rhs: S) -> Self::Output {
        let mut out = self.map(Common::<T, S>::cast_from);
        add_into(&mut out[0], Common::<T, S>::cast_from(-rhs));
        out
    }
}

impl<T, N, S> Mul<S> for Poly<T, N>
where
    S: Scalar,
    T: CommonType<S>,
    N: Unsigned,
    Common<T, S>: CastFrom<T> + Scale<S>,
{
    type Output = Poly<Common<T, S>, N>;

    fn mul(self, rhs: S) -> Self::Output {
        let mut out = self.map(Common::<T, S>::cast_from);
        out.scale(&rhs);
        out
    }
}

impl<T, N> Neg for Poly<T, N>
where
    T: Neg<Output = T>,
    N: Unsigned,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T, N, U, M> AddAssign<Poly<U, M>> for Poly<T, N>
where
    T: CastFrom<U> + Zero + Add<Output = T>,
    N: Unsigned,
    M: FitsIn<N>,
{
    fn add_assign(&mut self, rhs: Poly<U, M>) {
        for (slot, c) in self.coeffs_mut().iter_mut().zip(rhs) {
            add_into(slot, T::cast_from(c));
        }
    }
}

impl<T, N, U, M> SubAssign<Poly<U, M>> for Poly<T, N>
where
    T: CastFrom<U> + Zero + Add<Output = T> + Neg<Output = T>,
    N: Unsigned,
    M: FitsIn<N>,
{
    fn sub_assign(&mut self, rhs: Poly<U, M>) {
        for (slot, c) in self.coeffs_mut().iter_mut().zip(rhs) {
            add_into(slot, -T::cast_from(c));
        }
    }
}

impl<T, N, S> AddAssign<S> for Poly<T, N>
where
    S: Scalar,
    T: CastFrom<S> + Zero + Add<Output = T>,
    N: Unsigned + NonZero,
{
    fn add_assign(&mut self, rhs: S) {
        add_into(&mut self[0], T::cast_from(rhs));
    }
}

impl<T, N, S> SubAssign<S> for Poly<T, N>
where
    S: Scalar,
    T: CastFrom<S> + Zero + Add<Output = T>,
    N: Unsigned + NonZero,
{
    fn sub_assign(&mut self, rhs: S) {
        add_into(&mut self[0], T::cast_from(-rhs));
    }
}

impl<T, N, S> MulAssign<S> for Poly<T, N>
where
    S: Scalar,
    T: Scale<S>,
    N: Unsigned,
{
    fn mul_assign(&mut self, rhs: S) {
        self.scale(&rhs);
    }
}
