//! Conversion and type promotion for polynomials.
//!
//! Polynomials join the [`CastFrom`] and [`CommonType`] relations of the
//! coefficient crate:
//!
//! - `Poly<U, M>` converts into `Poly<T, N>` when `U` converts into `T` and
//!   `M <= N`; missing coefficients are zero.
//! - A scalar converts into any non-empty polynomial as a constant.
//! - The common type of two polynomials takes the common coefficient type
//!   and the larger size. A scalar meets a polynomial at its coefficients.

use nestpoly_rings::{CastFrom, Common, CommonType, Scalar, Zero, Q, Z, Zp};
use typenum::{NonZero, Unsigned};

use crate::dense::Poly;
use crate::size::{FitsIn, MaxOf, MaxSize};

impl<T, N, U, M> CastFrom<Poly<U, M>> for Poly<T, N>
where
    T: CastFrom<U> + Zero,
    N: Unsigned,
    M: FitsIn<N>,
{
    fn cast_from(value: Poly<U, M>) -> Self {
        let mut coeffs: Vec<T> = value.into_iter().map(T::cast_from).collect();
        coeffs.resize_with(N::USIZE, T::zero);
        Self::from_vec_unchecked(coeffs)
    }
}

impl<T, N, S> CastFrom<S> for Poly<T, N>
where
    S: Scalar,
    T: CastFrom<S> + Zero,
    N: Unsigned + NonZero,
{
    fn cast_from(value: S) -> Self {
        Self::constant(value)
    }
}

impl<T, N, U, M> CommonType<Poly<U, M>> for Poly<T, N>
where
    T: CommonType<U>,
    N: MaxSize<M>,
    M: Unsigned,
{
    type Output = Poly<Common<T, U>, MaxOf<N, M>>;
}

impl<T, N, S> CommonType<S> for Poly<T, N>
where
    S: Scalar,
    T: CommonType<S>,
{
    type Output = Poly<Common<T, S>, N>;
}

/// Implements the scalar-on-the-left half of polynomial interop.
///
/// Coherence rules only let this crate write `impl Add<Poly<T, N>> for S`
/// for concrete scalar types, so every scalar type that should appear on the
/// left of `+`, `-` or `*` with a polynomial needs one invocation. The crate
/// covers the signed primitives, floats, `Z`, `Q` and `Zp<P>`. A downstream
/// scalar type invokes it once:
///
/// ```
/// use nestpoly_poly::{impl_scalar_interop, poly, CastFrom, CommonType, Ring, Scalar, Zero};
/// use std::ops::{Add, Mul, Neg, Sub};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Gf2(bool);
///
/// impl Zero for Gf2 {
///     fn zero() -> Self { Gf2(false) }
///     fn is_zero(&self) -> bool { !self.0 }
/// }
/// impl Ring for Gf2 {
///     fn one() -> Self { Gf2(true) }
///     fn is_one(&self) -> bool { self.0 }
/// }
/// impl Scalar for Gf2 {}
/// impl Add for Gf2 { type Output = Self; fn add(self, r: Self) -> Self { Gf2(self.0 ^ r.0) } }
/// impl Sub for Gf2 { type Output = Self; fn sub(self, r: Self) -> Self { Gf2(self.0 ^ r.0) } }
/// impl Mul for Gf2 { type Output = Self; fn mul(self, r: Self) -> Self { Gf2(self.0 & r.0) } }
/// impl Neg for Gf2 { type Output = Self; fn neg(self) -> Self { self } }
/// impl CastFrom<Gf2> for Gf2 { fn cast_from(v: Gf2) -> Self { v } }
/// impl CommonType<Gf2> for Gf2 { type Output = Gf2; }
///
/// impl_scalar_interop!(Gf2);
///
/// let p = poly((Gf2(true), Gf2(true)));
/// assert_eq!(Gf2(true) + p.clone(), poly((Gf2(false), Gf2(true))));
/// assert_eq!(Gf2(false) * p, poly((Gf2(false), Gf2(false))));
/// ```
///
/// Generic scalar types list their parameters in brackets:
/// `impl_scalar_interop!(generic [const P: u64] Zp<P>)`.
#[macro_export]
macro_rules! impl_scalar_interop {
    (@impl [$($g:tt)*] $s:ty) => {
        impl<T, N, $($g)*> $crate::CommonType<$crate::Poly<T, N>> for $s
        where
            $s: $crate::CommonType<T>,
        {
            type Output = $crate::Poly<$crate::Common<$s, T>, N>;
        }

        impl<T, N, $($g)*> ::core::ops::Add<$crate::Poly<T, N>> for $s
        where
            $crate::Poly<T, N>: ::core::ops::Add<$s>,
        {
            type Output = <$crate::Poly<T, N> as ::core::ops::Add<$s>>::Output;

            fn add(self, rhs: $crate::Poly<T, N>) -> Self::Output {
                rhs + self
            }
        }

        impl<T, N, $($g)*> ::core::ops::Sub<$crate::Poly<T, N>> for $s
        where
            $crate::Poly<T, N>: ::core::ops::Sub<$s>,
            <$crate::Poly<T, N> as ::core::ops::Sub<$s>>::Output: ::core::ops::Neg,
        {
            type Output = <<$crate::Poly<T, N> as ::core::ops::Sub<$s>>::Output
                as ::core::ops::Neg>::Output;

            fn sub(self, rhs: $crate::Poly<T, N>) -> Self::Output {
                -(rhs - self)
            }
        }

        impl<T, N, $($g)*> ::core::ops::Mul<$crate::Poly<T, N>> for $s
        where
            $crate::Poly<T, N>: ::core::ops::Mul<$s>,
        {
            type Output = <$crate::Poly<T, N> as ::core::ops::Mul<$s>>::Output;

            fn mul(self, rhs: $crate::Poly<T, N>) -> Self::Output {
                rhs * self
            }
        }
    };
    (generic [$($g:tt)*] $s:ty) => {
        $crate::impl_scalar_interop!(@impl [$($g)*] $s);
    };
    ($($s:ty),+ $(,)?) => {
        $($crate::impl_scalar_interop!(@impl [] $s);)+
    };
}

impl_scalar_interop!(i8, i16, i32, i64, i128, isize, f32, f64, Z, Q);
impl_scalar_interop!(generic [const P: u64] Zp<P>);
