//! Type-level size arithmetic.
//!
//! The size of a polynomial is part of its type, so every operation that
//! changes it needs the new size computed by the type system. Sizes are
//! `typenum` unsigned integers; the traits here name the handful of size
//! rules the operators rely on:
//!
//! - Sums and differences: `max(N, M)`
//! - Products: `N + M - 1`, or `0` when either operand is empty
//! - Widening: `M <= N`
//! - Horner evaluation at a polynomial point: `K + (L - 1)(M - 1)`

use std::ops::{Add, Mul, Sub};

use typenum::{Bit, IsLessOrEqual, Max, Maximum, Prod, Sub1, Sum, UInt, UTerm, Unsigned, B1, U0};

/// `max(Self, M)`: the size of a sum or a difference.
pub trait MaxSize<M: Unsigned>: Unsigned {
    /// The larger of the two sizes.
    type Output: Unsigned;
}

impl<N, M> MaxSize<M> for N
where
    N: Unsigned + Max<M>,
    M: Unsigned,
    Maximum<N, M>: Unsigned,
{
    type Output = Maximum<N, M>;
}

/// Shorthand for `max(N, M)`.
pub type MaxOf<N, M> = <N as MaxSize<M>>::Output;

/// The size of a product: `Self + M - 1`, collapsing to zero when either
/// size is zero.
pub trait ProductSize<M: Unsigned>: Unsigned {
    /// The size of the convolution.
    type Output: Unsigned;
}

impl<M: Unsigned> ProductSize<M> for UTerm {
    type Output = U0;
}

impl<U: Unsigned, B: Bit> ProductSize<UTerm> for UInt<U, B> {
    type Output = U0;
}

impl<U, B, V, C> ProductSize<UInt<V, C>> for UInt<U, B>
where
    U: Unsigned,
    B: Bit,
    V: Unsigned,
    C: Bit,
    UInt<U, B>: Add<UInt<V, C>>,
    Sum<UInt<U, B>, UInt<V, C>>: Sub<B1>,
    Sub1<Sum<UInt<U, B>, UInt<V, C>>>: Unsigned,
{
    type Output = Sub1<Sum<UInt<U, B>, UInt<V, C>>>;
}

/// Shorthand for the size of an `N` by `M` product.
pub type ProductOf<N, M> = <N as ProductSize<M>>::Output;

/// `Self <= N`: a polynomial of size `Self` widens into one of size `N`.
pub trait FitsIn<N: Unsigned>: Unsigned {}

impl<M, N> FitsIn<N> for M
where
    M: Unsigned + IsLessOrEqual<N, Output = B1>,
    N: Unsigned,
{
}

/// `Self - 1`, saturating at zero.
pub trait SaturatingSub1: Unsigned {
    /// The decremented size.
    type Output: Unsigned;
}

impl SaturatingSub1 for UTerm {
    type Output = U0;
}

impl<U, B> SaturatingSub1 for UInt<U, B>
where
    U: Unsigned,
    B: Bit,
    UInt<U, B>: Sub<B1>,
    Sub1<UInt<U, B>>: Unsigned,
{
    type Output = Sub1<UInt<U, B>>;
}

/// Shorthand for `N - 1`, saturating at zero.
pub type Pred<N> = <N as SaturatingSub1>::Output;

/// Growth of one nesting level during Horner evaluation.
///
/// Folding `L` coefficients whose level has size `Self` against a point
/// whose level has size `M` multiplies by the point `L - 1` times, so the
/// level ends up with `Self + (L - 1)(M - 1)` coefficients.
pub trait GrowSize<M: Unsigned, L: Unsigned>: Unsigned {
    /// The grown size.
    type Output: Unsigned;
}

impl<K, M, L> GrowSize<M, L> for K
where
    K: Unsigned + Add<Prod<Pred<L>, Pred<M>>>,
    M: SaturatingSub1,
    L: SaturatingSub1,
    Pred<L>: Mul<Pred<M>>,
    Sum<K, Prod<Pred<L>, Pred<M>>>: Unsigned,
{
    type Output = Sum<K, Prod<Pred<L>, Pred<M>>>;
}

/// Shorthand for the grown size of a level.
pub type GrowOf<K, M, L> = <K as GrowSize<M, L>>::Output;
