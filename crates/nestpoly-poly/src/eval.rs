//! Evaluation.
//!
//! `p.at(x)` substitutes `x` for the outermost variable; `p.eval(args)`
//! substitutes one argument per nesting level, outermost first. Arguments
//! may be scalars or polynomials, so evaluation also composes polynomials.
//!
//! Horner's scheme runs inside the final result type. That type is computed
//! up front by [`HornerShape`]: substituting a point with `M` coefficients
//! into a level with `L` coefficients multiplies by the point `L - 1` times,
//! so every level of the point widens the matching level of the result.
//!
//! ```
//! use nestpoly_poly::poly;
//!
//! let p = poly((2, 1));
//! assert_eq!(p.at(0.5), 2.5);
//!
//! // q(x, y) = (1 + 2y) + 3x + 4x^2
//! let q = poly((poly((1.0, 2.0)), 3.0, 4.0));
//! assert_eq!(q.eval((2.0, 3.0)), 29.0);
//! assert_eq!(q.at(2.0), poly((23.0, 2.0)));
//! ```
//!
//! Passing more arguments than there are nesting levels is harmless: once
//! a scalar is reached the remaining arguments are ignored.
//!
//! A point must be a scalar or a polynomial:
//!
//! ```compile_fail
//! use nestpoly_poly::poly;
//!
//! let _ = poly((1, 2)).at("x");
//! ```

use std::ops::Add;

use nestpoly_rings::{CastFrom, Common, CommonType, Scalar, Zero};
use typenum::{Unsigned, U1};

use crate::algorithms::convolution::add_into;
use crate::dense::Poly;
use crate::size::{GrowOf, GrowSize};

/// The type of folding `L` coefficients of type `Self` against a point `X`.
pub trait HornerShape<X, L: Unsigned> {
    /// The result type.
    type Output;
}

/// Shorthand for the result of a Horner fold.
pub type ShapeOf<C, X, L> = <C as HornerShape<X, L>>::Output;

impl<C, X, L> HornerShape<X, L> for C
where
    C: Scalar + CommonType<X>,
    X: Scalar,
    L: Unsigned,
{
    type Output = Common<C, X>;
}

impl<T, K, X, L> HornerShape<X, L> for Poly<T, K>
where
    Poly<T, K>: CommonType<X>,
    X: Scalar,
    L: Unsigned,
{
    type Output = Common<Poly<T, K>, X>;
}

impl<T, K, S, M, L> HornerShape<Poly<S, M>, L> for Poly<T, K>
where
    T: HornerShape<S, L>,
    K: GrowSize<M, L>,
    M: Unsigned,
    L: Unsigned,
{
    type Output = Poly<ShapeOf<T, S, L>, GrowOf<K, M, L>>;
}

impl<C, S, M, L> HornerShape<Poly<S, M>, L> for C
where
    C: Scalar + HornerShape<S, L>,
    U1: GrowSize<M, L>,
    M: Unsigned,
    L: Unsigned,
{
    type Output = Poly<ShapeOf<C, S, L>, GrowOf<U1, M, L>>;
}

/// Multiplication that keeps the type of `Self`.
///
/// Coefficients that would not fit are dropped. Horner's scheme only uses
/// this on a result type large enough that nothing nonzero is ever dropped.
pub trait MulWithin<X> {
    /// Returns `self * x`, truncated to the shape of `Self`.
    #[must_use]
    fn mul_within(&self, x: &X) -> Self;
}

impl<R, X> MulWithin<X> for R
where
    R: Scalar + CastFrom<X>,
    X: Scalar,
{
    fn mul_within(&self, x: &X) -> Self {
        self.clone() * R::cast_from(x.clone())
    }
}

impl<T, N, X> MulWithin<X> for Poly<T, N>
where
    T: MulWithin<X>,
    N: Unsigned,
    X: Scalar,
{
    fn mul_within(&self, x: &X) -> Self {
        Self::from_fn(|i| self[i].mul_within(x))
    }
}

impl<T, N, S, M> MulWithin<Poly<S, M>> for Poly<T, N>
where
    T: MulWithin<S> + Zero + Add<Output = T>,
    N: Unsigned,
{
    fn mul_within(&self, x: &Poly<S, M>) -> Self {
        let n = N::USIZE;
        let mut out = Self::new();
        for (i, a) in self.iter().enumerate() {
            for (j, b) in x.into_iter().enumerate() {
                if i + j >= n {
                    break;
                }
                add_into(&mut out[i + j], a.mul_within(b));
            }
        }
        out
    }
}

/// Horner's scheme, computed entirely in `R`.
fn horner<C, X, R>(coeffs: Vec<C>, x: &X) -> R
where
    R: Zero + Add<Output = R> + CastFrom<C> + MulWithin<X>,
{
    let mut acc = R::zero();
    for c in coeffs.into_iter().rev() {
        acc = acc.mul_within(x) + R::cast_from(c);
    }
    acc
}

/// Substitution of an argument list, one argument per nesting level.
pub trait Evaluate<Args> {
    /// The result type.
    type Output;

    /// Evaluates at `args`.
    fn evaluate(&self, args: &Args) -> Self::Output;
}

impl<S: Scalar, Args> Evaluate<Args> for S {
    type Output = S;

    fn evaluate(&self, _args: &Args) -> S {
        self.clone()
    }
}

impl<T: Clone, N> Evaluate<()> for Poly<T, N> {
    type Output = Self;

    fn evaluate(&self, _args: &()) -> Self {
        self.clone()
    }
}

macro_rules! impl_evaluate_tuple {
    ($(($A:ident, $a:ident)),*) => {
        impl<T, N, X, $($A),*> Evaluate<(X, $($A,)*)> for Poly<T, N>
        where
            N: Unsigned,
            T: Evaluate<($($A,)*)>,
            $($A: Clone,)*
            <T as Evaluate<($($A,)*)>>::Output: HornerShape<X, N>,
            ShapeOf<<T as Evaluate<($($A,)*)>>::Output, X, N>: Zero
                + Add<Output = ShapeOf<<T as Evaluate<($($A,)*)>>::Output, X, N>>
                + CastFrom<<T as Evaluate<($($A,)*)>>::Output>
                + MulWithin<X>,
        {
            type Output = ShapeOf<<T as Evaluate<($($A,)*)>>::Output, X, N>;

            fn evaluate(&self, args: &(X, $($A,)*)) -> Self::Output {
                let (x, $($a,)*) = args;
                let rest = ($($a.clone(),)*);
                let coeffs: Vec<_> = self.iter().map(|c| c.evaluate(&rest)).collect();
                horner(coeffs, x)
            }
        }
    };
}

impl_evaluate_tuple!();
impl_evaluate_tuple!((A, a));
impl_evaluate_tuple!((A, a), (B, b));
impl_evaluate_tuple!((A, a), (B, b), (C, c));
impl_evaluate_tuple!((A, a), (B, b), (C, c), (D, d));
impl_evaluate_tuple!((A, a), (B, b), (C, c), (D, d), (E, e));

macro_rules! impl_evaluate_array {
    (@ty $i:literal $x:ident) => { $x };
    ($k:literal => ($($i:literal),*)) => {
        impl<T, N, X> Evaluate<[X; $k]> for Poly<T, N>
        where
            X: Clone,
            Poly<T, N>: Evaluate<($(impl_evaluate_array!(@ty $i X),)*)>,
        {
            type Output = <Poly<T, N> as Evaluate<($(impl_evaluate_array!(@ty $i X),)*)>>::Output;

            fn evaluate(&self, args: &[X; $k]) -> Self::Output {
                self.evaluate(&($(args[$i].clone(),)*))
            }
        }
    };
}

impl<T, N, X> Evaluate<[X; 0]> for Poly<T, N>
where
    Poly<T, N>: Evaluate<()>,
{
    type Output = <Poly<T, N> as Evaluate<()>>::Output;

    fn evaluate(&self, _args: &[X; 0]) -> Self::Output {
        self.evaluate(&())
    }
}

impl_evaluate_array!(1 => (0));
impl_evaluate_array!(2 => (0, 1));
impl_evaluate_array!(3 => (0, 1, 2));
impl_evaluate_array!(4 => (0, 1, 2, 3));
impl_evaluate_array!(5 => (0, 1, 2, 3, 4));
impl_evaluate_array!(6 => (0, 1, 2, 3, 4, 5));

impl<T, N: Unsigned> Poly<T, N> {
    /// Substitutes `x` for the outermost variable.
    ///
    /// The result keeps the inner variables. Evaluating at a polynomial
    /// composes; the result grows to hold every term:
    ///
    /// ```
    /// use nestpoly_poly::poly;
    ///
    /// // (1 + x)^2 at x = 1 + y gives (2 + y)^2
    /// let p = poly((1, 2, 1));
    /// assert_eq!(p.at(poly((1, 1))), poly((4, 4, 1)));
    /// ```
    #[must_use]
    pub fn at<X>(&self, x: X) -> <Self as Evaluate<(X,)>>::Output
    where
        Self: Evaluate<(X,)>,
    {
        self.evaluate(&(x,))
    }

    /// Substitutes one argument per nesting level, outermost first.
    ///
    /// `args` is a tuple or an array of up to six arguments.
    #[must_use]
    pub fn eval<A>(&self, args: A) -> <Self as Evaluate<A>>::Output
    where
        Self: Evaluate<A>,
    {
        self.evaluate(&args)
    }
}
