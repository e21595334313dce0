//! Lifting polynomials into more variables.

use nestpoly_rings::{CastFrom, Common, CommonType, Scalar};
use typenum::{Unsigned, U1};

use crate::dense::Poly;
use crate::ops::Scale;

/// Wraps `p` as the constant term of a new outermost variable.
///
/// The variables of `p` move one level inward, so `const_poly(x)` turns
/// the first variable into the second:
///
/// ```
/// use nestpoly_poly::{const_poly, poly};
///
/// let x = poly((0, 1));
/// let y = const_poly(x.clone());
/// assert_eq!(y.size(), 1);
/// assert_eq!(y[0], x);
/// ```
#[must_use]
pub fn const_poly<P>(p: P) -> Poly<P, U1> {
    Poly::from_vec_unchecked(vec![p])
}

/// The product of two polynomials in disjoint sets of variables.
///
/// The variables of `Self` stay outermost and those of `Rhs` are appended
/// below them. No level grows: the result has one level per level of either
/// operand, each with the size it had.
pub trait Cross<Rhs> {
    /// The result type.
    type Output;

    /// Computes `self(x...) * rhs(y...)`.
    fn cross(&self, rhs: &Rhs) -> Self::Output;
}

impl<S, R> Cross<R> for S
where
    S: Scalar + CommonType<R>,
    R: Clone,
    Common<S, R>: CastFrom<R> + Scale<S>,
{
    type Output = Common<S, R>;

    fn cross(&self, rhs: &R) -> Self::Output {
        let mut out = Common::<S, R>::cast_from(rhs.clone());
        out.scale(self);
        out
    }
}

impl<T, N, R> Cross<R> for Poly<T, N>
where
    T: Cross<R>,
    N: Unsigned,
{
    type Output = Poly<T::Output, N>;

    fn cross(&self, rhs: &R) -> Self::Output {
        Poly::from_fn(|i| self[i].cross(rhs))
    }
}

/// Multiplies `p` and `q` as polynomials in separate variables.
///
/// ```
/// use nestpoly_poly::{cross, poly};
///
/// // (1 + x)(2 + 3y)
/// let r = cross(poly((1, 1)), poly((2, 3)));
/// assert_eq!(r, poly((poly((2, 3)), poly((2, 3)))));
/// assert_eq!(cross(3, 4), 12);
/// ```
///
/// Both sides must be ring elements:
///
/// ```compile_fail
/// use nestpoly_poly::cross;
///
/// let _ = cross(2, "x");
/// ```
#[must_use]
pub fn cross<P, Q>(p: P, q: Q) -> P::Output
where
    P: Cross<Q>,
{
    p.cross(&q)
}
