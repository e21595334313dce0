//! Static introspection of nesting depth.

use nestpoly_rings::Scalar;

use crate::dense::Poly;

/// Distinguishes polynomials from scalar leaves at compile time.
pub trait Nesting {
    /// Whether the type is a polynomial.
    const IS_POLY: bool;
    /// Number of polynomial levels; zero for a scalar.
    const DEPTH: usize;
    /// The scalar type at the bottom of the nesting.
    type Leaf: Scalar;
}

impl<S: Scalar> Nesting for S {
    const IS_POLY: bool = false;
    const DEPTH: usize = 0;
    type Leaf = S;
}

impl<T: Nesting, N> Nesting for Poly<T, N> {
    const IS_POLY: bool = true;
    const DEPTH: usize = T::DEPTH + 1;
    type Leaf = T::Leaf;
}

/// Returns whether `T` is a polynomial.
#[must_use]
pub const fn is_poly<T: Nesting>() -> bool {
    T::IS_POLY
}

/// Returns the number of variables of `T`.
#[must_use]
pub const fn depth<T: Nesting>() -> usize {
    T::DEPTH
}
