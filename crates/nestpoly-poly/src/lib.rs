//! # nestpoly-poly
//!
//! Fixed-size, recursively nestable polynomials.
//!
//! This crate provides:
//! - `Poly<T, N>`: exactly `N` coefficients of type `T`, constant term first
//! - Nesting: a `Poly` whose coefficients are polynomials has one more
//!   variable per level, outermost first
//! - Type-level sizes: sums widen to `max(N, M)`, products to `N + M - 1`,
//!   and every size mismatch is a compile error
//! - Evaluation at scalars or polynomials (`at`, `eval`)
//! - Lifting into more variables (`const_poly`, `cross`)
//!
//! ## Example
//!
//! ```
//! use nestpoly_poly::{const_poly, poly};
//!
//! let x = poly((0, 1));
//! let y = const_poly(x.clone());
//!
//! // (x + y)^2 = x^2 + 2xy + y^2
//! let s = x.clone() + y.clone();
//! let lhs = s.clone() * s;
//! let rhs = x.clone() * x.clone() + 2 * (x * y.clone()) + y.clone() * y;
//! assert_eq!(lhs, rhs);
//! assert_eq!(lhs.eval((2, 3)), 25);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod coeffs;
pub mod dense;
pub mod error;
pub mod eval;
pub mod lift;
pub mod nesting;
pub mod ops;
pub mod promote;
pub mod size;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod scenarios;

pub use coeffs::{poly, CoeffList, Coefficients};
pub use dense::Poly;
pub use error::{PolyError, Result};
pub use eval::{Evaluate, HornerShape, MulWithin, ShapeOf};
pub use lift::{const_poly, cross, Cross};
pub use nesting::{depth, is_poly, Nesting};
pub use ops::{MulOf, RingMul, Scale};
pub use size::{FitsIn, GrowOf, GrowSize, MaxOf, MaxSize, ProductOf, ProductSize};

pub use nestpoly_rings::{CastFrom, Common, CommonType, Ring, Scalar, Zero, Q, Z, Zp};
