//! # Nestpoly
//!
//! Multivariate polynomial arithmetic built from nested fixed-size
//! univariate polynomials.
//!
//! A `Poly<T, N>` holds exactly `N` coefficients. Nesting adds variables:
//! `Poly<Poly<i32, U3>, U2>` is a polynomial in two variables, linear in
//! the outer one and quadratic in the inner one. Every size is part of the
//! type, so the size of a sum or product is known at compile time and a
//! mismatched assignment is rejected by the compiler.
//!
//! ## Features
//!
//! - **Mixed coefficients**: `i32 + f64`, `Z * Q` and polynomial operands
//!   promote to a common type
//! - **Exact rings**: big integers, rationals and integers modulo a prime
//! - **Multiplication**: schoolbook for short inputs, Karatsuba above a
//!   threshold
//! - **Evaluation**: substitute scalars or whole polynomials, one level at
//!   a time or all at once
//!
//! ## Quick Start
//!
//! ```
//! use nestpoly::prelude::*;
//!
//! let x = poly((0, 1));
//! let y = const_poly(x.clone());
//!
//! let p = x.clone() * x + 3i32 * y + 1;
//! assert_eq!(p.eval((2, 5)), 20);
//!
//! // Substituting a rational for the outer variable leaves a polynomial in y
//! let q: Poly<Q, U2> = p.at(Q::new(1, 2));
//! assert_eq!(q, poly((Q::new(5, 4), Q::from_integer(3))));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use nestpoly_poly as poly;
pub use nestpoly_rings as rings;
pub use typenum;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use nestpoly_poly::{
        const_poly, cross, poly, Cross, Evaluate, Nesting, Poly, PolyError, Scale,
    };
    pub use nestpoly_rings::{CastFrom, Common, CommonType, Ring, Scalar, Zero, Q, Z, Zp};
    pub use typenum::{
        U0, U1, U10, U11, U12, U13, U14, U15, U16, U2, U3, U4, U5, U6, U7, U8, U9,
    };
}
