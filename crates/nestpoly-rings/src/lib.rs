//! # nestpoly-rings
//!
//! Coefficient algebra for nestpoly.
//!
//! This crate provides:
//! - Abstract traits: `Zero`, `Ring`, `Scalar`
//! - The convertibility predicate `CastFrom` and type promotion `CommonType`
//! - Concrete rings: Z, Q, Z/PZ
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Zero
//!  └── Ring
//!       └── Scalar   (non-polynomial leaves)
//! ```
//!
//! Polynomials implement `Zero` but never `Ring` or `Scalar`: multiplying
//! two fixed-size polynomials changes their type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod integers;
pub mod modular;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use coerce::{CastFrom, Common, CommonType};
pub use integers::Z;
pub use modular::Zp;
pub use rationals::Q;
pub use traits::{Ring, Scalar, Zero};
