//! Error types for runtime polynomial construction.
//!
//! Shape mismatches between typed polynomials are rejected by the compiler.
//! Only data whose length is known at runtime can fail, and it fails here.

use thiserror::Error;

/// Errors raised when runtime data does not fit a polynomial's static size.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// More coefficients than the polynomial has room for.
    #[error("{len} coefficients do not fit in a polynomial of size {size}")]
    TooManyCoefficients {
        /// Number of coefficients supplied.
        len: usize,
        /// Static size of the target polynomial.
        size: usize,
    },

    /// A degree at or beyond the polynomial's size.
    #[error("degree {degree} is out of range for a polynomial of size {size}")]
    DegreeOutOfRange {
        /// Requested degree.
        degree: usize,
        /// Static size of the target polynomial.
        size: usize,
    },
}

/// Result type for polynomial construction.
pub type Result<T> = std::result::Result<T, PolyError>;
