//! Polynomial algorithms.
//!
//! This module contains the coefficient-slice kernels behind the
//! polynomial operators:
//! - Schoolbook and Karatsuba convolution

pub mod convolution;
