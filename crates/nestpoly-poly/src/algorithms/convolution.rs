//! Coefficient convolution.
//!
//! Multiplying polynomials of sizes `n` and `m` convolves their coefficient
//! slices into `n + m - 1` coefficients. Nothing is trimmed: trailing zeros
//! are part of the result's static size.
//!
//! Below [`KARATSUBA_THRESHOLD`] coefficients the schoolbook product is
//! used; above it Karatsuba's divide-and-conquer scheme brings the cost down
//! to O(n^1.58).

use std::ops::{Add, Sub};

use nestpoly_rings::Zero;

use crate::ops::RingMul;

/// Karatsuba multiplication threshold.
///
/// Below this many coefficients, schoolbook multiplication is faster.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Adds `value` into `slot` without requiring `AddAssign`.
pub(crate) fn add_into<R: Zero + Add<Output = R>>(slot: &mut R, value: R) {
    let acc = std::mem::replace(slot, R::zero());
    *slot = acc + value;
}

fn sub_from<R: Zero + Sub<Output = R>>(slot: &mut R, value: R) {
    let acc = std::mem::replace(slot, R::zero());
    *slot = acc - value;
}

/// Convolves two coefficient slices, choosing the algorithm by length.
///
/// Returns an empty vector when either slice is empty.
pub fn convolve<T, U, R>(a: &[T], b: &[U]) -> Vec<R>
where
    T: RingMul<U, Output = R> + Clone + Zero + Add<Output = T>,
    U: Clone + Zero + Add<Output = U>,
    R: Clone + Zero + Add<Output = R> + Sub<Output = R>,
{
    if a.len() < KARATSUBA_THRESHOLD || b.len() < KARATSUBA_THRESHOLD {
        schoolbook_mul(a, b)
    } else {
        karatsuba_mul(a, b)
    }
}

/// Schoolbook multiplication: O(nm).
pub fn schoolbook_mul<T, U, R>(a: &[T], b: &[U]) -> Vec<R>
where
    T: RingMul<U, Output = R>,
    R: Zero + Add<Output = R>,
{
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result: Vec<R> = (0..a.len() + b.len() - 1).map(|_| R::zero()).collect();

    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            add_into(&mut result[i + j], x.ring_mul(y));
        }
    }

    result
}

/// Performs Karatsuba multiplication on coefficient slices.
///
/// Returns exactly `a.len() + b.len() - 1` coefficients.
pub fn karatsuba_mul<T, U, R>(a: &[T], b: &[U]) -> Vec<R>
where
    T: RingMul<U, Output = R> + Clone + Zero + Add<Output = T>,
    U: Clone + Zero + Add<Output = U>,
    R: Clone + Zero + Add<Output = R> + Sub<Output = R>,
{
    let n = a.len();
    let m = b.len();

    // Base case
    if n < KARATSUBA_THRESHOLD || m < KARATSUBA_THRESHOLD {
        return schoolbook_mul(a, b);
    }

    // Make both the same size (power of 2)
    let size = n.max(m).next_power_of_two();
    let half = size / 2;

    let mut a_ext = a.to_vec();
    let mut b_ext = b.to_vec();
    a_ext.resize_with(size, T::zero);
    b_ext.resize_with(size, U::zero);

    // Split: a = a0 + a1*x^half, b = b0 + b1*x^half
    let (a0, a1) = a_ext.split_at(half);
    let (b0, b1) = b_ext.split_at(half);

    let z0 = karatsuba_mul(a0, b0);
    let z2 = karatsuba_mul(a1, b1);

    let a01: Vec<T> = a0
        .iter()
        .zip(a1)
        .map(|(x, y)| x.clone() + y.clone())
        .collect();
    let b01: Vec<U> = b0
        .iter()
        .zip(b1)
        .map(|(x, y)| x.clone() + y.clone())
        .collect();

    // z1 = (a0+a1)*(b0+b1) - z0 - z2
    let mut z1 = karatsuba_mul(&a01, &b01);
    for (slot, c) in z1.iter_mut().zip(&z0) {
        sub_from(slot, c.clone());
    }
    for (slot, c) in z1.iter_mut().zip(&z2) {
        sub_from(slot, c.clone());
    }

    // Combine: result = z0 + z1*x^half + z2*x^(2*half)
    let mut result: Vec<R> = (0..2 * size - 1).map(|_| R::zero()).collect();

    for (i, c) in z0.into_iter().enumerate() {
        result[i] = c;
    }
    for (i, c) in z1.into_iter().enumerate() {
        add_into(&mut result[i + half], c);
    }
    for (i, c) in z2.into_iter().enumerate() {
        add_into(&mut result[i + 2 * half], c);
    }

    // Drop the padding, which only ever contributes zeros
    result.truncate(n + m - 1);
    result
}
