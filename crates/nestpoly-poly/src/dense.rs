//! Fixed-size dense polynomials.
//!
//! A `Poly<T, N>` always stores exactly `N` coefficients in ascending degree
//! order: index 0 is the constant term. The size never changes at runtime;
//! operations that need more room produce a polynomial of a different type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use nestpoly_rings::{CastFrom, Ring, Zero};
use typenum::{NonZero, Unsigned, U2};

use crate::coeffs::CoeffList;
use crate::error::{PolyError, Result};
use crate::size::FitsIn;

/// A dense polynomial with `N` coefficients of type `T`.
///
/// `T` is either a scalar or another `Poly`, which makes the type a
/// polynomial in several variables: the outermost level is the first
/// variable, the next level the second, and so on.
///
/// ```
/// use nestpoly_poly::{poly, Poly};
/// use typenum::U3;
///
/// let p: Poly<i32, U3> = Poly::from_coeffs((1, 2));
/// assert_eq!(p, poly((1, 2, 0)));
/// assert_eq!(p.at(2), 5);
/// ```
pub struct Poly<T, N> {
    coeffs: Vec<T>,
    size: PhantomData<N>,
}

impl<T, N: Unsigned> Poly<T, N> {
    /// The number of coefficients.
    pub const SIZE: usize = N::USIZE;

    /// Wraps a vector that already has exactly `N` elements.
    pub(crate) fn from_vec_unchecked(coeffs: Vec<T>) -> Self {
        debug_assert_eq!(coeffs.len(), N::USIZE);
        Self {
            coeffs,
            size: PhantomData,
        }
    }

    /// Builds a polynomial whose coefficient of degree `i` is `f(i)`.
    #[must_use]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_vec_unchecked((0..N::USIZE).map(f).collect())
    }

    /// Returns the number of coefficients.
    #[must_use]
    pub fn size(&self) -> usize {
        N::USIZE
    }

    /// Returns all coefficients, constant term first.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns mutable access to the coefficients.
    ///
    /// The slice cannot change length, so the size invariant holds.
    pub fn coeffs_mut(&mut self) -> &mut [T] {
        &mut self.coeffs
    }

    /// Returns the coefficient of degree `i`, if it exists.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.coeffs.get(i)
    }

    /// Returns a mutable reference to the coefficient of degree `i`.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.coeffs.get_mut(i)
    }

    /// Iterates over the coefficients, constant term first.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Applies `f` to every coefficient, keeping the size.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Poly<U, N> {
        Poly::from_vec_unchecked(self.coeffs.into_iter().map(f).collect())
    }

    /// Converts into another polynomial type.
    ///
    /// Available whenever the target can hold every coefficient, see
    /// [`CastFrom`].
    #[must_use]
    pub fn cast<P: CastFrom<Self>>(self) -> P {
        P::cast_from(self)
    }
}

impl<T: Zero, N: Unsigned> Poly<T, N> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self::from_fn(|_| T::zero())
    }

    /// Creates a polynomial from a coefficient list, padding with zeros.
    ///
    /// The list is a tuple or an array. It may not be longer than `N`:
    ///
    /// ```compile_fail
    /// use nestpoly_poly::Poly;
    /// use typenum::U2;
    ///
    /// let p: Poly<i32, U2> = Poly::from_coeffs((1, 2, 3));
    /// ```
    ///
    /// Every element must convert into `T`, so narrowing is rejected:
    ///
    /// ```compile_fail
    /// use nestpoly_poly::{poly, Poly};
    /// use typenum::U2;
    ///
    /// let p: Poly<Poly<i32, U2>, U2> = Poly::from_coeffs((poly((1, 2, 3)), 4));
    /// ```
    #[must_use]
    pub fn from_coeffs<L>(list: L) -> Self
    where
        L: CoeffList<T>,
        L::Len: FitsIn<N>,
    {
        let mut coeffs = list.into_coeff_vec();
        coeffs.resize_with(N::USIZE, T::zero);
        Self::from_vec_unchecked(coeffs)
    }

    /// Creates the constant polynomial `value`.
    #[must_use]
    pub fn constant<S>(value: S) -> Self
    where
        T: CastFrom<S>,
        N: NonZero,
    {
        let mut p = Self::new();
        p.coeffs[0] = T::cast_from(value);
        p
    }

    /// Creates a polynomial from runtime data, padding with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::TooManyCoefficients`] if `coeffs` is longer
    /// than `N`.
    pub fn try_from_vec(mut coeffs: Vec<T>) -> Result<Self> {
        if coeffs.len() > N::USIZE {
            return Err(PolyError::TooManyCoefficients {
                len: coeffs.len(),
                size: N::USIZE,
            });
        }
        coeffs.resize_with(N::USIZE, T::zero);
        Ok(Self::from_vec_unchecked(coeffs))
    }

    /// Creates the monomial `c * x^degree`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DegreeOutOfRange`] if `degree >= N`.
    pub fn monomial(c: T, degree: usize) -> Result<Self> {
        if degree >= N::USIZE {
            return Err(PolyError::DegreeOutOfRange {
                degree,
                size: N::USIZE,
            });
        }
        let mut p = Self::new();
        p.coeffs[degree] = c;
        Ok(p)
    }

    /// Overwrites `self` with `other`, converting and zero-padding.
    ///
    /// `other` may not be larger than `self`:
    ///
    /// ```compile_fail
    /// use nestpoly_poly::{poly, Poly};
    /// use typenum::U2;
    ///
    /// let mut p: Poly<i32, U2> = Poly::new();
    /// p.assign(poly((1, 2, 3)));
    /// ```
    pub fn assign<U, M>(&mut self, other: Poly<U, M>)
    where
        T: CastFrom<U>,
        M: FitsIn<N>,
    {
        let mut coeffs: Vec<T> = other.coeffs.into_iter().map(T::cast_from).collect();
        coeffs.resize_with(N::USIZE, T::zero);
        self.coeffs = coeffs;
    }

    /// Overwrites `self` with a copy of `other`.
    pub fn assign_from<U, M>(&mut self, other: &Poly<U, M>)
    where
        T: CastFrom<U>,
        U: Clone,
        M: FitsIn<N>,
    {
        for (dst, src) in self.coeffs.iter_mut().zip(other.iter()) {
            *dst = T::cast_from(src.clone());
        }
        for dst in self.coeffs.iter_mut().skip(M::USIZE) {
            *dst = T::zero();
        }
    }
}

impl<T: Ring, N: Unsigned> Poly<T, N> {
    /// Creates the polynomial `x`.
    #[must_use]
    pub fn x() -> Self
    where
        U2: FitsIn<N>,
    {
        let mut p = Self::new();
        p.coeffs[1] = T::one();
        p
    }
}

impl<T: Zero, N: Unsigned> TryFrom<Vec<T>> for Poly<T, N> {
    type Error = PolyError;

    fn try_from(coeffs: Vec<T>) -> Result<Self> {
        Self::try_from_vec(coeffs)
    }
}

impl<T: Zero, N: Unsigned> Default for Poly<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Zero, N: Unsigned> Zero for Poly<T, N> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }
}

impl<T: Clone, N> Clone for Poly<T, N> {
    fn clone(&self) -> Self {
        Self {
            coeffs: self.coeffs.clone(),
            size: PhantomData,
        }
    }
}

impl<T: PartialEq, N> PartialEq for Poly<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Eq, N> Eq for Poly<T, N> {}

impl<T: Hash, N> Hash for Poly<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
    }
}

impl<T: fmt::Debug, N> fmt::Debug for Poly<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Poly")?;
        f.debug_list().entries(&self.coeffs).finish()
    }
}

impl<T, N> Index<usize> for Poly<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coeffs[i]
    }
}

impl<T, N> IndexMut<usize> for Poly<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coeffs[i]
    }
}

impl<T, N> IntoIterator for Poly<T, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.into_iter()
    }
}

impl<'a, T, N> IntoIterator for &'a Poly<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}
