//! Coefficient lists and the `poly` factory.
//!
//! Polynomials are built from tuples, whose elements may have different
//! types, or from arrays. Either way the length is known to the type system,
//! so a list that is too long for its target fails to compile.

use nestpoly_rings::{CastFrom, Common, CommonType};
use typenum::{
    Const, ToUInt, Unsigned, U, U0, U1, U10, U11, U12, U2, U3, U4, U5, U6, U7, U8, U9,
};

use crate::dense::Poly;

/// A list of values that all convert into `T`.
pub trait CoeffList<T> {
    /// Length of the list as a type-level integer.
    type Len: Unsigned;

    /// Converts every element, preserving order.
    fn into_coeff_vec(self) -> Vec<T>;
}

/// A list whose elements share a common type.
///
/// The common type of a tuple is folded from the right:
/// `(a, b, c)` has type `Common<A, Common<B, C>>`.
pub trait Coefficients {
    /// The coefficient type every element converts into.
    type Common;
    /// Length of the list as a type-level integer.
    type Len: Unsigned;

    /// Converts every element into the common type, preserving order.
    fn into_common_vec(self) -> Vec<Self::Common>;
}

impl<T> CoeffList<T> for () {
    type Len = U0;

    fn into_coeff_vec(self) -> Vec<T> {
        Vec::new()
    }
}

impl<T, A, const K: usize> CoeffList<T> for [A; K]
where
    T: CastFrom<A>,
    Const<K>: ToUInt,
    U<K>: Unsigned,
{
    type Len = U<K>;

    fn into_coeff_vec(self) -> Vec<T> {
        self.into_iter().map(T::cast_from).collect()
    }
}

impl<A, const K: usize> Coefficients for [A; K]
where
    Const<K>: ToUInt,
    U<K>: Unsigned,
{
    type Common = A;
    type Len = U<K>;

    fn into_common_vec(self) -> Vec<A> {
        self.into()
    }
}

macro_rules! impl_coeff_list {
    ($len:ty; $($name:ident),+) => {
        impl<T, $($name),+> CoeffList<T> for ($($name,)+)
        where
            $(T: CastFrom<$name>,)+
        {
            type Len = $len;

            #[allow(non_snake_case)]
            fn into_coeff_vec(self) -> Vec<T> {
                let ($($name,)+) = self;
                vec![$(T::cast_from($name)),+]
            }
        }
    };
}

impl_coeff_list!(U1; A);
impl_coeff_list!(U2; A, B);
impl_coeff_list!(U3; A, B, C);
impl_coeff_list!(U4; A, B, C, D);
impl_coeff_list!(U5; A, B, C, D, E);
impl_coeff_list!(U6; A, B, C, D, E, F);
impl_coeff_list!(U7; A, B, C, D, E, F, G);
impl_coeff_list!(U8; A, B, C, D, E, F, G, H);
impl_coeff_list!(U9; A, B, C, D, E, F, G, H, I);
impl_coeff_list!(U10; A, B, C, D, E, F, G, H, I, J);
impl_coeff_list!(U11; A, B, C, D, E, F, G, H, I, J, K);
impl_coeff_list!(U12; A, B, C, D, E, F, G, H, I, J, K, L);

impl<A> Coefficients for (A,) {
    type Common = A;
    type Len = U1;

    fn into_common_vec(self) -> Vec<A> {
        vec![self.0]
    }
}

// (A, rest...) folds A into the common type of the tail.
macro_rules! impl_coefficients {
    ($len:ty; $head:ident, $($rest:ident),+) => {
        impl<$head, $($rest),+> Coefficients for ($head, $($rest,)+)
        where
            ($($rest,)+): Coefficients,
            $head: CommonType<<($($rest,)+) as Coefficients>::Common>,
            Common<$head, <($($rest,)+) as Coefficients>::Common>:
                CastFrom<$head> + CastFrom<<($($rest,)+) as Coefficients>::Common>,
        {
            type Common = Common<$head, <($($rest,)+) as Coefficients>::Common>;
            type Len = $len;

            #[allow(non_snake_case)]
            fn into_common_vec(self) -> Vec<Self::Common> {
                let ($head, $($rest,)+) = self;
                let tail = ($($rest,)+).into_common_vec();
                let mut out = Vec::with_capacity(tail.len() + 1);
                out.push(<Self::Common as CastFrom<$head>>::cast_from($head));
                out.extend(
                    tail.into_iter()
                        .map(<Self::Common as CastFrom<<($($rest,)+) as Coefficients>::Common>>::cast_from),
                );
                out
            }
        }
    };
}

impl_coefficients!(U2; A, B);
impl_coefficients!(U3; A, B, C);
impl_coefficients!(U4; A, B, C, D);
impl_coefficients!(U5; A, B, C, D, E);
impl_coefficients!(U6; A, B, C, D, E, F);
impl_coefficients!(U7; A, B, C, D, E, F, G);
impl_coefficients!(U8; A, B, C, D, E, F, G, H);
impl_coefficients!(U9; A, B, C, D, E, F, G, H, I);
impl_coefficients!(U10; A, B, C, D, E, F, G, H, I, J);
impl_coefficients!(U11; A, B, C, D, E, F, G, H, I, J, K);
impl_coefficients!(U12; A, B, C, D, E, F, G, H, I, J, K, L);

/// Builds a polynomial whose type is deduced from its coefficients.
///
/// The size is the length of the list and the coefficient type is the
/// common type of the elements:
///
/// ```
/// use nestpoly_poly::{poly, Poly};
/// use typenum::{U2, U3};
///
/// let p: Poly<f64, U3> = poly((1, 2.5, 3i64));
/// let q: Poly<Poly<i32, U2>, U2> = poly((poly((1, 2)), 3));
/// assert_eq!(q[1], poly((3, 0)));
/// ```
#[must_use]
pub fn poly<L: Coefficients>(list: L) -> Poly<L::Common, L::Len> {
    Poly::from_vec_unchecked(list.into_common_vec())
}
