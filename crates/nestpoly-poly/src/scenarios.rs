//! End-to-end scenarios across construction, arithmetic and evaluation.

use std::any::TypeId;
use std::cell::Cell;
use std::ops::{Add, Mul, Neg, Sub};

use nestpoly_rings::{CastFrom, Common, CommonType, Zero};
use typenum::{U0, U1, U10, U2, U3, U4};

use crate::dense::Poly;
use crate::lift::{const_poly, cross};
use crate::poly;

fn type_of<T: 'static>(_: &T) -> TypeId {
    TypeId::of::<T>()
}

fn square<P>(p: P) -> <P as Mul<P>>::Output
where
    P: Clone + Mul<P>,
{
    p.clone() * p
}

fn cube<P>(p: P) -> <P as Mul<<P as Mul<P>>::Output>>::Output
where
    P: Clone + Mul<P> + Mul<<P as Mul<P>>::Output>,
{
    p.clone() * square(p)
}

fn cast_like<R: CastFrom<P>, P>(_shape: &R, p: P) -> R {
    R::cast_from(p)
}

#[test]
fn test_three_variable_identities() {
    let x = poly((0, 1));
    let y = const_poly(x.clone());
    let z = const_poly(y.clone());

    let lhs = square(x.clone() + y.clone() + z.clone());
    let rhs = square(z.clone())
        + square(y.clone())
        + square(x.clone())
        + 2 * (z.clone() * y.clone() + y.clone() * x.clone() + x.clone() * z.clone());
    assert_eq!(lhs, rhs);

    let lhs = cube(-x.clone() + y.clone() + z.clone())
        + cube(x.clone() - y.clone() + z.clone())
        + cube(x.clone() + y.clone() - z.clone());
    let rhs = cube(x.clone() + y.clone() + z.clone()) - 24 * x * y * z;
    assert_eq!(lhs, rhs);
}

#[test]
fn test_sum_of_cubes_through_evaluation() {
    let x = poly((0, 1));
    let y = const_poly(x.clone());
    let z = const_poly(y.clone());
    let c = cube(x.clone());

    let lhs = cube(x.clone() + y.clone() + z.clone())
        + c.at(x.clone())
        + c.at(y.clone())
        + c.at(z.clone());
    let rhs = c.at(x.clone() + y.clone())
        + c.at(y.clone() + z.clone())
        + c.at(z.clone() + x.clone())
        + 6 * x * y * z;
    assert_eq!(lhs, rhs);
}

#[test]
fn test_evaluation_at_mixed_points() {
    let a = poly((-2.0, 1, -2, 1));
    assert_eq!(a.at(1.5), -1.625);
    assert_eq!(a.at(1.3), a.eval([1.3]));

    let b = poly((poly((-1.0, 2.0)), poly((-3.5, 4.5, 1.0)), poly((0, 0, 0, 1.0))));
    assert_eq!(b.at(-2), poly((6.0, -7, -2, 4)));
    assert_eq!(b.eval((0.5, -2)), -11.25);
    assert_eq!(b.at(7), b.eval([7]));
    assert_eq!(b.eval((5, -3)), b.eval([5, -3]));
    assert_eq!(b.eval(()), b);
    assert_eq!(b.eval((0.5, -2, 3)), b.eval((0.5, -2)));

    assert_eq!(b.at(poly((1,))), poly((-4.5, 6.5, 1, 1)));
    assert_eq!(a.at(poly((0, 1))), a);

    let composed = b.at(poly((1, 0, 0, 1)));
    assert_eq!(type_of(&composed), TypeId::of::<Poly<f64, U10>>());
    assert_eq!(
        composed,
        poly((-4.5, 6.5, 1, -2.5, 4.5, 1, 2, 0, 0, 1))
    );
}

#[test]
fn test_self_substitution() {
    let x = poly((0, 1));
    let y = const_poly(x.clone());
    let z = const_poly(y.clone());
    let s = cube(x + y + z);

    // s(s, -s, s) = (s - s + s)^3
    let r = s.eval((s.clone(), -s.clone(), s.clone()));
    let expected = cast_like(&r, cube(s));
    assert_eq!(r, expected);
}

#[test]
fn test_cross_of_variables() {
    let x = poly((0, 1));
    let y = const_poly(x.clone());
    let z = const_poly(y.clone());
    let w = const_poly(z.clone());

    assert_eq!(cross(x.clone(), y.clone()), x.clone() * z.clone());
    assert_eq!(cross(y.clone(), x.clone()), y.clone() * z);
    assert_eq!(cross(y.clone(), y.clone()), y * w);
}

#[test]
fn test_common_types_across_depths() {
    fn common_of<A: CommonType<B>, B>() -> TypeId
    where
        Common<A, B>: 'static,
    {
        TypeId::of::<Common<A, B>>()
    }

    assert_eq!(
        common_of::<f64, Poly<Poly<i32, U2>, U4>>(),
        TypeId::of::<Poly<Poly<f64, U2>, U4>>()
    );
    assert_eq!(
        common_of::<Poly<f64, U1>, Poly<Poly<Poly<Poly<i32, U2>, U1>, U1>, U1>>(),
        TypeId::of::<Poly<Poly<Poly<Poly<f64, U2>, U1>, U1>, U1>>()
    );
    assert_eq!(
        common_of::<Poly<i32, U2>, Poly<Poly<Poly<Poly<f64, U1>, U2>, U1>, U1>>(),
        TypeId::of::<Poly<Poly<Poly<Poly<f64, U1>, U2>, U1>, U2>>()
    );

    let sum = poly((poly((2.0,)), poly((3.0, 4.0)))) + poly((1, 2, 3));
    assert_eq!(type_of(&sum), TypeId::of::<Poly<Poly<f64, U2>, U3>>());
    assert_eq!(sum, poly((poly((3.0, 0.0)), poly((5.0, 4.0)), poly((3.0, 0.0)))));

    let lifted = const_poly(poly((1.0, 2.0))) + poly((5, 10));
    assert_eq!(type_of(&lifted), TypeId::of::<Poly<Poly<f64, U2>, U2>>());

    let deep = const_poly(const_poly(const_poly(poly((1,))))) + poly((1, 4));
    assert_eq!(
        deep,
        poly((
            const_poly(const_poly(poly((2,)))),
            const_poly(const_poly(poly((4,))))
        ))
    );
}

#[test]
fn test_empty_levels() {
    let zero: Poly<i32, U0> = Poly::new();
    assert_eq!(zero.size(), 0);

    let zero_3: Poly<Poly<Poly<i32, U1>, U0>, U1> = Poly::new();
    assert_eq!(zero_3[0].size(), 0);

    let p = zero_3.clone() * const_poly(poly((3, poly((2, 1)))));
    assert_eq!(p.size(), 1);
    assert_eq!(p[0].size(), 0);

    let a = poly((3.0, -1.0, 2.0));
    let b = const_poly(poly((a.clone(), 1, -a.clone())));
    assert_eq!(zero.clone() + a.clone(), a);
    assert_eq!(zero_3.clone() - b.clone(), -b);

    assert_eq!(zero.at(0), 0);
    assert_eq!(zero_3.eval((0, 0, 0)), 0);
}

#[test]
fn test_nested_sizes_and_narrowing_cast() {
    let a: Poly<i32, U3> = Poly::new();
    let b: Poly<i32, U3> = Poly::from_coeffs((1,));
    let c: Poly<i32, U3> = Poly::from_coeffs((1, 2));
    let d: Poly<i32, U3> = Poly::from_coeffs((1, 2, 3));
    let u = poly((a, b, c.clone(), d));
    let v = poly((c, u));
    assert_eq!(v.size(), 2);
    assert_eq!(v[0].size(), 4);
    assert_eq!(v[0][0].size(), 3);

    // Coefficient conversion follows `as`
    let zc = poly((poly((3.25, 2.75)), -1.1));
    let narrowed: Poly<Poly<i32, U3>, U3> = zc.cast();
    assert_eq!(
        narrowed,
        poly((poly((3, 2, 0)), poly((-1, 0, 0)), poly((0, 0, 0))))
    );
}

/// A coefficient type that only supports the ring operations it is given.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Simple<T>(T);

impl<T: Zero> Zero for Simple<T> {
    fn zero() -> Self {
        Simple(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T: Add<Output = T>> Add for Simple<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Simple(self.0 + rhs.0)
    }
}

impl<T: Sub<Output = T>> Sub for Simple<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Simple(self.0 - rhs.0)
    }
}

impl<T: Neg<Output = T>> Neg for Simple<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Simple(-self.0)
    }
}

impl<T: CastFrom<U>, U> CastFrom<Simple<U>> for Simple<T> {
    fn cast_from(value: Simple<U>) -> Self {
        Simple(T::cast_from(value.0))
    }
}

impl<T: CastFrom<f64>> CastFrom<f64> for Simple<T> {
    fn cast_from(value: f64) -> Self {
        Simple(T::cast_from(value))
    }
}

impl<T: CommonType<U>, U> CommonType<Simple<U>> for Simple<T> {
    type Output = Simple<Common<T, U>>;
}

impl<T: CommonType<f64>> CommonType<f64> for Simple<T> {
    type Output = Simple<Common<T, f64>>;
}

impl<T> CommonType<Simple<T>> for f64
where
    f64: CommonType<T>,
{
    type Output = Simple<Common<f64, T>>;
}

#[test]
fn test_user_coefficient_wrapper() {
    assert_eq!(
        poly((Simple(2),)) + poly((Simple(3),)),
        poly((Simple(5),))
    );

    let mut p = poly((Simple(2.0),));
    p += poly((Simple(3),));
    assert_eq!(p, poly((Simple(5.0),)));

    let mut q = poly((Simple(2),));
    q += poly((Simple(3.0),));
    assert_eq!(q, poly((Simple(5),)));

    let mut r = poly((Simple(Simple(2)),));
    r += poly((Simple(Simple(3.0)),));
    assert_eq!(r, poly((Simple(Simple(5)),)));

    assert_eq!(poly((Simple(5), 1.1)), poly((Simple(5.0), Simple(1.1))));
    assert_eq!(poly((1.1, Simple(5))), poly((Simple(1.1), Simple(5.0))));
    assert_eq!(
        poly((1.1, Simple(5), 1.1)),
        poly((Simple(1.1), Simple(5.0), Simple(1.1)))
    );
}

thread_local! {
    static CLONES: Cell<usize> = const { Cell::new(0) };
}

/// Counts how often coefficients are cloned.
#[derive(Debug, PartialEq)]
struct Counted(i64);

impl Clone for Counted {
    fn clone(&self) -> Self {
        CLONES.with(|c| c.set(c.get() + 1));
        Counted(self.0)
    }
}

impl Zero for Counted {
    fn zero() -> Self {
        Counted(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Counted {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Counted(self.0 + rhs.0)
    }
}

impl CastFrom<Counted> for Counted {
    fn cast_from(value: Counted) -> Self {
        value
    }
}

impl CommonType<Counted> for Counted {
    type Output = Counted;
}

fn clones() -> usize {
    CLONES.with(Cell::get)
}

#[test]
fn test_by_value_operations_do_not_clone() {
    let before = clones();

    let p = poly((Counted(1), Counted(2), Counted(3)));
    let mut q: Poly<Counted, U4> = Poly::from_coeffs((Counted(4),));
    q += p;
    q.assign(poly((Counted(7), Counted(8))));
    let sum = q + poly((Counted(1),));
    assert_eq!(clones(), before);
    assert_eq!(sum.coeffs()[..2], [Counted(8), Counted(8)]);

    let copy = sum.clone();
    assert_eq!(clones(), before + 4);
    assert_eq!(copy, sum);
}
