//! Coefficient conversion and type promotion.
//!
//! Two type-level relations drive every mixed-type polynomial operation:
//!
//! - [`CastFrom`] is the convertibility predicate: `T: CastFrom<U>` holds
//!   exactly when a `U` may be used where a `T` is expected.
//! - [`CommonType`] names the type two operands combine into.
//!
//! Between primitive scalars the conversion follows `as` semantics and the
//! promotion follows the usual numeric rules:
//! - Floats always win over integers
//! - Wider types win over narrower types
//! - `isize` ranks alongside `i64` but yields to it

/// Conversion of one coefficient type into another.
///
/// Unlike [`From`], this trait has no reflexive blanket impl, which leaves
/// room for polynomial-to-polynomial conversions between different sizes.
pub trait CastFrom<S>: Sized {
    /// Converts `value` into `Self`.
    fn cast_from(value: S) -> Self;
}

/// The common type of `Self` and `Rhs`.
pub trait CommonType<Rhs> {
    /// The type both operands convert into.
    type Output;
}

/// Shorthand for the common type of `A` and `B`.
pub type Common<A, B> = <A as CommonType<B>>::Output;

macro_rules! impl_cast_from {
    ($($to:ty),* $(,)?) => {
        $(
            impl_cast_from!(@into $to; i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };
    (@into $to:ty; $($from:ty),*) => {
        $(
            #[allow(
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::unnecessary_cast
            )]
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    value as $to
                }
            }
        )*
    };
}

impl_cast_from!(i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! impl_common_self {
    ($($t:ty),* $(,)?) => {
        $(
            impl CommonType<$t> for $t {
                type Output = $t;
            }
        )*
    };
}

macro_rules! impl_common {
    ($($a:ty, $b:ty => $c:ty);* $(;)?) => {
        $(
            impl CommonType<$b> for $a {
                type Output = $c;
            }

            impl CommonType<$a> for $b {
                type Output = $c;
            }
        )*
    };
}

impl_common_self!(i8, i16, i32, i64, i128, isize, f32, f64);

impl_common! {
    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i8, i128 => i128;
    i8, isize => isize;
    i8, f32 => f32;
    i8, f64 => f64;
    i16, i32 => i32;
    i16, i64 => i64;
    i16, i128 => i128;
    i16, isize => isize;
    i16, f32 => f32;
    i16, f64 => f64;
    i32, i64 => i64;
    i32, i128 => i128;
    i32, isize => isize;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i128 => i128;
    i64, isize => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    i128, isize => i128;
    i128, f32 => f32;
    i128, f64 => f64;
    isize, f32 => f32;
    isize, f64 => f64;
    f32, f64 => f64;
}
