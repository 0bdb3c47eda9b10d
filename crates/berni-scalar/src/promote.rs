//! Numeric type widening.
//!
//! When two element types meet, both sides are converted into the common
//! type named by `Promote::Output`. Floats absorb exact rationals; the wider
//! float absorbs the narrower one.

use berni_numbers::Rational;

use crate::convert::ConvertFrom;
use crate::traits::Scalar;

/// Selects the common element type of `Self` and `Rhs`.
///
/// The table is symmetric: `<S as Promote<T>>::Output` and
/// `<T as Promote<S>>::Output` are the same type.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// The widened element type.
    type Output: Scalar + ConvertFrom<Self> + ConvertFrom<Rhs>;
}

/// Shorthand for the widened type of `S` and `T`.
pub type Promoted<S, T> = <S as Promote<T>>::Output;

macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )*
    };
}

promote! {
    f32, f32 => f32;
    f64, f64 => f64;
    f32, f64 => f64;
    f64, f32 => f64;
    Rational, Rational => Rational;
    Rational, f64 => f64;
    f64, Rational => f64;
    Rational, f32 => f32;
    f32, Rational => f32;
}
