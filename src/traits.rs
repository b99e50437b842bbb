//! Numeric traits the generic types are written against.

use std::ops;

use crate::promote::Promote;

/// Additive identity.
pub trait Zero {
    /// `0` in this type.
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    /// `1` in this type.
    const ONE: Self;
}

/// Element types of vectors and matrices: copyable, comparable, closed under `+ - * /`.
///
/// Implemented for every built-in integer and floating-point type. Unsigned integers are
/// included, so negation is a separate requirement (see [`Signed`]).
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// [`Number`]s that can be negated.
pub trait Signed: Number + ops::Neg<Output = Self> {}
impl<T> Signed for T where T: Number + ops::Neg<Output = Self> {}

/// Square root, needed for lengths.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Trigonometry on angles in radians.
pub trait Trig {
    /// Sine of `self`.
    fn sin(self) -> Self;
    /// Cosine of `self`.
    fn cos(self) -> Self;
    /// Tangent of `self`.
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Pairwise minimum and maximum.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`]. Built-in
/// integer types implement it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Floating-point scalars: everything rotations and projections need.
///
/// Arithmetic between two values of the same [`Real`] type promotes to that type, so generic
/// code can use the operators of vectors, matrices and quaternions without naming
/// [`Promoted`](crate::promote::Promoted) types.
pub trait Real:
    Signed + Sqrt + Trig + MinMax + ops::Rem<Output = Self> + Promote<Output = Self>
{
    /// Machine epsilon. Squared magnitudes at or below this are treated as zero.
    const EPSILON: Self;
    /// One full turn (τ radians).
    const FULL_TURN: Self;
    /// Multiply degrees by this to get radians.
    const DEG_TO_RAD: Self;
    /// Multiply radians by this to get degrees.
    const RAD_TO_DEG: Self;

    fn abs(self) -> Self;

    /// `1 / 2` in this type.
    #[inline]
    fn half() -> Self {
        Self::ONE / (Self::ONE + Self::ONE)
    }

    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0: f32, f64);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float {
    ($($float:ident),+) => {
        $(
            impl MinMax for $float {
                fn min(self, other: Self) -> Self {
                    $float::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    $float::max(self, other)
                }
            }

            impl Sqrt for $float {
                #[inline]
                fn sqrt(self) -> Self {
                    $float::sqrt(self)
                }
            }

            impl Trig for $float {
                #[inline]
                fn sin(self) -> Self {
                    $float::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    $float::cos(self)
                }

                #[inline]
                fn tan(self) -> Self {
                    $float::tan(self)
                }

                #[inline]
                fn asin(self) -> Self {
                    $float::asin(self)
                }

                #[inline]
                fn acos(self) -> Self {
                    $float::acos(self)
                }

                #[inline]
                fn atan2(self, other: Self) -> Self {
                    $float::atan2(self, other)
                }
            }

            impl Real for $float {
                const EPSILON: Self = $float::EPSILON;
                const FULL_TURN: Self = std::$float::consts::TAU;
                const DEG_TO_RAD: Self = std::$float::consts::PI / 180.0;
                const RAD_TO_DEG: Self = 180.0 / std::$float::consts::PI;

                #[inline]
                fn abs(self) -> Self {
                    $float::abs(self)
                }
            }
        )+
    };
}
float!(f32, f64);
