//! Approximate equality.
//!
//! Components of vectors, matrices and quaternions are almost always floating-point numbers, so
//! they are compared within a tolerance rather than bit-for-bit.

mod impls;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their elements are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons.
    ///
    /// This is [`f32`] or [`f64`], depending on the underlying primitive type being compared.
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to `tolerance`,
    /// the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two values times `tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    /// Compares with the default tolerances: equal if either the absolute or the relative
    /// comparison considers the values equal.
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, Self::Tolerance::DEFAULT_ABS_TOLERANCE)
            || self.rel_diff_eq(other, Self::Tolerance::DEFAULT_REL_TOLERANCE)
    }
}

/// Default tolerances used by [`ApproxEq::approx_eq`] and the assertion macros.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-6;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON * 4.0;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = 1e-12;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON * 4.0;
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Comparison<T> {
    Default,
    Abs(T),
    Rel(T),
}

#[doc(hidden)]
#[track_caller]
pub fn check<T>(
    left: &T,
    right: &T,
    comparison: Comparison<T::Tolerance>,
    expect_equal: bool,
    msg: Option<std::fmt::Arguments<'_>>,
) where
    T: ApproxEq + std::fmt::Debug,
{
    let equal = match comparison {
        Comparison::Default => left.approx_eq(right),
        Comparison::Abs(tol) => left.abs_diff_eq(right, tol),
        Comparison::Rel(tol) => left.rel_diff_eq(right, tol),
    };
    if equal == expect_equal {
        return;
    }

    let op = if expect_equal { "==" } else { "!=" };
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed (approximately): {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed (approximately)\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Without a tolerance argument, [`ApproxEq::approx_eq`] is used. `abs = <tol>` or
/// `rel = <tol>` select an absolute or relative comparison instead. An optional format message
/// may follow, like with [`assert_eq!`].
///
/// # Examples
///
/// ```
/// # use cg_space::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0, abs = 1.0);
/// assert_approx_eq!(100.0, 99.0, rel = 0.01, "{} and {} are close enough", 100, 99);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr, abs = $tol:expr $(, $($arg:tt)+)?) => {
        $crate::approx::check(&$lhs, &$rhs, $crate::approx::Comparison::Abs($tol), true, $crate::__approx_msg!($($($arg)+)?))
    };
    ($lhs:expr, $rhs:expr, rel = $tol:expr $(, $($arg:tt)+)?) => {
        $crate::approx::check(&$lhs, &$rhs, $crate::approx::Comparison::Rel($tol), true, $crate::__approx_msg!($($($arg)+)?))
    };
    ($lhs:expr, $rhs:expr $(, $($arg:tt)+)?) => {
        $crate::approx::check(&$lhs, &$rhs, $crate::approx::Comparison::Default, true, $crate::__approx_msg!($($($arg)+)?))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other.
///
/// Accepts the same arguments as [`assert_approx_eq!`].
///
/// ```
/// # use cg_space::*;
/// assert_approx_ne!(100.0, 99.0, abs = 0.5);
/// assert_approx_ne!(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr, abs = $tol:expr $(, $($arg:tt)+)?) => {
        $crate::approx::check(&$lhs, &$rhs, $crate::approx::Comparison::Abs($tol), false, $crate::__approx_msg!($($($arg)+)?))
    };
    ($lhs:expr, $rhs:expr, rel = $tol:expr $(, $($arg:tt)+)?) => {
        $crate::approx::check(&$lhs, &$rhs, $crate::approx::Comparison::Rel($tol), false, $crate::__approx_msg!($($($arg)+)?))
    };
    ($lhs:expr, $rhs:expr $(, $($arg:tt)+)?) => {
        $crate::approx::check(&$lhs, &$rhs, $crate::approx::Comparison::Default, false, $crate::__approx_msg!($($($arg)+)?))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_msg {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::core::format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message 7")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, abs = 0.5, "my message {}", 7);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001, rel = 0.01);
        assert_approx_eq!(1.0, -1.0, rel = 2.0);
        assert_approx_eq!(0.0, 0.00001, rel = 1.0);
        assert_approx_ne!(1.0, 1.1, rel = 0.01);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0f64, 1.0 + f64::EPSILON);
        assert!(1.0f32.approx_eq(&(1.0 + f32::EPSILON)));
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0, abs = 1.0);
        assert_approx_eq!(1.0, -1.0, abs = 2.0);
        assert_approx_eq!(-1.0, -1.0, abs = 0.0);
        assert_approx_eq!(-1.0, -1.0, rel = 0.0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f32::NAN, f32::NAN, abs = 1.0);
        assert_approx_ne!(f32::NAN, f32::NAN, rel = 1.0);
        assert_approx_ne!(f32::NAN, 0.0, abs = 1.0);
        assert_approx_ne!(f64::NAN, 0.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY, abs = 0.0);
        assert_approx_eq!(f32::INFINITY, f32::INFINITY, rel = 0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY, abs = 1.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX, abs = 10000.0);
        assert_approx_ne!(f64::MAX, f64::INFINITY, rel = 10000.0);
    }
}
