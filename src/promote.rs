//! Numeric promotion for mixed-type arithmetic.
//!
//! Arithmetic between a `Vector<i32, 3>` and a `Vector<f32, 3>` (or any other pair of element
//! types) produces elements of the *promoted* type, chosen so that no precision is lost compared
//! to performing the operation in the wider of the two operand types:
//!
//! 1. If both operands are floating-point, the wider float wins.
//! 2. If exactly one operand is floating-point, the result is that float.
//! 3. If both are integers of the same signedness, the wider integer wins.
//! 4. For mixed signedness, the signed type wins if it is strictly wider than the unsigned one;
//!    otherwise the result is the unsigned type of the wider width.
//!
//! `usize` and `isize` rank as 64-bit integers. Against `u64`/`i64` of the same signedness the
//! fixed-width type is chosen.
//!
//! Promotion of a type with itself is the identity, so same-type arithmetic is unaffected. The
//! rules are resolved entirely at compile time through the [`Promote`] trait; the conversions
//! themselves are plain `as` casts.
//!
//! ```
//! # use cg_space::*;
//! let a = vec3(1, 2, 3);
//! let b = vec3(0.5f32, 0.5, 0.5);
//! let c: Vec3<f32> = a + b;
//! assert_eq!(c, vec3(1.5, 2.5, 3.5));
//!
//! let d: Vec2<i64> = vec2(1u32, 2) * vec2(3i64, -4);
//! assert_eq!(d, vec2(3, -8));
//! ```

use crate::Number;

/// Computes the result type of an arithmetic operation between `Self` and `Rhs`.
///
/// See the [module documentation](self) for the rules.
pub trait Promote<Rhs = Self>: Copy {
    /// The promoted type.
    type Output: Number;

    /// Converts the left-hand operand to the promoted type.
    fn promote(self) -> Self::Output;

    /// Converts the right-hand operand to the promoted type.
    fn promote_rhs(rhs: Rhs) -> Self::Output;
}

/// The result type of arithmetic between `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! promote_table {
    ($($lhs:ident: [$($rhs:ident => $out:ident),+];)+) => {
        $($(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }
        )+)+
    };
}

#[rustfmt::skip]
promote_table! {
    u8:    [u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
            i8 => u8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    u16:   [u8 => u16, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
            i8 => u16, i16 => u16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    u32:   [u8 => u32, u16 => u32, u32 => u32, u64 => u64, u128 => u128, usize => usize,
            i8 => u32, i16 => u32, i32 => u32, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    u64:   [u8 => u64, u16 => u64, u32 => u64, u64 => u64, u128 => u128, usize => u64,
            i8 => u64, i16 => u64, i32 => u64, i64 => u64, i128 => i128, isize => u64,
            f32 => f32, f64 => f64];
    u128:  [u8 => u128, u16 => u128, u32 => u128, u64 => u128, u128 => u128, usize => u128,
            i8 => u128, i16 => u128, i32 => u128, i64 => u128, i128 => u128, isize => u128,
            f32 => f32, f64 => f64];
    usize: [u8 => usize, u16 => usize, u32 => usize, u64 => u64, u128 => u128, usize => usize,
            i8 => usize, i16 => usize, i32 => usize, i64 => usize, i128 => i128, isize => usize,
            f32 => f32, f64 => f64];
    i8:    [u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
            i8 => i8, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    i16:   [u8 => i16, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
            i8 => i16, i16 => i16, i32 => i32, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    i32:   [u8 => i32, u16 => i32, u32 => u32, u64 => u64, u128 => u128, usize => usize,
            i8 => i32, i16 => i32, i32 => i32, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    i64:   [u8 => i64, u16 => i64, u32 => i64, u64 => u64, u128 => u128, usize => usize,
            i8 => i64, i16 => i64, i32 => i64, i64 => i64, i128 => i128, isize => i64,
            f32 => f32, f64 => f64];
    i128:  [u8 => i128, u16 => i128, u32 => i128, u64 => i128, u128 => u128, usize => i128,
            i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, isize => i128,
            f32 => f32, f64 => f64];
    isize: [u8 => isize, u16 => isize, u32 => isize, u64 => u64, u128 => u128, usize => usize,
            i8 => isize, i16 => isize, i32 => isize, i64 => i64, i128 => i128, isize => isize,
            f32 => f32, f64 => f64];
    f32:   [u8 => f32, u16 => f32, u32 => f32, u64 => f32, u128 => f32, usize => f32,
            i8 => f32, i16 => f32, i32 => f32, i64 => f32, i128 => f32, isize => f32,
            f32 => f32, f64 => f64];
    f64:   [u8 => f64, u16 => f64, u32 => f64, u64 => f64, u128 => f64, usize => f64,
            i8 => f64, i16 => f64, i32 => f64, i64 => f64, i128 => f64, isize => f64,
            f32 => f64, f64 => f64];
}

/// Invokes `$m!(scalar)` for every scalar type with [`Promote`] impls.
///
/// Used to implement scalar operators on both sides of the compound types, which can't be done
/// with a single blanket impl without overlapping the element-wise ones.
macro_rules! for_each_scalar {
    ($m:ident) => {
        $m!(u8);
        $m!(u16);
        $m!(u32);
        $m!(u64);
        $m!(u128);
        $m!(usize);
        $m!(i8);
        $m!(i16);
        $m!(i32);
        $m!(i64);
        $m!(i128);
        $m!(isize);
        $m!(f32);
        $m!(f64);
    };
}
pub(crate) use for_each_scalar;

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn result_of<A: Promote<B>, B>() -> TypeId
    where
        Promoted<A, B>: 'static,
    {
        TypeId::of::<Promoted<A, B>>()
    }

    #[test]
    fn identity() {
        assert_eq!(result_of::<u8, u8>(), TypeId::of::<u8>());
        assert_eq!(result_of::<i32, i32>(), TypeId::of::<i32>());
        assert_eq!(result_of::<f32, f32>(), TypeId::of::<f32>());
    }

    #[test]
    fn floats_win() {
        assert_eq!(result_of::<i64, f32>(), TypeId::of::<f32>());
        assert_eq!(result_of::<f32, u8>(), TypeId::of::<f32>());
        assert_eq!(result_of::<f32, f64>(), TypeId::of::<f64>());
        assert_eq!(result_of::<f64, f32>(), TypeId::of::<f64>());
    }

    #[test]
    fn integer_widening() {
        assert_eq!(result_of::<u8, u32>(), TypeId::of::<u32>());
        assert_eq!(result_of::<i64, i16>(), TypeId::of::<i64>());
        // signed wins only when strictly wider
        assert_eq!(result_of::<u16, i32>(), TypeId::of::<i32>());
        assert_eq!(result_of::<i32, u32>(), TypeId::of::<u32>());
        assert_eq!(result_of::<u64, i8>(), TypeId::of::<u64>());
    }

    #[test]
    fn wide_and_pointer_sized() {
        assert_eq!(result_of::<usize, usize>(), TypeId::of::<usize>());
        assert_eq!(result_of::<u128, u128>(), TypeId::of::<u128>());
        assert_eq!(result_of::<usize, u32>(), TypeId::of::<usize>());
        assert_eq!(result_of::<usize, u64>(), TypeId::of::<u64>());
        assert_eq!(result_of::<isize, usize>(), TypeId::of::<usize>());
        assert_eq!(result_of::<i128, u64>(), TypeId::of::<i128>());
        assert_eq!(result_of::<i128, u128>(), TypeId::of::<u128>());
        assert_eq!(result_of::<u128, f32>(), TypeId::of::<f32>());
    }

    #[test]
    fn symmetric() {
        assert_eq!(result_of::<u16, i8>(), result_of::<i8, u16>());
        assert_eq!(result_of::<i16, u8>(), result_of::<u8, i16>());
        assert_eq!(result_of::<f32, i64>(), result_of::<i64, f32>());
        assert_eq!(result_of::<isize, u64>(), result_of::<u64, isize>());
    }

    #[test]
    fn conversion() {
        assert_eq!(<i32 as Promote<f64>>::promote(-3), -3.0);
        assert_eq!(<i32 as Promote<f64>>::promote_rhs(0.25), 0.25);
        assert_eq!(<u8 as Promote<i16>>::promote_rhs(-7), -7i16);
    }
}
