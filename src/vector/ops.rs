//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    approx::ApproxEq,
    promote::{for_each_scalar, Promote, Promoted},
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            /// Element-wise operation, promoting mixed element types.
            impl<T, U, const N: usize> $trait<Vector<U, N>> for Vector<T, N>
            where
                T: Promote<U>,
            {
                type Output = Vector<Promoted<T, U>, N>;

                fn $method(self, rhs: Vector<U, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| {
                        <T as Promote<U>>::promote(l) $op <T as Promote<U>>::promote_rhs(r)
                    })
                }
            }

            /// Element-wise in-place operation.
            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// Scalar operations are implemented per primitive type: a blanket `Mul<U> for Vector<T, N>`
// would overlap with the element-wise impls above.
macro_rules! scalar_ops {
    ($s:ident) => {
        /// Vector-Scalar multiplication (scaling).
        impl<T, const N: usize> Mul<$s> for Vector<T, N>
        where
            T: Promote<$s>,
        {
            type Output = Vector<Promoted<T, $s>, N>;

            fn mul(self, rhs: $s) -> Self::Output {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                self.map(|elem| <T as Promote<$s>>::promote(elem) * rhs)
            }
        }

        /// Vector-Scalar division.
        impl<T, const N: usize> Div<$s> for Vector<T, N>
        where
            T: Promote<$s>,
        {
            type Output = Vector<Promoted<T, $s>, N>;

            fn div(self, rhs: $s) -> Self::Output {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                self.map(|elem| <T as Promote<$s>>::promote(elem) / rhs)
            }
        }

        /// Scalar-Vector multiplication (scaling).
        impl<T, const N: usize> Mul<Vector<T, N>> for $s
        where
            $s: Promote<T>,
        {
            type Output = Vector<Promoted<$s, T>, N>;

            fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                let lhs = <$s as Promote<T>>::promote(self);
                rhs.map(|elem| lhs * <$s as Promote<T>>::promote_rhs(elem))
            }
        }

        impl<const N: usize> MulAssign<$s> for Vector<$s, N> {
            fn mul_assign(&mut self, rhs: $s) {
                self.0.iter_mut().for_each(|lhs| *lhs *= rhs);
            }
        }

        impl<const N: usize> DivAssign<$s> for Vector<$s, N> {
            fn div_assign(&mut self, rhs: $s) {
                self.0.iter_mut().for_each(|lhs| *lhs /= rhs);
            }
        }
    };
}

for_each_scalar!(scalar_ops);
