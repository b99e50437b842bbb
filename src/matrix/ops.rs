use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::{
    approx::ApproxEq,
    promote::{for_each_scalar, Promote, Promoted},
    Matrix, Vector, Zero,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.as_column_major_slice()
            .abs_diff_eq(other.as_column_major_slice(), tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.as_column_major_slice()
            .rel_diff_eq(other.as_column_major_slice(), tolerance)
    }
}

/// Matrix * Column Vector.
impl<T, U, const R: usize, const C: usize> Mul<Vector<U, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Copy,
{
    type Output = Vector<Promoted<T, U>, R>;

    fn mul(self, rhs: Vector<U, C>) -> Self::Output {
        Vector::from_fn(|row| {
            (0..C).fold(<Promoted<T, U> as Zero>::ZERO, |acc, col| {
                acc + <T as Promote<U>>::promote(self[(row, col)])
                    * <T as Promote<U>>::promote_rhs(rhs[col])
            })
        })
    }
}

/// Matrix * Matrix.
///
/// The inner dimensions have to match; this is checked by the type system.
impl<T, U, const M: usize, const N: usize, const P: usize> Mul<Matrix<U, N, P>>
    for Matrix<T, M, N>
where
    T: Promote<U>,
    U: Copy,
{
    type Output = Matrix<Promoted<T, U>, M, P>;

    fn mul(self, rhs: Matrix<U, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| {
            (0..N).fold(<Promoted<T, U> as Zero>::ZERO, |acc, k| {
                acc + <T as Promote<U>>::promote(self[(i, k)])
                    * <T as Promote<U>>::promote_rhs(rhs[(k, j)])
            })
        })
    }
}

impl<T, U, const R: usize, const C: usize> Add<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Copy,
{
    type Output = Matrix<Promoted<T, U>, R, C>;

    fn add(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::from_fn(|row, col| {
            <T as Promote<U>>::promote(self[(row, col)])
                + <T as Promote<U>>::promote_rhs(rhs[(row, col)])
        })
    }
}

impl<T, U, const R: usize, const C: usize> Sub<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Copy,
{
    type Output = Matrix<Promoted<T, U>, R, C>;

    fn sub(self, rhs: Matrix<U, R, C>) -> Self::Output {
        Matrix::from_fn(|row, col| {
            <T as Promote<U>>::promote(self[(row, col)])
                - <T as Promote<U>>::promote_rhs(rhs[(row, col)])
        })
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! scalar_ops {
    ($s:ident) => {
        /// Matrix * Scalar.
        impl<T, const R: usize, const C: usize> Mul<$s> for Matrix<T, R, C>
        where
            T: Promote<$s>,
        {
            type Output = Matrix<Promoted<T, $s>, R, C>;

            fn mul(self, rhs: $s) -> Self::Output {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                self.map(|elem| <T as Promote<$s>>::promote(elem) * rhs)
            }
        }

        /// Matrix / Scalar.
        impl<T, const R: usize, const C: usize> Div<$s> for Matrix<T, R, C>
        where
            T: Promote<$s>,
        {
            type Output = Matrix<Promoted<T, $s>, R, C>;

            fn div(self, rhs: $s) -> Self::Output {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                self.map(|elem| <T as Promote<$s>>::promote(elem) / rhs)
            }
        }

        /// Scalar * Matrix.
        impl<T, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for $s
        where
            $s: Promote<T>,
        {
            type Output = Matrix<Promoted<$s, T>, R, C>;

            fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
                let lhs = <$s as Promote<T>>::promote(self);
                rhs.map(|elem| lhs * <$s as Promote<T>>::promote_rhs(elem))
            }
        }
    };
}

for_each_scalar!(scalar_ops);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Mat2, Mat2f, Mat3, Mat4f, Matrix, Vec3};

    #[test]
    fn mat_vec_mul() {
        let mat = Matrix::from_rows([[0i32, 1], [2, 3]]);
        let vec = vec2(4i32, 5);
        let out = mat * vec;
        assert_eq!(out, [4 * 0 + 5 * 1, 4 * 2 + 5 * 3]);
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Matrix::from_rows([
            [1i32, 2],
            [3, 4],
            [5, 6],
            [7, 8],
        ]);
        #[rustfmt::skip]
        let b = Matrix::from_rows([
            [9i32, 10, 11],
            [12, 13, 14],
        ]);
        let c = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
        assert_eq!(c[(3, 0)], 7 * 9 + 8 * 12);
    }

    #[test]
    fn identity() {
        #[rustfmt::skip]
        let m = Mat4f::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m * Mat4f::IDENTITY, m);
        assert_eq!(Mat4f::IDENTITY * m, m);
        assert_eq!(Mat3::<i32>::IDENTITY * vec3(7i32, -8, 9), vec3(7, -8, 9));
    }

    #[test]
    fn transpose_of_product() {
        let a = Mat2::from_rows([[1i32, 2], [3, 4]]);
        let b = Mat2::from_rows([[-1i32, 0], [5, 2]]);
        assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn mixed_types() {
        let ints = Mat2::from_rows([[1i32, 2], [3, 4]]);
        let floats = Mat2f::from_rows([[0.5, 0.0], [0.0, 0.5]]);
        let scaled: Mat2<f32> = ints * floats;
        assert_eq!(scaled, Mat2f::from_rows([[0.5, 1.0], [1.5, 2.0]]));

        let v: Vec3<f64> = Mat3::<i32>::IDENTITY * vec3(0.25f64, 0.5, 1.0);
        assert_eq!(v, vec3(0.25, 0.5, 1.0));
    }

    #[test]
    fn elementwise() {
        let a = Mat2f::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(a + a, a * 2.0f32);
        assert_eq!(2.0f32 * a, a * 2.0f32);
        assert_eq!(a - a, Mat2f::ZERO);
        assert_eq!(-a, a * -1.0f32);
        assert_approx_eq!(a / 4.0f32, Mat2f::from_rows([[0.25, 0.5], [0.75, 1.0]]));
    }
}
