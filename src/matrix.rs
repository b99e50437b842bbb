use std::{array, fmt};

use crate::{Number, One, Vector, Zero};

mod ops;

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
/// Homogeneous 3D transform, as built by the [`space`](crate::space) functions.
pub type Mat4<T> = Matrix<T, 4, 4>;

pub type Mat2f = Mat2<f32>;
pub type Mat3f = Mat3<f32>;
pub type Mat4f = Mat4<f32>;

/// 2 rows, 3 columns: a 2D affine transform without its constant bottom row.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// 3 rows, 4 columns: a 3D affine transform without its constant bottom row.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A grid of `R` rows and `C` columns of numbers of type `T`.
///
/// Matrices carry transforms: they are built from rows, columns or by the functions in
/// [`space`](crate::space), composed by multiplication and applied to column vectors with
/// `matrix * vector`. There is deliberately no inverse or decomposition; to undo a transform,
/// build the inverse transform directly (see [`space::model_inverse`]).
///
/// Multiplying an `M`x`N` matrix with an `N`x`P` one yields an `M`x`P` matrix. Mismatched
/// inner dimensions don't compile.
///
/// # Addressing
///
/// Positions are written `(row, col)` and start at 0. [`Matrix::at`] and the `(usize, usize)`
/// [`Index`]/[`IndexMut`] impls panic outside the matrix, [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`None`].
///
/// ```
/// # use cg_space::*;
/// let mut scale_xy = Matrix::from_diagonal([2.0f32, 3.0, 1.0]);
/// scale_xy[(0, 2)] = -1.0;
/// assert_eq!(scale_xy.at(0, 2), -1.0);
/// assert_eq!(scale_xy * vec3(1.0f32, 1.0, 1.0), vec3(1.0, 3.0, 1.0));
/// assert!(scale_xy.get(3, 0).is_none());
/// ```
///
/// # Storage
///
/// Internally the matrix is an array of columns (column-major, unpadded), which is the
/// layout OpenGL uniforms use. The matrix is [`bytemuck::Pod`] and
/// [`Matrix::as_column_major_slice`] exposes the elements in that order; [`Matrix::from_rows`]
/// and [`Matrix::to_row_major`] convert from and to the written order.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`space::model_inverse`]: crate::space::model_inverse
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the main diagonal, zeroes elsewhere.
    ///
    /// As a transform it leaves every vector unchanged. Non-square matrices get ones on the
    /// diagonal as far as it reaches.
    pub const IDENTITY: Self = {
        let mut columns = [[T::ZERO; R]; C];
        let mut i = 0;
        while i < R && i < C {
            columns[i][i] = T::ONE;
            i += 1;
        }
        Self(columns)
    };
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its rows, in the order a matrix is written down.
    ///
    /// ```
    /// # use cg_space::*;
    /// #[rustfmt::skip]
    /// let shear = Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 1],
    /// ]);
    /// assert_eq!(shear * vec2(1, 1), vec2(3, 1));
    /// assert_eq!(shear, Matrix::from_columns([[1, 0], [2, 1]]));
    /// ```
    pub fn from_rows<V: Into<Vector<T, C>>>(rows: [V; R]) -> Self
    where
        T: Copy,
    {
        Matrix::<T, C, R>::from_columns(rows).transpose()
    }

    /// Builds a matrix from its columns, which is the storage order.
    pub fn from_columns<V: Into<Vector<T, R>>>(columns: [V; C]) -> Self {
        Self(columns.map(|column| column.into().into_array()))
    }

    /// Builds a matrix whose element at `(row, col)` is `f(row, col)`.
    ///
    /// ```
    /// # use cg_space::*;
    /// let checker: Mat3<u8> = Matrix::from_fn(|row, col| ((row + col) % 2) as u8);
    /// assert_eq!(checker.row(1), vec3(1, 0, 1));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    /// Transforms each element with `f`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Mirrors the matrix along its main diagonal, so rows become columns.
    ///
    /// ```
    /// # use cg_space::*;
    /// let wide = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
    /// let tall: Mat3x2<i32> = wide.transpose();
    /// assert_eq!(tall.row(2), vec2(3, 6));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self.0[row][col])
    }

    /// The element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= R` or `col >= C`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T
    where
        T: Copy,
    {
        self.0[col][row]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col)?.get(row)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col)?.get_mut(row)
    }

    /// Copies out row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        assert!(index < R, "row index {index} out of bounds for {R}x{C} matrix");
        Vector::from_fn(|col| self.0[col][index])
    }

    /// Copies out column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// All elements, column after column.
    ///
    /// ```
    /// # use cg_space::*;
    /// let mat = Mat2::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.as_column_major_slice(), &[1, 3, 2, 4]);
    /// ```
    pub fn as_column_major_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// All elements as an array of rows.
    pub fn to_row_major(&self) -> [[T; C]; R]
    where
        T: Copy,
    {
        self.transpose().0
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Builds a square matrix with `diagonal` on its main diagonal and zeroes elsewhere.
    ///
    /// With a vector of scale factors this is a scaling transform.
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diagonal: D) -> Self
    where
        T: Zero + Copy,
    {
        let diagonal = diagonal.into();
        Self::from_fn(|row, col| if row == col { diagonal[row] } else { T::ZERO })
    }

    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        self.diagonal().dot(Vector::ONE)
    }
}

impl<T: Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Prints one row of a matrix as a list.
struct DebugRow<'a, T, const R: usize, const C: usize> {
    matrix: &'a Matrix<T, R, C>,
    row: usize,
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for DebugRow<'_, T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (col, column) in self.matrix.0.iter().enumerate() {
            if col > 0 {
                f.write_str(", ")?;
            }
            fmt::Debug::fmt(&column[self.row], f)?;
        }
        f.write_str("]")
    }
}

/// Prints the rows in written order, regardless of the storage order. The alternate form
/// (`{:#?}`) puts each row on its own line.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..R).map(|row| DebugRow { matrix: self, row }))
            .finish()
    }
}
