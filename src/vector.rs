use std::{array, fmt};

use crate::{MinMax, Number, One, Real, Sqrt, Zero};

mod ops;
mod view;

pub use view::{RGB, RGBA, X, XY, XYZ, XYZW};

/// Vector with 1 element.
pub type Vec1<T> = Vector<T, 1>;
/// Vector with 2 elements, eg. a texture coordinate.
pub type Vec2<T> = Vector<T, 2>;
/// Vector with 3 elements, eg. a position or a scale factor.
pub type Vec3<T> = Vector<T, 3>;
/// Vector with 4 elements, eg. a homogeneous coordinate or an RGBA color.
pub type Vec4<T> = Vector<T, 4>;

pub type Vec2f = Vec2<f32>;
pub type Vec3f = Vec3<f32>;
pub type Vec4f = Vec4<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3d = Vec3<f64>;
pub type Vec4d = Vec4<f64>;

/// A fixed-size vector of `N` numbers of type `T`.
///
/// The same type is used for points, directions, scale factors and colors.
///
/// # Creating vectors
///
/// Use the [`vec1`] to [`vec4`] functions to list the elements directly, [`Vector::splat`] to
/// repeat a single value, [`Vector::from_fn`] to compute each element from its index, or
/// convert an array with [`From`]. [`Vector::ZERO`], [`Vector::ONE`] and the per-dimension
/// axis constants (`X`, `Y`, `Z`, `W`) cover the common cases; 3D vectors also name their axes
/// [`RIGHT`], [`UP`] and [`FORWARD`].
///
/// # Reading elements
///
/// Elements are reachable by index (`v[1]`, panicking when out of range), by name (`v.x`,
/// `v.y`, `v.z`, `v.w`), and by color channel (`v.r`, `v.g`, `v.b`, `v.a`) on 3D and 4D
/// vectors. The memory layout is exactly `[T; N]`, which is why [`bytemuck::Pod`] is
/// implemented: vertex data and uniforms can be uploaded without conversion.
///
/// # Operators
///
/// Vector-vector `+`, `-`, `*` and `/` work element by element. Multiplying or dividing by a
/// primitive number scales every element, from either side for `*`. Both operands may have
/// different element types, in which case the result has the [promoted](crate::promote)
/// type: `vec2(1u8, 2) + vec2(0.5f32, 0.5)` is a `Vec2<f32>`.
///
/// [`RIGHT`]: Vector::RIGHT
/// [`UP`]: Vector::UP
/// [`FORWARD`]: Vector::FORWARD
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All elements are zero. This is the origin when used as a point.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// All elements are one. This is the identity scale factor.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = vec2(T::ONE, T::ZERO);
    pub const Y: Self = vec2(T::ZERO, T::ONE);
}

impl<T: Zero + One> Vector<T, 3> {
    pub const X: Self = vec3(T::ONE, T::ZERO, T::ZERO);
    pub const Y: Self = vec3(T::ZERO, T::ONE, T::ZERO);
    pub const Z: Self = vec3(T::ZERO, T::ZERO, T::ONE);

    /// +X, the local "right" axis of an object.
    pub const RIGHT: Self = Self::X;
    /// +Y, the local "up" axis of an object.
    pub const UP: Self = Self::Y;
    /// +Z, the local "forward" axis of an object.
    pub const FORWARD: Self = Self::Z;
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const Y: Self = vec4(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const Z: Self = vec4(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const W: Self = vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `value`.
    ///
    /// ```
    /// # use cg_space::*;
    /// let gray = Vector::splat(0.5f32);
    /// assert_eq!(gray, vec3(0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Returns a vector whose element `i` is `f(i)`.
    ///
    /// ```
    /// # use cg_space::*;
    /// let squares: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Transforms each element with `f`.
    ///
    /// ```
    /// # use cg_space::*;
    /// let rounded = vec2(1.4f32, -2.6).map(f32::round);
    /// assert_eq!(rounded, vec2(1.0, -3.0));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other`.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        Vector(self.0.map(|lhs| match rhs.next() {
            Some(rhs) => (lhs, rhs),
            // both arrays have `N` elements
            None => unreachable!(),
        }))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the vector into its element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Multiplies every element by `factor`.
    ///
    /// Unlike the `*` operator this keeps the element type, which is what generic code over
    /// [`Number`] needs.
    pub fn scale(self, factor: T) -> Self
    where
        T: Number,
    {
        self.map(|elem| elem * factor)
    }

    /// Sum of the products of corresponding elements.
    ///
    /// ```
    /// # use cg_space::*;
    /// // perpendicular directions
    /// assert_eq!(vec2(2, 1).dot(vec2(-1, 2)), 0);
    /// assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        let mut sum = T::ZERO;
        for (a, b) in self.0.into_iter().zip(other.0) {
            sum = sum + a * b;
        }
        sum
    }

    /// The squared length. Cheaper than [`Vector::magnitude`] when only comparing lengths.
    pub fn sqr_magnitude(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// The Euclidean length.
    ///
    /// ```
    /// # use cg_space::*;
    /// assert_eq!(vec3(2.0f32, 3.0, 6.0).magnitude(), 7.0);
    /// ```
    #[doc(alias = "length")]
    pub fn magnitude(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.sqr_magnitude().sqrt()
    }

    /// Scales the vector to a length of one, keeping its direction.
    ///
    /// Normalizing the zero vector divides by zero and yields NaN elements.
    ///
    /// ```
    /// # use cg_space::*;
    /// assert_eq!(vec2(0.0f32, -3.0).normalized(), vec2(0.0, -1.0));
    /// ```
    pub fn normalized(self) -> Self
    where
        T: Number + Sqrt,
    {
        let len = self.magnitude();
        self.map(|elem| elem / len)
    }

    /// Inverts every element, except that zeroes stay zero.
    ///
    /// Used to undo a scale factor without dividing by zero when one of its axes collapses.
    ///
    /// ```
    /// # use cg_space::*;
    /// assert_eq!(vec3(2.0, 0.0, -4.0).reciprocal_or_zero(), vec3(0.5, 0.0, -0.25));
    /// ```
    pub fn reciprocal_or_zero(self) -> Self
    where
        T: Number,
    {
        self.map(|elem| if elem == T::ZERO { T::ZERO } else { T::ONE / elem })
    }

    /// Takes the smaller value of each element pair.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(other).map(|(a, b)| a.min(b))
    }

    /// Takes the larger value of each element pair.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax,
    {
        self.zip(other).map(|(a, b)| a.max(b))
    }

    /// Interprets the elements as degrees and converts them to radians.
    pub fn to_radians(self) -> Self
    where
        T: Real,
    {
        self.scale(T::DEG_TO_RAD)
    }

    /// Interprets the elements as radians and converts them to degrees.
    pub fn to_degrees(self) -> Self
    where
        T: Real,
    {
        self.scale(T::RAD_TO_DEG)
    }
}

impl<T> Vector<T, 2> {
    /// Adds `z` as a third element.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        vec3(x, y, z)
    }
}

impl<T> Vector<T, 3> {
    /// Drops the `z` element.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Adds `w` as a fourth element.
    ///
    /// A `w` of 1 turns a point into homogeneous coordinates, so that it is affected by
    /// translation; a `w` of 0 does the same for a direction, which must not be translated.
    ///
    /// ```
    /// # use cg_space::*;
    /// let point = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(point, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// The right-handed cross product.
    ///
    /// The result is perpendicular to both operands; swapping them flips its sign. Only
    /// 3-dimensional vectors have a cross product, so this method does not exist for other
    /// dimensions.
    ///
    /// ```
    /// # use cg_space::*;
    /// assert_eq!(Vec3f::RIGHT.cross(Vec3f::UP), Vec3f::FORWARD);
    /// assert_eq!(Vec3f::UP.cross(Vec3f::RIGHT), -Vec3f::FORWARD);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T> Vector<T, 4> {
    /// Drops the `w` element.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        Self(array)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Writes `(a, b, c)`, formatting every element with `elem`.
fn write_tuple<T>(
    f: &mut fmt::Formatter<'_>,
    elems: &[T],
    elem: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    f.write_str("(")?;
    for (i, e) in elems.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        elem(e, f)?;
    }
    f.write_str(")")
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0, |e, f| fmt::Debug::fmt(e, f))
    }
}

/// Formats as `(x, y, z)`. Format options such as precision apply to every element.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &self.0, |e, f| fmt::Display::fmt(e, f))
    }
}

#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
