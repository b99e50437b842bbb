mod ops;
mod view;

use std::fmt;

use crate::{vec3, vec4, Number, One, Real, Signed, Sqrt, Vec3, Vec4, Zero};

pub use view::WXYZ;

/// A quaternion consisting of a real part `w` and 3 imaginary parts `x`, `y` and `z`.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space. Multiplying two of
/// them with `*` (the Hamilton product) composes their rotations, and multiplying a quaternion
/// with a [`Vec3`] rotates the vector.
///
/// Components are accessible as fields `w`, `x`, `y` and `z`. They are stored in that order, so
/// the memory layout is `[T; 4]` with the real part first.
///
/// # Rotation conventions
///
/// Euler angles are in radians unless the method name ends in `_deg`. They are interpreted as
/// rotations around the X (roll), Y (pitch) and Z (yaw) axes, composed in Z-Y-X order.
///
/// # Examples
///
/// ```
/// # use cg_space::*;
/// let q = Quat::from_axis_angle_deg(90.0f32, Vec3f::UP);
/// assert_approx_eq!(q * Vec3f::FORWARD, Vec3f::RIGHT);
/// assert_approx_eq!(q * q.inverse(), Quat::IDENTITY);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vec4<T>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ONE, T::ZERO, T::ZERO, T::ZERO),
    };

    /// The quaternion with all components set to 0.
    pub const ZERO: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ZERO),
    };

    /// The quaternion with all components set to 1.
    pub const ONE: Self = Self {
        vec: vec4(T::ONE, T::ONE, T::ONE, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and imaginary parts `x`, `y` and `z`.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(w, x, y, z),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`](crate::Vector) holding
    /// `(w, x, y, z)`.
    #[inline]
    pub const fn from_vec(vec: Vec4<T>) -> Self {
        Self { vec }
    }

    /// Returns the components as a vector `(w, x, y, z)`.
    #[inline]
    pub fn into_vec(self) -> Vec4<T> {
        self.vec
    }

    /// Returns the imaginary part `(x, y, z)`.
    pub fn vector_part(self) -> Vec3<T> {
        let [_, x, y, z] = self.vec.into_array();
        vec3(x, y, z)
    }

    /// Converts every component with `f`.
    pub fn map<F, U>(self, f: F) -> Quat<U>
    where
        F: FnMut(T) -> U,
    {
        Quat {
            vec: self.vec.map(f),
        }
    }

    /// Returns the conjugate: the imaginary parts negated, the real part unchanged.
    pub fn conjugate(self) -> Self
    where
        T: Signed,
    {
        let [w, x, y, z] = self.vec.into_array();
        Self::new(w, -x, -y, -z)
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the squared magnitude (length) of this quaternion.
    ///
    /// If the squared magnitude is not equal to one, multiplying a vector with this quaternion
    /// will scale the vector in addition to rotating it.
    pub fn sqr_magnitude(&self) -> T
    where
        T: Number,
    {
        self.vec.sqr_magnitude()
    }

    /// Returns the magnitude (length) of this quaternion.
    #[doc(alias = "norm", alias = "length")]
    pub fn magnitude(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.magnitude()
    }

    /// Returns a copy of this quaternion with a magnitude of one.
    ///
    /// Like [`Vector::normalized`](crate::Vector::normalized), normalizing the zero quaternion
    /// yields NaN components.
    pub fn normalized(self) -> Self
    where
        T: Number + Sqrt,
    {
        Self {
            vec: self.vec.normalized(),
        }
    }

    /// Returns the multiplicative inverse: the conjugate divided by the squared magnitude.
    ///
    /// For a unit quaternion this is the opposite rotation. If the squared magnitude is zero
    /// (within [`Real::EPSILON`]), the zero quaternion is returned instead of dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cg_space::*;
    /// assert_eq!(Quat::<f32>::ZERO.inverse(), Quat::ZERO);
    /// assert_eq!(Quat::new(2.0f32, 0.0, 0.0, 0.0).inverse(), Quat::new(0.5, 0.0, 0.0, 0.0));
    /// ```
    pub fn inverse(self) -> Self
    where
        T: Real,
    {
        let sqr_magnitude = self.sqr_magnitude();
        if sqr_magnitude.abs() <= T::EPSILON {
            return Self::ZERO;
        }
        self.conjugate().map(|c| c / sqr_magnitude)
    }

    /// Converts the rotation to Euler angles `(x, y, z)` in radians.
    ///
    /// The quaternion is normalized first. Near the gimbal-lock poles (pitch of ±90°) the pitch
    /// saturates instead of becoming NaN, but roll and yaw can no longer be told apart and are
    /// numerically unstable. The zero quaternion has no rotation and yields NaN in every angle.
    pub fn to_euler(self) -> Vec3<T>
    where
        T: Real,
    {
        let [w, x, y, z] = self.normalized().vec.into_array();
        let two = T::two();

        let roll = (two * (w * x + y * z)).atan2(T::ONE - two * (x * x + y * y));

        // NaN (from a zero quaternion) must fall through to `asin` unchanged
        let sin_pitch = two * (w * y - z * x);
        let sin_pitch = if sin_pitch >= T::ONE {
            log::trace!("euler extraction at gimbal-lock pole, clamping pitch");
            T::ONE
        } else if sin_pitch <= -T::ONE {
            log::trace!("euler extraction at gimbal-lock pole, clamping pitch");
            -T::ONE
        } else {
            sin_pitch
        };
        let pitch = sin_pitch.asin();

        let yaw = (two * (w * z + x * y)).atan2(T::ONE - two * (y * y + z * z));

        vec3(roll, pitch, yaw)
    }

    /// Converts the rotation to Euler angles `(x, y, z)` in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cg_space::*;
    /// let q = Quat::from_euler_deg(10.0f64, 20.0, 30.0);
    /// assert_approx_eq!(q.to_euler_deg(), vec3(10.0, 20.0, 30.0), abs = 1e-9);
    /// ```
    pub fn to_euler_deg(self) -> Vec3<T>
    where
        T: Real,
    {
        self.to_euler().to_degrees()
    }

    /// Creates a rotation from Euler angles in radians.
    ///
    /// Each angle is first wrapped to a single turn. The rotations are composed in Z-Y-X order.
    #[doc(alias = "rotation_from_euler")]
    pub fn from_euler(x: T, y: T, z: T) -> Self
    where
        T: Real,
    {
        let half = T::half();
        let (x, y, z) = (
            (x % T::FULL_TURN) * half,
            (y % T::FULL_TURN) * half,
            (z % T::FULL_TURN) * half,
        );
        let (sx, cx) = (x.sin(), x.cos());
        let (sy, cy) = (y.sin(), y.cos());
        let (sz, cz) = (z.sin(), z.cos());

        Self::new(
            cx * cy * cz + sx * sy * sz,
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
        )
    }

    /// Creates a rotation from Euler angles in degrees.
    pub fn from_euler_deg(x: T, y: T, z: T) -> Self
    where
        T: Real,
    {
        Self::from_euler(x * T::DEG_TO_RAD, y * T::DEG_TO_RAD, z * T::DEG_TO_RAD)
    }

    /// Creates a rotation from a vector of Euler angles in radians.
    pub fn from_euler_vec(angles: Vec3<T>) -> Self
    where
        T: Real,
    {
        let [x, y, z] = angles.into_array();
        Self::from_euler(x, y, z)
    }

    /// Creates a rotation from a vector of Euler angles in degrees.
    pub fn from_euler_deg_vec(angles: Vec3<T>) -> Self
    where
        T: Real,
    {
        Self::from_euler_vec(angles.to_radians())
    }

    /// Creates a rotation of `angle` radians around `axis`.
    ///
    /// `axis` must already be normalized, otherwise the result is not a unit quaternion.
    pub fn from_axis_angle(angle: T, axis: Vec3<T>) -> Self
    where
        T: Real,
    {
        let half = angle * T::half();
        let [x, y, z] = axis.scale(half.sin()).into_array();
        Self::new(half.cos(), x, y, z)
    }

    /// Creates a rotation of `angle` degrees around `axis`.
    pub fn from_axis_angle_deg(angle: T, axis: Vec3<T>) -> Self
    where
        T: Real,
    {
        Self::from_axis_angle(angle * T::DEG_TO_RAD, axis)
    }
}

/// Creates a rotation from Euler angles in radians. See [`Quat::from_euler`].
pub fn rotation_from_euler<T: Real>(x: T, y: T, z: T) -> Quat<T> {
    Quat::from_euler(x, y, z)
}

/// Creates a rotation from Euler angles in degrees. See [`Quat::from_euler_deg`].
pub fn rotation_from_euler_deg<T: Real>(x: T, y: T, z: T) -> Quat<T> {
    Quat::from_euler_deg(x, y, z)
}

/// Creates a rotation of `angle` radians around a normalized `axis`.
pub fn rotation_around_axis<T: Real>(angle: T, axis: Vec3<T>) -> Quat<T> {
    Quat::from_axis_angle(angle, axis)
}

/// Creates a rotation of `angle` degrees around a normalized `axis`.
pub fn rotation_around_axis_deg<T: Real>(angle: T, axis: Vec3<T>) -> Quat<T> {
    Quat::from_axis_angle_deg(angle, axis)
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        self.w.fmt(f)?;
        write!(f, " + ")?;
        self.x.fmt(f)?;
        write!(f, "i + ")?;
        self.y.fmt(f)?;
        write!(f, "j + ")?;
        self.z.fmt(f)?;
        write!(f, "k)")
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, assert_approx_ne, Vec3f};

    use super::*;

    #[test]
    fn fields() {
        let mut q = Quat::new(1, 2, 3, 4);
        assert_eq!((q.w, q.x, q.y, q.z), (1, 2, 3, 4));
        q.z = 5;
        assert_eq!(q.into_vec(), vec4(1, 2, 3, 5));
        assert_eq!(q.vector_part(), vec3(2, 3, 5));
    }

    #[test]
    fn fmt() {
        let q = Quat::new(1.5f32, -2.0, 0.0, 4.0);
        assert_eq!(q.to_string(), "(1.5 + -2i + 0j + 4k)");
        assert_eq!(format!("{:.1}", Quat::<f32>::IDENTITY), "(1.0 + 0.0i + 0.0j + 0.0k)");
        assert_eq!(
            format!("{:?}", Quat::<f32>::IDENTITY),
            "Quat { w: 1.0, x: 0.0, y: 0.0, z: 0.0 }"
        );
    }

    #[test]
    fn conjugate_and_inverse() {
        let q = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, -3.0, -4.0));
        assert_eq!(q.sqr_magnitude(), 30.0);
        assert_approx_eq!(q.inverse(), q.conjugate().map(|c| c / 30.0));
        assert_approx_eq!(q * q.inverse(), Quat::IDENTITY);
        assert_approx_eq!(q.inverse() * q, Quat::IDENTITY);
    }

    #[test]
    fn inverse_of_zero_is_zero() {
        assert_eq!(Quat::<f64>::ZERO.inverse(), Quat::ZERO);
        let tiny = Quat::new(1e-5f32, 0.0, 0.0, 0.0);
        assert_eq!(tiny.inverse(), Quat::ZERO);
    }

    #[test]
    fn normalized() {
        let q = Quat::new(0.0f32, 3.0, 0.0, 4.0).normalized();
        assert_approx_eq!(q.magnitude(), 1.0);
        assert_approx_eq!(q, Quat::new(0.0, 0.6, 0.0, 0.8));
    }

    #[test]
    fn axis_angle() {
        let q = Quat::from_axis_angle(FRAC_PI_2, Vec3f::Z);
        assert_approx_eq!(q * Vec3f::X, Vec3f::Y);
        assert_approx_eq!(q * Vec3f::Y, -Vec3f::X);
        assert_approx_eq!(q * Vec3f::Z, Vec3f::Z);

        let half_turn = rotation_around_axis_deg(180.0f32, Vec3f::X);
        assert_approx_eq!(half_turn * Vec3f::Y, -Vec3f::Y, abs = 1e-6);
        assert_approx_eq!(half_turn, Quat::new(0.0, 1.0, 0.0, 0.0), abs = 1e-6);
    }

    #[test]
    fn euler_axes() {
        // A single Euler angle is a rotation around that axis.
        assert_approx_eq!(
            Quat::from_euler(0.5f32, 0.0, 0.0),
            Quat::from_axis_angle(0.5, Vec3f::X)
        );
        assert_approx_eq!(
            Quat::from_euler(0.0f32, 0.5, 0.0),
            Quat::from_axis_angle(0.5, Vec3f::Y)
        );
        assert_approx_eq!(
            Quat::from_euler(0.0f32, 0.0, 0.5),
            Quat::from_axis_angle(0.5, Vec3f::Z)
        );
    }

    #[test]
    fn euler_order() {
        let (x, y, z) = (0.3f32, -0.7, 1.1);
        let composed = Quat::from_axis_angle(z, Vec3f::Z)
            * Quat::from_axis_angle(y, Vec3f::Y)
            * Quat::from_axis_angle(x, Vec3f::X);
        assert_approx_eq!(Quat::from_euler(x, y, z), composed, abs = 1e-6);
        assert_approx_eq!(
            rotation_from_euler(x, y, z),
            Quat::from_euler_vec(vec3(x, y, z))
        );
    }

    #[test]
    fn euler_wraps_full_turns() {
        use std::f64::consts::TAU;

        // Without wrapping, a full turn flips the sign of the half-angle terms.
        let a = Quat::from_euler(0.25f64, 0.5, 0.75);
        let b = Quat::from_euler(0.25 + TAU, 0.5, 0.75 + 2.0 * TAU);
        assert_approx_eq!(a, b, abs = 1e-12);
    }

    #[test]
    fn euler_round_trip() {
        let q = rotation_from_euler_deg(10.0f32, 20.0, 30.0);
        assert_approx_eq!(q.magnitude(), 1.0);
        assert_approx_eq!(q.to_euler_deg(), vec3(10.0, 20.0, 30.0), abs = 1e-4);
        assert_approx_eq!(
            Quat::from_euler_deg_vec(vec3(10.0, 20.0, 30.0)),
            q,
            abs = 1e-6
        );

        // `to_euler` normalizes first
        let scaled = q.map(|c| c * 3.0);
        assert_approx_eq!(scaled.to_euler_deg(), vec3(10.0, 20.0, 30.0), abs = 1e-4);
    }

    #[test]
    fn gimbal_lock_saturates() {
        env_logger::builder()
            .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Trace)
            .try_init()
            .ok();

        let angles = Quat::from_euler(0.0f64, std::f64::consts::FRAC_PI_2, 0.0).to_euler();
        assert!(angles.as_slice().iter().all(|a| a.is_finite()));
        assert_approx_eq!(angles.y, std::f64::consts::FRAC_PI_2, abs = 1e-6);
    }

    #[test]
    fn euler_of_zero_is_nan() {
        let angles = Quat::<f32>::ZERO.to_euler();
        assert!(angles.x.is_nan());
        assert!(angles.y.is_nan());
        assert!(angles.z.is_nan());
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::new(0.0f32, 1.0, 0.0, 0.0);
        let j = Quat::new(0.0f32, 0.0, 1.0, 0.0);
        let k = Quat::new(0.0f32, 0.0, 0.0, 1.0);
        let minus_one = Quat::new(-1.0f32, 0.0, 0.0, 0.0);
        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * j * k, minus_one);
    }

    #[test]
    fn not_commutative() {
        let p = Quat::from_euler(0.1f32, 0.2, 0.3);
        let q = Quat::from_euler(PI / 3.0, -0.4, 1.0);
        assert_approx_ne!(p * q, q * p);
    }
}
