use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{
    approx::ApproxEq,
    promote::{for_each_scalar, Promote, Promoted},
    vec3, One, Quat, Vector,
};

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, tolerance)
    }
}

/// Hamilton product.
///
/// Composes rotations: `(a * b) * v` rotates `v` by `b` first, then by `a`.
impl<T, U> Mul<Quat<U>> for Quat<T>
where
    T: Promote<U>,
    U: Copy,
{
    type Output = Quat<Promoted<T, U>>;

    fn mul(self, rhs: Quat<U>) -> Self::Output {
        let [w1, x1, y1, z1] = self.vec.into_array().map(<T as Promote<U>>::promote);
        let [w2, x2, y2, z2] = rhs.vec.into_array().map(<T as Promote<U>>::promote_rhs);

        Quat::new(
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        )
    }
}

/// Rotates a vector.
///
/// Computes `q * v * q⁻¹` without building the intermediate quaternions. The quaternion is
/// *not* normalized: a non-unit quaternion also scales the vector by its squared magnitude.
impl<T, U> Mul<Vector<U, 3>> for Quat<T>
where
    T: Promote<U>,
    U: Copy,
{
    type Output = Vector<Promoted<T, U>, 3>;

    fn mul(self, rhs: Vector<U, 3>) -> Self::Output {
        let [s, x, y, z] = self.vec.into_array().map(<T as Promote<U>>::promote);
        let u = vec3(x, y, z);
        let v = rhs.map(<T as Promote<U>>::promote_rhs);
        let two = <Promoted<T, U> as One>::ONE + <Promoted<T, U> as One>::ONE;

        let a = u.scale(two * u.dot(v));
        let b = v.scale(s * s - u.dot(u));
        let c = u.cross(v).scale(two * s);
        Vector::from_fn(|i| a[i] + b[i] + c[i])
    }
}

impl<T, U> Add<Quat<U>> for Quat<T>
where
    T: Promote<U>,
{
    type Output = Quat<Promoted<T, U>>;

    fn add(self, rhs: Quat<U>) -> Self::Output {
        Quat::from_vec(self.vec + rhs.vec)
    }
}

impl<T, U> Sub<Quat<U>> for Quat<T>
where
    T: Promote<U>,
{
    type Output = Quat<Promoted<T, U>>;

    fn sub(self, rhs: Quat<U>) -> Self::Output {
        Quat::from_vec(self.vec - rhs.vec)
    }
}

impl<T: Neg> Neg for Quat<T> {
    type Output = Quat<T::Output>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! scalar_ops {
    ($s:ident) => {
        impl<T> Mul<$s> for Quat<T>
        where
            T: Promote<$s>,
        {
            type Output = Quat<Promoted<T, $s>>;

            fn mul(self, rhs: $s) -> Self::Output {
                Quat::from_vec(self.vec * rhs)
            }
        }

        impl<T> Div<$s> for Quat<T>
        where
            T: Promote<$s>,
        {
            type Output = Quat<Promoted<T, $s>>;

            fn div(self, rhs: $s) -> Self::Output {
                Quat::from_vec(self.vec / rhs)
            }
        }

        impl<T> Mul<Quat<T>> for $s
        where
            $s: Promote<T>,
        {
            type Output = Quat<Promoted<$s, T>>;

            fn mul(self, rhs: Quat<T>) -> Self::Output {
                Quat::from_vec(self * rhs.vec)
            }
        }
    };
}

for_each_scalar!(scalar_ops);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Quat, Vec3, Vec3f};

    #[test]
    fn arithmetic() {
        let a = Quat::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5f32, -1.0, 0.0, 2.0);
        assert_eq!(a + b, Quat::new(1.5, 1.0, 3.0, 6.0));
        assert_eq!(a - b, Quat::new(0.5, 3.0, 3.0, 2.0));
        assert_eq!(-b, Quat::new(-0.5, 1.0, -0.0, -2.0));
        assert_eq!(a * 2.0f32, Quat::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(2.0f32 * a, a * 2.0f32);
        assert_eq!(a / 2.0f32, Quat::new(0.5, 1.0, 1.5, 2.0));
    }

    #[test]
    fn mixed_types() {
        let q: Quat<f64> = Quat::<f32>::IDENTITY * Quat::new(0.0f64, 1.0, 0.0, 0.0);
        assert_eq!(q, Quat::new(0.0, 1.0, 0.0, 0.0));

        let v: Vec3<f32> = Quat::<f32>::IDENTITY * vec3(1i32, 2, 3);
        assert_eq!(v, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn rotation_matches_sandwich_product() {
        let q = Quat::from_euler(0.3f32, -1.2, 2.0);
        let v = vec3(1.0f32, -2.0, 0.5);
        let pure = Quat::new(0.0, v.x, v.y, v.z);
        let sandwich = q * pure * q.inverse();
        assert_approx_eq!(q * v, sandwich.vector_part(), abs = 1e-5);
        assert_approx_eq!(sandwich.w, 0.0, abs = 1e-5);
    }

    #[test]
    fn composition_order() {
        let yaw = Quat::from_axis_angle_deg(90.0f32, Vec3f::Z);
        let roll = Quat::from_axis_angle_deg(90.0f32, Vec3f::X);
        // roll first: Y -> Z, then yaw leaves Z alone
        assert_approx_eq!((yaw * roll) * Vec3f::Y, Vec3f::Z, abs = 1e-6);
        // yaw first: Y -> -X, then roll leaves X alone
        assert_approx_eq!((roll * yaw) * Vec3f::Y, -Vec3f::X, abs = 1e-6);
    }

    #[test]
    fn non_unit_scales() {
        let q = Quat::<f32>::IDENTITY * 2.0f32;
        assert_eq!(q * Vec3f::X, vec3(4.0, 0.0, 0.0));
    }
}
