//! Construction of model, view and projection matrices.
//!
//! All functions are pure and produce 4x4 matrices meant to be applied to column vectors in
//! homogeneous coordinates. A render loop typically composes them as
//! `projection * view * model` once per frame.
//!
//! Conventions follow OpenGL: the space is right-handed, the camera looks down the -Z axis, and
//! projections map the view volume into the clip cube `[-1, 1]³` with the near plane at `z = -1`
//! and the far plane at `z = +1`.
//!
//! ```
//! # use cg_space::*;
//! # use cg_space::space::*;
//! let projection = perspective_deg(60.0f32, 16.0 / 9.0, 0.1, 100.0, FovAxis::Vertical);
//! let view = view(vec3(0.0f32, 1.0, 5.0), Quat::IDENTITY, Vec3::ONE);
//! let model = model(Vec3::ZERO, Quat::from_euler_deg(0.0f32, 45.0, 0.0), Vec3::ONE);
//!
//! let mvp = projection * view * model;
//! let clip = mvp * vec4(0.0f32, 0.0, 0.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```

use crate::{Mat4, Matrix, Quat, Real, Vec3};

/// Which extent of the viewport a field-of-view angle spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FovAxis {
    /// The angle spans the viewport width; the height follows from the aspect ratio.
    #[default]
    Horizontal,
    /// The angle spans the viewport height; the width follows from the aspect ratio.
    Vertical,
}

/// Builds an orthographic projection that maps the box bounded by `left`/`right`,
/// `down`/`up` and the `z_near`/`z_far` planes to the clip cube.
///
/// `z_near` and `z_far` are distances along the viewing direction (-Z).
pub fn ortho<T: Real>(left: T, right: T, down: T, up: T, z_near: T, z_far: T) -> Mat4<T> {
    let zero = T::ZERO;
    let two = T::two();

    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [two / (right - left), zero, zero, -((right + left) / (right - left))],
        [zero, two / (up - down), zero, -((up + down) / (up - down))],
        [zero, zero, -(two / (z_far - z_near)), -((z_far + z_near) / (z_far - z_near))],
        [zero, zero, zero, T::ONE],
    ]);
    mat
}

/// Builds a perspective projection from the bounds of the frustum at the near plane.
///
/// `left`, `right`, `down` and `up` are measured on the near plane, `z_near` and `z_far` are
/// positive distances along the viewing direction (-Z).
///
/// Depth follows the glFrustum convention: `z_near` maps to -1 and `z_far` to +1 in normalized
/// device coordinates, matching [`ortho`].
pub fn perspective<T: Real>(left: T, right: T, down: T, up: T, z_near: T, z_far: T) -> Mat4<T> {
    let zero = T::ZERO;
    let two = T::two();

    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [two * z_near / (right - left), zero, (right + left) / (right - left), zero],
        [zero, two * z_near / (up - down), (up + down) / (up - down), zero],
        [zero, zero, -((z_far + z_near) / (z_far - z_near)), -(two * z_far * z_near / (z_far - z_near))],
        [zero, zero, -T::ONE, zero],
    ]);
    mat
}

/// Builds a symmetric perspective projection from a field of view (in radians) and the
/// viewport's aspect ratio (width / height).
///
/// `axis` selects whether `fov` spans the width or the height of the viewport.
pub fn perspective_fov<T: Real>(
    fov: T,
    aspect_ratio: T,
    z_near: T,
    z_far: T,
    axis: FovAxis,
) -> Mat4<T> {
    let half_extent = z_near * (fov * T::half()).tan();
    let (right, up) = match axis {
        FovAxis::Vertical => (half_extent * aspect_ratio, half_extent),
        FovAxis::Horizontal => (half_extent, half_extent / aspect_ratio),
    };
    perspective(-right, right, -up, up, z_near, z_far)
}

/// Like [`perspective_fov`], but takes the field of view in degrees.
pub fn perspective_deg<T: Real>(
    fov_deg: T,
    aspect_ratio: T,
    z_near: T,
    z_far: T,
    axis: FovAxis,
) -> Mat4<T> {
    perspective_fov(fov_deg * T::DEG_TO_RAD, aspect_ratio, z_near, z_far, axis)
}

/// Builds the model matrix of an object placed at `position`, rotated by `rotation` and
/// scaled along its local axes by `scale`.
///
/// The columns of the result are the object's rotated and scaled right, up and forward axes,
/// followed by `position`.
pub fn model<T: Real>(position: Vec3<T>, rotation: Quat<T>, scale: Vec3<T>) -> Mat4<T> {
    let x_axis = (rotation * Vec3::<T>::RIGHT).scale(scale.x);
    let y_axis = (rotation * Vec3::<T>::UP).scale(scale.y);
    let z_axis = (rotation * Vec3::<T>::FORWARD).scale(scale.z);

    Matrix::from_columns([
        x_axis.extend(T::ZERO),
        y_axis.extend(T::ZERO),
        z_axis.extend(T::ZERO),
        position.extend(T::ONE),
    ])
}

/// Builds [`model`] with the negated position, the inverse rotation and the reciprocal scale.
///
/// Scale components of zero stay zero instead of dividing by zero. The result undoes
/// [`model`] exactly when only one of translation or scaling is involved, or when a rotation is
/// combined with a uniform scale at the origin.
pub fn model_inverse<T: Real>(position: Vec3<T>, rotation: Quat<T>, scale: Vec3<T>) -> Mat4<T> {
    model(-position, rotation.inverse(), scale.reciprocal_or_zero())
}

/// Builds the view matrix of a camera at `camera_position` with the given rotation and scale.
///
/// The world is first moved and scaled so that the camera sits at the origin, and then rotated
/// by the camera rotation.
pub fn view<T: Real>(
    camera_position: Vec3<T>,
    camera_rotation: Quat<T>,
    camera_scale: Vec3<T>,
) -> Mat4<T> {
    let rotation = model(Vec3::ZERO, camera_rotation, Vec3::ONE);
    let position_scale = model(
        -camera_position,
        Quat::IDENTITY,
        camera_scale.reciprocal_or_zero(),
    );
    rotation * position_scale
}

/// Projection settings of a camera.
///
/// The aspect ratio is not part of the settings since it follows the viewport; pass it to
/// [`Projection::matrix`] whenever the viewport size changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection<T> {
    /// Orthographic projection showing `height` world units vertically.
    Orthographic { height: T, z_near: T, z_far: T },
    /// Perspective projection with a field of view in radians.
    Perspective {
        fov: T,
        axis: FovAxis,
        z_near: T,
        z_far: T,
    },
}

impl<T: Real> Projection<T> {
    /// Returns the projection matrix for a viewport with the given aspect ratio
    /// (width / height).
    pub fn matrix(&self, aspect_ratio: T) -> Mat4<T> {
        match *self {
            Projection::Orthographic {
                height,
                z_near,
                z_far,
            } => {
                let up = height * T::half();
                let right = up * aspect_ratio;
                ortho(-right, right, -up, up, z_near, z_far)
            }
            Projection::Perspective {
                fov,
                axis,
                z_near,
                z_far,
            } => perspective_fov(fov, aspect_ratio, z_near, z_far, axis),
        }
    }
}

macro_rules! default_projection {
    ($($float:ident),+) => {
        $(
            /// Perspective, 60° horizontal field of view, near plane at 0.1, far plane at 1.0.
            impl Default for Projection<$float> {
                fn default() -> Self {
                    Projection::Perspective {
                        fov: 60.0f64.to_radians() as $float,
                        axis: FovAxis::Horizontal,
                        z_near: 0.1,
                        z_far: 1.0,
                    }
                }
            }
        )+
    };
}
default_projection!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4, Mat4f, Vec3f, Vec4};

    use super::*;

    fn project(mat: Mat4<f64>, point: Vec3<f64>) -> Vec3<f64> {
        let clip: Vec4<f64> = mat * point.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn ortho_maps_box_to_clip_cube() {
        let mat = ortho(-4.0, 2.0, -1.0, 3.0, 0.5, 10.0);
        assert_approx_eq!(project(mat, vec3(-4.0, -1.0, -0.5)), vec3(-1.0, -1.0, -1.0));
        assert_approx_eq!(project(mat, vec3(2.0, 3.0, -10.0)), vec3(1.0, 1.0, 1.0));
        assert_approx_eq!(project(mat, vec3(-1.0, 1.0, -5.25)), vec3(0.0, 0.0, 0.0));
    }

    #[test]
    fn perspective_maps_frustum_to_clip_cube() {
        let (near, far) = (1.0, 100.0);
        let mat = perspective(-2.0, 2.0, -1.0, 1.0, near, far);
        assert_approx_eq!(project(mat, vec3(2.0, 1.0, -near)), vec3(1.0, 1.0, -1.0));
        assert_approx_eq!(project(mat, vec3(-2.0, -1.0, -near)), vec3(-1.0, -1.0, -1.0));
        // the far plane is 100 times as wide
        assert_approx_eq!(project(mat, vec3(200.0, 0.0, -far)), vec3(1.0, 0.0, 1.0), abs = 1e-9);
        // w holds the distance from the camera
        let clip = mat * vec4(0.0f64, 0.0, -7.0, 1.0);
        assert_eq!(clip.w, 7.0);
    }

    #[test]
    fn fov_matches_bounds() {
        let tan30 = 30.0f64.to_radians().tan();

        let vertical = perspective_deg(60.0, 2.0, 1.0, 1000.0, FovAxis::Vertical);
        let right = 1.0 * tan30 * 2.0;
        let up = right / 2.0;
        assert_approx_eq!(vertical, perspective(-right, right, -up, up, 1.0, 1000.0));

        let horizontal = perspective_deg(60.0, 2.0, 1.0, 1000.0, FovAxis::Horizontal);
        let right = 1.0 * tan30;
        let up = right / 2.0;
        assert_approx_eq!(horizontal, perspective(-right, right, -up, up, 1.0, 1000.0));

        assert_approx_eq!(
            perspective_fov(std::f64::consts::FRAC_PI_3, 2.0, 1.0, 1000.0, FovAxis::Vertical),
            vertical
        );
    }

    #[test]
    fn model_places_axes() {
        let position = vec3(1.0f32, 2.0, 3.0);
        let rotation = Quat::from_axis_angle_deg(90.0, Vec3f::UP);
        let mat = model(position, rotation, vec3(2.0, 3.0, 4.0));

        // forward is rotated onto right, and scaled by 4
        assert_approx_eq!(
            mat * Vec3f::FORWARD.extend(0.0),
            vec4(4.0, 0.0, 0.0, 0.0),
            abs = 1e-6
        );
        assert_approx_eq!(mat * Vec3f::UP.extend(0.0), vec4(0.0, 3.0, 0.0, 0.0), abs = 1e-6);
        assert_eq!(mat * Vec3f::ZERO.extend(1.0), position.extend(1.0));
        assert_eq!(mat.row(3), vec4(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn model_identity() {
        assert_eq!(model(Vec3f::ZERO, Quat::IDENTITY, Vec3f::ONE), Mat4f::IDENTITY);
        assert_eq!(model_inverse(Vec3f::ZERO, Quat::IDENTITY, Vec3f::ONE), Mat4f::IDENTITY);
    }

    #[test]
    fn model_inverse_undoes_model() {
        let position = vec3(3.0f32, -2.0, 0.5);
        let scale = vec3(2.0f32, 0.5, 4.0);
        let rotation = Quat::from_euler_deg(10.0f32, 20.0, 30.0);

        let translate = model(position, Quat::IDENTITY, Vec3f::ONE);
        let inverse = model_inverse(position, Quat::IDENTITY, Vec3f::ONE);
        assert_approx_eq!(translate * inverse, Mat4f::IDENTITY);

        let scaled = model(Vec3f::ZERO, Quat::IDENTITY, scale);
        let inverse = model_inverse(Vec3f::ZERO, Quat::IDENTITY, scale);
        assert_approx_eq!(scaled * inverse, Mat4f::IDENTITY);

        let uniform = Vec3f::splat(2.5);
        let rotated = model(Vec3f::ZERO, rotation, uniform);
        let inverse = model_inverse(Vec3f::ZERO, rotation, uniform);
        assert_approx_eq!(rotated * inverse, Mat4f::IDENTITY, abs = 1e-5);
    }

    #[test]
    fn zero_scale_does_not_divide_by_zero() {
        let inverse = model_inverse(Vec3f::X, Quat::IDENTITY, vec3(0.0, 2.0, 0.0));
        assert!(inverse.as_column_major_slice().iter().all(|e| e.is_finite()));
        assert_eq!(inverse.column(0), Vec4::<f32>::ZERO);
        assert_eq!(inverse.column(1), vec4(0.0, 0.5, 0.0, 0.0));

        let view_mat = view(Vec3f::ZERO, Quat::IDENTITY, Vec3f::ZERO);
        assert!(view_mat.as_column_major_slice().iter().all(|e| e.is_finite()));
    }

    #[test]
    fn view_at_origin_is_identity() {
        let view_mat = view(Vec3f::ZERO, Quat::IDENTITY, Vec3f::ONE);
        assert_eq!(view_mat, Mat4f::IDENTITY);
        assert_eq!(view_mat * model(Vec3f::ZERO, Quat::IDENTITY, Vec3f::ONE), Mat4f::IDENTITY);
    }

    #[test]
    fn view_moves_camera_to_origin() {
        let camera = vec3(5.0f32, -1.0, 2.0);
        let rotation = Quat::from_euler_deg(0.0f32, 90.0, 0.0);
        let view_mat = view(camera, rotation, Vec3f::ONE);
        assert_approx_eq!(view_mat * camera.extend(1.0), vec4(0.0, 0.0, 0.0, 1.0), abs = 1e-6);

        // rotation is applied after the translation
        let ahead = camera + Vec3f::FORWARD;
        assert_approx_eq!(
            view_mat * ahead.extend(1.0),
            (rotation * Vec3f::FORWARD).extend(1.0),
            abs = 1e-6
        );

        let placed = model(camera, Quat::IDENTITY, Vec3f::ONE);
        let unrotated = view(camera, Quat::IDENTITY, Vec3f::ONE);
        assert_approx_eq!(unrotated * placed, Mat4f::IDENTITY);
    }

    #[test]
    fn projection_settings() {
        let default = Projection::<f32>::default();
        assert_approx_eq!(
            default.matrix(1.5),
            perspective_deg(60.0, 1.5, 0.1, 1.0, FovAxis::Horizontal)
        );

        let ortho_settings = Projection::Orthographic {
            height: 4.0f64,
            z_near: 0.0,
            z_far: 10.0,
        };
        assert_eq!(ortho_settings.matrix(2.0), ortho(-4.0, 4.0, -2.0, 2.0, 0.0, 10.0));
    }
}
