//! 4x4 transform builders: look-at view, perspective projection, affine TRS
//!
//! Every builder returns a row-major [`Matrix`] in the column-vector
//! convention, so results compose with plain [`Matrix::mul`]
//! (`projection * view * model`).

use crate::{vector, MathError, Matrix};

/// Right-handed look-at view matrix.
///
/// `f = normalize(center - eye)`, `r = normalize(f x up)`, `u = r x f`.
/// The rotation rows are `r`, `u`, `-f` and the translation column is
/// `(-r.eye, -u.eye, f.eye)`. If `up` is parallel to the view direction the
/// basis is degenerate and the result contains NaN.
pub fn view_matrix(eye: &[f32], center: &[f32], up: &[f32]) -> Result<Matrix, MathError> {
    let f = vector::normalize(&vector::sub(center, eye)?);
    let r = vector::normalize(&vector::cross(&f, up)?);
    let u = vector::cross(&r, &f)?;

    Matrix::from_rows(&[
        [r[0], r[1], r[2], -vector::dot(&r, eye)?],
        [u[0], u[1], u[2], -vector::dot(&u, eye)?],
        [-f[0], -f[1], -f[2], vector::dot(&f, eye)?],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Symmetric OpenGL-style perspective projection.
///
/// `fov_degrees` is the vertical field of view. `near == far` is not
/// guarded and produces infinite entries.
pub fn perspective_matrix(aspect_ratio: f32, fov_degrees: f32, near: f32, far: f32) -> Matrix {
    let f = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
    let range_inv = 1.0 / (near - far);

    Matrix::from_mat4([
        [f / aspect_ratio, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, (near + far) * range_inv, near * far * range_inv * 2.0],
        [0.0, 0.0, -1.0, 0.0],
    ])
}

/// Translate/scale/rotate parameters for an affine model matrix.
///
/// Rotation is `[yaw, pitch, roll]` in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub translate: [f32; 3],
    pub scale: [f32; 3],
    pub rotate: [f32; 3],
}

impl Default for Affine {
    fn default() -> Self {
        Self {
            translate: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
            rotate: [0.0, 0.0, 0.0],
        }
    }
}

impl Affine {
    /// Builder: set translation
    pub fn translate(mut self, translate: [f32; 3]) -> Self {
        self.translate = translate;
        self
    }

    /// Builder: set per-axis scale
    pub fn scale(mut self, scale: [f32; 3]) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set yaw/pitch/roll in degrees
    pub fn rotate(mut self, rotate: [f32; 3]) -> Self {
        self.rotate = rotate;
        self
    }

    /// Combined `T * R(yaw, pitch, roll) * S`
    pub fn to_matrix(&self) -> Matrix {
        let [yaw, pitch, roll] = self.rotate.map(f32::to_radians);
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        let (sin_roll, cos_roll) = roll.sin_cos();

        let [tx, ty, tz] = self.translate;
        let [sx, sy, sz] = self.scale;

        // Basis images of the local X, Y and Z axes
        let x_axis = [
            cos_yaw * cos_roll + sin_yaw * sin_pitch * sin_roll,
            sin_roll * cos_pitch,
            -sin_yaw * cos_roll + cos_yaw * sin_pitch * sin_roll,
        ];
        let y_axis = [
            -cos_yaw * sin_roll + sin_yaw * sin_pitch * cos_roll,
            cos_roll * cos_pitch,
            sin_roll * sin_yaw + cos_yaw * sin_pitch * cos_roll,
        ];
        let z_axis = [sin_yaw * cos_pitch, -sin_pitch, cos_yaw * cos_pitch];

        Matrix::from_mat4([
            [sx * x_axis[0], sy * y_axis[0], sz * z_axis[0], tx],
            [sx * x_axis[1], sy * y_axis[1], sz * z_axis[1], ty],
            [sx * x_axis[2], sy * y_axis[2], sz * z_axis[2], tz],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Affine model matrix with optional components.
///
/// Missing parts default to no translation, unit scale and no rotation.
pub fn transform(
    translate: Option<[f32; 3]>,
    scale: Option<[f32; 3]>,
    rotate: Option<[f32; 3]>,
) -> Matrix {
    let defaults = Affine::default();
    Affine {
        translate: translate.unwrap_or(defaults.translate),
        scale: scale.unwrap_or(defaults.scale),
        rotate: rotate.unwrap_or(defaults.rotate),
    }
    .to_matrix()
}
