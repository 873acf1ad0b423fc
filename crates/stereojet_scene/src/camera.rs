//! Stereo camera
//!
//! A single tracked camera position that always looks at the jet. The two
//! eyes sit on either side of it along the camera's horizontal axis, half
//! the interpupillary distance each way.

use stereojet_input::CameraRig;
use stereojet_math::{perspective_matrix, vector, MathError, Matrix};

/// World up; the scene is Z-up
pub const WORLD_UP: [f32; 3] = [0.0, 0.0, 1.0];

/// Start position of the tracked camera
const DEFAULT_POSITION: [f32; 3] = [0.0, -5.0, 1.5];

/// Which eye a pass is rendered for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Eye {
    /// Drawn through the red channel
    Left,
    /// Drawn through the cyan channels
    Right,
}

/// Tracked camera with projection parameters
#[derive(Clone, Debug, PartialEq)]
pub struct StereoCamera {
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for StereoCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl StereoCamera {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            fov: 45.0,
            near: 0.01,
            far: 33.0,
        }
    }

    /// Builder: set the start position
    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    /// Builder: set field of view and clip planes
    pub fn with_projection(mut self, fov: f32, near: f32, far: f32) -> Self {
        self.fov = fov;
        self.near = near;
        self.far = far;
        self
    }

    /// Perspective projection for the given aspect ratio
    pub fn projection(&self, aspect_ratio: f32) -> Matrix {
        perspective_matrix(aspect_ratio, self.fov, self.near, self.far)
    }

    /// Horizontal axis of a look-at from the camera toward `target`.
    ///
    /// Falls back to world +X when the view direction is vertical or the
    /// camera sits on the target.
    pub fn right_axis(&self, target: [f32; 3]) -> Result<[f32; 3], MathError> {
        let forward = vector::sub(&target, &self.position)?;
        let right = vector::cross(&forward, &WORLD_UP)?;
        match vector::try_normalize(&right) {
            Some(r) => vector::to_array(&r),
            None => Ok([1.0, 0.0, 0.0]),
        }
    }

    /// Position of one eye when looking at `target`
    pub fn eye_position(&self, eye: Eye, target: [f32; 3], ipd: f32) -> Result<[f32; 3], MathError> {
        let right = self.right_axis(target)?;
        let half = match eye {
            Eye::Left => -ipd / 2.0,
            Eye::Right => ipd / 2.0,
        };
        Ok(std::array::from_fn(|i| self.position[i] + right[i] * half))
    }

    /// View matrix for an eye at `eye_position` looking at `target`
    pub fn view(&self, eye_position: [f32; 3], target: [f32; 3]) -> Result<Matrix, MathError> {
        stereojet_math::view_matrix(&eye_position, &target, &WORLD_UP)
    }

    /// Back to the start position
    pub fn reset(&mut self) {
        self.position = DEFAULT_POSITION;
    }
}

impl CameraRig for StereoCamera {
    fn zoom(&mut self, delta_z: f32) {
        // Keep the camera above ground so the view never flips
        self.position[2] = (self.position[2] + delta_z).max(0.0);
    }

    fn pan(&mut self, delta_x: f32, delta_z: f32) {
        self.position[0] += delta_x;
        self.position[2] += delta_z;
    }

    fn position(&self) -> [f32; 3] {
        self.position
    }
}
