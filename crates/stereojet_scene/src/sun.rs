//! Sun disc placement and the light direction it implies

use stereojet_math::{transform, vector, MathError, Matrix};

/// Fixed sun in the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sun {
    pub position: [f32; 3],
    /// Uniform scale of the disc
    pub scale: f32,
    /// Offset from the sun to the point light used for shading
    pub light_offset: [f32; 3],
}

impl Default for Sun {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, -0.5],
            scale: 2.0,
            light_offset: [0.0, 20.0, -10.0],
        }
    }
}

impl Sun {
    /// Model matrix for the disc
    pub fn model_matrix(&self) -> Matrix {
        transform(Some(self.position), Some([self.scale; 3]), None)
    }

    /// Light position before normalization
    pub fn light_position(&self) -> [f32; 3] {
        std::array::from_fn(|i| self.position[i] + self.light_offset[i])
    }

    /// Normalized light direction
    pub fn light_direction(&self) -> Result<[f32; 3], MathError> {
        vector::to_array(&vector::normalize(&self.light_position()))
    }
}
