//! Per-frame output handed to the rendering collaborator

use stereojet_math::Matrix;

use crate::camera::Eye;

/// Handle of an uploaded model, assigned by the scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

/// Primitive topology for a draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Filled triangle list
    Triangles,
    /// The same index buffer drawn as lines (wireframe overlay)
    Lines,
}

/// Colour shift for solid terrain fill
pub const SOLID_SHIFT: [f32; 3] = [0.2, 0.2, 0.2];
/// Colour shift leaving vertex colours untouched
pub const NO_SHIFT: [f32; 3] = [1.0, 1.0, 1.0];

/// One draw of one model
#[derive(Clone, Debug)]
pub struct DrawCall {
    pub model: ModelId,
    /// Row-major model-view matrix
    pub model_view: Matrix,
    pub color_shift: [f32; 3],
    pub mode: DrawMode,
}

/// Everything needed to draw the scene from one eye
#[derive(Clone, Debug)]
pub struct EyePass {
    pub eye: Eye,
    pub eye_position: [f32; 3],
    /// Normalized light direction
    pub light_dir: [f32; 3],
    /// Normalized eye position, used for specular terms
    pub camera_dir: [f32; 3],
    pub sun_color: [f32; 3],
    pub draws: Vec<DrawCall>,
}

impl EyePass {
    /// Number of draws in a given mode
    pub fn count(&self, mode: DrawMode) -> usize {
        self.draws.iter().filter(|d| d.mode == mode).count()
    }
}

/// Both eye passes for one frame
#[derive(Clone, Debug)]
pub struct FrameOutput {
    pub projection: Matrix,
    pub left: EyePass,
    pub right: EyePass,
}

impl FrameOutput {
    /// Passes in draw order: left, then right
    pub fn passes(&self) -> [&EyePass; 2] {
        [&self.left, &self.right]
    }
}
