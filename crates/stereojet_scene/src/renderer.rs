//! Boundary to the rendering collaborator
//!
//! The scene never touches a graphics API. A backend implements
//! [`StereoRenderer`]: it receives each model once for upload, then one
//! [`EyePass`] per eye per frame. Colour-channel masking between the two
//! passes and both clears belong to the backend.

use stereojet_geometry::DrawableGeometry;
use stereojet_math::Matrix;

use crate::frame::{EyePass, FrameOutput, ModelId};

/// A backend that can draw stereo frames
pub trait StereoRenderer {
    type Error: std::error::Error;

    /// Take ownership of a model's buffers under `id`
    fn upload(&mut self, id: ModelId, geometry: &dyn DrawableGeometry) -> Result<(), Self::Error>;

    /// Draw one eye
    fn draw_eye(&mut self, projection: &Matrix, pass: &EyePass) -> Result<(), Self::Error>;

    /// Draw a full frame: left eye, then right eye
    fn render_frame(&mut self, frame: &FrameOutput) -> Result<(), Self::Error> {
        for pass in frame.passes() {
            self.draw_eye(&frame.projection, pass)?;
        }
        Ok(())
    }
}
