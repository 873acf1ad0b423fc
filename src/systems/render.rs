//! Logging render system
//!
//! A [`StereoRenderer`] that keeps a table of uploaded models and checks and
//! counts every draw instead of issuing GPU commands. It traces each call so
//! a frame can be inspected with `RUST_LOG=trace`; a GPU backend plugs in
//! through the same trait.

use std::collections::BTreeMap;

use log::{debug, trace};
use stereojet_math::Matrix;
use stereojet_scene::{DrawMode, DrawableGeometry, EyePass, FrameOutput, ModelId, StereoRenderer};

use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A model was uploaded twice under the same id
    DuplicateUpload(ModelId),
    /// A draw referenced a model that was never uploaded
    UnknownModel(ModelId),
    /// A draw matrix contained NaN or infinity
    NonFinite(ModelId),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::DuplicateUpload(id) => write!(f, "Model {} uploaded twice", id.0),
            RenderError::UnknownModel(id) => write!(f, "Model {} was never uploaded", id.0),
            RenderError::NonFinite(id) => write!(f, "Non-finite model-view for model {}", id.0),
        }
    }
}

impl std::error::Error for RenderError {}

/// What the renderer keeps for each uploaded model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadedModel {
    pub vertex_count: usize,
    pub index_count: usize,
    pub lit: bool,
    pub wireframe: bool,
}

/// Per-frame draw statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Eye passes cleared to the background colour
    pub clears: usize,
    pub triangle_draws: usize,
    pub line_draws: usize,
    pub indices: usize,
}

/// Renderer that validates and logs frames
#[derive(Debug)]
pub struct FrameLogRenderer {
    models: BTreeMap<ModelId, UploadedModel>,
    frames: u64,
    last_frame: FrameStats,
    current: FrameStats,
    clear_color: [f32; 4],
    trace_draws: bool,
}

impl Default for FrameLogRenderer {
    fn default() -> Self {
        Self::from_config(&RenderingConfig::default())
    }
}

impl FrameLogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the configured background and tracing
    pub fn from_config(config: &RenderingConfig) -> Self {
        Self {
            models: BTreeMap::new(),
            frames: 0,
            last_frame: FrameStats::default(),
            current: FrameStats::default(),
            clear_color: config.background_color,
            trace_draws: config.trace_draws,
        }
    }

    /// Number of models uploaded
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn model(&self, id: ModelId) -> Option<&UploadedModel> {
        self.models.get(&id)
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Statistics of the last completed frame (both eyes)
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }
}

impl StereoRenderer for FrameLogRenderer {
    type Error = RenderError;

    fn upload(&mut self, id: ModelId, geometry: &dyn DrawableGeometry) -> Result<(), RenderError> {
        if self.models.contains_key(&id) {
            return Err(RenderError::DuplicateUpload(id));
        }

        let mesh = geometry.mesh();
        let model = UploadedModel {
            vertex_count: mesh.vertex_count(),
            index_count: geometry.index_count(),
            lit: geometry.is_lit(),
            wireframe: geometry.supports_wireframe(),
        };
        debug!(
            "Uploaded model {}: {} vertices, {} indices ({:?})",
            id.0,
            model.vertex_count,
            model.index_count,
            mesh.index_format()
        );
        self.models.insert(id, model);
        Ok(())
    }

    fn draw_eye(&mut self, _projection: &Matrix, pass: &EyePass) -> Result<(), RenderError> {
        self.current.clears += 1;
        if self.trace_draws {
            trace!("{:?} eye: clear to {:?}", pass.eye, self.clear_color);
        }

        for draw in &pass.draws {
            let model = self
                .models
                .get(&draw.model)
                .ok_or(RenderError::UnknownModel(draw.model))?;
            if !draw.model_view.as_slice().iter().all(|x| x.is_finite()) {
                return Err(RenderError::NonFinite(draw.model));
            }

            match draw.mode {
                DrawMode::Triangles => self.current.triangle_draws += 1,
                DrawMode::Lines => self.current.line_draws += 1,
            }
            self.current.indices += model.index_count;

            if self.trace_draws {
                trace!(
                    "{:?} eye: model {} {:?} shift {:?}",
                    pass.eye,
                    draw.model.0,
                    draw.mode,
                    draw.color_shift
                );
            }
        }
        Ok(())
    }

    fn render_frame(&mut self, frame: &FrameOutput) -> Result<(), RenderError> {
        self.current = FrameStats::default();
        for pass in frame.passes() {
            self.draw_eye(&frame.projection, pass)?;
        }
        self.last_frame = self.current;
        self.frames += 1;
        Ok(())
    }
}
