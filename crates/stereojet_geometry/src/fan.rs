//! Radial triangle fans (discs and half-discs)

use std::f32::consts::{PI, TAU};

use log::debug;

use crate::{DrawableGeometry, GeometryError, Mesh};

/// Gradient steps in the rim colour ramp
const GRADIENT_LEVEL: f32 = 10.0;

/// Shape of a fan in the XZ plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FanParams {
    pub radius: f32,
    pub segments: u32,
    /// Start angle in radians
    pub start_angle: f32,
    /// End angle in radians
    pub end_angle: f32,
}

impl Default for FanParams {
    fn default() -> Self {
        Self {
            radius: 1.0,
            segments: 32,
            start_angle: 0.0,
            end_angle: TAU,
        }
    }
}

impl FanParams {
    /// Upper half-disc used for the sun
    pub fn sun() -> Self {
        Self {
            radius: 1.0,
            segments: 64,
            start_angle: 0.0,
            end_angle: PI,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_angles(mut self, start_angle: f32, end_angle: f32) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Vertex colour for a point at height `z`.
    ///
    /// Components above 1 are intentional; the consumer saturates them.
    fn color_at(&self, z: f32) -> [f32; 4] {
        let t = (z + self.radius) / (2.0 * self.radius);
        let ramp = (t + GRADIENT_LEVEL) / GRADIENT_LEVEL;
        [2.0, 1.0 + ramp, 1.0 + ramp, 2.0]
    }
}

/// An unlit triangle fan around the origin
#[derive(Clone, Debug)]
pub struct Fan {
    params: FanParams,
    mesh: Mesh,
}

impl Fan {
    pub fn new(params: &FanParams) -> Result<Self, GeometryError> {
        if params.segments == 0 {
            return Err(GeometryError::InvalidParameter("fan needs at least one segment".into()));
        }
        if params.radius <= 0.0 {
            return Err(GeometryError::InvalidParameter(format!(
                "fan radius must be positive, got {}",
                params.radius
            )));
        }

        let segments = params.segments as usize;
        let step = (params.end_angle - params.start_angle) / params.segments as f32;

        let mut positions = Vec::with_capacity(segments + 2);
        let mut colors = Vec::with_capacity(segments + 2);
        let mut indices = Vec::with_capacity(segments * 3);

        positions.push([0.0, 0.0, 0.0, 1.0]);
        colors.push(params.color_at(0.0));

        for i in 0..=params.segments {
            let angle = params.start_angle + i as f32 * step;
            let x = params.radius * angle.cos();
            let z = params.radius * angle.sin();
            positions.push([x, 0.0, z, 1.0]);
            colors.push(params.color_at(z));

            if i > 0 {
                indices.extend_from_slice(&[0, i, i + 1]);
            }
        }

        let mesh = Mesh::new(positions, colors, indices)?;
        debug!(
            "Generated fan: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(Self { params: *params, mesh })
    }

    pub fn params(&self) -> &FanParams {
        &self.params
    }
}

impl DrawableGeometry for Fan {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}
