//! Hand-authored solids: the control-surface wedge and the jet body
//!
//! Vertex, colour and index tables are fixed. The body is assembled from
//! three parts (two wings and the fuselage) whose index arrays are rebased
//! onto the concatenated vertex buffer.

use log::debug;

use crate::index::concat_indices;
use crate::{DrawableGeometry, GeometryError, Mesh};

/// Which hand-authored solid a [`Solid`] holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolidKind {
    /// Wedge used for wing flaps and stabilizers
    JetFlap,
    /// Wings and fuselage
    JetBody,
}

/// A lit, fixed-geometry mesh
#[derive(Clone, Debug)]
pub struct Solid {
    kind: SolidKind,
    mesh: Mesh,
}

impl Solid {
    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    /// Control-surface wedge: a 0.08 tall panel in the YZ plane, 5 vertices
    pub fn jet_flap() -> Result<Self, GeometryError> {
        let height: f32 = 0.08;
        let top_length: f32 = 0.03;
        let bottom_length: f32 = 0.05;

        let positions = vec![
            [0.0, 0.0, 0.0, 1.0],
            [0.0, bottom_length, 0.0, 1.0],
            [0.0, 0.0, height, 1.0],
            [0.0, top_length, height, 1.0],
            [0.0, top_length, 0.0, 1.0],
        ];
        let colors = vec![
            [0.45, 0.45, 0.55, 1.0],
            [0.4, 0.4, 0.5, 1.0],
            [0.5, 0.5, 0.6, 1.0],
            [0.48, 0.48, 0.58, 1.0],
            [0.45, 0.45, 0.55, 1.0],
        ];
        let indices = vec![
            0, 1, 3,
            0, 2, 3,
            0, 4, 3,
        ];

        Self::build(SolidKind::JetFlap, positions, colors, indices)
    }

    /// Jet body: left wing, right wing and a three-layer fuselage
    pub fn jet_body() -> Result<Self, GeometryError> {
        let wing_center_start = 0.05;
        let wing_start = 0.5;
        let wing_end = -0.1;
        let wing_span = 0.3;

        let center_start = 0.75;
        let center_end = -0.25;
        let center_top_span = 0.025;
        let center_middle_span = 0.075;
        let center_bottom_span = 0.05;
        let center_top_height = 0.015;
        let center_bottom_height = 0.03;

        let left_wing: [[f32; 4]; 4] = [
            [-wing_center_start, wing_start, -0.001, 1.0],
            [-wing_span, 0.0, 0.0, 1.0],
            [-wing_center_start, 0.0, 0.0, 1.0],
            [-wing_center_start, wing_end, -0.001, 1.0],
        ];
        let right_wing: [[f32; 4]; 4] = [
            [wing_center_start, wing_start, -0.001, 1.0],
            [wing_span, 0.0, 0.0, 1.0],
            [wing_center_start, 0.0, 0.0, 1.0],
            [wing_center_start, wing_end, -0.001, 1.0],
        ];
        let wing_colors: [[f32; 4]; 4] = [
            [0.6, 0.6, 0.6, 1.0],
            [0.6, 0.6, 0.65, 1.0],
            [0.6, 0.6, 0.70, 1.0],
            [0.6, 0.6, 0.68, 1.0],
        ];
        let wing_indices: [u32; 6] = [
            0, 1, 2,
            3, 1, 2,
        ];

        // Bottom, middle and top layers, each a quad from nose to tail
        let center: [[f32; 4]; 12] = [
            [-center_bottom_span, center_start, -center_bottom_height, 1.0],
            [-center_bottom_span, center_end, -center_bottom_height, 1.0],
            [center_bottom_span, center_start, -center_bottom_height, 1.0],
            [center_bottom_span, center_end, -center_bottom_height, 1.0],
            [-center_middle_span, center_start, 0.0, 1.0],
            [-center_middle_span, center_end, 0.0, 1.0],
            [center_middle_span, center_start, 0.0, 1.0],
            [center_middle_span, center_end, 0.0, 1.0],
            [-center_top_span, center_start, center_top_height, 1.0],
            [-center_top_span, center_end, center_top_height, 1.0],
            [center_top_span, center_start, center_top_height, 1.0],
            [center_top_span, center_end, center_top_height, 1.0],
        ];
        let center_colors: [[f32; 4]; 12] = [
            [0.3, 0.3, 0.4, 1.0],
            [0.35, 0.35, 0.45, 1.0],
            [0.3, 0.3, 0.4, 1.0],
            [0.35, 0.35, 0.45, 1.0],
            [0.4, 0.4, 0.5, 1.0],
            [0.45, 0.45, 0.55, 1.0],
            [0.4, 0.4, 0.5, 1.0],
            [0.45, 0.45, 0.55, 1.0],
            [0.5, 0.5, 0.6, 1.0],
            [0.55, 0.55, 0.65, 1.0],
            [0.5, 0.5, 0.6, 1.0],
            [0.55, 0.55, 0.65, 1.0],
        ];
        let center_indices: [u32; 42] = [
            0, 1, 3, 0, 2, 3,
            4, 5, 7, 4, 6, 7,
            0, 1, 5, 0, 4, 5,
            2, 3, 7, 2, 6, 7,
            8, 9, 11, 8, 10, 11,
            10, 11, 7, 10, 6, 7,
            8, 9, 5, 8, 4, 5,
        ];

        let positions: Vec<[f32; 4]> = [&left_wing[..], &right_wing[..], &center[..]].concat();
        let colors: Vec<[f32; 4]> = [&wing_colors[..], &wing_colors[..], &center_colors[..]].concat();
        let indices = concat_indices(
            &[&wing_indices[..], &wing_indices[..], &center_indices[..]],
            &[left_wing.len(), right_wing.len(), center.len()],
        )?;

        Self::build(SolidKind::JetBody, positions, colors, indices)
    }

    fn build(
        kind: SolidKind,
        positions: Vec<[f32; 4]>,
        colors: Vec<[f32; 4]>,
        indices: Vec<u32>,
    ) -> Result<Self, GeometryError> {
        let mesh = Mesh::with_normals(positions, colors, indices)?;
        debug!(
            "Built {:?}: {} vertices, {} triangles",
            kind,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(Self { kind, mesh })
    }
}

impl DrawableGeometry for Solid {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}
