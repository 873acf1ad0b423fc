//! Height-field terrain patches
//!
//! A patch is a regular grid over `[-1, 1]²` in the XY plane. Heights follow
//! a trough/peak profile across X: near the centreline they are small noise,
//! further out they grow linearly with distance from the trough, scaled by a
//! random factor. Colours are a purple hue whose lightness tracks height.

use log::debug;
use rand::Rng;

use crate::color::hsl_to_rgb;
use crate::{DrawableGeometry, GeometryError, Mesh};

/// Hue shared by every terrain vertex (purple/pink)
const TERRAIN_HUE: f32 = 0.8;
/// Height of the random noise inside the trough
const TROUGH_NOISE: f32 = 0.1;

/// Shape parameters for a terrain patch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainParams {
    /// Half-width of the flat centre band, in `[0, 1)`
    pub trough_width: f32,
    /// Maximum height at the patch edges
    pub peak_height: f32,
    /// Grid points along Y
    pub length_points: usize,
    /// Grid points along X
    pub width_points: usize,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            trough_width: 0.4,
            peak_height: 0.8,
            length_points: 20,
            width_points: 20,
        }
    }
}

impl TerrainParams {
    /// Create params with the given shape
    pub fn new(trough_width: f32, peak_height: f32, length_points: usize, width_points: usize) -> Self {
        Self {
            trough_width,
            peak_height,
            length_points,
            width_points,
        }
    }

    fn validate(&self) -> Result<(), GeometryError> {
        if self.length_points < 2 || self.width_points < 2 {
            return Err(GeometryError::InvalidParameter(format!(
                "terrain grid needs at least 2x2 points, got {}x{}",
                self.length_points, self.width_points
            )));
        }
        if !(0.0..1.0).contains(&self.trough_width) {
            return Err(GeometryError::InvalidParameter(format!(
                "trough width {} outside [0, 1)",
                self.trough_width
            )));
        }
        if self.peak_height.is_nan() || self.peak_height <= 0.0 {
            return Err(GeometryError::InvalidParameter(format!(
                "peak height must be positive, got {}",
                self.peak_height
            )));
        }
        Ok(())
    }

    /// Height at grid column `x` for a random draw `r` in `[0, 1)`
    fn height(&self, x: f32, r: f32) -> f32 {
        let distance = x.abs();
        if distance < self.trough_width {
            r * TROUGH_NOISE
        } else {
            let factor = (distance - self.trough_width) / (1.0 - self.trough_width);
            r * self.peak_height * factor
        }
    }
}

/// One generated terrain patch
#[derive(Clone, Debug)]
pub struct TerrainPatch {
    params: TerrainParams,
    mesh: Mesh,
}

impl TerrainPatch {
    /// Generate a patch with fresh thread-local randomness
    pub fn generate(params: &TerrainParams) -> Result<Self, GeometryError> {
        Self::generate_with(params, &mut rand::rng())
    }

    /// Generate a patch drawing heights and saturations from `rng`
    pub fn generate_with<R: Rng + ?Sized>(
        params: &TerrainParams,
        rng: &mut R,
    ) -> Result<Self, GeometryError> {
        params.validate()?;

        let (rows, cols) = (params.length_points, params.width_points);
        let length_step = 2.0 / (rows - 1) as f32;
        let width_step = 2.0 / (cols - 1) as f32;

        let mut positions = Vec::with_capacity(rows * cols);
        let mut colors = Vec::with_capacity(rows * cols);

        for i in 0..rows {
            let y = i as f32 * length_step - 1.0;
            for j in 0..cols {
                let x = j as f32 * width_step - 1.0;
                let z = params.height(x, rng.random::<f32>());
                positions.push([x, y, z, 1.0]);

                let saturation = 0.6 + rng.random::<f32>() * 0.2;
                let lightness = 0.5 + (z / params.peak_height) * 0.5;
                let [r, g, b] = hsl_to_rgb(TERRAIN_HUE, saturation, lightness);
                colors.push([r, g, b, 1.0]);
            }
        }

        let indices = grid_indices(rows, cols);
        let mesh = Mesh::with_normals(positions, colors, indices)?;

        debug!(
            "Generated terrain patch: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(Self { params: *params, mesh })
    }

    /// Parameters this patch was generated from
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }
}

/// Two triangles per grid cell: `(tl, bl, tr)` and `(tr, bl, br)`
fn grid_indices(rows: usize, cols: usize) -> Vec<u32> {
    let mut indices = Vec::with_capacity((rows - 1) * (cols - 1) * 6);
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let top_left = (i * cols + j) as u32;
            let top_right = top_left + 1;
            let bottom_left = ((i + 1) * cols + j) as u32;
            let bottom_right = bottom_left + 1;

            indices.extend_from_slice(&[top_left, bottom_left, top_right]);
            indices.extend_from_slice(&[top_right, bottom_left, bottom_right]);
        }
    }
    indices
}

impl DrawableGeometry for TerrainPatch {
    fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    fn supports_wireframe(&self) -> bool {
        true
    }
}
