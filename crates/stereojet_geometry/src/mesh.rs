//! Mesh storage and the drawable-geometry capability
//!
//! A [`Mesh`] is the upload contract with the rendering collaborator: flat
//! positions (4 floats per vertex), RGBA colours (4 floats per vertex), a
//! triangle-list index buffer and, for lit meshes, one normal per vertex.

use stereojet_math::generate_normals;

use crate::{GeometryError, IndexFormat};

/// An immutable indexed triangle mesh
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    positions: Vec<[f32; 4]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u32>,
    normals: Option<Vec<[f32; 3]>>,
}

impl Mesh {
    /// Create an unlit mesh, validating buffer shapes and index range
    pub fn new(
        positions: Vec<[f32; 4]>,
        colors: Vec<[f32; 4]>,
        indices: Vec<u32>,
    ) -> Result<Self, GeometryError> {
        if colors.len() != positions.len() {
            return Err(GeometryError::InvalidParameter(format!(
                "{} colors for {} vertices",
                colors.len(),
                positions.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(GeometryError::InvalidParameter(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(stereojet_math::MathError::IndexOutOfBounds {
                index: bad as usize,
                vertex_count: positions.len(),
            }
            .into());
        }

        Ok(Self {
            positions,
            colors,
            indices,
            normals: None,
        })
    }

    /// Create a lit mesh with smooth per-vertex normals
    pub fn with_normals(
        positions: Vec<[f32; 4]>,
        colors: Vec<[f32; 4]>,
        indices: Vec<u32>,
    ) -> Result<Self, GeometryError> {
        let mut mesh = Self::new(positions, colors, indices)?;
        mesh.normals = Some(generate_normals(mesh.flat_positions(), &mesh.indices)?);
        Ok(mesh)
    }

    /// Vertex positions (homogeneous points)
    pub fn positions(&self) -> &[[f32; 4]] {
        &self.positions
    }

    /// Vertex colours (RGBA)
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Triangle-list indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-vertex normals, if the mesh is lit
    pub fn normals(&self) -> Option<&[[f32; 3]]> {
        self.normals.as_deref()
    }

    /// Positions as a flat `f32` buffer (stride 4)
    pub fn flat_positions(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Colours as a flat `f32` buffer (stride 4)
    pub fn flat_colors(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Normals as a flat `f32` buffer (stride 3)
    pub fn flat_normals(&self) -> Option<&[f32]> {
        self.normals.as_deref().map(bytemuck::cast_slice)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Narrowest index width for this mesh
    pub fn index_format(&self) -> IndexFormat {
        IndexFormat::for_vertex_count(self.vertex_count())
    }

    /// Indices packed at [`Mesh::index_format`] width
    pub fn index_bytes(&self) -> Result<Vec<u8>, GeometryError> {
        self.index_format().pack(&self.indices)
    }
}

/// Something the rendering collaborator can upload and draw.
///
/// Implemented by every generator output and by [`crate::Model`].
pub trait DrawableGeometry {
    /// The backing mesh
    fn mesh(&self) -> &Mesh;

    /// Whether the mesh is also drawn as a line list (wireframe overlay)
    fn supports_wireframe(&self) -> bool {
        false
    }

    /// Number of indices to draw
    #[inline]
    fn index_count(&self) -> usize {
        self.mesh().index_count()
    }

    /// Whether normals are present, i.e. the mesh takes part in lighting
    #[inline]
    fn is_lit(&self) -> bool {
        self.mesh().normals().is_some()
    }
}

impl DrawableGeometry for Mesh {
    fn mesh(&self) -> &Mesh {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Vec<[f32; 4]>, Vec<[f32; 4]>, Vec<u32>) {
        (
            vec![
                [0.0, 0.0, 0.0, 1.0],
                [1.0, 0.0, 0.0, 1.0],
                [0.0, 1.0, 0.0, 1.0],
            ],
            vec![[1.0, 0.0, 0.0, 1.0]; 3],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_unlit_mesh() {
        let (p, c, i) = triangle();
        let mesh = Mesh::new(p, c, i).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.normals().is_none());
        assert!(!mesh.is_lit());
        assert_eq!(mesh.flat_positions().len(), 12);
        assert_eq!(&mesh.flat_positions()[4..8], &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_lit_mesh() {
        let (p, c, i) = triangle();
        let mesh = Mesh::with_normals(p, c, i).unwrap();
        assert!(mesh.is_lit());
        assert_eq!(mesh.normals().unwrap()[0], [0.0, 0.0, 1.0]);
        assert_eq!(mesh.flat_normals().unwrap().len(), 9);
    }

    #[test]
    fn test_rejects_color_count_mismatch() {
        let (p, _, i) = triangle();
        assert!(matches!(
            Mesh::new(p, vec![[1.0; 4]; 2], i),
            Err(GeometryError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_partial_triangle() {
        let (p, c, _) = triangle();
        assert!(Mesh::new(p, c, vec![0, 1]).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let (p, c, _) = triangle();
        assert!(matches!(
            Mesh::new(p, c, vec![0, 1, 3]),
            Err(GeometryError::Math(_))
        ));
    }

    #[test]
    fn test_index_bytes_use_narrow_width() {
        let (p, c, i) = triangle();
        let mesh = Mesh::new(p, c, i).unwrap();
        assert_eq!(mesh.index_format(), IndexFormat::U8);
        assert_eq!(mesh.index_bytes().unwrap(), vec![0, 1, 2]);
    }
}
