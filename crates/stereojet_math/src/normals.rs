//! Smooth per-vertex normals for indexed triangle meshes

use crate::{vector, MathError};

/// Number of floats per vertex position (x, y, z, w)
pub const POSITION_STRIDE: usize = 4;

/// Average face normals onto vertices.
///
/// `positions` is a flat buffer of homogeneous points (stride 4) and
/// `indices` a triangle list (stride 3). Each triangle contributes its
/// unnormalized face normal `(v1 - v0) x (v2 - v0)` to all three corners, so
/// larger faces weigh more. A vertex that no triangle references ends up
/// with a NaN normal.
pub fn generate_normals(positions: &[f32], indices: &[u32]) -> Result<Vec<[f32; 3]>, MathError> {
    if positions.len() % POSITION_STRIDE != 0 {
        return Err(MathError::DimensionMismatch {
            left: positions.len(),
            right: positions.len() / POSITION_STRIDE * POSITION_STRIDE,
        });
    }
    if indices.len() % 3 != 0 {
        return Err(MathError::DimensionMismatch {
            left: indices.len(),
            right: indices.len() / 3 * 3,
        });
    }

    let vertex_count = positions.len() / POSITION_STRIDE;
    let mut sums = vec![[0.0f32; 3]; vertex_count];
    let mut counts = vec![0u32; vertex_count];

    for tri in indices.chunks_exact(3) {
        let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let v0 = point(positions, corners[0])?;
        let edge1 = vector::sub(point(positions, corners[1])?, v0)?;
        let edge2 = vector::sub(point(positions, corners[2])?, v0)?;
        let face = vector::cross(&edge1, &edge2)?;

        for idx in corners {
            for (sum, component) in sums[idx].iter_mut().zip(face) {
                *sum += component;
            }
            counts[idx] += 1;
        }
    }

    let normals = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| {
            let average = vector::scale(sum, 1.0 / count as f32);
            let n = vector::normalize(&average);
            [n[0], n[1], n[2]]
        })
        .collect();

    Ok(normals)
}

/// xyz of the vertex at `idx`
fn point(positions: &[f32], idx: usize) -> Result<&[f32], MathError> {
    let vertex_count = positions.len() / POSITION_STRIDE;
    if idx >= vertex_count {
        return Err(MathError::IndexOutOfBounds { index: idx, vertex_count });
    }
    Ok(&positions[idx * POSITION_STRIDE..idx * POSITION_STRIDE + 3])
}
