//! Dimension-generic vector operations
//!
//! Vectors are plain `f32` slices whose arity is fixed by the call site
//! (2, 3 or 4). Homogeneous points carry a trailing `1`, directions a `0`.
//! Binary operations check that both operands have the same length.

use crate::MathError;

/// Fail with `DimensionMismatch` unless `u` and `v` have equal length
#[inline]
fn check_len(u: &[f32], v: &[f32]) -> Result<(), MathError> {
    if u.len() != v.len() {
        return Err(MathError::DimensionMismatch {
            left: u.len(),
            right: v.len(),
        });
    }
    Ok(())
}

/// Element-wise sum
pub fn add(u: &[f32], v: &[f32]) -> Result<Vec<f32>, MathError> {
    check_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a + b).collect())
}

/// Element-wise difference `u - v`
pub fn sub(u: &[f32], v: &[f32]) -> Result<Vec<f32>, MathError> {
    check_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a - b).collect())
}

/// Dot product
pub fn dot(u: &[f32], v: &[f32]) -> Result<f32, MathError> {
    check_len(u, v)?;
    Ok(u.iter().zip(v).map(|(a, b)| a * b).sum())
}

/// Right-handed cross product, defined for 3-vectors only
pub fn cross(u: &[f32], v: &[f32]) -> Result<[f32; 3], MathError> {
    for len in [u.len(), v.len()] {
        if len != 3 {
            return Err(MathError::InvalidDimension { expected: 3, found: len });
        }
    }
    Ok([
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}

/// Multiply every component by a scalar
pub fn scale(v: &[f32], s: f32) -> Vec<f32> {
    v.iter().map(|x| x * s).collect()
}

/// Euclidean norm
#[inline]
pub fn length(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Divide by the Euclidean norm.
///
/// A zero-length input is not guarded: every component comes back NaN.
/// Use [`try_normalize`] where degenerate input must be detected.
pub fn normalize(v: &[f32]) -> Vec<f32> {
    let magnitude = length(v);
    v.iter().map(|x| x / magnitude).collect()
}

/// Normalize, returning `None` when the norm is zero or not finite
pub fn try_normalize(v: &[f32]) -> Option<Vec<f32>> {
    let magnitude = length(v);
    if magnitude > 0.0 && magnitude.is_finite() {
        Some(v.iter().map(|x| x / magnitude).collect())
    } else {
        None
    }
}

/// Copy a vector into a fixed-size array, checking its arity
pub fn to_array<const N: usize>(v: &[f32]) -> Result<[f32; N], MathError> {
    v.try_into().map_err(|_| MathError::DimensionMismatch {
        left: v.len(),
        right: N,
    })
}
