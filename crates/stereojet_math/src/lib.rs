//! Linear algebra core for stereojet
//!
//! This crate provides the small, dimension-generic vector/matrix toolkit the
//! rest of the workspace builds on.
//!
//! ## Modules
//!
//! - [`vector`] - slice-based vector operations (add, sub, dot, cross, normalize)
//! - [`Matrix`] - rectangular row-major matrix with multiply/transpose/identity
//! - [`transform`] - look-at view, perspective projection and affine TRS builders
//! - [`normals`] - smooth per-vertex normals for indexed triangle meshes
//!
//! Shape errors are reported as [`MathError`]; degenerate numerics
//! (zero-length normalize, `near == far`) are not checked and surface as
//! non-finite values.

mod error;
pub mod matrix;
pub mod normals;
pub mod transform;
pub mod vector;

pub use error::MathError;
pub use matrix::{Mat4, Matrix};
pub use normals::generate_normals;
pub use transform::{perspective_matrix, transform, view_matrix, Affine};
