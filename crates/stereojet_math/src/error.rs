//! Algebra error types
//!
//! Every variant signals a caller bug (mismatched operand shapes, bad
//! indices). Degenerate numerics such as normalizing a zero vector are not
//! errors: they produce non-finite values that flow on to the caller.

use std::fmt;

/// Error type for vector/matrix operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// Operand lengths/shapes disagree
    DimensionMismatch {
        /// Length (or inner dimension) of the left operand
        left: usize,
        /// Length (or inner dimension) of the right operand
        right: usize,
    },
    /// Operation is only defined for a specific arity (e.g. cross product)
    InvalidDimension {
        /// Required arity
        expected: usize,
        /// Arity that was supplied
        found: usize,
    },
    /// A triangle index points past the end of the vertex buffer
    IndexOutOfBounds {
        /// The offending index
        index: usize,
        /// Number of vertices available
        vertex_count: usize,
    },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DimensionMismatch { left, right } => {
                write!(f, "Dimension mismatch: len a: {} != len b: {}", left, right)
            }
            MathError::InvalidDimension { expected, found } => {
                write!(f, "Invalid dimension: expected {}-vectors, got {}", expected, found)
            }
            MathError::IndexOutOfBounds { index, vertex_count } => {
                write!(f, "Index {} out of bounds for {} vertices", index, vertex_count)
            }
        }
    }
}

impl std::error::Error for MathError {}
