//! Geometry error types

use std::fmt;
use stereojet_math::MathError;

/// Error type for mesh construction
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Underlying algebra failure (bad buffer shapes, bad indices)
    Math(MathError),
    /// A generator parameter is outside its valid range
    InvalidParameter(String),
    /// Index-array list and vertex-count list have different lengths
    PartCountMismatch {
        /// Number of index arrays
        index_arrays: usize,
        /// Number of vertex counts
        vertex_counts: usize,
    },
    /// A colour string could not be parsed
    InvalidColor(String),
    /// Indices do not fit the requested index width
    IndexOverflow {
        /// Largest index in the mesh
        max_index: u32,
        /// Bits available per index
        bits: u32,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Math(err) => write!(f, "Geometry math error: {}", err),
            GeometryError::InvalidParameter(msg) => write!(f, "Invalid generator parameter: {}", msg),
            GeometryError::PartCountMismatch { index_arrays, vertex_counts } => write!(
                f,
                "Part count mismatch: {} index arrays but {} vertex counts",
                index_arrays, vertex_counts
            ),
            GeometryError::InvalidColor(value) => write!(f, "Invalid color: {}", value),
            GeometryError::IndexOverflow { max_index, bits } => {
                write!(f, "Index {} does not fit in {} bits", max_index, bits)
            }
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::Math(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MathError> for GeometryError {
    fn from(err: MathError) -> Self {
        GeometryError::Math(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_from_math_error() {
        let err: GeometryError = MathError::InvalidDimension { expected: 3, found: 2 }.into();
        assert!(matches!(err, GeometryError::Math(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = GeometryError::PartCountMismatch { index_arrays: 3, vertex_counts: 2 };
        assert!(format!("{}", err).contains("3 index arrays"));

        let err = GeometryError::InvalidColor("#12".to_string());
        assert!(format!("{}", err).contains("#12"));
        assert!(err.source().is_none());
    }
}
