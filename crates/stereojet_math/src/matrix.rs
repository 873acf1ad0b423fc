//! Rectangular row-major matrices
//!
//! Matrices are stored as a flat row-major buffer. All transform builders
//! in this crate use the column-vector convention (`M * v`, translation in
//! the last column), so [`Matrix::as_slice`] is exactly the flattened
//! row-major layout a renderer uploads with "transpose on upload".

use crate::{vector, MathError};

/// 4x4 matrix as nested rows, the shape GPU uniform structs expect
pub type Mat4 = [[f32; 4]; 4];

/// A rectangular matrix of `f32` stored row by row
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Build a matrix from row vectors.
    ///
    /// Fails with `DimensionMismatch` if the rows have different lengths.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, MathError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MathError::DimensionMismatch {
                    left: cols,
                    right: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a 4x4 matrix from nested rows
    pub fn from_mat4(m: Mat4) -> Self {
        let flat: [f32; 16] = bytemuck::cast(m);
        Self {
            rows: 4,
            cols: 4,
            data: flat.to_vec(),
        }
    }

    /// The `d x d` identity matrix
    pub fn identity(d: usize) -> Self {
        let mut data = vec![0.0; d * d];
        for i in 0..d {
            data[i * d + i] = 1.0;
        }
        Self { rows: d, cols: d, data }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (`row`, `col`). Panics when out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col]
    }

    /// Overwrite the entry at (`row`, `col`). Panics when out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < self.rows && col < self.cols, "matrix index out of range");
        self.data[row * self.cols + col] = value;
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Copy out one column
    pub fn column(&self, col: usize) -> Vec<f32> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// Flattened row-major buffer
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Nested rows for a 4x4 matrix, `None` for any other shape
    pub fn to_mat4(&self) -> Option<Mat4> {
        if self.rows != 4 || self.cols != 4 {
            return None;
        }
        let flat: [f32; 16] = self.data.as_slice().try_into().ok()?;
        Some(bytemuck::cast(flat))
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Matrix product `self * rhs`; requires `cols(self) == rows(rhs)`
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix, MathError> {
        if self.cols != rhs.rows {
            return Err(MathError::DimensionMismatch {
                left: self.cols,
                right: rhs.rows,
            });
        }
        let mut data = vec![0.0; self.rows * rhs.cols];
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                data[i * rhs.cols + j] = (0..self.cols)
                    .map(|k| self.get(i, k) * rhs.get(k, j))
                    .sum();
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Matrix-vector product `self * v`; requires `cols(self) == len(v)`
    pub fn mul_vector(&self, v: &[f32]) -> Result<Vec<f32>, MathError> {
        (0..self.rows).map(|r| vector::dot(self.row(r), v)).collect()
    }

    /// Multiply every entry by a scalar
    pub fn scaled(&self, s: f32) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: vector::scale(&self.data, s),
        }
    }
}

impl std::ops::Mul<f32> for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, s: f32) -> Matrix {
        self.scaled(s)
    }
}

impl std::ops::Mul<f32> for &Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, s: f32) -> Matrix {
        self.scaled(s)
    }
}
