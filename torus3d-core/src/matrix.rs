/// Dense matrix used by the rotation pipeline
use nalgebra::{DMatrix, Vector3};

use crate::error::MatrixError;

/// Rectangular matrix of `f64`, stored row by row in a [`DMatrix`]
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// The 0x0 matrix
    pub fn empty() -> Self {
        Self {
            data: DMatrix::zeros(0, 0),
        }
    }

    /// Build from a sequence of rows; every row must have the same length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(MatrixError::Ragged {
                row,
                expected,
                found,
            });
        }

        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Self {
            data: DMatrix::from_row_slice(rows.len(), expected, &flat),
        })
    }

    pub fn from_array<const R: usize, const C: usize>(rows: [[f64; C]; R]) -> Self {
        Self {
            data: DMatrix::from_fn(R, C, |i, j| rows[i][j]),
        }
    }

    /// A 1xn row vector
    pub fn row(values: &[f64]) -> Self {
        Self {
            data: DMatrix::from_row_slice(1, values.len(), values),
        }
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get((row, col)).copied()
    }

    /// Row-by-column product `self * rhs`
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols() != rhs.nrows() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        Ok(Self {
            data: &self.data * &rhs.data,
        })
    }

    /// Element-wise scaling: entry `(i, j)` is multiplied by `factors[j]`.
    ///
    /// This is not a matrix-vector product. On a length mismatch the error is
    /// logged and an empty matrix comes back; callers check [`Matrix::is_empty`].
    pub fn scale_columns(&self, factors: &[f64]) -> Matrix {
        if factors.len() != self.ncols() {
            tracing::error!(
                expected = self.ncols(),
                found = factors.len(),
                "vector length must equal the matrix column count"
            );
            return Self::empty();
        }

        Self {
            data: DMatrix::from_fn(self.nrows(), self.ncols(), |i, j| {
                self.data[(i, j)] * factors[j]
            }),
        }
    }

    /// Read a 1x3 row back as a vector
    pub fn to_vector3(&self) -> Result<Vector3<f64>, MatrixError> {
        if self.shape() != (1, 3) {
            return Err(MatrixError::Shape {
                expected: (1, 3),
                found: self.shape(),
            });
        }
        Ok(Vector3::new(
            self.data[(0, 0)],
            self.data[(0, 1)],
            self.data[(0, 2)],
        ))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::empty()
    }
}
