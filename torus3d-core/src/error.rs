/// Error types for the math core
use thiserror::Error;

/// Errors raised by [`Matrix`](crate::Matrix) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("cannot multiply a {}x{} matrix by a {}x{} matrix", left.0, left.1, right.0, right.1)]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected a {}x{} matrix, found {}x{}", expected.0, expected.1, found.0, found.1)]
    Shape {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Errors raised while building surface geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{name} radius must be finite and positive, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },

    #[error("surface resolution must be at least one sample per turn")]
    InvalidResolution,

    #[error("surface center must have finite coordinates")]
    NonFiniteCenter,
}
