/// Error types for the terminal front end
use std::io;
use thiserror::Error;
use torus3d_core::{GeometryError, MatrixError};

/// Errors that stop the animation
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to get console size: {0}")]
    ViewportQuery(#[source] io::Error),

    #[error("console reported an empty viewport ({width}x{height})")]
    EmptyViewport { width: u16, height: u16 },

    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
