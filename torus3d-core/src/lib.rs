/// torus3d core library - point math, rotation and projection
///
/// This library holds the stateless pipeline behind the terminal renderer:
/// surface sampling, rigid rotation through row-vector matrix products, and
/// perspective projection onto a character-cell viewport.

pub mod config;
pub mod error;
pub mod geometry;
pub mod matrix;
pub mod projection;
pub mod torus;
pub mod transform;

// Re-export commonly used types
pub use config::SceneConfig;
pub use error::{GeometryError, MatrixError};
pub use geometry::{Point2D, Point3D};
pub use matrix::Matrix;
pub use projection::{DepthPolicy, Projector};
pub use torus::Torus;
pub use transform::{EulerAngles, Transform};
