/// Rotation matrices and rigid rotation of point sets
use crate::error::MatrixError;
use crate::geometry::Point3D;
use crate::matrix::Matrix;

/// Rotation angles around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Same angles, negated and listed Z-first
    pub fn reversed(&self) -> Self {
        Self::new(-self.z, -self.y, -self.x)
    }
}

impl Default for EulerAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation matrix builder
pub struct Transform;

impl Transform {
    pub fn rotation_x(angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        Matrix::from_array([[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]])
    }

    pub fn rotation_y(angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        Matrix::from_array([[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]])
    }

    pub fn rotation_z(angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        Matrix::from_array([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Rotate every point rigidly about `center`, overwriting it in place.
    ///
    /// Each point is taken as a row vector and multiplied by X, then Y, then Z.
    /// The three products are applied one after another, never pre-combined.
    pub fn rotate_about(
        points: &mut [Point3D],
        center: &Point3D,
        angles: &EulerAngles,
    ) -> Result<(), MatrixError> {
        let rx = Self::rotation_x(angles.x);
        let ry = Self::rotation_y(angles.y);
        let rz = Self::rotation_z(angles.z);

        for point in points.iter_mut() {
            let local = point.offset_from(center);
            let rotated = Matrix::row(local.as_slice())
                .multiply(&rx)?
                .multiply(&ry)?
                .multiply(&rz)?
                .to_vector3()?;
            *point = center.translated(&rotated);
        }

        Ok(())
    }
}
