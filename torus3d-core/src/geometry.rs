/// Point primitives for 3D rendering
use nalgebra::{Point3, Vector3};

/// A point in model space
///
/// Value type: transforms produce new points instead of mutating existing ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point3D {
    position: Point3<f64>,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Vector from `origin` to this point
    pub fn offset_from(&self, origin: &Point3D) -> Vector3<f64> {
        self.position - origin.position
    }

    /// This point moved by `offset`
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            position: self.position + *offset,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
    }
}

impl From<Point3<f64>> for Point3D {
    fn from(position: Point3<f64>) -> Self {
        Self { position }
    }
}

/// A point in screen space, measured in character cells
///
/// Equality is exact, component by component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Grid cell `(column, row)` covered by this point, if it is inside a
    /// `width` x `height` viewport
    pub fn cell(&self, width: usize, height: usize) -> Option<(usize, usize)> {
        let inside = |v: f64, limit: usize| v.is_finite() && v >= 0.0 && v < limit as f64;
        if inside(self.x, width) && inside(self.y, height) {
            Some((self.x as usize, self.y as usize))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point3d_offset_and_translate() {
        let center = Point3D::new(1.0, 2.0, 3.0);
        let point = Point3D::new(4.0, 6.0, 3.0);

        let offset = point.offset_from(&center);
        assert_eq!(offset, Vector3::new(3.0, 4.0, 0.0));

        let back = center.translated(&offset);
        assert_eq!(back.x(), 4.0);
        assert_eq!(back.y(), 6.0);
        assert_eq!(back.z(), 3.0);
    }

    #[test]
    fn test_point2d_exact_equality() {
        assert_eq!(Point2D::new(1.0, 2.0), Point2D::new(1.0, 2.0));
        assert_ne!(Point2D::new(1.0, 2.0), Point2D::new(1.0, 2.0 + 1e-12));
    }

    #[test]
    fn test_point2d_cell_bounds() {
        assert_eq!(Point2D::new(0.0, 0.0).cell(80, 24), Some((0, 0)));
        assert_eq!(Point2D::new(79.0, 23.0).cell(80, 24), Some((79, 23)));
        assert_eq!(Point2D::new(80.0, 0.0).cell(80, 24), None);
        assert_eq!(Point2D::new(0.0, 24.0).cell(80, 24), None);
        assert_eq!(Point2D::new(-1.0, 5.0).cell(80, 24), None);
        assert_eq!(Point2D::new(f64::NAN, 5.0).cell(80, 24), None);
        assert_eq!(Point2D::new(f64::INFINITY, 5.0).cell(80, 24), None);
    }
}
