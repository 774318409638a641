/// Perspective projection onto a character-cell viewport
use crate::geometry::{Point2D, Point3D};

/// Focal length used by the scene, in cells
pub const FOCAL_LENGTH: f64 = 80.0;

/// What to do with points whose depth makes the perspective divide blow up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthPolicy {
    /// Skip points with `z ≈ 0` and any point that projects to a non-finite
    /// coordinate
    #[default]
    Clip,
    /// Emit every point, including non-finite coordinates; the rasterizer
    /// drops them later
    Passthrough,
}

/// Maps 3D points to screen cells with `screen = half_viewport + p * (F / z)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    pub width: u16,
    pub height: u16,
    pub focal_length: f64,
    pub depth_policy: DepthPolicy,
}

impl Projector {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            focal_length: FOCAL_LENGTH,
            depth_policy: DepthPolicy::Clip,
        }
    }

    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn with_depth_policy(mut self, depth_policy: DepthPolicy) -> Self {
        self.depth_policy = depth_policy;
        self
    }

    /// Viewport center; the halves use integer division
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width / 2), f64::from(self.height / 2))
    }

    /// Project a single point, truncating toward zero to whole cells
    pub fn project_point(&self, point: &Point3D) -> Option<Point2D> {
        if self.depth_policy == DepthPolicy::Clip && point.z().abs() <= f64::EPSILON {
            return None;
        }

        let (center_x, center_y) = self.center();
        let scale = self.focal_length / point.z();
        let screen = Point2D::new(
            (center_x + point.x() * scale).trunc(),
            (center_y + point.y() * scale).trunc(),
        );

        match self.depth_policy {
            DepthPolicy::Clip if !(screen.x().is_finite() && screen.y().is_finite()) => None,
            _ => Some(screen),
        }
    }

    pub fn project(&self, points: &[Point3D]) -> Vec<Point2D> {
        points.iter().filter_map(|p| self.project_point(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_focal_depth_maps_to_center() {
        let projector = Projector::new(80, 24);
        let screen = projector.project_point(&Point3D::new(0.0, 0.0, FOCAL_LENGTH)).unwrap();
        assert_eq!(screen, Point2D::new(40.0, 12.0));
    }

    #[test]
    fn test_center_uses_integer_halves() {
        let projector = Projector::new(81, 25);
        assert_eq!(projector.center(), (40.0, 12.0));
    }

    #[test]
    fn test_perspective_divide_and_truncation() {
        let projector = Projector::new(80, 24);
        // 10 * 80 / 160 = 5, -3 * 80 / 160 = -1.5
        let screen = projector.project_point(&Point3D::new(10.0, -3.0, 160.0)).unwrap();
        assert_eq!(screen, Point2D::new(45.0, 10.0));

        // Negative depth mirrors the image: 40 + 0.75 * (80 / -1) = -20
        let mirrored = projector.project_point(&Point3D::new(0.75, 0.0, -1.0)).unwrap();
        assert_eq!(mirrored, Point2D::new(-20.0, 12.0));
    }

    #[test]
    fn test_zero_depth_is_clipped_by_default() {
        let projector = Projector::new(80, 24);
        assert!(projector.project_point(&Point3D::new(1.0, 1.0, 0.0)).is_none());

        let points = [
            Point3D::new(0.0, 0.0, 80.0),
            Point3D::new(5.0, 5.0, 0.0),
            Point3D::new(0.0, 0.0, -80.0),
        ];
        assert_eq!(projector.project(&points).len(), 2);
    }

    #[test]
    fn test_zero_depth_passthrough_keeps_degenerate_points() {
        let projector = Projector::new(80, 24).with_depth_policy(DepthPolicy::Passthrough);
        let screen = projector.project_point(&Point3D::new(1.0, 0.0, 0.0)).unwrap();
        assert!(screen.x().is_infinite());
        // 0 * inf
        assert!(screen.y().is_nan());
        assert_eq!(screen.cell(80, 24), None);
    }

    #[test]
    fn test_custom_focal_length() {
        let projector = Projector::new(80, 24).with_focal_length(40.0);
        let screen = projector.project_point(&Point3D::new(8.0, 4.0, 40.0)).unwrap();
        assert_eq!(screen, Point2D::new(48.0, 16.0));
    }
}
