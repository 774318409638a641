/// Compiled-in scene constants
use std::time::Duration;

use crate::geometry::Point3D;
use crate::projection::{DepthPolicy, FOCAL_LENGTH};
use crate::torus::DEFAULT_RESOLUTION;
use crate::transform::EulerAngles;

/// Distance of the torus center in front of the viewer (along -z)
pub const TORUS_DEPTH: f64 = -300.0;
pub const MAJOR_RADIUS: f64 = 30.0;
pub const MINOR_RADIUS: f64 = 10.0;
/// Radians added around each axis every frame
pub const SPIN_PER_FRAME: f64 = 0.1;
pub const TARGET_FPS: u32 = 60;

/// Everything the animation needs to know about the scene, fixed for the
/// lifetime of the process
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    pub center: Point3D,
    pub major_radius: f64,
    pub minor_radius: f64,
    pub resolution: usize,
    pub focal_length: f64,
    pub spin: EulerAngles,
    pub target_fps: u32,
    pub depth_policy: DepthPolicy,
}

impl SceneConfig {
    /// Time budget for one frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            center: Point3D::new(0.0, 0.0, TORUS_DEPTH),
            major_radius: MAJOR_RADIUS,
            minor_radius: MINOR_RADIUS,
            resolution: DEFAULT_RESOLUTION,
            focal_length: FOCAL_LENGTH,
            spin: EulerAngles::new(SPIN_PER_FRAME, SPIN_PER_FRAME, SPIN_PER_FRAME),
            target_fps: TARGET_FPS,
            depth_policy: DepthPolicy::Clip,
        }
    }
}
