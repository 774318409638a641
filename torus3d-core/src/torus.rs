/// Sampled torus surface
use std::f64::consts::TAU;

use crate::error::{GeometryError, MatrixError};
use crate::geometry::Point3D;
use crate::transform::{EulerAngles, Transform};

/// Samples per full turn of each angle (a step of pi/100)
pub const DEFAULT_RESOLUTION: usize = 200;

/// A torus represented by points sampled on its surface
///
/// The ring lies in the plane `z = center.z`; the tube circles it.
#[derive(Debug, Clone)]
pub struct Torus {
    center: Point3D,
    major_radius: f64,
    minor_radius: f64,
    points: Vec<Point3D>,
}

impl Torus {
    pub fn new(center: Point3D, major_radius: f64, minor_radius: f64) -> Result<Self, GeometryError> {
        Self::with_resolution(center, major_radius, minor_radius, DEFAULT_RESOLUTION)
    }

    /// Sample `resolution` angles per turn around the ring and around the tube,
    /// giving `resolution²` points
    pub fn with_resolution(
        center: Point3D,
        major_radius: f64,
        minor_radius: f64,
        resolution: usize,
    ) -> Result<Self, GeometryError> {
        check_radius("major", major_radius)?;
        check_radius("minor", minor_radius)?;
        if resolution == 0 {
            return Err(GeometryError::InvalidResolution);
        }
        if !center.is_finite() {
            return Err(GeometryError::NonFiniteCenter);
        }

        let step = TAU / resolution as f64;
        let mut points = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            let (sin_i, cos_i) = (i as f64 * step).sin_cos();
            for j in 0..resolution {
                let (sin_j, cos_j) = (j as f64 * step).sin_cos();
                let ring = major_radius + minor_radius * cos_j;
                points.push(Point3D::new(
                    ring * cos_i + center.x(),
                    ring * sin_i + center.y(),
                    minor_radius * sin_j + center.z(),
                ));
            }
        }

        Ok(Self {
            center,
            major_radius,
            minor_radius,
            points,
        })
    }

    pub fn center(&self) -> Point3D {
        self.center
    }

    pub fn major_radius(&self) -> f64 {
        self.major_radius
    }

    pub fn minor_radius(&self) -> f64 {
        self.minor_radius
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rotate the surface about its own center.
    ///
    /// Rotations accumulate: each call starts from the current orientation.
    pub fn rotate(&mut self, angles: &EulerAngles) -> Result<(), MatrixError> {
        Transform::rotate_about(&mut self.points, &self.center, angles)
    }
}

fn check_radius(name: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidRadius { name, value })
    }
}
