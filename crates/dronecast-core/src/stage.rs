//! Stage volume configuration
//!
//! The stage is the box the drone is allowed to fly in. Its extents and
//! origin convention define the per-axis clamp bounds used by the physics
//! step and the position quantization ranges used by the DMX encoder.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Which point of the stage volume the coordinate origin sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StageOrigin {
    /// Origin at the stage center; each axis spans `[-extent/2, extent/2]`.
    #[default]
    Center,
    /// Origin at a stage corner; each axis spans `[0, extent]`.
    Corner,
}

/// Stage/performance-space dimensions in meters. Immutable per run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Extent along the internal X axis (stage left/right)
    pub width: f32,
    /// Extent along the internal Y axis (stage back/forth)
    pub depth: f32,
    /// Extent along the internal Z axis (up/down)
    pub height: f32,
    /// Origin convention for all three axes
    pub origin: StageOrigin,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::cube(20.0)
    }
}

impl StageConfig {
    /// Create a cubic stage with the given edge length in meters.
    pub fn cube(size: f32) -> Self {
        Self {
            width: size,
            depth: size,
            height: size,
            origin: StageOrigin::default(),
        }
    }

    fn axis_bounds(&self, extent: f32) -> (f32, f32) {
        match self.origin {
            StageOrigin::Center => (-extent / 2.0, extent / 2.0),
            StageOrigin::Corner => (0.0, extent),
        }
    }

    /// Clamp bounds `(min, max)` for the internal X axis.
    pub fn bounds_x(&self) -> (f32, f32) {
        self.axis_bounds(self.width)
    }

    /// Clamp bounds `(min, max)` for the internal Y axis.
    pub fn bounds_y(&self) -> (f32, f32) {
        self.axis_bounds(self.depth)
    }

    /// Clamp bounds `(min, max)` for the internal Z axis.
    pub fn bounds_z(&self) -> (f32, f32) {
        self.axis_bounds(self.height)
    }

    /// Whether a point lies inside the stage volume.
    pub fn contains(&self, point: Vec3) -> bool {
        let (x0, x1) = self.bounds_x();
        let (y0, y1) = self.bounds_y();
        let (z0, z1) = self.bounds_z();
        (x0..=x1).contains(&point.x) && (y0..=y1).contains(&point.y) && (z0..=z1).contains(&point.z)
    }
}
