//! Drone state snapshot types

use glam::Vec3;

use crate::mapper::OutputPose;
use crate::stage::StageConfig;

/// Complete drone pose and motion state for one tick.
///
/// The physics step is the sole producer: each tick it returns a fresh
/// value that replaces the previous one wholesale. Nothing downstream of
/// the physics step may mutate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroneState {
    /// Position in meters, inside the stage bounds
    pub position: Vec3,
    /// World-frame velocity in m/s
    pub velocity: Vec3,
    /// Heading in degrees, always in `[0, 360)`
    pub pan: f32,
    /// Banking pitch in degrees, derived from velocity (not integrated)
    pub tilt: f32,
    /// Banking roll in degrees, derived from velocity (not integrated)
    pub roll: f32,
}

impl DroneState {
    /// Canonical initial state: stage origin, at rest, facing pan 0.
    pub fn initial(_stage: &StageConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            pan: 0.0,
            tilt: 0.0,
            roll: 0.0,
        }
    }
}

/// Read-only value copy of one tick's result, handed to output
/// collaborators (renderer, status display). Consumers get their own copy
/// and cannot touch simulation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    /// Internal-convention state
    pub state: DroneState,
    /// Console-convention pose streamed this tick
    pub pose: OutputPose,
}
