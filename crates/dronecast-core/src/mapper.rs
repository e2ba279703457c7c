//! Internal → console coordinate remapping
//!
//! The visualization console (Depence-style) uses a different axis and
//! rotation convention than the simulation. The remap constants below are
//! protocol calibration values; any deviation silently misrenders the
//! external camera.

use crate::state::DroneState;

/// Drone pose expressed in the console's axis and rotation convention.
/// Computed fresh each tick, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputPose {
    /// Console X, stage left/right (internal X)
    pub x: f32,
    /// Console Y, up/down (internal Z)
    pub y: f32,
    /// Console Z, back/forth (internal Y)
    pub z: f32,
    /// Console pan in degrees, `[0, 360)` (internal tilt, swapped)
    pub pan: f32,
    /// Console tilt in degrees, `[0, 360)` (internal pan, swapped)
    pub tilt: f32,
    /// Console roll in degrees, `[0, 360)` (internal roll + 180)
    pub roll: f32,
    /// Camera field of view in degrees, `[30, 120]`
    pub fov: f32,
}

/// Remap an internal state into the console convention.
///
/// Height becomes the console's "up" axis (Y), pan and tilt swap roles,
/// and roll is offset by 180 degrees to compensate for the console's
/// camera mounting orientation. Rotations are normalized into `[0, 360)`.
pub fn to_output(state: &DroneState, fov: f32) -> OutputPose {
    OutputPose {
        x: state.position.x,
        y: state.position.z,
        z: state.position.y,
        pan: state.tilt.rem_euclid(360.0),
        tilt: state.pan,
        roll: (state.roll + 180.0).rem_euclid(360.0),
        fov,
    }
}
