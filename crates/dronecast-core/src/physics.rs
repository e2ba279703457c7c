//! Drone flight physics
//!
//! [`step`] is a pure transition function: next state from previous state,
//! stage, input and `dt`, with no hidden state. Control is
//! orientation-relative — the sticks command velocity in the drone's body
//! frame, which is rotated into the world frame by the current heading, so
//! identical stick input moves the drone along different world axes
//! depending on where it is facing.

use glam::Vec3;

use crate::input::ControlInput;
use crate::stage::StageConfig;
use crate::state::DroneState;

/// Maximum horizontal speed in m/s.
pub const MAX_SPEED_XY: f32 = 8.0;
/// Maximum vertical speed in m/s.
pub const MAX_SPEED_Z: f32 = 5.0;
/// Maximum yaw rate in deg/s.
pub const MAX_YAW_RATE: f32 = 180.0;
/// Maximum banking deflection in degrees.
pub const BANK_ANGLE: f32 = 30.0;

/// Advance the simulation by one tick of `dt` seconds.
///
/// Stable for any small positive `dt` (up to at least 1/30 s): position is
/// clamped to the stage every step and velocity is set, not accumulated.
pub fn step(prev: DroneState, stage: &StageConfig, input: &ControlInput, dt: f32) -> DroneState {
    if input.emergency_stop {
        // Kill all motion, hold pose.
        return DroneState {
            velocity: Vec3::ZERO,
            ..prev
        };
    }
    if input.reset {
        return DroneState::initial(stage);
    }

    // Desired body-frame velocity. The sign inversion on both sticks is a
    // fixed calibration constant for the target console, not configurable.
    let forward = -input.pitch * MAX_SPEED_XY;
    let right = -input.roll * MAX_SPEED_XY;

    // Rotate into the world frame by the current heading.
    let (sin_pan, cos_pan) = prev.pan.to_radians().sin_cos();
    let velocity = Vec3::new(
        right * cos_pan - forward * sin_pan,
        right * sin_pan + forward * cos_pan,
        input.throttle * MAX_SPEED_Z,
    );

    let (position, velocity) = clamp_to_stage(prev.position + velocity * dt, velocity, stage);

    let pan = (prev.pan + input.yaw * MAX_YAW_RATE * dt).rem_euclid(360.0);

    // Banking is derived from velocity each tick, never integrated. Tilt
    // uses the body-frame forward velocity so forward motion reads as
    // nose-down from any heading; roll uses the world X velocity so the
    // sideways lean looks correct from a fixed external viewpoint. The two
    // frames are intentionally different.
    let (sin_pan, cos_pan) = pan.to_radians().sin_cos();
    let forward_vel = -velocity.x * sin_pan + velocity.y * cos_pan;
    let tilt = (-forward_vel / MAX_SPEED_XY * BANK_ANGLE).clamp(-BANK_ANGLE, BANK_ANGLE);
    let roll = (-velocity.x / MAX_SPEED_XY * BANK_ANGLE).clamp(-BANK_ANGLE, BANK_ANGLE);

    DroneState {
        position,
        velocity,
        pan,
        tilt,
        roll,
    }
}

/// Clamp a position to the stage bounds, zeroing velocity only on the
/// axes that hit a boundary so no energy is injected at the walls.
fn clamp_to_stage(position: Vec3, velocity: Vec3, stage: &StageConfig) -> (Vec3, Vec3) {
    let mut position = position;
    let mut velocity = velocity;
    let bounds = [stage.bounds_x(), stage.bounds_y(), stage.bounds_z()];
    for (axis, (min, max)) in bounds.into_iter().enumerate() {
        if position[axis] < min {
            tracing::trace!(axis, at = min, "hit stage boundary");
            position[axis] = min;
            velocity[axis] = 0.0;
        } else if position[axis] > max {
            tracing::trace!(axis, at = max, "hit stage boundary");
            position[axis] = max;
            velocity[axis] = 0.0;
        }
    }
    (position, velocity)
}
