//! Per-tick control input contract
//!
//! Input devices (gamepads, on-screen sticks, script playback) are external
//! collaborators. The simulation only ever sees a [`ControlSample`] pulled
//! once at the start of each tick, with latest-value semantics: no event
//! queue, no history.

/// Minimum camera field of view in degrees.
pub const FOV_MIN: f32 = 30.0;
/// Maximum camera field of view in degrees.
pub const FOV_MAX: f32 = 120.0;
/// Default camera field of view in degrees.
pub const FOV_DEFAULT: f32 = 90.0;

/// Normalized stick axes plus discrete events for one tick.
///
/// Axes are in `[-1, 1]`. Produced fresh each tick and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlInput {
    /// Rotation stick, positive turns clockwise (viewed from above)
    pub yaw: f32,
    /// Vertical stick, positive climbs
    pub throttle: f32,
    /// Forward/backward stick
    pub pitch: f32,
    /// Left/right stick
    pub roll: f32,
    /// Immediately zero all velocity, hold position
    pub emergency_stop: bool,
    /// Return to the canonical initial state
    pub reset: bool,
}

impl ControlInput {
    /// All axes centered, no events.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Copy with every axis saturated into `[-1, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            yaw: self.yaw.clamp(-1.0, 1.0),
            throttle: self.throttle.clamp(-1.0, 1.0),
            pitch: self.pitch.clamp(-1.0, 1.0),
            roll: self.roll.clamp(-1.0, 1.0),
            ..self
        }
    }
}

/// One sampled input frame: axes plus the camera field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSample {
    /// Stick axes and discrete events
    pub input: ControlInput,
    /// Camera field of view in degrees, already inside `[FOV_MIN, FOV_MAX]`
    pub fov: f32,
}

/// Latest-value input sampling, called exactly once per tick.
pub trait ControlSource {
    /// Return the most recent control values. `dt` is the tick period in
    /// seconds, used by time-based sources to advance playback.
    fn sample(&mut self, dt: f32) -> ControlSample;
}

/// Control source that holds the drone in a stationary hover.
#[derive(Debug, Clone, Copy)]
pub struct HoverSource {
    fov: f32,
}

impl HoverSource {
    /// Hover with the given camera field of view.
    pub fn new(fov: f32) -> Self {
        Self {
            fov: fov.clamp(FOV_MIN, FOV_MAX),
        }
    }
}

impl Default for HoverSource {
    fn default() -> Self {
        Self::new(FOV_DEFAULT)
    }
}

impl ControlSource for HoverSource {
    fn sample(&mut self, _dt: f32) -> ControlSample {
        ControlSample {
            input: ControlInput::neutral(),
            fov: self.fov,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_saturates_axes() {
        let input = ControlInput {
            yaw: 2.0,
            throttle: -3.0,
            pitch: 0.25,
            roll: 1.0,
            ..ControlInput::neutral()
        };
        let clamped = input.clamped();
        assert_eq!(clamped.yaw, 1.0);
        assert_eq!(clamped.throttle, -1.0);
        assert_eq!(clamped.pitch, 0.25);
        assert_eq!(clamped.roll, 1.0);
    }

    #[test]
    fn hover_source_clamps_fov() {
        let mut source = HoverSource::new(500.0);
        let sample = source.sample(1.0 / 60.0);
        assert_eq!(sample.fov, FOV_MAX);
        assert_eq!(sample.input, ControlInput::neutral());
    }
}
