//! Scripted flight playback
//!
//! A flight script is an ordered list of timed segments, each holding the
//! stick axes at fixed values (a cue list for the sticks). It gives the
//! streaming binary a deterministic control source when no live input
//! collaborator is attached.

use serde::{Deserialize, Serialize};

use crate::input::{ControlInput, ControlSample, ControlSource, FOV_MAX, FOV_MIN};

/// Shortest accepted segment duration in seconds. Configuration
/// validation rejects non-positive durations before a script is built;
/// this floor keeps playback advancing even if one slips through.
const MIN_SEGMENT_SECS: f32 = 1e-3;

/// One timed segment of a flight script.
///
/// Axes default to centered; `emergency_stop` and `reset` fire once when
/// the segment becomes current, not on every tick it is current.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptSegment {
    /// Segment duration in seconds, must be positive
    pub duration: f32,
    /// Yaw axis, `[-1, 1]`
    #[serde(default)]
    pub yaw: f32,
    /// Throttle axis, `[-1, 1]`
    #[serde(default)]
    pub throttle: f32,
    /// Pitch axis, `[-1, 1]`
    #[serde(default)]
    pub pitch: f32,
    /// Roll axis, `[-1, 1]`
    #[serde(default)]
    pub roll: f32,
    /// Camera field of view for this segment, degrees; `None` keeps the
    /// script default
    #[serde(default)]
    pub fov: Option<f32>,
    /// Fire an emergency stop when the segment starts
    #[serde(default)]
    pub emergency_stop: bool,
    /// Fire a reset when the segment starts
    #[serde(default)]
    pub reset: bool,
}

impl ScriptSegment {
    /// A centered-stick segment of the given duration.
    pub fn hover(duration: f32) -> Self {
        Self {
            duration,
            yaw: 0.0,
            throttle: 0.0,
            pitch: 0.0,
            roll: 0.0,
            fov: None,
            emergency_stop: false,
            reset: false,
        }
    }

    fn sanitized(mut self) -> Self {
        self.duration = self.duration.max(MIN_SEGMENT_SECS);
        self.yaw = self.yaw.clamp(-1.0, 1.0);
        self.throttle = self.throttle.clamp(-1.0, 1.0);
        self.pitch = self.pitch.clamp(-1.0, 1.0);
        self.roll = self.roll.clamp(-1.0, 1.0);
        self.fov = self.fov.map(|f| f.clamp(FOV_MIN, FOV_MAX));
        self
    }
}

/// What playback does once the last segment ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScriptEnd {
    /// Start over from the first segment
    #[default]
    Loop,
    /// Keep the last segment's axes indefinitely
    Hold,
}

/// Control source that plays back a flight script.
pub struct ScriptSource {
    segments: Vec<ScriptSegment>,
    end: ScriptEnd,
    default_fov: f32,
    index: usize,
    elapsed: f32,
    pending_events: bool,
    finished: bool,
}

impl ScriptSource {
    /// Build a playback source. Axes and FOV are saturated into their
    /// domains here so downstream stages can rely on them.
    pub fn new(segments: Vec<ScriptSegment>, end: ScriptEnd, default_fov: f32) -> Self {
        Self {
            segments: segments.into_iter().map(ScriptSegment::sanitized).collect(),
            end,
            default_fov: default_fov.clamp(FOV_MIN, FOV_MAX),
            index: 0,
            elapsed: 0.0,
            pending_events: true,
            finished: false,
        }
    }

    /// Index of the segment currently playing.
    pub fn current_segment(&self) -> usize {
        self.index
    }

    fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= self.segments[self.index].duration {
            self.elapsed -= self.segments[self.index].duration;
            if self.index + 1 < self.segments.len() {
                self.index += 1;
                self.pending_events = true;
            } else {
                match self.end {
                    ScriptEnd::Loop => {
                        self.index = 0;
                        self.pending_events = true;
                    }
                    ScriptEnd::Hold => {
                        self.finished = true;
                        break;
                    }
                }
            }
        }
    }
}

impl ControlSource for ScriptSource {
    fn sample(&mut self, dt: f32) -> ControlSample {
        if self.segments.is_empty() {
            return ControlSample {
                input: ControlInput::neutral(),
                fov: self.default_fov,
            };
        }

        self.advance(dt);
        let segment = self.segments[self.index];
        let fire = std::mem::take(&mut self.pending_events) && !self.finished;

        ControlSample {
            input: ControlInput {
                yaw: segment.yaw,
                throttle: segment.throttle,
                pitch: segment.pitch,
                roll: segment.roll,
                emergency_stop: fire && segment.emergency_stop,
                reset: fire && segment.reset,
            },
            fov: segment.fov.unwrap_or(self.default_fov),
        }
    }
}
