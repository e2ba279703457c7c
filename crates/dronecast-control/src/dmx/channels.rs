//! DMX channel layout and pose quantization

use dronecast_core::{OutputPose, StageConfig, FOV_MAX, FOV_MIN};
use serde::{Deserialize, Serialize};

use crate::{error::ControlError, Result};

/// Channels in one DMX universe.
pub const DMX_CHANNELS: usize = 512;
/// Highest valid sACN universe.
pub const UNIVERSE_MAX: u16 = 63999;
/// Highest valid start address for the camera fixture footprint.
pub const START_ADDRESS_MAX: u16 = 500;

/// Rotation channels cover one full turn.
const ROTATION_SPAN: f32 = 360.0;

/// Width of the FOV channel. Positions and rotations are always 16-bit;
/// some console patches only reserve a single byte for FOV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FovWidth {
    /// One channel, 0-255
    Eight,
    /// Two channels, 0-65535, MSB first
    #[default]
    Sixteen,
}

impl FovWidth {
    /// Total fixture footprint in channels for this FOV width.
    pub fn channel_count(self) -> u16 {
        match self {
            FovWidth::Eight => 13,
            FovWidth::Sixteen => 14,
        }
    }
}

/// One encoded protocol frame: a full universe buffer plus addressing.
#[derive(Debug, Clone)]
pub struct DmxFrame {
    /// sACN universe, 1-63999
    pub universe: u16,
    /// First meaningful channel, 1-indexed
    pub start_address: u16,
    /// Wrapping per-frame sequence number
    pub sequence: u8,
    /// All 512 channel values; channels outside the fixture footprint
    /// are zero-filled
    pub channels: [u8; DMX_CHANNELS],
}

/// Quantizes an [`OutputPose`] into DMX frames.
///
/// The encoder owns the frame sequence counter: it starts at 0, is
/// stamped into each frame and then advanced mod 256, and is never reset
/// for the lifetime of the encoder. Addressing is validated once here at
/// construction; `encode` itself cannot fail.
#[derive(Debug)]
pub struct FrameEncoder {
    stage: StageConfig,
    universe: u16,
    start_address: u16,
    fov_width: FovWidth,
    sequence: u8,
}

impl FrameEncoder {
    /// Create an encoder, rejecting out-of-range addressing.
    pub fn new(
        stage: StageConfig,
        universe: u16,
        start_address: u16,
        fov_width: FovWidth,
    ) -> Result<Self> {
        if universe == 0 || universe > UNIVERSE_MAX {
            return Err(ControlError::InvalidConfig(format!(
                "universe {} out of range 1-{}",
                universe, UNIVERSE_MAX
            )));
        }
        if start_address == 0 || start_address > START_ADDRESS_MAX {
            return Err(ControlError::InvalidConfig(format!(
                "start address {} out of range 1-{}",
                start_address, START_ADDRESS_MAX
            )));
        }
        let footprint = fov_width.channel_count();
        if start_address + footprint - 1 > DMX_CHANNELS as u16 {
            return Err(ControlError::InvalidConfig(format!(
                "fixture footprint of {} channels at address {} exceeds channel {}",
                footprint, start_address, DMX_CHANNELS
            )));
        }

        Ok(Self {
            stage,
            universe,
            start_address,
            fov_width,
            sequence: 0,
        })
    }

    /// Fixture footprint in channels.
    pub fn channel_count(&self) -> u16 {
        self.fov_width.channel_count()
    }

    /// Quantize one pose into a frame and advance the sequence counter.
    pub fn encode(&mut self, pose: &OutputPose) -> DmxFrame {
        let mut channels = [0u8; DMX_CHANNELS];

        // Console Y carries internal height, console Z internal depth, so
        // the quantization ranges follow the remapped axes.
        let (x_min, x_max) = self.stage.bounds_x();
        let (y_min, y_max) = self.stage.bounds_z();
        let (z_min, z_max) = self.stage.bounds_y();

        let fields = [
            ("x", pose.x, x_min, x_max),
            ("y", pose.y, y_min, y_max),
            ("z", pose.z, z_min, z_max),
            ("pan", pose.pan, 0.0, ROTATION_SPAN),
            ("tilt", pose.tilt, 0.0, ROTATION_SPAN),
            ("roll", pose.roll, 0.0, ROTATION_SPAN),
        ];

        let mut cursor = (self.start_address - 1) as usize;
        for (field, value, min, max) in fields {
            let word = quantize_u16(field, value, min, max);
            channels[cursor] = (word >> 8) as u8;
            channels[cursor + 1] = (word & 0xff) as u8;
            cursor += 2;
        }

        match self.fov_width {
            FovWidth::Eight => {
                channels[cursor] = quantize_u8("fov", pose.fov, FOV_MIN, FOV_MAX);
            }
            FovWidth::Sixteen => {
                let word = quantize_u16("fov", pose.fov, FOV_MIN, FOV_MAX);
                channels[cursor] = (word >> 8) as u8;
                channels[cursor + 1] = (word & 0xff) as u8;
            }
        }

        let frame = DmxFrame {
            universe: self.universe,
            start_address: self.start_address,
            sequence: self.sequence,
            channels,
        };
        self.sequence = self.sequence.wrapping_add(1);
        frame
    }
}

/// Saturate a value into its declared domain, warning when it was out of
/// range: physics guarantees domain validity, so an actual clamp here
/// points at an upstream invariant bug and must stand out in the logs.
fn saturate(field: &'static str, value: f32, min: f32, max: f32) -> f32 {
    if !value.is_finite() {
        tracing::warn!(field, value, "non-finite value reached the encoder, using domain minimum");
        return min;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        tracing::warn!(
            field,
            value,
            min,
            max,
            "out-of-domain value reached the encoder, saturated"
        );
    }
    clamped
}

fn quantize_u16(field: &'static str, value: f32, min: f32, max: f32) -> u16 {
    let clamped = saturate(field, value, min, max);
    let norm = (clamped - min) / (max - min);
    (norm * 65535.0).round() as u16
}

fn quantize_u8(field: &'static str, value: f32, min: f32, max: f32) -> u8 {
    let clamped = saturate(field, value, min, max);
    let norm = (clamped - min) / (max - min);
    (norm * 255.0).round() as u8
}
