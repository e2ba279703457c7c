//! Application configuration
//!
//! Loaded from a TOML file (`DRONECAST_CONFIG` env var or `dronecast.toml`
//! in the working directory; missing file means defaults). Everything is
//! validated once before the tick loop starts: invalid values reject
//! startup with a descriptive error and are never silently clamped.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use dronecast_core::{ScriptEnd, ScriptSegment, StageConfig, FOV_DEFAULT, FOV_MAX, FOV_MIN};
use dronecast_control::dmx::{FovWidth, START_ADDRESS_MAX, UNIVERSE_MAX};

/// Default configuration file name.
pub const DEFAULT_CONFIG_PATH: &str = "dronecast.toml";
/// Environment variable overriding the configuration path.
pub const CONFIG_PATH_ENV: &str = "DRONECAST_CONFIG";

const TICK_HZ_MAX: u32 = 240;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Stage volume
    pub stage: StageConfig,
    /// sACN output settings
    pub dmx: DmxConfig,
    /// Simulation settings
    pub sim: SimConfig,
    /// Logging settings
    pub log: LogConfig,
    /// Optional scripted flight; hover when absent
    pub flight: Option<FlightConfig>,
}

/// sACN output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DmxConfig {
    /// sACN universe, 1-63999
    pub universe: u16,
    /// DMX start address, 1-500
    pub start_address: u16,
    /// FOV channel width in bits, 8 or 16
    pub fov_bits: u8,
    /// Source name announced on the wire
    pub source_name: String,
    /// sACN priority, 0-200
    pub priority: u8,
}

impl Default for DmxConfig {
    fn default() -> Self {
        Self {
            universe: 1,
            start_address: 1,
            fov_bits: 16,
            source_name: "DroneCast".to_string(),
            priority: 100,
        }
    }
}

impl DmxConfig {
    /// FOV channel width as the encoder enum.
    pub fn fov_width(&self) -> FovWidth {
        match self.fov_bits {
            8 => FovWidth::Eight,
            _ => FovWidth::Sixteen,
        }
    }
}

/// Simulation settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Tick rate in Hz, 1-240
    pub tick_hz: u32,
    /// Default camera field of view in degrees, 30-120
    pub fov: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60,
            fov: FOV_DEFAULT,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`RUST_LOG` overrides)
    pub level: String,
    /// Optional log file path; console-only when absent
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Scripted flight settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlightConfig {
    /// What playback does after the last segment
    #[serde(default)]
    pub end: ScriptEnd,
    /// Ordered timed segments
    #[serde(default)]
    pub segments: Vec<ScriptSegment>,
}

impl AppConfig {
    /// Load configuration from the resolved path, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read configuration file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse configuration file {}", path.display()))?;
        Ok(config)
    }

    /// Reject anything out of range before the pipeline is built.
    pub fn validate(&self) -> Result<()> {
        for (name, extent) in [
            ("stage.width", self.stage.width),
            ("stage.depth", self.stage.depth),
            ("stage.height", self.stage.height),
        ] {
            if !extent.is_finite() || extent <= 0.0 {
                bail!("{} must be a positive number of meters, got {}", name, extent);
            }
        }

        if self.dmx.universe == 0 || self.dmx.universe > UNIVERSE_MAX {
            bail!(
                "dmx.universe must be 1-{}, got {}",
                UNIVERSE_MAX,
                self.dmx.universe
            );
        }
        if self.dmx.start_address == 0 || self.dmx.start_address > START_ADDRESS_MAX {
            bail!(
                "dmx.start_address must be 1-{}, got {}",
                START_ADDRESS_MAX,
                self.dmx.start_address
            );
        }
        if self.dmx.fov_bits != 8 && self.dmx.fov_bits != 16 {
            bail!("dmx.fov_bits must be 8 or 16, got {}", self.dmx.fov_bits);
        }
        let footprint = self.dmx.fov_width().channel_count();
        if self.dmx.start_address + footprint - 1 > 512 {
            bail!(
                "fixture footprint of {} channels does not fit at dmx.start_address {}",
                footprint,
                self.dmx.start_address
            );
        }
        if self.dmx.priority > 200 {
            bail!("dmx.priority must be 0-200, got {}", self.dmx.priority);
        }

        if self.sim.tick_hz == 0 || self.sim.tick_hz > TICK_HZ_MAX {
            bail!("sim.tick_hz must be 1-{}, got {}", TICK_HZ_MAX, self.sim.tick_hz);
        }
        if !(FOV_MIN..=FOV_MAX).contains(&self.sim.fov) {
            bail!(
                "sim.fov must be {}-{} degrees, got {}",
                FOV_MIN,
                FOV_MAX,
                self.sim.fov
            );
        }

        if let Some(flight) = &self.flight {
            for (i, segment) in flight.segments.iter().enumerate() {
                if !segment.duration.is_finite() || segment.duration <= 0.0 {
                    bail!(
                        "flight.segments[{}].duration must be positive, got {}",
                        i,
                        segment.duration
                    );
                }
            }
        }

        Ok(())
    }
}
