//! DroneCast Core - Domain Model and Simulation
//!
//! This crate contains the simulation core for DroneCast, including:
//! - Stage volume configuration and clamp bounds
//! - Per-tick control input contract
//! - Drone flight physics (pure transition function)
//! - Internal → console coordinate remapping
//! - Scripted flight playback

#![warn(missing_docs)]

pub use glam::Vec3;

/// Per-tick control input types and the sampling contract
pub mod input;
/// Internal → console coordinate remapping
pub mod mapper;
/// Drone flight physics
pub mod physics;
/// Scripted flight playback
pub mod script;
/// Stage volume configuration
pub mod stage;
/// Drone state snapshot types
pub mod state;

pub use input::{ControlInput, ControlSample, ControlSource, HoverSource, FOV_DEFAULT, FOV_MAX, FOV_MIN};
pub use mapper::{to_output, OutputPose};
pub use script::{ScriptEnd, ScriptSegment, ScriptSource};
pub use stage::{StageConfig, StageOrigin};
pub use state::{DroneState, TelemetrySnapshot};
