//! DroneCast - drone flight simulator with sACN pose streaming
//!
//! Runs the telemetry pipeline at a fixed tick rate: sample control
//! input, step the physics, remap the pose into the console convention,
//! quantize it into a DMX frame and send it over sACN multicast.

#![warn(missing_docs)]

mod config;
mod logging_setup;

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use dronecast_core::{
    physics, to_output, ControlSource, DroneState, HoverSource, ScriptSource, TelemetrySnapshot,
};
use dronecast_control::{FrameEncoder, SacnSender};

use crate::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    let _log_guard = logging_setup::init(&config.log)?;

    // Fatal before the loop starts: bad configuration never streams.
    config.validate().context("invalid configuration")?;

    run(config).await
}

async fn run(config: AppConfig) -> Result<()> {
    let stage = config.stage;

    let mut source: Box<dyn ControlSource> = match &config.flight {
        Some(flight) => Box::new(ScriptSource::new(
            flight.segments.clone(),
            flight.end,
            config.sim.fov,
        )),
        None => Box::new(HoverSource::new(config.sim.fov)),
    };

    let mut encoder = FrameEncoder::new(
        stage,
        config.dmx.universe,
        config.dmx.start_address,
        config.dmx.fov_width(),
    )
    .context("invalid DMX configuration")?;
    let sender = SacnSender::new(&config.dmx.source_name, config.dmx.priority)
        .context("failed to create sACN sender")?;

    let period = Duration::from_secs_f64(1.0 / config.sim.tick_hz as f64);
    let dt = period.as_secs_f32();
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut state = DroneState::initial(&stage);
    let mut ticks: u64 = 0;
    // One status line per second of simulated time
    let status_every = config.sim.tick_hz as u64;

    info!(
        universe = config.dmx.universe,
        start_address = config.dmx.start_address,
        tick_hz = config.sim.tick_hz,
        channels = encoder.channel_count(),
        "streaming drone pose over sACN"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // The whole tick runs synchronously; shutdown can only
                // land between ticks, never mid-frame.
                let sample = source.sample(dt);
                state = physics::step(state, &stage, &sample.input, dt);
                let pose = to_output(&state, sample.fov);
                let frame = encoder.encode(&pose);

                if let Err(e) = sender.send(&frame) {
                    // Non-fatal: the next tick sends fresh data anyway.
                    warn!(error = %e, sequence = frame.sequence, "sACN send failed, frame dropped");
                }

                let snapshot = TelemetrySnapshot { state, pose };
                ticks += 1;
                if ticks % status_every == 0 {
                    log_status(&snapshot, ticks);
                }
            }
            result = &mut shutdown => {
                result.context("failed to listen for shutdown signal")?;
                info!(ticks, "shutdown requested, stopping after current tick");
                break;
            }
        }
    }

    Ok(())
}

/// Stand-in for a render collaborator: consumes the per-tick read-only
/// snapshot without ever touching simulation state.
fn log_status(snapshot: &TelemetrySnapshot, ticks: u64) {
    let state = &snapshot.state;
    debug!(
        ticks,
        x = state.position.x,
        y = state.position.y,
        z = state.position.z,
        pan = state.pan,
        console_pan = snapshot.pose.pan,
        fov = snapshot.pose.fov,
        "telemetry"
    );
}
