//! DroneCast Control - Protocol Output
//!
//! This crate turns a console-convention drone pose into sACN (E1.31)
//! wire traffic:
//! - [`dmx::FrameEncoder`] quantizes the pose into a 512-channel DMX
//!   frame with a validated channel layout and a wrapping sequence
//!   counter
//! - [`dmx::SacnSender`] sends encoded frames as fire-and-forget
//!   multicast datagrams
//!
//! Configuration is validated once at construction; per-frame encoding
//! and sending cannot fail in a way that stops the tick loop.

#![warn(missing_docs)]

/// Error types
pub mod error;

/// DMX frame encoding and sACN transport
pub mod dmx;

pub use error::{ControlError, Result};

pub use dmx::{DmxFrame, FovWidth, FrameEncoder, SacnSender};
