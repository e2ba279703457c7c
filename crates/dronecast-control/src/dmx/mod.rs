//! DMX frame encoding and sACN transport
//!
//! The drone pose is streamed as one DMX universe per frame, in the
//! fixture layout the visualization console patches a camera on:
//!
//! | Offset | Width  | Field                     |
//! |--------|--------|---------------------------|
//! | +0     | 16-bit | X (stage left/right)      |
//! | +2     | 16-bit | Y (up/down)               |
//! | +4     | 16-bit | Z (back/forth)            |
//! | +6     | 16-bit | Pan                       |
//! | +8     | 16-bit | Tilt                      |
//! | +10    | 16-bit | Roll                      |
//! | +12    | 8/16   | FOV                       |
//!
//! Multi-byte values are big-endian (MSB first), matching DMX fixture
//! conventions. Frames go out over sACN (E1.31) multicast, one datagram
//! per tick, no acknowledgment.

pub mod channels;
pub mod sacn;

pub use channels::{DmxFrame, FovWidth, FrameEncoder, DMX_CHANNELS, START_ADDRESS_MAX, UNIVERSE_MAX};
pub use sacn::{multicast_addr, SacnSender, SACN_PORT};
