//! sACN (E1.31) transport
//!
//! sACN (Streaming ACN) carries DMX512 universes over IP multicast. Each
//! encoded frame becomes one 638-byte data packet: root layer, framing
//! layer, DMP layer, then the start code and 512 channel values. Sending
//! is fire-and-forget: the socket is non-blocking and a failed send is
//! the caller's to log before moving on to the next tick.

use std::net::{Ipv4Addr, SocketAddrV4, UdpSocket};

use uuid::Uuid;

use crate::dmx::channels::DmxFrame;
use crate::{error::ControlError, Result};

/// Well-known sACN port.
pub const SACN_PORT: u16 = 5568;

/// Full E1.31 data packet size for a 512-channel universe.
const PACKET_LEN: usize = 638;
/// High nibble of every flags-and-length word.
const FLAGS: u16 = 0x7000;
/// ACN packet identifier, constant across all E1.31 traffic.
const ACN_PACKET_ID: [u8; 12] = [
    0x41, 0x53, 0x43, 0x2d, 0x45, 0x31, 0x2e, 0x31, 0x37, 0x00, 0x00, 0x00,
];
const VECTOR_ROOT_E131_DATA: u32 = 0x0000_0004;
const VECTOR_E131_DATA_PACKET: u32 = 0x0000_0002;
const VECTOR_DMP_SET_PROPERTY: u8 = 0x02;

/// Highest sACN source priority.
const PRIORITY_MAX: u8 = 200;

/// Multicast group for a universe: `239.255.<hi>.<lo>:5568`.
pub fn multicast_addr(universe: u16) -> SocketAddrV4 {
    let [hi, lo] = universe.to_be_bytes();
    SocketAddrV4::new(Ipv4Addr::new(239, 255, hi, lo), SACN_PORT)
}

/// Sends encoded DMX frames as sACN multicast datagrams.
///
/// The sender carries the per-process source identity (CID, source name,
/// priority); universe and sequence travel with each [`DmxFrame`].
pub struct SacnSender {
    socket: UdpSocket,
    source_name: String,
    priority: u8,
    cid: [u8; 16],
}

impl SacnSender {
    /// Create a sender with a fresh component ID.
    ///
    /// # Arguments
    /// * `source_name` - Source name announced on the wire (up to 63 bytes)
    /// * `priority` - sACN priority, 0-200
    pub fn new(source_name: &str, priority: u8) -> Result<Self> {
        if priority > PRIORITY_MAX {
            return Err(ControlError::InvalidConfig(format!(
                "sACN priority {} out of range 0-{}",
                priority, PRIORITY_MAX
            )));
        }

        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_multicast_loop_v4(false)?;
        socket.set_nonblocking(true)?;

        let cid = *Uuid::new_v4().as_bytes();

        tracing::info!(source_name, priority, "sACN sender created");

        Ok(Self {
            socket,
            source_name: source_name.to_string(),
            priority,
            cid,
        })
    }

    /// Send one frame to its universe's multicast group.
    ///
    /// Non-blocking; any send error (including `WouldBlock`) is returned
    /// for the caller to log. The frame is never buffered or retried —
    /// the next tick supersedes it.
    pub fn send(&self, frame: &DmxFrame) -> Result<()> {
        let packet = self.build_packet(frame);
        self.socket.send_to(&packet, multicast_addr(frame.universe))?;

        tracing::trace!(
            universe = frame.universe,
            sequence = frame.sequence,
            "sent sACN frame"
        );
        Ok(())
    }

    /// Assemble the E1.31 data packet for one frame.
    fn build_packet(&self, frame: &DmxFrame) -> [u8; PACKET_LEN] {
        let mut packet = [0u8; PACKET_LEN];
        let mut w = Writer::new(&mut packet);

        // Root layer
        w.u16(0x0010); // preamble size
        w.u16(0x0000); // post-amble size
        w.bytes(&ACN_PACKET_ID);
        w.u16(FLAGS | (PACKET_LEN - 16) as u16);
        w.u32(VECTOR_ROOT_E131_DATA);
        w.bytes(&self.cid);

        // Framing layer
        w.u16(FLAGS | (PACKET_LEN - 38) as u16);
        w.u32(VECTOR_E131_DATA_PACKET);
        w.name64(&self.source_name);
        w.u8(self.priority);
        w.u16(0x0000); // synchronization address: none
        w.u8(frame.sequence);
        w.u8(0x00); // options
        w.u16(frame.universe);

        // DMP layer
        w.u16(FLAGS | (PACKET_LEN - 115) as u16);
        w.u8(VECTOR_DMP_SET_PROPERTY);
        w.u8(0xa1); // address type & data type
        w.u16(0x0000); // first property address
        w.u16(0x0001); // address increment
        w.u16(513); // property count: start code + 512 channels
        w.u8(0x00); // DMX start code
        w.bytes(&frame.channels);

        debug_assert_eq!(w.offset(), PACKET_LEN);
        packet
    }
}

/// Sequential big-endian packet writer.
struct Writer<'a> {
    buf: &'a mut [u8],
    offset: usize,
}

impl<'a> Writer<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn u8(&mut self, value: u8) {
        self.buf[self.offset] = value;
        self.offset += 1;
    }

    fn u16(&mut self, value: u16) {
        self.bytes(&value.to_be_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.bytes(&value.to_be_bytes());
    }

    fn bytes(&mut self, bytes: &[u8]) {
        self.buf[self.offset..self.offset + bytes.len()].copy_from_slice(bytes);
        self.offset += bytes.len();
    }

    /// 64-byte null-terminated name field, truncating to 63 bytes.
    fn name64(&mut self, name: &str) {
        let bytes = name.as_bytes();
        let len = bytes.len().min(63);
        self.buf[self.offset..self.offset + len].copy_from_slice(&bytes[..len]);
        self.offset += 64;
    }
}
