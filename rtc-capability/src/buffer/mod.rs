//! Buffer-allocation backend seam.
//!
//! The packet buffers themselves (jitter buffering, NACK history, ...) live
//! outside this crate. A [`BufferFactory`] is attached once to a
//! [`CapabilityConfig`](crate::capability::CapabilityConfig) and every
//! connection created from that configuration acquires its buffers through it.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

/// Kind of packets a buffer holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BufferPacketType {
    Rtp,
    Rtcp,
}

impl fmt::Display for BufferPacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            BufferPacketType::Rtp => "rtp",
            BufferPacketType::Rtcp => "rtcp",
        };
        write!(f, "{s}")
    }
}

/// A packet buffer handed out by a [`BufferFactory`].
///
/// Shared between the transport that writes incoming packets and the reader
/// that consumes them, hence `&self` everywhere.
pub trait PacketBuffer: Send + Sync {
    /// Queues a packet. Returns `false` once the buffer is closed.
    fn write(&self, packet: Bytes) -> bool;

    /// Takes the next packet, if any.
    fn read(&self) -> Option<Bytes>;

    fn close(&self);
}

/// Hands out packet buffers per SSRC and packet type.
///
/// Implementations must return the same buffer for repeated calls with the
/// same `(packet_type, ssrc)` until it is closed.
pub trait BufferFactory: Send + Sync {
    fn get_or_new(&self, packet_type: BufferPacketType, ssrc: u32) -> Arc<dyn PacketBuffer>;
}
