//! Fixed 4-byte framing header.
//!
//! Two little-endian fields, no padding: the protocol tag, then the total
//! packet length (header + payload). Fields are stored as byte pairs so the
//! struct has alignment 1 and an identical layout on every platform — the
//! in-memory header *is* the wire header.

use crate::config::{HEADER_SIZE, MAX_PACKET_SIZE};
use crate::core::proto::ProtocolTag;
use crate::error::{FrameError, Result};
use bytemuck::{Pod, Zeroable};
use tracing::trace;

/// Framing prefix of every packet: protocol tag + total length.
///
/// Constructed once, immutable thereafter. The tag is never validated here;
/// any 16-bit value round-trips and discrimination happens in the dispatching
/// caller (see `ProtocolTag`'s `TryFrom<u16>`).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Header {
    proto: [u8; 2],
    size: [u8; 2],
}

const _: () = assert!(std::mem::size_of::<Header>() == HEADER_SIZE);
const _: () = assert!(std::mem::align_of::<Header>() == 1);

impl Header {
    /// Build a header with the size field zeroed, for a wrapping type that
    /// computes the total length itself (see [`crate::FixedPacket`]).
    pub fn new(tag: ProtocolTag) -> Self {
        Self {
            proto: tag.raw().to_le_bytes(),
            size: [0; 2],
        }
    }

    /// Build a fully-specified header.
    ///
    /// Fails with [`FrameError::SizeOverflow`] when `total_size` does not fit
    /// the 16-bit size field, and with [`FrameError::InvalidHeader`] when it
    /// is smaller than the header itself. Never truncates.
    pub fn with_size(tag: ProtocolTag, total_size: usize) -> Result<Self> {
        if total_size > MAX_PACKET_SIZE {
            return Err(FrameError::SizeOverflow {
                needed: total_size,
                max: MAX_PACKET_SIZE,
            });
        }
        if total_size < HEADER_SIZE {
            return Err(FrameError::InvalidHeader);
        }
        Ok(Self {
            proto: tag.raw().to_le_bytes(),
            size: (total_size as u16).to_le_bytes(),
        })
    }

    /// Build a header from raw wire values, no validation.
    ///
    /// Every `(proto, size)` pair in the full u16 domain round-trips through
    /// [`Header::proto_raw`] / [`Header::size`] unchanged. Intended for
    /// receivers and tests; checked construction goes through
    /// [`Header::with_size`].
    pub fn from_raw_parts(proto: u16, size: u16) -> Self {
        Self {
            proto: proto.to_le_bytes(),
            size: size.to_le_bytes(),
        }
    }

    /// The stored protocol tag as its wire value.
    pub fn proto_raw(&self) -> u16 {
        u16::from_le_bytes(self.proto)
    }

    /// The stored protocol tag, if it belongs to the registry.
    pub fn proto(&self) -> Option<ProtocolTag> {
        ProtocolTag::from_raw(self.proto_raw())
    }

    /// Total packet length in bytes, header included.
    pub fn size(&self) -> u16 {
        u16::from_le_bytes(self.size)
    }

    /// Total packet length as a usize, for buffer arithmetic.
    pub fn size_usize(&self) -> usize {
        usize::from(self.size())
    }

    /// Payload length implied by the size field (`size - HEADER_SIZE`).
    ///
    /// Saturates to zero for headers whose declared size is smaller than the
    /// header itself; such headers only arise from unvalidated raw input.
    pub fn payload_len(&self) -> usize {
        self.size_usize().saturating_sub(HEADER_SIZE)
    }

    /// Borrowed view of the header's own 4 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decode a header from the front of a received buffer.
    ///
    /// Trailing bytes are ignored; callers read the remaining
    /// `payload_len()` bytes as the payload type the tag implies.
    pub fn read_from(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE {
            trace!(available = buf.len(), needed = HEADER_SIZE, "short header");
            return Err(FrameError::Truncated {
                declared: HEADER_SIZE,
                available: buf.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(&buf[..HEADER_SIZE]))
    }
}
