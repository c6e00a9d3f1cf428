//! Generic fixed-size framed packet.
//!
//! [`FixedPacket<T>`] stacks a [`Header`] in front of any `Pod` payload type.
//! The struct is `repr(C, packed)`, so the payload begins at byte offset
//! [`HEADER_SIZE`] for every `T` and the whole packet is one contiguous,
//! padding-free block — [`FixedPacket::as_bytes`] is the wire image, no
//! serialization step in between.
//!
//! The total length is computed once at construction and stored in the
//! header; it is fixed per payload type, never recomputed or shared across
//! instantiations.

use crate::config::HEADER_SIZE;
use crate::core::header::Header;
use crate::core::proto::ProtocolTag;
use crate::error::{FrameError, Result};
use bytemuck::{Pod, Zeroable};
use bytes::Bytes;
use std::fmt;
use std::mem;
use tracing::debug;

/// A header immediately followed by a fixed-size payload.
///
/// `T` must be [`Pod`]: a plain fixed-layout value with no pointers, padding,
/// or interior mutability. The packet exclusively owns both parts; the
/// payload is addressable as the embedded `T` (by copy, see
/// [`FixedPacket::payload`]) and as raw bytes, never as two independent
/// copies.
#[repr(C, packed)]
pub struct FixedPacket<T> {
    header: Header,
    payload: T,
}

// SAFETY: Header is Pod, T is Pod, and repr(C, packed) leaves no padding
// between or after the fields, so every byte of FixedPacket<T> is initialized
// and every bit pattern is a valid value.
unsafe impl<T: Zeroable> Zeroable for FixedPacket<T> {}
unsafe impl<T: Pod> Pod for FixedPacket<T> {}

impl<T: Copy> Clone for FixedPacket<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for FixedPacket<T> {}

impl<T: Pod> FixedPacket<T> {
    /// Total byte length of this instantiation: `HEADER_SIZE + sizeof(T)`.
    pub const TOTAL_SIZE: usize = HEADER_SIZE + mem::size_of::<T>();

    /// Frame a zeroed payload under the given tag.
    ///
    /// The header's size field is computed here and fixed for the packet's
    /// lifetime. Fails with [`FrameError::SizeOverflow`] when
    /// `HEADER_SIZE + sizeof(T)` exceeds
    /// [`MAX_PACKET_SIZE`](crate::config::MAX_PACKET_SIZE); the size field
    /// never wraps or truncates.
    pub fn new(tag: ProtocolTag) -> Result<Self> {
        Self::with_payload(tag, T::zeroed())
    }

    /// Frame an existing payload value under the given tag.
    pub fn with_payload(tag: ProtocolTag, payload: T) -> Result<Self> {
        let header = Header::with_size(tag, Self::TOTAL_SIZE)?;
        Ok(Self { header, payload })
    }

    /// The embedded header, by value.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Protocol tag wire value, forwarded from the header.
    pub fn proto_raw(&self) -> u16 {
        self.header().proto_raw()
    }

    /// Registry lookup of the protocol tag, forwarded from the header.
    pub fn proto(&self) -> Option<ProtocolTag> {
        self.header().proto()
    }

    /// Total packet length in bytes, forwarded from the header.
    pub fn size(&self) -> u16 {
        self.header().size()
    }

    /// The payload value, by copy.
    ///
    /// Packed fields cannot be borrowed, so payload access is copy-in /
    /// copy-out; for a borrowed view use [`FixedPacket::payload_bytes`].
    pub fn payload(&self) -> T {
        self.payload
    }

    /// Replace the payload value. The header is not touched; the size field
    /// depends only on `sizeof(T)`.
    pub fn set_payload(&mut self, payload: T) {
        self.payload = payload;
    }

    /// The header's 4 bytes: the first [`HEADER_SIZE`] bytes of the block.
    pub fn header_bytes(&self) -> &[u8] {
        &self.as_bytes()[..HEADER_SIZE]
    }

    /// Exactly `sizeof(T)` payload bytes, starting at offset [`HEADER_SIZE`],
    /// contiguous with the header.
    pub fn payload_bytes(&self) -> &[u8] {
        &self.as_bytes()[HEADER_SIZE..]
    }

    /// The whole packet as one contiguous byte block, exactly `size()` bytes,
    /// suitable for a single transport write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Owned copy of the wire image, for transports that take [`Bytes`].
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Zero-copy decode: reinterpret the front of a received buffer as a
    /// framed packet of this payload type.
    ///
    /// Trailing bytes beyond the frame are ignored. Fails with
    /// [`FrameError::Truncated`] when fewer than `TOTAL_SIZE` bytes are
    /// available, and with [`FrameError::InvalidHeader`] when the declared
    /// size disagrees with the frame size for this `T`. The protocol tag is
    /// not validated; dispatching callers check it via `ProtocolTag`'s
    /// `TryFrom<u16>`.
    pub fn from_bytes(buf: &[u8]) -> Result<&Self> {
        if buf.len() < Self::TOTAL_SIZE {
            debug!(
                declared = Self::TOTAL_SIZE,
                available = buf.len(),
                "truncated frame"
            );
            return Err(FrameError::Truncated {
                declared: Self::TOTAL_SIZE,
                available: buf.len(),
            });
        }
        // Alignment is 1 and the length matches, so the cast itself cannot
        // fail; keep the fallible form rather than reasoning about panics.
        let packet: &Self = bytemuck::try_from_bytes(&buf[..Self::TOTAL_SIZE])
            .map_err(|_| FrameError::InvalidHeader)?;
        let declared = packet.header().size_usize();
        if declared != Self::TOTAL_SIZE {
            debug!(declared, expected = Self::TOTAL_SIZE, "size field mismatch");
            return Err(FrameError::InvalidHeader);
        }
        Ok(packet)
    }
}

impl<T: Pod> PartialEq for FixedPacket<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<T: Pod> Eq for FixedPacket<T> {}

impl<T: Pod + fmt::Debug> fmt::Debug for FixedPacket<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Copy out of the packed struct before formatting.
        let header = self.header();
        let payload = self.payload();
        f.debug_struct("FixedPacket")
            .field("header", &header)
            .field("payload", &payload)
            .finish()
    }
}
