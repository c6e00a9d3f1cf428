//! # Frame Protocol
//!
//! Zero-copy wire framing for fixed-size network packets.
//!
//! This crate provides a compact, self-describing binary envelope: a 4-byte
//! header carrying a protocol tag and a total length, stacked in front of an
//! arbitrary statically-sized payload. Header and payload occupy one
//! contiguous, padding-free block, so a packet can be handed to a transport
//! (or read back from one) as a single byte-for-byte slice.
//!
//! ## Wire Format
//! ```text
//! [Proto(2)] [Size(2)] [Payload(sizeof(T))]
//! ```
//! Header fields are little-endian on the wire. Payload bytes are the
//! in-memory representation of `T`; payload types that must cross hosts
//! should use explicit-endian fields (e.g. byte arrays).
//!
//! ## Components
//! - **ProtocolTag**: 16-bit registry discriminating payload types
//! - **Header**: fixed 4-byte framing prefix (tag + total length)
//! - **FixedPacket**: generic contiguous `[header][payload]` block
//!
//! ## Example
//! ```rust
//! use bytemuck::{Pod, Zeroable};
//! use frame_protocol::{FixedPacket, ProtocolTag, HEADER_SIZE};
//!
//! #[repr(C)]
//! #[derive(Clone, Copy, Pod, Zeroable)]
//! struct Heartbeat {
//!     counter: u32,
//! }
//!
//! # fn main() -> frame_protocol::Result<()> {
//! let packet = FixedPacket::with_payload(ProtocolTag::Heartbeat, Heartbeat { counter: 42 })?;
//! assert_eq!(packet.size() as usize, HEADER_SIZE + 4);
//!
//! // One contiguous block, ready for a single transport write.
//! let wire = packet.as_bytes();
//! assert_eq!(wire.len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! ## Safety
//! - Packet sizes are validated at construction; a payload that would not fit
//!   the 16-bit size field is rejected with [`FrameError::SizeOverflow`]
//!   instead of silently truncating.
//! - Decoding validates buffer length and the declared size before any cast.

pub mod config;
pub mod core;
pub mod error;

pub use crate::config::{HEADER_SIZE, MAX_PACKET_SIZE, MAX_PAYLOAD_SIZE};
pub use crate::core::header::Header;
pub use crate::core::packet::FixedPacket;
pub use crate::core::proto::ProtocolTag;
pub use crate::error::{FrameError, Result};
