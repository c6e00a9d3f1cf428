//! # Wire Constants
//!
//! Size limits shared by the framing layer.
//!
//! The header's `size` field is 16 bits wide, which bounds the whole packet
//! (header + payload) to 65535 bytes. These constants are the single source
//! of truth for that arithmetic; nothing else in the crate hardcodes the
//! numbers.

/// Byte length of the framing header: 2-byte protocol tag + 2-byte total size.
pub const HEADER_SIZE: usize = 4;

/// Maximum total packet length representable in the 16-bit size field.
pub const MAX_PACKET_SIZE: usize = u16::MAX as usize;

/// Maximum payload length once the header has claimed its share.
pub const MAX_PAYLOAD_SIZE: usize = MAX_PACKET_SIZE - HEADER_SIZE;
