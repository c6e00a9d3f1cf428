//! Protocol tag registry.
//!
//! Each tag is a 16-bit value identifying which fixed-size payload type
//! follows a header. The registry is closed: tags are assigned here and
//! nowhere else. A header will happily round-trip values outside this set —
//! discrimination happens on read, in the dispatching caller, not in the
//! framing layer.

use crate::error::FrameError;
use serde::{Deserialize, Serialize};

/// Registered protocol tags.
///
/// Wire values are explicit and stable; never renumber an existing tag.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolTag {
    /// Session establishment
    Handshake = 1,
    /// Public key material exchange
    KeyExchange = 2,
    /// Key modulus fingerprint
    Fingerprint = 3,
    /// Application data
    Data = 4,
    /// Acknowledgement
    Ack = 5,
    /// Orderly session teardown
    Disconnect = 6,
    /// Liveness probe
    Heartbeat = 7,
}

impl ProtocolTag {
    /// Get the tag's wire value
    pub fn raw(self) -> u16 {
        self as u16
    }

    /// Look up a tag from its wire value
    pub fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            1 => Some(ProtocolTag::Handshake),
            2 => Some(ProtocolTag::KeyExchange),
            3 => Some(ProtocolTag::Fingerprint),
            4 => Some(ProtocolTag::Data),
            5 => Some(ProtocolTag::Ack),
            6 => Some(ProtocolTag::Disconnect),
            7 => Some(ProtocolTag::Heartbeat),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ProtocolTag::Handshake => "Handshake",
            ProtocolTag::KeyExchange => "KeyExchange",
            ProtocolTag::Fingerprint => "Fingerprint",
            ProtocolTag::Data => "Data",
            ProtocolTag::Ack => "Ack",
            ProtocolTag::Disconnect => "Disconnect",
            ProtocolTag::Heartbeat => "Heartbeat",
        }
    }
}

impl TryFrom<u16> for ProtocolTag {
    type Error = FrameError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(FrameError::UnknownProtocolTag(raw))
    }
}
