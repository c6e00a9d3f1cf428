//! # Error Types
//!
//! Error handling for the framing layer.
//!
//! The framing layer itself has very few failure modes: size accounting at
//! construction time, and validation when decoding received bytes. Everything
//! here is a structural error (wrong payload type, short buffer), never a
//! transient one — no operation in this crate is worth retrying.
//!
//! ## Error Categories
//! - **Construction**: a payload too large for the 16-bit size field
//! - **Decode**: short buffers, inconsistent declared sizes
//! - **Dispatch**: protocol tags outside the registry, surfaced by callers
//!   converting raw tags via `TryFrom<u16>`
//!
//! All errors implement `std::error::Error` for interoperability.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// FrameError is the primary error type for all framing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameError {
    #[error("packet size {needed} exceeds 16-bit size field (max {max})")]
    SizeOverflow { needed: usize, max: usize },

    #[error("unknown protocol tag: {0:#06x}")]
    UnknownProtocolTag(u16),

    #[error("truncated packet: header declares {declared} bytes, {available} available")]
    Truncated { declared: usize, available: usize },

    #[error("invalid frame header")]
    InvalidHeader,
}

/// Type alias for Results using FrameError
pub type Result<T> = std::result::Result<T, FrameError>;
