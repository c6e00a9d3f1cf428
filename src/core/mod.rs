//! # Core Framing Components
//!
//! The header format and the generic fixed-size packet wrapper.
//!
//! This module is the heart of the crate: a padding-free 4-byte header and a
//! generic composition that stacks the header in front of any `Pod` payload
//! while keeping the whole packet one contiguous byte block.
//!
//! ## Components
//! - **ProtocolTag**: registry of 16-bit payload discriminants
//! - **Header**: protocol tag + total length, 4 bytes on the wire
//! - **FixedPacket**: `[header][payload]` with fixed offsets, zero-copy views
//!
//! ## Wire Format
//! ```text
//! offset 0          2         4
//!        [Proto(2)] [Size(2)] [Payload(sizeof(T))]
//!        |------ header ----| |----- payload ----|
//!        |---------------- packet ---------------|
//! ```
//!
//! ## Guarantees
//! - `size` always equals `HEADER_SIZE + sizeof(T)` for a given instantiation
//! - Payload bytes start at offset `HEADER_SIZE`, contiguous with the header
//! - Oversized payloads fail at construction, never wrap or truncate

pub mod header;
pub mod packet;
pub mod proto;
