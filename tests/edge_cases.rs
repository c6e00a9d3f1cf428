#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the framing layer.
//! Boundary sizes, oversized payloads, truncated buffers, and tags outside
//! the registry.

use bytemuck::{Pod, Zeroable};
use frame_protocol::{
    FixedPacket, FrameError, Header, ProtocolTag, HEADER_SIZE, MAX_PACKET_SIZE, MAX_PAYLOAD_SIZE,
};

// ============================================================================
// SIZE BOUNDARIES
// ============================================================================

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct MaxPayload {
    bytes: [u8; MAX_PAYLOAD_SIZE],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct OversizedPayload {
    bytes: [u8; MAX_PAYLOAD_SIZE + 1],
}

#[test]
fn test_max_packet_size_succeeds() {
    // header + payload lands exactly on 65535
    let packet = FixedPacket::<MaxPayload>::new(ProtocolTag::Data).expect("exactly at the limit");
    assert_eq!(packet.size() as usize, MAX_PACKET_SIZE);
    assert_eq!(packet.as_bytes().len(), MAX_PACKET_SIZE);
}

#[test]
fn test_oversized_packet_rejected() {
    // One byte past the 16-bit limit must fail, not wrap to 0.
    let result = FixedPacket::<OversizedPayload>::new(ProtocolTag::Data);
    match result {
        Err(FrameError::SizeOverflow { needed, max }) => {
            assert_eq!(needed, MAX_PACKET_SIZE + 1);
            assert_eq!(max, MAX_PACKET_SIZE);
        }
        Err(other) => panic!("expected SizeOverflow, got {other:?}"),
        Ok(_) => panic!("oversized packet accepted"),
    }
}

#[test]
fn test_empty_payload() {
    // A zero-size payload type frames to a bare header.
    let packet = FixedPacket::<()>::new(ProtocolTag::Ack).expect("header-only packet");
    assert_eq!(packet.size() as usize, HEADER_SIZE);
    assert_eq!(packet.payload_bytes().len(), 0);
    assert_eq!(packet.as_bytes(), packet.header_bytes());
}

#[test]
fn test_header_with_size_never_truncates() {
    // The size argument is usize; values past u16::MAX must error rather
    // than silently take the low 16 bits.
    let err = Header::with_size(ProtocolTag::Data, 0x1_0008).unwrap_err();
    assert_eq!(
        err,
        FrameError::SizeOverflow {
            needed: 0x1_0008,
            max: MAX_PACKET_SIZE,
        }
    );
}

// ============================================================================
// TRUNCATED INPUT
// ============================================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct Counter {
    value: u32,
}

#[test]
fn test_decode_empty_buffer() {
    assert_eq!(
        Header::read_from(&[]),
        Err(FrameError::Truncated {
            declared: HEADER_SIZE,
            available: 0,
        })
    );
}

#[test]
fn test_decode_partial_header() {
    assert_eq!(
        Header::read_from(&[0x07]),
        Err(FrameError::Truncated {
            declared: HEADER_SIZE,
            available: 1,
        })
    );
}

#[test]
fn test_decode_header_but_short_payload() {
    // A receiver that got the header but not the whole declared payload can
    // detect the shortfall from the size field.
    let packet =
        FixedPacket::with_payload(ProtocolTag::Heartbeat, Counter { value: 1 }).expect("fits");
    let wire = packet.to_bytes();
    let short = &wire[..wire.len() - 1];

    let header = Header::read_from(short).expect("header still readable");
    assert!(header.size_usize() > short.len());

    assert_eq!(
        FixedPacket::<Counter>::from_bytes(short),
        Err(FrameError::Truncated {
            declared: 8,
            available: 7,
        })
    );
}

#[test]
fn test_decode_ignores_trailing_bytes() {
    let packet =
        FixedPacket::with_payload(ProtocolTag::Heartbeat, Counter { value: 3 }).expect("fits");
    let mut wire = Vec::from(packet.as_bytes());
    wire.extend_from_slice(&[0xEE; 32]); // next frame in the stream

    let decoded = FixedPacket::<Counter>::from_bytes(&wire).expect("prefix frame");
    assert_eq!(decoded.payload().value, 3);
}

// ============================================================================
// UNKNOWN PROTOCOL TAGS
// ============================================================================

#[test]
fn test_unknown_tag_passes_through_framing() {
    // The framing layer round-trips any 16-bit tag; rejection is the
    // dispatching caller's job.
    let header = Header::from_raw_parts(0x7777, 8);
    let reread = Header::read_from(header.as_bytes()).expect("header decode");

    assert_eq!(reread.proto_raw(), 0x7777);
    assert_eq!(reread.proto(), None);
    assert_eq!(
        ProtocolTag::try_from(reread.proto_raw()),
        Err(FrameError::UnknownProtocolTag(0x7777))
    );
}

#[test]
fn test_registered_tag_dispatch() {
    let packet = FixedPacket::<Counter>::new(ProtocolTag::Disconnect).expect("fits");
    let header = Header::read_from(packet.as_bytes()).expect("header decode");
    let tag = ProtocolTag::try_from(header.proto_raw()).expect("registered");
    assert_eq!(tag, ProtocolTag::Disconnect);
}
