//! Fixed probe frames
//!
//! The two outbound frames are opaque 15-byte payloads understood by the
//! server under test; the harness only guarantees each is sent atomically.
//! Inbound reads are raw byte counts with no framing.

/// Length of both outbound frames.
pub const FRAME_LEN: usize = 15;

/// Upper bound on a single read request.
pub const MAX_PACKET_SIZE: usize = 1024;

/// Sent once immediately after a successful connect.
pub const CONNECT_HELLO: [u8; FRAME_LEN] = [
    0x02, 0xfd, 0x00, 0x05, 0x00, 0x00, 0x00, 0x07, 0x0f, 0x0d, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Sent on each `W` command.
pub const WRITE_PROBE: [u8; FRAME_LEN] = [
    0x02, 0xfd, 0x80, 0x01, 0x00, 0x00, 0x00, 0x07, 0x0f, 0x0d, 0xaa, 0xbb, 0x22, 0x11, 0x22,
];

/// Render bytes as lowercase space-separated hex, e.g. `01 02 aa`.
#[must_use]
pub fn hex_dump(bytes: &[u8]) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_fifteen_bytes_and_distinct() {
        assert_eq!(CONNECT_HELLO.len(), FRAME_LEN);
        assert_eq!(WRITE_PROBE.len(), FRAME_LEN);
        assert_ne!(CONNECT_HELLO, WRITE_PROBE);
        // Shared protocol preamble
        assert_eq!(CONNECT_HELLO[0], 0x02);
        assert_eq!(WRITE_PROBE[0], 0x02);
    }

    #[test]
    fn hex_dump_renders_space_separated_pairs() {
        assert_eq!(hex_dump(&[0x01, 0x02, 0x03, 0x04]), "01 02 03 04");
        assert_eq!(hex_dump(&[0xaa]), "aa");
        assert_eq!(hex_dump(&[]), "");
    }

    #[test]
    fn hex_dump_matches_reference_encoder() {
        let dumped = hex_dump(&WRITE_PROBE).replace(' ', "");
        assert_eq!(dumped, hex::encode(WRITE_PROBE));
    }
}
