//! PNG payload isolation inside wrapped buffers.

use crate::signature::PNG_SIGNATURE;

/// IEND chunk as it appears on the wire: zero length field, chunk type,
/// and the fixed CRC of an empty IEND (`AE 42 60 82`).
const IEND_MARKER: &[u8] = b"\x00\x00\x00\x00IEND\xaeB`\x82";

/// Upper bound on the region scanned for the signature and end marker.
/// Icons are tiny; anything past this is corrupt or adversarial input.
const MAX_SCAN_BYTES: usize = 8 * 1024 * 1024;

/// Isolate an embedded PNG stream within an opaquely wrapped buffer.
///
/// Scans for the PNG signature anywhere in the buffer. When found, the
/// returned slice runs from the signature to the end of the IEND chunk;
/// if no IEND follows, the slice runs to the end of the buffer (a
/// truncated stream is passed through as-is). When no signature is
/// present the whole buffer is returned unchanged.
pub fn isolate_image(data: &[u8]) -> &[u8] {
    let window = &data[..data.len().min(MAX_SCAN_BYTES)];

    let Some(start) = find(window, PNG_SIGNATURE) else {
        return data;
    };

    match find(&window[start..], IEND_MARKER) {
        Some(offset) => &data[start..start + offset + IEND_MARKER.len()],
        None => &data[start..],
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
