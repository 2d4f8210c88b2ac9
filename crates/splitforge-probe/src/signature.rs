//! Leading-magic signature table.

use crate::types::IconFormat;

/// PNG stream signature (`89 50 4E 47 0D 0A 1A 0A`).
pub const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Known image signatures, probed in priority order. First match wins.
const SIGNATURES: &[(&[u8], IconFormat)] = &[
    (PNG_SIGNATURE, IconFormat::Png),
    (b"\xff\xd8\xff", IconFormat::Jpg),
    (b"GIF87a", IconFormat::Gif),
    (b"GIF89a", IconFormat::Gif),
    (b"BM", IconFormat::Bmp),
    (b"\x00\x00\x01\x00", IconFormat::Ico),
];

/// Classify a byte buffer by its leading magic bytes.
///
/// Buffers matching none of the known signatures classify as
/// [`IconFormat::Bin`].
pub fn detect_format(data: &[u8]) -> IconFormat {
    SIGNATURES
        .iter()
        .find(|(magic, _)| data.starts_with(magic))
        .map(|&(_, format)| format)
        .unwrap_or(IconFormat::Bin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_png() {
        assert_eq!(detect_format(b"\x89PNG\r\n\x1a\nrest"), IconFormat::Png);
    }

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_format(b"\xff\xd8\xff\xe0JFIF"), IconFormat::Jpg);
    }

    #[test]
    fn detects_both_gif_variants() {
        assert_eq!(detect_format(b"GIF87a...."), IconFormat::Gif);
        assert_eq!(detect_format(b"GIF89a...."), IconFormat::Gif);
    }

    #[test]
    fn detects_bmp_and_ico() {
        assert_eq!(detect_format(b"BMxxxx"), IconFormat::Bmp);
        assert_eq!(detect_format(b"\x00\x00\x01\x00\x01\x00"), IconFormat::Ico);
    }

    #[test]
    fn unknown_prefix_is_bin() {
        assert_eq!(detect_format(b"plain text"), IconFormat::Bin);
        assert_eq!(detect_format(b""), IconFormat::Bin);
    }

    #[test]
    fn truncated_signature_is_bin() {
        // Shorter than any matching signature
        assert_eq!(detect_format(b"\x89PN"), IconFormat::Bin);
    }
}
