//! Segment icon extraction.
//!
//! Decodes a segment's base64 icon blob, isolates the embedded image,
//! classifies it, and derives a deterministic relative path from the
//! segment name. Decode failures are contained here: a segment with a
//! broken icon converts fine, just without one.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use splitforge_probe::{sniff_icon, IconFormat};

/// An extracted icon: relative path plus raw image bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconEntry {
    /// Relative path, forward-slash separated (e.g. `icons/first_boss.png`)
    pub path: String,
    /// Raw image bytes; serialized to JSON as standard base64 text
    #[serde(serialize_with = "serialize_base64")]
    pub data: Vec<u8>,
}

fn serialize_base64<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&STANDARD.encode(data))
}

/// Decode and extract a segment's icon.
///
/// Returns `None` when the blob is not decodable base64; the failure is
/// logged with the segment name and never aborts the surrounding
/// conversion. ASCII whitespace inside the blob is tolerated.
pub fn extract_icon(segment_name: &str, encoded: &str) -> Option<IconEntry> {
    let compact: String = encoded.split_ascii_whitespace().collect();

    let decoded = match STANDARD.decode(compact.as_bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Could not process icon for '{}': {}", segment_name, err);
            return None;
        }
    };

    let (image, format) = sniff_icon(&decoded);

    Some(IconEntry {
        path: format!("icons/{}", icon_file_name(segment_name, format)),
        data: image.to_vec(),
    })
}

/// Deterministic icon filename for a segment name and detected format.
///
/// Two segments whose names sanitize to the same base silently produce
/// the same filename; callers that write icons to disk will overwrite
/// one with the other (known limitation).
pub fn icon_file_name(name: &str, format: IconFormat) -> String {
    format!(
        "{}.{}",
        sanitize_segment_name(name).replace(' ', "_").to_lowercase(),
        format.extension()
    )
}

/// Reduce a segment name to filename-safe characters: letters, digits,
/// spaces, and underscores survive, everything else is dropped, and
/// trailing whitespace is trimmed.
pub fn sanitize_segment_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_punctuation() {
        assert_eq!(sanitize_segment_name("Boss Fight! #2"), "Boss Fight 2");
    }

    #[test]
    fn sanitize_drops_path_separators() {
        assert_eq!(sanitize_segment_name("a/b\\c"), "abc");
        assert_eq!(sanitize_segment_name("../escape"), "escape");
    }

    #[test]
    fn sanitize_trims_trailing_whitespace() {
        assert_eq!(sanitize_segment_name("Final Split!"), "Final Split");
    }

    #[test]
    fn sanitize_keeps_underscores() {
        assert_eq!(sanitize_segment_name("warp_zone"), "warp_zone");
    }

    #[test]
    fn file_name_lowercases_and_underscores() {
        assert_eq!(
            icon_file_name("Boss Fight! #2", IconFormat::Png),
            "boss_fight_2.png"
        );
    }

    #[test]
    fn extract_plain_png() {
        let mut blob = b"\x89PNG\r\n\x1a\nbody".to_vec();
        blob.extend_from_slice(b"\x00\x00\x00\x00IEND\xaeB`\x82");

        let entry = extract_icon("First", &STANDARD.encode(&blob)).unwrap();
        assert_eq!(entry.path, "icons/first.png");
        assert_eq!(entry.data, blob);
    }

    #[test]
    fn extract_wrapped_png_strips_envelope() {
        let mut stream = b"\x89PNG\r\n\x1a\nbody".to_vec();
        stream.extend_from_slice(b"\x00\x00\x00\x00IEND\xaeB`\x82");

        let mut blob = b"envelope".to_vec();
        blob.extend_from_slice(&stream);
        blob.extend_from_slice(b"padding");

        let entry = extract_icon("Wrapped", &STANDARD.encode(&blob)).unwrap();
        assert_eq!(entry.data, stream);
    }

    #[test]
    fn extract_unknown_payload_is_bin() {
        let entry = extract_icon("Mystery", &STANDARD.encode(b"opaque bytes")).unwrap();
        assert_eq!(entry.path, "icons/mystery.bin");
        assert_eq!(entry.data, b"opaque bytes");
    }

    #[test]
    fn extract_invalid_base64_is_none() {
        assert!(extract_icon("Broken", "!!! not base64 !!!").is_none());
    }

    #[test]
    fn extract_tolerates_wrapped_base64_lines() {
        let encoded = STANDARD.encode(b"opaque bytes");
        let (head, tail) = encoded.split_at(8);
        let wrapped = format!("{}\n  {}", head, tail);

        let entry = extract_icon("Lines", &wrapped).unwrap();
        assert_eq!(entry.data, b"opaque bytes");
    }

    #[test]
    fn icon_data_serializes_as_base64() {
        let entry = IconEntry {
            path: "icons/x.bin".to_string(),
            data: b"abc".to_vec(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(&STANDARD.encode(b"abc")));
    }
}
