//! # splitforge-probe
//!
//! Image payload sniffing for embedded icon blobs.
//!
//! Split files store segment icons as base64 blobs whose decoded bytes may
//! wrap the real image in a serialized-object envelope, with arbitrary
//! bytes before and after the image stream. This crate locates a PNG
//! stream inside such a buffer and classifies payloads by leading magic
//! bytes. No image decoding takes place; only signatures are inspected.
//!
//! ## Example
//!
//! ```
//! use splitforge_probe::{sniff_icon, IconFormat};
//!
//! let mut blob = b"envelope".to_vec();
//! blob.extend_from_slice(b"\x89PNG\r\n\x1a\nchunks");
//! blob.extend_from_slice(b"\x00\x00\x00\x00IEND\xaeB`\x82");
//! blob.extend_from_slice(b"padding");
//!
//! let (image, format) = sniff_icon(&blob);
//! assert_eq!(format, IconFormat::Png);
//! assert!(image.starts_with(b"\x89PNG"));
//! assert!(image.ends_with(b"\xaeB`\x82"));
//! ```

pub mod png;
pub mod signature;
pub mod types;

pub use png::isolate_image;
pub use signature::detect_format;
pub use types::IconFormat;

/// Isolate and classify an image payload in one pass.
///
/// Returns the image slice (the embedded PNG stream when one is present,
/// the whole buffer otherwise) together with its detected format.
pub fn sniff_icon(data: &[u8]) -> (&[u8], IconFormat) {
    let image = isolate_image(data);
    (image, detect_format(image))
}
