//! Icon format classification types.

use std::fmt;

/// Image format detected from leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG
    Jpg,
    /// GIF (87a or 89a)
    Gif,
    /// Windows bitmap
    Bmp,
    /// Windows icon
    Ico,
    /// Unrecognized binary payload
    Bin,
}

impl IconFormat {
    /// File extension used when deriving an on-disk name for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            IconFormat::Png => "png",
            IconFormat::Jpg => "jpg",
            IconFormat::Gif => "gif",
            IconFormat::Bmp => "bmp",
            IconFormat::Ico => "ico",
            IconFormat::Bin => "bin",
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconFormat::Png => write!(f, "PNG"),
            IconFormat::Jpg => write!(f, "JPEG"),
            IconFormat::Gif => write!(f, "GIF"),
            IconFormat::Bmp => write!(f, "BMP"),
            IconFormat::Ico => write!(f, "ICO"),
            IconFormat::Bin => write!(f, "unknown binary"),
        }
    }
}
