//! # splitforge-splits
//!
//! Split-file document parsing.
//!
//! A split file is an XML document describing a speedrun timer
//! configuration: game and category metadata, a start offset, an ordered
//! list of timed segments with optional embedded icons, and layout
//! preferences. This crate parses such a document into a read-only
//! snapshot; the input file is never modified.
//!
//! ## Example
//!
//! ```no_run
//! let splits = splitforge_splits::parse_file("run.lss").unwrap();
//!
//! println!("{} — {}", splits.game_name, splits.category_name);
//! println!("offset: {} ms", splitforge_splits::time::offset_to_millis(&splits.offset));
//!
//! for segment in &splits.segments {
//!     println!("  {}", segment.name);
//! }
//! ```

pub mod error;
pub mod model;
pub mod time;

mod parser;

pub use error::SplitFileError;
pub use model::{LayoutSettings, Segment, SplitFile};

use std::path::Path;

/// Parse a split file from disk.
///
/// Fails with [`SplitFileError::FileNotFound`] when the path does not
/// resolve to an existing file and [`SplitFileError::Malformed`] when the
/// content is not well-formed XML.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SplitFile, SplitFileError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SplitFileError::FileNotFound(path.to_path_buf()));
    }

    let xml = std::fs::read_to_string(path)?;
    parse_str(&xml)
}

/// Parse a split file from already-loaded XML text.
pub fn parse_str(xml: &str) -> Result<SplitFile, SplitFileError> {
    parser::parse_document(xml)
}
