//! Split-file to JSON conversion.
//!
//! One in-memory pass over one input document: parse, walk the segments
//! in order, extract icons, and assemble the result. Performs no file
//! writes; serialization and any on-disk layout are the caller's concern.

use std::path::Path;

use serde::Serialize;
use splitforge_splits::{time, SplitFileError};

use crate::icons::{self, IconEntry};

/// Complete conversion output: the JSON-facing record plus the extracted
/// icon payloads, one entry per segment with a usable icon.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub main_data: MainData,
    pub icons: Vec<IconEntry>,
}

/// JSON-facing record describing the converted split file.
#[derive(Debug, Clone, Serialize)]
pub struct MainData {
    /// Game title
    pub title: String,
    /// Run category
    pub category: String,
    /// Converted segments, in source order
    pub splits: Vec<SplitRecord>,
    /// Start offset in milliseconds
    pub start_offset: i64,
    pub splits_per_page: u32,
    pub auto_update_pb: bool,
    pub gold_split: bool,
}

/// One converted segment.
///
/// The three time fields are placeholders for a downstream consumer and
/// always serialize as null.
#[derive(Debug, Clone, Serialize)]
pub struct SplitRecord {
    pub name: String,
    pub pb_time: Option<u64>,
    pub last_time: Option<u64>,
    pub gold_time: Option<u64>,
    /// Relative icon path (`icons/<name>.<ext>`), when the segment has one
    pub icon_path: Option<String>,
}

/// Convert a split file into its JSON-facing representation.
///
/// File-level failures (missing file, malformed XML, absent required
/// fields) abort the whole conversion. Per-segment icon problems are
/// isolated: the offending segment converts with a null `icon_path` and
/// its siblings are unaffected.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConversionResult, SplitFileError> {
    let split_file = splitforge_splits::parse_file(path)?;

    let mut splits = Vec::with_capacity(split_file.segments.len());
    let mut icon_entries = Vec::new();

    for segment in &split_file.segments {
        let mut icon_path = None;

        if let Some(encoded) = segment.icon.as_deref() {
            if let Some(entry) = icons::extract_icon(&segment.name, encoded) {
                icon_path = Some(entry.path.clone());
                icon_entries.push(entry);
            }
        }

        splits.push(SplitRecord {
            name: segment.name.clone(),
            pb_time: None,
            last_time: None,
            gold_time: None,
            icon_path,
        });
    }

    Ok(ConversionResult {
        main_data: MainData {
            title: split_file.game_name,
            category: split_file.category_name,
            splits,
            start_offset: time::offset_to_millis(&split_file.offset),
            splits_per_page: split_file.layout.splits_per_page,
            auto_update_pb: split_file.layout.auto_update_pb,
            gold_split: split_file.layout.gold_split,
        },
        icons: icon_entries,
    })
}
