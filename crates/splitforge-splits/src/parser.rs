//! XML extraction layer.
//!
//! Walks the document tree with roxmltree. Required fields map to
//! [`SplitFileError::MissingField`] when absent; the optional
//! `Layout/Settings` block defaults each setting independently when any
//! node along its path is missing.

use roxmltree::{Document, Node};

use crate::error::SplitFileError;
use crate::model::{LayoutSettings, Segment, SplitFile};

pub(crate) fn parse_document(xml: &str) -> Result<SplitFile, SplitFileError> {
    let doc = Document::parse(xml).map_err(|e| SplitFileError::Malformed(e.to_string()))?;
    let root = doc.root_element();

    let game_name = required_text(root, "GameName")?;
    let category_name = required_text(root, "CategoryName")?;
    let offset = required_text(root, "Offset")?;
    let layout = parse_layout(root);

    let segments_node = child(root, "Segments")
        .ok_or_else(|| SplitFileError::MissingField("Segments".to_string()))?;

    let mut segments = Vec::new();
    for (index, node) in segments_node
        .children()
        .filter(|n| n.has_tag_name("Segment"))
        .enumerate()
    {
        let name = match child(node, "Name") {
            Some(el) => el.text().unwrap_or_default().to_string(),
            None => {
                return Err(SplitFileError::MissingField(format!(
                    "Segments/Segment[{}]/Name",
                    index
                )))
            }
        };

        let icon = child(node, "Icon")
            .and_then(|el| el.text())
            .filter(|text| !text.is_empty())
            .map(str::to_owned);

        segments.push(Segment { name, icon });
    }

    Ok(SplitFile {
        game_name,
        category_name,
        offset,
        layout,
        segments,
    })
}

fn parse_layout(root: Node) -> LayoutSettings {
    let mut layout = LayoutSettings::default();

    let Some(settings) = child(root, "Layout").and_then(|l| child(l, "Settings")) else {
        return layout;
    };

    if let Some(text) = child_text(settings, "SplitsPerPage") {
        match text.trim().parse::<u32>() {
            Ok(value) => layout.splits_per_page = value,
            Err(_) => {
                tracing::warn!("Unparsable SplitsPerPage {:?}, keeping default", text);
            }
        }
    }

    if let Some(text) = child_text(settings, "AutoUpdatePB") {
        layout.auto_update_pb = text.eq_ignore_ascii_case("true");
    }

    if let Some(text) = child_text(settings, "GoldSplit") {
        layout.gold_split = text.eq_ignore_ascii_case("true");
    }

    layout
}

/// First child element with the given tag name.
fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Text of the named child element, if the element exists. An element
/// that exists but holds no text yields an empty string.
fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).map(|el| el.text().unwrap_or_default())
}

/// Text of a required child element. Absence is a [`MissingField`] error;
/// an empty element yields an empty string.
///
/// [`MissingField`]: SplitFileError::MissingField
fn required_text(node: Node, name: &str) -> Result<String, SplitFileError> {
    child(node, name)
        .map(|el| el.text().unwrap_or_default().to_string())
        .ok_or_else(|| SplitFileError::MissingField(name.to_string()))
}
