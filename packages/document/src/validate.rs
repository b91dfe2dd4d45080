//! Shape check for documents arriving from outside the editor
//! (imported project files, saved projects, generated pages).

use crate::error::{DocumentResult, ImportError};
use crate::node::Node;
use crate::schema::{SectionKind, CONTENT_BLOCKS_KEY, SECTION_ORDER_KEY};

/// Sections an imported project must carry
pub const REQUIRED_SECTIONS: [SectionKind; 2] = [SectionKind::Navbar, SectionKind::Hero];

/// Check that `doc` looks like a landing page project.
///
/// Only structure the editor relies on is checked; unknown fields pass.
pub fn validate_import(doc: &Node) -> Result<(), ImportError> {
    if !doc.is_map() {
        return Err(ImportError::NotARecord(doc.kind()));
    }

    for kind in REQUIRED_SECTIONS {
        match doc.get(kind.as_str()) {
            Some(section) if section.is_map() => {}
            Some(other) => {
                return Err(ImportError::wrong_type(kind.as_str(), "record", other.kind()));
            }
            None => return Err(ImportError::MissingSection(kind.as_str().to_string())),
        }
    }

    if let Some(order) = doc.get(SECTION_ORDER_KEY) {
        let entries = order
            .as_list()
            .ok_or_else(|| ImportError::wrong_type(SECTION_ORDER_KEY, "list", order.kind()))?;
        for (index, entry) in entries.iter().enumerate() {
            if entry.as_str().is_none() {
                return Err(ImportError::wrong_type(
                    format!("{}.{}", SECTION_ORDER_KEY, index),
                    "string",
                    entry.kind(),
                ));
            }
        }
    }

    if let Some(blocks) = doc.get(CONTENT_BLOCKS_KEY) {
        let blocks = blocks
            .as_list()
            .ok_or_else(|| ImportError::wrong_type(CONTENT_BLOCKS_KEY, "list", blocks.kind()))?;
        for (index, block) in blocks.iter().enumerate() {
            if block.get("id").and_then(Node::as_str).is_none() {
                return Err(ImportError::BlockWithoutId { index });
            }
        }
    }

    Ok(())
}

/// Parse project JSON text and validate it
pub fn parse_project(text: &str) -> DocumentResult<Node> {
    let doc: Node = serde_json::from_str(text)?;
    validate_import(&doc)?;
    Ok(doc)
}
