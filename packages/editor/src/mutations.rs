//! # Document Mutations
//!
//! High-level editing operations on landing page documents.
//!
//! ## Design Principles
//!
//! 1. **Pure**: [`Mutation::apply`] maps the current document to the next one
//!    and never touches its input
//! 2. **Structurally shared**: only records on the edited path are rebuilt;
//!    list edits replace one element and keep the rest by reference
//! 3. **One edit, one entry**: every variant is a single user-visible action
//!    and produces exactly one history commit
//! 4. **No-op aware**: edits addressing nothing (unknown block id, missing
//!    section) return the input document itself, so the history skips them
//!
//! ## Addressing
//!
//! - `section` names a top-level record (`hero`, `design`, ...)
//! - `path` is a dotted path inside the addressed record
//! - `collection` is a dotted path from the root to a list
//!   (`contentBlocks`, `features.items`)

use landing_document::{
    new_block, new_block_item, new_section_item, FieldPath, Node, PathError, SectionId,
    SectionKind, Theme, CONTENT_BLOCKS_KEY, SECTION_ORDER_KEY,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editing operations (one per user-visible action)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Write a path relative to the document root (global settings, design)
    SetRoot { path: String, value: Node },

    /// Write a path inside a named top-level section
    UpdateField {
        section: String,
        path: String,
        value: Node,
    },

    /// Write a path inside one element of a list
    UpdateListItem {
        collection: String,
        index: usize,
        path: String,
        value: Node,
    },

    /// Insert an element into a list (index past the end appends)
    InsertListItem {
        collection: String,
        index: usize,
        item: Node,
    },

    /// Remove one element from a list
    RemoveListItem { collection: String, index: usize },

    /// Replace the render order wholesale
    ReorderSections { order: Vec<SectionId> },

    /// Write a path inside the content block with `block_id`
    UpdateBlock {
        block_id: String,
        path: String,
        value: Node,
    },

    /// Write a path inside one item of a content block
    UpdateBlockItem {
        block_id: String,
        index: usize,
        path: String,
        value: Node,
    },

    /// Append a default item to a content block
    AddBlockItem { block_id: String },

    /// Remove one item of a content block
    RemoveBlockItem { block_id: String, index: usize },

    /// Write a path inside one item of a singleton section's collection
    UpdateSectionItem {
        section: SectionKind,
        index: usize,
        path: String,
        value: Node,
    },

    /// Append a default item to a singleton section's collection
    AddSectionItem { section: SectionKind },

    /// Remove one item of a singleton section's collection
    RemoveSectionItem { section: SectionKind, index: usize },

    /// Append a content block built from a template and list it in the render order
    AddBlock { template: String, id: String },

    /// Remove a section from the page
    RemoveSection { section: SectionId },

    /// Switch theme and apply its colour preset
    ApplyThemePreset { theme: Theme },

    /// Replace the whole document (generated or loaded page)
    ReplaceDocument { document: Node },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("`{path}` is a {found}, expected a {expected}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Index {index} out of bounds for `{collection}` (length {len})")]
    IndexOutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    #[error("Block id already in use: {0}")]
    DuplicateBlock(String),

    #[error("Global settings cannot be removed")]
    CannotRemoveGlobal,

    #[error("Invalid path: {0}")]
    Path(#[from] PathError),
}

impl MutationError {
    fn wrong_type(path: impl Into<String>, expected: &'static str, found: &Node) -> Self {
        Self::WrongType {
            path: path.into(),
            expected,
            found: found.kind(),
        }
    }

    fn out_of_bounds(collection: impl Into<String>, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            collection: collection.into(),
            index,
            len,
        }
    }
}

pub type MutationResult = Result<Node, MutationError>;

impl Mutation {
    /// Compute the document that results from applying this mutation to `doc`
    pub fn apply(&self, doc: &Node) -> MutationResult {
        match self {
            Mutation::SetRoot { path, value } => Ok(FieldPath::parse(path)?.set(doc, value.clone())),

            Mutation::UpdateField { section, path, value } => {
                Self::apply_update_field(doc, section, path, value)
            }

            Mutation::UpdateListItem { collection, index, path, value } => {
                Self::apply_update_list_item(doc, collection, *index, path, value)
            }

            Mutation::InsertListItem { collection, index, item } => {
                Self::apply_insert_list_item(doc, collection, *index, item)
            }

            Mutation::RemoveListItem { collection, index } => {
                Self::apply_remove_list_item(doc, collection, *index)
            }

            Mutation::ReorderSections { order } => Ok(doc.with_field(
                SECTION_ORDER_KEY,
                Node::list(order.iter().map(|id| Node::from(id.to_string()))),
            )),

            Mutation::UpdateBlock { block_id, path, value } => {
                let path = FieldPath::parse(path)?;
                Self::map_block(doc, block_id, |block| Ok(path.set(block, value.clone())))
            }

            Mutation::UpdateBlockItem { block_id, index, path, value } => {
                let path = FieldPath::parse(path)?;
                Self::map_block(doc, block_id, |block| {
                    let label = format!("{}.items", block_id);
                    let items = update_item(items_of(block, "items"), *index, &path, value, &label)?;
                    Ok(block.with_field("items", Node::from(items)))
                })
            }

            Mutation::AddBlockItem { block_id } => Self::map_block(doc, block_id, |block| {
                let kind = block.get("type").and_then(Node::as_str).unwrap_or_default();
                let mut items = items_of(block, "items").to_vec();
                items.push(new_block_item(kind));
                Ok(block.with_field("items", Node::from(items)))
            }),

            Mutation::RemoveBlockItem { block_id, index } => Self::map_block(doc, block_id, |block| {
                let label = format!("{}.items", block_id);
                let items = remove_item(items_of(block, "items"), *index, &label)?;
                Ok(block.with_field("items", Node::from(items)))
            }),

            Mutation::UpdateSectionItem { section, index, path, value } => {
                let path = FieldPath::parse(path)?;
                Self::map_section_collection(doc, *section, |items, label| {
                    update_item(items, *index, &path, value, label)
                })
            }

            Mutation::AddSectionItem { section } => {
                Self::map_section_collection(doc, *section, |items, _| {
                    let mut items = items.to_vec();
                    items.push(new_section_item(section.as_str()));
                    Ok(items)
                })
            }

            Mutation::RemoveSectionItem { section, index } => {
                Self::map_section_collection(doc, *section, |items, label| {
                    remove_item(items, *index, label)
                })
            }

            Mutation::AddBlock { template, id } => Self::apply_add_block(doc, template, id),

            Mutation::RemoveSection { section } => Self::apply_remove_section(doc, section),

            Mutation::ApplyThemePreset { theme } => {
                let mut updates = vec![("theme", Node::from(theme.as_str()))];
                if let Some(preset) = theme.preset() {
                    updates.extend(preset.fields().map(|(key, value)| (key, Node::from(value))));
                }
                Ok(doc.with_fields(updates))
            }

            Mutation::ReplaceDocument { document } => Ok(document.clone()),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetRoot { .. } => "setRoot",
            Mutation::UpdateField { .. } => "updateField",
            Mutation::UpdateListItem { .. } => "updateListItem",
            Mutation::InsertListItem { .. } => "insertListItem",
            Mutation::RemoveListItem { .. } => "removeListItem",
            Mutation::ReorderSections { .. } => "reorderSections",
            Mutation::UpdateBlock { .. } => "updateBlock",
            Mutation::UpdateBlockItem { .. } => "updateBlockItem",
            Mutation::AddBlockItem { .. } => "addBlockItem",
            Mutation::RemoveBlockItem { .. } => "removeBlockItem",
            Mutation::UpdateSectionItem { .. } => "updateSectionItem",
            Mutation::AddSectionItem { .. } => "addSectionItem",
            Mutation::RemoveSectionItem { .. } => "removeSectionItem",
            Mutation::AddBlock { .. } => "addBlock",
            Mutation::RemoveSection { .. } => "removeSection",
            Mutation::ApplyThemePreset { .. } => "applyThemePreset",
            Mutation::ReplaceDocument { .. } => "replaceDocument",
        }
    }

    fn apply_update_field(doc: &Node, section: &str, path: &str, value: &Node) -> MutationResult {
        let path = FieldPath::parse(path)?;

        match doc.get(section) {
            // Unknown sections are ignored rather than created
            None | Some(Node::Null) => Ok(doc.clone()),
            Some(data) if data.is_map() => Ok(doc.with_field(section, path.set(data, value.clone()))),
            Some(other) => Err(MutationError::wrong_type(section, "record", other)),
        }
    }

    fn apply_update_list_item(
        doc: &Node,
        collection: &str,
        index: usize,
        path: &str,
        value: &Node,
    ) -> MutationResult {
        let collection_path = FieldPath::parse(collection)?;
        let path = FieldPath::parse(path)?;

        let items = list_at(doc, &collection_path)?;
        let items = update_item(items, index, &path, value, collection)?;
        Ok(collection_path.set(doc, Node::from(items)))
    }

    fn apply_insert_list_item(doc: &Node, collection: &str, index: usize, item: &Node) -> MutationResult {
        let collection_path = FieldPath::parse(collection)?;

        let mut items = match collection_path.get(doc) {
            None | Some(Node::Null) => Vec::new(),
            Some(Node::List(items)) => items.to_vec(),
            Some(other) => return Err(MutationError::wrong_type(collection, "list", other)),
        };

        let insert_index = index.min(items.len());
        items.insert(insert_index, item.clone());
        Ok(collection_path.set(doc, Node::from(items)))
    }

    fn apply_remove_list_item(doc: &Node, collection: &str, index: usize) -> MutationResult {
        let collection_path = FieldPath::parse(collection)?;

        let items = list_at(doc, &collection_path)?;
        let items = remove_item(items, index, collection)?;
        Ok(collection_path.set(doc, Node::from(items)))
    }

    /// Rebuild the block with `block_id`; unknown ids and a missing block list leave `doc` as-is
    fn map_block<F>(doc: &Node, block_id: &str, f: F) -> MutationResult
    where
        F: FnOnce(&Node) -> MutationResult,
    {
        let blocks = match doc.get(CONTENT_BLOCKS_KEY) {
            Some(Node::List(blocks)) => blocks,
            // Imported pages may carry no blocks at all
            None | Some(Node::Null) => return Ok(doc.clone()),
            Some(other) => return Err(MutationError::wrong_type(CONTENT_BLOCKS_KEY, "list", other)),
        };

        let Some(position) = blocks.iter().position(|b| block_has_id(b, block_id)) else {
            return Ok(doc.clone());
        };

        let updated = f(&blocks[position])?;
        if updated.ptr_eq(&blocks[position]) {
            return Ok(doc.clone());
        }

        let mut next = blocks.to_vec();
        next[position] = updated;
        Ok(doc.with_field(CONTENT_BLOCKS_KEY, Node::from(next)))
    }

    /// Rebuild the item collection of a singleton section.
    ///
    /// The collection is `links` when the section has one, `items` otherwise.
    fn map_section_collection<F>(doc: &Node, section: SectionKind, f: F) -> MutationResult
    where
        F: FnOnce(&[Node], &str) -> Result<Vec<Node>, MutationError>,
    {
        let key = section.as_str();
        let data = match doc.get(key) {
            Some(data) if data.is_map() => data,
            Some(other) => return Err(MutationError::wrong_type(key, "record", other)),
            None => return Err(MutationError::SectionNotFound(key.to_string())),
        };

        let collection_key = match data.get("links") {
            Some(links) if !links.is_null() => "links",
            _ => "items",
        };
        let label = format!("{}.{}", key, collection_key);

        let items = f(items_of(data, collection_key), &label)?;
        Ok(doc.with_field(key, data.with_field(collection_key, Node::from(items))))
    }

    fn apply_add_block(doc: &Node, template: &str, id: &str) -> MutationResult {
        let blocks = items_of(doc, CONTENT_BLOCKS_KEY);
        if blocks.iter().any(|b| block_has_id(b, id)) {
            return Err(MutationError::DuplicateBlock(id.to_string()));
        }

        let mut blocks = blocks.to_vec();
        blocks.push(new_block(template, id));

        let mut order = items_of(doc, SECTION_ORDER_KEY).to_vec();
        order.push(Node::from(SectionId::block(id).to_string()));

        Ok(doc.with_fields([
            (CONTENT_BLOCKS_KEY, Node::from(blocks)),
            (SECTION_ORDER_KEY, Node::from(order)),
        ]))
    }

    fn apply_remove_section(doc: &Node, section: &SectionId) -> MutationResult {
        let mut updates: Vec<(String, Node)> = Vec::new();

        match section {
            SectionId::Global => return Err(MutationError::CannotRemoveGlobal),
            SectionId::Block(id) => {
                if let Some(Node::List(blocks)) = doc.get(CONTENT_BLOCKS_KEY) {
                    let remaining = blocks.iter().filter(|b| !block_has_id(b, id)).cloned();
                    updates.push((CONTENT_BLOCKS_KEY.to_string(), Node::list(remaining)));
                }
            }
            SectionId::Singleton(kind) => {
                // Singletons stay in the document, hidden
                if let Some(data) = doc.get(kind.as_str()).filter(|d| d.is_map()) {
                    updates.push((kind.as_str().to_string(), data.with_field("show", Node::Bool(false))));
                }
            }
        }

        let wire = section.to_string();
        if let Some(Node::List(order)) = doc.get(SECTION_ORDER_KEY) {
            let remaining = order.iter().filter(|entry| entry.as_str() != Some(wire.as_str())).cloned();
            updates.push((SECTION_ORDER_KEY.to_string(), Node::list(remaining)));
        }

        Ok(doc.with_fields(updates))
    }
}

fn block_has_id(block: &Node, id: &str) -> bool {
    block.get("id").and_then(Node::as_str) == Some(id)
}

/// List stored under `key`, empty when absent or not a list
fn items_of<'a>(record: &'a Node, key: &str) -> &'a [Node] {
    record.get(key).and_then(Node::as_list).unwrap_or(&[])
}

fn list_at<'a>(doc: &'a Node, collection: &FieldPath) -> Result<&'a [Node], MutationError> {
    match collection.get(doc) {
        Some(Node::List(items)) => Ok(items.as_slice()),
        Some(other) => Err(MutationError::wrong_type(collection.to_string(), "list", other)),
        None => Err(MutationError::CollectionNotFound(collection.to_string())),
    }
}

/// Copy of `items` with the element at `index` rewritten at `path`
fn update_item(
    items: &[Node],
    index: usize,
    path: &FieldPath,
    value: &Node,
    label: &str,
) -> Result<Vec<Node>, MutationError> {
    let item = items
        .get(index)
        .ok_or_else(|| MutationError::out_of_bounds(label, index, items.len()))?;

    // Items are records; a missing (null) slot starts as an empty record
    if !item.is_map() && !item.is_null() {
        return Err(MutationError::wrong_type(format!("{}.{}", label, index), "record", item));
    }
    let base = if item.is_null() { Node::empty_map() } else { item.clone() };

    let mut next = items.to_vec();
    next[index] = path.set(&base, value.clone());
    Ok(next)
}

/// Copy of `items` without the element at `index`
fn remove_item(items: &[Node], index: usize, label: &str) -> Result<Vec<Node>, MutationError> {
    if index >= items.len() {
        return Err(MutationError::out_of_bounds(label, index, items.len()));
    }

    let mut next = items.to_vec();
    next.remove(index);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_document::{default_document, get_deep_value};
    use serde_json::json;

    fn doc_with_blocks() -> Node {
        Node::from(json!({
            "hero": {"title": "A"},
            "navbar": {"links": [{"label": "Home", "href": "#"}]},
            "features": {"items": [{"title": "One"}]},
            "sectionOrder": ["navbar", "hero", "block-b1", "block-b2"],
            "contentBlocks": [
                {"id": "b1", "type": "gallery", "title": "Gallery", "items": [{"x": 1}, {"x": 2}]},
                {"id": "b2", "type": "features", "title": "Features", "items": []}
            ]
        }))
    }

    #[test]
    fn test_update_field() {
        let doc = doc_with_blocks();
        let next = Mutation::UpdateField {
            section: "hero".to_string(),
            path: "title".to_string(),
            value: Node::from("B"),
        }
        .apply(&doc)
        .unwrap();

        assert_eq!(get_deep_value(&next, "hero.title"), Some(&Node::from("B")));
        assert!(next.get("navbar").unwrap().ptr_eq(doc.get("navbar").unwrap()));
    }

    #[test]
    fn test_update_field_unknown_section_is_noop() {
        let doc = doc_with_blocks();
        let next = Mutation::UpdateField {
            section: "nope".to_string(),
            path: "title".to_string(),
            value: Node::from("B"),
        }
        .apply(&doc)
        .unwrap();
        assert!(next.ptr_eq(&doc));
    }

    #[test]
    fn test_update_field_rejects_bad_path() {
        let doc = doc_with_blocks();
        let result = Mutation::UpdateField {
            section: "hero".to_string(),
            path: "".to_string(),
            value: Node::Null,
        }
        .apply(&doc);
        assert_eq!(result, Err(MutationError::Path(PathError::Empty)));
    }

    #[test]
    fn test_update_list_item_shares_other_items() {
        let doc = Node::from(json!({"items": [{"x": 1}, {"x": 2}]}));
        let next = Mutation::UpdateListItem {
            collection: "items".to_string(),
            index: 1,
            path: "x".to_string(),
            value: Node::from(9),
        }
        .apply(&doc)
        .unwrap();

        let before = doc.get("items").and_then(Node::as_list).unwrap();
        let after = next.get("items").and_then(Node::as_list).unwrap();
        assert!(after[0].ptr_eq(&before[0]));
        assert!(!after[1].ptr_eq(&before[1]));
        assert_eq!(after[1].get("x"), Some(&Node::from(9)));
    }

    #[test]
    fn test_update_list_item_out_of_bounds() {
        let doc = doc_with_blocks();
        let result = Mutation::UpdateListItem {
            collection: "contentBlocks".to_string(),
            index: 5,
            path: "title".to_string(),
            value: Node::from("x"),
        }
        .apply(&doc);
        assert_eq!(
            result,
            Err(MutationError::IndexOutOfBounds {
                collection: "contentBlocks".to_string(),
                index: 5,
                len: 2
            })
        );
    }

    #[test]
    fn test_insert_list_item_clamps_index() {
        let doc = Node::from(json!({"features": {"items": [{"t": 1}]}}));
        let next = Mutation::InsertListItem {
            collection: "features.items".to_string(),
            index: 99,
            item: Node::from(json!({"t": 2})),
        }
        .apply(&doc)
        .unwrap();
        assert_eq!(next.to_json(), json!({"features": {"items": [{"t": 1}, {"t": 2}]}}));

        let next = Mutation::InsertListItem {
            collection: "features.items".to_string(),
            index: 0,
            item: Node::from(json!({"t": 0})),
        }
        .apply(&next)
        .unwrap();
        assert_eq!(get_deep_value(&next, "features.items").unwrap().to_json(), json!([{"t": 0}, {"t": 1}, {"t": 2}]));
    }

    #[test]
    fn test_insert_into_missing_collection_creates_it() {
        let doc = Node::from(json!({"team": {}}));
        let next = Mutation::InsertListItem {
            collection: "team.items".to_string(),
            index: 0,
            item: Node::from(json!({"name": "Ann"})),
        }
        .apply(&doc)
        .unwrap();
        assert_eq!(next.to_json(), json!({"team": {"items": [{"name": "Ann"}]}}));
    }

    #[test]
    fn test_remove_list_item() {
        let doc = Node::from(json!({"items": [1, 2, 3]}));
        let next = Mutation::RemoveListItem { collection: "items".to_string(), index: 1 }
            .apply(&doc)
            .unwrap();
        assert_eq!(next.to_json(), json!({"items": [1, 3]}));

        let result = Mutation::RemoveListItem { collection: "items".to_string(), index: 3 }.apply(&doc);
        assert!(matches!(result, Err(MutationError::IndexOutOfBounds { .. })));
    }

    #[test]
    fn test_remove_from_non_list() {
        let doc = Node::from(json!({"hero": {"title": "A"}}));
        let result = Mutation::RemoveListItem { collection: "hero".to_string(), index: 0 }.apply(&doc);
        assert_eq!(
            result,
            Err(MutationError::WrongType {
                path: "hero".to_string(),
                expected: "list",
                found: "record"
            })
        );
    }

    #[test]
    fn test_reorder_sections() {
        let doc = doc_with_blocks();
        let next = Mutation::ReorderSections {
            order: vec![
                SectionId::block("b2"),
                SectionId::Singleton(SectionKind::Hero),
                SectionId::Singleton(SectionKind::Navbar),
            ],
        }
        .apply(&doc)
        .unwrap();
        assert_eq!(next.get("sectionOrder").unwrap().to_json(), json!(["block-b2", "hero", "navbar"]));
        assert!(next.get("contentBlocks").unwrap().ptr_eq(doc.get("contentBlocks").unwrap()));
    }

    #[test]
    fn test_update_block_by_id() {
        let doc = doc_with_blocks();
        let next = Mutation::UpdateBlock {
            block_id: "b2".to_string(),
            path: "headingTypography.color".to_string(),
            value: Node::from("#111"),
        }
        .apply(&doc)
        .unwrap();

        let before = doc.get("contentBlocks").and_then(Node::as_list).unwrap();
        let after = next.get("contentBlocks").and_then(Node::as_list).unwrap();
        assert!(after[0].ptr_eq(&before[0]));
        assert_eq!(get_deep_value(&after[1], "headingTypography.color"), Some(&Node::from("#111")));
    }

    #[test]
    fn test_unknown_block_is_noop() {
        let doc = doc_with_blocks();
        let mutations = [
            Mutation::UpdateBlock { block_id: "zz".into(), path: "title".into(), value: Node::from("x") },
            Mutation::AddBlockItem { block_id: "zz".into() },
            Mutation::RemoveBlockItem { block_id: "zz".into(), index: 0 },
        ];
        for mutation in mutations {
            assert!(mutation.apply(&doc).unwrap().ptr_eq(&doc), "{} should be a no-op", mutation.name());
        }
    }

    #[test]
    fn test_block_ops_without_block_list_are_noops() {
        let doc = Node::from(json!({"navbar": {}, "hero": {}}));
        let mutations = [
            Mutation::UpdateBlock { block_id: "b1".into(), path: "title".into(), value: Node::from("x") },
            Mutation::UpdateBlockItem { block_id: "b1".into(), index: 0, path: "title".into(), value: Node::from("x") },
            Mutation::AddBlockItem { block_id: "b1".into() },
            Mutation::RemoveBlockItem { block_id: "b1".into(), index: 0 },
        ];
        for mutation in mutations {
            assert!(mutation.apply(&doc).unwrap().ptr_eq(&doc), "{} should be a no-op", mutation.name());
        }
    }

    #[test]
    fn test_block_items() {
        let doc = doc_with_blocks();

        let next = Mutation::AddBlockItem { block_id: "b1".into() }.apply(&doc).unwrap();
        let items = get_deep_value(&next, "contentBlocks").and_then(Node::as_list).unwrap()[0]
            .get("items")
            .unwrap()
            .to_json();
        assert_eq!(items, json!([{"x": 1}, {"x": 2}, {"title": "Image", "url": "https://placehold.co/600x400"}]));

        let next = Mutation::UpdateBlockItem {
            block_id: "b1".into(),
            index: 0,
            path: "x".into(),
            value: Node::from(5),
        }
        .apply(&next)
        .unwrap();
        let next = Mutation::RemoveBlockItem { block_id: "b1".into(), index: 1 }.apply(&next).unwrap();

        let block = &next.get("contentBlocks").and_then(Node::as_list).unwrap()[0];
        assert_eq!(
            block.get("items").unwrap().to_json(),
            json!([{"x": 5}, {"title": "Image", "url": "https://placehold.co/600x400"}])
        );
    }

    #[test]
    fn test_section_items_use_links_when_present() {
        let doc = doc_with_blocks();

        let next = Mutation::AddSectionItem { section: SectionKind::Navbar }.apply(&doc).unwrap();
        assert_eq!(
            get_deep_value(&next, "navbar.links").unwrap().to_json(),
            json!([{"label": "Home", "href": "#"}, {"label": "New Link", "href": "#"}])
        );
        assert!(get_deep_value(&next, "navbar.items").is_none());

        let next = Mutation::UpdateSectionItem {
            section: SectionKind::Features,
            index: 0,
            path: "title".into(),
            value: Node::from("Uno"),
        }
        .apply(&next)
        .unwrap();
        assert_eq!(get_deep_value(&next, "features.items").unwrap().to_json(), json!([{"title": "Uno"}]));

        let next = Mutation::RemoveSectionItem { section: SectionKind::Navbar, index: 0 }
            .apply(&next)
            .unwrap();
        assert_eq!(
            get_deep_value(&next, "navbar.links").unwrap().to_json(),
            json!([{"label": "New Link", "href": "#"}])
        );
    }

    #[test]
    fn test_section_item_on_missing_section() {
        let doc = doc_with_blocks();
        let result = Mutation::AddSectionItem { section: SectionKind::Team }.apply(&doc);
        assert_eq!(result, Err(MutationError::SectionNotFound("team".to_string())));
    }

    #[test]
    fn test_add_block_updates_blocks_and_order() {
        let doc = doc_with_blocks();
        let next = Mutation::AddBlock { template: "ticker".into(), id: "t1".into() }
            .apply(&doc)
            .unwrap();

        let blocks = next.get("contentBlocks").and_then(Node::as_list).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2].get("type").and_then(Node::as_str), Some("ticker"));
        assert_eq!(
            next.get("sectionOrder").and_then(Node::as_list).unwrap().last(),
            Some(&Node::from("block-t1"))
        );

        let duplicate = Mutation::AddBlock { template: "ticker".into(), id: "t1".into() }.apply(&next);
        assert_eq!(duplicate, Err(MutationError::DuplicateBlock("t1".to_string())));
    }

    #[test]
    fn test_remove_block_section() {
        let doc = doc_with_blocks();
        let next = Mutation::RemoveSection { section: SectionId::block("b1") }.apply(&doc).unwrap();

        assert_eq!(next.get("contentBlocks").and_then(Node::as_list).unwrap().len(), 1);
        assert_eq!(next.get("sectionOrder").unwrap().to_json(), json!(["navbar", "hero", "block-b2"]));
    }

    #[test]
    fn test_remove_singleton_hides_it() {
        let doc = doc_with_blocks();
        let next = Mutation::RemoveSection { section: SectionId::Singleton(SectionKind::Hero) }
            .apply(&doc)
            .unwrap();

        assert_eq!(get_deep_value(&next, "hero.show"), Some(&Node::Bool(false)));
        assert_eq!(get_deep_value(&next, "hero.title"), Some(&Node::from("A")));
        assert_eq!(next.get("sectionOrder").unwrap().to_json(), json!(["navbar", "block-b1", "block-b2"]));
        // Previous version untouched
        assert_eq!(get_deep_value(&doc, "hero.show"), None);
    }

    #[test]
    fn test_cannot_remove_global() {
        let doc = doc_with_blocks();
        let result = Mutation::RemoveSection { section: SectionId::Global }.apply(&doc);
        assert_eq!(result, Err(MutationError::CannotRemoveGlobal));
    }

    #[test]
    fn test_apply_theme_preset() {
        let doc = default_document();
        let next = Mutation::ApplyThemePreset { theme: Theme::Dark }.apply(&doc).unwrap();
        assert_eq!(next.get("theme"), Some(&Node::from("dark")));
        assert_eq!(next.get("backgroundColor"), Some(&Node::from("#111827")));
        assert_eq!(next.get("primaryColor"), Some(&Node::from("#3b82f6")));

        let next = Mutation::ApplyThemePreset { theme: Theme::Nord }.apply(&next).unwrap();
        assert_eq!(next.get("theme"), Some(&Node::from("nord")));
        assert_eq!(next.get("backgroundColor"), Some(&Node::from("#111827")));
    }

    #[test]
    fn test_replace_document_returns_it() {
        let doc = doc_with_blocks();
        let replacement = default_document();
        let next = Mutation::ReplaceDocument { document: replacement.clone() }.apply(&doc).unwrap();
        assert!(next.ptr_eq(&replacement));
    }

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateBlockItem {
            block_id: "b1".to_string(),
            index: 3,
            path: "title".to_string(),
            value: Node::from("Hi"),
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(
            json,
            json!({"op": "updateBlockItem", "blockId": "b1", "index": 3, "path": "title", "value": "Hi"})
        );

        let deserialized: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_mutation_deserializes_typed_fields() {
        let mutation: Mutation =
            serde_json::from_value(json!({"op": "reorderSections", "order": ["hero", "block-x"]})).unwrap();
        assert_eq!(
            mutation,
            Mutation::ReorderSections {
                order: vec![SectionId::Singleton(SectionKind::Hero), SectionId::block("x")]
            }
        );

        let bad: Result<Mutation, _> = serde_json::from_value(json!({"op": "reorderSections", "order": ["bogus"]}));
        assert!(bad.is_err());
    }
}
