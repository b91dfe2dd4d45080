//! # Configuration Controller
//!
//! Owns the edited document, its history and the editor's selection state.
//!
//! Every editing operation goes through [`ConfigurationController::apply`],
//! which derives the next document from the current present and commits it as
//! exactly one history entry. Failed or no-op edits commit nothing.
//!
//! ## Example
//!
//! ```rust
//! use landing_document::{default_document, get_deep_value, Node};
//! use landing_editor::ConfigurationController;
//!
//! let mut controller = ConfigurationController::new(default_document());
//! controller.update_field("hero", "title", Node::from("Hello")).unwrap();
//! assert_eq!(get_deep_value(controller.document(), "hero.title"), Some(&Node::from("Hello")));
//!
//! controller.undo();
//! assert!(controller.can_redo());
//! ```

use crate::errors::{EditorError, EditorResult};
use crate::generator::{GenerationRequest, GeneratorError, PageGenerator};
use crate::history::HistoryStore;
use crate::mutations::Mutation;
use landing_document::{
    merge_over_defaults, parse_project, validate_import, with_default_design, Node, SectionId,
    SectionKind, Theme, CONTENT_BLOCKS_KEY,
};
use serde::{Deserialize, Serialize};

/// Primary colours picked from by [`ConfigurationController::randomize_primary_color`]
pub const PRIMARY_SWATCHES: [&str; 8] = [
    "#2563eb", "#4f46e5", "#db2777", "#dc2626", "#d97706", "#059669", "#0891b2", "#7c3aed",
];

/// Section backgrounds picked from by [`ConfigurationController::randomize_section_backgrounds`]
pub const BACKGROUND_SWATCHES: [&str; 8] = [
    "#ffffff", "#f8fafc", "#f3f4f6", "#f0f9ff", "#f5f3ff", "#fff1f2", "#fff7ed", "#f0fdf4",
];

const RANDOMIZED_SECTIONS: [SectionKind; 5] = [
    SectionKind::Navbar,
    SectionKind::Hero,
    SectionKind::Features,
    SectionKind::Gallery,
    SectionKind::Footer,
];

const BLOCK_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BLOCK_ID_LEN: usize = 9;

/// Editor panel tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    #[default]
    Content,
    Style,
}

pub struct ConfigurationController {
    history: HistoryStore<Node>,

    /// Section shown in the editor panel
    active_section: SectionId,

    active_tab: EditorTab,

    /// Source for block ids and colour shuffles
    rng: fastrand::Rng,
}

impl ConfigurationController {
    /// Create a controller with unlimited undo history
    pub fn new(document: Node) -> Self {
        Self::with_history_limit(document, 0)
    }

    /// Create a controller keeping at most `limit` undo levels (0 = unlimited)
    pub fn with_history_limit(document: Node, limit: usize) -> Self {
        Self {
            history: HistoryStore::with_max_levels(with_default_design(&document), limit),
            active_section: SectionId::Global,
            active_tab: EditorTab::Content,
            rng: fastrand::Rng::new(),
        }
    }

    /// Use a seeded random source (block ids, colour shuffles)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Current document
    pub fn document(&self) -> &Node {
        self.history.present()
    }

    pub fn history(&self) -> &HistoryStore<Node> {
        &self.history
    }

    pub fn active_section(&self) -> &SectionId {
        &self.active_section
    }

    pub fn active_tab(&self) -> EditorTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: EditorTab) {
        self.active_tab = tab;
    }

    /// Focus a section; the panel always reopens on the content tab
    pub fn select_section(&mut self, section: SectionId) {
        tracing::debug!("Selecting section {}", section);
        self.active_section = section;
        self.active_tab = EditorTab::Content;
    }

    /// Apply one mutation as one history entry.
    ///
    /// Returns whether anything was committed. On error the history is untouched.
    pub fn apply(&mut self, mutation: Mutation) -> EditorResult<bool> {
        let committed = self
            .history
            .try_update(|doc| mutation.apply(doc))
            .inspect_err(|e| tracing::warn!("{} rejected: {}", mutation.name(), e))?;

        if committed {
            tracing::debug!(
                "{} committed (undo levels: {})",
                mutation.name(),
                self.history.undo_levels()
            );
        } else {
            tracing::debug!("{} changed nothing", mutation.name());
        }

        Ok(committed)
    }

    pub fn update_field(&mut self, section: &str, path: &str, value: Node) -> EditorResult<bool> {
        self.apply(Mutation::UpdateField {
            section: section.to_string(),
            path: path.to_string(),
            value,
        })
    }

    pub fn update_list_item(
        &mut self,
        collection: &str,
        index: usize,
        path: &str,
        value: Node,
    ) -> EditorResult<bool> {
        self.apply(Mutation::UpdateListItem {
            collection: collection.to_string(),
            index,
            path: path.to_string(),
            value,
        })
    }

    pub fn insert_list_item(&mut self, collection: &str, index: usize, item: Node) -> EditorResult<bool> {
        self.apply(Mutation::InsertListItem {
            collection: collection.to_string(),
            index,
            item,
        })
    }

    pub fn remove_list_item(&mut self, collection: &str, index: usize) -> EditorResult<bool> {
        self.apply(Mutation::RemoveListItem {
            collection: collection.to_string(),
            index,
        })
    }

    pub fn reorder_sections(&mut self, order: Vec<SectionId>) -> EditorResult<bool> {
        self.apply(Mutation::ReorderSections { order })
    }

    pub fn update_block(&mut self, block_id: &str, path: &str, value: Node) -> EditorResult<bool> {
        self.apply(Mutation::UpdateBlock {
            block_id: block_id.to_string(),
            path: path.to_string(),
            value,
        })
    }

    pub fn update_block_item(
        &mut self,
        block_id: &str,
        index: usize,
        path: &str,
        value: Node,
    ) -> EditorResult<bool> {
        self.apply(Mutation::UpdateBlockItem {
            block_id: block_id.to_string(),
            index,
            path: path.to_string(),
            value,
        })
    }

    pub fn add_block_item(&mut self, block_id: &str) -> EditorResult<bool> {
        self.apply(Mutation::AddBlockItem {
            block_id: block_id.to_string(),
        })
    }

    pub fn remove_block_item(&mut self, block_id: &str, index: usize) -> EditorResult<bool> {
        self.apply(Mutation::RemoveBlockItem {
            block_id: block_id.to_string(),
            index,
        })
    }

    pub fn update_section_item(
        &mut self,
        section: SectionKind,
        index: usize,
        path: &str,
        value: Node,
    ) -> EditorResult<bool> {
        self.apply(Mutation::UpdateSectionItem {
            section,
            index,
            path: path.to_string(),
            value,
        })
    }

    pub fn add_section_item(&mut self, section: SectionKind) -> EditorResult<bool> {
        self.apply(Mutation::AddSectionItem { section })
    }

    pub fn remove_section_item(&mut self, section: SectionKind, index: usize) -> EditorResult<bool> {
        self.apply(Mutation::RemoveSectionItem { section, index })
    }

    /// Add a content block from `template` under a fresh id and select it.
    ///
    /// Returns the new block id.
    pub fn add_block(&mut self, template: &str) -> EditorResult<String> {
        let mut id = self.next_block_id();
        while self.has_block(&id) {
            id = self.next_block_id();
        }

        self.add_block_with_id(template, &id)?;
        Ok(id)
    }

    /// Add a content block with a caller-chosen id and select it
    pub fn add_block_with_id(&mut self, template: &str, id: &str) -> EditorResult<bool> {
        let committed = self.apply(Mutation::AddBlock {
            template: template.to_string(),
            id: id.to_string(),
        })?;

        tracing::info!("Added {} block {}", template, id);
        self.select_section(SectionId::block(id));
        Ok(committed)
    }

    /// Remove a section from the page; selection returns to the global settings
    pub fn remove_section(&mut self, section: SectionId) -> EditorResult<bool> {
        let committed = self.apply(Mutation::RemoveSection { section })?;
        self.active_section = SectionId::Global;
        Ok(committed)
    }

    pub fn apply_theme_preset(&mut self, theme: Theme) -> EditorResult<bool> {
        self.apply(Mutation::ApplyThemePreset { theme })
    }

    /// Pick a new primary colour from [`PRIMARY_SWATCHES`]
    pub fn randomize_primary_color(&mut self) -> EditorResult<bool> {
        let color = self.pick(&PRIMARY_SWATCHES);
        self.apply(Mutation::SetRoot {
            path: "primaryColor".to_string(),
            value: Node::from(color),
        })
    }

    /// Give the main singleton sections and every content block a random
    /// background from [`BACKGROUND_SWATCHES`], as a single history entry
    pub fn randomize_section_backgrounds(&mut self) -> EditorResult<bool> {
        let doc = self.history.present();
        let mut updates: Vec<(&str, Node)> = Vec::new();

        for kind in RANDOMIZED_SECTIONS {
            if let Some(section) = doc.get(kind.as_str()).filter(|s| s.is_map()) {
                let color = self.rng.usize(..BACKGROUND_SWATCHES.len());
                updates.push((
                    kind.as_str(),
                    section.with_field("backgroundColor", Node::from(BACKGROUND_SWATCHES[color])),
                ));
            }
        }

        if let Some(blocks) = doc.get(CONTENT_BLOCKS_KEY).and_then(Node::as_list) {
            let blocks = blocks.iter().map(|block| {
                let color = self.rng.usize(..BACKGROUND_SWATCHES.len());
                block.with_field("backgroundColor", Node::from(BACKGROUND_SWATCHES[color]))
            });
            updates.push((CONTENT_BLOCKS_KEY, Node::list(blocks.collect::<Vec<_>>())));
        }

        let next = doc.with_fields(updates);
        self.apply(Mutation::ReplaceDocument { document: next })
    }

    /// Write `path` inside the active section.
    ///
    /// Global settings are written from the document root, content blocks by
    /// id, singleton sections by key.
    pub fn on_update(&mut self, path: &str, value: Node) -> EditorResult<bool> {
        match self.active_section.clone() {
            SectionId::Global => self.apply(Mutation::SetRoot {
                path: path.to_string(),
                value,
            }),
            SectionId::Block(id) => self.update_block(&id, path, value),
            SectionId::Singleton(kind) => self.update_field(kind.as_str(), path, value),
        }
    }

    /// Write `path` inside item `index` of the active section's item list
    pub fn on_item_update(&mut self, index: usize, path: &str, value: Node) -> EditorResult<bool> {
        match self.active_section.clone() {
            SectionId::Global => Err(EditorError::NoItemList(SectionId::Global.to_string())),
            SectionId::Block(id) => self.update_block_item(&id, index, path, value),
            SectionId::Singleton(kind) => self.update_section_item(kind, index, path, value),
        }
    }

    /// Append a default item to the active section's item list
    pub fn on_item_add(&mut self) -> EditorResult<bool> {
        match self.active_section.clone() {
            SectionId::Global => Err(EditorError::NoItemList(SectionId::Global.to_string())),
            SectionId::Block(id) => self.add_block_item(&id),
            SectionId::Singleton(kind) => self.add_section_item(kind),
        }
    }

    /// Remove item `index` of the active section's item list
    pub fn on_item_remove(&mut self, index: usize) -> EditorResult<bool> {
        match self.active_section.clone() {
            SectionId::Global => Err(EditorError::NoItemList(SectionId::Global.to_string())),
            SectionId::Block(id) => self.remove_block_item(&id, index),
            SectionId::Singleton(kind) => self.remove_section_item(kind, index),
        }
    }

    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        tracing::debug!("Undo: {}", if moved { "applied" } else { "nothing to undo" });
        moved
    }

    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        tracing::debug!("Redo: {}", if moved { "applied" } else { "nothing to redo" });
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Open a document with a fresh history and reset the selection
    pub fn load(&mut self, document: Node) {
        tracing::info!("Loading document (discarding {} undo levels)", self.history.undo_levels());
        self.history.reset(with_default_design(&document));
        self.active_section = SectionId::Global;
        self.active_tab = EditorTab::Content;
    }

    /// Replace the document with an imported project as one undoable edit.
    ///
    /// Text that is not valid JSON or lacks the required sections is rejected
    /// and the current document stays as it was.
    pub fn import_json(&mut self, text: &str) -> EditorResult<bool> {
        let document = parse_project(text).inspect_err(|e| tracing::warn!("Import rejected: {}", e))?;

        tracing::info!("Importing project");
        self.apply(Mutation::ReplaceDocument {
            document: with_default_design(&document),
        })
    }

    /// Current document as pretty-printed JSON
    pub fn export_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(self.document())?)
    }

    /// Replace the document with a generated page as one undoable edit.
    ///
    /// The generated page is merged over the default document (see
    /// [`merge_over_defaults`]). When the generator fails, returns nothing, or
    /// the merged page is malformed, the current document is left untouched.
    pub fn generate_with(
        &mut self,
        generator: &dyn PageGenerator,
        request: &GenerationRequest,
    ) -> EditorResult<bool> {
        tracing::info!("Generating page for topic {:?} ({} copy)", request.topic, request.length);

        let document = match generator.generate(request) {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::warn!("Generation returned no document");
                return Err(GeneratorError::Empty.into());
            }
            Err(e) => {
                tracing::warn!("Generation failed: {}", e);
                return Err(e.into());
            }
        };

        // Partial pages are completed from the defaults before the shape check
        let document = merge_over_defaults(&document);
        if let Err(e) = validate_import(&document) {
            tracing::warn!("Generated document rejected: {}", e);
            return Err(GeneratorError::InvalidOutput(e.to_string()).into());
        }

        self.apply(Mutation::ReplaceDocument { document })
    }

    /// Consume the controller, returning the current document
    pub fn into_document(self) -> Node {
        self.history.into_present()
    }

    fn has_block(&self, id: &str) -> bool {
        self.document()
            .get(CONTENT_BLOCKS_KEY)
            .and_then(Node::as_list)
            .map(|blocks| blocks.iter().any(|b| b.get("id").and_then(Node::as_str) == Some(id)))
            .unwrap_or(false)
    }

    fn next_block_id(&mut self) -> String {
        (0..BLOCK_ID_LEN)
            .map(|_| BLOCK_ID_ALPHABET[self.rng.usize(..BLOCK_ID_ALPHABET.len())] as char)
            .collect()
    }

    fn pick(&mut self, swatches: &[&'static str]) -> &'static str {
        swatches[self.rng.usize(..swatches.len())]
    }
}

impl Default for ConfigurationController {
    fn default() -> Self {
        Self::new(landing_document::default_document())
    }
}
