//! # Landing Editor
//!
//! Editing engine for landing page documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ landing-document: Node tree + deep paths    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: controller + history                │
//! │  - Mutations as pure document → document    │
//! │  - One history entry per edit               │
//! │  - Undo/redo over shared snapshots          │
//! │  - Import, generation, saved projects       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderers: read present + selection         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are immutable**: every edit builds a new root
//! 2. **Sharing is identity**: untouched subtrees keep their reference, so
//!    "did anything change" is a pointer comparison
//! 3. **External data is checked at the edge**: imports and generated pages
//!    are validated before they can reach the history
//!
//! ## Usage
//!
//! ```rust
//! use landing_document::{default_document, Node, SectionId, SectionKind};
//! use landing_editor::{ConfigurationController, Mutation};
//!
//! let mut controller = ConfigurationController::new(default_document());
//!
//! controller.select_section(SectionId::Singleton(SectionKind::Hero));
//! controller.on_update("title", Node::from("Launch day")).unwrap();
//!
//! controller
//!     .apply(Mutation::AddSectionItem { section: SectionKind::Features })
//!     .unwrap();
//!
//! controller.undo();
//! controller.undo();
//! assert!(!controller.can_undo());
//! ```

mod controller;
mod errors;
mod generator;
mod history;
mod mutations;
mod projects;

pub use controller::{
    ConfigurationController, EditorTab, BACKGROUND_SWATCHES, PRIMARY_SWATCHES,
};
pub use errors::{EditorError, EditorResult};
pub use generator::{ContentLength, GenerationRequest, GeneratorError, PageGenerator};
pub use history::{HistoryStore, Snapshot};
pub use mutations::{Mutation, MutationError, MutationResult};
pub use projects::{
    default_project_name, export_file_name, ProjectLibrary, SavedProject, DEFAULT_PROJECT_NAME,
};
