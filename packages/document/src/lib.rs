//! # Landing Document
//!
//! Data model for landing page projects.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ node: persistent Arc-backed tree            │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ path: dotted paths + copy-on-write writes   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ schema / templates / defaults / validate    │
//! │  - section identity, themes                 │
//! │  - prefilled blocks and items               │
//! │  - import shape check                       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Documents are never mutated in place. Every edit produces a new root that
//! shares untouched subtrees with its predecessor, which is what lets the
//! editor keep a full undo history cheaply.

pub mod defaults;
pub mod error;
pub mod node;
pub mod path;
pub mod schema;
pub mod templates;
pub mod validate;

pub use defaults::{default_document, merge_over_defaults, with_default_design, MERGED_RECORDS};
pub use error::{DocumentError, DocumentResult, ImportError, PathError};
pub use node::{Fields, Node};
pub use path::{get_deep_value, set_deep_value, FieldPath};
pub use schema::{
    SectionId, SectionKind, Theme, ThemePreset, BLOCK_PREFIX, CONTENT_BLOCKS_KEY,
    SECTION_ORDER_KEY,
};
pub use templates::{new_block, new_block_item, new_section_item, BLOCK_TEMPLATES};
pub use validate::{parse_project, validate_import, REQUIRED_SECTIONS};
