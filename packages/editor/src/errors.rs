//! Error types for the editor

use crate::generator::GeneratorError;
use crate::mutations::MutationError;
use landing_document::{DocumentError, ImportError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Invalid project: {0}")]
    Import(#[from] ImportError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Generation failed: {0}")]
    Generation(#[from] GeneratorError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Section has no item list: {0}")]
    NoItemList(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

pub type EditorResult<T> = Result<T, EditorError>;
