use thiserror::Error;

pub type DocumentResult<T> = Result<T, DocumentError>;

/// Invalid dotted path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Path is empty")]
    Empty,

    #[error("Path `{path}` has an empty segment at position {position}")]
    EmptySegment { path: String, position: usize },
}

impl PathError {
    pub fn empty_segment(path: impl Into<String>, position: usize) -> Self {
        Self::EmptySegment {
            path: path.into(),
            position,
        }
    }
}

/// A document from an external source failed the shape check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Project root must be a record, found {0}")]
    NotARecord(&'static str),

    #[error("Missing required section `{0}`")]
    MissingSection(String),

    #[error("Field `{field}` must be a {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Content block {index} has no string `id`")]
    BlockWithoutId { index: usize },
}

impl ImportError {
    pub fn wrong_type(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
            found,
        }
    }
}

/// Errors raised while reading or interpreting documents
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid project: {0}")]
    Import(#[from] ImportError),

    #[error("Invalid path: {0}")]
    Path(#[from] PathError),

    #[error("Unknown section kind: {0}")]
    UnknownSection(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}
