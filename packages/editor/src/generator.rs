//! Page generation interface.
//!
//! The editor does not talk to any model service itself. A [`PageGenerator`]
//! turns a [`GenerationRequest`] into a whole document, and the controller
//! commits the result as one undoable step.

use landing_document::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How much copy the generated page should carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl fmt::Display for ContentLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContentLength::Short => "short",
            ContentLength::Medium => "medium",
            ContentLength::Long => "long",
        })
    }
}

/// Input for a full-page generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,

    #[serde(default)]
    pub length: ContentLength,

    /// Reference material pasted or uploaded by the user
    #[serde(default)]
    pub source_text: String,

    pub style_vibe: String,

    /// Explicit colours to use instead of letting the generator pick
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            length: ContentLength::default(),
            source_text: String::new(),
            style_vibe: "modern".to_string(),
            palette: None,
        }
    }

    pub fn with_length(mut self, length: ContentLength) -> Self {
        self.length = length;
        self
    }

    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = text.into();
        self
    }

    pub fn with_style_vibe(mut self, vibe: impl Into<String>) -> Self {
        self.style_vibe = vibe.into();
        self
    }

    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        self.palette = Some(palette);
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Generator returned no document")]
    Empty,

    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Generator produced an invalid document: {0}")]
    InvalidOutput(String),
}

/// Produces a complete document from a request.
///
/// `Ok(None)` means the generator ran but had nothing usable to offer.
pub trait PageGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<Option<Node>, GeneratorError>;
}

impl<F> PageGenerator for F
where
    F: Fn(&GenerationRequest) -> Result<Option<Node>, GeneratorError>,
{
    fn generate(&self, request: &GenerationRequest) -> Result<Option<Node>, GeneratorError> {
        self(request)
    }
}
