//! # Deep-Path Mutation
//!
//! Dotted field paths (`"hero.title"`, `"design.buttonStyle"`) and the
//! copy-on-write update that every editor operation is built on.
//!
//! [`set_deep_value`] rebuilds only the records on the path from the root to
//! the target field. Every sibling subtree keeps its [`Arc`](std::sync::Arc),
//! so callers can detect untouched sections with [`Node::ptr_eq`].
//!
//! ```rust
//! use landing_document::{set_deep_value, Node};
//! use serde_json::json;
//!
//! let doc = Node::from(json!({"hero": {"title": "A"}, "footer": {}}));
//! let next = set_deep_value(&doc, "hero.title", Node::from("B"));
//!
//! assert_eq!(next.get("hero").unwrap().get("title"), Some(&Node::from("B")));
//! assert!(next.get("footer").unwrap().ptr_eq(doc.get("footer").unwrap()));
//! ```

use crate::error::PathError;
use crate::node::Node;
use std::fmt;
use std::str::FromStr;

/// Parsed dot-delimited path into a document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path, rejecting empty paths and empty segments
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if let Some(position) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathError::empty_segment(path, position));
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment (the field addressed on the root)
    pub fn head(&self) -> &str {
        &self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Write `value` at this path; see [`set_deep_value`]
    pub fn set(&self, root: &Node, value: Node) -> Node {
        set_segments(root, &self.segments, value)
    }

    /// Read the value at this path; see [`get_deep_value`]
    pub fn get<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| node.get(segment))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Return a copy of `root` whose field at `path` holds `value`.
///
/// - A path without a dot sets a direct field of `root`.
/// - A dotted path recurses into the first segment, synthesizing an empty
///   record where the segment is missing (or is not a record).
/// - Each record on the path is a new allocation; every sibling keeps its
///   reference. `value` is installed as-is, never merged.
///
/// `root` must be a record and `path` non-empty. Both are checked with debug
/// assertions; release builds treat a non-record root as `{}`.
pub fn set_deep_value(root: &Node, path: &str, value: Node) -> Node {
    debug_assert!(!path.is_empty(), "set_deep_value called with an empty path");
    debug_assert!(
        root.is_map(),
        "set_deep_value called on a {} root (path `{}`)",
        root.kind(),
        path
    );

    let segments: Vec<&str> = path.split('.').collect();
    set_segments(root, &segments, value)
}

// Intermediate levels are not asserted: a missing or scalar field is replaced
// by a fresh record.
fn set_segments<S: AsRef<str>>(node: &Node, segments: &[S], value: Node) -> Node {
    match segments {
        [] => value,
        [last] => node.with_field(last.as_ref(), value),
        [head, rest @ ..] => {
            let child = node.get(head.as_ref()).cloned().unwrap_or_else(Node::empty_map);
            node.with_field(head.as_ref(), set_segments(&child, rest, value))
        }
    }
}

/// Read the value at a dotted path, if every segment resolves to a record field
pub fn get_deep_value<'a>(root: &'a Node, path: &str) -> Option<&'a Node> {
    path.split('.').try_fold(root, |node, segment| node.get(segment))
}
