//! # Document Nodes
//!
//! Persistent, reference-counted tree used for every landing page document.
//!
//! Cloning a [`Node`] is O(1): lists and maps sit behind an [`Arc`], so an
//! edit that rebuilds one path of the tree shares every other subtree with
//! the previous version. [`Node::ptr_eq`] exposes that sharing as the
//! identity relation the history store uses to detect no-op commits.
//!
//! ```text
//! v1: root ─┬─ hero ── title "A"
//!           └─ footer ─ ...
//!
//! v2: root'─┬─ hero'── title "B"
//!           └─ footer ─ ...        (same Arc as v1)
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Fields of a record node
pub type Fields = BTreeMap<String, Node>;

/// A value inside a document tree
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(Arc<str>),
    List(Arc<Vec<Node>>),
    Map(Arc<Fields>),
}

impl Node {
    /// Create a record node from key/value pairs
    pub fn map<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Map(Arc::new(
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Create an empty record node
    pub fn empty_map() -> Self {
        Node::Map(Arc::new(Fields::new()))
    }

    /// Create a list node
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Node::List(Arc::new(items.into_iter().collect()))
    }

    /// Identity comparison.
    ///
    /// Scalars compare by value. Lists and maps compare by allocation, so two
    /// structurally equal records built separately are *not* identical.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Number(a), Node::Number(b)) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::List(a), Node::List(b)) => Arc::ptr_eq(a, b),
            (Node::Map(a), Node::Map(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Short name of the node's kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::List(_) => "list",
            Node::Map(_) => "record",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    pub fn as_map(&self) -> Option<&Fields> {
        match self {
            Node::Map(fields) => Some(fields.as_ref()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Look up a field of a record node
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|fields| fields.get(key))
    }

    /// Shallow copy of this record with one field replaced.
    ///
    /// Non-record nodes are treated as an empty record. The result is always a
    /// fresh allocation; every other field keeps its reference.
    pub fn with_field(&self, key: impl Into<String>, value: Node) -> Node {
        let mut fields = self.as_map().cloned().unwrap_or_default();
        fields.insert(key.into(), value);
        Node::Map(Arc::new(fields))
    }

    /// Shallow copy of this record without `key`
    pub fn without_field(&self, key: &str) -> Node {
        let mut fields = self.as_map().cloned().unwrap_or_default();
        fields.remove(key);
        Node::Map(Arc::new(fields))
    }

    /// Shallow copy of this record with several fields replaced at once
    pub fn with_fields<K, I>(&self, updates: I) -> Node
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        let mut fields = self.as_map().cloned().unwrap_or_default();
        fields.extend(updates.into_iter().map(|(k, v)| (k.into(), v)));
        Node::Map(Arc::new(fields))
    }

    /// Convert into a `serde_json::Value` (deep copy)
    pub fn to_json(&self) -> Value {
        Value::from(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Number(value.into())
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Number(value.into())
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::Number(value.into())
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map(Node::Number).unwrap_or(Node::Null)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(Arc::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(Arc::from(value))
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::List(Arc::new(items))
    }
}

impl From<Fields> for Node {
    fn from(fields: Fields) -> Self {
        Node::Map(Arc::new(fields))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(n),
            Value::String(s) => Node::from(s),
            Value::Array(items) => Node::list(items.into_iter().map(Node::from)),
            Value::Object(fields) => Node::map(fields.into_iter().map(|(k, v)| (k, Node::from(v)))),
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => Value::Number(n.clone()),
            Node::String(s) => Value::String(s.to_string()),
            Node::List(items) => Value::Array(items.iter().map(Value::from).collect()),
            Node::Map(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::List(items) => serializer.collect_seq(items.iter()),
            Node::Map(fields) => serializer.collect_map(fields.iter()),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Node::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clone_shares_allocation() {
        let node = Node::from(json!({"hero": {"title": "A"}}));
        let copy = node.clone();
        assert!(node.ptr_eq(&copy));
    }

    #[test]
    fn test_equal_records_are_not_identical() {
        let a = Node::from(json!({"x": 1}));
        let b = Node::from(json!({"x": 1}));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_scalars_compare_by_value() {
        assert!(Node::from("hello").ptr_eq(&Node::from("hello".to_string())));
        assert!(Node::from(3).ptr_eq(&Node::from(3i64)));
        assert!(!Node::from(true).ptr_eq(&Node::from(false)));
        assert!(!Node::Null.ptr_eq(&Node::from(false)));
    }

    #[test]
    fn test_with_field_keeps_siblings() {
        let root = Node::from(json!({"a": {"x": 1}, "b": {"y": 2}}));
        let next = root.with_field("a", Node::from(5));

        assert!(!next.ptr_eq(&root));
        assert!(next.get("b").unwrap().ptr_eq(root.get("b").unwrap()));
        assert_eq!(next.get("a"), Some(&Node::from(5)));
    }

    #[test]
    fn test_with_field_on_scalar_starts_empty() {
        let next = Node::from("text").with_field("k", Node::from(1));
        assert_eq!(next, Node::from(json!({"k": 1})));
    }

    #[test]
    fn test_json_conversion() {
        let value = json!({
            "title": "Hello",
            "count": 3,
            "ratio": 0.5,
            "show": true,
            "items": [{"x": 1}, null],
        });
        let node = Node::from(value.clone());
        assert_eq!(node.to_json(), value);
        assert_eq!(node.get("title").and_then(Node::as_str), Some("Hello"));
        assert_eq!(node.get("ratio").and_then(Node::as_f64), Some(0.5));
        assert_eq!(node.get("items").and_then(Node::as_list).map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_serde_roundtrip_through_text() {
        let node = Node::from(json!({"sectionOrder": ["navbar", "hero"], "design": {}}));
        let text = serde_json::to_string(&node).unwrap();
        let parsed: Node = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, node);
    }

    #[test]
    fn test_nan_becomes_null() {
        assert!(Node::from(f64::NAN).is_null());
    }
}
