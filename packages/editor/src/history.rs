//! # Undo/Redo History
//!
//! Snapshot-based history of a single document.
//!
//! ## Design
//!
//! - `present` is the document being rendered and edited
//! - `past` holds superseded snapshots, oldest first
//! - `future` holds undone snapshots, the next redo target first
//! - Committing a new snapshot clears `future`
//! - Committing the *same* snapshot (see [`Snapshot`]) is a no-op
//! - Undo/redo at an empty stack is a no-op, never an error
//!
//! Snapshots are cheap because documents share structure between versions;
//! the store only ever moves whole snapshots between the three slots.
//!
//! ## Example
//!
//! ```rust
//! use landing_editor::HistoryStore;
//! use std::sync::Arc;
//!
//! let mut history = HistoryStore::new(Arc::new("A".to_string()));
//! history.set(Arc::new("B".to_string()));
//! assert!(history.can_undo());
//!
//! history.undo();
//! assert_eq!(history.present().as_str(), "A");
//!
//! history.redo();
//! assert_eq!(history.present().as_str(), "B");
//! ```

use landing_document::Node;
use std::collections::VecDeque;
use std::mem;
use std::rc::Rc;
use std::sync::Arc;

/// Identity test used to skip no-op commits.
///
/// Implementations should answer "is this the very same snapshot", not "is it
/// structurally equal": pointer identity for shared data, value identity for
/// plain scalars.
pub trait Snapshot {
    fn same_snapshot(&self, other: &Self) -> bool;
}

impl Snapshot for Node {
    fn same_snapshot(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<T: ?Sized> Snapshot for Arc<T> {
    fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Snapshot for Rc<T> {
    fn same_snapshot(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

/// Linear undo/redo history over snapshots of `T`
#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    /// Superseded snapshots (most recent last)
    past: VecDeque<T>,

    /// Current snapshot
    present: T,

    /// Undone snapshots (next redo first)
    future: VecDeque<T>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl<T: Snapshot> HistoryStore<T> {
    /// Create a history with unlimited undo levels
    pub fn new(initial: T) -> Self {
        Self::with_max_levels(initial, 0)
    }

    /// Create a history keeping at most `max_levels` undo steps (0 = unlimited)
    pub fn with_max_levels(initial: T, max_levels: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: initial,
            future: VecDeque::new(),
            max_levels,
        }
    }

    /// Current snapshot
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Commit `next` as the new present.
    ///
    /// Returns `false` without touching the history when `next` is the same
    /// snapshot as the current present.
    pub fn set(&mut self, next: T) -> bool {
        if next.same_snapshot(&self.present) {
            return false;
        }

        let previous = mem::replace(&mut self.present, next);
        self.push_past(previous);

        // New edit invalidates the redo branch
        self.future.clear();
        true
    }

    /// Derive the next snapshot from the current present and commit it
    pub fn update<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.present);
        self.set(next)
    }

    /// Like [`update`](Self::update) for derivations that can fail.
    ///
    /// On error nothing is committed.
    pub fn try_update<F, E>(&mut self, f: F) -> Result<bool, E>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        let next = f(&self.present)?;
        Ok(self.set(next))
    }

    /// Step back one snapshot. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };

        let current = mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };

        let current = mem::replace(&mut self.present, next);
        self.past.push_back(current);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    /// Number of redo steps available
    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Superseded snapshots, oldest first
    pub fn past(&self) -> &VecDeque<T> {
        &self.past
    }

    /// Undone snapshots, next redo target first
    pub fn future(&self) -> &VecDeque<T> {
        &self.future
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Drop all undo/redo history, keeping the present
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Start a fresh history from `initial`
    pub fn reset(&mut self, initial: T) {
        self.clear();
        self.present = initial;
    }

    /// Consume the store, returning the present snapshot
    pub fn into_present(self) -> T {
        self.present
    }

    fn push_past(&mut self, snapshot: T) {
        self.past.push_back(snapshot);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.pop_front();
        }
    }
}

impl<T: Snapshot + Default> Default for HistoryStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_document::set_deep_value;
    use serde_json::json;

    fn doc(title: &str) -> Node {
        Node::from(json!({"hero": {"title": title}}))
    }

    fn title(node: &Node) -> &str {
        node.get("hero").and_then(|h| h.get("title")).and_then(Node::as_str).unwrap_or("")
    }

    #[test]
    fn test_history_creation() {
        let history = HistoryStore::new(doc("A"));
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(title(history.present()), "A");
    }

    #[test]
    fn test_update_undo_redo_scenario() {
        let mut history = HistoryStore::new(doc("A"));

        let committed = history.update(|d| {
            let hero = set_deep_value(d.get("hero").unwrap(), "title", Node::from("B"));
            d.with_field("hero", hero)
        });
        assert!(committed);
        assert_eq!(title(history.present()), "B");
        assert_eq!(history.past().len(), 1);
        assert_eq!(title(&history.past()[0]), "A");

        assert!(history.undo());
        assert_eq!(title(history.present()), "A");
        assert_eq!(history.future().len(), 1);

        assert!(history.redo());
        assert_eq!(title(history.present()), "B");
        assert_eq!(history.future().len(), 0);
    }

    #[test]
    fn test_same_snapshot_is_noop() {
        let mut history = HistoryStore::new(doc("A"));
        history.set(doc("B"));
        history.undo();

        let present = history.present().clone();
        let past_before: Vec<Node> = history.past().iter().cloned().collect();
        let future_before: Vec<Node> = history.future().iter().cloned().collect();

        assert!(!history.set(present.clone()));
        assert!(!history.update(|d| d.clone()));

        assert!(history.present().ptr_eq(&present));
        assert_eq!(history.past().len(), past_before.len());
        assert_eq!(history.future().len(), future_before.len());
        for (a, b) in history.future().iter().zip(&future_before) {
            assert!(a.ptr_eq(b));
        }
    }

    #[test]
    fn test_equal_but_distinct_snapshot_is_committed() {
        let mut history = HistoryStore::new(doc("A"));
        assert!(history.set(doc("A")));
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut history = HistoryStore::new(doc("0"));
        history.set(doc("A"));
        history.set(doc("B"));
        history.undo();
        assert_eq!(history.redo_levels(), 1);

        history.set(doc("C"));
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(title(history.present()), "C");
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut history = HistoryStore::new(doc("A"));
        let initial = history.present().clone();

        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.present().ptr_eq(&initial));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut history = HistoryStore::with_max_levels(doc("0"), 2);
        for i in 1..=3 {
            history.set(doc(&i.to_string()));
        }

        // Should only keep 2 (max levels)
        assert_eq!(history.undo_levels(), 2);
        assert_eq!(title(&history.past()[0]), "1");

        history.undo();
        history.undo();
        assert!(!history.undo());
        assert_eq!(title(history.present()), "1");
    }

    #[test]
    fn test_try_update_error_commits_nothing() {
        let mut history = HistoryStore::new(doc("A"));
        let result: Result<bool, &str> = history.try_update(|_| Err("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(history.undo_levels(), 0);
    }

    #[test]
    fn test_reset_starts_fresh_history() {
        let mut history = HistoryStore::new(doc("A"));
        history.set(doc("B"));
        history.set(doc("C"));
        history.undo();

        history.reset(doc("Loaded"));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(title(history.present()), "Loaded");
    }

    #[test]
    fn test_arc_snapshots() {
        let first = Arc::new(vec![1, 2, 3]);
        let mut history = HistoryStore::new(first.clone());
        assert!(!history.set(first.clone()));
        assert!(history.set(Arc::new(vec![1, 2, 3])));
        history.undo();
        assert!(Arc::ptr_eq(history.present(), &first));
    }
}
