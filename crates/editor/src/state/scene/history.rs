//! Undo/redo functionality
//!
//! Linear snapshot log. Every mutating action records the state *before* it
//! changes anything; the live state is appended lazily, on the first undo
//! after a change, so that redo can return to it.
//!
//! Cursor model: while the live state has not been recorded it occupies a
//! virtual slot right after the last stored entry, so `index()`/`len()`
//! always describe the log as the user sees it.

use super::{SceneDocument, SceneState};

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Bounded linear history of deep-copied snapshots
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    /// Position of the live state in `entries` (valid only when `live_recorded`)
    index: usize,
    /// `entries[index]` holds the live state
    live_recorded: bool,
    /// Maximum number of undo steps
    capacity: usize,
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl<T: Clone> History<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: 0,
            live_recorded: false,
            capacity: capacity.max(1),
        }
    }

    /// Record `current` as the state preceding a mutation.
    ///
    /// Discards any redo branch.
    pub fn push(&mut self, current: &T) {
        if self.live_recorded {
            self.entries.truncate(self.index);
        }
        self.entries.push(current.clone());
        self.live_recorded = false;
        self.retain_undo_steps(self.capacity);
    }

    /// Step back. Returns the state to restore, or `None` when nothing to undo.
    pub fn undo(&mut self, current: &T) -> Option<T> {
        if !self.can_undo() {
            return None;
        }
        if !self.live_recorded {
            self.entries.push(current.clone());
            self.index = self.entries.len() - 1;
            self.live_recorded = true;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// Step forward. Returns the state to restore, or `None` when nothing to redo.
    pub fn redo(&mut self) -> Option<T> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    /// Collapse the log to a single entry equal to `current`
    pub fn clear(&mut self, current: &T) {
        self.entries.clear();
        self.entries.push(current.clone());
        self.index = 0;
        self.live_recorded = true;
    }

    /// Logical cursor
    pub fn index(&self) -> usize {
        if self.live_recorded {
            self.index
        } else {
            self.entries.len()
        }
    }

    /// Logical length, including the pending live state
    pub fn len(&self) -> usize {
        if self.live_recorded || self.entries.is_empty() {
            self.entries.len()
        } else {
            self.entries.len() + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.index() > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.is_empty() && self.index() < self.len() - 1
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the cap, evicting the oldest entries if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.retain_undo_steps(self.capacity);
    }

    /// Drop the oldest entries until at most `steps` undo steps remain.
    ///
    /// Relative order is preserved and the cursor keeps pointing at the
    /// live state. Redo entries are never dropped here.
    pub fn retain_undo_steps(&mut self, steps: usize) {
        let undo_steps = self.index();
        if undo_steps <= steps {
            return;
        }
        let excess = undo_steps - steps;
        self.entries.drain(..excess);
        if self.live_recorded {
            self.index -= excess;
        }
    }
}

impl SceneState {
    /// Undo last change
    pub fn undo(&mut self) {
        if let Some(prev) = self.history.undo(&self.document) {
            self.document = prev;
            self.version += 1;
            tracing::debug!(index = self.history.index(), "undo");
        }
    }

    /// Redo last undone change
    pub fn redo(&mut self) {
        if let Some(next) = self.history.redo() {
            self.document = next;
            self.version += 1;
            tracing::debug!(index = self.history.index(), "redo");
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all undo information, keeping the live document
    pub fn clear_history(&mut self) {
        self.history.clear(&self.document);
        tracing::debug!("history cleared");
    }

    pub fn history(&self) -> &History<SceneDocument> {
        &self.history
    }

    pub fn set_history_capacity(&mut self, capacity: usize) {
        self.history.set_capacity(capacity);
    }

    /// Halve the undo depth, used to reclaim space when a cache write fails
    pub(crate) fn shrink_history(&mut self) {
        let keep = self.history.index() / 2;
        self.history.retain_undo_steps(keep);
        tracing::warn!(kept = keep, "history trimmed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a history the way SceneState does: push before every change.
    struct Doc {
        value: i32,
        history: History<i32>,
    }

    impl Doc {
        fn new(capacity: usize) -> Self {
            Self {
                value: 0,
                history: History::new(capacity),
            }
        }

        fn set(&mut self, v: i32) {
            self.history.push(&self.value);
            self.value = v;
        }

        fn undo(&mut self) {
            if let Some(v) = self.history.undo(&self.value) {
                self.value = v;
            }
        }

        fn redo(&mut self) {
            if let Some(v) = self.history.redo() {
                self.value = v;
            }
        }
    }

    #[test]
    fn test_initial_empty() {
        let h: History<i32> = History::default();
        assert!(h.is_empty());
        assert_eq!(h.len(), 0);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut d = Doc::new(10);
        d.undo();
        d.redo();
        assert_eq!(d.value, 0);
    }

    #[test]
    fn test_single_change_undo_redo() {
        let mut d = Doc::new(10);
        d.set(1);
        assert!(d.history.can_undo());
        assert!(!d.history.can_redo());

        d.undo();
        assert_eq!(d.value, 0);
        assert!(!d.history.can_undo());
        assert!(d.history.can_redo());

        d.redo();
        assert_eq!(d.value, 1);
        assert!(!d.history.can_redo());
    }

    #[test]
    fn test_undo_all_returns_to_start() {
        let mut d = Doc::new(10);
        for v in 1..=5 {
            d.set(v);
        }
        for _ in 0..5 {
            d.undo();
        }
        assert_eq!(d.value, 0);
        for _ in 0..5 {
            d.redo();
        }
        assert_eq!(d.value, 5);
    }

    #[test]
    fn test_new_edit_discards_redo_branch() {
        let mut d = Doc::new(10);
        d.set(1);
        d.set(2);
        d.set(3);
        d.undo();
        d.undo();
        assert_eq!(d.value, 1);

        d.set(10);
        assert!(!d.history.can_redo());
        d.redo();
        assert_eq!(d.value, 10);

        d.undo();
        assert_eq!(d.value, 1);
        d.undo();
        assert_eq!(d.value, 0);
        assert!(!d.history.can_undo());
    }

    #[test]
    fn test_cursor_invariants() {
        let mut d = Doc::new(10);
        d.set(1);
        d.set(2);
        let check = |h: &History<i32>| {
            assert!(h.index() < h.len());
            assert_eq!(h.can_undo(), h.index() > 0);
            assert_eq!(h.can_redo(), h.index() < h.len() - 1);
        };
        check(&d.history);
        d.undo();
        check(&d.history);
        d.undo();
        check(&d.history);
        d.redo();
        check(&d.history);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut d = Doc::new(3);
        for v in 1..=6 {
            d.set(v);
        }
        let mut seen = vec![d.value];
        while d.history.can_undo() {
            d.undo();
            seen.push(d.value);
        }
        assert_eq!(seen, vec![6, 5, 4, 3]);
    }

    #[test]
    fn test_set_capacity_keeps_cursor_on_live_state() {
        let mut d = Doc::new(10);
        for v in 1..=6 {
            d.set(v);
        }
        d.undo();
        d.undo();
        assert_eq!(d.value, 4);

        d.history.set_capacity(2);
        assert!(d.history.index() <= 2);
        d.redo();
        assert_eq!(d.value, 5);
        d.undo();
        d.undo();
        d.undo();
        assert_eq!(d.value, 2);
        assert!(!d.history.can_undo());
    }

    #[test]
    fn test_clear_collapses_log() {
        let mut d = Doc::new(10);
        d.set(1);
        d.set(2);
        d.undo();
        d.history.clear(&d.value);
        assert_eq!(d.history.len(), 1);
        assert!(!d.history.can_undo());
        assert!(!d.history.can_redo());

        d.set(7);
        d.undo();
        assert_eq!(d.value, 1);
    }

    #[test]
    fn test_retain_undo_steps() {
        let mut d = Doc::new(10);
        for v in 1..=4 {
            d.set(v);
        }
        d.history.retain_undo_steps(1);
        d.undo();
        assert_eq!(d.value, 3);
        assert!(!d.history.can_undo());
    }
}
