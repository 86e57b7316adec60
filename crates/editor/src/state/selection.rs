use serde::{Deserialize, Serialize};
use shared::ElementId;

/// Single-element selection (at most one id)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Option<ElementId>);

impl Selection {
    /// Selected element id
    pub fn primary(&self) -> Option<&ElementId> {
        self.0.as_ref()
    }

    /// Check if an element is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.0.as_deref() == Some(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Select a single element (replaces previous selection)
    pub fn select(&mut self, id: ElementId) {
        self.0 = Some(id);
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Clear the selection if it points at `id`
    pub fn forget(&mut self, id: &str) {
        if self.is_selected(id) {
            self.0 = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = Selection::default();
        assert!(s.primary().is_none());
        assert!(s.is_empty());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut s = Selection::default();
        s.select("a".to_string());
        s.select("b".to_string());
        assert!(!s.is_selected("a"));
        assert!(s.is_selected("b"));
        assert_eq!(s.primary(), Some(&"b".to_string()));
    }

    #[test]
    fn test_forget_only_matching() {
        let mut s = Selection::default();
        s.select("a".to_string());
        s.forget("b");
        assert!(s.is_selected("a"));
        s.forget("a");
        assert!(s.is_empty());
    }

    #[test]
    fn test_serializes_as_nullable_id() {
        let mut s = Selection::default();
        assert_eq!(serde_json::to_string(&s).unwrap(), "null");
        s.select("a".to_string());
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"a\"");
    }
}
