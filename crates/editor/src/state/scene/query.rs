//! Grouping and lookup of elements

use shared::{AssetCategory, CanvasElement};

use super::SceneState;

/// Direction for cycling through same-name elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Previous,
    Next,
}

impl SceneState {
    /// Elements produced by one generator run, in list order
    pub fn elements_in_group(&self, group_id: &str) -> Vec<&CanvasElement> {
        self.document
            .elements
            .iter()
            .filter(|e| e.group_id.as_deref() == Some(group_id))
            .collect()
    }

    pub fn elements_of_category(&self, category: AssetCategory) -> Vec<&CanvasElement> {
        self.document
            .elements
            .iter()
            .filter(|e| e.kind == category)
            .collect()
    }

    /// Elements sharing a display name, in list order
    pub fn elements_named(&self, name: &str) -> Vec<&CanvasElement> {
        self.document
            .elements
            .iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Select the first element matching `name` (and `group_id`, when given).
    /// Not recorded in history.
    pub fn select_all_of_type(&mut self, name: &str, group_id: Option<&str>) {
        let first = self
            .document
            .elements
            .iter()
            .find(|e| {
                e.name == name && group_id.map_or(true, |g| e.group_id.as_deref() == Some(g))
            })
            .map(|e| e.id.clone());

        if let Some(id) = first {
            self.document.selection.select(id);
            self.version += 1;
        }
    }

    /// Move the selection to the neighbouring element with the same name,
    /// wrapping at both ends. Not recorded in history.
    pub fn cycle_selection(&mut self, direction: CycleDirection) {
        let Some(current) = self.selected_element() else {
            return;
        };
        let siblings: Vec<&str> = self
            .elements_named(&current.name)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        let Some(pos) = siblings.iter().position(|id| *id == current.id) else {
            return;
        };

        let len = siblings.len();
        let next = match direction {
            CycleDirection::Next => (pos + 1) % len,
            CycleDirection::Previous => (pos + len - 1) % len,
        };
        let id = siblings[next].to_string();
        self.document.selection.select(id);
        self.version += 1;
    }

    /// Remove a whole generated group as one undo step
    pub fn remove_group(&mut self, group_id: &str) {
        if self.elements_in_group(group_id).is_empty() {
            return;
        }

        self.save_undo();
        let selected_in_group = self
            .selected_element()
            .is_some_and(|e| e.group_id.as_deref() == Some(group_id));
        self.document
            .elements
            .retain(|e| e.group_id.as_deref() != Some(group_id));
        if selected_in_group {
            self.document.selection.clear();
        }
        self.version += 1;
    }
}
