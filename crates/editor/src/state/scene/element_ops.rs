//! Element CRUD operations

use shared::{CanvasElement, ElementPatch, TankDimensions};

use super::SceneState;

/// Pixel offset applied to a duplicated element
pub const DUPLICATE_OFFSET: f64 = 20.0;

impl SceneState {
    /// Replace the tank dimensions. Existing elements keep their pixel positions.
    pub fn set_tank_dimensions(&mut self, dimensions: TankDimensions) {
        if let Err(e) = dimensions.validate() {
            tracing::warn!("ignoring tank resize: {e}");
            return;
        }

        self.save_undo();
        self.document.tank_dimensions = dimensions;
        self.version += 1;
    }

    /// Append an element. Selection is left to the caller.
    pub fn add_element(&mut self, element: CanvasElement) {
        if self.get_element(&element.id).is_some() {
            tracing::warn!(id = %element.id, "element id already in use, ignoring add");
            return;
        }

        self.save_undo();
        self.document.elements.push(element);
        self.version += 1;
    }

    /// Merge properties into an element; unknown ids are ignored
    pub fn update_element(&mut self, id: &str, patch: &ElementPatch) {
        if self.get_element(id).is_none() {
            tracing::debug!(id, "update of unknown element ignored");
            return;
        }

        self.save_undo();
        if let Some(element) = self.get_element_mut(id) {
            element.apply(patch);
        }
        self.version += 1;
    }

    /// Remove an element by ID, dropping it from the selection
    pub fn remove_element(&mut self, id: &str) {
        if self.get_element(id).is_none() {
            tracing::debug!(id, "removal of unknown element ignored");
            return;
        }

        self.save_undo();
        self.document.elements.retain(|e| e.id != id);
        self.document.selection.forget(id);
        self.version += 1;
    }

    /// Copy an element with a fresh id, offset it, and select the copy
    pub fn duplicate_element(&mut self, id: &str) {
        let Some(source) = self.get_element(id) else {
            tracing::debug!(id, "duplicate of unknown element ignored");
            return;
        };

        let mut copy = source.clone();
        copy.id = uuid::Uuid::new_v4().to_string();
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;

        self.save_undo();
        self.document.selection.select(copy.id.clone());
        self.document.elements.push(copy);
        self.version += 1;
    }

    /// Remove every element as one undo step
    pub fn clear_all_elements(&mut self) {
        self.save_undo();
        self.document.elements.clear();
        self.document.selection.clear();
        self.version += 1;
    }

    /// Change the selection. Not recorded in history.
    pub fn select_element(&mut self, id: Option<&str>) {
        match id {
            Some(id) if self.get_element(id).is_none() => {
                tracing::debug!(id, "selection of unknown element ignored");
            }
            Some(id) => {
                self.document.selection.select(id.to_string());
                self.version += 1;
            }
            None => {
                self.document.selection.clear();
                self.version += 1;
            }
        }
    }

    /// Switch the active palette category. Not recorded in history.
    pub fn set_current_category(&mut self, category: shared::AssetCategory) {
        self.document.current_category = category;
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::element_at;
    use crate::state::scene::SceneState;
    use shared::{ElementPatch, TankDimensions};

    #[test]
    fn test_add_does_not_select() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 0.0, 0.0));
        assert_eq!(s.elements().len(), 1);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn test_add_rejects_live_duplicate_id() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 0.0, 0.0));
        s.add_element(element_at("a", 5.0, 5.0));
        assert_eq!(s.elements().len(), 1);
        assert_eq!(s.elements()[0].x, 0.0);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 0.0, 0.0));
        let before = s.history().len();
        s.update_element("missing", &ElementPatch::position(1.0, 1.0));
        assert_eq!(s.history().len(), before);
        assert_eq!(s.elements()[0].x, 0.0);
    }

    #[test]
    fn test_update_accepts_values_as_given() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 0.0, 0.0));
        let patch = ElementPatch {
            width: Some(1.0),
            ..Default::default()
        };
        s.update_element("a", &patch);
        assert_eq!(s.elements()[0].width, 1.0);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 0.0, 0.0));
        s.add_element(element_at("b", 0.0, 0.0));
        s.select_element(Some("a"));

        s.remove_element("b");
        assert!(s.selection().is_selected("a"));

        s.remove_element("a");
        assert!(s.selection().is_empty());
    }

    #[test]
    fn test_duplicate_offsets_and_selects() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 10.0, 10.0));
        s.duplicate_element("a");

        assert_eq!(s.elements().len(), 2);
        let copy = &s.elements()[1];
        assert_ne!(copy.id, "a");
        assert_eq!((copy.x, copy.y), (30.0, 30.0));
        assert!(s.selection().is_selected(&copy.id));
    }

    #[test]
    fn test_clear_all_is_one_step() {
        let mut s = SceneState::default();
        for id in ["a", "b", "c"] {
            s.add_element(element_at(id, 0.0, 0.0));
        }
        s.select_element(Some("b"));
        s.clear_all_elements();
        assert!(s.elements().is_empty());
        assert!(s.selection().is_empty());

        s.undo();
        assert_eq!(s.elements().len(), 3);
        assert!(s.selection().is_selected("b"));
    }

    #[test]
    fn test_select_does_not_record_history() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 0.0, 0.0));
        let len = s.history().len();
        s.select_element(Some("a"));
        s.select_element(None);
        s.select_element(Some("ghost"));
        assert_eq!(s.history().len(), len);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn test_invalid_dimensions_ignored() {
        let mut s = SceneState::default();
        s.set_tank_dimensions(TankDimensions {
            width: 0.0,
            height: 10.0,
            depth: 10.0,
        });
        assert_eq!(s.tank_dimensions(), TankDimensions::default());
        assert!(!s.can_undo());
    }

    #[test]
    fn test_resize_keeps_element_positions() {
        let mut s = SceneState::default();
        s.add_element(element_at("a", 550.0, 300.0));
        s.set_tank_dimensions(TankDimensions::new(20.0, 20.0, 20.0).unwrap());
        assert_eq!(s.elements()[0].x, 550.0);
        assert_eq!(s.tank_dimensions().width, 20.0);
    }
}
