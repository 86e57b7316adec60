//! Scene state management
//!
//! This module provides the editable document (tank, elements, selection,
//! substrate) and its undo/redo history.

mod element_ops;
mod generator_ops;
mod history;
mod persistence;
mod query;
mod substrate_ops;

pub use element_ops::DUPLICATE_OFFSET;
pub use history::{History, DEFAULT_HISTORY_CAPACITY};
pub use persistence::{
    load_design_file, load_document, save_design_file, save_document, PersistenceError,
};
pub use query::CycleDirection;

use serde::{Deserialize, Serialize};
use shared::{AssetCategory, CanvasElement, SubstrateSettings, TankDimensions};

use super::selection::Selection;

/// Everything a snapshot captures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    pub tank_dimensions: TankDimensions,
    pub elements: Vec<CanvasElement>,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub current_category: AssetCategory,
    #[serde(default)]
    pub substrate_settings: SubstrateSettings,
}

/// Scene document with undo/redo history
#[derive(Debug, Default)]
pub struct SceneState {
    /// Live document
    pub(crate) document: SceneDocument,
    pub(crate) history: History<SceneDocument>,
    /// Monotonically increasing version counter for render invalidation
    pub(crate) version: u64,
}

impl SceneState {
    pub fn new(history_capacity: usize) -> Self {
        Self::with_document(SceneDocument::default(), history_capacity)
    }

    /// Hydrate from a previously saved document. History starts empty.
    pub fn with_document(document: SceneDocument, history_capacity: usize) -> Self {
        Self {
            document,
            history: History::new(history_capacity),
            version: 0,
        }
    }

    /// Current scene version (increments on every visible change)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn document(&self) -> &SceneDocument {
        &self.document
    }

    pub fn tank_dimensions(&self) -> TankDimensions {
        self.document.tank_dimensions
    }

    pub fn elements(&self) -> &[CanvasElement] {
        &self.document.elements
    }

    pub fn selection(&self) -> &Selection {
        &self.document.selection
    }

    pub fn current_category(&self) -> AssetCategory {
        self.document.current_category
    }

    pub fn substrate(&self) -> &SubstrateSettings {
        &self.document.substrate_settings
    }

    /// Get an element by ID
    pub fn get_element(&self, id: &str) -> Option<&CanvasElement> {
        self.document.elements.iter().find(|e| e.id == id)
    }

    /// Get mutable element by ID
    pub(crate) fn get_element_mut(&mut self, id: &str) -> Option<&mut CanvasElement> {
        self.document.elements.iter_mut().find(|e| e.id == id)
    }

    /// The selected element, if any
    pub fn selected_element(&self) -> Option<&CanvasElement> {
        self.document
            .selection
            .primary()
            .and_then(|id| self.get_element(id))
    }

    /// Save current state to undo stack
    pub(crate) fn save_undo(&mut self) {
        self.history.push(&self.document);
        tracing::debug!(depth = self.history.index(), "snapshot recorded");
    }
}
