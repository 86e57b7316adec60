//! Design conversion and autosave/load functionality

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use shared::{DimensionError, Design};

use super::{SceneDocument, SceneState};

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no data directory available on this platform")]
    NoDataDir,
}

impl SceneState {
    /// Export the persisted part of the document (tank + elements)
    pub fn to_design(
        &self,
        name: &str,
        id: Option<i64>,
        created_at: Option<DateTime<Utc>>,
    ) -> Design {
        let now = Utc::now();
        let tank = self.document.tank_dimensions;
        Design {
            id,
            name: name.to_string(),
            width: tank.width,
            height: tank.height,
            depth: tank.depth,
            elements: self.document.elements.clone(),
            created_at: created_at.unwrap_or(now),
            updated_at: now,
        }
    }

    /// Replace tank and elements from a design as one undo step.
    ///
    /// Selection is cleared; substrate and category are kept.
    pub fn load_design(&mut self, design: Design) -> Result<(), DimensionError> {
        let tank = design.tank_dimensions();
        tank.validate()?;

        self.save_undo();
        self.document.elements.clear();
        self.document.tank_dimensions = tank;
        for element in design.elements {
            if self.get_element(&element.id).is_some() {
                tracing::warn!(id = %element.id, "duplicate element id in design, skipped");
                continue;
            }
            self.document.elements.push(element);
        }
        self.document.selection.clear();
        self.version += 1;
        tracing::info!(
            name = %design.name,
            elements = self.document.elements.len(),
            "design loaded"
        );
        Ok(())
    }

    /// Get autosave file path
    pub fn autosave_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "aquascape", "aquascape")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save the document to the autosave file.
    ///
    /// Failures never propagate: history is trimmed and the write retried
    /// once, then the error is logged.
    pub fn autosave(&mut self) -> bool {
        match Self::autosave_path() {
            Some(path) => self.autosave_to(&path),
            None => {
                tracing::warn!("autosave skipped: {}", PersistenceError::NoDataDir);
                false
            }
        }
    }

    pub fn autosave_to(&mut self, path: &Path) -> bool {
        match save_document(&self.document, path) {
            Ok(()) => return true,
            Err(e) => tracing::warn!(path = %path.display(), "autosave failed: {e}"),
        }

        self.shrink_history();
        match save_document(&self.document, path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    "autosave failed after trimming history: {e}"
                );
                false
            }
        }
    }

    /// Load document from autosave file
    pub fn load_autosave() -> Option<SceneDocument> {
        Self::load_autosave_from(&Self::autosave_path()?)
    }

    /// Read an autosaved document. A missing or unreadable file yields `None`;
    /// a selection pointing at a missing element is dropped.
    pub fn load_autosave_from(path: &Path) -> Option<SceneDocument> {
        match load_document(path) {
            Ok(mut doc) => {
                let stale = doc
                    .selection
                    .primary()
                    .is_some_and(|id| !doc.elements.iter().any(|e| &e.id == id));
                if stale {
                    doc.selection.clear();
                }
                Some(doc)
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), "no usable autosave: {e}");
                None
            }
        }
    }
}

/// Write a document as pretty JSON, creating parent directories
pub fn save_document(document: &SceneDocument, path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_document(path: &Path) -> Result<SceneDocument, PersistenceError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn save_design_file(design: &Design, path: &Path) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(design)?)?;
    Ok(())
}

pub fn load_design_file(path: &Path) -> Result<Design, PersistenceError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
