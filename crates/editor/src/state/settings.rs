//! Editor settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::{DEFAULT_SCALE_FACTOR, MIN_ELEMENT_SIZE};
use crate::layout::CarpetConfig;
use crate::state::scene::DEFAULT_HISTORY_CAPACITY;

/// Zoom limits for the canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f64,
    pub max: f64,
    /// Increment per zoom in/out step
    pub step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: 0.3,
            max: 3.0,
            step: 0.1,
        }
    }
}

impl ZoomSettings {
    pub fn clamp(&self, zoom: f64) -> f64 {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        zoom.clamp(lo, hi)
    }
}

/// All editor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Undo steps kept in memory
    pub history_capacity: usize,
    /// Pixels per centimeter
    pub scale_factor: f64,
    pub zoom: ZoomSettings,
    pub carpet: CarpetConfig,
    /// Floor applied to sizes coming from a transform gesture
    pub min_element_size: f64,
    /// Write the document to the data directory after each command
    pub autosave: bool,
    /// Base URL of the design service
    pub api_base_url: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            scale_factor: DEFAULT_SCALE_FACTOR,
            zoom: ZoomSettings::default(),
            carpet: CarpetConfig::default(),
            min_element_size: MIN_ELEMENT_SIZE,
            autosave: true,
            api_base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl EditorSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "aquascape", "aquascape")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring malformed settings: {e}");
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::warn!("failed to save settings: {e}");
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}
