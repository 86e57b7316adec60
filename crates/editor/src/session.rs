//! Editor session: owns the scene document and the view state around it.
//!
//! One session per open design. Pointer, keyboard, command and network
//! callers all go through this type instead of reaching for shared state.

use std::path::Path;

use chrono::{DateTime, Utc};
use glam::DVec2;
use kurbo::BezPath;
use shared::{Asset, CanvasElement, DepthLayer, Design, DimensionError, ElementId, GroupId};

use crate::client::{ClientError, DesignClient};
use crate::elevation;
use crate::geometry::{tank_to_pixels, TransformEnd, Viewport};
use crate::keyboard::{self, KeyAction, KeyPress};
use crate::state::{EditorSettings, SceneDocument, SceneState};

/// Untitled designs get this name until saved under another one
pub const DEFAULT_DESIGN_NAME: &str = "Untitled Design";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Remote(#[from] ClientError),
    #[error("design rejected: {0}")]
    InvalidDesign(#[from] DimensionError),
}

/// Scene plus settings, viewport and the identity of the open design
#[derive(Debug)]
pub struct EditorSession {
    pub scene: SceneState,
    pub settings: EditorSettings,
    viewport: Viewport,
    design_id: Option<i64>,
    design_name: String,
    created_at: Option<DateTime<Utc>>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::from_settings(EditorSettings::default())
    }
}

impl EditorSession {
    /// Create a session with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: EditorSettings) -> Self {
        Self {
            scene: SceneState::new(settings.history_capacity),
            settings,
            viewport: Viewport::default(),
            design_id: None,
            design_name: DEFAULT_DESIGN_NAME.to_string(),
            created_at: None,
        }
    }

    // ── Pointer gestures ──────────────────────────────────────

    /// Place `asset` where it was dropped and select it
    pub fn drop_asset(&mut self, client: DVec2, asset: &Asset) -> ElementId {
        let pos = self.viewport.client_to_document(client);
        let (width, height) = asset.nominal_size();
        let element = CanvasElement {
            id: uuid::Uuid::new_v4().to_string(),
            kind: asset.category,
            name: asset.name.clone(),
            src: asset.src.clone(),
            x: pos.x,
            y: pos.y,
            width,
            height,
            rotation: 0.0,
            depth: DepthLayer::Middle,
            group_id: None,
        };
        let id = element.id.clone();
        self.scene.add_element(element);
        self.scene.select_element(Some(&id));
        tracing::debug!(id = %id, asset = %asset.name, "asset dropped");
        id
    }

    /// Drag end
    pub fn move_element(&mut self, id: &str, x: f64, y: f64) {
        self.scene
            .update_element(id, &shared::ElementPatch::position(x, y));
    }

    /// Resize/rotate end; sizes are floored to the configured minimum
    pub fn transform_element(&mut self, id: &str, end: TransformEnd) {
        let patch = end.to_patch(self.settings.min_element_size);
        self.scene.update_element(id, &patch);
    }

    // ── Viewport ──────────────────────────────────────────────

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.viewport.zoom + self.settings.zoom.step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.viewport.zoom - self.settings.zoom.step);
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.zoom = 1.0;
    }

    fn set_zoom(&mut self, zoom: f64) {
        // Round away float drift from repeated steps
        let zoom = (zoom * 100.0).round() / 100.0;
        self.viewport.zoom = self.settings.zoom.clamp(zoom);
    }

    /// Client-space position of the canvas top-left corner
    pub fn set_canvas_origin(&mut self, origin: DVec2) {
        self.viewport.origin = origin;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Canvas size in pixels for the current tank
    pub fn canvas_size(&self) -> DVec2 {
        tank_to_pixels(&self.scene.tank_dimensions(), self.settings.scale_factor)
    }

    /// Substrate outline for the renderer
    pub fn elevation_path(&self) -> BezPath {
        let canvas = self.canvas_size();
        let substrate = self.scene.substrate();
        elevation::to_bez_path(
            &substrate.elevation_points,
            substrate.base_height,
            canvas.x,
            canvas.y,
        )
    }

    pub fn element_count(&self) -> usize {
        self.scene.elements().len()
    }

    // ── Document actions ──────────────────────────────────────

    /// Carpet `asset` using the configured layout
    pub fn generate_carpet(&mut self, asset: &Asset) -> GroupId {
        self.scene
            .generate_carpet(asset, &self.settings.carpet, self.settings.scale_factor)
    }

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        if self.scene.can_undo() {
            self.scene.undo();
            true
        } else {
            false
        }
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        if self.scene.can_redo() {
            self.scene.redo();
            true
        } else {
            false
        }
    }

    pub fn handle_key(&mut self, press: KeyPress) -> Option<KeyAction> {
        keyboard::handle_key(&mut self.scene, press)
    }

    /// Resize the tank to a named preset. Returns false for unknown names.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        match shared::tank_preset(name) {
            Some(preset) => {
                self.scene.set_tank_dimensions(preset.dimensions());
                true
            }
            None => {
                tracing::warn!(name, "unknown tank preset");
                false
            }
        }
    }

    // ── Designs ───────────────────────────────────────────────

    pub fn design_id(&self) -> Option<i64> {
        self.design_id
    }

    pub fn design_name(&self) -> &str {
        &self.design_name
    }

    pub fn set_design_name(&mut self, name: impl Into<String>) {
        self.design_name = name.into();
    }

    pub fn to_design(&self) -> Design {
        self.scene
            .to_design(&self.design_name, self.design_id, self.created_at)
    }

    /// Replace the document with `design` as a single undo step
    pub fn load_design(&mut self, design: Design) -> Result<(), DimensionError> {
        let (id, name, created_at) = (design.id, design.name.clone(), design.created_at);
        self.scene.load_design(design)?;
        self.design_id = id;
        self.design_name = name;
        self.created_at = Some(created_at);
        Ok(())
    }

    pub fn export_design_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_design())
    }

    pub fn load_design_json(&mut self, json: &str) -> Result<(), String> {
        let design: Design =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.load_design(design).map_err(|e| e.to_string())
    }

    /// Write the document to the autosave file if enabled
    pub fn autosave(&mut self) -> bool {
        self.settings.autosave && self.scene.autosave()
    }

    /// Pick up the document left in the autosave file by a previous run.
    ///
    /// History starts empty. Returns false when there is nothing usable.
    pub fn restore_autosave(&mut self) -> bool {
        match SceneState::load_autosave() {
            Some(document) => self.restore_document(document),
            None => false,
        }
    }

    pub fn restore_autosave_from(&mut self, path: &Path) -> bool {
        match SceneState::load_autosave_from(path) {
            Some(document) => self.restore_document(document),
            None => false,
        }
    }

    fn restore_document(&mut self, document: SceneDocument) -> bool {
        if let Err(e) = document.tank_dimensions.validate() {
            tracing::warn!("autosave ignored: {e}");
            return false;
        }
        self.scene = SceneState::with_document(document, self.settings.history_capacity);
        tracing::info!(elements = self.element_count(), "autosave restored");
        true
    }

    /// Create or update the design on the server.
    ///
    /// On failure the local document is left as it is.
    pub async fn save_remote(&mut self, client: &DesignClient) -> Result<Design, ClientError> {
        let design = self.to_design();
        let saved = match self.design_id {
            Some(id) => client.update(id, &design).await?,
            None => client.create(&design).await?,
        };
        self.design_id = saved.id;
        self.created_at = Some(saved.created_at);
        tracing::info!(id = ?saved.id, name = %saved.name, "design saved");
        Ok(saved)
    }

    /// Fetch a design from the server and load it
    pub async fn load_remote(
        &mut self,
        client: &DesignClient,
        id: i64,
    ) -> Result<(), SessionError> {
        let design = client.get(id).await?;
        self.load_design(design)?;
        Ok(())
    }
}
