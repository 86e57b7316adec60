//! Substrate type, base height and elevation profile edits

use glam::DVec2;
use shared::{substrate_type, PointId};

use crate::elevation;

use super::SceneState;

impl SceneState {
    /// Switch substrate type; the variant resets to the type's default
    pub fn set_substrate_type(&mut self, type_id: &str) {
        let Some(kind) = substrate_type(type_id) else {
            tracing::warn!(type_id, "unknown substrate type ignored");
            return;
        };

        self.save_undo();
        let settings = &mut self.document.substrate_settings;
        settings.type_id = kind.id.to_string();
        settings.variant_id = kind.default_variant().id.to_string();
        self.version += 1;
    }

    /// Pick a variant of the current type
    pub fn set_substrate_variant(&mut self, variant_id: &str) {
        let type_id = &self.document.substrate_settings.type_id;
        if substrate_type(type_id)
            .and_then(|t| t.variant(variant_id))
            .is_none()
        {
            tracing::warn!(
                type_id = %type_id,
                variant_id,
                "variant does not belong to current type"
            );
            return;
        }

        self.save_undo();
        self.document.substrate_settings.variant_id = variant_id.to_string();
        self.version += 1;
    }

    /// Set the flat base layer height, percent of tank height
    pub fn set_substrate_base_height(&mut self, percent: f64) {
        self.save_undo();
        self.document.substrate_settings.base_height = elevation::clamp_percent(percent);
        self.version += 1;
    }

    pub fn add_elevation_point(&mut self, x: f64, y: f64) -> PointId {
        self.save_undo();
        let id = elevation::add_point(&mut self.document.substrate_settings.elevation_points, x, y);
        self.version += 1;
        id
    }

    /// Move a control point; unknown ids are ignored
    pub fn update_elevation_point(&mut self, id: &str, x: Option<f64>, y: Option<f64>) {
        let points = &self.document.substrate_settings.elevation_points;
        if !points.iter().any(|p| p.id == id) {
            return;
        }

        self.save_undo();
        elevation::update_point(
            &mut self.document.substrate_settings.elevation_points,
            id,
            x,
            y,
        );
        self.version += 1;
    }

    /// Remove a control point unless only two would be left
    pub fn remove_elevation_point(&mut self, id: &str) {
        if !elevation::can_remove(&self.document.substrate_settings.elevation_points, id) {
            tracing::debug!(id, "elevation point removal refused");
            return;
        }

        self.save_undo();
        elevation::remove_point(&mut self.document.substrate_settings.elevation_points, id);
        self.version += 1;
    }

    /// Substrate outline in pixel space for a canvas of `canvas` pixels
    pub fn substrate_outline(&self, canvas: DVec2) -> Vec<DVec2> {
        let settings = &self.document.substrate_settings;
        elevation::to_path(
            &settings.elevation_points,
            settings.base_height,
            canvas.x,
            canvas.y,
        )
    }
}
