//! Coordinate conversions between screen, document and tank space.

use glam::DVec2;
use shared::TankDimensions;

/// Default pixels per centimeter
pub const DEFAULT_SCALE_FACTOR: f64 = 10.0;

/// Smallest width/height a transform may produce
pub const MIN_ELEMENT_SIZE: f64 = 5.0;

/// Placement of the canvas on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client-space position of the canvas top-left corner
    pub origin: DVec2,
    /// Zoom scale, 1.0 = 100%
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            origin: DVec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Pointer position to document coordinates
    pub fn client_to_document(&self, client: DVec2) -> DVec2 {
        client_to_document(client, self.origin, self.zoom)
    }

    /// Inverse of [`Viewport::client_to_document`]
    pub fn document_to_client(&self, doc: DVec2) -> DVec2 {
        doc * effective_zoom(self.zoom) + self.origin
    }
}

fn effective_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    }
}

/// `(client - origin) / zoom`. A non-positive zoom is treated as 1.
pub fn client_to_document(client: DVec2, origin: DVec2, zoom: f64) -> DVec2 {
    (client - origin) / effective_zoom(zoom)
}

/// On-screen size of the tank at `scale_factor` pixels per centimeter
pub fn tank_to_pixels(dimensions: &TankDimensions, scale_factor: f64) -> DVec2 {
    DVec2::new(dimensions.width, dimensions.height) * scale_factor
}

/// Document Y of the flat substrate top
pub fn surface_y(base_height_percent: f64, canvas_height: f64) -> f64 {
    canvas_height - base_height_percent / 100.0 * canvas_height
}

/// Floor a transformed size so neither side drops below `min`
pub fn floor_size(width: f64, height: f64, min: f64) -> (f64, f64) {
    (width.max(min), height.max(min))
}

/// Result of a finished resize/rotate gesture
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformEnd {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl TransformEnd {
    /// Element patch with the size floor applied
    pub fn to_patch(&self, min_size: f64) -> shared::ElementPatch {
        let (width, height) = floor_size(self.width, self.height, min_size);
        shared::ElementPatch {
            x: Some(self.x),
            y: Some(self.y),
            width: Some(width),
            height: Some(height),
            rotation: Some(self.rotation),
            ..Default::default()
        }
    }
}
