use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod presets;
pub mod substrate;

pub use presets::{tank_preset, TankPreset, TANK_PRESETS};
pub use substrate::{
    substrate_type, substrate_variant, variant_color, SubstrateType, SubstrateVariant,
    DEFAULT_SUBSTRATE_COLOR, SUBSTRATE_TYPES,
};

/// Unique identifier of a placed element
pub type ElementId = String;

/// Tag shared by every element produced by one generator run
pub type GroupId = String;

/// Identifier of an elevation control point
pub type PointId = String;

/// Rejected tank dimensions
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DimensionError {
    #[error("tank {field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Physical tank size in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for TankDimensions {
    fn default() -> Self {
        Self {
            width: 60.0,
            height: 36.0,
            depth: 30.0,
        }
    }
}

impl TankDimensions {
    /// Validated constructor; every side must be > 0.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, DimensionError> {
        let dims = Self {
            width,
            height,
            depth,
        };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> Result<(), DimensionError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DimensionError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Water volume in liters (1 liter = 1000 cm³)
    pub fn volume_liters(&self) -> f64 {
        self.width * self.height * self.depth / 1000.0
    }
}

/// Palette category of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetCategory {
    #[default]
    Substrate,
    Hardscape,
    Plants,
    Fish,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Substrate => "substrate",
            AssetCategory::Hardscape => "hardscape",
            AssetCategory::Plants => "plants",
            AssetCategory::Fish => "fish",
        }
    }

    pub fn all() -> &'static [AssetCategory] {
        &[
            AssetCategory::Substrate,
            AssetCategory::Hardscape,
            AssetCategory::Plants,
            AssetCategory::Fish,
        ]
    }
}

/// Front-to-back placement layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthLayer {
    Front,
    #[default]
    Middle,
    Back,
}

/// An asset from the catalog, carried by a drag/drop gesture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub category: AssetCategory,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f64>,
    /// Ground-cover plant that can be laid out as a carpet
    #[serde(default)]
    pub is_carpeting: bool,
}

impl Asset {
    /// Nominal footprint, 100x100 when the catalog gives none
    pub fn nominal_size(&self) -> (f64, f64) {
        (
            self.default_width.unwrap_or(100.0),
            self.default_height.unwrap_or(100.0),
        )
    }
}

/// A placed asset instance, positioned in pixel space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasElement {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: AssetCategory,
    pub name: String,
    pub src: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees, any real value
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub depth: DepthLayer,
    #[serde(
        default,
        alias = "carpetGroupId",
        skip_serializing_if = "Option::is_none"
    )]
    pub group_id: Option<GroupId>,
}

impl CanvasElement {
    /// Rotation folded into `[0, 360)`
    pub fn normalized_rotation(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }

    /// Merge a partial update into this element. Values are taken as given.
    pub fn apply(&mut self, patch: &ElementPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(src) = &patch.src {
            self.src = src.clone();
        }
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(depth) = patch.depth {
            self.depth = depth;
        }
        if let Some(group_id) = &patch.group_id {
            self.group_id = group_id.clone();
        }
    }
}

/// Partial element properties; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AssetCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<DepthLayer>,
    /// `Some(None)` detaches the element from its group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Option<GroupId>>,
}

impl ElementPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Control point of the substrate elevation profile, both axes in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationPoint {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl ElevationPoint {
    pub fn new(id: impl Into<PointId>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }
}

/// Substrate configuration of the tank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstrateSettings {
    pub type_id: String,
    pub variant_id: String,
    pub elevation_points: Vec<ElevationPoint>,
    /// Percentage of tank height, 0 - 100
    pub base_height: f64,
}

impl Default for SubstrateSettings {
    fn default() -> Self {
        Self {
            type_id: "sand".to_string(),
            variant_id: "sand-light".to_string(),
            elevation_points: vec![
                ElevationPoint::new("point-1", 0.0, 0.0),
                ElevationPoint::new("point-2", 25.0, 10.0),
                ElevationPoint::new("point-3", 50.0, 15.0),
                ElevationPoint::new("point-4", 75.0, 10.0),
                ElevationPoint::new("point-5", 100.0, 0.0),
            ],
            base_height: 30.0,
        }
    }
}

impl SubstrateSettings {
    /// Display color of the selected variant
    pub fn color(&self) -> &'static str {
        variant_color(&self.type_id, &self.variant_id)
    }
}

/// Persisted design, as exchanged with the design service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub elements: Vec<CanvasElement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Design {
    pub fn tank_dimensions(&self) -> TankDimensions {
        TankDimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}
