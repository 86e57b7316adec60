//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `CanvasElement`, `Asset` and
//! `Design` values used in tests and by the command interface.

use shared::*;

// ── Element factories ───────────────────────────────────────────

/// A 100x100 hardscape element at a position.
pub fn element_at(id: &str, x: f64, y: f64) -> CanvasElement {
    CanvasElement {
        id: id.to_string(),
        kind: AssetCategory::Hardscape,
        name: "Dragonstone 1".to_string(),
        src: "/assets/hardscape/dragonstone-1.png".to_string(),
        x,
        y,
        width: 100.0,
        height: 100.0,
        rotation: 0.0,
        depth: DepthLayer::Middle,
        group_id: None,
    }
}

/// A hardscape element with a given display name at the origin.
pub fn named_element(id: &str, name: &str) -> CanvasElement {
    CanvasElement {
        name: name.to_string(),
        ..element_at(id, 0.0, 0.0)
    }
}

/// A plant element at the origin.
pub fn plant(id: &str, name: &str) -> CanvasElement {
    CanvasElement {
        kind: AssetCategory::Plants,
        src: "/assets/plants/eleocharis_mini.png".to_string(),
        width: 150.0,
        height: 50.0,
        depth: DepthLayer::Front,
        ..named_element(id, name)
    }
}

/// A plant element belonging to a generated group.
pub fn grouped_element(id: &str, name: &str, group_id: &str) -> CanvasElement {
    CanvasElement {
        group_id: Some(group_id.to_string()),
        ..plant(id, name)
    }
}

// ── Asset factories ─────────────────────────────────────────────

/// Ground-cover plant asset (150x50).
pub fn carpet_asset() -> Asset {
    Asset {
        id: "6".to_string(),
        category: AssetCategory::Plants,
        kind: "foreground".to_string(),
        name: "Eleocharis acicularis 'Mini'".to_string(),
        description: "Dwarf hairgrass".to_string(),
        src: "/assets/plants/eleocharis_mini.png".to_string(),
        default_width: Some(150.0),
        default_height: Some(50.0),
        is_carpeting: true,
    }
}

/// Hardscape asset (180x220).
pub fn rock_asset() -> Asset {
    Asset {
        id: "3".to_string(),
        category: AssetCategory::Hardscape,
        kind: "rock".to_string(),
        name: "Dragonstone 1".to_string(),
        description: "Tall porous stone".to_string(),
        src: "/assets/hardscape/dragonstone-1.png".to_string(),
        default_width: Some(180.0),
        default_height: Some(220.0),
        is_carpeting: false,
    }
}

/// Asset without a default size.
pub fn fish_asset() -> Asset {
    Asset {
        id: "fish-1".to_string(),
        category: AssetCategory::Fish,
        kind: "tetra".to_string(),
        name: "Neon Tetra".to_string(),
        description: String::new(),
        src: "/assets/fish/neon_tetra.png".to_string(),
        default_width: None,
        default_height: None,
        is_carpeting: false,
    }
}

// ── Design factories ────────────────────────────────────────────

/// A design with the given elements on the default tank.
pub fn design_with(name: &str, elements: Vec<CanvasElement>) -> Design {
    let tank = TankDimensions::default();
    let now = chrono::Utc::now();
    Design {
        id: None,
        name: name.to_string(),
        width: tank.width,
        height: tank.height,
        depth: tank.depth,
        elements,
        created_at: now,
        updated_at: now,
    }
}
