//! Standard tank sizes

use crate::TankDimensions;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankPreset {
    pub name: &'static str,
    /// Centimeters
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub volume_gallons: u32,
}

impl TankPreset {
    pub fn dimensions(&self) -> TankDimensions {
        TankDimensions {
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }
}

pub static TANK_PRESETS: &[TankPreset] = &[
    TankPreset {
        name: "5 Gallon",
        width: 40.6,
        height: 25.4,
        depth: 25.4,
        volume_gallons: 5,
    },
    TankPreset {
        name: "10 Gallon",
        width: 50.8,
        height: 30.5,
        depth: 25.4,
        volume_gallons: 10,
    },
    TankPreset {
        name: "20 Gallon Long",
        width: 76.2,
        height: 30.5,
        depth: 30.5,
        volume_gallons: 20,
    },
    TankPreset {
        name: "29 Gallon",
        width: 76.2,
        height: 40.6,
        depth: 30.5,
        volume_gallons: 29,
    },
    TankPreset {
        name: "40 Gallon Breeder",
        width: 91.4,
        height: 40.6,
        depth: 45.7,
        volume_gallons: 40,
    },
    TankPreset {
        name: "55 Gallon",
        width: 122.0,
        height: 50.8,
        depth: 30.5,
        volume_gallons: 55,
    },
    TankPreset {
        name: "75 Gallon",
        width: 122.0,
        height: 50.8,
        depth: 45.7,
        volume_gallons: 75,
    },
];

/// Case-insensitive lookup by display name
pub fn tank_preset(name: &str) -> Option<&'static TankPreset> {
    TANK_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}
