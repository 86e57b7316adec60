//! Substrate catalog: types and their color variants

/// Fallback color when a type/variant pair is unknown
pub const DEFAULT_SUBSTRATE_COLOR: &str = "#E9DAC1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstrateVariant {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstrateType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub variants: &'static [SubstrateVariant],
}

impl SubstrateType {
    /// First variant, selected whenever the type changes
    pub fn default_variant(&self) -> &'static SubstrateVariant {
        &self.variants[0]
    }

    pub fn variant(&self, variant_id: &str) -> Option<&'static SubstrateVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

pub static SUBSTRATE_TYPES: &[SubstrateType] = &[
    SubstrateType {
        id: "sand",
        name: "Sand",
        description: "Fine-grained substrate ideal for planted aquariums and small fish species",
        variants: &[
            SubstrateVariant {
                id: "sand-light",
                name: "Natural Light Sand",
                color: "#E9DAC1",
            },
            SubstrateVariant {
                id: "sand-white",
                name: "White Beach Sand",
                color: "#F5F5F5",
            },
            SubstrateVariant {
                id: "sand-golden",
                name: "Golden Sand",
                color: "#E2C391",
            },
            SubstrateVariant {
                id: "sand-tan",
                name: "Tan River Sand",
                color: "#D4BC94",
            },
        ],
    },
    SubstrateType {
        id: "gravel",
        name: "Gravel",
        description: "Medium-sized substrate for most aquariums and beneficial bacteria",
        variants: &[
            SubstrateVariant {
                id: "gravel-natural",
                name: "Natural Gravel",
                color: "#B8A378",
            },
            SubstrateVariant {
                id: "gravel-river",
                name: "River Pebbles",
                color: "#C2B280",
            },
            SubstrateVariant {
                id: "gravel-gray",
                name: "Gray Slate",
                color: "#A9A9A9",
            },
            SubstrateVariant {
                id: "gravel-red",
                name: "Red Desert",
                color: "#CD5C5C",
            },
        ],
    },
    SubstrateType {
        id: "aquasoil",
        name: "Aqua Soil",
        description: "Nutrient-rich substrate for planted aquariums",
        variants: &[
            SubstrateVariant {
                id: "aquasoil-dark",
                name: "Dark Brown Soil",
                color: "#4D3B27",
            },
            SubstrateVariant {
                id: "aquasoil-black",
                name: "Black Soil",
                color: "#1E1E1E",
            },
            SubstrateVariant {
                id: "aquasoil-amazon",
                name: "Amazon Clay",
                color: "#8B4513",
            },
        ],
    },
];

pub fn substrate_type(type_id: &str) -> Option<&'static SubstrateType> {
    SUBSTRATE_TYPES.iter().find(|t| t.id == type_id)
}

pub fn substrate_variant(type_id: &str, variant_id: &str) -> Option<&'static SubstrateVariant> {
    substrate_type(type_id)?.variant(variant_id)
}

pub fn variant_color(type_id: &str, variant_id: &str) -> &'static str {
    substrate_variant(type_id, variant_id)
        .map(|v| v.color)
        .unwrap_or(DEFAULT_SUBSTRATE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_variants() {
        for t in SUBSTRATE_TYPES {
            assert!(!t.variants.is_empty(), "{} has no variants", t.id);
            assert!(t.default_variant().id.starts_with(t.id));
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(variant_color("gravel", "gravel-red"), "#CD5C5C");
        assert!(substrate_variant("sand", "gravel-red").is_none());
        assert_eq!(variant_color("lava", "x"), DEFAULT_SUBSTRATE_COLOR);
    }
}
