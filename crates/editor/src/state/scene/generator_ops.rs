//! Batch generation wrapped as single undo steps

use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{Asset, GroupId};

use crate::geometry::tank_to_pixels;
use crate::layout::{generate_carpet, CarpetConfig};

use super::SceneState;

impl SceneState {
    /// Lay a carpet of `asset` across the substrate. The whole batch is one
    /// history step; returns the group id shared by the new elements.
    pub fn generate_carpet(
        &mut self,
        asset: &Asset,
        config: &CarpetConfig,
        scale_factor: f64,
    ) -> GroupId {
        let canvas = tank_to_pixels(&self.document.tank_dimensions, scale_factor);
        let group_id = format!("carpet-{}", uuid::Uuid::new_v4());
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let batch = generate_carpet(
            asset,
            canvas,
            self.document.substrate_settings.base_height,
            config,
            &group_id,
            &mut rng,
        );

        self.save_undo();
        self.document.elements.extend(batch);
        self.version += 1;
        tracing::info!(group = %group_id, asset = %asset.name, "carpet generated");
        group_id
    }
}
