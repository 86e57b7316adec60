//! Carpet generator: a dense grid of ground-cover elements plus a few
//! gap-filling extras, all sharing one group id.
//!
//! Grid columns anchor the left edge (`x`) of each element and span the full
//! canvas width: the first column sits at `x = 0`, the last at `x = width`.
//! The first row rests on the substrate surface; later rows step down by a
//! fraction of the asset height, overlapping each other.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shared::{Asset, CanvasElement, DepthLayer, GroupId};

use crate::geometry::surface_y;

/// Tunables for carpet generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarpetConfig {
    /// Grid columns, at least 2
    pub columns: usize,
    /// Grid rows, at least 1
    pub rows: usize,
    /// Row spacing as a fraction of the asset height
    pub row_overlap: f64,
    /// Maximum positional jitter in pixels, both axes
    pub jitter: f64,
    pub scale_min: f64,
    pub scale_max: f64,
    /// Maximum rotation either way, degrees
    pub max_rotation: f64,
    /// Extra elements dropped into edges and gaps
    pub fill_count: usize,
    /// Fixed RNG seed; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for CarpetConfig {
    fn default() -> Self {
        Self {
            columns: 15,
            rows: 4,
            row_overlap: 0.65,
            jitter: 5.0,
            scale_min: 0.9,
            scale_max: 1.1,
            max_rotation: 15.0,
            fill_count: 12,
            seed: None,
        }
    }
}

impl CarpetConfig {
    fn columns(&self) -> usize {
        self.columns.max(2)
    }

    fn rows(&self) -> usize {
        self.rows.max(1)
    }

    fn scale_range(&self) -> (f64, f64) {
        let (a, b) = (self.scale_min.max(0.01), self.scale_max.max(0.01));
        (a.min(b), a.max(b))
    }

    /// Horizontal distance between grid columns for a canvas width
    pub fn column_spacing(&self, canvas_width: f64) -> f64 {
        canvas_width / (self.columns() - 1) as f64
    }

    /// Total number of elements one run produces
    pub fn element_count(&self) -> usize {
        self.columns() * self.rows() + self.fill_count
    }
}

/// Grid geometry shared by the primary and fill passes
struct Grid {
    canvas: DVec2,
    col_spacing: f64,
    row_spacing: f64,
    /// Center Y of the first row
    top: f64,
}

impl Grid {
    fn new(config: &CarpetConfig, canvas: DVec2, base_height_percent: f64, asset_h: f64) -> Self {
        let surface = surface_y(base_height_percent, canvas.y);
        Self {
            canvas,
            col_spacing: config.column_spacing(canvas.x),
            row_spacing: config.row_overlap.max(0.0) * asset_h,
            top: surface - asset_h / 2.0,
        }
    }

    fn column_x(&self, col: f64) -> f64 {
        col * self.col_spacing
    }

    fn row_y(&self, row: f64) -> f64 {
        self.top + row * self.row_spacing
    }
}

/// Lay out one carpet for `asset` on a canvas of `canvas` pixels.
///
/// Pure apart from the supplied RNG; the caller records history and
/// appends the result.
pub fn generate_carpet<R: Rng>(
    asset: &Asset,
    canvas: DVec2,
    base_height_percent: f64,
    config: &CarpetConfig,
    group_id: &GroupId,
    rng: &mut R,
) -> Vec<CanvasElement> {
    let (asset_w, asset_h) = asset.nominal_size();
    let grid = Grid::new(config, canvas, base_height_percent, asset_h);
    let mut out = Vec::with_capacity(config.element_count());

    for row in 0..config.rows() {
        for col in 0..config.columns() {
            let anchor = DVec2::new(grid.column_x(col as f64), grid.row_y(row as f64));
            out.push(place(asset, asset_w, asset_h, anchor, &grid, config, group_id, rng));
        }
    }

    let gap_cols = config.columns() - 1;
    for k in 0..config.fill_count {
        let row = rng.random_range(0..config.rows()) as f64;
        let anchor = match k % 3 {
            // left edge
            0 => DVec2::new(0.0, grid.row_y(row + 0.5)),
            // right edge
            1 => DVec2::new(grid.canvas.x, grid.row_y(row + 0.5)),
            // between two grid cells
            _ => {
                let col = rng.random_range(0..gap_cols) as f64;
                DVec2::new(grid.column_x(col + 0.5), grid.row_y(row + 0.5))
            }
        };
        out.push(place(asset, asset_w, asset_h, anchor, &grid, config, group_id, rng));
    }

    tracing::debug!(count = out.len(), group = %group_id, "carpet laid out");
    out
}

/// Instantiate one element. `anchor.x` is the left edge, `anchor.y` the
/// vertical center, both before jitter.
#[allow(clippy::too_many_arguments)]
fn place<R: Rng>(
    asset: &Asset,
    asset_w: f64,
    asset_h: f64,
    anchor: DVec2,
    grid: &Grid,
    config: &CarpetConfig,
    group_id: &GroupId,
    rng: &mut R,
) -> CanvasElement {
    let jitter = config.jitter.abs();
    let (scale_lo, scale_hi) = config.scale_range();
    let max_rot = config.max_rotation.abs();

    let scale = rng.random_range(scale_lo..=scale_hi);
    let width = asset_w * scale;
    let height = asset_h * scale;
    let dx = rng.random_range(-jitter..=jitter);
    let dy = rng.random_range(-jitter..=jitter);
    let rotation = rng.random_range(-max_rot..=max_rot);

    let x = anchor.x + dx;
    let y = (anchor.y + dy - height / 2.0)
        .min(grid.canvas.y - height)
        .max(0.0);

    CanvasElement {
        id: uuid::Uuid::new_v4().to_string(),
        kind: asset.category,
        name: asset.name.clone(),
        src: asset.src.clone(),
        x,
        y,
        width,
        height,
        rotation,
        depth: DepthLayer::Front,
        group_id: Some(group_id.clone()),
    }
}
