//! Substrate elevation profile.
//!
//! Control points live in percentage space (x across the tank width, y as
//! height above the base layer). Every input is clamped to `[0, 100]`; there
//! is no error path. Points are kept in insertion order and only sorted when
//! the outline is produced.

use glam::DVec2;
use kurbo::{BezPath, Point};
use shared::{ElevationPoint, PointId};

/// The profile is always at least a line
pub const MIN_POINTS: usize = 2;

pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Append a point with a fresh id
pub fn add_point(points: &mut Vec<ElevationPoint>, x: f64, y: f64) -> PointId {
    let id = format!("point-{}", uuid::Uuid::new_v4());
    points.push(ElevationPoint {
        id: id.clone(),
        x: clamp_percent(x),
        y: clamp_percent(y),
    });
    id
}

/// Move a point; returns false when the id is unknown
pub fn update_point(
    points: &mut [ElevationPoint],
    id: &str,
    x: Option<f64>,
    y: Option<f64>,
) -> bool {
    let Some(point) = points.iter_mut().find(|p| p.id == id) else {
        return false;
    };
    if let Some(x) = x {
        point.x = clamp_percent(x);
    }
    if let Some(y) = y {
        point.y = clamp_percent(y);
    }
    true
}

/// Whether removing `id` is allowed
pub fn can_remove(points: &[ElevationPoint], id: &str) -> bool {
    points.len() > MIN_POINTS && points.iter().any(|p| p.id == id)
}

/// Remove a point unless that would leave fewer than two
pub fn remove_point(points: &mut Vec<ElevationPoint>, id: &str) -> bool {
    if !can_remove(points, id) {
        return false;
    }
    points.retain(|p| p.id != id);
    true
}

/// Points ordered left to right
pub fn sorted_by_x(points: &[ElevationPoint]) -> Vec<&ElevationPoint> {
    let mut sorted: Vec<&ElevationPoint> = points.iter().collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    sorted
}

/// Closed outline of the substrate in pixel space.
///
/// Starts at the bottom-left corner, visits every control point left to
/// right and ends at the bottom-right corner; the edge back to the first
/// vertex is implied.
pub fn to_path(
    points: &[ElevationPoint],
    base_height_percent: f64,
    width: f64,
    height: f64,
) -> Vec<DVec2> {
    let base_px = clamp_percent(base_height_percent) / 100.0 * height;
    let mut outline = Vec::with_capacity(points.len() + 2);
    outline.push(DVec2::new(0.0, height));
    outline.extend(sorted_by_x(points).into_iter().map(|p| {
        DVec2::new(
            p.x / 100.0 * width,
            height - base_px - p.y / 100.0 * base_px,
        )
    }));
    outline.push(DVec2::new(width, height));
    outline
}

/// Outline as a closed path for the renderer
pub fn to_bez_path(
    points: &[ElevationPoint],
    base_height_percent: f64,
    width: f64,
    height: f64,
) -> BezPath {
    let mut path = BezPath::new();
    for (i, v) in to_path(points, base_height_percent, width, height)
        .into_iter()
        .enumerate()
    {
        let p = Point::new(v.x, v.y);
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}
