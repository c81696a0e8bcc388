//! Screen-point to board-cell resolution.
//!
//! The pipeline: screen pixels -> normalized device coordinates -> camera
//! ray -> intersection with the finite board square -> clamped cell
//! coordinate -> board index. Pure with respect to game state.

use super::camera::{Camera, Ray, Viewport};
use super::math::Vec3;
use tracing::{instrument, trace};

/// Half-width of the playable square, in plane units (the board is 3x3).
pub const BOARD_EXTENT: f32 = 1.5;

/// Side length of one cell, in plane units.
pub const CELL_SIZE: f32 = 1.0;

/// Inset applied when clamping hits near the board edge.
///
/// A hit exactly on the outer boundary would otherwise floor into
/// row/col 3 and misclassify; clamping to just inside keeps it in the
/// outer cell.
pub const EDGE_INSET: f32 = 0.01;

/// Height above the plane where marks are rendered (avoids z-fighting).
pub const PIECE_LIFT: f32 = 0.05;

/// Converts screen pixels to normalized device coordinates.
fn to_ndc(screen_x: f32, screen_y: f32, viewport: Viewport) -> (f32, f32) {
    (
        (screen_x / viewport.width) * 2.0 - 1.0,
        -(screen_y / viewport.height) * 2.0 + 1.0,
    )
}

/// Intersects a ray with the horizontal plane y = 0.
///
/// Returns `None` when the ray is parallel to the plane or the hit lies
/// behind the origin.
fn plane_hit(ray: &Ray) -> Option<Vec3> {
    if ray.dir.y.abs() <= f32::EPSILON {
        return None;
    }
    let t = -ray.origin.y / ray.dir.y;
    if t <= 0.0 {
        return None;
    }
    Some(ray.origin + ray.dir * t)
}

/// Resolves a screen point to a board index (0-8).
///
/// Returns `None` when the pick ray misses the 3x3 board square. The
/// surface is finite: a hit outside the square is a miss, while a hit on
/// the boundary is clamped just inside before the cell mapping.
/// Deterministic for identical camera pose, viewport, and screen point.
#[instrument(skip(camera))]
pub fn resolve_cell(
    screen_x: f32,
    screen_y: f32,
    viewport: Viewport,
    camera: &Camera,
) -> Option<usize> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let (ndc_x, ndc_y) = to_ndc(screen_x, screen_y, viewport);
    let ray = camera.ray_through(ndc_x, ndc_y);
    let hit = plane_hit(&ray)?;
    trace!(x = hit.x, z = hit.z, "plane hit");

    if hit.x.abs() > BOARD_EXTENT || hit.z.abs() > BOARD_EXTENT {
        return None;
    }

    let bound = BOARD_EXTENT - EDGE_INSET;
    let x = hit.x.clamp(-bound, bound);
    let z = hit.z.clamp(-bound, bound);

    let col = ((x + BOARD_EXTENT) / CELL_SIZE).floor() as i32;
    let row = ((z + BOARD_EXTENT) / CELL_SIZE).floor() as i32;

    // Unreachable after the clamp above, checked anyway.
    if !(0..3).contains(&col) || !(0..3).contains(&row) {
        return None;
    }

    Some((row * 3 + col) as usize)
}

/// World position where a mark at `index` is rendered.
///
/// Column maps to x, row to z, both shifted so the grid is centered on the
/// origin; the piece sits slightly above the plane.
pub fn cell_center(index: usize) -> Vec3 {
    debug_assert!(index < 9, "board index out of range");
    let col = (index % 3) as f32;
    let row = (index / 3) as f32;
    Vec3::new(col - 1.0, PIECE_LIFT, row - 1.0)
}
