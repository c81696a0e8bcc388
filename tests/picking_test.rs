//! Tests for the coordinate resolver: round trips, misses, boundary policy.

use raygrid::{BOARD_EXTENT, Camera, Vec3, Viewport, cell_center, resolve_cell};

fn default_camera(viewport: Viewport) -> Camera {
    Camera::new(
        Vec3::new(0.0, 5.0, 5.0),
        Vec3::ZERO,
        45.0,
        viewport.aspect(),
    )
}

#[test]
fn cell_centers_resolve_back_to_their_index() {
    let viewport = Viewport::new(800.0, 600.0);
    let camera = default_camera(viewport);

    for index in 0..9 {
        let (sx, sy) = camera
            .project_to_screen(cell_center(index), viewport)
            .expect("cell center projects onto the viewport");
        assert_eq!(
            resolve_cell(sx, sy, viewport, &camera),
            Some(index),
            "cell {index} should round-trip through projection"
        );
    }
}

#[test]
fn round_trip_survives_other_viewports() {
    for (w, h) in [(1024.0, 768.0), (1920.0, 1080.0), (320.0, 480.0)] {
        let viewport = Viewport::new(w, h);
        let camera = default_camera(viewport);
        for index in 0..9 {
            let (sx, sy) = camera
                .project_to_screen(cell_center(index), viewport)
                .unwrap();
            assert_eq!(resolve_cell(sx, sy, viewport, &camera), Some(index));
        }
    }
}

#[test]
fn points_off_the_plane_are_misses() {
    let viewport = Viewport::new(800.0, 600.0);
    let camera = default_camera(viewport);

    // Top edge and corners: the ray lands far beyond the 3x3 square.
    assert_eq!(resolve_cell(400.0, 0.0, viewport, &camera), None);
    assert_eq!(resolve_cell(0.0, 0.0, viewport, &camera), None);
    assert_eq!(resolve_cell(799.0, 0.0, viewport, &camera), None);
}

#[test]
fn hits_outside_the_square_are_misses() {
    let viewport = Viewport::new(800.0, 600.0);
    let camera = default_camera(viewport);

    // A point clearly beyond the playable surface.
    let outside = Vec3::new(BOARD_EXTENT + 0.2, 0.0, 0.0);
    let (sx, sy) = camera.project_to_screen(outside, viewport).unwrap();
    assert_eq!(resolve_cell(sx, sy, viewport, &camera), None);
}

/// Camera straight above `(x, z)`; its center ray hits the plane at
/// exactly that point, with no floating-point drift.
fn overhead_camera(x: f32, z: f32) -> Camera {
    Camera::new(Vec3::new(x, 5.0, z), Vec3::new(x, 0.0, z), 45.0, 800.0 / 600.0)
}

#[test]
fn boundary_hits_clamp_into_the_outer_cell() {
    let viewport = Viewport::new(800.0, 600.0);

    // A hit exactly on the far corner of the square is clamped just
    // inside, classifying as the bottom-right cell instead of falling
    // off the grid.
    let camera = overhead_camera(BOARD_EXTENT, BOARD_EXTENT);
    assert_eq!(resolve_cell(400.0, 300.0, viewport, &camera), Some(8));

    let camera = overhead_camera(-BOARD_EXTENT, -BOARD_EXTENT);
    assert_eq!(resolve_cell(400.0, 300.0, viewport, &camera), Some(0));

    // Just beyond the boundary is genuinely off the surface.
    let camera = overhead_camera(BOARD_EXTENT + 0.05, 0.0);
    assert_eq!(resolve_cell(400.0, 300.0, viewport, &camera), None);
}

#[test]
fn resolution_is_deterministic() {
    let viewport = Viewport::new(800.0, 600.0);
    let camera = default_camera(viewport);

    let first = resolve_cell(412.5, 287.25, viewport, &camera);
    let second = resolve_cell(412.5, 287.25, viewport, &camera);
    assert_eq!(first, second);
}

#[test]
fn placement_positions_sit_above_the_plane() {
    for index in 0..9 {
        let center = cell_center(index);
        assert!(center.y > 0.0, "piece must sit above the plane");
        assert!(center.x.abs() <= 1.0 && center.z.abs() <= 1.0);
    }
}
