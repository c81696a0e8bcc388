//! Coordinate resolver: maps pointer input in screen space to board cells.

mod camera;
mod math;
mod resolver;

pub use camera::{Camera, Ray, Viewport};
pub use math::Vec3;
pub use resolver::{BOARD_EXTENT, CELL_SIZE, EDGE_INSET, PIECE_LIFT, cell_center, resolve_cell};
