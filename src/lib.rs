//! Raygrid - 3D tic-tac-toe core
//!
//! An interactive 3x3 grid game rendered in a 3D viewport: pointer input is
//! mapped to board cells by casting a ray through the camera and
//! intersecting the board plane, and a pure state machine enforces the
//! three-in-a-row rules.
//!
//! # Architecture
//!
//! - **`picking`**: screen point -> NDC -> camera ray -> planar hit ->
//!   board index. Pure with respect to game state.
//! - **`game`**: board, current player, status; move validation, win/tie
//!   detection, turn lifecycle, reset.
//! - **`session`**: wires input events through the resolver into the game
//!   and emits render/status commands through narrow sink traits.
//! - **`frontend`**: console implementations of those sinks.
//!
//! # Example
//!
//! ```
//! use raygrid::{AppConfig, ConsoleRender, ConsoleStatus, GameSession};
//!
//! let config = AppConfig::default();
//! let mut session = GameSession::builder(config.build_camera(), config.build_viewport())
//!     .render_sink(ConsoleRender::new())
//!     .status_sink(ConsoleStatus)
//!     .build()
//!     .expect("sinks are wired");
//!
//! // Screen center resolves to the center cell; X opens there.
//! session.pointer_event(400.0, 300.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod frontend;
mod game;
mod picking;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, CameraConfig, ConfigError, ViewportConfig};

// Crate-level exports - Console frontend
pub use frontend::{ConsoleRender, ConsoleStatus};

// Crate-level exports - Game state machine
pub use game::{Board, Cell, Evaluation, Game, GameState, GameStatus, Mark, MoveOutcome, evaluate};

// Crate-level exports - Coordinate resolver
pub use picking::{
    BOARD_EXTENT, CELL_SIZE, Camera, EDGE_INSET, PIECE_LIFT, Ray, Vec3, Viewport, cell_center,
    resolve_cell,
};

// Crate-level exports - Session controller
pub use session::{GameSession, RenderSink, SessionBuilder, StatusSink, WiringError};
