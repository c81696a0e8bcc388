//! Input-to-game wiring: the session controller and its output sinks.
//!
//! The session owns the camera, the viewport, and the game, and talks to the
//! outside world through two narrow traits: a render sink that places and
//! clears mark visuals, and a status sink that shows turn/outcome text. Both
//! are structural prerequisites; building a session without them fails.

use crate::game::{Game, GameState, Mark, MoveOutcome};
use crate::picking::{Camera, Vec3, Viewport, cell_center, resolve_cell};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Passive rendering surface for placed marks.
///
/// The session never disposes visual resources itself; `clear_marks` is the
/// signal that every placed piece must be released.
pub trait RenderSink {
    /// Renders `mark` at board cell `index`, at world `position`.
    fn place_mark(&mut self, index: usize, mark: Mark, position: Vec3);

    /// Removes every placed mark (reset).
    fn clear_marks(&mut self);
}

/// Display surface for human-readable turn/outcome text.
pub trait StatusSink {
    /// Shows the given status line.
    fn show_status(&mut self, text: &str);
}

/// Startup wiring error: a required collaborator was not supplied.
#[derive(Debug, Clone, Display, Error)]
#[display("Session wiring error: {} at {}:{}", message, file, line)]
pub struct WiringError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl WiringError {
    /// Creates a new wiring error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Builder for [`GameSession`].
///
/// Missing sinks are fatal at build time, not at event time: a session
/// without a status display or render surface cannot function.
pub struct SessionBuilder {
    camera: Camera,
    viewport: Viewport,
    render: Option<Box<dyn RenderSink>>,
    status: Option<Box<dyn StatusSink>>,
}

impl SessionBuilder {
    /// Starts a builder with the given camera and viewport.
    pub fn new(camera: Camera, viewport: Viewport) -> Self {
        Self {
            camera,
            viewport,
            render: None,
            status: None,
        }
    }

    /// Wires the render sink.
    pub fn render_sink(mut self, sink: impl RenderSink + 'static) -> Self {
        self.render = Some(Box::new(sink));
        self
    }

    /// Wires the status sink.
    pub fn status_sink(mut self, sink: impl StatusSink + 'static) -> Self {
        self.status = Some(Box::new(sink));
        self
    }

    /// Builds the session, announcing the opening turn on the status sink.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError`] if either sink is missing.
    pub fn build(self) -> Result<GameSession, WiringError> {
        let render = self
            .render
            .ok_or_else(|| WiringError::new("render sink not wired"))?;
        let status = self
            .status
            .ok_or_else(|| WiringError::new("status sink not wired"))?;

        let mut session = GameSession {
            camera: self.camera,
            viewport: self.viewport,
            game: Game::new(),
            render,
            status,
        };
        info!("session wired");
        session.publish_status();
        Ok(session)
    }
}

/// Session controller: feeds pointer input through the resolver into the
/// game and pushes the results out through the sinks.
///
/// Single-threaded and synchronous: each event is processed to completion
/// before the next one is accepted.
pub struct GameSession {
    camera: Camera,
    viewport: Viewport,
    game: Game,
    render: Box<dyn RenderSink>,
    status: Box<dyn StatusSink>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("camera", &self.camera)
            .field("viewport", &self.viewport)
            .field("game", &self.game)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Starts a session builder.
    pub fn builder(camera: Camera, viewport: Viewport) -> SessionBuilder {
        SessionBuilder::new(camera, viewport)
    }

    /// Returns the current logical game state.
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Returns the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Handles a pointer click at raw screen coordinates.
    ///
    /// A ray miss or an invalid move is a silent no-op; a placed mark is
    /// forwarded to the render sink and the status line is refreshed.
    #[instrument(skip(self))]
    pub fn pointer_event(&mut self, screen_x: f32, screen_y: f32) {
        let Some(index) = resolve_cell(screen_x, screen_y, self.viewport, &self.camera) else {
            debug!(screen_x, screen_y, "pointer missed the board");
            return;
        };

        match self.game.apply_move(index) {
            MoveOutcome::Placed { index, mark } => {
                self.render.place_mark(index, mark, cell_center(index));
                self.publish_status();
            }
            MoveOutcome::Ignored => debug!(index, "move ignored"),
        }
    }

    /// Handles a touch start: the first touch point follows the pointer path.
    pub fn touch_event(&mut self, touches: &[(f32, f32)]) {
        if let Some(&(x, y)) = touches.first() {
            self.pointer_event(x, y);
        }
    }

    /// Resets the game, unconditionally.
    ///
    /// The logical state is cleared first, then the render sink is told to
    /// release every placed piece, so the next pointer event observes an
    /// empty board and an empty scene.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting session");
        self.game.reset();
        self.render.clear_marks();
        self.publish_status();
    }

    /// Handles a viewport resize. Affects only the camera, never game state.
    #[instrument(skip(self))]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_viewport(width, height);
    }

    fn publish_status(&mut self) {
        let line = self.game.state().status_line();
        self.status.show_status(&line);
    }
}
