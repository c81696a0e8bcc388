//! Tests for the session controller: wiring, event flow, reset, resize.

use raygrid::{
    AppConfig, Camera, GameSession, GameStatus, Mark, RenderSink, StatusSink, Vec3, Viewport,
    cell_center,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Commands observed by the recording sinks, in order.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Place { index: usize, mark: Mark },
    Clear,
    Status(String),
}

/// Sink recording every command into a shared log.
#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<Command>>>,
}

impl Recorder {
    fn commands(&self) -> Vec<Command> {
        self.log.borrow().clone()
    }

    fn placements(&self) -> Vec<(usize, Mark)> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                Command::Place { index, mark } => Some((index, mark)),
                _ => None,
            })
            .collect()
    }

    fn last_status(&self) -> Option<String> {
        self.commands()
            .into_iter()
            .rev()
            .find_map(|c| match c {
                Command::Status(text) => Some(text),
                _ => None,
            })
    }
}

impl RenderSink for Recorder {
    fn place_mark(&mut self, index: usize, mark: Mark, _position: Vec3) {
        self.log.borrow_mut().push(Command::Place { index, mark });
    }

    fn clear_marks(&mut self) {
        self.log.borrow_mut().push(Command::Clear);
    }
}

impl StatusSink for Recorder {
    fn show_status(&mut self, text: &str) {
        self.log.borrow_mut().push(Command::Status(text.to_string()));
    }
}

fn wired_session() -> (GameSession, Recorder) {
    let config = AppConfig::default();
    let recorder = Recorder::default();
    let session = GameSession::builder(config.build_camera(), config.build_viewport())
        .render_sink(recorder.clone())
        .status_sink(recorder.clone())
        .build()
        .expect("both sinks are wired");
    (session, recorder)
}

/// Screen coordinates of a cell center under the default config.
fn click_at(camera: &Camera, viewport: Viewport, index: usize) -> (f32, f32) {
    camera
        .project_to_screen(cell_center(index), viewport)
        .expect("cell projects onto the viewport")
}

/// Clicks the given cell through the full resolver path.
fn click_cell(session: &mut GameSession, index: usize) {
    let (sx, sy) = {
        let camera = session.camera().clone();
        click_at(&camera, session.viewport(), index)
    };
    session.pointer_event(sx, sy);
}

#[test]
fn missing_status_sink_fails_wiring() {
    let config = AppConfig::default();
    let err = GameSession::builder(config.build_camera(), config.build_viewport())
        .render_sink(Recorder::default())
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("status sink"));
}

#[test]
fn missing_render_sink_fails_wiring() {
    let config = AppConfig::default();
    let err = GameSession::builder(config.build_camera(), config.build_viewport())
        .status_sink(Recorder::default())
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("render sink"));
}

#[test]
fn build_announces_the_opening_turn() {
    let (_session, recorder) = wired_session();
    assert_eq!(
        recorder.commands(),
        vec![Command::Status("Player X's turn".to_string())]
    );
}

#[test]
fn clicks_drive_a_full_game_to_a_win() {
    let (mut session, recorder) = wired_session();

    for index in [0, 4, 1, 5, 2] {
        click_cell(&mut session, index);
    }

    assert_eq!(session.state().status(), GameStatus::Won(Mark::X));
    assert_eq!(
        recorder.placements(),
        vec![
            (0, Mark::X),
            (4, Mark::O),
            (1, Mark::X),
            (5, Mark::O),
            (2, Mark::X),
        ]
    );
    assert_eq!(recorder.last_status(), Some("Player X wins!".to_string()));
}

#[test]
fn clicks_after_the_game_ends_are_ignored() {
    let (mut session, recorder) = wired_session();
    for index in [0, 4, 1, 5, 2] {
        click_cell(&mut session, index);
    }
    let placed = recorder.placements().len();

    click_cell(&mut session, 8);
    assert_eq!(recorder.placements().len(), placed);
    assert_eq!(session.state().status(), GameStatus::Won(Mark::X));
}

#[test]
fn occupied_cell_click_changes_nothing() {
    let (mut session, recorder) = wired_session();
    click_cell(&mut session, 4);
    let before = session.state().clone();
    let commands = recorder.commands();

    click_cell(&mut session, 4);
    assert_eq!(session.state(), &before);
    assert_eq!(recorder.commands(), commands);
}

#[test]
fn clicks_off_the_board_are_silent() {
    let (mut session, recorder) = wired_session();
    let commands = recorder.commands();

    session.pointer_event(0.0, 0.0);
    session.pointer_event(799.0, 1.0);

    assert_eq!(recorder.commands(), commands);
    assert_eq!(session.state().current_player(), Mark::X);
}

#[test]
fn touch_uses_the_first_touch_point() {
    let (mut session, recorder) = wired_session();
    let (sx, sy) = {
        let camera = session.camera().clone();
        click_at(&camera, session.viewport(), 4)
    };

    session.touch_event(&[(sx, sy), (0.0, 0.0)]);
    assert_eq!(recorder.placements(), vec![(4, Mark::X)]);

    session.touch_event(&[]);
    assert_eq!(recorder.placements().len(), 1);
}

#[test]
fn reset_clears_pieces_before_the_next_click() {
    let (mut session, recorder) = wired_session();
    for index in [0, 4, 1, 5, 2] {
        click_cell(&mut session, index);
    }

    session.reset();
    assert_eq!(session.state().status(), GameStatus::Running);
    assert_eq!(session.state().current_player(), Mark::X);
    assert_eq!(
        recorder.last_status(),
        Some("Player X's turn".to_string())
    );

    // The clear signal precedes any new placement.
    let commands = recorder.commands();
    let clear_at = commands
        .iter()
        .position(|c| *c == Command::Clear)
        .expect("reset emits a clear command");

    click_cell(&mut session, 0);
    let commands = recorder.commands();
    let place_at = commands
        .iter()
        .rposition(|c| matches!(c, Command::Place { .. }))
        .unwrap();
    assert!(clear_at < place_at);
    assert_eq!(session.state().current_player(), Mark::O);
}

#[test]
fn resize_touches_the_camera_but_not_the_game() {
    let (mut session, _recorder) = wired_session();
    click_cell(&mut session, 4);
    let before = session.state().clone();

    session.resize(1024.0, 768.0);
    assert_eq!(session.state(), &before);
    assert_eq!(session.viewport(), Viewport::new(1024.0, 768.0));
    assert!((session.camera().aspect() - 1024.0 / 768.0).abs() < 1e-6);

    // Clicks keep resolving under the new viewport.
    click_cell(&mut session, 0);
    assert_eq!(session.state().current_player(), Mark::X);
    assert!(!session.state().board().is_empty(0));
}
