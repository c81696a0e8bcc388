//! Move validation, terminal-condition evaluation, and the turn lifecycle.

use super::types::{Board, Cell, GameState, GameStatus, Mark, TRIPLES};
use tracing::{debug, info, instrument};

/// Result of handing a board index to the state machine.
///
/// Invalid clicks (occupied cell, finished game, bad index) are normal
/// interaction, so they surface as `Ignored` rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A mark was placed; collaborators should render it at `index`.
    Placed {
        /// Cell the mark landed on (0-8).
        index: usize,
        /// Mark that was placed.
        mark: Mark,
    },
    /// A precondition failed; nothing changed.
    Ignored,
}

/// Terminal-condition evaluation of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// A triple is complete; the mark that owns it wins.
    Won(Mark),
    /// Board full with no complete triple.
    Tied,
    /// Game continues.
    Ongoing,
}

/// Evaluates the board against the 8 fixed triples, in order.
///
/// The win check precedes the tie check: a full board with a complete
/// triple is a win, never a tie.
pub fn evaluate(board: &Board) -> Evaluation {
    for [a, b, c] in TRIPLES {
        if let Some(Cell::Marked(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Marked(mark))
            && board.get(c) == Some(Cell::Marked(mark))
        {
            return Evaluation::Won(mark);
        }
    }

    if board.is_full() {
        Evaluation::Tied
    } else {
        Evaluation::Ongoing
    }
}

/// Game engine owning the logical state.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move, running.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies a move at the given board index.
    ///
    /// Preconditions: status running, index in 0-8, cell empty. Any failed
    /// precondition leaves the state untouched and reports `Ignored`. On a
    /// placed move the terminal condition is re-evaluated; the current
    /// player toggles only while the game keeps running and is frozen at
    /// its last value on a win or tie.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.state.status().is_terminal() {
            debug!(index, "move ignored: game already over");
            return MoveOutcome::Ignored;
        }
        if index >= 9 {
            debug!(index, "move ignored: index out of range");
            return MoveOutcome::Ignored;
        }
        if !self.state.board().is_empty(index) {
            debug!(index, "move ignored: cell occupied");
            return MoveOutcome::Ignored;
        }

        let mark = self.state.current_player();
        self.state.place(index, mark);

        match evaluate(self.state.board()) {
            Evaluation::Won(winner) => {
                info!(%winner, "game won");
                self.state.set_status(GameStatus::Won(winner));
            }
            Evaluation::Tied => {
                info!("game tied");
                self.state.set_status(GameStatus::Tied);
            }
            Evaluation::Ongoing => self.state.toggle_player(),
        }

        MoveOutcome::Placed { index, mark }
    }

    /// Resets to the initial state, unconditionally.
    ///
    /// Callable at any time: mid-game it abandons the current game, after a
    /// terminal status it starts the next one. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("clearing board");
        self.state.clear();
    }
}
