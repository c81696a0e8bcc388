//! Core domain types for the board game.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a mark.
    Marked(Mark),
}

/// The 8 winning triples: 3 rows, 3 columns, 2 diagonals.
///
/// Checked in this fixed order so evaluation is deterministic.
pub(crate) const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// 3x3 board with cells in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if the board has no empty cell left.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Places a mark. Caller must have validated the index (0-8).
    pub(super) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Cell::Marked(mark);
    }

    /// Clears every cell back to empty.
    pub(super) fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Formats the board as a human-readable glyph grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let glyph = match self.cells[row * 3 + col] {
                    Cell::Empty => ".",
                    Cell::Marked(Mark::X) => "X",
                    Cell::Marked(Mark::O) => "O",
                };
                result.push_str(glyph);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    Running,
    /// Game ended with a winner.
    Won(Mark),
    /// Board filled with no winner.
    Tied,
}

impl GameStatus {
    /// True once the game has ended; no moves are accepted until reset.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Complete logical game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark that moves next. Frozen at its last value once the game ends.
    current_player: Mark,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, running.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::Running,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Human-readable turn/outcome line for the status display.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::Running => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(mark) => format!("Player {mark} wins!"),
            GameStatus::Tied => "It's a Tie!".to_string(),
        }
    }

    /// Places a mark (unchecked - use `Game::apply_move` for validation).
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        self.board.set(index, mark);
    }

    /// Hands the turn to the other player.
    pub(super) fn toggle_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Restores the initial state.
    pub(super) fn clear(&mut self) {
        self.board.clear();
        self.current_player = Mark::X;
        self.status = GameStatus::Running;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
