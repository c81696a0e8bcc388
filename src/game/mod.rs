//! Game state machine: board contents, turn lifecycle, terminal detection.

mod rules;
mod types;

pub use rules::{Evaluation, Game, MoveOutcome, evaluate};
pub use types::{Board, Cell, GameState, GameStatus, Mark};
