//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The outcome is never cached: it is
//! recomputed from the cells every time it is asked for.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{line_sum, winning_line};

use super::{Board, GameState};
use tracing::instrument;

/// Derives the current outcome from board contents.
///
/// Lines are scanned rows first, then columns, then the main diagonal and the
/// anti-diagonal; the first complete line decides the result.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameState {
    if let Some((_, state)) = winning_line(board) {
        return state;
    }
    if board.is_full() {
        return GameState::Draw;
    }
    GameState::Playing
}
