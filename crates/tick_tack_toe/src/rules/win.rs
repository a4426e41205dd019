//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameState, Line};
use tracing::instrument;

/// Sums the signed cell values along a line.
///
/// # Panics
///
/// Panics if the line does not exist on the board; lines are always derived
/// from the board's own size, so this is a programming error.
pub fn line_sum(board: &Board, line: Line) -> i32 {
    let size = board.size();
    assert!(
        line.fits(size),
        "{} does not exist on a {}x{} board",
        line,
        size,
        size
    );
    line.cells(size)
        .map(|position| board.cells()[position.index(size)].raw())
        .sum()
}

/// Returns the first completely marked line and the outcome it implies.
///
/// A sum of `+size` means the human player owns the line, `-size` the
/// opponent.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, GameState)> {
    let size = board.size() as i32;
    Line::all(board.size()).find_map(|line| match line_sum(board, line) {
        sum if sum == -size => Some((line, GameState::PlayerLoss)),
        sum if sum == size => Some((line, GameState::PlayerWin)),
        _ => None,
    })
}
