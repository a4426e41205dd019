//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winning_line;

/// Returns true if the board is full and no line is complete.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
