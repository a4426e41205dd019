//! Heuristic weights for rows, columns and diagonals.
//!
//! Weights are computed from the opponent's point of view: completing its own
//! line (`Win`) ranks above blocking the player's (`Max`).

use super::rules::line_sum;
use super::{Board, Line, Weight};
use tracing::instrument;

/// Returns true if every cell of the line is empty.
pub fn line_is_empty(line: Line, board: &Board) -> bool {
    let size = board.size();
    line.cells(size)
        .all(|position| board.cells()[position.index(size)].is_empty())
}

/// Computes the weight of a line on a 3x3 board.
///
/// | sum | weight |
/// |-----|--------|
/// | +2  | `Max`  |
/// | -2  | `Win`  |
/// | +1  | `High` |
/// | -1  | `Low`  |
/// | 0, line empty | `Medium` |
/// | anything else | `Min` |
#[instrument(skip(board), ret)]
pub fn weight_for_line(line: Line, board: &Board) -> Weight {
    match line_sum(board, line) {
        2 => Weight::Max,
        -2 => Weight::Win,
        1 => Weight::High,
        -1 => Weight::Low,
        _ if line_is_empty(line, board) => Weight::Medium,
        _ => Weight::Min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diagonal, Value};

    #[test]
    fn test_empty_board_every_line_medium() {
        let board = Board::new(3);
        for line in Line::all(3) {
            assert_eq!(weight_for_line(line, &board), Weight::Medium, "{}", line);
        }
    }

    #[test]
    fn test_two_player_marks_is_max() {
        let mut board = Board::new(3);
        board.set(0, 0, Value::Player).unwrap();
        board.set(0, 1, Value::Player).unwrap();
        assert_eq!(weight_for_line(Line::Row(0), &board), Weight::Max);
    }

    #[test]
    fn test_two_opponent_marks_is_win() {
        let mut board = Board::new(3);
        board.set(0, 2, Value::Opponent).unwrap();
        board.set(2, 0, Value::Opponent).unwrap();
        assert_eq!(
            weight_for_line(Line::Diagonal(Diagonal::Anti), &board),
            Weight::Win
        );
    }

    #[test]
    fn test_single_marks() {
        let mut board = Board::new(3);
        board.set(1, 1, Value::Player).unwrap();
        board.set(2, 0, Value::Opponent).unwrap();
        assert_eq!(weight_for_line(Line::Column(1), &board), Weight::High);
        assert_eq!(weight_for_line(Line::Row(2), &board), Weight::Low);
    }

    #[test]
    fn test_blocked_line_is_min() {
        let mut board = Board::new(3);
        board.set(0, 0, Value::Player).unwrap();
        board.set(0, 1, Value::Opponent).unwrap();
        assert_eq!(weight_for_line(Line::Row(0), &board), Weight::Min);
    }

    #[test]
    fn test_complete_line_is_min() {
        let mut board = Board::new(3);
        for column in 0..3 {
            board.set(2, column, Value::Player).unwrap();
        }
        assert_eq!(weight_for_line(Line::Row(2), &board), Weight::Min);
    }

    #[test]
    fn test_own_near_win_outranks_block() {
        // Deliberately aggressive: finishing its own line beats blocking.
        assert!(Weight::Win > Weight::Max);
    }
}
