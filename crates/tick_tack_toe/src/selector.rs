//! Move selection for the automated opponent.
//!
//! Every free cell is scored by adding the weights of the lines through it.
//! The opponent then picks uniformly among the cells sharing the best score.

use super::scoring::weight_for_line;
use super::{Board, Line, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Free cells sharing the highest candidate score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieBreak {
    /// The shared score.
    pub score: i32,
    /// Tied positions in row-major order.
    pub positions: Vec<Position>,
}

/// Scores a cell by the weights of its row, its column and any diagonals
/// passing through it.
pub fn candidate_score(board: &Board, position: Position) -> i32 {
    Line::through(position, board.size())
        .into_iter()
        .map(|line| weight_for_line(line, board).value())
        .sum()
}

/// Returns the top-scoring free cells, or `None` if the board is full.
#[instrument(skip(board))]
pub fn tie_break_set(board: &Board) -> Option<TieBreak> {
    let mut best_score = i32::MIN;
    let mut positions = Vec::new();

    for position in board.free_positions() {
        let score = candidate_score(board, position);
        if score > best_score {
            best_score = score;
            positions.clear();
            positions.push(position);
        } else if score == best_score {
            positions.push(position);
        }
    }

    if positions.is_empty() {
        return None;
    }
    Some(TieBreak {
        score: best_score,
        positions,
    })
}

/// Chooses the opponent's next move.
///
/// Returns `None` when no free cell remains.
#[instrument(skip(board, rng))]
pub fn next_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let tie = tie_break_set(board)?;
    let choice = tie.positions.choose(rng).copied();
    debug!(
        score = tie.score,
        candidates = tie.positions.len(),
        choice = ?choice,
        "Selected opponent move"
    );
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_board_prefers_center() {
        // Center touches four untouched lines, corners three, edges two.
        let board = Board::new(3);
        assert_eq!(candidate_score(&board, Position::new(1, 1)), 8);
        assert_eq!(candidate_score(&board, Position::new(0, 0)), 6);
        assert_eq!(candidate_score(&board, Position::new(0, 1)), 4);

        let tie = tie_break_set(&board).unwrap();
        assert_eq!(tie.score, 8);
        assert_eq!(tie.positions, vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_corners_tie_after_center_taken() {
        let mut board = Board::new(3);
        board.set(1, 1, Value::Player).unwrap();
        let tie = tie_break_set(&board).unwrap();
        assert_eq!(
            tie.positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(2, 2)
            ]
        );

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let choice = next_move(&board, &mut rng).unwrap();
            assert!(tie.positions.contains(&choice));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for column in 0..3 {
                board.set(row, column, Value::Player).unwrap();
            }
        }
        assert_eq!(tie_break_set(&board), None);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(next_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_free_cell() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for column in 0..3 {
                board.set(row, column, Value::Opponent).unwrap();
            }
        }
        board.set(2, 1, Value::Empty).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(next_move(&board, &mut rng), Some(Position::new(2, 1)));
    }
}
