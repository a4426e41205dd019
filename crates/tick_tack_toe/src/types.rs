//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
///
/// Each variant maps to a signed integer so that summing the cells of a
/// line yields its signed magnitude: `+size` means the human player owns the
/// whole line, `-size` means the opponent does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Value {
    /// Free cell.
    #[default]
    Empty,
    /// Cell marked by the human player.
    Player,
    /// Cell marked by the automated opponent.
    Opponent,
}

impl Value {
    /// Returns the signed integer encoding of this value (0, +1 or -1).
    pub fn raw(self) -> i32 {
        match self {
            Value::Empty => 0,
            Value::Player => 1,
            Value::Opponent => -1,
        }
    }

    /// Returns true if the cell is free.
    pub fn is_empty(self) -> bool {
        self == Value::Empty
    }
}

/// Heuristic weight of a line, written from the opponent's point of view.
///
/// Variants are declared in ascending order so the derived `Ord` agrees with
/// [`Weight::value`]. `Max` and `Win` are far above the rest so that a single
/// tactical line outweighs any combination of quiet ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Weight {
    /// Line is blocked for both sides.
    Min,
    /// Line holds a single opponent mark.
    Low,
    /// Line is untouched.
    Medium,
    /// Line holds a single player mark.
    High,
    /// Player is one mark away from completing the line.
    Max,
    /// Opponent is one mark away from completing the line.
    Win,
}

impl Weight {
    /// Returns the numeric score of this weight.
    pub fn value(self) -> i32 {
        match self {
            Weight::Min => 0,
            Weight::Low => 1,
            Weight::Medium => 2,
            Weight::High => 3,
            Weight::Max => 40,
            Weight::Win => 1000,
        }
    }
}

/// Outcome of the game, derived from board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// No line is complete and free cells remain.
    #[display("Playing")]
    Playing,
    /// The human player completed a line.
    #[display("You win")]
    PlayerWin,
    /// The opponent completed a line.
    #[display("You lost")]
    PlayerLoss,
    /// The board is full and nobody completed a line.
    #[display("Draw")]
    Draw,
}

impl GameState {
    /// Returns true once no further moves should be applied.
    pub fn is_terminal(self) -> bool {
        self != GameState::Playing
    }
}

/// A (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Converts to a row-major index for a board of the given size.
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// Creates a position from a row-major index, or `None` if the index
    /// falls outside a board of the given size.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new(index / size, index % size))
    }

    /// Returns true if the position lies on the main diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Returns true if the position lies on the anti-diagonal of a board of
    /// the given size.
    pub fn on_anti_diagonal(self, size: usize) -> bool {
        self.row + self.column + 1 == size
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_value_encoding() {
        assert_eq!(Value::Empty.raw(), 0);
        assert_eq!(Value::Player.raw(), 1);
        assert_eq!(Value::Opponent.raw(), -1);
    }

    #[test]
    fn test_weight_order_matches_values() {
        let values: Vec<i32> = Weight::iter().map(Weight::value).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 40, 1000]);
        for (a, b) in Weight::iter().zip(Weight::iter().skip(1)) {
            assert!(a < b);
        }
    }

    #[test]
    fn test_max_outweighs_two_quiet_lines() {
        // A cell touches at most four lines; four High lines stay below one Max.
        assert!(Weight::Max.value() > 4 * Weight::High.value());
        // Win beats Max plus every other line through a cell.
        assert!(Weight::Win.value() > 3 * Weight::Max.value());
    }

    #[test]
    fn test_position_index_round_trip_edges() {
        assert_eq!(Position::new(0, 0).index(3), 0);
        assert_eq!(Position::new(2, 1).index(3), 7);
        assert_eq!(Position::from_index(5, 3), Some(Position::new(1, 2)));
        assert_eq!(Position::from_index(9, 3), None);
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Position::new(1, 1).on_main_diagonal());
        assert!(Position::new(1, 1).on_anti_diagonal(3));
        assert!(Position::new(0, 2).on_anti_diagonal(3));
        assert!(!Position::new(0, 1).on_main_diagonal());
        assert!(!Position::new(0, 1).on_anti_diagonal(3));
    }

    #[test]
    fn test_game_state_messages() {
        assert_eq!(GameState::PlayerWin.to_string(), "You win");
        assert_eq!(GameState::PlayerLoss.to_string(), "You lost");
        assert_eq!(GameState::Draw.to_string(), "Draw");
        assert!(!GameState::Playing.is_terminal());
    }
}
