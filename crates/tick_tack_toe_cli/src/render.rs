//! Text rendering of the board and parsing of typed moves.

use crate::config::CliConfig;
use tick_tack_toe::{Board, Position, Value};

/// Glyphs used to draw marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    /// Human player's mark.
    pub player: String,
    /// Opponent's mark.
    pub opponent: String,
}

impl From<&CliConfig> for Glyphs {
    fn from(config: &CliConfig) -> Self {
        Self {
            player: config.player_glyph().clone(),
            opponent: config.opponent_glyph().clone(),
        }
    }
}

/// Formats the board; free cells show the number that selects them.
pub fn render_board(board: &Board, glyphs: &Glyphs) -> String {
    let size = board.size();
    let mut result = String::new();
    for (index, value) in board.cells().iter().enumerate() {
        let symbol = match value {
            Value::Empty => (index + 1).to_string(),
            Value::Player => glyphs.player.clone(),
            Value::Opponent => glyphs.opponent.clone(),
        };
        result.push_str(&symbol);

        let column = index % size;
        if column + 1 < size {
            result.push('|');
        } else if index + 1 < size * size {
            result.push('\n');
            result.push_str(&vec!["-"; size].join("+"));
            result.push('\n');
        }
    }
    result
}

/// Parses a move typed as a cell number (`1`..`size²`) or as a one-based
/// `row,column` pair. Returns `None` for anything else.
pub fn parse_move(input: &str, size: usize) -> Option<Position> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| Position::from_index(index, size));
    }

    let (row, column) = input.split_once([',', ' '])?;
    let row = row.trim().parse::<usize>().ok()?.checked_sub(1)?;
    let column = column.trim().parse::<usize>().ok()?.checked_sub(1)?;
    (row < size && column < size).then(|| Position::new(row, column))
}
