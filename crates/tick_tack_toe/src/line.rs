//! Rows, columns and diagonals of the board.
//!
//! Lines are never stored; they are walked over the board on demand.

use super::types::Position;
use serde::{Deserialize, Serialize};

/// One of the two diagonals of a square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagonal {
    /// Runs from (0, 0) to (size-1, size-1).
    Main,
    /// Runs from (0, size-1) to (size-1, 0).
    Anti,
}

/// A group of cells checked together for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// One of the diagonals.
    Diagonal(Diagonal),
}

impl Line {
    /// Returns every line of a board in scan order: rows, columns, then the
    /// main diagonal and the anti-diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal(Diagonal::Main), Line::Diagonal(Diagonal::Anti)])
    }

    /// Returns true if the line exists on a board of the given size.
    pub fn fits(self, size: usize) -> bool {
        match self {
            Line::Row(index) | Line::Column(index) => index < size,
            Line::Diagonal(_) => size > 0,
        }
    }

    /// Returns the positions making up this line.
    pub fn cells(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(column) => Position::new(i, column),
            Line::Diagonal(Diagonal::Main) => Position::new(i, i),
            Line::Diagonal(Diagonal::Anti) => Position::new(i, size - 1 - i),
        })
    }

    /// Returns every line passing through a position: its row, its column,
    /// and whichever diagonals contain it.
    pub fn through(position: Position, size: usize) -> Vec<Line> {
        let mut lines = vec![Line::Row(position.row), Line::Column(position.column)];
        if position.on_main_diagonal() {
            lines.push(Line::Diagonal(Diagonal::Main));
        }
        if position.on_anti_diagonal(size) {
            lines.push(Line::Diagonal(Diagonal::Anti));
        }
        lines
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(column) => write!(f, "column {}", column),
            Line::Diagonal(Diagonal::Main) => write!(f, "main diagonal"),
            Line::Diagonal(Diagonal::Anti) => write!(f, "anti-diagonal"),
        }
    }
}
