//! Fixed-size grid of cell values.

use super::types::{Position, Value};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length every game is played on.
pub const BOARD_SIZE: usize = 3;

/// Errors raised by board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Row or column outside `[0, size)`.
    #[display("Position ({}, {}) is outside a {}x{} board", row, column, size, size)]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Side length of the board.
        size: usize,
    },
}

/// Square board stored as a row-major sequence of cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: Vec<Value>,
    /// Side length; never changes after construction.
    size: usize,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Value::Empty; size * size],
            size,
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns every cell in row-major order.
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    /// Gets the value at the given coordinates.
    pub fn get(&self, row: usize, column: usize) -> Result<Value, BoardError> {
        let index = self.index(row, column)?;
        Ok(self.cells[index])
    }

    /// Overwrites the value at the given coordinates, whatever it held.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, column: usize, value: Value) -> Result<(), BoardError> {
        let index = self.index(row, column)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Gets the value at a position.
    pub fn at(&self, position: Position) -> Result<Value, BoardError> {
        self.get(position.row, position.column)
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|value| !value.is_empty())
    }

    /// Returns the empty positions in row-major order.
    pub fn free_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_empty())
            .filter_map(|(index, _)| Position::from_index(index, self.size))
            .collect()
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        if row >= self.size || column >= self.size {
            return Err(BoardError::IndexOutOfRange {
                row,
                column,
                size: self.size,
            });
        }
        Ok(row * self.size + column)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}
