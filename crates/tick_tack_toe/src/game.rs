//! Game state machine for a human player against the heuristic opponent.
//!
//! The game owns its board and a seedable random source used to break ties
//! between equally scored opponent moves. The outcome is derived from the
//! board on every call to [`Game::state`]; enforcing turn order and not
//! moving after a terminal state is left to the caller.

use super::board::{BOARD_SIZE, BoardError};
use super::rules::outcome;
use super::selector::next_move;
use super::{Board, GameState, Position, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// Coordinates outside the board.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),

    /// The opponent was asked to move with no free cell left.
    #[display("No free cell left for the opponent")]
    BoardFull,
}

/// Tic-tac-toe game on a 3x3 board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    size: usize,
    rng: StdRng,
    seed: u64,
}

impl Game {
    /// Creates a new game with a randomly seeded tie-break source.
    #[instrument]
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// Creates a new game whose opponent breaks ties deterministically.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "Creating game");
        Self {
            board: Board::new(BOARD_SIZE),
            size: BOARD_SIZE,
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the seed of the tie-break source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Discards the current board and starts over with an empty one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.size);
        info!("Board reset");
    }

    /// Marks a cell for the human player.
    ///
    /// Returns `Ok(false)` and leaves the board untouched if the cell is
    /// already occupied.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Board` if the coordinates are outside the board.
    #[instrument(skip(self))]
    pub fn apply_player_move(&mut self, row: usize, column: usize) -> Result<bool, GameError> {
        if !self.board.get(row, column)?.is_empty() {
            debug!(row, column, "Rejected move on occupied cell");
            return Ok(false);
        }
        self.board.set(row, column, Value::Player)?;
        debug!(row, column, state = %self.state(), "Player moved");
        Ok(true)
    }

    /// Lets the opponent choose a free cell and mark it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::BoardFull` if there is no free cell; callers are
    /// expected to check [`Game::state`] first.
    #[instrument(skip(self))]
    pub fn apply_opponent_move(&mut self) -> Result<Position, GameError> {
        let position = next_move(&self.board, &mut self.rng).ok_or(GameError::BoardFull)?;
        self.board
            .set(position.row, position.column, Value::Opponent)?;
        debug!(%position, state = %self.state(), "Opponent moved");
        Ok(position)
    }

    /// Derives the current outcome from the board.
    pub fn state(&self) -> GameState {
        outcome(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
