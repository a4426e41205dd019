//! Tic-tac-toe rules and heuristic opponent.
//!
//! A human player (`X`, encoded `+1`) plays against an automated opponent
//! (`O`, encoded `-1`) on a 3x3 board. Cell values are summed along each
//! line: `±3` decides the game, and smaller sums drive the opponent's move
//! heuristic.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid with positional access
//! - **Rules**: outcome derivation (win, loss, draw)
//! - **Scoring**: per-line heuristic weights
//! - **Selector**: picks among the top-scoring free cells
//! - **Game**: state machine tying the above together
//!
//! # Example
//!
//! ```
//! use tick_tack_toe::{Game, GameState};
//!
//! let mut game = Game::with_seed(7);
//! assert!(game.apply_player_move(0, 0).unwrap());
//! if game.state() == GameState::Playing {
//!     let reply = game.apply_opponent_move().unwrap();
//!     assert_ne!((reply.row, reply.column), (0, 0));
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod line;
mod types;

pub mod rules;
pub mod scoring;
pub mod selector;

pub use board::{BOARD_SIZE, Board, BoardError};
pub use game::{Game, GameError};
pub use line::{Diagonal, Line};
pub use scoring::{line_is_empty, weight_for_line};
pub use selector::{TieBreak, candidate_score, next_move, tie_break_set};
pub use types::{GameState, Position, Value, Weight};
