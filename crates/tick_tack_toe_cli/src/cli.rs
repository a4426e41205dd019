//! Command-line interface for the tic-tac-toe terminal game.

use crate::config::FirstMover;
use clap::Parser;
use std::path::PathBuf;

/// Play tic-tac-toe against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "tick_tack_toe")]
#[command(about = "Play tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's tie-breaks and the first-mover draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Who moves first in the opening game
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,
}
