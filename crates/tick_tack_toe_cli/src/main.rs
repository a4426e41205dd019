//! Tick Tack Toe - terminal front end
//!
//! Plays tic-tac-toe against the heuristic opponent on stdin/stdout.

#![warn(missing_docs)]

mod cli;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::CliConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use render::Glyphs;
use session::Session;
use std::io;
use std::sync::Arc;
use tick_tack_toe::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    }
    .with_overrides(cli.seed, cli.first);

    init_tracing(&config)?;
    info!(?config, "Starting Tick Tack Toe");

    let game = match config.seed() {
        Some(seed) => Game::with_seed(*seed),
        None => Game::new(),
    };
    let mut first_mover_rng = StdRng::seed_from_u64(game.seed());
    let opponent_starts = config.first_mover().opponent_starts(&mut first_mover_rng);

    let mut session = Session::new(game, Glyphs::from(&config), opponent_starts);
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;

    Ok(())
}

/// Installs the tracing subscriber; logs go to the configured file or stderr
/// so they never interleave with the board on stdout.
fn init_tracing(config: &CliConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match config.log_file() {
        Some(path) => {
            let log_file = std::fs::File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .try_init();
        }
    }
    Ok(())
}
