//! Interactive play loop.
//!
//! Drives a [`Game`] through its public contract only: read a move, apply it,
//! let the opponent answer while the game is still on, and offer a rematch
//! once it ends. The first mover alternates between games.

use crate::render::{Glyphs, parse_move, render_board};
use anyhow::Result;
use std::io::{BufRead, Write};
use tick_tack_toe::{Game, GameState};
use tracing::{debug, info, instrument, warn};

/// Results of the games played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("Wins: {}, Losses: {}, Draws: {}", wins, losses, draws)]
pub struct Tally {
    /// Games won by the human player.
    pub wins: u32,
    /// Games won by the opponent.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished game.
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::PlayerWin => self.wins += 1,
            GameState::PlayerLoss => self.losses += 1,
            GameState::Draw => self.draws += 1,
            GameState::Playing => {}
        }
    }
}

/// What the loop should do after handling one line of input.
enum Step {
    Continue,
    Finished,
}

/// A sequence of games against the opponent.
pub struct Session {
    game: Game,
    glyphs: Glyphs,
    opponent_starts: bool,
    tally: Tally,
}

impl Session {
    /// Creates a session; `opponent_starts` decides the opening game.
    pub fn new(game: Game, glyphs: Glyphs, opponent_starts: bool) -> Self {
        Self {
            game,
            glyphs,
            opponent_starts,
            tally: Tally::default(),
        }
    }

    /// Plays until the user declines a rematch or input ends.
    #[instrument(skip_all, fields(seed = self.game.seed()))]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<Tally> {
        info!(opponent_starts = self.opponent_starts, "Session started");
        self.open_game(&mut output)?;

        loop {
            write!(output, "Your move (1-9 or row,column): ")?;
            output.flush()?;

            let Some(line) = read_line(&mut input)? else {
                writeln!(output)?;
                break;
            };

            match self.handle_move(&line, &mut input, &mut output)? {
                Step::Continue => {}
                Step::Finished => break,
            }
        }

        writeln!(output, "{}", self.tally)?;
        info!(tally = %self.tally, "Session finished");
        Ok(self.tally)
    }

    fn handle_move<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        output: &mut W,
    ) -> Result<Step> {
        let Some(position) = parse_move(line, self.game.size()) else {
            writeln!(output, "Enter a cell number or row,column.")?;
            return Ok(Step::Continue);
        };

        if !self.game.apply_player_move(position.row, position.column)? {
            writeln!(output, "That cell is already taken.")?;
            return Ok(Step::Continue);
        }
        self.show_board(output)?;

        if self.game.state() == GameState::Playing {
            self.opponent_turn(output)?;
        }

        if self.game.state().is_terminal() {
            return self.game_over(input, output);
        }
        Ok(Step::Continue)
    }

    fn open_game<W: Write>(&mut self, output: &mut W) -> Result<()> {
        if self.opponent_starts {
            writeln!(output, "The opponent moves first.")?;
            self.opponent_turn(output)?;
        } else {
            writeln!(output, "You move first.")?;
            self.show_board(output)?;
        }
        Ok(())
    }

    fn opponent_turn<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let position = self.game.apply_opponent_move()?;
        debug!(%position, "Opponent answered");
        writeln!(
            output,
            "Opponent plays row {}, column {}.",
            position.row + 1,
            position.column + 1
        )?;
        self.show_board(output)
    }

    fn game_over<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Step> {
        let state = self.game.state();
        self.tally.record(state);
        info!(%state, "Game over");
        writeln!(output, "{}", state)?;

        loop {
            write!(output, "Do you want to play again? [y/n] ")?;
            output.flush()?;
            let Some(answer) = read_line(input)? else {
                writeln!(output)?;
                return Ok(Step::Finished);
            };
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => break,
                "n" | "no" | "q" | "quit" => return Ok(Step::Finished),
                other => warn!(answer = other, "Unrecognized rematch answer"),
            }
        }

        self.game.reset();
        self.opponent_starts = !self.opponent_starts;
        self.open_game(output)?;
        Ok(Step::Continue)
    }

    fn show_board<W: Write>(&self, output: &mut W) -> Result<()> {
        writeln!(output, "{}\n", render_board(self.game.board(), &self.glyphs))?;
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
