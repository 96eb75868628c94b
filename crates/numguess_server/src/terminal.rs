//! Line-based terminal front-end.
//!
//! Reads one command per line and routes it through the chat adapter, so
//! the terminal plays exactly the same game as the HTTP API. Two commands
//! are handled locally: `toggle` switches the difficulty for the next game,
//! and `quit`/`exit` leaves.

use numguess::{ChatAction, Difficulty, GuessOutcome, SessionRegistry, respond};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Session id used for the single local game.
pub const LOCAL_SESSION: &str = "local";

const BANNER: &str = "\
Guess The Number
================
You have to guess a number picked at random between 1 and 100 in a
limited number of attempts. After each guess you are told whether the
target is higher or lower.

  <number>   make a guess
  start      begin a new game
  toggle     switch between Easy (10 attempts) and Hard (7 attempts)
  status     show the current game
  help       show instructions
  quit       leave";

/// Totals reported when the player leaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
}

/// Interactive game over a reader and writer.
#[derive(Debug)]
pub struct TerminalGame {
    registry: SessionRegistry,
    difficulty: Difficulty,
    summary: PlaySummary,
}

impl TerminalGame {
    /// Creates a terminal game using `registry` for its session.
    pub fn new(registry: SessionRegistry, difficulty: Difficulty) -> Self {
        Self {
            registry,
            difficulty,
            summary: PlaySummary::default(),
        }
    }

    /// Difficulty the next game will use.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Plays until `quit`, `exit`, or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or writing.
    #[instrument(skip_all, fields(difficulty = %self.difficulty))]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> std::io::Result<PlaySummary> {
        writeln!(output, "{}\n", BANNER)?;
        let opening = self.registry.start_session(LOCAL_SESSION, self.difficulty);
        writeln!(output, "[{}] {}", self.difficulty, opening.message())?;
        info!("Terminal game started");

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            if command.is_empty() {
                continue;
            }

            match command.to_lowercase().as_str() {
                "quit" | "exit" => break,
                "toggle" | "difficulty" => {
                    self.difficulty = self.difficulty.toggled();
                    debug!(difficulty = %self.difficulty, "Difficulty toggled");
                    writeln!(
                        output,
                        "Difficulty set to {} ({} attempts). Type 'start' to play it.",
                        self.difficulty,
                        self.difficulty.max_attempts()
                    )?;
                }
                _ => {
                    let reply = respond(&mut self.registry, LOCAL_SESSION, command, self.difficulty);
                    self.record(&reply.action);
                    writeln!(output, "{}", reply.response)?;
                    if let ChatAction::Guessed(Ok(outcome)) = &reply.action {
                        if outcome.is_terminal() {
                            writeln!(output, "Type 'start' to play again.")?;
                        }
                    }
                }
            }
        }

        writeln!(
            output,
            "Thanks for playing! Won {}, lost {}.",
            self.summary.wins, self.summary.losses
        )?;
        info!(wins = self.summary.wins, losses = self.summary.losses, "Terminal game finished");
        Ok(self.summary)
    }

    fn record(&mut self, action: &ChatAction) {
        match action {
            ChatAction::Guessed(Ok(GuessOutcome::Won { .. })) => self.summary.wins += 1,
            ChatAction::Guessed(Ok(GuessOutcome::Lost { .. })) => self.summary.losses += 1,
            _ => {}
        }
    }
}
