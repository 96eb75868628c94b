//! Per-session game state machine.
//!
//! A session moves through `NotStarted → Active → {Won, Lost}`. Guesses are
//! only accepted while `Active`; every rejected guess leaves the session
//! untouched.

use crate::difficulty::Difficulty;
use crate::error::GameError;
use crate::input::GuessInput;
use crate::target::{TARGET_MAX, TARGET_MIN, TargetSource};
use derive_getters::Getters;
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Created but `start` not yet called.
    NotStarted,
    /// Accepting guesses.
    Active,
    /// The target was guessed.
    Won,
    /// Attempts ran out.
    Lost,
}

impl Phase {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Direction of the target relative to an incorrect guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Hint {
    /// The target is below the guess.
    Lower,
    /// The target is above the guess.
    Higher,
}

/// Result of starting (or restarting) a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StartOutcome {
    /// Attempt budget for this game.
    max_attempts: u32,
    /// Attempts left, equal to `max_attempts` right after a start.
    attempts_remaining: u32,
    /// Difficulty the session was created with.
    difficulty: Difficulty,
    /// Greeting shown to the player.
    message: String,
}

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the target.
    Won {
        /// The secret number.
        target_number: u32,
        /// Guesses spent, including the winning one.
        attempts_used: u32,
    },
    /// The last attempt was spent without a match.
    Lost {
        /// The secret number.
        target_number: u32,
        /// Guesses spent, always the full budget.
        attempts_used: u32,
    },
    /// Wrong guess with attempts to spare.
    Continue {
        /// Where to look next.
        hint: Hint,
        /// The number just guessed.
        last_guess: u32,
        /// Attempts still available.
        attempts_remaining: u32,
    },
}

impl GuessOutcome {
    /// Whether this guess ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GuessOutcome::Continue { .. })
    }

    /// Player-facing description of the outcome.
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Won { target_number, .. } => format!(
                "🎉 Congratulations! You guessed the number {} correctly!",
                target_number
            ),
            GuessOutcome::Lost { target_number, .. } => format!(
                "😞 Game Over! The number was {}. Better luck next time!",
                target_number
            ),
            GuessOutcome::Continue {
                hint: Hint::Lower,
                last_guess,
                attempts_remaining,
            } => format!(
                "📉 The number is lower than {}. You have {} attempts remaining.",
                last_guess, attempts_remaining
            ),
            GuessOutcome::Continue {
                hint: Hint::Higher,
                last_guess,
                attempts_remaining,
            } => format!(
                "📈 The number is higher than {}. You have {} attempts remaining.",
                last_guess, attempts_remaining
            ),
        }
    }
}

/// The target as shown in a status report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetReveal {
    /// Game still in play; serialized as the string `"hidden"`.
    Hidden,
    /// Game over; serialized as the number itself.
    Revealed(u32),
}

impl Serialize for TargetReveal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TargetReveal::Hidden => serializer.serialize_str("hidden"),
            TargetReveal::Revealed(n) => serializer.serialize_u32(*n),
        }
    }
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    /// Session id.
    session_id: SessionId,
    /// `start` has been called.
    started: bool,
    /// The game is won or lost.
    over: bool,
    /// The game is won.
    won: bool,
    /// Attempts still available.
    attempts_remaining: u32,
    /// Attempt budget.
    max_attempts: u32,
    /// Difficulty.
    difficulty: Difficulty,
    /// Target, hidden until the game ends.
    target_number: TargetReveal,
}

/// One player's game.
#[derive(Debug, Clone)]
pub struct GameSession {
    session_id: SessionId,
    difficulty: Difficulty,
    target_number: u32,
    attempts_remaining: u32,
    phase: Phase,
}

impl GameSession {
    /// Creates a session in the `NotStarted` phase.
    #[instrument(skip(session_id, source))]
    pub fn new(
        session_id: impl Into<SessionId>,
        difficulty: Difficulty,
        source: &mut dyn TargetSource,
    ) -> Self {
        let session_id = session_id.into();
        info!(session_id = %session_id, "Creating new game session");
        Self {
            session_id,
            difficulty,
            target_number: draw_target(source),
            attempts_remaining: difficulty.max_attempts(),
            phase: Phase::NotStarted,
        }
    }

    /// Starts a fresh game, discarding any progress.
    ///
    /// Allowed from every phase. Draws a new target and restores the full
    /// attempt budget.
    #[instrument(skip(self, source), fields(session_id = %self.session_id))]
    pub fn start(&mut self, source: &mut dyn TargetSource) -> StartOutcome {
        if self.phase != Phase::NotStarted {
            debug!(phase = %self.phase, "Restarting session, previous game discarded");
        }

        self.target_number = draw_target(source);
        self.attempts_remaining = self.max_attempts();
        self.phase = Phase::Active;

        info!(
            difficulty = %self.difficulty,
            max_attempts = self.max_attempts(),
            "Game started"
        );

        StartOutcome {
            max_attempts: self.max_attempts(),
            attempts_remaining: self.attempts_remaining,
            difficulty: self.difficulty,
            message: format!(
                "Game started! I've picked a number between {} and {}. You have {} attempts.",
                TARGET_MIN,
                TARGET_MAX,
                self.max_attempts()
            ),
        }
    }

    /// Submits a guess.
    ///
    /// # Errors
    ///
    /// - [`GameError::SessionNotStarted`] before `start`
    /// - [`GameError::SessionAlreadyOver`] once won or lost
    /// - [`GameError::InvalidGuess`] when the input is not an integer in 1..=100
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn guess(&mut self, input: &GuessInput) -> Result<GuessOutcome, GameError> {
        match self.phase {
            Phase::NotStarted => {
                warn!("Guess before game start");
                return Err(GameError::SessionNotStarted);
            }
            Phase::Won | Phase::Lost => {
                warn!(phase = %self.phase, "Guess after game over");
                return Err(GameError::SessionAlreadyOver);
            }
            Phase::Active => {}
        }

        let guess = input.to_valid_guess().ok_or_else(|| {
            warn!("Rejected invalid guess");
            GameError::InvalidGuess
        })?;

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        let attempts_used = self.max_attempts() - self.attempts_remaining;

        // Win check precedes exhaustion: a hit on the last attempt is a win.
        let outcome = if guess == self.target_number {
            self.phase = Phase::Won;
            info!(guess, attempts_used, "Player won");
            GuessOutcome::Won {
                target_number: self.target_number,
                attempts_used,
            }
        } else if self.attempts_remaining == 0 {
            self.phase = Phase::Lost;
            info!(guess, target = self.target_number, "Player lost");
            GuessOutcome::Lost {
                target_number: self.target_number,
                attempts_used,
            }
        } else {
            let hint = if guess > self.target_number {
                Hint::Lower
            } else {
                Hint::Higher
            };
            debug!(guess, %hint, attempts_remaining = self.attempts_remaining, "Wrong guess");
            GuessOutcome::Continue {
                hint,
                last_guess: guess,
                attempts_remaining: self.attempts_remaining,
            }
        };

        Ok(outcome)
    }

    /// Snapshot of the session, revealing the target only after game over.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            session_id: self.session_id.clone(),
            started: self.is_started(),
            over: self.is_over(),
            won: self.is_won(),
            attempts_remaining: self.attempts_remaining,
            max_attempts: self.max_attempts(),
            difficulty: self.difficulty,
            target_number: match self.revealed_target() {
                Some(n) => TargetReveal::Revealed(n),
                None => TargetReveal::Hidden,
            },
        }
    }

    /// Session id.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Difficulty chosen at creation.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Attempt budget implied by the difficulty.
    pub fn max_attempts(&self) -> u32 {
        self.difficulty.max_attempts()
    }

    /// Attempts still available.
    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `start` has been called at least once.
    pub fn is_started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    /// The game is won or lost.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The game is won.
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    /// The target, available only once the game is over.
    pub fn revealed_target(&self) -> Option<u32> {
        self.is_over().then_some(self.target_number)
    }
}

fn draw_target(source: &mut dyn TargetSource) -> u32 {
    source.next_target().clamp(TARGET_MIN, TARGET_MAX)
}
