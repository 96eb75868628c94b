//! Game error types.

use derive_more::{Display, Error};

/// Recoverable failures reported by session and registry operations.
///
/// None of these leave a session in a changed state.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No session is registered under the id.
    #[display("Game session not found. Please start a new game.")]
    SessionNotFound {
        /// The id that was looked up.
        session_id: String,
    },

    /// A guess arrived before the session was started.
    #[display("Game not started. Please start the game first.")]
    SessionNotStarted,

    /// A guess arrived after the session was won or lost.
    #[display("Game is already over. Please start a new game.")]
    SessionAlreadyOver,

    /// The guess was not an integer between 1 and 100.
    #[display("Please provide a valid number between 1 and 100.")]
    InvalidGuess,
}

impl GameError {
    /// Builds a [`GameError::SessionNotFound`] for `session_id`.
    pub fn not_found(session_id: impl Into<String>) -> Self {
        GameError::SessionNotFound {
            session_id: session_id.into(),
        }
    }
}
