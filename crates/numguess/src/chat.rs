//! Conversational front-end: routes free text to registry operations.
//!
//! Routing is keyword matching in a fixed order: a number is a guess, then
//! `start`/`new game`, then `status`/`info`, then `help`, then a fallback.
//! A message for an unknown session always starts a game first.

use crate::difficulty::Difficulty;
use crate::error::GameError;
use crate::input::{GuessInput, parse_leading_integer};
use crate::registry::SessionRegistry;
use crate::session::{GuessOutcome, StartOutcome, StatusSnapshot};
use tracing::{debug, instrument};

/// Instructions returned for `help`.
pub const HELP_TEXT: &str = "I'm a number guessing game! Guess a number between 1-100. \
I'll tell you if it's higher or lower. Type 'start' for a new game or just send me a number to guess!";

/// Reply for text that matches no command.
pub const UNRECOGNIZED_TEXT: &str = "I didn't understand that. Please send me a number to guess, \
or type 'start' for a new game, 'help' for instructions, or 'status' for game info.";

/// What a chat message was routed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatAction {
    /// A new game was started, implicitly or on request.
    Started(StartOutcome),
    /// The message was a number and was submitted as a guess.
    Guessed(Result<GuessOutcome, GameError>),
    /// The session status was requested.
    Status(StatusSnapshot),
    /// Help text was requested.
    Help,
    /// Nothing matched.
    Unrecognized,
}

/// A routed chat message with the text to show the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Text shown to the player.
    pub response: String,
    /// The operation the message triggered.
    pub action: ChatAction,
}

impl ChatReply {
    /// Whether the message was handled without a game error.
    pub fn is_success(&self) -> bool {
        !matches!(self.action, ChatAction::Guessed(Err(_)))
    }
}

/// Routes one chat message for `session_id`.
///
/// `difficulty` applies only when the message starts a new game.
#[instrument(skip(registry))]
pub fn respond(
    registry: &mut SessionRegistry,
    session_id: &str,
    message: &str,
    difficulty: Difficulty,
) -> ChatReply {
    let Ok(status) = registry.get_status(session_id) else {
        debug!("Unknown session, starting implicitly");
        return started(registry.start_session(session_id, difficulty));
    };

    if let Some(number) = parse_leading_integer(message) {
        debug!(number, "Routing message as guess");
        let result = registry.submit_guess(session_id, GuessInput::Number(number));
        let response = match &result {
            Ok(outcome) => outcome.message(),
            Err(e) => e.to_string(),
        };
        return ChatReply {
            response,
            action: ChatAction::Guessed(result),
        };
    }

    let lowered = message.to_lowercase();

    if lowered.contains("start") || lowered.contains("new game") {
        debug!("Routing message as new game");
        return started(registry.start_session(session_id, difficulty));
    }

    if lowered.contains("status") || lowered.contains("info") {
        debug!("Routing message as status");
        return ChatReply {
            response: describe_status(&status),
            action: ChatAction::Status(status),
        };
    }

    if lowered.contains("help") {
        return ChatReply {
            response: HELP_TEXT.to_string(),
            action: ChatAction::Help,
        };
    }

    debug!("Message not understood");
    ChatReply {
        response: UNRECOGNIZED_TEXT.to_string(),
        action: ChatAction::Unrecognized,
    }
}

fn started(outcome: StartOutcome) -> ChatReply {
    ChatReply {
        response: outcome.message().clone(),
        action: ChatAction::Started(outcome),
    }
}

fn describe_status(status: &StatusSnapshot) -> String {
    let label = match (*status.started(), *status.over(), *status.won()) {
        (false, _, _) => "Not Started",
        (true, false, _) => "Active",
        (true, true, true) => "Won",
        (true, true, false) => "Lost",
    };
    format!(
        "Game Status: {}, Attempts: {}/{}, Difficulty: {}",
        label,
        status.attempts_remaining(),
        status.max_attempts(),
        status.difficulty()
    )
}
