//! JSON request and response bodies.
//!
//! Field names are camelCase on the wire.

use numguess::{
    ChatAction, ChatReply, Difficulty, GameError, GuessInput, GuessOutcome, Hint, StartOutcome,
    StatusSnapshot,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/game/start`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartRequest {
    /// Session to (re)create.
    pub session_id: Option<String>,
    /// Attempt budget; the server default applies when absent.
    pub difficulty: Option<Difficulty>,
}

/// Body of `POST /api/game/guess`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    /// Session to guess in.
    pub session_id: Option<String>,
    /// The guess, as a number or a string.
    pub guess: Option<GuessInput>,
}

/// Body of `POST /api/chatbot`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Conversation session.
    pub session_id: Option<String>,
    /// Free-text message.
    pub message: Option<String>,
    /// Difficulty used if the message starts a game.
    pub difficulty: Option<Difficulty>,
}

/// Response to a successful start.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    /// Always true.
    pub success: bool,
    /// Session that was started.
    pub session_id: String,
    /// Budget and greeting.
    #[serde(flatten)]
    pub outcome: StartOutcome,
}

/// Guess result fields, populated according to the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessBody {
    /// Set on a terminal outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_over: Option<bool>,
    /// Player-facing message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Direction hint for a wrong guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<Hint>,
    /// Guesses spent, on a terminal outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts_used: Option<u32>,
    /// Guesses left, on a non-terminal outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts_remaining: Option<u32>,
    /// The number just guessed, on a non-terminal outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_guess: Option<u32>,
    /// The secret, once revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_number: Option<u32>,
    /// Why the guess was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GuessBody {
    /// Body for a rejected guess.
    pub fn from_error(error: &GameError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    /// Body for either result of a guess.
    pub fn from_result(result: &Result<GuessOutcome, GameError>) -> Self {
        match result {
            Ok(outcome) => Self::from(outcome),
            Err(e) => Self::from_error(e),
        }
    }
}

impl From<&GuessOutcome> for GuessBody {
    fn from(outcome: &GuessOutcome) -> Self {
        let message = Some(outcome.message());
        match *outcome {
            GuessOutcome::Won {
                target_number,
                attempts_used,
            }
            | GuessOutcome::Lost {
                target_number,
                attempts_used,
            } => Self {
                game_over: Some(true),
                message,
                attempts_used: Some(attempts_used),
                target_number: Some(target_number),
                ..Self::default()
            },
            GuessOutcome::Continue {
                hint,
                last_guess,
                attempts_remaining,
            } => Self {
                message,
                hint: Some(hint),
                attempts_remaining: Some(attempts_remaining),
                last_guess: Some(last_guess),
                ..Self::default()
            },
        }
    }
}

/// Response to `POST /api/game/guess`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    /// False when the guess was rejected.
    pub success: bool,
    /// Session guessed in.
    pub session_id: String,
    /// Outcome fields.
    #[serde(flatten)]
    pub body: GuessBody,
}

/// Response to `GET /api/game/status/{sessionId}`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Always true.
    pub success: bool,
    /// Session fields.
    #[serde(flatten)]
    pub status: StatusSnapshot,
}

/// Response to `DELETE /api/game/{sessionId}`.
#[derive(Debug, Clone, Serialize)]
pub struct EndResponse {
    /// Whether a session was removed.
    pub success: bool,
    /// Human-readable result.
    pub message: String,
}

/// Response to `GET /api/game/sessions`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsResponse {
    /// Always true.
    pub success: bool,
    /// Number of sessions listed.
    pub active_sessions: usize,
    /// One snapshot per session.
    pub sessions: Vec<StatusSnapshot>,
}

/// Response to `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// `"OK"` while the server runs.
    pub status: &'static str,
    /// Human-readable status.
    pub message: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// Response to `POST /api/chatbot`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// False when a routed guess was rejected.
    pub success: bool,
    /// Text to show the player.
    pub response: String,
    /// Session id plus whatever the routed operation returned.
    #[serde(flatten)]
    pub details: ChatDetails,
}

/// Operation-specific part of a chat response.
///
/// Every variant carries `sessionId` exactly once.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum ChatDetails {
    /// A game was started.
    Started {
        /// Session id.
        session_id: String,
        /// Budget and greeting.
        #[serde(flatten)]
        outcome: StartOutcome,
    },
    /// A guess was submitted.
    Guessed {
        /// Session id.
        session_id: String,
        /// Outcome fields.
        #[serde(flatten)]
        body: GuessBody,
    },
    /// Status was requested; the snapshot carries the session id.
    Status(StatusSnapshot),
    /// Help or fallback text only.
    Plain {
        /// Session id.
        session_id: String,
    },
}

impl ChatResponse {
    /// Builds the response for a routed chat message.
    pub fn new(session_id: String, reply: ChatReply) -> Self {
        let success = reply.is_success();
        let details = match reply.action {
            ChatAction::Started(outcome) => ChatDetails::Started {
                session_id,
                outcome,
            },
            ChatAction::Guessed(result) => ChatDetails::Guessed {
                session_id,
                body: GuessBody::from_result(&result),
            },
            ChatAction::Status(status) => ChatDetails::Status(status),
            ChatAction::Help | ChatAction::Unrecognized => ChatDetails::Plain { session_id },
        };
        Self {
            success,
            response: reply.response,
            details,
        }
    }
}
