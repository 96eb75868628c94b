//! Route handlers.
//!
//! Each handler takes the registry lock once, performs one registry
//! operation, and releases the lock before responding.

use super::AppState;
use super::error::ApiError;
use super::wire::{
    ChatRequest, ChatResponse, EndResponse, GuessBody, GuessRequest, GuessResponse,
    HealthResponse, SessionsResponse, StartRequest, StartResponse, StatusResponse,
};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use numguess::{GameError, GuessInput};
use tracing::{Span, debug, info, instrument};

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Number Guessing Game API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /api/game/start`
#[instrument(skip(state, body), fields(session_id))]
pub async fn start_game(
    State(state): State<AppState>,
    body: Result<Json<StartRequest>, JsonRejection>,
) -> Result<Json<StartResponse>, ApiError> {
    let Json(req) = body?;
    let session_id = required(req.session_id, "Session ID is required")?;
    Span::current().record("session_id", session_id.as_str());
    let difficulty = req.difficulty.unwrap_or(*state.default_difficulty());

    let outcome = state.registry().start_session(&session_id, difficulty);
    info!(%difficulty, "Game started over HTTP");

    Ok(Json(StartResponse {
        success: true,
        session_id,
        outcome,
    }))
}

/// `POST /api/game/guess`
#[instrument(skip(state, body), fields(session_id))]
pub async fn make_guess(
    State(state): State<AppState>,
    body: Result<Json<GuessRequest>, JsonRejection>,
) -> Result<Json<GuessResponse>, ApiError> {
    let Json(req) = body?;
    let session_id = required(req.session_id, "Session ID is required")?;
    Span::current().record("session_id", session_id.as_str());
    let guess = match req.guess {
        Some(GuessInput::Text(text)) if text.trim().is_empty() => None,
        other => other,
    }
    .ok_or_else(|| ApiError::BadRequest("Guess is required".to_string()))?;

    let result = state.registry().submit_guess(&session_id, guess);

    match result {
        Err(e @ GameError::SessionNotFound { .. }) => Err(ApiError::NotFound(e.to_string())),
        result => Ok(Json(GuessResponse {
            success: result.is_ok(),
            session_id,
            body: GuessBody::from_result(&result),
        })),
    }
}

/// `GET /api/game/status/{session_id}`
#[instrument(skip(state))]
pub async fn game_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let status = state
        .registry()
        .get_status(&session_id)
        .map_err(|_| ApiError::NotFound("Game session not found".to_string()))?;

    Ok(Json(StatusResponse {
        success: true,
        status,
    }))
}

/// `DELETE /api/game/{session_id}`
#[instrument(skip(state))]
pub async fn end_game(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<EndResponse> {
    let deleted = state.registry().end_session(&session_id);
    let message = if deleted {
        "Game session ended"
    } else {
        "Game session not found"
    };

    Json(EndResponse {
        success: deleted,
        message: message.to_string(),
    })
}

/// `GET /api/game/sessions`
#[instrument(skip(state))]
pub async fn list_sessions(State(state): State<AppState>) -> Json<SessionsResponse> {
    let sessions = state.registry().list_sessions();
    debug!(count = sessions.len(), "Listing sessions");

    Json(SessionsResponse {
        success: true,
        active_sessions: sessions.len(),
        sessions,
    })
}

/// `POST /api/chatbot`
#[instrument(skip(state, body), fields(session_id))]
pub async fn chatbot(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = body?;
    const MISSING: &str = "Session ID and message are required";
    let session_id = required(req.session_id, MISSING)?;
    Span::current().record("session_id", session_id.as_str());
    let message = required(req.message, MISSING)?;
    let difficulty = req.difficulty.unwrap_or(*state.default_difficulty());

    let reply = numguess::respond(&mut state.registry(), &session_id, &message, difficulty);

    Ok(Json(ChatResponse::new(session_id, reply)))
}

/// Fallback for unknown routes.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Endpoint not found".to_string())
}

/// Fallback for known routes called with the wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

fn required(value: Option<String>, message: &'static str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(message.to_string()))
}
