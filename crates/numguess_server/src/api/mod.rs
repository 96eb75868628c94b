//! JSON API over the session registry.

mod error;
mod handlers;
pub mod wire;

pub use error::ApiError;

use axum::Router;
use axum::routing::{delete, get, post};
use derive_getters::Getters;
use numguess::{Difficulty, SessionRegistry};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// State shared by every request: the registry and request defaults.
#[derive(Debug, Clone, Getters)]
pub struct AppState {
    #[getter(skip)]
    registry: Arc<Mutex<SessionRegistry>>,
    /// Difficulty used when a request does not name one.
    default_difficulty: Difficulty,
}

impl AppState {
    /// Wraps `registry` for sharing across requests.
    #[instrument(skip(registry))]
    pub fn new(registry: SessionRegistry, default_difficulty: Difficulty) -> Self {
        info!("Creating shared application state");
        Self {
            registry: Arc::new(Mutex::new(registry)),
            default_difficulty,
        }
    }

    /// Locks the registry, recovering from poisoning.
    pub fn registry(&self) -> MutexGuard<'_, SessionRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds the application router.
#[instrument(skip(state))]
pub fn router(state: AppState, cors: bool) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/game/start", post(handlers::start_game))
        .route("/api/game/guess", post(handlers::make_guess))
        .route("/api/game/status/{session_id}", get(handlers::game_status))
        .route("/api/game/sessions", get(handlers::list_sessions))
        .route("/api/game/{session_id}", delete(handlers::end_game))
        .route("/api/chatbot", post(handlers::chatbot))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .with_state(state);

    if cors {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
}
