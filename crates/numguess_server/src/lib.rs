//! Number guessing game server.
//!
//! Adapters that put the [`numguess`] core in front of players:
//!
//! - **api**: JSON routes for starting, guessing, status, ending and a chat endpoint
//! - **config**: layered server configuration
//! - **terminal**: a line-based interactive front-end
//!
//! # Example
//!
//! ```no_run
//! use numguess::{Difficulty, SessionRegistry};
//! use numguess_server::{AppState, router};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let state = AppState::new(SessionRegistry::new(), Difficulty::Easy);
//! let app = router(state, true);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod api;
mod config;
mod terminal;

pub use api::{ApiError, AppState, router};
pub use config::{ConfigError, ServerConfig};
pub use terminal::{LOCAL_SESSION, PlaySummary, TerminalGame};
