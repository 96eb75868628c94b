//! Number-guessing game logic.
//!
//! A [`SessionRegistry`] owns any number of [`GameSession`]s keyed by an
//! opaque id. Each session is a small state machine:
//!
//! ```text
//! NotStarted ──start──▶ Active ──guess──▶ Won | Lost
//!      ▲                   │
//!      └──── start (any phase, discards progress)
//! ```
//!
//! Targets come from an injectable [`TargetSource`], so games can be made
//! fully deterministic.
//!
//! # Example
//!
//! ```
//! use numguess::{Difficulty, FixedTargets, GuessOutcome, Hint, SessionRegistry};
//!
//! let mut registry = SessionRegistry::with_target_source(FixedTargets::always(50));
//! registry.start_session("alice", Difficulty::Easy);
//!
//! let outcome = registry.submit_guess("alice", 70u32).unwrap();
//! assert!(matches!(outcome, GuessOutcome::Continue { hint: Hint::Lower, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chat;
mod difficulty;
mod error;
mod input;
mod registry;
mod session;
mod target;

pub use chat::{ChatAction, ChatReply, HELP_TEXT, UNRECOGNIZED_TEXT, respond};
pub use difficulty::Difficulty;
pub use error::GameError;
pub use input::{GuessInput, parse_leading_integer};
pub use registry::SessionRegistry;
pub use session::{
    GameSession, GuessOutcome, Hint, Phase, SessionId, StartOutcome, StatusSnapshot, TargetReveal,
};
pub use target::{FixedTargets, RandomTargets, TARGET_MAX, TARGET_MIN, TARGET_RANGE, TargetSource};
