//! Session registry: the map from session id to game.

use crate::difficulty::Difficulty;
use crate::error::GameError;
use crate::input::GuessInput;
use crate::session::{GameSession, GuessOutcome, SessionId, StartOutcome, StatusSnapshot};
use crate::target::{RandomTargets, TargetSource};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, instrument};

/// Owns every live game session and the source their targets are drawn from.
///
/// The registry is a plain owned value. Callers that share it between
/// requests wrap it in whatever synchronization they need.
pub struct SessionRegistry {
    sessions: HashMap<SessionId, GameSession>,
    targets: Box<dyn TargetSource>,
}

impl SessionRegistry {
    /// Creates an empty registry drawing targets from OS-seeded randomness.
    #[instrument]
    pub fn new() -> Self {
        Self::with_target_source(RandomTargets::from_os_rng())
    }

    /// Creates an empty registry with reproducible targets.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_target_source(RandomTargets::seeded(seed))
    }

    /// Creates an empty registry drawing targets from `source`.
    pub fn with_target_source(source: impl TargetSource + 'static) -> Self {
        info!("Creating session registry");
        Self {
            sessions: HashMap::new(),
            targets: Box::new(source),
        }
    }

    /// Creates a fresh, not yet started session, replacing any session
    /// already registered under `session_id`.
    #[instrument(skip(self, session_id), fields(session_id = %session_id.as_ref()))]
    pub fn create(
        &mut self,
        session_id: impl AsRef<str>,
        difficulty: Difficulty,
    ) -> &mut GameSession {
        let session_id = session_id.as_ref().to_string();
        let session = GameSession::new(session_id.clone(), difficulty, self.targets.as_mut());
        if self.sessions.contains_key(&session_id) {
            debug!("Overwriting existing session");
        }
        self.sessions.entry(session_id).insert_entry(session).into_mut()
    }

    /// Looks up a session.
    pub fn get(&self, session_id: &str) -> Option<&GameSession> {
        let session = self.sessions.get(session_id);
        if session.is_none() {
            debug!(session_id, "Session not found");
        }
        session
    }

    /// Looks up a session for mutation.
    pub fn get_mut(&mut self, session_id: &str) -> Option<&mut GameSession> {
        self.sessions.get_mut(session_id)
    }

    /// Removes a session, returning whether one was present.
    #[instrument(skip(self))]
    pub fn delete(&mut self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            info!("Session ended");
        } else {
            debug!("No session to end");
        }
        removed
    }

    /// Status of every session, in no particular order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Vec<StatusSnapshot> {
        let snapshots: Vec<_> = self.sessions.values().map(GameSession::status).collect();
        debug!(count = snapshots.len(), "Listed sessions");
        snapshots
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are registered.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Whether a session exists under `session_id`.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Creates a session under `session_id` and starts it immediately.
    ///
    /// Any existing session with that id, finished or not, is replaced.
    #[instrument(skip(self, session_id), fields(session_id = %session_id.as_ref()))]
    pub fn start_session(
        &mut self,
        session_id: impl AsRef<str>,
        difficulty: Difficulty,
    ) -> StartOutcome {
        let session_id = session_id.as_ref().to_string();
        let mut session = GameSession::new(session_id.clone(), difficulty, self.targets.as_mut());
        let outcome = session.start(self.targets.as_mut());
        self.sessions.insert(session_id, session);
        outcome
    }

    /// Restarts an existing session in place, keeping its difficulty.
    ///
    /// # Errors
    ///
    /// [`GameError::SessionNotFound`] when no session has that id.
    #[instrument(skip(self))]
    pub fn restart_session(&mut self, session_id: &str) -> Result<StartOutcome, GameError> {
        let session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| GameError::not_found(session_id))?;
        Ok(session.start(self.targets.as_mut()))
    }

    /// Submits a guess to a session.
    ///
    /// # Errors
    ///
    /// [`GameError::SessionNotFound`] for an unknown id, otherwise whatever
    /// [`GameSession::guess`] rejects.
    #[instrument(skip(self, input))]
    pub fn submit_guess(
        &mut self,
        session_id: &str,
        input: impl Into<GuessInput>,
    ) -> Result<GuessOutcome, GameError> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| GameError::not_found(session_id))?
            .guess(&input.into())
    }

    /// Status of one session.
    ///
    /// # Errors
    ///
    /// [`GameError::SessionNotFound`] for an unknown id.
    pub fn get_status(&self, session_id: &str) -> Result<StatusSnapshot, GameError> {
        self.get(session_id)
            .map(GameSession::status)
            .ok_or_else(|| GameError::not_found(session_id))
    }

    /// Ends a session. Same as [`SessionRegistry::delete`].
    pub fn end_session(&mut self, session_id: &str) -> bool {
        self.delete(session_id)
    }

    /// Same as [`SessionRegistry::list`].
    pub fn list_sessions(&self) -> Vec<StatusSnapshot> {
        self.list()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}
