//! Read-only view of a session for consumers.

use serde::{Deserialize, Serialize};

use crate::core::{Code, GameConfig, GuessDraft};

use super::game::GameSession;
use super::state::{Attempt, Status};

/// Everything a rendering layer needs, detached from the live session.
///
/// The secret is present only when the session is lost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: GameConfig,
    pub status: Status,
    /// Attempts to display, oldest first.
    pub attempts: Vec<Attempt>,
    pub attempts_used: usize,
    /// `None` in infinite mode.
    pub attempts_remaining: Option<usize>,
    pub revealed_secret: Option<Code>,
    pub can_forfeit: bool,
    pub current_guess: GuessDraft,
}

impl SessionSnapshot {
    /// Capture `session` together with the guess being typed.
    #[must_use]
    pub fn capture(session: &GameSession, current_guess: &GuessDraft) -> Self {
        Self {
            config: *session.config(),
            status: session.status(),
            attempts: session.visible_attempts().cloned().collect(),
            attempts_used: session.attempts_used(),
            attempts_remaining: session.attempts_remaining(),
            revealed_secret: session.revealed_secret().cloned(),
            can_forfeit: session.can_forfeit(),
            current_guess: current_guess.clone(),
        }
    }
}

impl From<&GameSession> for SessionSnapshot {
    fn from(session: &GameSession) -> Self {
        Self::capture(session, &GuessDraft::new(session.config().code_length()))
    }
}
