//! Rejected session actions.

use thiserror::Error;

use crate::core::Difficulty;

use super::state::Status;

/// Why a submission or forfeit was refused.
///
/// A rejection never changes session state. Consumers that want the
/// silent no-op behaviour simply discard it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The guess still has empty slots.
    #[error("guess is incomplete: {missing} empty slot(s)")]
    Incomplete { missing: usize },

    /// The guess does not have one symbol per secret position.
    #[error("guess has {actual} symbols, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    /// The session already ended.
    #[error("session is over ({0})")]
    SessionOver(Status),

    /// Forfeit is only offered on extreme difficulty.
    #[error("forfeit is not available on {0} difficulty")]
    ForfeitUnavailable(Difficulty),

    /// Not enough attempts made yet to forfeit.
    #[error("forfeit requires {threshold} attempts, only {used} made")]
    ForfeitTooEarly { used: usize, threshold: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Rejection::Incomplete { missing: 2 }.to_string(),
            "guess is incomplete: 2 empty slot(s)"
        );
        assert_eq!(
            Rejection::SessionOver(Status::Won).to_string(),
            "session is over (won)"
        );
        assert_eq!(
            Rejection::ForfeitUnavailable(Difficulty::Hard).to_string(),
            "forfeit is not available on hard difficulty"
        );
    }
}
