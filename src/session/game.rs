//! The session state machine.
//!
//! ```text
//! Active --(all-exact guess)--> Won
//! Active --(cap reached | forfeit)--> Lost
//! ```
//!
//! `GameSession` is an explicit, exclusively-owned value. Every transition
//! is a method taking `&mut self`; rejected actions leave it untouched.

use im::Vector;

use crate::core::{AttemptMode, Code, Difficulty, GameConfig, GuessDraft, RandomSource};
use crate::feedback::{Feedback, GuessEvaluator};
use crate::generator::CodeGenerator;

use super::error::Rejection;
use super::state::{Attempt, Status};

/// State of one game: configuration, secret, history and status.
///
/// History uses `im::Vector` so snapshots and clones are O(1).
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    secret: Code,
    attempts: Vector<Attempt>,
    status: Status,
}

impl GameSession {
    /// Start a session around an existing secret.
    ///
    /// # Panics
    ///
    /// Panics if the secret length differs from the configured length.
    /// Debug builds also check the secret against the difficulty's
    /// alphabet and repetition policy.
    #[must_use]
    pub fn new(config: GameConfig, secret: Code) -> Self {
        assert_eq!(
            secret.len(),
            config.code_length(),
            "Secret length must equal configured code length"
        );
        debug_assert!(
            secret
                .symbols()
                .iter()
                .all(|&symbol| config.difficulty.alphabet().contains(symbol)),
            "Secret uses symbols outside the {} alphabet",
            config.difficulty
        );
        debug_assert!(
            config.difficulty != Difficulty::Easy || !secret.has_repeat(),
            "Easy secrets must not repeat a symbol"
        );

        Self {
            config,
            secret,
            attempts: Vector::new(),
            status: Status::Active,
        }
    }

    /// Generate a fresh secret for `config` and start an active session.
    pub fn new_game<R: RandomSource + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let secret = CodeGenerator::generate(config.code_length(), config.difficulty, rng);
        tracing::debug!(
            code_length = config.code_length(),
            difficulty = %config.difficulty,
            attempt_mode = %config.attempt_mode,
            "new game"
        );
        Self::new(config, secret)
    }

    // === Transitions ===

    /// Submit a complete guess.
    ///
    /// On acceptance exactly one attempt is appended and the status is
    /// re-evaluated. The returned attempt is the one just recorded.
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Attempt, Rejection> {
        if self.status.is_terminal() {
            return Err(rejected(Rejection::SessionOver(self.status)));
        }
        if guess.len() != self.secret.len() {
            return Err(rejected(Rejection::WrongLength {
                expected: self.secret.len(),
                actual: guess.len(),
            }));
        }

        let feedback = GuessEvaluator::evaluate(&self.secret, guess);
        let attempt = Attempt::new(self.attempts.len(), guess.clone(), feedback);
        self.attempts.push_back(attempt.clone());

        let counts = attempt.feedback.counts();
        tracing::debug!(
            attempt = attempt.index,
            exact = counts.exact,
            present = counts.present,
            "attempt recorded"
        );

        if attempt.is_solved() {
            self.status = Status::Won;
            tracing::info!(attempts = self.attempts.len(), "code cracked");
        } else if self.is_exhausted() {
            self.status = Status::Lost;
            tracing::info!(attempts = self.attempts.len(), "attempts exhausted");
        }

        Ok(attempt)
    }

    /// Submit a guess that may still have empty slots.
    pub fn submit_draft(&mut self, draft: &GuessDraft) -> Result<Attempt, Rejection> {
        if self.status.is_terminal() {
            return Err(rejected(Rejection::SessionOver(self.status)));
        }
        if draft.len() != self.secret.len() {
            return Err(rejected(Rejection::WrongLength {
                expected: self.secret.len(),
                actual: draft.len(),
            }));
        }
        match draft.to_code() {
            Some(guess) => self.submit_guess(&guess),
            None => Err(rejected(Rejection::Incomplete {
                missing: draft.missing(),
            })),
        }
    }

    /// Give up. Only extreme sessions that reached the forfeit threshold
    /// may do so; no attempt is consumed.
    pub fn forfeit(&mut self) -> Result<(), Rejection> {
        self.check_forfeit().map_err(rejected)?;
        self.status = Status::Lost;
        tracing::info!(attempts = self.attempts.len(), "session forfeited");
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Full attempt history, oldest first.
    #[must_use]
    pub fn attempts(&self) -> &Vector<Attempt> {
        &self.attempts
    }

    /// Attempts a consumer should display.
    ///
    /// Infinite mode shows only the most recent `display_window`
    /// attempts; limited mode shows everything.
    pub fn visible_attempts(&self) -> impl Iterator<Item = &Attempt> + '_ {
        let skip = match self.config.attempt_mode {
            AttemptMode::Limited => 0,
            AttemptMode::Infinite => self
                .attempts
                .len()
                .saturating_sub(self.config.rules.display_window),
        };
        self.attempts.iter().skip(skip)
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.attempts.len()
    }

    /// Attempts left before the cap. `None` in infinite mode.
    #[must_use]
    pub fn attempts_remaining(&self) -> Option<usize> {
        self.config
            .attempt_limit()
            .map(|limit| limit.saturating_sub(self.attempts.len()))
    }

    /// Feedback of the most recent attempt.
    #[must_use]
    pub fn latest_feedback(&self) -> Option<&Feedback> {
        self.attempts.back().map(|attempt| &attempt.feedback)
    }

    /// The secret, revealed only once the session is lost.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        (self.status == Status::Lost).then_some(&self.secret)
    }

    /// Would `forfeit()` currently succeed?
    #[must_use]
    pub fn can_forfeit(&self) -> bool {
        self.check_forfeit().is_ok()
    }

    // === Internals ===

    fn is_exhausted(&self) -> bool {
        self.config
            .attempt_limit()
            .is_some_and(|limit| self.attempts.len() >= limit)
    }

    fn check_forfeit(&self) -> Result<(), Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::SessionOver(self.status));
        }
        if self.config.difficulty != Difficulty::Extreme {
            return Err(Rejection::ForfeitUnavailable(self.config.difficulty));
        }
        let threshold = self.config.rules.forfeit_threshold;
        if self.attempts.len() < threshold {
            return Err(Rejection::ForfeitTooEarly {
                used: self.attempts.len(),
                threshold,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> &Code {
        &self.secret
    }
}

fn rejected(rejection: Rejection) -> Rejection {
    tracing::debug!(%rejection, "action rejected");
    rejection
}
