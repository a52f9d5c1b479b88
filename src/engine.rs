//! `CodeBreaker`: the engine boundary consumed by user interfaces.
//!
//! Owns the random source, the active configuration, the guess being
//! typed and the current [`GameSession`]. Configuration changes always
//! start a new session with a freshly generated secret.
//!
//! ```
//! use crack_code::core::{AttemptMode, Difficulty, GameConfig};
//! use crack_code::engine::CodeBreaker;
//! use crack_code::session::Status;
//!
//! let config = GameConfig::new(4, Difficulty::Easy, AttemptMode::Limited);
//! let mut engine = CodeBreaker::with_seed(config, 7);
//!
//! // Incomplete guesses are rejected without consuming an attempt.
//! assert!(engine.submit_guess("12 4").is_err());
//! assert_eq!(engine.snapshot().attempts_used, 0);
//!
//! engine.submit_guess("1234").unwrap();
//! assert_eq!(engine.snapshot().attempts_used, 1);
//! assert_ne!(engine.status(), Status::Lost);
//! ```

use crate::core::{
    AttemptMode, Difficulty, GameConfig, GameRng, GuessDraft, RandomSource, SymbolError,
};
use crate::session::{Attempt, GameSession, Rejection, SessionSnapshot, Status};

/// Single-player engine over one session at a time.
#[derive(Clone, Debug)]
pub struct CodeBreaker<R = GameRng> {
    rng: R,
    session: GameSession,
    draft: GuessDraft,
}

impl CodeBreaker<GameRng> {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a reproducible engine.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }
}

impl Default for CodeBreaker<GameRng> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<R: RandomSource> CodeBreaker<R> {
    /// Create an engine drawing secrets from `rng`, and start a session.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let session = GameSession::new_game(config, &mut rng);
        Self {
            rng,
            session,
            draft: GuessDraft::new(config.code_length()),
        }
    }

    // === Configuration ===

    /// Apply new settings and start a new session.
    ///
    /// `code_length` is clamped into the supported range. Rule constants
    /// carry over from the previous configuration.
    pub fn configure(&mut self, code_length: usize, difficulty: Difficulty, attempt_mode: AttemptMode) {
        let config = self
            .config()
            .with_code_length(code_length)
            .with_difficulty(difficulty)
            .with_attempt_mode(attempt_mode);
        self.set_config(config);
    }

    /// Replace the whole configuration and start a new session.
    pub fn set_config(&mut self, config: GameConfig) {
        self.session = GameSession::new_game(config, &mut self.rng);
        self.draft = GuessDraft::new(config.code_length());
    }

    /// Start a new session with the current configuration.
    pub fn new_game(&mut self) {
        let config = *self.config();
        self.set_config(config);
    }

    // === Guess entry ===

    /// Type `c` into slot `index` of the current guess.
    ///
    /// Ignored once the session is over or if `index` is out of range.
    pub fn input(&mut self, index: usize, c: char) -> Result<(), SymbolError> {
        if self.session.status().is_terminal() {
            return Ok(());
        }
        self.draft.set(index, c)
    }

    /// Empty slot `index` of the current guess.
    ///
    /// Ignored once the session is over.
    pub fn erase(&mut self, index: usize) {
        if self.session.status().is_terminal() {
            return;
        }
        self.draft.clear(index);
    }

    /// The guess being typed.
    #[must_use]
    pub fn current_guess(&self) -> &GuessDraft {
        &self.draft
    }

    /// Submit the typed guess. It is cleared once accepted.
    pub fn submit(&mut self) -> Result<Attempt, Rejection> {
        let attempt = self.session.submit_draft(&self.draft)?;
        self.draft.reset();
        Ok(attempt)
    }

    /// Submit `symbols` as a whole guess.
    ///
    /// Characters that are not letters or digits count as empty slots, so
    /// `"12 4"` is an incomplete guess. The typed guess is left untouched.
    pub fn submit_guess(&mut self, symbols: &str) -> Result<Attempt, Rejection> {
        let chars: Vec<char> = symbols.chars().collect();
        let mut draft = GuessDraft::new(chars.len());
        for (index, c) in chars.into_iter().enumerate() {
            // Invalid characters stay empty and surface as `Incomplete`.
            let _ = draft.set(index, c);
        }
        self.session.submit_draft(&draft)
    }

    /// Forfeit the session (extreme difficulty, after the threshold).
    pub fn forfeit(&mut self) -> Result<(), Rejection> {
        self.session.forfeit()
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.session.config()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.session.status()
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Read-only view of the session and the typed guess.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(&self.session, &self.draft)
    }
}
