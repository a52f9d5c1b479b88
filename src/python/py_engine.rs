//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{AttemptMode, Difficulty, GameConfig, GameRng};
use crate::engine::CodeBreaker;
use crate::feedback::{Feedback, FeedbackMark};

fn mark_name(mark: FeedbackMark) -> &'static str {
    match mark {
        FeedbackMark::Exact => "exact",
        FeedbackMark::Present => "present",
        FeedbackMark::Absent => "absent",
    }
}

fn mark_names(feedback: &Feedback) -> Vec<&'static str> {
    feedback.marks().iter().copied().map(mark_name).collect()
}

fn parse_settings(difficulty: &str, attempt_mode: &str) -> PyResult<(Difficulty, AttemptMode)> {
    let difficulty = difficulty
        .parse::<Difficulty>()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let attempt_mode = attempt_mode
        .parse::<AttemptMode>()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((difficulty, attempt_mode))
}

/// Python wrapper for CodeBreaker.
#[pyclass(name = "CodeBreaker")]
pub struct PyCodeBreaker {
    engine: CodeBreaker<GameRng>,
}

#[pymethods]
impl PyCodeBreaker {
    /// Create an engine and start a session.
    ///
    /// # Arguments
    /// - code_length: Number of positions (clamped to 3-10)
    /// - difficulty: "easy", "normal", "hard" or "extreme"
    /// - attempt_mode: "limited" or "infinite"
    /// - seed: RNG seed; omit for a random game
    #[new]
    #[pyo3(signature = (
        code_length = 4,
        difficulty = "normal",
        attempt_mode = "limited",
        seed = None
    ))]
    fn new(code_length: usize, difficulty: &str, attempt_mode: &str, seed: Option<u64>) -> PyResult<Self> {
        let (difficulty, attempt_mode) = parse_settings(difficulty, attempt_mode)?;
        let config = GameConfig::new(code_length, difficulty, attempt_mode);
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            engine: CodeBreaker::with_rng(config, rng),
        })
    }

    /// Apply new settings and start a new game.
    fn configure(&mut self, code_length: usize, difficulty: &str, attempt_mode: &str) -> PyResult<()> {
        let (difficulty, attempt_mode) = parse_settings(difficulty, attempt_mode)?;
        self.engine.configure(code_length, difficulty, attempt_mode);
        Ok(())
    }

    /// Start a new game with the current settings.
    fn new_game(&mut self) {
        self.engine.new_game();
    }

    /// Submit a guess.
    ///
    /// Returns the feedback marks, or None if the guess was rejected
    /// (incomplete, wrong length, or game over).
    fn submit(&mut self, guess: &str) -> Option<Vec<&'static str>> {
        self.engine
            .submit_guess(guess)
            .ok()
            .map(|attempt| mark_names(&attempt.feedback))
    }

    /// Forfeit the game. Returns False if forfeit is not available.
    fn forfeit(&mut self) -> bool {
        self.engine.forfeit().is_ok()
    }

    /// Attempt history as (guess, marks) tuples, oldest first.
    ///
    /// Infinite mode returns only the most recent attempts.
    fn history(&self) -> Vec<(String, Vec<&'static str>)> {
        self.engine
            .session()
            .visible_attempts()
            .map(|a| (a.guess.to_string(), mark_names(&a.feedback)))
            .collect()
    }

    #[getter]
    fn status(&self) -> String {
        self.engine.status().to_string()
    }

    #[getter]
    fn code_length(&self) -> usize {
        self.engine.config().code_length()
    }

    #[getter]
    fn attempts_used(&self) -> usize {
        self.engine.session().attempts_used()
    }

    #[getter]
    fn attempts_remaining(&self) -> Option<usize> {
        self.engine.session().attempts_remaining()
    }

    #[getter]
    fn can_forfeit(&self) -> bool {
        self.engine.session().can_forfeit()
    }

    /// One-line rules text for the current difficulty.
    #[getter]
    fn difficulty_description(&self) -> &'static str {
        self.engine.config().difficulty.description()
    }

    /// One-line rules text for the current attempt mode.
    #[getter]
    fn attempt_mode_description(&self) -> &'static str {
        self.engine.config().attempt_mode.description()
    }

    /// The secret, available only after losing.
    #[getter]
    fn revealed_secret(&self) -> Option<String> {
        self.engine.session().revealed_secret().map(ToString::to_string)
    }

    fn __repr__(&self) -> String {
        let config = self.engine.config();
        format!(
            "CodeBreaker(length={}, difficulty={}, mode={}, status={}, attempts={})",
            config.code_length(),
            config.difficulty,
            config.attempt_mode,
            self.engine.status(),
            self.engine.session().attempts_used()
        )
    }
}
