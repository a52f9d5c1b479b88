//! # crack-code
//!
//! A code-breaking puzzle engine: a hidden symbol sequence is generated
//! under a difficulty policy, and each guess receives per-position
//! feedback until the code is cracked or attempts run out.
//!
//! ## Design Principles
//!
//! 1. **Injectable Randomness**: Generators draw through `RandomSource`.
//!    Seeded or scripted sources make every secret reproducible.
//!
//! 2. **Duplicate-Safe Feedback**: Each secret occurrence is claimed by at
//!    most one guess position, exact matches first.
//!
//! 3. **Explicit State**: `GameSession` is an exclusively-owned value;
//!    rejected actions never mutate it.
//!
//! ## Modules
//!
//! - `core`: Symbols, codes, guess drafts, configuration, RNG
//! - `generator`: Difficulty-dispatched secret generation
//! - `feedback`: Feedback marks and the guess evaluator
//! - `session`: Attempt history and the Active/Won/Lost state machine
//! - `engine`: `CodeBreaker`, the boundary consumed by interfaces

pub mod core;
pub mod generator;
pub mod feedback;
pub mod session;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Alphabet, Symbol, SymbolError,
    Code, CodeParseError, GuessDraft,
    AttemptMode, ConfigError, Difficulty, GameConfig, RuleConstants,
    GameRng, RandomSource, ScriptedSource,
};

pub use crate::generator::{CodeGenerator, GenerationStrategy, ForcedRepeat, FreeDraw, UniqueSymbols};

pub use crate::feedback::{Feedback, FeedbackCounts, FeedbackMark, GuessEvaluator};

pub use crate::session::{Attempt, GameSession, Rejection, SessionSnapshot, Status};

pub use crate::engine::CodeBreaker;
