//! Core engine types: symbols, codes, guess drafts, configuration, RNG.
//!
//! This module contains the building blocks shared by the generator,
//! the evaluator and the session state machine.

pub mod symbol;
pub mod code;
pub mod config;
pub mod rng;

pub use symbol::{Alphabet, Symbol, SymbolError};
pub use code::{Code, CodeParseError, GuessDraft};
pub use config::{
    AttemptMode, ConfigError, Difficulty, GameConfig, RuleConstants,
    DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, MIN_CODE_LENGTH,
};
pub use rng::{GameRng, RandomSource, ScriptedSource};
