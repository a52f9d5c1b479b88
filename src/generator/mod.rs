//! Secret code generation.
//!
//! `CodeGenerator` dispatches each [`Difficulty`] to its strategy:
//!
//! | Difficulty | Alphabet | Strategy |
//! |---|---|---|
//! | easy | 0-9 | [`UniqueSymbols`] |
//! | normal | 0-9 | [`FreeDraw`] |
//! | hard | 0-9 | [`ForcedRepeat`] (length >= 6) |
//! | extreme | 0-9, A-Z | [`FreeDraw`] |
//!
//! ```
//! use crack_code::core::{Difficulty, GameRng};
//! use crack_code::generator::CodeGenerator;
//!
//! let mut rng = GameRng::new(42);
//! let secret = CodeGenerator::generate(4, Difficulty::Easy, &mut rng);
//! assert_eq!(secret.len(), 4);
//! assert!(!secret.has_repeat());
//! ```

pub mod strategy;

pub use strategy::{ForcedRepeat, FreeDraw, GenerationStrategy, UniqueSymbols};

use crate::core::{Code, Difficulty, RandomSource};

/// Produces secrets according to a difficulty policy.
pub struct CodeGenerator;

impl CodeGenerator {
    /// Generate a secret of `length` symbols.
    ///
    /// `length` must already be validated (see
    /// [`GameConfig`](crate::core::GameConfig)); easy codes longer than the
    /// alphabet panic.
    pub fn generate<R: RandomSource + ?Sized>(length: usize, difficulty: Difficulty, rng: &mut R) -> Code {
        let alphabet = difficulty.alphabet();
        let code = match difficulty {
            Difficulty::Easy => UniqueSymbols.generate(length, alphabet, rng),
            Difficulty::Normal | Difficulty::Extreme => FreeDraw.generate(length, alphabet, rng),
            Difficulty::Hard => ForcedRepeat::default().generate(length, alphabet, rng),
        };

        tracing::trace!(length, %difficulty, "generated secret");
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedSource, MAX_CODE_LENGTH, MIN_CODE_LENGTH};

    #[test]
    fn test_exact_secret_from_script() {
        let mut source = ScriptedSource::new([1, 2, 3, 4]);
        let secret = CodeGenerator::generate(4, Difficulty::Normal, &mut source);
        assert_eq!(secret.to_string(), "1234");
    }

    #[test]
    fn test_length_matches_for_every_tier() {
        let mut rng = GameRng::new(3);
        for difficulty in Difficulty::ALL {
            for length in MIN_CODE_LENGTH..=MAX_CODE_LENGTH {
                let secret = CodeGenerator::generate(length, difficulty, &mut rng);
                assert_eq!(secret.len(), length, "{} at length {}", difficulty, length);
            }
        }
    }

    #[test]
    fn test_digit_tiers_exclude_letters() {
        let mut rng = GameRng::new(11);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            for _ in 0..50 {
                let secret = CodeGenerator::generate(8, difficulty, &mut rng);
                assert!(secret.symbols().iter().all(|s| s.is_digit()));
            }
        }
    }

    #[test]
    fn test_hard_dispatches_forced_repeat() {
        let mut source = ScriptedSource::new([9, 8, 7, 6, 5, 4, 0]);
        let secret = CodeGenerator::generate(6, Difficulty::Hard, &mut source);
        assert_eq!(secret.to_string(), "887654");
    }

    #[test]
    fn test_extreme_reaches_letters() {
        let mut rng = GameRng::new(5);
        let saw_letter = (0..50)
            .map(|_| CodeGenerator::generate(10, Difficulty::Extreme, &mut rng))
            .any(|secret| secret.symbols().iter().any(|s| !s.is_digit()));
        assert!(saw_letter);
    }
}
