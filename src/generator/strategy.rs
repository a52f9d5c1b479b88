//! Generation strategies.
//!
//! Each difficulty tier maps to one strategy:
//! - `UniqueSymbols`: rejection-sample until `length` distinct symbols
//! - `FreeDraw`: independent uniform draws with replacement
//! - `ForcedRepeat`: free draw, then force one repeat for long codes

use rustc_hash::FxHashSet;

use crate::core::{Alphabet, Code, RandomSource, Symbol};

/// Strategy for producing a secret from an alphabet.
pub trait GenerationStrategy {
    /// Produce a secret of exactly `length` symbols drawn from `alphabet`.
    fn generate<R: RandomSource + ?Sized>(&self, length: usize, alphabet: Alphabet, rng: &mut R) -> Code;
}

/// Draw one symbol uniformly from `alphabet`.
fn draw<R: RandomSource + ?Sized>(alphabet: Alphabet, rng: &mut R) -> Symbol {
    alphabet.symbol(rng.next_index(alphabet.len()))
}

/// No symbol appears twice.
///
/// Draws uniformly and discards symbols already chosen.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniqueSymbols;

impl GenerationStrategy for UniqueSymbols {
    /// # Panics
    ///
    /// Panics if `length` exceeds the alphabet size.
    fn generate<R: RandomSource + ?Sized>(&self, length: usize, alphabet: Alphabet, rng: &mut R) -> Code {
        assert!(
            length <= alphabet.len(),
            "Cannot draw {} unique symbols from an alphabet of {}",
            length,
            alphabet.len()
        );

        let mut chosen = FxHashSet::default();
        let mut symbols = Vec::with_capacity(length);

        while symbols.len() < length {
            let symbol = draw(alphabet, rng);
            if chosen.insert(symbol) {
                symbols.push(symbol);
            }
        }

        Code::new(symbols)
    }
}

/// Independent uniform draws; repeats neither prevented nor forced.
#[derive(Clone, Copy, Debug, Default)]
pub struct FreeDraw;

impl GenerationStrategy for FreeDraw {
    fn generate<R: RandomSource + ?Sized>(&self, length: usize, alphabet: Alphabet, rng: &mut R) -> Code {
        (0..length).map(|_| draw(alphabet, rng)).collect()
    }
}

/// Free draw that guarantees a repeated symbol once `length >= min_length`.
///
/// If the draw happens to be all-distinct, a random position `i` is
/// overwritten with the symbol at `(i + 1) % length`. Shorter codes stand
/// as drawn.
#[derive(Clone, Copy, Debug)]
pub struct ForcedRepeat {
    /// Shortest code that must contain a repeat.
    pub min_length: usize,
}

impl ForcedRepeat {
    /// Code length from which the hard tier forces a repeat.
    pub const HARD_MIN_LENGTH: usize = 6;
}

impl Default for ForcedRepeat {
    fn default() -> Self {
        Self {
            min_length: Self::HARD_MIN_LENGTH,
        }
    }
}

impl GenerationStrategy for ForcedRepeat {
    fn generate<R: RandomSource + ?Sized>(&self, length: usize, alphabet: Alphabet, rng: &mut R) -> Code {
        let code = FreeDraw.generate(length, alphabet, rng);
        if length < self.min_length || length < 2 || code.has_repeat() {
            return code;
        }

        let mut symbols = code.symbols().to_vec();
        let i = rng.next_index(length);
        symbols[i] = symbols[(i + 1) % length];
        Code::new(symbols)
    }
}
