//! Random sources for secret generation.
//!
//! ## Key Features
//!
//! - **Injectable**: generators draw through [`RandomSource`], never a global RNG
//! - **Deterministic**: same seed produces the identical sequence of secrets
//! - **Scriptable**: [`ScriptedSource`] replays fixed draws for exact assertions
//!
//! ```
//! use crack_code::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut again = GameRng::new(42);
//!
//! assert_eq!(rng.next_index(10), again.next_index(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform source of indices.
///
/// `next_index(bound)` must return a value in `0..bound`. Callers never
/// pass a zero bound.
pub trait RandomSource {
    /// Draw an index uniformly from `0..bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so a
/// script written for the alphabet size also works for position draws.
///
/// ```
/// use crack_code::core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([3, 12]);
/// assert_eq!(source.next_index(10), 3);
/// assert_eq!(source.next_index(10), 2);
/// assert_eq!(source.next_index(10), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source replaying `script`.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        let script: Vec<usize> = script.into_iter().collect();
        assert!(!script.is_empty(), "Script must contain at least one draw");
        Self { script, cursor: 0 }
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % bound
    }
}
