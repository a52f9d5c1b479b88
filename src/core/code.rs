//! Codes and in-progress guesses.
//!
//! A [`Code`] is a complete symbol sequence: both the hidden secret and
//! every submitted guess use it. A [`GuessDraft`] is the guess being
//! typed, where any slot may still be empty.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::config::MAX_CODE_LENGTH;
use super::symbol::{Symbol, SymbolError};

/// Errors parsing a [`Code`] from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodeParseError {
    /// The input contained no symbols.
    #[error("code is empty")]
    Empty,

    /// A character at `position` is not a valid symbol.
    #[error("invalid symbol at position {position}: {source}")]
    InvalidSymbol {
        position: usize,
        #[source]
        source: SymbolError,
    },
}

/// Ordered, complete sequence of symbols.
///
/// SmallVec keeps codes up to the maximum configurable length inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code {
    symbols: SmallVec<[Symbol; MAX_CODE_LENGTH]>,
}

impl Code {
    /// Create a code from symbols.
    #[must_use]
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this code empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols in order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Does any symbol occur more than once?
    #[must_use]
    pub fn has_repeat(&self) -> bool {
        let mut seen = rustc_hash::FxHashSet::default();
        !self.symbols.iter().all(|s| seen.insert(*s))
    }
}

impl std::ops::Index<usize> for Code {
    type Output = Symbol;

    fn index(&self, index: usize) -> &Symbol {
        &self.symbols[index]
    }
}

impl FromIterator<Symbol> for Code {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::str::FromStr for Code {
    type Err = CodeParseError;

    /// Parse a code, ignoring surrounding whitespace. Letters are upper-cased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CodeParseError::Empty);
        }

        s.chars()
            .enumerate()
            .map(|(position, c)| {
                Symbol::try_from(c).map_err(|source| CodeParseError::InvalidSymbol { position, source })
            })
            .collect()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// A guess being entered slot by slot.
///
/// Only a complete draft can become a [`Code`] and be submitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessDraft {
    slots: SmallVec<[Option<Symbol>; MAX_CODE_LENGTH]>,
}

impl GuessDraft {
    /// Create an empty draft with `length` slots.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: SmallVec::from_elem(None, length),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Does this draft have zero slots?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Symbol>] {
        &self.slots
    }

    /// Fill slot `index` with `c`.
    ///
    /// Out-of-range indices are ignored. Returns an error (leaving the
    /// slot untouched) if `c` is not a valid symbol.
    pub fn set(&mut self, index: usize, c: char) -> Result<(), SymbolError> {
        let symbol = Symbol::try_from(c)?;
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(symbol);
        }
        Ok(())
    }

    /// Empty slot `index`. Out-of-range indices are ignored.
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Are all slots filled?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of empty slots.
    #[must_use]
    pub fn missing(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Index of the first empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Convert to a code if every slot is filled.
    #[must_use]
    pub fn to_code(&self) -> Option<Code> {
        self.slots.iter().copied().collect::<Option<Code>>()
    }
}

impl From<&Code> for GuessDraft {
    fn from(code: &Code) -> Self {
        Self {
            slots: code.symbols().iter().copied().map(Some).collect(),
        }
    }
}
