//! Symbols and the alphabets secrets are drawn from.
//!
//! ## Symbol
//!
//! A single ASCII alphanumeric character, stored upper-cased so that
//! guesses compare case-insensitively.
//!
//! ## Alphabet
//!
//! An ordered set of symbols. Generators index into it with draws from a
//! [`RandomSource`](super::RandomSource).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors constructing a [`Symbol`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The character is not an ASCII letter or digit.
    #[error("'{0}' is not an ASCII letter or digit")]
    NotAlphanumeric(char),
}

/// One position's character in a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from an ASCII byte, upper-casing letters.
    pub const fn from_ascii(byte: u8) -> Result<Self, SymbolError> {
        if byte.is_ascii_alphanumeric() {
            Ok(Self(byte.to_ascii_uppercase()))
        } else {
            Err(SymbolError::NotAlphanumeric(byte as char))
        }
    }

    /// The symbol as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Is this symbol a decimal digit?
    #[must_use]
    pub const fn is_digit(self) -> bool {
        self.0.is_ascii_digit()
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii() {
            Self::from_ascii(c as u8)
        } else {
            Err(SymbolError::NotAlphanumeric(c))
        }
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> Self {
        symbol.as_char()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Ordered set of symbols a secret may contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: &'static [u8],
}

impl Alphabet {
    /// Digits `0..=9`.
    #[must_use]
    pub const fn digits() -> Self {
        Self { chars: DIGITS }
    }

    /// Digits `0..=9` followed by letters `A..=Z`.
    #[must_use]
    pub const fn alphanumeric() -> Self {
        Self { chars: ALPHANUMERIC }
    }

    /// Number of symbols.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.chars.len()
    }

    /// Alphabets are never empty; provided for API completeness.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Symbol at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Symbol> {
        self.chars.get(index).map(|&b| Symbol(b))
    }

    /// Symbol at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn symbol(&self, index: usize) -> Symbol {
        Symbol(self.chars[index])
    }

    /// Does this alphabet contain `symbol`?
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.chars.contains(&symbol.0)
    }

    /// Iterate over all symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.chars.iter().map(|&b| Symbol(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_uppercases() {
        let lower = Symbol::try_from('a').unwrap();
        let upper = Symbol::try_from('A').unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.as_char(), 'A');
        assert_eq!(format!("{}", lower), "A");
    }

    #[test]
    fn test_symbol_rejects_non_alphanumeric() {
        assert_eq!(Symbol::try_from(' '), Err(SymbolError::NotAlphanumeric(' ')));
        assert_eq!(Symbol::try_from('-'), Err(SymbolError::NotAlphanumeric('-')));
        assert_eq!(Symbol::try_from('é'), Err(SymbolError::NotAlphanumeric('é')));
    }

    #[test]
    fn test_symbol_is_digit() {
        assert!(Symbol::try_from('7').unwrap().is_digit());
        assert!(!Symbol::try_from('q').unwrap().is_digit());
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::digits().len(), 10);
        assert_eq!(Alphabet::alphanumeric().len(), 36);
        assert!(!Alphabet::digits().is_empty());
    }

    #[test]
    fn test_alphabet_order_and_membership() {
        let digits = Alphabet::digits();
        assert_eq!(digits.symbol(0).as_char(), '0');
        assert_eq!(digits.symbol(9).as_char(), '9');
        assert!(digits.get(10).is_none());
        assert!(!digits.contains(Symbol::try_from('A').unwrap()));

        let alnum = Alphabet::alphanumeric();
        assert_eq!(alnum.symbol(10).as_char(), 'A');
        assert_eq!(alnum.symbol(35).as_char(), 'Z');
        assert!(alnum.iter().all(|s| alnum.contains(s)));
    }

    #[test]
    fn test_symbol_serde_as_char() {
        let symbol = Symbol::try_from('k').unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"K\"");

        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, symbol);

        assert!(serde_json::from_str::<Symbol>("\"#\"").is_err());
    }
}
