//! Nucleotide alphabet

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols in the alphabet (and children per trie node)
pub const ALPHABET_SIZE: usize = 4;

/// A symbol of the fixed nucleotide alphabet
///
/// The discriminant is the symbol's child slot in a trie node:
/// `A → 0, T → 1, G → 2, C → 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    A = 0,
    T = 1,
    G = 2,
    C = 3,
}

impl Symbol {
    /// All symbols in index order
    pub const ALL: [Symbol; ALPHABET_SIZE] = [Symbol::A, Symbol::T, Symbol::G, Symbol::C];

    /// Child slot index of this symbol
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Symbol for a child slot index
    ///
    /// Returns `None` for indices outside `0..4`.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a single character, reporting `position` on failure
    pub fn parse(ch: char, position: usize) -> Result<Self> {
        match ch {
            'A' | 'a' => Ok(Symbol::A),
            'T' | 't' => Ok(Symbol::T),
            'G' | 'g' => Ok(Symbol::G),
            'C' | 'c' => Ok(Symbol::C),
            _ => Err(Error::InvalidSymbol {
                symbol: ch,
                position,
            }),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::A => 'A',
            Symbol::T => 'T',
            Symbol::G => 'G',
            Symbol::C => 'C',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bijection() {
        for (i, sym) in Symbol::ALL.iter().enumerate() {
            assert_eq!(sym.index(), i);
            assert_eq!(Symbol::from_index(i), Some(*sym));
        }
        assert_eq!(Symbol::from_index(4), None);
    }

    #[test]
    fn test_parse_accepts_lowercase() {
        assert_eq!(Symbol::parse('g', 0).unwrap(), Symbol::G);
        assert_eq!(Symbol::parse('C', 0).unwrap(), Symbol::C);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        match Symbol::parse('N', 7) {
            Err(Error::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, 'N');
                assert_eq!(position, 7);
            }
            other => panic!("expected InvalidSymbol, got {:?}", other),
        }
    }
}
