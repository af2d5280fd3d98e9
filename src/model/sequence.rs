//! Owned symbol sequences (barcodes, queries)

use super::Symbol;
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A validated sequence over the nucleotide alphabet
///
/// Derefs to `[Symbol]`, so it can be passed anywhere a key slice is taken.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.0
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.0.push(symbol);
    }

    pub fn pop(&mut self) -> Option<Symbol> {
        self.0.pop()
    }
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(pos, ch)| Symbol::parse(ch, pos))
            .collect::<Result<Vec<_>>>()
            .map(Sequence)
    }
}

impl Deref for Sequence {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.0
    }
}

impl AsRef<[Symbol]> for Sequence {
    fn as_ref(&self) -> &[Symbol] {
        &self.0
    }
}

impl From<Vec<Symbol>> for Sequence {
    fn from(symbols: Vec<Symbol>) -> Self {
        Sequence(symbols)
    }
}

impl From<&[Symbol]> for Sequence {
    fn from(symbols: &[Symbol]) -> Self {
        Sequence(symbols.to_vec())
    }
}

impl FromIterator<Symbol> for Sequence {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sym in &self.0 {
            write!(f, "{}", sym)?;
        }
        Ok(())
    }
}

// Serialized as the plain text form ("ATGC") rather than a symbol array
impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Sequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let seq: Sequence = "atgC".parse().unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.to_string(), "ATGC");
        assert_eq!(seq[2], Symbol::G);
    }

    #[test]
    fn test_parse_reports_position() {
        let err = "ATXC".parse::<Sequence>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSymbol {
                symbol: 'X',
                position: 2
            }
        ));
    }

    #[test]
    fn test_empty_sequence() {
        let seq: Sequence = "".parse().unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_json_uses_text_form() {
        let seq: Sequence = "GATTACA".parse().unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"GATTACA\"");
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }
}
