//! [`Generator`] alphabet and [`Word`] — a walk through the tiling.
//!
//! ## Alphabet
//!
//! | Symbol | Move                                                  |
//! |--------|-------------------------------------------------------|
//! | `a`    | advance one tile forward across an edge, then flip 180° |
//! | `A`    | formal inverse of `a` — the *same* matrix (involution)  |
//! | `b`    | rotate one tile to the left about the current vertex    |
//! | `B`    | rotate one tile to the right (inverse of `b`)           |
//!
//! `a` and `A` stay distinct symbols in a word even though they denote the
//! same group element: rewrite rule patterns distinguish them. The empty
//! word is the identity walk.

use std::fmt;
use std::str::FromStr;

use crate::error::WordError;

// ─────────────────────────────────────────────
// Generator
// ─────────────────────────────────────────────

/// One symbolic move in the tiling's symmetry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// `a` — advance one tile and flip.
    Forward,
    /// `A` — formal inverse of `a` (self-inverse in this realization).
    ForwardInv,
    /// `b` — rotate one tile left.
    Left,
    /// `B` — rotate one tile right.
    Right,
}

impl Generator {
    /// All four symbols in alphabet order.
    pub const ALL: [Generator; 4] = [
        Generator::Forward,
        Generator::ForwardInv,
        Generator::Left,
        Generator::Right,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::Forward),
            'A' => Some(Self::ForwardInv),
            'b' => Some(Self::Left),
            'B' => Some(Self::Right),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Forward => 'a',
            Self::ForwardInv => 'A',
            Self::Left => 'b',
            Self::Right => 'B',
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ─────────────────────────────────────────────
// Word
// ─────────────────────────────────────────────

/// A finite ordered sequence of generators.
///
/// Parsed once at the boundary via [`FromStr`]; past that point a `Word`
/// is guaranteed to contain only alphabet symbols, so neither the
/// geometry nor the rewrite engine re-validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word(Vec<Generator>);

impl Word {
    /// The identity walk.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn new(generators: Vec<Generator>) -> Self {
        Self(generators)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slice view, for substring matching and matrix composition.
    pub fn generators(&self) -> &[Generator] {
        &self.0
    }

    /// `true` iff `pattern` occurs as a contiguous subsequence.
    ///
    /// The empty pattern matches everywhere.
    pub fn contains(&self, pattern: &Word) -> bool {
        let pat = pattern.generators();
        if pat.is_empty() {
            return true;
        }
        self.0.windows(pat.len()).any(|w| w == pat)
    }
}

impl From<Vec<Generator>> for Word {
    fn from(generators: Vec<Generator>) -> Self {
        Self(generators)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, symbol)| {
                Generator::from_char(symbol)
                    .ok_or(WordError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Word)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for g in &self.0 {
            write!(f, "{}", g.to_char())?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_char_roundtrip() {
        for g in Generator::ALL {
            assert_eq!(Generator::from_char(g.to_char()), Some(g));
        }
    }

    #[test]
    fn parse_valid_word() {
        let word: Word = "abAB".parse().unwrap();
        assert_eq!(
            word.generators(),
            &[
                Generator::Forward,
                Generator::Left,
                Generator::ForwardInv,
                Generator::Right,
            ]
        );
        assert_eq!(word.to_string(), "abAB");
    }

    #[test]
    fn parse_empty_word_is_identity() {
        let word: Word = "".parse().unwrap();
        assert!(word.is_empty());
        assert_eq!(word, Word::empty());
    }

    #[test]
    fn parse_rejects_invalid_symbol_with_position() {
        let err = "abXB".parse::<Word>().unwrap_err();
        assert_eq!(
            err,
            WordError::InvalidSymbol { symbol: 'X', position: 2 }
        );
    }

    #[test]
    fn lowercase_and_uppercase_are_distinct() {
        let w1: Word = "a".parse().unwrap();
        let w2: Word = "A".parse().unwrap();
        assert_ne!(w1, w2);
    }

    #[test]
    fn contains_finds_substring() {
        let word: Word = "abbbBa".parse().unwrap();
        assert!(word.contains(&"bbb".parse().unwrap()));
        assert!(word.contains(&"bB".parse().unwrap()));
        assert!(!word.contains(&"aa".parse().unwrap()));
        assert!(word.contains(&Word::empty()));
    }

    #[test]
    fn empty_word_contains_only_empty_pattern() {
        let word = Word::empty();
        assert!(word.contains(&Word::empty()));
        assert!(!word.contains(&"b".parse().unwrap()));
    }
}
