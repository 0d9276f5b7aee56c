//! Error types for word parsing.

/// Errors raised while turning text into a [`crate::Word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The input contained a character outside the alphabet `{a, A, b, B}`.
    #[error("invalid symbol {symbol:?} at position {position} (alphabet is a, A, b, B)")]
    InvalidSymbol { symbol: char, position: usize },
}
