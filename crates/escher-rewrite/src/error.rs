//! Error types for the rewrite engine and rule database.

use std::path::PathBuf;

use escher_core::{TilingKey, WordError};

/// Errors raised by rule loading and normalization.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// No rule table exists for the requested tiling. Recoverable by the
    /// caller: list the available tilings and abort the request, not the
    /// process.
    #[error("no rule table for {key}; available tilings: {}", format_keys(.available))]
    UnknownTiling {
        key: TilingKey,
        available: Vec<TilingKey>,
    },

    /// Rewriting exceeded the pass bound — the rule table is malformed
    /// (not strictly reducing). Surfaced, never silently truncated.
    #[error("rewriting did not terminate after {passes} passes; rule table is not strictly reducing")]
    NonTerminating { passes: usize },

    /// A rule pattern was empty; an empty pattern would match everywhere
    /// and can never reduce a word.
    #[error("empty pattern in rule {index} for {key}")]
    EmptyPattern { key: TilingKey, index: usize },

    /// A rule or word contained a symbol outside the alphabet.
    #[error(transparent)]
    Word(#[from] WordError),

    /// Rule database file could not be read.
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule database file was not valid JSON of the expected shape.
    #[error("parse rule database: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_keys(keys: &[TilingKey]) -> String {
    if keys.is_empty() {
        return "(none)".to_string();
    }
    keys.iter()
        .map(|k| format!("{{{}, {}}}", k.p, k.q))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tiling_message_lists_available_keys() {
        let err = RewriteError::UnknownTiling {
            key: TilingKey::new(9, 9),
            available: vec![TilingKey::new(4, 5), TilingKey::new(7, 3)],
        };
        let msg = err.to_string();
        assert!(msg.contains("p=9, q=9"));
        assert!(msg.contains("{4, 5}"));
        assert!(msg.contains("{7, 3}"));
    }

    #[test]
    fn unknown_tiling_message_with_no_keys() {
        let err = RewriteError::UnknownTiling {
            key: TilingKey::new(4, 5),
            available: vec![],
        };
        assert!(err.to_string().contains("(none)"));
    }
}
