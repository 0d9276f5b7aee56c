//! [`RuleDatabase`] — the on-disk rule collection, loaded once.
//!
//! ## File format
//!
//! A JSON object mapping arbitrary entry names to rule sets:
//!
//! ```json
//! {
//!   "square-pentagonal": {
//!     "p": 4,
//!     "q": 5,
//!     "rules": [["bB", ""], ["Bb", ""], ["aa", ""], ["bbbb", ""]]
//!   }
//! }
//! ```
//!
//! Entry names are documentation only; lookup is by the `(p, q)` pair.
//! The database is an explicit immutable value constructed by the caller
//! and passed into the engine and verifier — there is no process-global
//! table, preserving "load once, read many" without hidden state.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use escher_core::{TilingKey, Word};

use crate::error::RewriteError;
use crate::rules::{RewriteRule, RuleTable};

/// On-disk shape of one database entry.
#[derive(Debug, Deserialize)]
struct RuleSetSpec {
    p: u32,
    q: u32,
    /// Ordered `[pattern, replacement]` pairs; order encodes priority.
    rules: Vec<(String, String)>,
}

/// Immutable map from [`TilingKey`] to its [`RuleTable`].
#[derive(Debug, Clone, Default)]
pub struct RuleDatabase {
    tables: BTreeMap<TilingKey, RuleTable>,
}

impl RuleDatabase {
    /// Load and validate a rule database file.
    ///
    /// Every pattern and replacement must parse over the alphabet, and
    /// patterns must be non-empty; a bad entry fails the whole load —
    /// there is no partially usable database.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RewriteError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| RewriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            tilings = db.len(),
            "rule database loaded"
        );
        Ok(db)
    }

    /// Parse a database from a JSON string (see module docs for the shape).
    pub fn from_json_str(json: &str) -> Result<Self, RewriteError> {
        let specs: BTreeMap<String, RuleSetSpec> = serde_json::from_str(json)?;

        let mut tables = BTreeMap::new();
        for spec in specs.into_values() {
            let key = TilingKey::new(spec.p, spec.q);
            let rules = spec
                .rules
                .iter()
                .map(|(pattern, replacement)| {
                    Ok(RewriteRule::new(
                        pattern.parse::<Word>()?,
                        replacement.parse::<Word>()?,
                    ))
                })
                .collect::<Result<Vec<_>, RewriteError>>()?;
            tables.insert(key, RuleTable::new(key, rules)?);
        }
        Ok(Self { tables })
    }

    /// Build a database from already-constructed tables (used by tests
    /// and embedders that do not go through JSON).
    pub fn from_tables(tables: impl IntoIterator<Item = RuleTable>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.key(), t)).collect(),
        }
    }

    /// The rule table for `key`, or [`RewriteError::UnknownTiling`]
    /// carrying the sorted list of tilings that *are* available.
    pub fn table(&self, key: TilingKey) -> Result<&RuleTable, RewriteError> {
        self.tables.get(&key).ok_or_else(|| RewriteError::UnknownTiling {
            key,
            available: self.keys().collect(),
        })
    }

    /// Available tilings in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = TilingKey> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
