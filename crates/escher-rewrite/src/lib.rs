//! # escher-rewrite
//!
//! Priority-ordered rewriting engine and rule database for tiling words.
//!
//! | Module       | Responsibility                                        |
//! |--------------|-------------------------------------------------------|
//! | [`rules`]    | [`RuleTable`] — left-to-right pass rewriting to fixpoint |
//! | [`database`] | [`RuleDatabase`] — JSON rule collection, loaded once  |
//! | [`error`]    | [`RewriteError`]                                      |
//!
//! The engine knows nothing about geometry: rules are opaque
//! pattern → replacement pairs over the `{a, A, b, B}` alphabet, supplied
//! precomputed per tiling. Whether a table is *correct* is decided
//! elsewhere (escher-verify) by comparing matrices of the original and
//! normalized word.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use escher_rewrite::RuleDatabase;
//! use escher_core::TilingKey;
//!
//! let db = RuleDatabase::load("data/hyperbolic.json")?;
//! let table = db.table(TilingKey::new(4, 5))?;
//! let normalized = table.normalize(&"bbbbB".parse()?)?;
//! assert_eq!(normalized.to_string(), "B");
//! ```

pub mod database;
pub mod error;
pub mod rules;

pub use database::RuleDatabase;
pub use error::RewriteError;
pub use rules::{NormalizeReport, RewriteRule, RuleTable, DEFAULT_MAX_PASSES};
