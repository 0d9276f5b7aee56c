//! # escher-verify
//!
//! The acceptance oracle for rule-table correctness.
//!
//! [`verify`] normalizes a word with the rewrite engine, then — entirely
//! independently — composes both the original and the normalized word
//! into 2×2 matrices in the primal *and* dual realizations. A correct
//! normalization preserves the represented group element, so both
//! matrix pairs must agree up to a global sign (the representation
//! double-covers the symmetry group).
//!
//! There is no symbolic proof step: a near-zero error metric on every
//! tested word is the sole evidence that a rule table is correct.
//!
//! ## Protocol
//!
//! 1. `normalized = table(key).normalize(word)`
//! 2. `m, m′` — primal matrices of `word` / `normalized`;
//!    `md, md′` — dual matrices of the same pair.
//! 3. `matrix_error = min(‖m − m′‖∞, ‖m + m′‖∞)`, same for the dual.

use escher_core::{TilingKey, Word};
use escher_geometry::TilingGeometry;
use escher_rewrite::{NormalizeReport, RewriteError, RuleDatabase};

/// Absolute tolerance below which a matrix error counts as zero.
///
/// Accumulated floating-point noise over long words stays around 1e-13;
/// a genuinely wrong normalization produces errors many orders of
/// magnitude larger.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

// ─────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────

/// Outcome of verifying one word against one tiling's rule table.
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub key: TilingKey,
    pub word: Word,
    pub normalized: Word,
    /// Sign-agnostic distance between primal matrices of word and
    /// normalized word.
    pub matrix_error: f64,
    /// Same metric in the dual realization.
    pub dual_matrix_error: f64,
    /// How much rewriting work normalization took.
    pub rewrite: NormalizeReport,
}

impl VerifyReport {
    /// `true` iff both realizations agree within `tolerance`.
    pub fn is_ok(&self, tolerance: f64) -> bool {
        self.matrix_error <= tolerance && self.dual_matrix_error <= tolerance
    }
}

// ─────────────────────────────────────────────
// Verifier
// ─────────────────────────────────────────────

/// Normalize `word` under the rules for `key` and measure whether the
/// geometric meaning survived, in both realizations.
///
/// # Errors
///
/// [`RewriteError::UnknownTiling`] if the database has no table for
/// `key`; [`RewriteError::NonTerminating`] if the table is malformed.
pub fn verify(
    db: &RuleDatabase,
    key: TilingKey,
    word: &Word,
) -> Result<VerifyReport, RewriteError> {
    let table = db.table(key)?;
    let (normalized, rewrite) = table.normalize_report(word)?;

    let primal = TilingGeometry::primal(key);
    let dual = TilingGeometry::dual(key);

    let matrix_error = primal
        .matrix_of_word(word)
        .diff_up_to_sign(&primal.matrix_of_word(&normalized));
    let dual_matrix_error = dual
        .matrix_of_word(word)
        .diff_up_to_sign(&dual.matrix_of_word(&normalized));

    tracing::debug!(
        %key,
        word = %word,
        normalized = %normalized,
        matrix_error,
        dual_matrix_error,
        "verification complete"
    );

    Ok(VerifyReport {
        key,
        word: word.clone(),
        normalized,
        matrix_error,
        dual_matrix_error,
        rewrite,
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
