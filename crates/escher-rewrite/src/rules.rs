//! [`RuleTable`] — priority-ordered rewriting to normal form.
//!
//! ## Semantics
//!
//! A table holds length-reducing rules `(pattern → replacement)` for one
//! tiling. [`RuleTable::normalize`] repeats single left-to-right passes
//! until a pass makes no replacement:
//!
//! 1. **Scan** — walk the word position by position.
//! 2. **Match** — at each position try the rules **in table order**; the
//!    first pattern that matches structurally wins (no rule stacking).
//! 3. **Replace** — emit the replacement and resume scanning immediately
//!    after it; a replacement is never re-examined within the same pass.
//! 4. **Repeat** — if the pass made any replacement, re-scan the whole
//!    result from the beginning; otherwise the word is in normal form.
//!
//! Termination is a property of the *supplied* rules (each application
//! must strictly reduce the word), not something the engine can prove.
//! A pass cap turns a malformed table into
//! [`RewriteError::NonTerminating`] instead of an infinite loop.

use escher_core::{Generator, TilingKey, Word};

use crate::error::RewriteError;

/// Default bound on full rewrite passes before giving up.
///
/// Generous: a strictly reducing table finishes in at most `len(word)`
/// passes, and real words are far shorter than this.
pub const DEFAULT_MAX_PASSES: usize = 10_000;

// ─────────────────────────────────────────────
// Rule
// ─────────────────────────────────────────────

/// One rewrite rule: replace `pattern` with the (shorter) `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: Word,
    pub replacement: Word,
}

impl RewriteRule {
    pub fn new(pattern: Word, replacement: Word) -> Self {
        Self { pattern, replacement }
    }
}

// ─────────────────────────────────────────────
// Rule table
// ─────────────────────────────────────────────

/// The ordered rule set of one tiling.
///
/// Rule order encodes priority: when several patterns match at the same
/// scan position, the earliest-listed rule wins. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct RuleTable {
    key: TilingKey,
    rules: Vec<RewriteRule>,
    max_passes: usize,
}

impl RuleTable {
    /// Build a table, rejecting empty patterns up front.
    pub fn new(key: TilingKey, rules: Vec<RewriteRule>) -> Result<Self, RewriteError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.pattern.is_empty() {
                return Err(RewriteError::EmptyPattern { key, index });
            }
        }
        Ok(Self { key, rules, max_passes: DEFAULT_MAX_PASSES })
    }

    /// Override the pass cap (the only safeguard against a
    /// non-terminating table).
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    pub fn key(&self) -> TilingKey {
        self.key
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// `true` iff no rule pattern occurs as a substring of `word`.
    pub fn is_normal(&self, word: &Word) -> bool {
        !self.rules.iter().any(|rule| word.contains(&rule.pattern))
    }

    /// One simultaneous left-to-right pass.
    ///
    /// Returns the rewritten symbols and the number of replacements made.
    fn apply_pass(&self, input: &[Generator]) -> (Vec<Generator>, usize) {
        let mut output = Vec::with_capacity(input.len());
        let mut replacements = 0usize;
        let mut i = 0;
        'scan: while i < input.len() {
            for rule in &self.rules {
                let pattern = rule.pattern.generators();
                if input[i..].starts_with(pattern) {
                    output.extend_from_slice(rule.replacement.generators());
                    i += pattern.len();
                    replacements += 1;
                    continue 'scan;
                }
            }
            output.push(input[i]);
            i += 1;
        }
        (output, replacements)
    }

    /// Reduce `word` to its normal form.
    pub fn normalize(&self, word: &Word) -> Result<Word, RewriteError> {
        self.normalize_report(word).map(|(normalized, _)| normalized)
    }

    /// Reduce `word` to its normal form, reporting how much work it took.
    pub fn normalize_report(
        &self,
        word: &Word,
    ) -> Result<(Word, NormalizeReport), RewriteError> {
        let input_len = word.len();
        let mut current: Vec<Generator> = word.generators().to_vec();
        let mut passes = 0usize;
        let mut replacements = 0usize;

        loop {
            let (next, n) = self.apply_pass(&current);
            if n == 0 {
                break;
            }
            current = next;
            passes += 1;
            replacements += n;
            if passes >= self.max_passes {
                return Err(RewriteError::NonTerminating { passes });
            }
        }

        let normalized = Word::from(current);
        let report = NormalizeReport {
            passes,
            replacements,
            input_len,
            output_len: normalized.len(),
        };
        tracing::debug!(
            key = %self.key,
            passes = report.passes,
            replacements = report.replacements,
            input_len = report.input_len,
            output_len = report.output_len,
            "word normalized"
        );
        Ok((normalized, report))
    }
}

// ─────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────

/// Statistics returned by [`RuleTable::normalize_report`].
///
/// A word already in normal form reports zero passes: the fixpoint scan
/// that finds nothing to do is not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeReport {
    pub passes: usize,
    pub replacements: usize,
    pub input_len: usize,
    pub output_len: usize,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
