//! # escher-geometry
//!
//! Hyperbolic matrix calculus for tiling walks.
//!
//! This crate is the **single source of truth** for the geometry of a
//! `{p, q}` tessellation. It maps each generator to a concrete 2×2 matrix
//! and composes a whole word into one matrix — the independent oracle the
//! verifier uses to cross-check the rewrite engine.
//!
//! ## Generator matrices (primal realization)
//!
//! ```text
//! d    = 2·acosh(cos(π/q) / sin(π/p))      translation across one tile
//! φ    = 2π/p                              rotation at a vertex
//! m(a) = m(A) = R(π)·T(d)
//! m(b) = R(φ)          m(B) = R(−φ)
//! ```
//!
//! with the half-angle building blocks
//!
//! ```text
//! R(θ) = [[cos(θ/2), sin(θ/2)], [−sin(θ/2), cos(θ/2)]]
//! T(d) = [[cosh(d/2), sinh(d/2)], [sinh(d/2), cosh(d/2)]]
//! ```
//!
//! The dual realization swaps the roles of p and q; see
//! [`TilingGeometry::dual`] for its (asymmetric) `b`/`B` formulas.
//!
//! ## Composition order
//!
//! [`TilingGeometry::matrix_of_word`] starts from the identity and
//! **left-multiplies** by each generator matrix in word order
//! (`result ← m(g) · result`). The generators do not commute, so this
//! order is load-bearing: do not "simplify" it.

pub mod mat2;

use escher_core::{Generator, TilingKey, Word};

pub use mat2::Mat2;

use std::f64::consts::PI;

// ─────────────────────────────────────────────
// Building blocks
// ─────────────────────────────────────────────

/// Half-angle rotation matrix `R(θ)`.
pub fn rotation(theta: f64) -> Mat2 {
    let (s, c) = (theta / 2.0).sin_cos();
    Mat2::new(c, s, -s, c)
}

/// Half-length hyperbolic translation matrix `T(d)`.
pub fn translation(d: f64) -> Mat2 {
    let h = d / 2.0;
    let (c, s) = (h.cosh(), h.sinh());
    Mat2::new(c, s, s, c)
}

/// Hyperbolic translation length for moving across one tile of `{p, q}`:
/// `2·acosh(cos(π/q) / sin(π/p))`.
///
/// Only defined (finite) for hyperbolic keys; for Euclidean or spherical
/// (p, q) the `acosh` argument drops to ≤ 1 and the result degenerates.
/// Callers reach this through a rule-table lookup, which already filters
/// such keys out.
pub fn translation_length(p: u32, q: u32) -> f64 {
    let arg = (PI / q as f64).cos() / (PI / p as f64).sin();
    2.0 * arg.acosh()
}

// ─────────────────────────────────────────────
// Realization
// ─────────────────────────────────────────────

/// Which matrix representation of the tiling group to use.
///
/// Both realize the *same* group; a correct normalization preserves the
/// represented element in both at once, which is what makes the pair a
/// useful cross-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Realization {
    /// Matrices built from (p, q) directly.
    Primal,
    /// Matrices built on the face/vertex-swapped tiling (q, p).
    Dual,
}

// ─────────────────────────────────────────────
// TilingGeometry
// ─────────────────────────────────────────────

/// The three distinct generator matrices of one `(TilingKey, Realization)`.
///
/// Constructed once per query; composition is pure and allocation-free.
#[derive(Debug, Clone, Copy)]
pub struct TilingGeometry {
    key: TilingKey,
    realization: Realization,
    m_forward: Mat2,
    m_left: Mat2,
    m_right: Mat2,
}

impl TilingGeometry {
    pub fn new(key: TilingKey, realization: Realization) -> Self {
        match realization {
            Realization::Primal => Self::primal(key),
            Realization::Dual => Self::dual(key),
        }
    }

    /// Primal realization: `b`/`B` are pure vertex rotations.
    pub fn primal(key: TilingKey) -> Self {
        let d = translation_length(key.p, key.q);
        let phi = 2.0 * PI / key.p as f64;
        Self {
            key,
            realization: Realization::Primal,
            m_forward: rotation(PI) * translation(d),
            m_left: rotation(phi),
            m_right: rotation(-phi),
        }
    }

    /// Dual realization: the same word acting on the `{q, p}` tiling.
    ///
    /// `b` composes rotation-then-translation while `B` composes
    /// translation-then-rotation. The asymmetry is deliberate — it is how
    /// the source geometry is defined, and the group relations
    /// (`bB = 1`, `b^p = ±1`, `aa = ±1`) hold for it numerically. Flagged
    /// for geometric review in DESIGN.md; do not symmetrize.
    pub fn dual(key: TilingKey) -> Self {
        let d = translation_length(key.q, key.p);
        let phi = 2.0 * PI / key.q as f64;
        Self {
            key,
            realization: Realization::Dual,
            m_forward: rotation(PI) * translation(d),
            m_left: rotation(PI + phi) * translation(d),
            m_right: translation(-d) * rotation(PI - phi),
        }
    }

    pub fn key(&self) -> TilingKey {
        self.key
    }

    pub fn realization(&self) -> Realization {
        self.realization
    }

    /// The matrix of a single generator. `a` and `A` share one matrix:
    /// the advance-and-flip move is an involution in this representation.
    pub fn generator_matrix(&self, g: Generator) -> Mat2 {
        match g {
            Generator::Forward | Generator::ForwardInv => self.m_forward,
            Generator::Left => self.m_left,
            Generator::Right => self.m_right,
        }
    }

    /// Compose a word into a single matrix: identity, then
    /// `result ← m(g) · result` for each generator in order.
    pub fn matrix_of_word(&self, word: &Word) -> Mat2 {
        let mut result = Mat2::IDENTITY;
        for &g in word.generators() {
            result = self.generator_matrix(g) * result;
        }
        result
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
