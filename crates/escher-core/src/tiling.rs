//! [`TilingKey`] — the shape of a regular hyperbolic tessellation.
//!
//! A tiling `{p, q}` covers the hyperbolic plane with regular p-gons,
//! q of them meeting at every vertex. The pair is used as an immutable
//! lookup key throughout the workspace: rule tables are stored per key,
//! and the geometry of a key is fully determined by it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The (p, q) pair naming one regular tessellation.
///
/// Structural equality and ordering; cheap to copy. The hyperbolic
/// condition `(p − 2)(q − 2) > 4` is reported by [`is_hyperbolic`] but
/// never enforced here — a rule table simply does not exist for a
/// Euclidean or spherical key, and the lookup failure is the gate.
///
/// [`is_hyperbolic`]: TilingKey::is_hyperbolic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilingKey {
    /// Number of edges of each tile.
    pub p: u32,
    /// Number of edges meeting at each vertex.
    pub q: u32,
}

impl TilingKey {
    pub fn new(p: u32, q: u32) -> Self {
        Self { p, q }
    }

    /// The face/vertex-swapped tiling `{q, p}`.
    ///
    /// The dual realization of a word is its action on this tiling; both
    /// realizations must agree (up to sign) for a correct normalization.
    pub fn dual(self) -> Self {
        Self { p: self.q, q: self.p }
    }

    /// `true` iff `(p − 2)(q − 2) > 4`, i.e. the tessellation is
    /// genuinely hyperbolic (neither Euclidean nor spherical).
    pub fn is_hyperbolic(self) -> bool {
        self.p >= 3 && self.q >= 3 && (self.p - 2) * (self.q - 2) > 4
    }
}

impl fmt::Display for TilingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p={}, q={}", self.p, self.q)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
