//! [`Mat2`] — the 2×2 real matrix carrying a group element.
//!
//! The representation double-covers the actual symmetry group: `m` and
//! `−m` denote the same element, which is why every comparison in the
//! verifier goes through [`Mat2::diff_up_to_sign`].

use std::fmt;
use std::ops::{Mul, Neg};

/// A 2×2 real matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub rows: [[f64; 2]; 2],
}

impl Mat2 {
    pub const IDENTITY: Mat2 = Mat2 {
        rows: [[1.0, 0.0], [0.0, 1.0]],
    };

    pub fn new(m00: f64, m01: f64, m10: f64, m11: f64) -> Self {
        Self { rows: [[m00, m01], [m10, m11]] }
    }

    /// Largest absolute entry-wise difference to `other`.
    pub fn max_abs_diff(&self, other: &Mat2) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..2 {
            for j in 0..2 {
                max = max.max((self.rows[i][j] - other.rows[i][j]).abs());
            }
        }
        max
    }

    /// Distance to `other` treating `other` and `−other` as equal.
    ///
    /// This is the matrix-error metric of the verifier: zero (up to
    /// floating-point noise) iff both matrices represent the same group
    /// element in the double cover.
    pub fn diff_up_to_sign(&self, other: &Mat2) -> f64 {
        self.max_abs_diff(other).min(self.max_abs_diff(&other.neg()))
    }
}

impl Mul for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        let a = &self.rows;
        let b = &rhs.rows;
        Mat2::new(
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        )
    }
}

impl Neg for Mat2 {
    type Output = Mat2;

    fn neg(self) -> Mat2 {
        Mat2::new(
            -self.rows[0][0],
            -self.rows[0][1],
            -self.rows[1][0],
            -self.rows[1][1],
        )
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{:>13.8} {:>13.8}]", self.rows[0][0], self.rows[0][1])?;
        write!(f, "[{:>13.8} {:>13.8}]", self.rows[1][0], self.rows[1][1])
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
