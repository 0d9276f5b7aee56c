//! # escher-core
//!
//! Shared vocabulary for the escher normalization checker.
//!
//! | Module     | Responsibility                                      |
//! |------------|-----------------------------------------------------|
//! | [`tiling`] | [`TilingKey`] — the (p, q) tiling shape             |
//! | [`word`]   | [`Generator`] alphabet and [`Word`] parsing/display |
//! | [`error`]  | [`WordError`] — alphabet violations                 |
//!
//! A word describes a walk through the tiles of a regular hyperbolic
//! tessellation: `a`/`A` step forward across an edge and flip 180°,
//! `b` rotates one tile left about the current vertex, `B` one tile right.
//! Everything downstream (geometry, rewriting, verification) speaks in
//! these types — no inline re-parsing allowed.

pub mod error;
pub mod tiling;
pub mod word;

pub use error::WordError;
pub use tiling::TilingKey;
pub use word::{Generator, Word};
