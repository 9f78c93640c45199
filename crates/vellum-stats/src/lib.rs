//! Stats collector for Vellum.
//!
//! A single fold over a value tree counting embedded diffs and omissions,
//! measuring depth, and gathering type names.

pub mod stats;

pub use stats::{stats, Stats};
