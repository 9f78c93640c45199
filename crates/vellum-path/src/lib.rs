//! Path lookup for Vellum.
//!
//! Navigates into a value tree by label, index, or rendered key description
//! without mutating it. Lookups through an embedded diff descend into both
//! sides and recombine the results, so the same path works before and after
//! diffing.
//!
//! # Key Types
//!
//! - [`PathKey`] -- A single lookup key (strings, integers, and floats)
//! - [`lookup`] / [`lookup_path`] -- Single-step and multi-step lookup

pub mod key;
pub mod lookup;

pub use key::PathKey;
pub use lookup::{lookup, lookup_path};
