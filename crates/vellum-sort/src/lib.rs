//! Sort engine for Vellum.
//!
//! Reorders record fields (by label), mapping entries (by the canonical
//! string of their key), and set elements (by their own canonical string),
//! recursively. Sequence and tuple order is semantically meaningful and is
//! never touched.
//!
//! # Key Types
//!
//! - [`SortOptions`] / [`SortOrder`] -- Comparison mode and direction
//! - [`canonical_string`] -- Total-order key for heterogeneous siblings
//! - [`compare_with`] -- Case-insensitive and numeric-aware string comparison
//! - [`sort`] -- The engine entry point

pub mod canonical;
pub mod compare;
pub mod options;
pub mod sort;

pub use canonical::{canonical_string, OMITTED_SENTINEL};
pub use compare::compare_with;
pub use options::{SortOptions, SortOrder};
pub use sort::sort;
