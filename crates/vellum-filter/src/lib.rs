//! Filter engine for Vellum.
//!
//! Replaces every node that fails a predicate with
//! [`Omitted(Filtered)`](vellum_types::OmittedReason::Filtered), keeping
//! the ancestor chain of every match and up to `match_depth` levels below
//! each match.
//!
//! # Key Types
//!
//! - [`filter`] -- The engine entry point, taking any `Fn(&Node) -> bool`
//! - [`by_kind`] -- Predicate matching a [`NodeKind`](vellum_types::NodeKind)
//! - [`by_value`] -- Predicate matching leaf descriptions against a wildcard pattern
//! - [`FilterError`] -- Pattern compilation failures

pub mod error;
pub mod filter;
pub mod predicates;

pub use error::{FilterError, FilterResult};
pub use filter::filter;
pub use predicates::{by_kind, by_value};
