//! Foundation types for Vellum.
//!
//! This crate provides the value tree that every other Vellum crate operates
//! on. Trees are produced once by an external capture layer and thereafter
//! only transformed by pure functions that return new trees.
//!
//! # Key Types
//!
//! - [`Node`] -- The recursive, exhaustively-tagged value tree
//! - [`OmittedReason`] -- Why a value was replaced by a sentinel
//! - [`Labeled`] / [`Keyed`] -- Named fields and mapping entries
//! - [`NodeKind`] -- Fieldless discriminant of a [`Node`]
//! - [`UndiffDirection`] -- Which side of an embedded diff to recover
//! - [`NodeDigest`] -- Structural BLAKE3 digest of a tree

pub mod digest;
pub mod error;
pub mod kind;
pub mod node;
pub mod stack;

pub use digest::NodeDigest;
pub use error::TypeError;
pub use kind::NodeKind;
pub use node::{Keyed, Labeled, Node, OmittedReason, UndiffDirection};
pub use stack::ensure_sufficient_stack;
