//! Diff engine for Vellum.
//!
//! Compares two value trees and embeds every point of divergence as a
//! [`Node::Diff`](vellum_types::Node::Diff), keeping the shape of the inputs.
//! [`undiff`] recovers either side again.
//!
//! # Key Types
//!
//! - [`diff`] -- Structural comparison producing an embedded diff
//! - [`undiff`] -- Recover the original or updated tree
//! - [`EditScript`] / [`Step`] -- Myers edit script with the pairing walk used
//!   for sequences (and by the renderer for lines)

pub mod diff;
pub mod sequence;
pub mod undiff;

pub use diff::diff;
pub use sequence::{EditScript, Step};
pub use undiff::undiff;
