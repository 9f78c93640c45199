//! High-level SDK for Vellum.
//!
//! Brings every value tree operation onto [`Node`] through the [`TreeExt`]
//! extension trait. This is the main entry point for applications embedding
//! Vellum.

pub mod error;
pub mod tree;

pub use error::{SdkError, SdkResult};
pub use tree::TreeExt;

// Re-export key types
pub use vellum_path::PathKey;
pub use vellum_render::{NameFormatter, RenderConfig, Symbols};
pub use vellum_sort::{SortOptions, SortOrder};
pub use vellum_stats::Stats;
pub use vellum_types::{Keyed, Labeled, Node, NodeKind, OmittedReason, UndiffDirection};
