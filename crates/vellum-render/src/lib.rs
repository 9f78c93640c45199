//! Render engine for Vellum.
//!
//! Rendering runs in three passes. The tree is lowered into layout
//! [`Token`]s for one side, long or unchanged runs of children collapse into
//! summaries, and the printer lays the tokens out within the configured line
//! width. Trees that contain diffs are rendered once per side and shown as a
//! unified line diff.
//!
//! # Key Types
//!
//! - [`render`] / [`render_to`] -- Entry points with the default name formatter
//! - [`Renderer`] -- Entry point with a custom [`NameFormatter`]
//! - [`RenderConfig`] -- Layout limits and [`Symbols`], loadable from TOML
//! - [`Token`] -- Layout intermediate representation
//! - [`RenderError`] -- Config loading and output failures

pub mod config;
pub mod error;
pub mod names;
pub mod print;
pub mod render;
pub mod summarize;
pub mod template;
pub mod token;
pub mod tokenize;
pub mod unified;

pub use config::{RenderConfig, Symbols};
pub use error::{RenderError, RenderResult};
pub use names::{IdentityNames, NameFormatter};
pub use render::{render, render_to, Renderer};
pub use token::Token;
