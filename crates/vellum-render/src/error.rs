//! Error types for the render crate.

/// Errors that can occur while loading a render configuration or writing
/// rendered output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but cannot drive a layout.
    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("write error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
