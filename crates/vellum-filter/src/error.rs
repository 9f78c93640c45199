//! Error types for the filter crate.

/// Errors that can occur while building a filter predicate.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The wildcard pattern could not be compiled.
    #[error("invalid value pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Convenience alias for filter results.
pub type FilterResult<T> = Result<T, FilterError>;
