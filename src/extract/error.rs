//! Error types for path extraction.

use thiserror::Error;

/// Error type for extraction failures.
///
/// Raised only when the caller asked for failure semantics via
/// [`Fallback`](super::Fallback); the no-fallback lookup form reports
/// absence as `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No source resolved the requested path.
    #[error("path not found: {path}")]
    NotFound {
        /// The joined path that failed to resolve
        path: String,
    },

    /// A caller-authored failure, raised verbatim when the path is absent.
    ///
    /// Used with [`Fallback::Raise`](super::Fallback::Raise) to surface a
    /// domain-specific message (e.g. "a database host must be configured")
    /// instead of the generic not-found text.
    #[error("{0}")]
    Required(String),
}

impl ExtractError {
    /// Creates a `NotFound` error for a joined path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a `Required` error with a caller-authored message.
    #[must_use]
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required(message.into())
    }
}
