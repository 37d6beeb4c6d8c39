//! Error types for source loading and aggregation.

use thiserror::Error;

use super::ini::IniError;

/// Error type for configuration loading and aggregation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A referenced file does not exist or cannot be read.
    ///
    /// Raised only under [`strict missing`](super::Loader::with_strict_missing)
    /// policy; silent otherwise.
    #[error("missing configuration file: {origin}")]
    MissingFile {
        /// Identifier of the source whose file is missing
        origin: String,
    },

    /// File contents failed to parse under the detected format.
    ///
    /// Raised only under [`strict invalid`](super::Loader::with_strict_invalid)
    /// policy; silent otherwise.
    #[error("invalid configuration in '{origin}': {source}")]
    InvalidContent {
        /// Identifier of the unparsable source
        origin: String,
        /// Underlying parser error
        #[source]
        source: ParseError,
    },

    /// The file extension is outside the supported set.
    ///
    /// Always a hard failure, regardless of silent/strict policy.
    #[error("invalid config extension '{extension}': expected json, yaml, yml, ini, or toml")]
    UnknownFormat {
        /// The unsupported extension (may be empty)
        extension: String,
    },

    /// Fewer sources loaded successfully than the caller required.
    #[error(
        "at least {needed} configuration source(s) required but only {loaded} loaded; attempted: {}",
        .origins.join(", ")
    )]
    InsufficientSources {
        /// Minimum number of successfully loaded sources
        needed: usize,
        /// Number that actually loaded
        loaded: usize,
        /// Origins of every attempted source, in load order
        origins: Vec<String>,
    },
}

/// Error type for format-specific parse failures.
///
/// Wraps the underlying parser error so `ConfigError::InvalidContent`
/// carries a real source chain instead of a flattened string.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Invalid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Invalid YAML.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid TOML.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Invalid INI.
    #[error(transparent)]
    Ini(#[from] IniError),
}
