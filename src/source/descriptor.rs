//! Source descriptors: where a configuration source comes from.

use serde::Serialize;
use serde_json::Value;

/// Describes one configuration source before it is loaded.
///
/// File-bearing variants (`File`, `Env`, `Flag`) all resolve to a path on
/// disk; `Env` and `Flag` are indirections where the environment variable's
/// value (or the command-line flag's value) names the file to read. An
/// unset variable or absent flag resolves to no path, leaving the source
/// unloaded.
#[derive(Debug, Clone)]
pub enum SourceDescriptor {
    /// Pre-parsed nested data, used as-is.
    Data(Value),
    /// Path to a configuration file; the extension selects the parser.
    File(String),
    /// Environment variable whose value names a configuration file.
    Env(String),
    /// Command-line flag (`--<name> <path>`) naming a configuration file.
    ///
    /// Parsed leniently: unrecognized flags on the argument vector are
    /// ignored rather than rejected.
    Flag(String),
}

impl SourceDescriptor {
    /// Creates a file descriptor.
    pub fn file(path: impl Into<String>) -> Self {
        Self::File(path.into())
    }

    /// Creates an environment-variable file reference.
    pub fn env(key: impl Into<String>) -> Self {
        Self::Env(key.into())
    }

    /// Creates a command-line flag file reference.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::Flag(name.into())
    }

    /// Creates an inline-data descriptor from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be represented as a nested
    /// configuration value (e.g. a map with non-string keys).
    pub fn serialized<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::Data(serde_json::to_value(value)?))
    }

    /// Returns the identifier used for this source in errors and logs.
    #[must_use]
    pub fn origin(&self) -> String {
        match self {
            Self::Data(_) => "inline data".to_owned(),
            Self::File(path) => path.clone(),
            Self::Env(key) => format!("env:{key}"),
            Self::Flag(name) => format!("--{name}"),
        }
    }
}

impl From<Value> for SourceDescriptor {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}
