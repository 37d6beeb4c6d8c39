//! Configuration file formats: detection by extension and parsing.

use serde_json::Value;

use super::error::ParseError;
use super::ini;

/// A supported configuration file format.
///
/// Detection is by file extension only; file contents are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON (`.json`)
    Json,
    /// YAML (`.yaml` or `.yml`)
    Yaml,
    /// INI (`.ini`)
    Ini,
    /// TOML (`.toml`)
    Toml,
}

impl Format {
    /// Detects the format for a file extension (without the leading dot).
    ///
    /// Matching is ASCII case-insensitive. Returns `None` for extensions
    /// outside the supported set.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "ini" => Some(Self::Ini),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parses file contents under this format into a nested value.
    ///
    /// # Errors
    ///
    /// Returns the format-specific parser error when the contents are
    /// invalid.
    pub fn parse(self, contents: &str) -> Result<Value, ParseError> {
        match self {
            Self::Json => Ok(serde_json::from_str(contents)?),
            Self::Yaml => Ok(serde_yaml::from_str(contents)?),
            Self::Ini => Ok(ini::parse(contents)?),
            Self::Toml => Ok(toml::from_str(contents)?),
        }
    }

    /// Returns the canonical lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Ini => "ini",
            Self::Toml => "toml",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
