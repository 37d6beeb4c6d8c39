//! Descriptor resolution into loaded source records.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::descriptor::SourceDescriptor;
use super::error::ConfigError;
use super::format::Format;

/// Process argument that turns on the load-time source dump.
///
/// When present on the loader's argument vector, every loaded source's
/// metadata is emitted via `tracing::debug!`. Purely a debugging aid; it
/// never changes lookup results.
pub const DEBUG_FLAG: &str = "--configdebug";

/// One loaded configuration source and its metadata.
///
/// Immutable once created. `data` is `None` when the load failed (or
/// produced nothing to parse); such sources still occupy their slot in the
/// priority order and simply never resolve a path.
#[derive(Debug, Clone)]
pub struct Source {
    /// Identifier for errors and debugging (path, `env:KEY`, `--flag`, ...)
    pub origin: String,
    /// Resolved file path, when the descriptor produced one
    pub location: Option<String>,
    /// Detected file format, when the location had a supported extension
    pub format: Option<Format>,
    /// Raw file contents, when the file was readable
    pub contents: Option<String>,
    /// Whether parsed data is available
    pub loaded: bool,
    /// Human-readable load outcome
    pub message: String,
    /// Parsed nested data (`None` when the load failed)
    pub data: Option<Value>,
    /// Optional namespace key the data is nested under
    pub destination: Option<String>,
}

impl Source {
    /// Returns the value this source contributes to the extractor.
    ///
    /// Failed loads contribute `null`, and a destination nests the value
    /// one level deep under the destination key. Both apply together: a
    /// failed load with destination `ns` contributes `{"ns": null}`.
    #[must_use]
    pub fn view(&self) -> Value {
        let data = self.data.clone().unwrap_or(Value::Null);
        match &self.destination {
            Some(destination) => {
                let mut wrapped = Map::new();
                wrapped.insert(destination.clone(), data);
                Value::Object(wrapped)
            }
            None => data,
        }
    }
}

/// Resolves source descriptors into [`Source`] records.
///
/// Carries the argument vector used for flag resolution and the debug
/// hook (always an explicitly captured vector, never ambient global
/// state) plus the silent-vs-strict failure policy.
#[derive(Debug, Clone)]
pub struct Loader {
    args: Vec<String>,
    strict_missing: bool,
    strict_invalid: bool,
}

impl Loader {
    /// Creates a loader capturing the current process arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::with_args(std::env::args().skip(1).collect())
    }

    /// Creates a loader with an explicit argument vector.
    #[must_use]
    pub const fn with_args(args: Vec<String>) -> Self {
        Self {
            args,
            strict_missing: false,
            strict_invalid: false,
        }
    }

    /// Sets whether a missing or unreadable file is a hard error.
    #[must_use]
    pub const fn with_strict_missing(mut self, strict: bool) -> Self {
        self.strict_missing = strict;
        self
    }

    /// Sets whether unparsable file contents are a hard error.
    #[must_use]
    pub const fn with_strict_invalid(mut self, strict: bool) -> Self {
        self.strict_invalid = strict;
        self
    }

    /// Returns the argument vector used for flag resolution.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Resolves a descriptor into a loaded source record.
    ///
    /// `destination` optionally nests the parsed data one level deep, so
    /// disjoint sources can coexist under distinct top-level keys.
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported file extension (always), or for
    /// a missing file / unparsable contents under the corresponding strict
    /// policy.
    pub fn load(
        &self,
        descriptor: SourceDescriptor,
        destination: Option<String>,
    ) -> Result<Source, ConfigError> {
        let source = match descriptor {
            SourceDescriptor::Data(value) => Source {
                origin: "inline data".to_owned(),
                location: None,
                format: None,
                contents: None,
                loaded: true,
                message: "success".to_owned(),
                data: Some(value),
                destination,
            },
            descriptor => self.load_file(&descriptor, destination)?,
        };

        if self.debug_enabled() {
            dump(&source);
        }
        Ok(source)
    }

    /// Loads a file-bearing descriptor (`File`, `Env`, or `Flag`).
    fn load_file(
        &self,
        descriptor: &SourceDescriptor,
        destination: Option<String>,
    ) -> Result<Source, ConfigError> {
        let origin = descriptor.origin();
        let location = self.resolve_location(descriptor);
        let contents = location.as_deref().and_then(read_contents);
        if contents.is_none() && self.strict_missing {
            return Err(ConfigError::MissingFile { origin });
        }

        let extension = location.as_deref().map(extension_of).unwrap_or_default();
        let format = Format::from_extension(&extension);

        let (data, message) = match &contents {
            None => (None, "no file contents to parse".to_owned()),
            Some(text) => {
                let Some(format) = format else {
                    return Err(ConfigError::UnknownFormat { extension });
                };
                match format.parse(text) {
                    Ok(value) => (Some(value), "success".to_owned()),
                    Err(error) if self.strict_invalid => {
                        return Err(ConfigError::InvalidContent {
                            origin,
                            source: error,
                        });
                    }
                    Err(error) => (None, error.to_string()),
                }
            }
        };

        Ok(Source {
            origin,
            location,
            format,
            contents,
            loaded: data.is_some(),
            message,
            data,
            destination,
        })
    }

    /// Resolves the on-disk location a descriptor points at, if any.
    fn resolve_location(&self, descriptor: &SourceDescriptor) -> Option<String> {
        match descriptor {
            SourceDescriptor::File(path) => Some(path.clone()),
            SourceDescriptor::Env(key) => std::env::var(key).ok(),
            SourceDescriptor::Flag(name) => flag_value(&self.args, name),
            SourceDescriptor::Data(_) => None,
        }
    }

    fn debug_enabled(&self) -> bool {
        self.args.iter().any(|arg| arg == DEBUG_FLAG)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts `--<name> <path>` from an argument vector, leniently.
///
/// Unknown flags and positionals are skipped rather than rejected, so
/// configuration file references can ride anywhere on an application's
/// own command line. Tokens belonging to the requested flag are filtered
/// out first and then handed to clap, which handles the `--name value`
/// and `--name=value` forms; on repetition the last occurrence wins.
fn flag_value(args: &[String], name: &str) -> Option<String> {
    let long = format!("--{name}");
    let assigned = format!("--{name}=");

    let mut relevant: Vec<&String> = Vec::new();
    let mut expect_value = false;
    for arg in args {
        if expect_value {
            relevant.push(arg);
            expect_value = false;
        } else if *arg == long {
            relevant.push(arg);
            expect_value = true;
        } else if arg.starts_with(&assigned) {
            relevant.push(arg);
        }
    }

    let command = clap::Command::new("quickconfig")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("path")
                .long(name.to_owned())
                .action(clap::ArgAction::Set)
                .overrides_with("path")
                .value_name("PATH"),
        );
    let matches = command.try_get_matches_from(relevant).ok()?;
    matches.get_one::<String>("path").cloned()
}

/// Reads a file as UTF-8, expanding a leading `~`.
///
/// Returns `None` on any read failure; the caller decides whether that is
/// silent or strict.
fn read_contents(path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    std::fs::read_to_string(expand_tilde(path)).ok()
}

/// Expands a leading `~/` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Returns the lowercase extension of a path, or an empty string.
fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Emits one loaded source's metadata for the debug hook.
fn dump(source: &Source) {
    tracing::debug!(
        origin = %source.origin,
        location = source.location.as_deref().unwrap_or("-"),
        format = source.format.map_or("-", Format::name),
        loaded = source.loaded,
        message = %source.message,
        contents = source.contents.as_deref().unwrap_or(""),
        destination = source.destination.as_deref().unwrap_or(""),
        "configuration source added"
    );
}
