//! Aggregation facade: ordered sources plus a dotted-path lookup API.
//!
//! # Priority
//!
//! Sources are appended in order and the LAST appended source has the
//! HIGHEST priority; lookups walk them in strict reverse of load order.
//!
//! # Failure policy
//!
//! Missing files and unparsable contents are silent by default (the
//! source is kept, marked unloaded); [`ConfigurationBuilder::strict_missing`]
//! and [`ConfigurationBuilder::strict_invalid`] turn either into a hard
//! error. [`ConfigurationBuilder::require`] makes construction fail fast
//! when fewer sources loaded successfully than required.

use serde_json::Value;

use crate::extract::{ExtractError, Extractor, Fallback, PathQuery};
use crate::source::{ConfigError, Loader, Source, SourceDescriptor};

/// An ordered collection of configuration sources with dotted-path lookup.
///
/// Built with [`Configuration::builder`]. Sources can still be appended
/// after construction; each append rebuilds the extractor view. Lookups
/// take `&self` and never mutate, so a built `Configuration` can be shared
/// read-only across threads.
///
/// # Example
///
/// ```
/// use quickconfig::{Configuration, Fallback, SourceDescriptor};
/// use serde_json::json;
///
/// let config = Configuration::builder()
///     .source(SourceDescriptor::Data(json!({"db": {"host": "localhost"}})))
///     .source(SourceDescriptor::Data(json!({"db": {"host": "db.prod"}})))
///     .build()?;
///
/// // The last source wins.
/// assert_eq!(config.get("db.host", Fallback::NotFound)?, json!("db.prod"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Configuration {
    sources: Vec<Source>,
    extractor: Extractor,
    loader: Loader,
    delimiter: char,
}

impl Configuration {
    /// Returns a builder with default options.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Resolves `path`, applying `fallback` when no source matches.
    ///
    /// # Errors
    ///
    /// Fails only when the path is absent from every source and `fallback`
    /// requests failure.
    pub fn get(
        &self,
        path: impl Into<PathQuery>,
        fallback: Fallback,
    ) -> Result<Value, ExtractError> {
        self.extractor.extract(path, fallback)
    }

    /// Resolves `path` without any fallback; `None` means not found.
    pub fn lookup(&self, path: impl Into<PathQuery>) -> Option<&Value> {
        self.extractor.lookup(path)
    }

    /// Appends a source, making it the new highest-priority source.
    ///
    /// # Errors
    ///
    /// Propagates loader failures per the configured strictness policy.
    pub fn add_source(&mut self, descriptor: SourceDescriptor) -> Result<(), ConfigError> {
        self.append(descriptor, None)
    }

    /// Appends a source nested under a destination namespace.
    ///
    /// # Errors
    ///
    /// Propagates loader failures per the configured strictness policy.
    pub fn add_source_at(
        &mut self,
        destination: impl Into<String>,
        descriptor: SourceDescriptor,
    ) -> Result<(), ConfigError> {
        self.append(descriptor, Some(destination.into()))
    }

    /// Returns all attempted sources, in load order.
    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Returns the number of successfully loaded sources.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.sources.iter().filter(|source| source.loaded).count()
    }

    /// Returns true if at least one source loaded successfully.
    #[must_use]
    pub fn any_loaded(&self) -> bool {
        self.sources.iter().any(|source| source.loaded)
    }

    fn append(
        &mut self,
        descriptor: SourceDescriptor,
        destination: Option<String>,
    ) -> Result<(), ConfigError> {
        let source = self.loader.load(descriptor, destination)?;
        tracing::debug!(
            origin = %source.origin,
            loaded = source.loaded,
            "configuration source appended"
        );
        self.sources.push(source);
        self.rebuild();
        Ok(())
    }

    /// Rebuilds the extractor view from the current source list.
    fn rebuild(&mut self) {
        let views = self.sources.iter().map(Source::view).collect();
        self.extractor = Extractor::with_delimiter(views, self.delimiter);
    }
}

/// Builder for [`Configuration`].
///
/// Collects descriptors and options, then loads everything in order on
/// [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    entries: Vec<(SourceDescriptor, Option<String>)>,
    args: Option<Vec<String>>,
    strict_missing: bool,
    strict_invalid: bool,
    require: usize,
    delimiter: Option<char>,
}

impl ConfigurationBuilder {
    /// Creates a builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source descriptor; later sources have higher priority.
    #[must_use]
    pub fn source(mut self, descriptor: SourceDescriptor) -> Self {
        self.entries.push((descriptor, None));
        self
    }

    /// Appends a source nested under a destination namespace.
    #[must_use]
    pub fn source_at(
        mut self,
        destination: impl Into<String>,
        descriptor: SourceDescriptor,
    ) -> Self {
        self.entries.push((descriptor, Some(destination.into())));
        self
    }

    /// Sets the argument vector used for flag resolution and the debug
    /// hook. Defaults to the process arguments.
    #[must_use]
    pub fn args(mut self, args: Vec<String>) -> Self {
        self.args = Some(args);
        self
    }

    /// Makes a missing or unreadable file a hard error.
    #[must_use]
    pub const fn strict_missing(mut self, strict: bool) -> Self {
        self.strict_missing = strict;
        self
    }

    /// Makes unparsable file contents a hard error.
    #[must_use]
    pub const fn strict_invalid(mut self, strict: bool) -> Self {
        self.strict_invalid = strict;
        self
    }

    /// Requires at least `count` sources to load successfully.
    #[must_use]
    pub const fn require(mut self, count: usize) -> Self {
        self.require = count;
        self
    }

    /// Requires at least one source to load successfully.
    #[must_use]
    pub const fn required(self) -> Self {
        self.require(1)
    }

    /// Sets the delimiter used to split joined path strings.
    #[must_use]
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Loads every source in order and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first loader failure per the strictness policy, or
    /// [`ConfigError::InsufficientSources`] when fewer sources loaded than
    /// required.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        let delimiter = self
            .delimiter
            .unwrap_or(crate::extract::DEFAULT_DELIMITER);
        let loader = self
            .args
            .map_or_else(Loader::new, Loader::with_args)
            .with_strict_missing(self.strict_missing)
            .with_strict_invalid(self.strict_invalid);

        let mut configuration = Configuration {
            sources: Vec::new(),
            extractor: Extractor::with_delimiter(Vec::new(), delimiter),
            loader,
            delimiter,
        };
        for (descriptor, destination) in self.entries {
            configuration.append(descriptor, destination)?;
        }

        let loaded = configuration.loaded_count();
        if self.require > loaded {
            let origins: Vec<String> = configuration
                .sources
                .iter()
                .map(|source| source.origin.clone())
                .collect();
            tracing::warn!(
                needed = self.require,
                loaded,
                "insufficient configuration sources"
            );
            return Err(ConfigError::InsufficientSources {
                needed: self.require,
                loaded,
                origins,
            });
        }
        Ok(configuration)
    }
}
