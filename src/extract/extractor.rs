//! Multi-source path resolution.
//!
//! The [`Extractor`] walks a segmented path through an ordered list of
//! nested values, highest priority first, and returns the first full match.

use serde_json::Value;

use super::error::ExtractError;
use super::path::{DEFAULT_DELIMITER, PathQuery};

/// What to do when no source resolves a path.
///
/// Replaces an overloaded "default" argument with three explicit cases:
///
/// - [`Fallback::Value`] returns the carried value unchanged.
/// - [`Fallback::Raise`] fails with exactly the carried error.
/// - [`Fallback::NotFound`] fails with a fresh
///   [`ExtractError::NotFound`] naming the joined path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// Return this value when the path is absent.
    Value(Value),
    /// Fail with exactly this error when the path is absent.
    Raise(ExtractError),
    /// Fail with a `NotFound` error naming the joined path.
    NotFound,
}

impl From<Value> for Fallback {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Resolves paths against an ordered list of nested source values.
///
/// Sources are consulted in REVERSE list order (last is highest priority).
/// The first source on which every path segment resolves wins; any segment
/// miss abandons that source and advances to the next.
///
/// # Index semantics
///
/// When the current value is a sequence, the segment is parsed as a base-10
/// `usize`. Negative indices are deliberately not supported (a `-1` segment
/// is a miss, never a from-the-end match), and out-of-range indices are a
/// miss for that source.
///
/// # Example
///
/// ```
/// use quickconfig::extract::Extractor;
/// use serde_json::json;
///
/// let extractor = Extractor::new(vec![
///     json!({"host": "fallback.example", "port": 80}),
///     json!({"host": "primary.example"}),
/// ]);
///
/// // The last source wins; the first fills the gaps.
/// assert_eq!(extractor.lookup("host"), Some(&json!("primary.example")));
/// assert_eq!(extractor.lookup("port"), Some(&json!(80)));
/// ```
#[derive(Debug, Clone)]
pub struct Extractor {
    sources: Vec<Value>,
    delimiter: char,
}

impl Extractor {
    /// Creates an extractor over `sources` using the default `.` delimiter.
    #[must_use]
    pub const fn new(sources: Vec<Value>) -> Self {
        Self::with_delimiter(sources, DEFAULT_DELIMITER)
    }

    /// Creates an extractor with a custom single-character delimiter.
    #[must_use]
    pub const fn with_delimiter(sources: Vec<Value>, delimiter: char) -> Self {
        Self { sources, delimiter }
    }

    /// Returns the delimiter used to split joined path strings.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the source views, in load order (last is highest priority).
    #[must_use]
    pub fn sources(&self) -> &[Value] {
        &self.sources
    }

    /// Resolves `path` without any fallback.
    ///
    /// Returns `None` when no source resolves the path. Absence is distinct
    /// from a stored `null`: a source that stores `null` at the path yields
    /// `Some(&Value::Null)`.
    ///
    /// A zero-segment path (empty string, or empty pre-split sequence)
    /// returns the highest-priority source unchanged.
    pub fn lookup(&self, path: impl Into<PathQuery>) -> Option<&Value> {
        let query = path.into();
        let segments = query.segments(self.delimiter);
        self.sources
            .iter()
            .rev()
            .find_map(|source| resolve(source, &segments))
    }

    /// Resolves `path`, applying `fallback` when no source matches.
    ///
    /// The located value is returned by clone; sources are never mutated.
    ///
    /// # Errors
    ///
    /// Fails only when the path is absent from every source and `fallback`
    /// is [`Fallback::Raise`] or [`Fallback::NotFound`].
    pub fn extract(
        &self,
        path: impl Into<PathQuery>,
        fallback: Fallback,
    ) -> Result<Value, ExtractError> {
        let query = path.into();
        let segments = query.segments(self.delimiter);
        let found = self
            .sources
            .iter()
            .rev()
            .find_map(|source| resolve(source, &segments));

        match found {
            Some(value) => Ok(value.clone()),
            None => match fallback {
                Fallback::Value(value) => Ok(value),
                Fallback::Raise(error) => Err(error),
                Fallback::NotFound => {
                    Err(ExtractError::not_found(query.joined(self.delimiter)))
                }
            },
        }
    }
}

/// Resolves a path against a single nested value.
///
/// Convenience wrapper over a one-element source list:
///
/// ```
/// use quickconfig::extract::{Fallback, extract};
/// use serde_json::json;
///
/// let data = json!({"a": {"b": 1}});
/// assert_eq!(extract(&data, "a.b", Fallback::NotFound), Ok(json!(1)));
/// ```
///
/// # Errors
///
/// Fails when the path is absent and `fallback` requests failure.
pub fn extract(
    source: &Value,
    path: impl Into<PathQuery>,
    fallback: Fallback,
) -> Result<Value, ExtractError> {
    Extractor::new(vec![source.clone()]).extract(path, fallback)
}

/// Walks every segment through `source`, returning the final value.
///
/// Any miss (absent key, unparsable or out-of-range index, scalar or null
/// in the middle of the path) returns `None` so the caller can advance to
/// the next source.
fn resolve<'a>(source: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let mut value = source;
    for segment in segments {
        value = step(value, segment)?;
    }
    Some(value)
}

/// Resolves one segment against the current value.
///
/// Mappings are indexed by string key, sequences by base-10 `usize`; any
/// other value kind has no children and always misses.
fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            let index: usize = segment.parse().ok()?;
            items.get(index)
        }
        _ => None,
    }
}
