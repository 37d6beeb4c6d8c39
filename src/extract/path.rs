//! Path arguments for extraction lookups.
//!
//! A path is an ordered sequence of string segments. Callers either pass a
//! joined string that is split on a single-character delimiter, or a
//! pre-split sequence of segments. There is no escaping mechanism: a key
//! containing a literal delimiter character can only be addressed with the
//! pre-split form.

use std::borrow::Cow;

/// Default segment delimiter for joined path strings.
pub const DEFAULT_DELIMITER: char = '.';

/// A lookup path, either joined or pre-split.
///
/// Built via `From` conversions so lookup methods can accept both forms:
///
/// ```
/// use quickconfig::extract::PathQuery;
///
/// let joined = PathQuery::from("database.host");
/// let split = PathQuery::from(vec!["database", "host"]);
///
/// assert_eq!(joined.segments('.'), split.segments('.'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathQuery {
    /// A joined path string, split on the delimiter at lookup time.
    Joined(String),
    /// An already-split sequence of segments, used as-is.
    Segments(Vec<String>),
}

impl PathQuery {
    /// Returns the segment list for this path.
    ///
    /// A joined empty string yields ZERO segments, not one empty segment,
    /// so an empty path resolves to the source itself.
    #[must_use]
    pub fn segments(&self, delimiter: char) -> Cow<'_, [String]> {
        match self {
            Self::Joined(path) if path.is_empty() => Cow::Owned(Vec::new()),
            Self::Joined(path) => {
                Cow::Owned(path.split(delimiter).map(str::to_owned).collect())
            }
            Self::Segments(segments) => Cow::Borrowed(segments),
        }
    }

    /// Returns the joined form of this path, for diagnostics.
    #[must_use]
    pub fn joined(&self, delimiter: char) -> String {
        match self {
            Self::Joined(path) => path.clone(),
            Self::Segments(segments) => segments.join(&delimiter.to_string()),
        }
    }
}

impl From<&str> for PathQuery {
    fn from(path: &str) -> Self {
        Self::Joined(path.to_owned())
    }
}

impl From<String> for PathQuery {
    fn from(path: String) -> Self {
        Self::Joined(path)
    }
}

impl From<Vec<String>> for PathQuery {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl From<Vec<&str>> for PathQuery {
    fn from(segments: Vec<&str>) -> Self {
        Self::Segments(segments.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for PathQuery {
    fn from(segments: &[&str]) -> Self {
        Self::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}
