//! Minimal INI parsing into nested configuration values.
//!
//! No repository-wide INI dependency exists, so this is a small built-in
//! line scanner covering the subset configuration files actually use:
//! `[Section]` headers, `key = value` (or `key : value`) pairs, blank
//! lines, and `;`/`#` comments. All values are strings.
//!
//! The `[DEFAULT]` section is exposed under the top-level `defaults` key,
//! which is always present (an empty mapping when the section is absent).
//! DEFAULT entries are also merged into every named section, with
//! section-local values winning, mirroring how classic INI consumers
//! resolve per-section lookups.

use serde_json::{Map, Value};
use thiserror::Error;

/// Section whose entries become defaults for every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Top-level key under which the `[DEFAULT]` entries are exposed.
pub const DEFAULTS_KEY: &str = "defaults";

/// Error type for INI parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IniError {
    /// A key/value line appeared before any section header.
    #[error("line {line}: key '{key}' appears before any section header")]
    KeyOutsideSection {
        /// 1-based line number
        line: usize,
        /// The offending key
        key: String,
    },

    /// A line is neither a section header, a key/value pair, nor a comment.
    #[error("line {line}: expected '[section]' or 'key = value', got '{content}'")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// The offending line, trimmed
        content: String,
    },
}

/// Where parsed key/value pairs are currently being collected.
enum Cursor {
    /// No section header seen yet; keys here are an error.
    Start,
    /// Inside `[DEFAULT]`.
    Defaults,
    /// Inside the named section at this index of the section list.
    Section(usize),
}

/// Parses INI text into a nested configuration value.
///
/// The result is a mapping of section name to section entries, plus the
/// `defaults` mapping described in the module docs.
///
/// # Errors
///
/// Returns an error for a key outside any section or a line that is
/// neither a header, a pair, nor a comment.
pub fn parse(contents: &str) -> Result<Value, IniError> {
    let mut defaults: Map<String, Value> = Map::new();
    let mut sections: Vec<(String, Map<String, Value>)> = Vec::new();
    let mut cursor = Cursor::Start;

    for (index, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let name = header_name(line).ok_or_else(|| IniError::Malformed {
                line: index + 1,
                content: line.to_owned(),
            })?;
            cursor = if name == DEFAULT_SECTION {
                Cursor::Defaults
            } else {
                let position = sections
                    .iter()
                    .position(|(existing, _)| existing == &name)
                    .unwrap_or_else(|| {
                        sections.push((name.clone(), Map::new()));
                        sections.len() - 1
                    });
                Cursor::Section(position)
            };
            continue;
        }

        let (key, value) = split_pair(line).ok_or_else(|| IniError::Malformed {
            line: index + 1,
            content: line.to_owned(),
        })?;

        match &cursor {
            Cursor::Start => {
                return Err(IniError::KeyOutsideSection {
                    line: index + 1,
                    key: key.to_owned(),
                });
            }
            Cursor::Defaults => {
                defaults.insert(key.to_owned(), Value::String(value.to_owned()));
            }
            Cursor::Section(position) => {
                sections[*position]
                    .1
                    .insert(key.to_owned(), Value::String(value.to_owned()));
            }
        }
    }

    let mut root = Map::new();
    root.insert(DEFAULTS_KEY.to_owned(), Value::Object(defaults.clone()));
    for (name, entries) in sections {
        // Section-local entries shadow DEFAULT ones.
        let mut merged = defaults.clone();
        merged.extend(entries);
        root.insert(name, Value::Object(merged));
    }
    Ok(Value::Object(root))
}

/// Extracts the section name from a `[name]` header line.
fn header_name(line: &str) -> Option<String> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_owned())
}

/// Splits a `key = value` or `key : value` line at its first separator.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let separator = line.find(['=', ':'])?;
    let key = line[..separator].trim();
    let value = line[separator + 1..].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
