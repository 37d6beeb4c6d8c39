//! Path-extraction engine.
//!
//! This module provides:
//! - Path arguments for lookups ([`PathQuery`])
//! - The multi-source resolution engine ([`Extractor`])
//! - Fallback semantics for absent paths ([`Fallback`])
//! - Extraction errors ([`ExtractError`])
//!
//! # Priority
//!
//! An [`Extractor`] holds an ordered list of nested source values. Order
//! encodes priority: the LAST value in the list has the HIGHEST priority,
//! and lookups walk the list in strict reverse of that order. The first
//! source that resolves every path segment wins; no further sources are
//! consulted.

mod error;
mod extractor;
mod path;

#[cfg(test)]
mod extractor_tests;

pub use error::ExtractError;
pub use extractor::{Extractor, Fallback, extract};
pub use path::{DEFAULT_DELIMITER, PathQuery};
