//! Configuration source loading.
//!
//! This module provides:
//! - Source descriptors ([`SourceDescriptor`])
//! - File format detection and parsing ([`Format`])
//! - A minimal INI parser ([`ini`])
//! - Descriptor resolution into loaded records ([`Loader`], [`Source`])
//! - Loading errors ([`ConfigError`], [`ParseError`])
//!
//! Loading is deliberately thin glue: every source resolves to an
//! `(origin, parsed data, destination)` record, and all lookup semantics
//! live in [`crate::extract`].
//!
//! # Failure policy
//!
//! Missing files and unparsable contents are silent by default: the source
//! is recorded as unloaded with its failure message retained, and lookups
//! simply skip it. [`Loader::with_strict_missing`] and
//! [`Loader::with_strict_invalid`] turn either case into a hard error. A
//! file with an extension outside the supported set is ALWAYS a hard
//! error; there is no sensible fallback for it.

mod descriptor;
mod error;
mod format;
pub mod ini;
mod loader;


pub use descriptor::SourceDescriptor;
pub use error::{ConfigError, ParseError};
pub use format::Format;
pub use loader::{DEBUG_FLAG, Loader, Source};
