//! Quickconfig: layered configuration aggregation with dotted-path lookup.
//!
//! Loads zero or more configuration sources (JSON, YAML, INI, or TOML
//! files; in-memory structures; environment-variable and command-line file
//! references), merges them with defined priority, and resolves dotted-path
//! lookups with explicit fallback semantics.
//!
//! The last-loaded source has the highest priority; a lookup walks the
//! sources in reverse load order and returns the first full match.
//!
//! # Example
//!
//! ```
//! use quickconfig::{Configuration, Fallback, SourceDescriptor};
//! use serde_json::json;
//!
//! let config = Configuration::builder()
//!     .source(SourceDescriptor::Data(json!({
//!         "database": {"host": "localhost", "port": 5432}
//!     })))
//!     .source(SourceDescriptor::Data(json!({
//!         "database": {"host": "db.prod.example"}
//!     })))
//!     .build()?;
//!
//! // The later source overrides, the earlier one fills the gaps.
//! assert_eq!(
//!     config.get("database.host", Fallback::NotFound)?,
//!     json!("db.prod.example")
//! );
//! assert_eq!(
//!     config.get("database.port", Fallback::NotFound)?,
//!     json!(5432)
//! );
//!
//! // Absent paths resolve to the caller's fallback.
//! assert_eq!(
//!     config.get("database.timeout", Fallback::Value(json!(30)))?,
//!     json!(30)
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod extract;
pub mod source;

mod configuration;

pub use configuration::{Configuration, ConfigurationBuilder};
pub use extract::{ExtractError, Extractor, Fallback, PathQuery, extract};
pub use source::{ConfigError, Format, Loader, Source, SourceDescriptor};
