//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod book;
pub mod error;
pub mod language;
pub mod prelude;
pub mod query;

// Intentionally curated re-exports for downstream consumers.
pub use book::{Book, Review};
pub use error::{ModelError, Result as ModelResult};
pub use language::Language;
pub use query::{FetchMode, PageRequest, QueryParameters};
