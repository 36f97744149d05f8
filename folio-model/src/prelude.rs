//! Browser focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in folio-browser or other presentation layers.

pub use super::book::{Book, Review};
pub use super::error::ModelError;
pub use super::language::Language;
pub use super::query::{FetchMode, PageRequest, QueryParameters};
