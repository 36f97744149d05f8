//! Testing infrastructure
//!
//! Scripted provider and task helpers shared by unit and integration tests.

pub mod executor;
pub mod mocks;

pub use executor::{drain, resolve_all};
pub use mocks::{MockCatalogService, synthetic_page};
