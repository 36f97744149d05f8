// Centralized service abstractions

pub mod api;

pub use api::CatalogService;
