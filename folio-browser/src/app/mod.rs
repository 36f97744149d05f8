pub mod bootstrap;
pub mod runtime;

pub use bootstrap::AppConfig;
pub use runtime::CatalogRuntime;
