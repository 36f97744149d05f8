//! Constants module for centralized configuration values

pub mod catalog;

// Re-export commonly used items
pub use catalog::{paging, parameters, provider, scroll};
