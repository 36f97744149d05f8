//! Common module containing shared utilities and types
//!
//! This module provides common functionality used across multiple domains

pub mod task;

// Re-export commonly used items
pub use task::Task;
