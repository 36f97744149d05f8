//! Domain modules
//!
//! Each domain owns its state and exposes an `update` function that maps a
//! message onto state changes plus follow-up tasks.

pub mod catalog;
