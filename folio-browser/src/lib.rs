//! Folio Browser library
//!
//! This crate contains the catalog browser's library surfaces used by the
//! executable in `src/main.rs`: the catalog domain (fetch controller,
//! parameters, selection, scroll sentinel), the provider client and the
//! runtime that drives them.
//!
//! Notes
//! - Public items are subject to change while the domain stabilizes.
//! - The library is exposed mainly to enable testing and internal reuse.

pub mod app;
/// Shared task type used by domain updates
pub mod common;
pub mod domains;
pub mod infra;
pub mod view;
