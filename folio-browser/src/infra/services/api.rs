//! API service trait for the book provider
//!
//! Domains talk to the provider through this trait so tests can swap in
//! scripted implementations.

use async_trait::async_trait;
use folio_model::{Book, PageRequest};
use std::fmt::Debug;

use crate::domains::catalog::FetchError;

/// Read access to the remote book catalog
#[async_trait]
pub trait CatalogService: Send + Sync + Debug {
    /// Fetch one page of books. The provider exposes no total count, so an
    /// empty or short page is the only hint that the catalog ran out.
    async fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<Book>, FetchError>;
}
