//! Scripted book provider for tests

use async_trait::async_trait;
use folio_model::{Book, PageRequest, Review};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domains::catalog::FetchError;
use crate::infra::services::api::CatalogService;

/// Deterministic page for `request`, at most `limit` books long.
///
/// Indices continue from the request offset, so consecutive well-formed
/// pages never repeat an index.
pub fn synthetic_page(request: &PageRequest, limit: Option<usize>) -> Vec<Book> {
    let count = limit.map_or(request.count, |limit| limit.min(request.count));
    (0..count)
        .map(|i| {
            let index = (request.offset + i + 1) as u64;
            Book {
                index,
                isbn: format!(
                    "978-{}-{}-{:05}",
                    request.seed, request.language, index
                ),
                title: format!("Book {index}"),
                author: format!("Author {}", index % 7),
                publisher: format!("Press {}", index % 3),
                cover_image: format!("https://covers.invalid/{index}.png"),
                likes: (request.likes.max(0.0) as u32) + (index % 2) as u32,
                reviews: (0..(request.reviews.max(0.0) as usize))
                    .map(|r| Review {
                        text: format!("Review {r} of book {index}"),
                        reviewer: format!("Reader {r}"),
                        company: "Acme".to_string(),
                    })
                    .collect(),
            }
        })
        .collect()
}

#[derive(Debug, Default)]
struct Script {
    requests: Vec<PageRequest>,
    failures: VecDeque<FetchError>,
    page_limit: Option<usize>,
}

/// [`CatalogService`] that records every request and answers with
/// [`synthetic_page`] unless a failure has been queued.
#[derive(Debug, Default)]
pub struct MockCatalogService {
    script: Mutex<Script>,
}

impl MockCatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next request with `error`
    pub fn fail_next(&self, error: FetchError) {
        self.script().failures.push_back(error);
    }

    /// Answer with at most `limit` books per page from now on
    pub fn limit_pages_to(&self, limit: usize) {
        self.script().page_limit = Some(limit);
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.script().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script().requests.len()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<Book>, FetchError> {
        let mut script = self.script();
        script.requests.push(*request);
        if let Some(error) = script.failures.pop_front() {
            return Err(error);
        }
        Ok(synthetic_page(request, script.page_limit))
    }
}
