use async_trait::async_trait;
use folio_model::{Book, PageRequest};
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::domains::catalog::FetchError;
use crate::infra::constants::provider::{BOOKS_PATH, REQUEST_TIMEOUT};
use crate::infra::services::api::CatalogService;

/// HTTP client for the book provider
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    books_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        // Many users will provide "localhost:3000", which reqwest rejects.
        // Add http:// if missing and trim a trailing slash so paths join
        // predictably.
        fn normalize(raw: String) -> String {
            let trimmed = raw.trim().trim_end_matches('/').to_string();
            let with_scheme = if trimmed.starts_with("http://")
                || trimmed.starts_with("https://")
            {
                trimmed
            } else {
                format!("http://{}", trimmed)
            };
            if with_scheme != raw {
                warn!(
                    "[ApiClient] Normalized base URL from '{}' to '{}'",
                    raw, with_scheme
                );
            }
            with_scheme
        }

        let base_url = normalize(base_url.into());
        let books_url =
            Url::parse(&format!("{}/", base_url))?.join(BOOKS_PATH)?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::from)?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self {
            client,
            base_url,
            books_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the books endpoint
    pub fn books_url(&self) -> &Url {
        &self.books_url
    }
}

#[async_trait]
impl CatalogService for ApiClient {
    async fn fetch_page(
        &self,
        request: &PageRequest,
    ) -> Result<Vec<Book>, FetchError> {
        debug!(
            "[ApiClient] GET {} count={} offset={}",
            self.books_url, request.count, request.offset
        );

        let response = self
            .client
            .get(self.books_url.clone())
            .query(request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                if status == StatusCode::NO_CONTENT {
                    return Err(FetchError::Decode(
                        "Empty response from server (204 No Content)"
                            .to_string(),
                    ));
                }
                // Read the body first so a transport failure mid-body is not
                // reported as malformed JSON.
                let body = response.bytes().await?;
                let books: Vec<Book> = serde_json::from_slice(&body)?;
                Ok(books)
            }
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(FetchError::Transport(format!(
                    "Request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_missing_scheme_and_trailing_slash() {
        let client = ApiClient::new("localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.books_url().as_str(), "http://localhost:3000/books");
    }

    #[test]
    fn keeps_path_prefix_when_joining() {
        let client = ApiClient::new("https://example.org/api").unwrap();
        assert_eq!(
            client.books_url().as_str(),
            "https://example.org/api/books"
        );
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = ApiClient::new("http://exa mple.org").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
