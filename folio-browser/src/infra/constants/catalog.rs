//! Catalog fetching constants
//!
//! Defaults for the fetch controller. Every value here can be overridden
//! through [`crate::infra::config::Config`].

/// Page sizing for cold and incremental loads
pub mod paging {
    /// Records requested when the parameter set changes
    pub const COLD_PAGE_SIZE: usize = 20;
    /// Records requested per scroll-triggered append
    pub const APPEND_PAGE_SIZE: usize = 10;
    /// Wait between accepting a near-bottom signal and issuing the append.
    /// Throttles bursts of scroll events and keeps the loading indicator
    /// on screen long enough to be seen.
    pub const SETTLE_DELAY_MS: u64 = 1000;
}

/// Remote book provider
pub mod provider {
    use std::time::Duration;

    pub const DEFAULT_SERVER_URL: &str =
        "https://task5-backend-api.onrender.com";
    pub const BOOKS_PATH: &str = "books";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Viewport proximity detection
pub mod scroll {
    /// Distance from the document end (in viewport units) that counts as
    /// "near bottom"
    pub const NEAR_BOTTOM_THRESHOLD: f32 = 50.0;
}

/// Query parameter controls
pub mod parameters {
    /// Upper bound (exclusive) for randomly drawn seeds
    pub const RANDOM_SEED_RANGE: i64 = 1_000_000;
}
