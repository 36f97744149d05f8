//! Catalog domain messages

use folio_model::{Book, Language, PageRequest};

use super::error::FetchError;
use super::types::FetchGeneration;

/// Catalog domain messages
#[derive(Clone, Debug)]
pub enum CatalogMessage {
    // Lifecycle
    /// Issue the first cold fetch for the initial parameters
    Initialize,

    // Parameter controls
    /// Locale selector changed
    LanguageSelected(Language),
    /// Seed field edited
    SeedEntered(i64),
    /// Shuffle button pressed
    RandomizeSeed,
    /// Likes slider moved
    LikesChanged(f32),
    /// Review count field edited
    ReviewsChanged(f32),

    // Scrolling
    /// Viewport reached the end of the list
    ScrolledNearBottom,
    /// Settle delay for an accepted near-bottom signal has passed
    SettleElapsed { generation: FetchGeneration },

    // Internal events
    /// A page request finished, successfully or not
    PageLoaded {
        request: PageRequest,
        generation: FetchGeneration,
        result: Result<Vec<Book>, FetchError>,
    },

    // Rows
    /// Row clicked
    ToggleExpanded(u64),
}

impl CatalogMessage {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => "Initialize",
            Self::LanguageSelected(_) => "LanguageSelected",
            Self::SeedEntered(_) => "SeedEntered",
            Self::RandomizeSeed => "RandomizeSeed",
            Self::LikesChanged(_) => "LikesChanged",
            Self::ReviewsChanged(_) => "ReviewsChanged",
            Self::ScrolledNearBottom => "ScrolledNearBottom",
            Self::SettleElapsed { .. } => "SettleElapsed",
            Self::PageLoaded { .. } => "PageLoaded",
            Self::ToggleExpanded(_) => "ToggleExpanded",
        }
    }
}
