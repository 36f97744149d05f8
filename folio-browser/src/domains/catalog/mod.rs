//! Catalog domain - parameter-driven book listing with incremental loading
//!
//! The domain owns everything the fetch controller touches: the query
//! parameters, the fetched list, the offset cursor, the append gate and the
//! expanded row. All of it changes only through [`update::update`].

pub mod error;
pub mod messages;
pub mod sentinel;
pub mod types;
pub mod update;
pub mod update_handlers;

use folio_model::QueryParameters;
use std::sync::Arc;

use crate::infra::services::api::CatalogService;

pub use self::error::FetchError;
pub use self::messages::CatalogMessage;
pub use self::sentinel::{ScrollSentinel, SentinelHandle, ViewportMetrics};
pub use self::types::{
    CatalogState, FetchGeneration, FetchSettings, ParameterStore,
    ParametersChanged, ResultList, SelectionModel, StaleResponsePolicy,
};
pub use self::update::update;

/// Catalog domain state container
#[derive(Debug)]
pub struct CatalogDomain {
    /// Controller state
    pub state: CatalogState,
    /// Provider used for cold and append fetches
    pub service: Arc<dyn CatalogService>,
}

impl CatalogDomain {
    pub fn new(
        service: Arc<dyn CatalogService>,
        settings: FetchSettings,
    ) -> Self {
        Self::with_parameters(service, QueryParameters::default(), settings)
    }

    pub fn with_parameters(
        service: Arc<dyn CatalogService>,
        params: QueryParameters,
        settings: FetchSettings,
    ) -> Self {
        Self {
            state: CatalogState::new(params, settings),
            service,
        }
    }
}
