use folio_model::PageRequest;
use std::sync::Arc;

use crate::common::Task;
use crate::domains::catalog::{CatalogDomain, CatalogMessage};

/// Issue `request` against the provider, tagged with the current generation.
pub fn start_fetch(
    domain: &CatalogDomain,
    request: PageRequest,
) -> Task<CatalogMessage> {
    let generation = domain.state.generation;

    log::info!(
        "[Catalog] Fetching {} page: {} count={} offset={} generation={}",
        request.mode,
        request.parameters(),
        request.count,
        request.offset,
        generation
    );

    let service = Arc::clone(&domain.service);
    Task::perform(
        async move { service.fetch_page(&request).await },
        move |result| CatalogMessage::PageLoaded {
            request,
            generation,
            result,
        },
    )
}
