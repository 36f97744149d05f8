use folio_model::PageRequest;

use super::fetch::start_fetch;
use crate::common::Task;
use crate::domains::catalog::{
    CatalogDomain, CatalogMessage, FetchGeneration, StaleResponsePolicy,
};

/// Accept a near-bottom signal unless an append is already pending.
///
/// Accepted signals close the gate and wait out the settle delay before the
/// append is issued; rejected ones are dropped, not queued.
pub fn handle_scrolled_near_bottom(
    domain: &mut CatalogDomain,
) -> Task<CatalogMessage> {
    let state = &mut domain.state;
    if state.loading_more {
        log::debug!(
            "[Catalog] Near-bottom signal dropped, append already pending"
        );
        return Task::none();
    }

    state.loading_more = true;
    let generation = state.generation;
    let delay = state.settings.settle_delay;

    log::debug!(
        "[Catalog] Near bottom at offset={}, appending after {:?}",
        state.offset,
        delay
    );

    Task::perform(tokio::time::sleep(delay), move |()| {
        CatalogMessage::SettleElapsed { generation }
    })
}

/// Issue the append fetch once the settle delay has passed.
pub fn handle_settle_elapsed(
    domain: &mut CatalogDomain,
    generation: FetchGeneration,
) -> Task<CatalogMessage> {
    let state = &mut domain.state;

    if generation != state.generation
        && state.settings.stale_responses == StaleResponsePolicy::Discard
    {
        state.loading_more = false;
        log::info!(
            "[Catalog] Parameters changed during settle delay \
             (generation {} -> {}), dropping append",
            generation,
            state.generation
        );
        return Task::none();
    }

    let request = PageRequest::append(
        &state.parameters.snapshot(),
        state.settings.append_page_size,
        state.offset,
    );
    start_fetch(domain, request)
}
