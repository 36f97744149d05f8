use folio_model::PageRequest;

use super::fetch::start_fetch;
use crate::common::Task;
use crate::domains::catalog::{
    CatalogDomain, CatalogMessage, ParametersChanged,
};

/// Route the outcome of a parameter mutator. Writes that left the set
/// unchanged do not refetch.
pub fn handle_parameter_edit(
    domain: &mut CatalogDomain,
    change: Option<ParametersChanged>,
) -> Task<CatalogMessage> {
    match change {
        Some(change) => handle_parameters_changed(domain, change),
        None => {
            log::debug!("[Catalog] Parameter write left the set unchanged");
            Task::none()
        }
    }
}

/// Invalidate the current result set and cold fetch the new one.
pub fn handle_parameters_changed(
    domain: &mut CatalogDomain,
    change: ParametersChanged,
) -> Task<CatalogMessage> {
    log::info!(
        "[Catalog] Parameters changed ({}), resetting books and offset",
        change.params
    );
    reset_and_fetch(domain)
}

/// First load for the parameters the domain was created with.
pub fn handle_initialize(domain: &mut CatalogDomain) -> Task<CatalogMessage> {
    log::info!(
        "[Catalog] Initial load ({})",
        domain.state.parameters.snapshot()
    );
    reset_and_fetch(domain)
}

fn reset_and_fetch(domain: &mut CatalogDomain) -> Task<CatalogMessage> {
    let state = &mut domain.state;
    state.generation = state.generation.next();
    state.results.clear();
    state.offset = 0;

    let request = PageRequest::cold(
        &state.parameters.snapshot(),
        state.settings.cold_page_size,
    );
    start_fetch(domain, request)
}
