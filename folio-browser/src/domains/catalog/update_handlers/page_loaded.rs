use folio_model::{Book, FetchMode, PageRequest};

use crate::common::Task;
use crate::domains::catalog::{
    CatalogDomain, CatalogMessage, FetchError, FetchGeneration,
    StaleResponsePolicy,
};

/// Apply a finished page request to the list and cursor.
///
/// Under [`StaleResponsePolicy::Discard`] only append outcomes release the
/// append gate, so it always belongs to exactly one append. Under `Apply`
/// any terminal outcome releases it, cold completions included.
pub fn handle_page_loaded(
    domain: &mut CatalogDomain,
    request: PageRequest,
    generation: FetchGeneration,
    result: Result<Vec<Book>, FetchError>,
) -> Task<CatalogMessage> {
    let state = &mut domain.state;
    let policy = state.settings.stale_responses;

    if request.mode == FetchMode::Append
        || policy == StaleResponsePolicy::Apply
    {
        state.loading_more = false;
    }

    let books = match result {
        Ok(books) => books,
        Err(err) => {
            log::error!(
                "[Catalog] Error fetching {} page (offset={}): {}",
                request.mode,
                request.offset,
                err
            );
            return Task::none();
        }
    };

    if generation != state.generation {
        if policy == StaleResponsePolicy::Discard {
            log::warn!(
                "[Catalog] Discarding stale {} page from generation {} \
                 (current {}), {} books",
                request.mode,
                generation,
                state.generation,
                books.len()
            );
            return Task::none();
        }
        log::warn!(
            "[Catalog] Applying stale {} page from generation {} \
             (current {})",
            request.mode,
            generation,
            state.generation
        );
    }

    let received = books.len();
    match request.mode {
        FetchMode::Replace => {
            state.results.replace(books);
            state.offset = request.count;
        }
        FetchMode::Append => {
            state.results.append(books);
            // Advances by the requested size even for short pages; the
            // provider gives no way to tell a short page from the end.
            state.offset += request.count;
        }
    }

    if received < request.count {
        log::debug!(
            "[Catalog] Provider returned {} of {} requested books",
            received,
            request.count
        );
    }

    log::info!(
        "[Catalog] Received {} books ({} page); list length={} offset={}",
        received,
        request.mode,
        state.results.len(),
        state.offset
    );

    Task::none()
}
