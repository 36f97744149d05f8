//! Catalog domain update logic

use super::CatalogDomain;
use super::messages::CatalogMessage;
use super::update_handlers::{page_loaded, parameters, scroll};
use crate::common::Task;

pub fn update(
    domain: &mut CatalogDomain,
    message: CatalogMessage,
) -> Task<CatalogMessage> {
    log::trace!("[Catalog] update: {}", message.as_str());

    match message {
        CatalogMessage::Initialize => parameters::handle_initialize(domain),

        CatalogMessage::LanguageSelected(language) => {
            let change = domain.state.parameters.set_language(language);
            parameters::handle_parameter_edit(domain, change)
        }

        CatalogMessage::SeedEntered(seed) => {
            let change = domain.state.parameters.set_seed(seed);
            parameters::handle_parameter_edit(domain, change)
        }

        CatalogMessage::RandomizeSeed => {
            let change =
                domain.state.parameters.randomize_seed(&mut rand::rng());
            parameters::handle_parameter_edit(domain, change)
        }

        CatalogMessage::LikesChanged(likes) => {
            let change = domain.state.parameters.set_likes(likes);
            parameters::handle_parameter_edit(domain, change)
        }

        CatalogMessage::ReviewsChanged(reviews) => {
            let change = domain.state.parameters.set_reviews(reviews);
            parameters::handle_parameter_edit(domain, change)
        }

        CatalogMessage::ScrolledNearBottom => {
            scroll::handle_scrolled_near_bottom(domain)
        }

        CatalogMessage::SettleElapsed { generation } => {
            scroll::handle_settle_elapsed(domain, generation)
        }

        CatalogMessage::PageLoaded {
            request,
            generation,
            result,
        } => page_loaded::handle_page_loaded(domain, request, generation, result),

        CatalogMessage::ToggleExpanded(index) => {
            domain.state.selection.toggle(index);
            log::debug!(
                "[Catalog] Expanded row is now {:?}",
                domain.state.selection.expanded()
            );
            Task::none()
        }
    }
}
