//! Catalog domain types and state management

use folio_model::{Book, Language, QueryParameters};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::infra::constants::{paging, parameters};

/// Emitted by a [`ParameterStore`] mutator when the result-set identity
/// actually changed. The fetch controller consumes it exactly once.
#[must_use = "a parameter change must be handed to the fetch controller"]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametersChanged {
    pub params: QueryParameters,
}

/// Holds the query parameters the current result set was built for.
///
/// Bounds on likes and reviews are a presentation concern and are not
/// checked here.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: QueryParameters,
}

impl ParameterStore {
    pub fn new(params: QueryParameters) -> Self {
        Self { params }
    }

    /// Read snapshot of the current parameters
    pub fn snapshot(&self) -> QueryParameters {
        self.params
    }

    pub fn set_language(
        &mut self,
        language: Language,
    ) -> Option<ParametersChanged> {
        if self.params.language == language {
            return None;
        }
        self.params.language = language;
        Some(self.changed())
    }

    pub fn set_seed(&mut self, seed: i64) -> Option<ParametersChanged> {
        if self.params.seed == seed {
            return None;
        }
        self.params.seed = seed;
        Some(self.changed())
    }

    /// Draw a fresh seed from `0..RANDOM_SEED_RANGE`
    pub fn randomize_seed<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Option<ParametersChanged> {
        let seed = rng.random_range(0..parameters::RANDOM_SEED_RANGE);
        self.set_seed(seed)
    }

    pub fn set_likes(&mut self, likes: f32) -> Option<ParametersChanged> {
        // Bitwise comparison so a NaN write is still seen as a change once
        if self.params.likes.to_bits() == likes.to_bits() {
            return None;
        }
        self.params.likes = likes;
        Some(self.changed())
    }

    pub fn set_reviews(&mut self, reviews: f32) -> Option<ParametersChanged> {
        if self.params.reviews.to_bits() == reviews.to_bits() {
            return None;
        }
        self.params.reviews = reviews;
        Some(self.changed())
    }

    fn changed(&self) -> ParametersChanged {
        ParametersChanged {
            params: self.params,
        }
    }
}

/// Ordered books fetched for the current parameter set.
///
/// No deduplication: whatever the provider returns is kept as is.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    books: Vec<Book>,
}

impl ResultList {
    pub fn replace(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    pub fn append(&mut self, books: Vec<Book>) {
        self.books.extend(books);
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }

    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look a book up by its provider index
    pub fn find_by_index(&self, index: u64) -> Option<&Book> {
        self.books.iter().find(|book| book.index == index)
    }
}

impl<'a> IntoIterator for &'a ResultList {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Which single book, if any, is expanded.
///
/// Keyed on [`Book::index`]; a selection pointing at a book that is no
/// longer listed simply renders nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionModel {
    expanded: Option<u64>,
}

impl SelectionModel {
    /// Collapse `index` if it is expanded, otherwise expand only `index`
    pub fn toggle(&mut self, index: u64) {
        self.expanded = match self.expanded {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub fn is_expanded(&self, index: u64) -> bool {
        self.expanded == Some(index)
    }

    pub fn expanded(&self) -> Option<u64> {
        self.expanded
    }

    pub fn clear(&mut self) {
        self.expanded = None;
    }
}

/// Identity of the parameter set a request was issued under.
///
/// Bumped on every parameter change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchGeneration(u64);

impl FetchGeneration {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FetchGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to do with a response that arrives after the parameters changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Drop responses and pending appends from older generations.
    #[default]
    Discard,
    /// Apply every response as it lands; the last one to resolve wins and
    /// stale appends land on top of the newer list.
    Apply,
}

/// Tunables for the fetch controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchSettings {
    pub cold_page_size: usize,
    pub append_page_size: usize,
    pub settle_delay: Duration,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            cold_page_size: paging::COLD_PAGE_SIZE,
            append_page_size: paging::APPEND_PAGE_SIZE,
            settle_delay: Duration::from_millis(paging::SETTLE_DELAY_MS),
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

/// Main catalog domain state
///
/// The result list, offset and loading flag are private: only the update
/// handlers in this domain mutate them.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// Query parameters for the current result set
    pub parameters: ParameterStore,
    /// Expanded row
    pub selection: SelectionModel,
    /// Controller tunables
    pub settings: FetchSettings,
    pub(super) results: ResultList,
    pub(super) offset: usize,
    pub(super) loading_more: bool,
    pub(super) generation: FetchGeneration,
}

impl CatalogState {
    pub fn new(params: QueryParameters, settings: FetchSettings) -> Self {
        Self {
            parameters: ParameterStore::new(params),
            settings,
            ..Self::default()
        }
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    /// Records already fetched for the current parameters; the next append
    /// starts here
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// True while an append is settling or in flight
    pub fn is_loading_more(&self) -> bool {
        self.loading_more
    }

    pub fn generation(&self) -> FetchGeneration {
        self.generation
    }

    /// The expanded book, if it is still part of the list
    pub fn expanded_book(&self) -> Option<&Book> {
        self.selection
            .expanded()
            .and_then(|index| self.results.find_by_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn book(index: u64) -> Book {
        Book {
            index,
            isbn: format!("isbn-{index}"),
            title: format!("Title {index}"),
            author: "Author".into(),
            publisher: "Publisher".into(),
            cover_image: String::new(),
            likes: 0,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn toggle_same_index_twice_clears_selection() {
        let mut selection = SelectionModel::default();
        selection.toggle(3);
        assert!(selection.is_expanded(3));
        selection.toggle(3);
        assert_eq!(selection.expanded(), None);
    }

    #[test]
    fn toggle_other_index_replaces_selection() {
        let mut selection = SelectionModel::default();
        selection.toggle(3);
        selection.toggle(9);
        assert_eq!(selection.expanded(), Some(9));
        assert!(!selection.is_expanded(3));
    }

    #[test]
    fn result_list_append_keeps_order() {
        let mut list = ResultList::default();
        list.replace(vec![book(1), book(2)]);
        list.append(vec![book(3)]);
        let indices: Vec<u64> = list.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);

        list.replace(vec![book(8)]);
        assert_eq!(list.len(), 1);
        assert!(list.find_by_index(1).is_none());
    }

    #[test]
    fn result_list_does_not_deduplicate() {
        let mut list = ResultList::default();
        list.append(vec![book(1)]);
        list.append(vec![book(1)]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn parameter_store_reports_only_real_changes() {
        let mut store = ParameterStore::default();
        assert!(store.set_seed(42).is_none());

        let change = store.set_seed(7).expect("seed changed");
        assert_eq!(change.params.seed, 7);
        assert_eq!(store.snapshot().seed, 7);

        assert!(store.set_language(Language::EnUs).is_none());
        assert!(store.set_language(Language::DeDe).is_some());
        assert!(store.set_likes(5.0).is_none());
        assert!(store.set_likes(7.5).is_some());
        assert!(store.set_reviews(0.5).is_some());
    }

    #[test]
    fn parameter_store_accepts_any_seed_and_unbounded_likes() {
        let mut store = ParameterStore::default();
        assert!(store.set_seed(i64::MIN).is_some());
        assert!(store.set_likes(42.0).is_some());
        assert_eq!(store.snapshot().likes, 42.0);
    }

    #[test]
    fn randomized_seed_stays_in_range() {
        let mut store = ParameterStore::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..32 {
            let _ = store.randomize_seed(&mut rng);
            let seed = store.snapshot().seed;
            assert!((0..parameters::RANDOM_SEED_RANGE).contains(&seed));
        }
    }

    #[test]
    fn expanded_book_is_inert_once_removed() {
        let mut state = CatalogState::default();
        state.results.replace(vec![book(1), book(2)]);
        state.selection.toggle(2);
        assert_eq!(state.expanded_book().map(|b| b.index), Some(2));

        state.results.replace(vec![book(5)]);
        assert!(state.expanded_book().is_none());
        assert_eq!(state.selection.expanded(), Some(2));
    }
}
