//! Search and show-more coordination over one browsing session.

use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::Serialize;

use super::catalog::Catalog;
use super::filter::apply_filters;
use super::models::{Book, FilterCriteria};
use super::pagination::PaginationCursor;
use super::preview::ShowMoreButton;

/// Where the booklist is in handling an event. Filtering and Paging only
/// last for the duration of a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Filtering,
    Paging,
}

/// Side effect the presentation layer should perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEffect {
    ScrollToTop,
}

/// Result of a search: the first page replaces whatever was listed.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub items: Vec<Arc<Book>>,
    pub total: usize,
    pub remaining: usize,
    pub effects: Vec<UiEffect>,
}

impl SearchOutcome {
    /// No book matched; the "no results" message should show.
    pub fn is_empty(&self) -> bool {
        self.total < 1
    }

    pub fn button(&self) -> ShowMoreButton {
        ShowMoreButton::for_remaining(self.remaining)
    }
}

/// Result of show-more: `items` are appended after those already listed.
#[derive(Debug, Clone)]
pub struct PageOutcome {
    pub items: Vec<Arc<Book>>,
    pub page_index: usize,
    pub remaining: usize,
}

impl PageOutcome {
    pub fn button(&self) -> ShowMoreButton {
        ShowMoreButton::for_remaining(self.remaining)
    }
}

/// The current match set and how much of it has been revealed.
#[derive(Debug)]
pub struct Booklist {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    matches: Vec<Arc<Book>>,
    cursor: PaginationCursor,
    phase: Phase,
}

impl Booklist {
    /// Start with the whole catalog matched and the first page revealed.
    pub fn new(catalog: Arc<Catalog>, page_size: NonZeroUsize) -> Self {
        let matches = catalog.books().to_vec();
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            matches,
            cursor: PaginationCursor::new(page_size),
            phase: Phase::Idle,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn matches(&self) -> &[Arc<Book>] {
        &self.matches
    }

    pub fn page_index(&self) -> usize {
        self.cursor.page_index()
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining(self.matches.len())
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Every book listed so far.
    pub fn visible(&self) -> &[Arc<Book>] {
        self.cursor.revealed(&self.matches)
    }

    pub fn button(&self) -> ShowMoreButton {
        ShowMoreButton::for_remaining(self.remaining())
    }

    /// Replace the match set and rewind to the first page.
    pub fn search(&mut self, criteria: FilterCriteria) -> SearchOutcome {
        self.phase = Phase::Filtering;
        tracing::trace!(phase = ?self.phase, "filtering catalog");
        let matches = if criteria.is_unconstrained() {
            self.catalog.books().to_vec()
        } else {
            apply_filters(self.catalog.books(), &criteria)
        };

        self.matches = matches;
        self.criteria = criteria;
        self.cursor.reset();

        let outcome = SearchOutcome {
            items: self.cursor.current_slice(&self.matches).to_vec(),
            total: self.matches.len(),
            remaining: self.remaining(),
            effects: vec![UiEffect::ScrollToTop],
        };
        self.phase = Phase::Idle;

        tracing::debug!(
            title = %self.criteria.title_query,
            author = self.criteria.author.as_field(),
            genre = self.criteria.genre.as_field(),
            total = outcome.total,
            remaining = outcome.remaining,
            "search applied"
        );
        outcome
    }

    /// Reveal the next page. With nothing left this changes nothing and
    /// returns no items.
    pub fn show_more(&mut self) -> PageOutcome {
        if self.remaining() == 0 {
            tracing::debug!(page = self.page_index(), "show more ignored; nothing remaining");
            return PageOutcome {
                items: Vec::new(),
                page_index: self.page_index(),
                remaining: 0,
            };
        }

        self.phase = Phase::Paging;
        tracing::trace!(phase = ?self.phase, page = self.page_index(), "advancing cursor");
        self.cursor.advance();
        let outcome = PageOutcome {
            items: self.cursor.current_slice(&self.matches).to_vec(),
            page_index: self.page_index(),
            remaining: self.remaining(),
        };
        self.phase = Phase::Idle;

        tracing::debug!(
            page = outcome.page_index,
            appended = outcome.items.len(),
            remaining = outcome.remaining,
            "page revealed"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::catalog::fixtures::catalog_of;
    use crate::modules::books::models::Constraint;

    fn booklist(books: usize, page_size: usize) -> Booklist {
        Booklist::new(
            Arc::new(catalog_of(books)),
            NonZeroUsize::new(page_size).unwrap(),
        )
    }

    fn ids(books: &[Arc<Book>]) -> Vec<String> {
        books.iter().map(|b| b.id.clone()).collect()
    }

    fn range(start: usize, end: usize) -> Vec<String> {
        (start..end).map(|i| format!("b{i}")).collect()
    }

    #[test]
    fn initial_load_reveals_first_page() {
        let list = booklist(25, 10);
        assert_eq!(ids(list.visible()), range(0, 10));
        assert_eq!(list.remaining(), 15);
        assert_eq!(list.page_index(), 1);
        assert_eq!(list.phase(), Phase::Idle);
        assert!(!list.button().disabled);
    }

    #[test]
    fn author_search_fits_on_one_page() {
        let mut list = booklist(25, 10);
        list.show_more();

        let outcome = list.search(FilterCriteria::new(
            "",
            Constraint::Is("A1".into()),
            Constraint::Any,
        ));

        assert_eq!(list.page_index(), 1);
        assert_eq!(ids(&outcome.items), vec!["b0", "b10", "b20"]);
        assert_eq!(outcome.remaining, 0);
        assert!(outcome.button().disabled);
        assert!(!outcome.is_empty());
        assert_eq!(outcome.effects, vec![UiEffect::ScrollToTop]);
    }

    #[test]
    fn whitespace_title_search_matches_everything() {
        let mut list = booklist(25, 10);
        let blank = list.search(FilterCriteria::new("  ", Constraint::Any, Constraint::Any));
        let blank_ids = ids(&blank.items);
        let empty = list.search(FilterCriteria::default());
        assert_eq!(blank_ids, ids(&empty.items));
        assert_eq!(blank.remaining, 15);
        assert_eq!(list.matches().len(), 25);
    }

    #[test]
    fn show_more_appends_until_exhausted() {
        let mut list = booklist(25, 10);

        let second = list.show_more();
        assert_eq!(ids(&second.items), range(10, 20));
        assert_eq!(second.remaining, 5);
        assert_eq!(second.button().label, "Show more (5)");

        let third = list.show_more();
        assert_eq!(ids(&third.items), range(20, 25));
        assert_eq!(third.page_index, 3);
        assert_eq!(third.remaining, 0);
        assert!(third.button().disabled);
        assert_eq!(ids(list.visible()), range(0, 25));

        let extra = list.show_more();
        assert!(extra.items.is_empty());
        assert_eq!(extra.page_index, 3);
        assert_eq!(list.page_index(), 3);
    }

    #[test]
    fn search_without_matches_signals_empty() {
        let mut list = booklist(25, 10);
        let outcome = list.search(FilterCriteria::new(
            "no such volume",
            Constraint::Any,
            Constraint::Any,
        ));
        assert!(outcome.is_empty());
        assert!(outcome.items.is_empty());
        assert!(list.is_empty());
        assert_eq!(outcome.remaining, 0);
        assert!(list.show_more().items.is_empty());
    }

    #[test]
    fn every_search_rewinds_the_cursor() {
        let mut list = booklist(25, 10);
        list.show_more();
        list.show_more();
        assert_eq!(list.page_index(), 3);

        let outcome = list.search(FilterCriteria::default());
        assert_eq!(list.page_index(), 1);
        assert_eq!(ids(&outcome.items), range(0, 10));
        assert_eq!(outcome.remaining, 15);
    }

    #[test]
    fn remaining_tracks_the_live_match_set() {
        let mut list = booklist(25, 10);
        for _ in 0..4 {
            let expected = 25usize.saturating_sub(list.page_index() * 10);
            assert_eq!(list.remaining(), expected);
            list.show_more();
        }
        list.search(FilterCriteria::new("", Constraint::Any, Constraint::Is("G2".into())));
        assert_eq!(list.matches().len(), 12);
        assert_eq!(list.remaining(), 2);
    }

    #[test]
    fn unconstrained_search_restores_catalog_order() {
        let mut list = booklist(25, 10);
        list.search(FilterCriteria::new("", Constraint::Is("A3".into()), Constraint::Any));
        assert_eq!(list.matches().len(), 12);
        assert_eq!(list.phase(), Phase::Idle);

        list.search(FilterCriteria::default());
        assert_eq!(ids(list.matches()), ids(list.catalog().books()));
        list.show_more();
        assert_eq!(list.phase(), Phase::Idle);
    }
}
