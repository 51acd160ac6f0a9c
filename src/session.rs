//! Browsing session state shared by the HTTP handlers.
//!
//! One session models one open page: its booklist, dialogs and theme.
//! Handlers take the lock, run to completion, and release it, so events
//! never interleave.

use std::num::NonZeroUsize;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::Mutex;

use bookshelf_kernel::settings::Settings;

use crate::modules::books::booklist::{Booklist, PageOutcome, SearchOutcome};
use crate::modules::books::catalog::Catalog;
use crate::modules::books::models::FilterCriteria;
use crate::modules::books::preview::{book_detail, BookDetail};
use crate::modules::ui::overlay::{Overlay, Overlays};
use crate::modules::ui::theme::Theme;

pub type SharedSession = Arc<Mutex<Session>>;

#[derive(Debug)]
pub struct Session {
    pub booklist: Booklist,
    pub overlays: Overlays,
    active_book: Option<String>,
    chosen_theme: Option<Theme>,
    preferred_theme: Theme,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>, settings: &Settings) -> anyhow::Result<Self> {
        let page_size = NonZeroUsize::new(settings.catalog.page_size)
            .ok_or_else(|| anyhow!("catalog.page_size must be greater than zero"))?;

        Ok(Self {
            booklist: Booklist::new(catalog, page_size),
            overlays: Overlays::default(),
            active_book: None,
            chosen_theme: None,
            preferred_theme: Theme::from_preference(settings.ui.prefers_dark),
        })
    }

    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.booklist.catalog()
    }

    /// Run a search submitted from the search overlay, then close it.
    pub fn search(&mut self, criteria: FilterCriteria) -> SearchOutcome {
        let outcome = self.booklist.search(criteria);
        self.overlays.close(Overlay::Search);
        outcome
    }

    pub fn show_more(&mut self) -> PageOutcome {
        self.booklist.show_more()
    }

    /// Open the detail overlay for a book; `None` when the id is unknown.
    /// Describe a book without touching overlay state.
    pub fn detail(&self, id: &str) -> Option<BookDetail> {
        let catalog = self.booklist.catalog();
        catalog.book(id).map(|book| book_detail(catalog, book))
    }

    pub fn open_detail(&mut self, id: &str) -> Option<BookDetail> {
        let catalog = Arc::clone(self.booklist.catalog());
        let book = catalog.book(id)?;
        self.active_book = Some(book.id.clone());
        self.overlays.open(Overlay::Detail);
        Some(book_detail(&catalog, book))
    }

    pub fn close_overlay(&mut self, overlay: Overlay) {
        self.overlays.close(overlay);
        if overlay == Overlay::Detail {
            self.active_book = None;
        }
    }

    pub fn active_book(&self) -> Option<&str> {
        self.active_book.as_deref()
    }

    /// Theme in effect: the user's choice, else the client's hinted
    /// preference, else the configured default.
    pub fn theme(&self, prefers_dark_hint: Option<bool>) -> Theme {
        self.chosen_theme
            .or_else(|| prefers_dark_hint.map(Theme::from_preference))
            .unwrap_or(self.preferred_theme)
    }

    /// Apply a settings-form submission, then close the settings overlay.
    pub fn choose_theme(&mut self, theme: Theme) {
        self.chosen_theme = Some(theme);
        self.overlays.close(Overlay::Settings);
        tracing::info!(theme = theme.as_str(), "theme changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::books::catalog::fixtures::catalog_of;

    fn session() -> Session {
        let mut settings = Settings::default();
        settings.catalog.page_size = 10;
        Session::new(Arc::new(catalog_of(25)), &settings).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut settings = Settings::default();
        settings.catalog.page_size = 0;
        assert!(Session::new(Arc::new(catalog_of(3)), &settings).is_err());
    }

    #[test]
    fn search_closes_search_overlay() {
        let mut session = session();
        session.overlays.open(Overlay::Search);
        let outcome = session.search(FilterCriteria::default());
        assert!(!session.overlays.is_open(Overlay::Search));
        assert_eq!(outcome.items.len(), 10);
    }

    #[test]
    fn detail_opens_overlay_and_tracks_book() {
        let mut session = session();
        let detail = session.open_detail("b3").unwrap();
        assert_eq!(detail.title, "Volume 3");
        assert_eq!(detail.subtitle, "Cora Folio (2001)");
        assert!(session.overlays.is_open(Overlay::Detail));
        assert_eq!(session.active_book(), Some("b3"));

        session.close_overlay(Overlay::Detail);
        assert_eq!(session.active_book(), None);
    }

    #[test]
    fn unknown_detail_leaves_state_alone() {
        let mut session = session();
        assert!(session.open_detail("nope").is_none());
        assert!(!session.overlays.is_open(Overlay::Detail));
    }

    #[test]
    fn detail_lookup_does_not_open_overlay() {
        let session = session();
        let detail = session.detail("b3").unwrap();
        assert_eq!(detail.title, "Volume 3");
        assert!(!session.overlays.is_open(Overlay::Detail));
        assert_eq!(session.active_book(), None);
        assert!(session.detail("nope").is_none());
    }

    #[test]
    fn theme_precedence() {
        let mut session = session();
        assert_eq!(session.theme(None), Theme::Day);
        assert_eq!(session.theme(Some(true)), Theme::Night);

        session.overlays.open(Overlay::Settings);
        session.choose_theme(Theme::Day);
        assert_eq!(session.theme(Some(true)), Theme::Day);
        assert!(!session.overlays.is_open(Overlay::Settings));
    }
}
