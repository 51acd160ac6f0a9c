//! Render adapter: turns catalog data into display descriptions.
//!
//! Nothing here decides what is shown; callers pass in the slice to paint.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::catalog::Catalog;
use super::models::{Book, ANY};
use crate::utils;

/// A book's tile in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub id: String,
    pub image: String,
    pub title: String,
    pub author: String,
}

/// The detail overlay's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetail {
    pub id: String,
    pub image: String,
    /// Backdrop image, blurred by the client
    pub blur_image: String,
    pub title: String,
    /// `"{author} ({year})"`, or just the author without a parseable date
    pub subtitle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

/// State of the "Show more" trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowMoreButton {
    pub label: String,
    pub remaining: usize,
    pub disabled: bool,
}

impl ShowMoreButton {
    pub fn for_remaining(remaining: usize) -> Self {
        Self {
            label: format!("Show more ({remaining})"),
            remaining,
            disabled: remaining == 0,
        }
    }
}

pub fn preview_card(catalog: &Catalog, book: &Book) -> PreviewCard {
    PreviewCard {
        id: book.id.clone(),
        image: book.image.clone(),
        title: book.title.clone(),
        author: author_of(catalog, book).to_string(),
    }
}

pub fn preview_cards(catalog: &Catalog, books: &[Arc<Book>]) -> Vec<PreviewCard> {
    books.iter().map(|book| preview_card(catalog, book)).collect()
}

pub fn book_detail(catalog: &Catalog, book: &Book) -> BookDetail {
    let author = author_of(catalog, book);
    let subtitle = match utils::published_year(&book.published) {
        Some(year) => format!("{author} ({year})"),
        None => author.to_string(),
    };

    BookDetail {
        id: book.id.clone(),
        image: book.image.clone(),
        blur_image: book.image.clone(),
        title: book.title.clone(),
        subtitle,
        description: book.description.clone(),
    }
}

/// Select options for a lookup table: an `any` entry labelled `first_label`,
/// then every entry in table order.
pub fn dropdown_options(table: &IndexMap<String, String>, first_label: &str) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption {
        value: ANY.to_string(),
        label: first_label.to_string(),
    })
    .chain(table.iter().map(|(id, name)| DropdownOption {
        value: id.clone(),
        label: name.clone(),
    }))
    .collect()
}

pub fn author_options(catalog: &Catalog) -> Vec<DropdownOption> {
    dropdown_options(catalog.authors(), "All Authors")
}

pub fn genre_options(catalog: &Catalog) -> Vec<DropdownOption> {
    dropdown_options(catalog.genres(), "All Genres")
}

// Catalogs are validated on load, so the lookup always resolves.
fn author_of<'a>(catalog: &'a Catalog, book: &Book) -> &'a str {
    catalog.author_name(&book.author_id).unwrap_or_default()
}
