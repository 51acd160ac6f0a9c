//! Filter engine: narrows the catalog to the books matching a search.

use std::sync::Arc;

use super::models::{Book, Constraint, FilterCriteria};

/// Books matching `criteria`, in catalog order.
///
/// A book matches when it carries the requested genre, its title contains the
/// query case-insensitively, and it is by the requested author. Unconstrained
/// dimensions always match. An empty result is a normal outcome.
pub fn apply_filters(catalog: &[Arc<Book>], criteria: &FilterCriteria) -> Vec<Arc<Book>> {
    let query = criteria.title_query.trim().to_lowercase();

    catalog
        .iter()
        .filter(|book| {
            genre_matches(book, &criteria.genre)
                && title_matches(book, &query)
                && author_matches(book, &criteria.author)
        })
        .cloned()
        .collect()
}

fn genre_matches(book: &Book, genre: &Constraint) -> bool {
    match genre {
        Constraint::Any => true,
        Constraint::Is(id) => book.genre_ids.iter().any(|g| g == id),
    }
}

/// `query` is already trimmed and lower-cased.
fn title_matches(book: &Book, query: &str) -> bool {
    query.is_empty() || book.title.to_lowercase().contains(query)
}

fn author_matches(book: &Book, author: &Constraint) -> bool {
    match author {
        Constraint::Any => true,
        Constraint::Is(id) => &book.author_id == id,
    }
}
