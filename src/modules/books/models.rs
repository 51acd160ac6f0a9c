use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of the author and genre fields meaning "no constraint".
pub const ANY: &str = "any";

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: String,
    pub title: String,
    /// Key into the author table
    #[serde(rename = "author")]
    pub author_id: String,
    /// Cover image URI
    pub image: String,
    /// Publication date, RFC 3339
    pub published: String,
    pub description: String,
    /// Keys into the genre table
    #[serde(rename = "genres")]
    pub genre_ids: Vec<String>,
}

/// The on-disk shape of a catalog dataset. Lookup tables keep file order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub books: Vec<Book>,
    pub authors: IndexMap<String, String>,
    pub genres: IndexMap<String, String>,
}

/// One dimension of a search: either unconstrained or pinned to an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Constraint {
    #[default]
    Any,
    Is(String),
}

impl Constraint {
    /// `"any"` and a missing field both mean no constraint.
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            None | Some(ANY) => Constraint::Any,
            Some(id) => Constraint::Is(id.to_string()),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Constraint::Any)
    }

    pub fn as_field(&self) -> &str {
        match self {
            Constraint::Any => ANY,
            Constraint::Is(id) => id,
        }
    }
}

/// Criteria from one search-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Trimmed title substring; empty means unconstrained.
    pub title_query: String,
    pub author: Constraint,
    pub genre: Constraint,
}

impl FilterCriteria {
    pub fn new(title: &str, author: Constraint, genre: Constraint) -> Self {
        Self {
            title_query: title.trim().to_string(),
            author,
            genre,
        }
    }

    /// Build criteria from submitted form fields (`title`, `author`, `genre`).
    ///
    /// Missing fields are unconstrained, never an error.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        Self::new(
            fields.get("title").map(String::as_str).unwrap_or_default(),
            Constraint::from_field(fields.get("author").map(String::as_str)),
            Constraint::from_field(fields.get("genre").map(String::as_str)),
        )
    }

    /// True when nothing narrows the catalog.
    pub fn is_unconstrained(&self) -> bool {
        self.title_query.is_empty() && self.author.is_any() && self.genre.is_any()
    }
}
