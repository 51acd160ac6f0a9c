//! The immutable catalog store: books plus author and genre lookup tables.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use super::models::{Book, Dataset};

/// Dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate book id '{0}'")]
    DuplicateBook(String),

    #[error("book '{book}' references unknown author '{author}'")]
    UnknownAuthor { book: String, author: String },

    #[error("book '{book}' references unknown genre '{genre}'")]
    UnknownGenre { book: String, genre: String },
}

/// Read-only catalog. Every author and genre id referenced by a book resolves.
#[derive(Debug)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
    authors: IndexMap<String, String>,
    genres: IndexMap<String, String>,
}

impl Catalog {
    /// Validate a dataset and freeze it into a catalog.
    pub fn from_dataset(dataset: Dataset) -> Result<Self, CatalogError> {
        let Dataset {
            books,
            authors,
            genres,
        } = dataset;

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
            if !authors.contains_key(&book.author_id) {
                return Err(CatalogError::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author_id.clone(),
                });
            }
            if let Some(genre) = book.genre_ids.iter().find(|g| !genres.contains_key(*g)) {
                return Err(CatalogError::UnknownGenre {
                    book: book.id.clone(),
                    genre: genre.clone(),
                });
            }
        }

        Ok(Self {
            books: books.into_iter().map(Arc::new).collect(),
            authors,
            genres,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::from_dataset(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The dataset shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load from `path` when given, otherwise the bundled dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::bundled()?,
        };
        tracing::info!(
            books = catalog.books.len(),
            authors = catalog.authors.len(),
            genres = catalog.genres.len(),
            source = %path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string()),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Every book, in catalog order.
    pub fn books(&self) -> &[Arc<Book>] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn book(&self, id: &str) -> Option<&Arc<Book>> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Author table, in dataset order.
    pub fn authors(&self) -> &IndexMap<String, String> {
        &self.authors
    }

    pub fn genres(&self) -> &IndexMap<String, String> {
        &self.genres
    }
}
