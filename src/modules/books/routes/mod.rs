//! HTTP handlers for the books module.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Form, Json, Router,
};
use bookshelf_http::error::AppError;
use serde::Serialize;

use super::booklist::UiEffect;
use super::models::FilterCriteria;
use super::preview::{self, BookDetail, DropdownOption, PreviewCard, ShowMoreButton};
use crate::session::SharedSession;

/// The list as currently painted.
#[derive(Debug, Serialize)]
pub struct ListView {
    pub items: Vec<PreviewCard>,
    pub total: usize,
    pub page_index: usize,
    pub empty: bool,
    pub show_more: ShowMoreButton,
    pub criteria: CriteriaView,
}

#[derive(Debug, Serialize)]
pub struct CriteriaView {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl From<&FilterCriteria> for CriteriaView {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            title: criteria.title_query.clone(),
            author: criteria.author.as_field().to_string(),
            genre: criteria.genre.as_field().to_string(),
        }
    }
}

/// A search replaces the list with `items`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub items: Vec<PreviewCard>,
    pub total: usize,
    pub empty: bool,
    pub show_more: ShowMoreButton,
    pub effects: Vec<UiEffect>,
}

/// Show-more appends `items` to the list.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub items: Vec<PreviewCard>,
    pub page_index: usize,
    pub show_more: ShowMoreButton,
}

pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/", get(list_books))
        .route("/health", get(health_check))
        .route("/search", post(search_books))
        .route("/show-more", post(show_more))
        .route("/authors", get(list_authors))
        .route("/genres", get(list_genres))
        .route("/{id}", get(get_book))
        .route("/{id}/open", post(open_book))
        .with_state(session)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}

async fn list_books(State(session): State<SharedSession>) -> Json<ListView> {
    let session = session.lock().await;
    let booklist = &session.booklist;

    Json(ListView {
        items: preview::preview_cards(booklist.catalog(), booklist.visible()),
        total: booklist.matches().len(),
        page_index: booklist.page_index(),
        empty: booklist.is_empty(),
        show_more: booklist.button(),
        criteria: booklist.criteria().into(),
    })
}

async fn search_books(
    State(session): State<SharedSession>,
    Form(fields): Form<HashMap<String, String>>,
) -> Json<SearchResponse> {
    let criteria = FilterCriteria::from_form(&fields);
    let mut session = session.lock().await;
    let outcome = session.search(criteria);

    Json(SearchResponse {
        items: preview::preview_cards(session.catalog(), &outcome.items),
        total: outcome.total,
        empty: outcome.is_empty(),
        show_more: outcome.button(),
        effects: outcome.effects,
    })
}

async fn show_more(State(session): State<SharedSession>) -> Json<PageResponse> {
    let mut session = session.lock().await;
    let outcome = session.show_more();

    Json(PageResponse {
        items: preview::preview_cards(session.catalog(), &outcome.items),
        page_index: outcome.page_index,
        show_more: outcome.button(),
    })
}

async fn list_authors(State(session): State<SharedSession>) -> Json<Vec<DropdownOption>> {
    let session = session.lock().await;
    Json(preview::author_options(session.catalog()))
}

async fn list_genres(State(session): State<SharedSession>) -> Json<Vec<DropdownOption>> {
    let session = session.lock().await;
    Json(preview::genre_options(session.catalog()))
}

async fn get_book(
    State(session): State<SharedSession>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail>, AppError> {
    let session = session.lock().await;
    session.detail(&id).map(Json).ok_or_else(|| unknown_book(&id))
}

async fn open_book(
    State(session): State<SharedSession>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail>, AppError> {
    let mut session = session.lock().await;
    session.open_detail(&id).map(Json).ok_or_else(|| unknown_book(&id))
}

fn unknown_book(id: &str) -> AppError {
    AppError::not_found(format!("no book with id '{id}'"))
}
