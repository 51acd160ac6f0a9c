//! HTTP handlers for theme and overlay state.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Form, Json, Router,
};
use bookshelf_http::error::AppError;
use serde::Serialize;

use super::overlay::{Overlay, OverlayError};
use super::theme::{self, Palette, Theme};
use crate::session::{Session, SharedSession};

const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

#[derive(Debug, Serialize)]
pub struct ThemeView {
    pub theme: Theme,
    pub palette: Palette,
    /// Ready-made inline style for the document root
    pub css: String,
}

impl ThemeView {
    fn new(theme: Theme) -> Self {
        let palette = theme.palette();
        Self {
            theme,
            css: palette.to_css(),
            palette,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OverlaysView {
    pub open: Vec<Overlay>,
    pub focus: Option<&'static str>,
    pub active_book: Option<String>,
}

impl From<&Session> for OverlaysView {
    fn from(session: &Session) -> Self {
        Self {
            open: session.overlays.open_overlays().collect(),
            focus: session.overlays.focus(),
            active_book: session.active_book().map(str::to_string),
        }
    }
}

impl From<OverlayError> for AppError {
    fn from(err: OverlayError) -> Self {
        AppError::bad_request(err.to_string())
    }
}

pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/theme", get(get_theme).post(set_theme))
        .route("/overlays", get(list_overlays))
        .route("/overlays/{name}/open", post(open_overlay))
        .route("/overlays/{name}/close", post(close_overlay))
        .with_state(session)
}

fn prefers_dark(headers: &HeaderMap) -> Option<bool> {
    headers
        .get(COLOR_SCHEME_HINT)
        .and_then(|value| value.to_str().ok())
        .and_then(theme::prefers_dark_hint)
}

async fn get_theme(State(session): State<SharedSession>, headers: HeaderMap) -> Json<ThemeView> {
    let session = session.lock().await;
    Json(ThemeView::new(session.theme(prefers_dark(&headers))))
}

async fn set_theme(
    State(session): State<SharedSession>,
    Form(fields): Form<HashMap<String, String>>,
) -> Json<ThemeView> {
    let theme = Theme::from_form(&fields);
    let mut session = session.lock().await;
    session.choose_theme(theme);
    Json(ThemeView::new(theme))
}

async fn list_overlays(State(session): State<SharedSession>) -> Json<OverlaysView> {
    let session = session.lock().await;
    Json(OverlaysView::from(&*session))
}

async fn open_overlay(
    State(session): State<SharedSession>,
    Path(name): Path<String>,
) -> Result<Json<OverlaysView>, AppError> {
    let overlay: Overlay = name.parse()?;
    if overlay == Overlay::Detail {
        return Err(AppError::bad_request(
            "the detail overlay opens by selecting a book",
        ));
    }

    let mut session = session.lock().await;
    session.overlays.open(overlay);
    Ok(Json(OverlaysView::from(&*session)))
}

async fn close_overlay(
    State(session): State<SharedSession>,
    Path(name): Path<String>,
) -> Result<Json<OverlaysView>, AppError> {
    let overlay: Overlay = name.parse()?;
    let mut session = session.lock().await;
    session.close_overlay(overlay);
    Ok(Json(OverlaysView::from(&*session)))
}
