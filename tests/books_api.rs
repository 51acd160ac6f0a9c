use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bookshelf_kernel::settings::Settings;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    let settings = Settings::default();
    let (registry, _session) = bookshelf_app::app::build_registry(&settings).unwrap();
    bookshelf_http::build_router(&registry, &settings)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn titles(items: &Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn initial_list_shows_first_page() {
    let app = app();
    let (status, body) = send(&app, get("/api/books")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 36);
    assert_eq!(body["total"], 42);
    assert_eq!(body["page_index"], 1);
    assert_eq!(body["empty"], false);
    assert_eq!(body["show_more"]["label"], "Show more (6)");
    assert_eq!(body["show_more"]["disabled"], false);
    assert_eq!(body["criteria"]["author"], "any");
    assert_eq!(body["items"][0]["author"], "Ursula K. Le Guin");
}

#[tokio::test]
async fn show_more_appends_then_stops() {
    let app = app();

    let (status, body) = send(&app, post_form("/api/books/show-more", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 6);
    assert_eq!(body["page_index"], 2);
    assert_eq!(body["show_more"]["remaining"], 0);
    assert_eq!(body["show_more"]["disabled"], true);

    let (_, again) = send(&app, post_form("/api/books/show-more", "")).await;
    assert!(again["items"].as_array().unwrap().is_empty());
    assert_eq!(again["page_index"], 2);

    let (_, list) = send(&app, get("/api/books")).await;
    assert_eq!(list["items"].as_array().unwrap().len(), 42);
}

#[tokio::test]
async fn search_filters_and_rewinds() {
    let app = app();
    send(&app, post_form("/api/books/show-more", "")).await;
    send(&app, post_form("/api/ui/overlays/search/open", "")).await;

    let (status, body) = send(
        &app,
        post_form("/api/books/search", "title=+murder+&author=any&genre=g3"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        titles(&body["items"]),
        vec![
            "Murder on the Orient Express",
            "The Murder of Roger Ackroyd",
            "The ABC Murders",
        ]
    );
    assert_eq!(body["empty"], false);
    assert_eq!(body["show_more"]["disabled"], true);
    assert_eq!(body["effects"], serde_json::json!(["scroll_to_top"]));

    let (_, list) = send(&app, get("/api/books")).await;
    assert_eq!(list["page_index"], 1);
    assert_eq!(list["criteria"]["title"], "murder");
    assert_eq!(list["criteria"]["genre"], "g3");

    let (_, overlays) = send(&app, get("/api/ui/overlays")).await;
    assert_eq!(overlays["open"], serde_json::json!([]));
}

#[tokio::test]
async fn search_with_missing_fields_matches_everything() {
    let app = app();
    let (_, body) = send(&app, post_form("/api/books/search", "")).await;
    assert_eq!(body["total"], 42);
    assert_eq!(body["show_more"]["remaining"], 6);
}

#[tokio::test]
async fn search_without_matches_reports_empty() {
    let app = app();
    let (_, body) = send(&app, post_form("/api/books/search", "title=zzz")).await;
    assert_eq!(body["empty"], true);
    assert_eq!(body["total"], 0);
    assert_eq!(body["show_more"]["label"], "Show more (0)");
}

#[tokio::test]
async fn author_search_for_mary_shelley() {
    let app = app();
    let (_, body) = send(&app, post_form("/api/books/search", "author=a8")).await;
    assert_eq!(
        titles(&body["items"]),
        vec!["Frankenstein", "The Last Man", "Mathilda"]
    );
}

#[tokio::test]
async fn reading_detail_leaves_overlays_closed() {
    let app = app();
    let (status, body) = send(&app, get("/api/books/b040")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Frankenstein");
    assert_eq!(body["subtitle"], "Mary Shelley (1818)");

    let (_, overlays) = send(&app, get("/api/ui/overlays")).await;
    assert_eq!(overlays["open"], serde_json::json!([]));
    assert_eq!(overlays["active_book"], Value::Null);
}

#[tokio::test]
async fn opening_detail_sets_active_book() {
    let app = app();
    let (status, body) = send(&app, post_form("/api/books/b040/open", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Frankenstein");

    let (_, overlays) = send(&app, get("/api/ui/overlays")).await;
    assert_eq!(overlays["open"], serde_json::json!(["detail"]));
    assert_eq!(overlays["active_book"], "b040");

    send(&app, post_form("/api/ui/overlays/detail/close", "")).await;
    let (_, overlays) = send(&app, get("/api/ui/overlays")).await;
    assert_eq!(overlays["active_book"], Value::Null);
}

#[tokio::test]
async fn unknown_book_is_not_found() {
    let app = app();
    let (status, body) = send(&app, get("/api/books/b999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = send(&app, post_form("/api/books/b999/open", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dropdown_options_lead_with_any() {
    let app = app();

    let (_, genres) = send(&app, get("/api/books/genres")).await;
    assert_eq!(genres[0]["value"], "any");
    assert_eq!(genres[0]["label"], "All Genres");
    assert_eq!(genres.as_array().unwrap().len(), 7);

    let (_, authors) = send(&app, get("/api/books/authors")).await;
    assert_eq!(authors[0]["label"], "All Authors");
    assert_eq!(authors[1]["value"], "a1");
    assert_eq!(authors[1]["label"], "Ursula K. Le Guin");
    assert_eq!(authors[8]["value"], "a8");
}

#[tokio::test]
async fn theme_follows_hint_until_chosen() {
    let app = app();

    let request = Request::get("/api/ui/theme")
        .header("Sec-CH-Prefers-Color-Scheme", "\"dark\"")
        .body(Body::empty())
        .unwrap();
    let (_, hinted) = send(&app, request).await;
    assert_eq!(hinted["theme"], "night");
    assert_eq!(hinted["palette"]["--color-dark"], "255, 255, 255");

    send(&app, post_form("/api/ui/overlays/settings/open", "")).await;
    let (status, chosen) = send(&app, post_form("/api/ui/theme", "theme=day")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chosen["theme"], "day");
    assert_eq!(
        chosen["css"],
        "--color-dark: 10, 10, 20; --color-light: 255, 255, 255;"
    );

    let request = Request::get("/api/ui/theme")
        .header("Sec-CH-Prefers-Color-Scheme", "dark")
        .body(Body::empty())
        .unwrap();
    let (_, after) = send(&app, request).await;
    assert_eq!(after["theme"], "day");

    let (_, overlays) = send(&app, get("/api/ui/overlays")).await;
    assert_eq!(overlays["open"], serde_json::json!([]));
}

#[tokio::test]
async fn opening_search_sets_focus() {
    let app = app();
    let (status, body) = send(&app, post_form("/api/ui/overlays/search/open", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["open"], serde_json::json!(["search"]));
    assert_eq!(body["focus"], "search-title");
}

#[tokio::test]
async fn unknown_overlay_is_bad_request() {
    let app = app();
    let (status, body) = send(&app, post_form("/api/ui/overlays/menu/open", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");

    let (status, _) = send(&app, post_form("/api/ui/overlays/detail/open", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_lists_module_paths() {
    let app = app();
    let (_, spec) = send(&app, get("/docs/openapi.json")).await;
    assert!(spec["paths"]["/api/books/search"].is_object());
    assert!(spec["paths"]["/api/books/{id}/open"]["post"].is_object());
    assert!(spec["paths"]["/api/ui/theme"].is_object());
    assert!(spec["components"]["schemas"]["BookDetail"].is_object());
}
