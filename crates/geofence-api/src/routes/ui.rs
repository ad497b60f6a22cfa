//! # Map UI Route
//!
//! Serves the interactive map page at `/`. The page is static HTML embedded
//! at compile time; it talks to the JSON endpoints from the browser.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const MAP_PAGE: &str = include_str!("../../assets/map.html");

/// Assemble the UI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(map_page))
}

/// GET / — the map page.
async fn map_page() -> Html<&'static str> {
    Html(MAP_PAGE)
}
