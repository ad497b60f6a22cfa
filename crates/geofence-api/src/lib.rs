//! # geofence-api — Axum HTTP Layer for the Geofence Service
//!
//! Three JSON endpoints over one process-wide geofence, plus a map page:
//!
//! | Route                  | Module               | Behavior                       |
//! |------------------------|----------------------|--------------------------------|
//! | `GET  /`               | [`routes::ui`]       | Interactive map page           |
//! | `POST /set_geofence`   | [`routes::geofence`] | Replace the stored fence       |
//! | `GET  /get_geofence`   | [`routes::geofence`] | Return the stored vertex ring  |
//! | `POST /check_location` | [`routes::geofence`] | Point-in-polygon containment   |
//! | `GET  /openapi.json`   | [`openapi`]          | OpenAPI spec                   |
//! | `GET  /health/*`       | here                 | Liveness / readiness probes    |
//!
//! No business logic in route handlers — geometry and state decisions live
//! in `geofence-core`. All errors map to `{"error": ...}` bodies via
//! [`AppError`].

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use crate::error::AppError;
pub use crate::state::{AppConfig, AppState};

/// Assemble the full application router.
///
/// Body size limit: 2 MiB — a fence ring of tens of thousands of vertices
/// fits comfortably; anything larger is rejected before parsing.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::ui::router())
        .merge(routes::geofence::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the geofence store lock is acquirable
/// (not wedged by a stuck writer). Returns 200 "ready" or 503.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if state.geofence.try_is_set().is_none() {
        return (StatusCode::SERVICE_UNAVAILABLE, "geofence store locked").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
