//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geofence API",
        version = "0.1.0",
        description = "Define a polygonal geofence from [lat, lng] vertices, retrieve it, and test point containment.\n\nThe fence is a single process-wide value: set replaces it wholesale, get returns the vertices as supplied, check evaluates planar point-in-polygon containment (boundary points count as outside). No persistence, no authentication.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server"),
    ),
    paths(
        crate::routes::geofence::set_geofence,
        crate::routes::geofence::get_geofence,
        crate::routes::geofence::check_location,
    ),
    components(schemas(
        crate::routes::geofence::SetGeofenceRequest,
        crate::routes::geofence::SetGeofenceResponse,
        crate::routes::geofence::GetGeofenceResponse,
        crate::routes::geofence::CheckLocationRequest,
        crate::routes::geofence::CheckLocationResponse,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "geofence", description = "Geofence definition and containment checks")
    )
)]
pub struct ApiDoc;

/// Assemble the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

/// GET /openapi.json — the assembled spec.
async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
