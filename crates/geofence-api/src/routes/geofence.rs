//! # Geofence Routes
//!
//! The three JSON endpoints over the process-wide geofence:
//!
//! - `POST /set_geofence`   — Replace the stored fence with a new vertex ring
//! - `GET  /get_geofence`   — Return the stored vertex ring as supplied
//! - `POST /check_location` — Test a point against the stored fence
//!
//! Handlers validate input shape and delegate to [`GeofenceStore`]; all
//! geometry lives in `geofence-core`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use geofence_core::{Coordinate, GeofenceError};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Assemble the geofence router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/set_geofence", post(set_geofence))
        .route("/get_geofence", get(get_geofence))
        .route("/check_location", post(check_location))
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /set_geofence`.
///
/// `coordinates` is optional at the serde level so that an absent field
/// produces the documented "Invalid coordinates." reply rather than a
/// deserializer message.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetGeofenceRequest {
    /// Ordered `[lat, lng]` vertex ring; the last vertex implicitly
    /// connects back to the first.
    #[schema(value_type = Option<Vec<Vec<f64>>>, example = json!([[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]))]
    pub coordinates: Option<Vec<Coordinate>>,
}

impl SetGeofenceRequest {
    /// The vertex ring, or the documented 400 when missing or empty.
    fn into_coordinates(self) -> Result<Vec<Coordinate>, AppError> {
        match self.coordinates {
            Some(coords) if !coords.is_empty() => Ok(coords),
            _ => Err(AppError::BadRequest(
                GeofenceError::InvalidCoordinates.to_string(),
            )),
        }
    }
}

/// Response body for a successful `POST /set_geofence`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetGeofenceResponse {
    /// Confirmation message.
    pub message: String,
}

/// Response body for `GET /get_geofence`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetGeofenceResponse {
    /// The stored vertex ring, exactly as supplied.
    #[schema(value_type = Vec<Vec<f64>>)]
    pub coordinates: Vec<Coordinate>,
}

/// Request body for `POST /check_location`.
///
/// Both fields are optional at the serde level so a missing one produces
/// the documented message rather than a deserializer reply.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckLocationRequest {
    /// Latitude of the query point.
    pub latitude: Option<f64>,
    /// Longitude of the query point.
    pub longitude: Option<f64>,
}

impl CheckLocationRequest {
    /// The query point, or 400 when either field is missing.
    fn into_point(self) -> Result<Coordinate, AppError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinate::new(latitude, longitude)),
            _ => Err(AppError::BadRequest(
                "Invalid input. Latitude and longitude are required.".to_string(),
            )),
        }
    }
}

/// Response body for `POST /check_location`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckLocationResponse {
    /// Whether the point lies inside the stored fence. Boundary points
    /// report `false`.
    pub inside_geofence: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Replace the stored geofence with a new vertex ring.
#[utoipa::path(
    post,
    path = "/set_geofence",
    request_body = SetGeofenceRequest,
    responses(
        (status = 200, description = "Geofence replaced", body = SetGeofenceResponse),
        (status = 400, description = "Missing or empty coordinate list", body = crate::error::ErrorBody),
    ),
    tag = "geofence"
)]
async fn set_geofence(
    State(state): State<AppState>,
    body: Result<Json<SetGeofenceRequest>, JsonRejection>,
) -> Result<Json<SetGeofenceResponse>, AppError> {
    let coordinates = extract_json(body)?.into_coordinates()?;
    let vertices = coordinates.len();

    state
        .geofence
        .set(coordinates)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::info!(vertices, "geofence replaced");

    Ok(Json(SetGeofenceResponse {
        message: "Geofence set successfully!".to_string(),
    }))
}

/// Return the stored geofence coordinates, exactly as supplied.
#[utoipa::path(
    get,
    path = "/get_geofence",
    responses(
        (status = 200, description = "The stored vertex ring", body = GetGeofenceResponse),
        (status = 404, description = "No geofence has been set", body = crate::error::ErrorBody),
    ),
    tag = "geofence"
)]
async fn get_geofence(
    State(state): State<AppState>,
) -> Result<Json<GetGeofenceResponse>, AppError> {
    let coordinates = state
        .geofence
        .coordinates()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    Ok(Json(GetGeofenceResponse { coordinates }))
}

/// Test whether a point lies inside the stored geofence.
#[utoipa::path(
    post,
    path = "/check_location",
    request_body = CheckLocationRequest,
    responses(
        (status = 200, description = "Containment result", body = CheckLocationResponse),
        (status = 400, description = "Missing field or no geofence set", body = crate::error::ErrorBody),
    ),
    tag = "geofence"
)]
async fn check_location(
    State(state): State<AppState>,
    body: Result<Json<CheckLocationRequest>, JsonRejection>,
) -> Result<Json<CheckLocationResponse>, AppError> {
    let point = extract_json(body)?.into_point()?;

    // An unset geofence is a 400 on this endpoint (404 only on get).
    let inside_geofence = state
        .geofence
        .contains(point)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(%point, inside_geofence, "location checked");

    Ok(Json(CheckLocationResponse { inside_geofence }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
