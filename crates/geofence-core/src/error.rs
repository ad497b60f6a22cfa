//! # Domain Errors
//!
//! The two failure modes of the geofence store. The `Display` strings are
//! the exact wire-level error messages, so the HTTP layer can surface them
//! verbatim in `{"error": ...}` bodies.

use thiserror::Error;

/// Errors returned by [`crate::GeofenceStore`] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeofenceError {
    /// The supplied coordinate list was missing or empty.
    #[error("Invalid coordinates.")]
    InvalidCoordinates,

    /// No geofence has been successfully set since process start.
    #[error("Geofence not set.")]
    NotSet,
}
