//! # API Route Modules
//!
//! - `geofence` — the set/get/check JSON endpoints over the process-wide
//!   geofence (the whole API surface of the service).
//! - `ui` — the map page served at `/` for drawing a fence and probing
//!   points interactively.

pub mod geofence;
pub mod ui;
