//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the single [`GeofenceStore`] — no hidden
//! globals. Clone-friendly via `Arc` internals in the store.

use geofence_core::GeofenceStore;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl AppConfig {
    /// Build configuration from the environment. `PORT` overrides the
    /// default; unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        Self { port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

/// Shared application state accessible to all route handlers.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The single process-wide geofence.
    pub geofence: GeofenceStore,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new application state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            geofence: GeofenceStore::new(),
            config,
        }
    }
}
