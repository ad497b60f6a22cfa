//! # Geofence Store
//!
//! Holds the single process-wide geofence: the raw coordinate list exactly
//! as supplied (returned by `get`) and the derived [`FencePolygon`]
//! (consulted by `check`). Both are replaced together under one write lock,
//! so concurrent readers observe either the old fence or the new one in
//! full — never a list from one and a polygon from the other.
//!
//! All operations are synchronous (the RwLock is `parking_lot`, not
//! `tokio::sync`) because the lock is never held across `.await` points.
//! `parking_lot::RwLock` is non-poisonable — a panicking writer does not
//! permanently corrupt the store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::coordinate::Coordinate;
use crate::error::GeofenceError;
use crate::polygon::FencePolygon;

/// The stored geofence value: supplied coordinates plus derived polygon.
#[derive(Debug, Clone)]
pub struct Geofence {
    coordinates: Vec<Coordinate>,
    polygon: FencePolygon,
}

impl Geofence {
    /// The coordinate list exactly as supplied to `set`.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// The derived polygon representation.
    pub fn polygon(&self) -> &FencePolygon {
        &self.polygon
    }
}

/// Thread-safe, cloneable store for the single current geofence.
///
/// Starts unset. Becomes set on the first successful [`set`](Self::set) and
/// is overwritten wholesale by later calls — never cleared until process
/// exit. Clones share the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct GeofenceStore {
    current: Arc<RwLock<Option<Geofence>>>,
}

impl GeofenceStore {
    /// Create an empty (unset) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored geofence with a new vertex ring.
    ///
    /// Fails with [`GeofenceError::InvalidCoordinates`] when the list is
    /// empty. Out-of-range vertices are accepted as-is with a warning.
    /// Sub-triangle rings are accepted; they contain nothing.
    pub fn set(&self, coordinates: Vec<Coordinate>) -> Result<(), GeofenceError> {
        if coordinates.is_empty() {
            return Err(GeofenceError::InvalidCoordinates);
        }

        let out_of_range = coordinates.iter().filter(|c| !c.in_range()).count();
        if out_of_range > 0 {
            tracing::warn!(
                out_of_range,
                total = coordinates.len(),
                "geofence vertices outside WGS84 ranges accepted as-is"
            );
        }

        // Build the polygon outside the lock; the swap itself is one write.
        let polygon = FencePolygon::from_coordinates(&coordinates);
        *self.current.write() = Some(Geofence {
            coordinates,
            polygon,
        });
        Ok(())
    }

    /// The stored coordinate list, in the order it was supplied.
    ///
    /// Fails with [`GeofenceError::NotSet`] until the first successful `set`.
    pub fn coordinates(&self) -> Result<Vec<Coordinate>, GeofenceError> {
        self.current
            .read()
            .as_ref()
            .map(|g| g.coordinates.clone())
            .ok_or(GeofenceError::NotSet)
    }

    /// Whether `point` lies inside the stored fence.
    ///
    /// Fails with [`GeofenceError::NotSet`] when no fence is stored.
    /// Boundary points report `false` (see [`FencePolygon::contains`]).
    pub fn contains(&self, point: Coordinate) -> Result<bool, GeofenceError> {
        self.current
            .read()
            .as_ref()
            .map(|g| g.polygon.contains(point))
            .ok_or(GeofenceError::NotSet)
    }

    /// Whether a geofence is currently stored.
    pub fn is_set(&self) -> bool {
        self.current.read().is_some()
    }

    /// Non-blocking variant of [`is_set`](Self::is_set) for health probes.
    ///
    /// Returns `None` when the lock is not immediately acquirable.
    pub fn try_is_set(&self) -> Option<bool> {
        self.current.try_read().map(|g| g.is_some())
    }
}
