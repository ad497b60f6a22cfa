//! # geofence-core — Domain Layer for the Geofence Service
//!
//! Defines the coordinate type, the planar point-in-polygon containment
//! predicate, and the process-wide geofence store. The HTTP layer
//! (`geofence-api`) delegates all geometry and state decisions to this crate.
//!
//! ## Key Design Decisions
//!
//! 1. **Planar geometry.** Longitude is x, latitude is y, and the polygon is
//!    a simple closed ring in those coordinates. No geodesic correction is
//!    applied — an accepted approximation for small-area fences.
//!
//! 2. **Boundary points are outside.** Containment follows the `geo` crate's
//!    interior semantics: a query point exactly on an edge or vertex is
//!    classified as outside the fence. Pinned by tests in [`polygon`].
//!
//! 3. **Degenerate rings never panic.** Fences with fewer than 3 vertices
//!    are storable but contain nothing.
//!
//! 4. **One fence, explicitly locked.** [`GeofenceStore`] wraps the single
//!    shared value in a `parking_lot::RwLock`. Set replaces the raw
//!    coordinate list and the derived polygon under one write lock, so
//!    readers observe either the old fence or the new one, never a torn mix.
//!
//! ## Crate Policy
//!
//! - No HTTP or async concerns (the store is synchronous; locks are never
//!   held across await points by construction).
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod coordinate;
pub mod error;
pub mod polygon;
pub mod store;

pub use coordinate::Coordinate;
pub use error::GeofenceError;
pub use polygon::FencePolygon;
pub use store::{Geofence, GeofenceStore};
