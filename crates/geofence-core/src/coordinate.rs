//! # Coordinate Type
//!
//! A geographic point as a (latitude, longitude) pair. The wire format is a
//! two-element JSON array `[lat, lng]`, matching the request and response
//! bodies of the HTTP API. Arrays of any other length fail deserialization.

use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair.
///
/// Serializes to and from `[lat, lng]`. Values outside the conventional
/// WGS84 ranges are representable — the service accepts them as-is and only
/// warns (see [`Coordinate::in_range`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components lie within the conventional ranges:
    /// latitude in [-90, 90], longitude in [-180, 180].
    ///
    /// Out-of-range coordinates are not rejected anywhere; this exists so
    /// callers can log a warning before processing them as-is.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> [f64; 2] {
        [c.latitude, c.longitude]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
