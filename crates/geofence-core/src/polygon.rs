//! # Containment Predicate
//!
//! Planar point-in-polygon containment over the fence ring. Coordinates are
//! used directly as Cartesian (x = longitude, y = latitude); the last vertex
//! implicitly connects back to the first.
//!
//! ## Conventions (pinned and tested)
//!
//! - A point exactly on an edge or vertex is OUTSIDE. This is the `geo`
//!   crate's interior-containment semantics for `Polygon`.
//! - Rings with fewer than 3 vertices contain nothing and never panic.

use geo::{Contains, Coord, LineString, Point, Polygon};

use crate::coordinate::Coordinate;

/// The derived polygon representation of a geofence ring.
///
/// Built once per `set` call and consulted by every containment check.
#[derive(Debug, Clone)]
pub struct FencePolygon {
    polygon: Polygon<f64>,
    vertex_count: usize,
}

impl FencePolygon {
    /// Build the planar polygon from an ordered vertex ring.
    ///
    /// Each `Coordinate` maps to `Coord { x: longitude, y: latitude }`; the
    /// ring is closed automatically. Degenerate rings (fewer than 3 vertices)
    /// are representable — they simply contain nothing.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        let ring: LineString<f64> = coordinates
            .iter()
            .map(|c| Coord {
                x: c.longitude,
                y: c.latitude,
            })
            .collect::<Vec<_>>()
            .into();
        Self {
            polygon: Polygon::new(ring, vec![]),
            vertex_count: coordinates.len(),
        }
    }

    /// Number of vertices in the ring as supplied (before implicit closing).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Whether the fence ring has enough vertices to enclose any area.
    pub fn is_degenerate(&self) -> bool {
        self.vertex_count < 3
    }

    /// Whether `point` lies strictly inside the fence.
    ///
    /// Boundary points (on an edge or vertex) report `false`. Degenerate
    /// rings report `false` for every point.
    pub fn contains(&self, point: Coordinate) -> bool {
        if self.is_degenerate() {
            return false;
        }
        self.polygon
            .contains(&Point::new(point.longitude, point.latitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference square: (lat, lng) vertices (0,0),(0,10),(10,10),(10,0).
    fn square() -> FencePolygon {
        FencePolygon::from_coordinates(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.0, 0.0),
        ])
    }

    #[test]
    fn interior_point_is_inside() {
        assert!(square().contains(Coordinate::new(5.0, 5.0)));
    }

    #[test]
    fn distant_point_is_outside() {
        assert!(!square().contains(Coordinate::new(50.0, 50.0)));
    }

    #[test]
    fn edge_point_is_outside() {
        // Midpoint of the lat=0 edge. Boundary convention: outside.
        assert!(!square().contains(Coordinate::new(0.0, 5.0)));
    }

    #[test]
    fn vertex_point_is_outside() {
        assert!(!square().contains(Coordinate::new(0.0, 0.0)));
        assert!(!square().contains(Coordinate::new(10.0, 10.0)));
    }

    #[test]
    fn point_just_inside_edge_is_inside() {
        assert!(square().contains(Coordinate::new(0.0001, 5.0)));
    }

    #[test]
    fn concave_polygon_notch_is_outside() {
        // U-shaped fence: a square with a notch cut from the top edge down
        // to the middle. Points in the notch are outside, the arms inside.
        let fence = FencePolygon::from_coordinates(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(10.0, 0.0),
            Coordinate::new(10.0, 4.0),
            Coordinate::new(5.0, 4.0),
            Coordinate::new(5.0, 6.0),
            Coordinate::new(10.0, 6.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(0.0, 10.0),
        ]);
        assert!(fence.contains(Coordinate::new(2.0, 5.0)), "base of the U");
        assert!(fence.contains(Coordinate::new(8.0, 2.0)), "left arm");
        assert!(fence.contains(Coordinate::new(8.0, 8.0)), "right arm");
        assert!(!fence.contains(Coordinate::new(8.0, 5.0)), "inside the notch");
    }

    #[test]
    fn single_vertex_contains_nothing() {
        let fence = FencePolygon::from_coordinates(&[Coordinate::new(1.0, 1.0)]);
        assert!(fence.is_degenerate());
        assert!(!fence.contains(Coordinate::new(1.0, 1.0)));
        assert!(!fence.contains(Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn two_vertices_contain_nothing() {
        let fence =
            FencePolygon::from_coordinates(&[Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)]);
        assert!(fence.is_degenerate());
        assert!(!fence.contains(Coordinate::new(5.0, 5.0)));
    }

    #[test]
    fn collinear_ring_contains_nothing() {
        // Three vertices on one line enclose zero area.
        let fence = FencePolygon::from_coordinates(&[
            Coordinate::new(0.0, 0.0),
            Coordinate::new(5.0, 5.0),
            Coordinate::new(10.0, 10.0),
        ]);
        assert!(!fence.is_degenerate());
        assert!(!fence.contains(Coordinate::new(5.0, 5.0)));
        assert!(!fence.contains(Coordinate::new(2.0, 3.0)));
    }

    #[test]
    fn out_of_range_coordinates_are_processed_as_is() {
        // No clamping: a fence beyond the WGS84 ranges still behaves as a
        // planar polygon.
        let fence = FencePolygon::from_coordinates(&[
            Coordinate::new(100.0, 200.0),
            Coordinate::new(100.0, 300.0),
            Coordinate::new(200.0, 300.0),
            Coordinate::new(200.0, 200.0),
        ]);
        assert!(fence.contains(Coordinate::new(150.0, 250.0)));
        assert!(!fence.contains(Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn vertex_count_reports_supplied_ring_length() {
        assert_eq!(square().vertex_count(), 4);
        assert!(!square().is_degenerate());
    }
}
