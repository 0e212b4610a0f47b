//! # Geometric Primitives — Points and Simple Polygons
//!
//! `GeoPoint` is a plain lat/lng pair. `Polygon` is a validated simple ring:
//! at least three vertices, implicitly closed, no zero-length edges, no
//! self-intersection. Validation happens once at construction so every
//! downstream containment query can trust the ring.
//!
//! ## Containment
//!
//! [`Polygon::contains`] is a pure predicate: even-odd ray casting with an
//! inclusive boundary. It knows nothing about zone activity — callers
//! compose the activity filter separately.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance for collinearity when classifying boundary points.
///
/// Roughly a centimeter at the equator in degree units; coordinates come
/// from map clicks, so anything tighter is noise.
const EPSILON: f64 = 1e-9;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive.
    pub lat: f64,
    /// Longitude in degrees, east positive.
    pub lng: f64,
}

impl GeoPoint {
    /// Build a point from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Errors raised while ingesting polygon rings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// A ring needs at least three vertices.
    #[error("polygon requires at least 3 vertices, got {got}")]
    TooFewVertices {
        /// Number of vertices supplied.
        got: usize,
    },

    /// Two consecutive vertices coincide.
    #[error("polygon has a zero-length edge at vertex {index}")]
    DegenerateEdge {
        /// Index of the first vertex of the offending edge.
        index: usize,
    },

    /// The ring folds back on itself at a vertex, enclosing zero area
    /// there.
    #[error("polygon has a zero-area spike at vertex {index}")]
    SpikeVertex {
        /// Index of the vertex where the ring doubles back.
        index: usize,
    },

    /// Two non-adjacent edges cross.
    #[error("polygon is self-intersecting")]
    SelfIntersecting,

    /// A zone id did not resolve in the index.
    #[error("unknown zone {zone_id}")]
    UnknownZone {
        /// The id that failed to resolve.
        zone_id: String,
    },
}

/// A validated simple polygon, implicitly closed.
///
/// The vertex order (clockwise or counter-clockwise) is irrelevant to the
/// even-odd containment rule, so ingestion accepts either winding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Validate and wrap a ring of vertices.
    ///
    /// # Errors
    ///
    /// - [`GeoError::TooFewVertices`] for fewer than three vertices.
    /// - [`GeoError::DegenerateEdge`] for coincident consecutive vertices.
    /// - [`GeoError::SpikeVertex`] when the ring folds back on itself.
    /// - [`GeoError::SelfIntersecting`] when non-adjacent edges cross.
    pub fn new(vertices: Vec<GeoPoint>) -> Result<Self, GeoError> {
        if vertices.len() < 3 {
            return Err(GeoError::TooFewVertices {
                got: vertices.len(),
            });
        }
        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            if (a.lat - b.lat).abs() < EPSILON && (a.lng - b.lng).abs() < EPSILON {
                return Err(GeoError::DegenerateEdge { index: i });
            }
        }
        // Adjacent-edge pairs are exempt from the crossing sweep below, so
        // a fold-back (the next edge retracing the previous one) must be
        // caught here: collinear turn plus reversed direction.
        for i in 0..n {
            let a = vertices[(i + n - 1) % n];
            let b = vertices[i];
            let c = vertices[(i + 1) % n];
            if cross(a, b, c).abs() <= EPSILON {
                let dot = (b.lng - a.lng) * (c.lng - b.lng) + (b.lat - a.lat) * (c.lat - b.lat);
                if dot < 0.0 {
                    return Err(GeoError::SpikeVertex { index: i });
                }
            }
        }
        if Self::has_self_intersection(&vertices) {
            return Err(GeoError::SelfIntersecting);
        }
        Ok(Self { vertices })
    }

    /// The ring vertices, in ingestion order.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Whether the point lies inside the ring or exactly on its boundary.
    ///
    /// Even-odd ray casting with an inclusive boundary: a point on an edge
    /// or vertex is contained.
    pub fn contains(&self, point: GeoPoint) -> bool {
        if self.on_boundary(point) {
            return true;
        }
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.lat > point.lat) != (vj.lat > point.lat) {
                let cross_lng =
                    (vj.lng - vi.lng) * (point.lat - vi.lat) / (vj.lat - vi.lat) + vi.lng;
                if point.lng < cross_lng {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Whether the point lies on one of the ring's edges (or a vertex).
    fn on_boundary(&self, point: GeoPoint) -> bool {
        let n = self.vertices.len();
        (0..n).any(|i| on_segment(self.vertices[i], self.vertices[(i + 1) % n], point))
    }

    /// Check every pair of non-adjacent edges for a crossing.
    ///
    /// O(n^2), which is fine: zone rings are drawn by hand and stay small.
    fn has_self_intersection(vertices: &[GeoPoint]) -> bool {
        let n = vertices.len();
        for i in 0..n {
            for j in (i + 1)..n {
                // Adjacent edges share an endpoint and may touch there.
                if j == i || (j + 1) % n == i || (i + 1) % n == j {
                    continue;
                }
                let (a1, a2) = (vertices[i], vertices[(i + 1) % n]);
                let (b1, b2) = (vertices[j], vertices[(j + 1) % n]);
                if segments_cross(a1, a2, b1, b2) {
                    return true;
                }
            }
        }
        false
    }
}

/// Signed cross product of (b - a) x (c - a).
fn cross(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> f64 {
    (b.lng - a.lng) * (c.lat - a.lat) - (b.lat - a.lat) * (c.lng - a.lng)
}

/// Whether `p` lies on the closed segment `a`-`b`.
fn on_segment(a: GeoPoint, b: GeoPoint, p: GeoPoint) -> bool {
    if cross(a, b, p).abs() > EPSILON {
        return false;
    }
    p.lng >= a.lng.min(b.lng) - EPSILON
        && p.lng <= a.lng.max(b.lng) + EPSILON
        && p.lat >= a.lat.min(b.lat) - EPSILON
        && p.lat <= a.lat.max(b.lat) + EPSILON
}

/// Whether segments `a1`-`a2` and `b1`-`b2` intersect anywhere.
fn segments_cross(a1: GeoPoint, a2: GeoPoint, b1: GeoPoint, b2: GeoPoint) -> bool {
    let d1 = cross(b1, b2, a1);
    let d2 = cross(b1, b2, a2);
    let d3 = cross(a1, a2, b1);
    let d4 = cross(a1, a2, b2);

    if ((d1 > EPSILON && d2 < -EPSILON) || (d1 < -EPSILON && d2 > EPSILON))
        && ((d3 > EPSILON && d4 < -EPSILON) || (d3 < -EPSILON && d4 > EPSILON))
    {
        return true;
    }

    // Collinear touch counts as an intersection for non-adjacent edges.
    (d1.abs() <= EPSILON && on_segment(b1, b2, a1))
        || (d2.abs() <= EPSILON && on_segment(b1, b2, a2))
        || (d3.abs() <= EPSILON && on_segment(a1, a2, b1))
        || (d4.abs() <= EPSILON && on_segment(a1, a2, b2))
}
