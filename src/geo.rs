//! Geographic primitives: points, great-circle distance, segment crossing.
//!
//! Coordinates are (latitude, longitude) in degrees throughout the crate.
//! Distances are kilometers.

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius in meters (used for obstacle projections).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Opaque identifier for a routable point.
///
/// Strings, integers, and small tuple keys all qualify. `Send + Sync` is
/// required because graph building and tour search fan out across threads.
pub trait PointId: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> PointId for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// A named geographic point.
///
/// Identity lives entirely in `id`: two points with equal ids are the same
/// node regardless of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<I> {
    pub id: I,
    pub lat: f64,
    pub lng: f64,
}

impl<I> Point<I> {
    pub fn new(id: I, lat: f64, lng: f64) -> Self {
        Self { id, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Haversine great-circle distance between two (lat, lng) points in km.
///
/// Non-finite inputs propagate to the output unguarded.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Signed orientation of `p` relative to the directed line `o`→`q`.
///
/// Positive is counter-clockwise, negative clockwise, zero collinear.
fn orientation(o: (f64, f64), q: (f64, f64), p: (f64, f64)) -> f64 {
    (q.0 - o.0) * (p.1 - o.1) - (q.1 - o.1) * (p.0 - o.0)
}

/// True iff segment A-B properly crosses segment C-D.
///
/// Strict crossing only: both endpoint pairs must lie on strictly
/// opposite sides of the other segment's line. Any zero orientation —
/// collinear overlap, a shared endpoint, an endpoint resting on the
/// other segment's interior — counts as NOT intersecting. Routes are
/// therefore allowed to touch an obstacle boundary without being
/// blocked by it.
pub fn segments_intersect(
    a: (f64, f64),
    b: (f64, f64),
    c: (f64, f64),
    d: (f64, f64),
) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}
