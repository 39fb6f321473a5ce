//! No-fly obstacle zones.
//!
//! Obstacles are closed polygons in lat/lng space; circles become regular
//! polygons via angular discretization. The set is immutable once built
//! and is passed explicitly to every computation — there is no global
//! obstacle registry.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::geo::{segments_intersect, EARTH_RADIUS_M};

/// Default boundary vertex count when discretizing a circle.
pub const DEFAULT_CIRCLE_STEPS: usize = 36;

/// A closed obstacle boundary.
///
/// Vertices are (lat, lng) degrees. The closing edge back to the first
/// vertex is implied; a ring that repeats its first vertex at the end is
/// accepted and behaves identically (the extra wrap edge has zero length
/// and can never properly cross anything).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Polygon {
    vertices: Vec<(f64, f64)>,
}

impl TryFrom<Vec<(f64, f64)>> for Polygon {
    type Error = PlanError;

    fn try_from(vertices: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<(f64, f64)> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl Polygon {
    /// Validates and constructs a polygon.
    pub fn new(vertices: Vec<(f64, f64)>) -> Result<Self, PlanError> {
        if vertices.len() < 3 {
            return Err(PlanError::DegeneratePolygon(vertices.len()));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Boundary edges as consecutive vertex pairs, wrap-around included.
    pub fn edges(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// True iff segment A-B properly crosses any edge of this polygon.
    pub fn crosses(&self, a: (f64, f64), b: (f64, f64)) -> bool {
        self.edges().any(|(c, d)| segments_intersect(a, b, c, d))
    }
}

/// An ordered, immutable collection of obstacle polygons.
///
/// Safe to share by reference across concurrent computations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    polygons: Vec<Polygon>,
}

impl ObstacleSet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// An empty set: nothing blocks anything.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// True iff the straight segment A-B properly crosses any polygon
    /// boundary in the set. Symmetric in A and B.
    pub fn blocks(&self, a: (f64, f64), b: (f64, f64)) -> bool {
        self.polygons.iter().any(|p| p.crosses(a, b))
    }
}

/// Discretize a circle into a closed regular polygon.
///
/// Boundary points are placed at `steps` equally spaced angles around
/// `center` at `radius_m` meters, using an equirectangular offset
/// projection, and the first point is repeated to close the ring. Pure
/// and deterministic: identical inputs always produce identical rings.
/// Fewer than 3 steps are clamped to 3.
pub fn circle_to_polygon(center: (f64, f64), radius_m: f64, steps: usize) -> Polygon {
    let steps = steps.max(3);
    let (lat, lng) = center;
    let lat_rad = lat.to_radians();

    let mut vertices = Vec::with_capacity(steps + 1);
    for k in 0..steps {
        let angle = 2.0 * std::f64::consts::PI * (k as f64) / (steps as f64);
        let d_lat = (radius_m * angle.cos() / EARTH_RADIUS_M).to_degrees();
        let d_lng = (radius_m * angle.sin() / (EARTH_RADIUS_M * lat_rad.cos())).to_degrees();
        vertices.push((lat + d_lat, lng + d_lng));
    }
    vertices.push(vertices[0]);

    Polygon { vertices }
}
