//! Visibility graph construction.
//!
//! An edge exists between two points iff the straight segment between
//! them crosses no obstacle boundary; its weight is the haversine
//! distance in km. Absence of a neighbor entry means "no direct edge" —
//! there are no sentinel weights.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;
use crate::geo::{haversine_km, Point, PointId};
use crate::obstacle::ObstacleSet;

/// Weighted directed graph keyed by point id.
///
/// Directed in representation, symmetric in value when built from
/// [`build_graph`] (the crossing test is symmetric). Every input point is
/// a node even when all of its segments are blocked, so queries can tell
/// "unknown id" apart from "unreachable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph<I: PointId> {
    edges: HashMap<I, HashMap<I, f64>>,
}

impl<I: PointId> Graph<I> {
    /// Wrap a precomputed distance table (e.g. loaded from a CSV matrix
    /// by the caller) as a graph. No visibility checks are applied; the
    /// table is trusted as-is.
    pub fn from_edges(edges: HashMap<I, HashMap<I, f64>>) -> Self {
        Self { edges }
    }

    pub fn contains(&self, id: &I) -> bool {
        self.edges.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &I> {
        self.edges.keys()
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    /// Weight of the direct edge from `from` to `to`, if visible.
    pub fn edge(&self, from: &I, to: &I) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }

    /// Neighbor map of a node, if the node exists.
    pub fn neighbors(&self, id: &I) -> Option<&HashMap<I, f64>> {
        self.edges.get(id)
    }
}

/// Build the visibility graph over `points` under `obstacles`.
///
/// Every ordered pair (i, j), i ≠ j, is tested against the obstacle set;
/// surviving pairs get a haversine-weighted edge in each direction.
/// O(P² · E) for P points and E total obstacle edges, which caps the
/// practical point count at tens, not thousands.
pub fn build_graph<I: PointId>(
    points: &[Point<I>],
    obstacles: &ObstacleSet,
) -> Result<Graph<I>, PlanError> {
    if points.len() < 2 {
        return Err(PlanError::TooFewPoints {
            required: 2,
            supplied: points.len(),
        });
    }

    let mut edges: HashMap<I, HashMap<I, f64>> = HashMap::with_capacity(points.len());
    for point in points {
        if edges.insert(point.id.clone(), HashMap::new()).is_some() {
            return Err(PlanError::duplicate_point(&point.id));
        }
    }

    let adjacency: Vec<(I, HashMap<I, f64>)> = points
        .par_iter()
        .map(|from| {
            let neighbors = points
                .iter()
                .filter(|to| to.id != from.id)
                .filter(|to| !obstacles.blocks(from.coords(), to.coords()))
                .map(|to| (to.id.clone(), haversine_km(from.coords(), to.coords())))
                .collect();
            (from.id.clone(), neighbors)
        })
        .collect();

    for (id, neighbors) in adjacency {
        edges.insert(id, neighbors);
    }

    let graph = Graph { edges };
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        obstacles = obstacles.polygons().len(),
        "visibility graph built"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::Polygon;

    fn square_points() -> Vec<Point<&'static str>> {
        vec![
            Point::new("a", 0.0, 0.0),
            Point::new("b", 0.0, 1.0),
            Point::new("c", 1.0, 1.0),
            Point::new("d", 1.0, 0.0),
        ]
    }

    #[test]
    fn test_no_obstacles_gives_complete_graph() {
        let graph = build_graph(&square_points(), &ObstacleSet::empty()).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 12);
        assert!(graph.edge(&"a", &"a").is_none(), "no self-loops");
    }

    #[test]
    fn test_weights_are_symmetric() {
        let graph = build_graph(&square_points(), &ObstacleSet::empty()).unwrap();
        for from in ["a", "b", "c", "d"] {
            for to in ["a", "b", "c", "d"] {
                assert_eq!(graph.edge(&from, &to), graph.edge(&to, &from));
            }
        }
    }

    #[test]
    fn test_blocked_pair_is_absent_both_ways() {
        // A wall across the a-c diagonal, avoiding the other segments.
        let wall =
            Polygon::new(vec![(0.6, 0.4), (0.6, 0.45), (0.4, 0.65), (0.4, 0.6)]).unwrap();
        let graph =
            build_graph(&square_points(), &ObstacleSet::new(vec![wall])).unwrap();
        assert_eq!(graph.edge(&"a", &"c"), None);
        assert_eq!(graph.edge(&"c", &"a"), None);
        assert!(graph.edge(&"a", &"b").is_some());
        assert!(graph.edge(&"b", &"c").is_some());
    }

    #[test]
    fn test_isolated_point_keeps_node_entry() {
        // Box the first point in completely. The cage is rotated so no
        // outgoing segment can slip exactly through a corner vertex.
        let cage = Polygon::new(vec![
            (-0.1, -0.05),
            (-0.05, 0.1),
            (0.1, 0.05),
            (0.05, -0.1),
        ])
        .unwrap();
        let graph =
            build_graph(&square_points(), &ObstacleSet::new(vec![cage])).unwrap();
        assert!(graph.contains(&"a"));
        assert_eq!(graph.neighbors(&"a").map(HashMap::len), Some(0));
    }

    #[test]
    fn test_build_is_idempotent() {
        let points = square_points();
        let obstacles = ObstacleSet::new(vec![Polygon::new(vec![
            (0.6, 0.4),
            (0.6, 0.45),
            (0.4, 0.65),
        ])
        .unwrap()]);
        let first = build_graph(&points, &obstacles).unwrap();
        let second = build_graph(&points, &obstacles).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_too_few_points() {
        let points = vec![Point::new("a", 0.0, 0.0)];
        let err = build_graph(&points, &ObstacleSet::empty()).unwrap_err();
        assert_eq!(
            err,
            PlanError::TooFewPoints {
                required: 2,
                supplied: 1
            }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let points = vec![
            Point::new("a", 0.0, 0.0),
            Point::new("a", 1.0, 1.0),
            Point::new("b", 2.0, 2.0),
        ];
        let err = build_graph(&points, &ObstacleSet::empty()).unwrap_err();
        assert!(matches!(err, PlanError::DuplicatePoint(_)));
    }

    #[test]
    fn test_from_edges_roundtrip() {
        let mut table = HashMap::new();
        table.insert("a", HashMap::from([("b", 2.5)]));
        table.insert("b", HashMap::from([("a", 2.5)]));
        let graph = Graph::from_edges(table);
        assert_eq!(graph.edge(&"a", &"b"), Some(2.5));
        assert_eq!(graph.node_count(), 2);
    }
}
