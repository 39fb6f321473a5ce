//! Single-pair shortest path over the visibility graph.

use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;
use crate::geo::PointId;
use crate::graph::Graph;

/// Outcome of a shortest-path query.
///
/// An unreachable destination is a reported outcome, not an error: the
/// path is empty and the distance infinite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath<I> {
    /// Point ids from source to destination inclusive; empty when
    /// unreachable. A query with `source == destination` yields the
    /// single-node path with distance 0.
    pub path: Vec<I>,
    pub distance_km: f64,
}

impl<I> ShortestPath<I> {
    pub fn is_unreachable(&self) -> bool {
        self.path.is_empty()
    }
}

/// Heap entry ordered by ascending distance (min-heap via reversed Ord).
///
/// Equality and ordering deliberately ignore the node: the heap only
/// needs distances, and `eq` is defined through the same `total_cmp` as
/// `cmp` so the `Eq`/`Ord` pair stays coherent.
struct Frontier<I> {
    distance_km: f64,
    node: I,
}

impl<I> PartialEq for Frontier<I> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl<I> Eq for Frontier<I> {}

impl<I> PartialOrd for Frontier<I> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> Ord for Frontier<I> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.distance_km.total_cmp(&self.distance_km)
    }
}

/// Dijkstra shortest path from `source` to `destination`.
///
/// Stops as soon as the destination is popped from the frontier; with
/// non-negative weights that distance is final. Ties between
/// equal-distance frontier nodes are broken arbitrarily.
///
/// Errors with [`PlanError::UnknownPoint`] when either endpoint is not a
/// node of the graph. Unreachable destinations come back `Ok` with an
/// empty path and infinite distance.
pub fn shortest_path<I: PointId>(
    graph: &Graph<I>,
    source: &I,
    destination: &I,
) -> Result<ShortestPath<I>, PlanError> {
    if !graph.contains(source) {
        return Err(PlanError::unknown_point(source));
    }
    if !graph.contains(destination) {
        return Err(PlanError::unknown_point(destination));
    }

    let mut best: HashMap<I, f64> = HashMap::from([(source.clone(), 0.0)]);
    let mut predecessor: HashMap<I, I> = HashMap::new();
    let mut frontier = BinaryHeap::from([Frontier {
        distance_km: 0.0,
        node: source.clone(),
    }]);
    let mut settled = 0usize;

    while let Some(Frontier { distance_km, node }) = frontier.pop() {
        if node == *destination {
            debug!(settled, distance_km, "destination reached");
            return Ok(ShortestPath {
                path: reconstruct(&predecessor, source, destination),
                distance_km,
            });
        }
        // A stale entry: the node was already settled at a shorter distance.
        if distance_km > best.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        settled += 1;

        let Some(neighbors) = graph.neighbors(&node) else {
            continue;
        };
        for (neighbor, weight) in neighbors {
            let candidate = distance_km + weight;
            if candidate < best.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                best.insert(neighbor.clone(), candidate);
                predecessor.insert(neighbor.clone(), node.clone());
                frontier.push(Frontier {
                    distance_km: candidate,
                    node: neighbor.clone(),
                });
            }
        }
    }

    debug!(settled, "destination unreachable");
    Ok(ShortestPath {
        path: Vec::new(),
        distance_km: f64::INFINITY,
    })
}

/// Walk predecessor links back from the destination, then reverse.
fn reconstruct<I: PointId>(predecessor: &HashMap<I, I>, source: &I, destination: &I) -> Vec<I> {
    let mut path = vec![destination.clone()];
    let mut current = destination;
    while current != source {
        match predecessor.get(current) {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
