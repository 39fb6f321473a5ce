//! Exact optimal closed tour over the visibility graph.
//!
//! Exhaustive permutation search, deliberately. A heuristic could pick a
//! locally good edge whose continuation is blocked by an obstacle and end
//! up with an infeasible tour; trying every ordering is the simplest
//! solver that cannot. Factorial cost caps the destination count at
//! single digits in practice (9 destinations is 362 880 permutations);
//! callers needing a cutoff impose it outside the engine.

use std::collections::HashSet;

use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;
use crate::geo::PointId;
use crate::graph::Graph;

/// A closed tour: base, every destination exactly once, base again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour<I> {
    /// Point ids in visiting order; first and last are the base.
    pub route: Vec<I>,
    pub distance_km: f64,
}

/// Find the minimum-distance closed tour from `base` through every
/// destination and back, using only edges present in `graph`.
///
/// A permutation needing any missing (blocked) edge is rejected whole; it
/// never contributes a partial distance. When no permutation is fully
/// traversable the query fails with [`PlanError::InfeasibleTour`]. When
/// several orderings tie on distance, which one is returned is
/// unspecified (permutations are evaluated in parallel).
///
/// Preconditions, rejected before any search: a non-empty destination
/// set, no duplicate destinations, base not among the destinations, and
/// every id present in the graph.
pub fn optimal_tour<I: PointId>(
    graph: &Graph<I>,
    base: &I,
    destinations: &[I],
) -> Result<Tour<I>, PlanError> {
    if destinations.is_empty() {
        return Err(PlanError::NoDestinations);
    }
    if !graph.contains(base) {
        return Err(PlanError::unknown_point(base));
    }
    let mut seen = HashSet::with_capacity(destinations.len());
    for destination in destinations {
        if destination == base {
            return Err(PlanError::base_in_destinations(destination));
        }
        if !graph.contains(destination) {
            return Err(PlanError::unknown_point(destination));
        }
        if !seen.insert(destination) {
            return Err(PlanError::duplicate_destination(destination));
        }
    }

    let count = destinations.len();
    let best = destinations
        .iter()
        .permutations(count)
        .par_bridge()
        .filter_map(|ordering| tour_distance(graph, base, &ordering).map(|km| (ordering, km)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    let Some((ordering, distance_km)) = best else {
        debug!(destinations = count, "every permutation hit a blocked edge");
        return Err(PlanError::InfeasibleTour);
    };

    debug!(destinations = count, distance_km, "optimal tour found");
    let mut route = Vec::with_capacity(count + 2);
    route.push(base.clone());
    route.extend(ordering.into_iter().cloned());
    route.push(base.clone());
    Ok(Tour { route, distance_km })
}

/// Total distance of base → ordering… → base, or `None` as soon as any
/// leg has no edge in the graph.
fn tour_distance<I: PointId>(graph: &Graph<I>, base: &I, ordering: &[&I]) -> Option<f64> {
    let mut total = graph.edge(base, ordering[0])?;
    for leg in ordering.windows(2) {
        total += graph.edge(leg[0], leg[1])?;
    }
    total += graph.edge(ordering[ordering.len() - 1], base)?;
    Some(total)
}
