//! Planner error taxonomy.
//!
//! Everything here is reported before or instead of computing; there are
//! no partial results. An unreachable shortest-path destination is *not*
//! an error — see [`crate::dijkstra::ShortestPath`].

use thiserror::Error;

/// Errors surfaced by graph construction and route queries.
///
/// Point ids are carried as their `Debug` rendering so the enum stays
/// independent of the caller's id type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A graph needs at least two points to be worth building.
    #[error("at least {required} points are required, got {supplied}")]
    TooFewPoints { required: usize, supplied: usize },

    /// Obstacle polygon with fewer than three vertices.
    #[error("polygon must have at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),

    /// Two input points share an id; merging them would corrupt weights.
    #[error("duplicate point id {0}")]
    DuplicatePoint(String),

    /// A query referenced an id that is not a node of the graph.
    #[error("point {0} not found in graph")]
    UnknownPoint(String),

    /// Tour query with an empty destination set.
    #[error("no destinations supplied")]
    NoDestinations,

    /// The same destination appeared twice in a tour query.
    #[error("duplicate destination {0}")]
    DuplicateDestination(String),

    /// The base point may not also be a destination.
    #[error("base point {0} appears in the destination set")]
    BaseInDestinations(String),

    /// Every permutation of the tour needs at least one missing edge.
    #[error("no obstacle-free tour exists")]
    InfeasibleTour,
}

impl PlanError {
    pub(crate) fn unknown_point(id: &impl std::fmt::Debug) -> Self {
        Self::UnknownPoint(format!("{id:?}"))
    }

    pub(crate) fn duplicate_point(id: &impl std::fmt::Debug) -> Self {
        Self::DuplicatePoint(format!("{id:?}"))
    }

    pub(crate) fn duplicate_destination(id: &impl std::fmt::Debug) -> Self {
        Self::DuplicateDestination(format!("{id:?}"))
    }

    pub(crate) fn base_in_destinations(id: &impl std::fmt::Debug) -> Self {
        Self::BaseInDestinations(format!("{id:?}"))
    }
}
