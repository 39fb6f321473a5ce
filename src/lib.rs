//! drone-planner core engine
//!
//! Obstacle-aware route planning over geographic points: visibility
//! graph construction, shortest paths, exact optimal tours, and a
//! battery budget check. The web/CLI shell lives elsewhere; this crate
//! only ever sees coordinates, obstacle polygons, and point ids.

pub mod budget;
pub mod dijkstra;
pub mod error;
pub mod geo;
pub mod graph;
pub mod obstacle;
pub mod tour;
