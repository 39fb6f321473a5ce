//! Test fixtures for drone-planner.
//!
//! Real São Paulo locations (from OpenStreetMap) for end-to-end routing
//! scenarios in the production deployment area.

pub mod sao_paulo_locations;

pub use sao_paulo_locations::*;
