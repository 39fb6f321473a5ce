//! Real São Paulo locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The drone base sits at the
//! Praça da Sé city centre, matching the production deployment area.

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// Drone base in the city centre.
pub const BASE: Location = Location::new("Praça da Sé", -23.5505, -46.6333);

// ============================================================================
// Downtown delivery stops (a few km from the base)
// ============================================================================

pub const DOWNTOWN_STOPS: &[Location] = &[
    Location::new("Theatro Municipal", -23.5454, -46.6388),
    Location::new("Mercado Municipal", -23.5416, -46.6294),
    Location::new("Estação da Luz", -23.5344, -46.6358),
    Location::new("Pinacoteca", -23.5340, -46.6336),
];

// ============================================================================
// Wider-area stops (Paulista corridor and beyond)
// ============================================================================

pub const PAULISTA_STOPS: &[Location] = &[
    Location::new("MASP", -23.5614, -46.6559),
    Location::new("Liberdade", -23.5587, -46.6347),
    Location::new("Parque Ibirapuera", -23.5874, -46.6576),
    Location::new("Estádio do Pacaembu", -23.5475, -46.6653),
];
