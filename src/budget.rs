//! Battery budget check for a computed route distance.

use serde::{Deserialize, Serialize};

/// Verdict of comparing a route distance against a battery limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetCheck {
    pub within_budget: bool,
    /// Kilometers over the limit; 0 when within budget.
    pub excess_km: f64,
}

/// Compare `distance_km` against an optional battery limit.
///
/// `None` means unbounded: always within budget, zero excess. Pure
/// reporting; nothing is recomputed on failure.
pub fn check_budget(distance_km: f64, limit_km: Option<f64>) -> BudgetCheck {
    match limit_km {
        None => BudgetCheck {
            within_budget: true,
            excess_km: 0.0,
        },
        Some(limit) => BudgetCheck {
            within_budget: distance_km <= limit,
            excess_km: (distance_km - limit).max(0.0),
        },
    }
}
