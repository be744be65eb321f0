//! Respiration load
//!
//! Living produce keeps respiring in storage:
//! `load_kW = (mass_kg / 1000) × rate_W_per_tonne / 1000`.

use serde::{Deserialize, Serialize};

/// Where the respiration rate comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy")]
pub enum RespirationPolicy {
    /// One rate for every product, whatever the caller supplied
    Fixed { w_per_tonne: f64 },
    /// The caller's `respiration_rate` field
    FromInput,
}

impl RespirationPolicy {
    /// Rate to use (W/tonne) given the caller's value
    pub fn rate(&self, input_rate: f64) -> f64 {
        match self {
            RespirationPolicy::Fixed { w_per_tonne } => *w_per_tonne,
            RespirationPolicy::FromInput => input_rate,
        }
    }
}

/// Respiration load (kW)
pub fn calculate(mass_kg: f64, rate_w_per_tonne: f64) -> f64 {
    (mass_kg / 1000.0) * rate_w_per_tonne / 1000.0
}
