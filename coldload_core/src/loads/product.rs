//! Product load
//!
//! Heat removed from incoming product over the pull-down (or batch) period.
//! All stages divide energy by `hours × 3.6` to give kW.
//!
//! ## Three-stage model (freezers)
//!
//! 1. Sensible above freezing, only when `incoming > fp`:
//!    `m × cp_above × (incoming − fp)`
//! 2. Latent, only when `incoming > fp` and `outgoing < fp`:
//!    `m × latent`
//! 3. Sensible below freezing, only when `outgoing < fp`, from the
//!    freezing point down to `outgoing`:
//!    `m × cp_below × (fp − outgoing)`
//!
//! Stage 3 always starts at `fp`, including for product that arrives
//! already frozen.
//!
//! ## Single-stage model (cold rooms)
//!
//! `m × cp × (incoming − outgoing)`, no phase change.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::loads::product::{three_stage, ThermalProperties};
//!
//! let pulp = ThermalProperties { cp_above: 3.74, cp_below: 1.96, latent_heat: 233.0, freezing_point: -0.8 };
//! let load = three_stage(3000.0, &pulp, 25.0, -15.0, 10.0);
//! assert!((load.latent() - 3000.0 * 233.0 / 36.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::KJ_PER_KWH;

/// Thermal properties driving the product load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalProperties {
    /// kJ/kg·K
    pub cp_above: f64,
    /// kJ/kg·K
    pub cp_below: f64,
    /// kJ/kg
    pub latent_heat: f64,
    /// °C
    pub freezing_point: f64,
}

/// Product load breakdown (kW)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum ProductLoad {
    #[serde(rename_all = "camelCase")]
    SingleStage { sensible: f64, total: f64 },
    #[serde(rename_all = "camelCase")]
    ThreeStage {
        sensible_above: f64,
        latent: f64,
        sensible_below: f64,
        total: f64,
    },
}

impl Default for ProductLoad {
    fn default() -> Self {
        ProductLoad::SingleStage {
            sensible: 0.0,
            total: 0.0,
        }
    }
}

impl ProductLoad {
    pub fn total(&self) -> f64 {
        match self {
            ProductLoad::SingleStage { total, .. } | ProductLoad::ThreeStage { total, .. } => *total,
        }
    }

    /// Sensible part (every stage except the phase change)
    pub fn sensible(&self) -> f64 {
        match self {
            ProductLoad::SingleStage { sensible, .. } => *sensible,
            ProductLoad::ThreeStage {
                sensible_above,
                sensible_below,
                ..
            } => sensible_above + sensible_below,
        }
    }

    /// Latent part (phase change only)
    pub fn latent(&self) -> f64 {
        match self {
            ProductLoad::SingleStage { .. } => 0.0,
            ProductLoad::ThreeStage { latent, .. } => *latent,
        }
    }
}

fn to_kw(energy_kj: f64, hours: f64) -> f64 {
    energy_kj / (hours * KJ_PER_KWH)
}

/// Single-stage cooling with no phase change
pub fn single_stage(mass_kg: f64, cp: f64, incoming: f64, outgoing: f64, hours: f64) -> ProductLoad {
    let sensible = to_kw(mass_kg * cp * (incoming - outgoing), hours);
    ProductLoad::SingleStage {
        sensible,
        total: sensible,
    }
}

/// Three-stage cooling through the freezing point
pub fn three_stage(
    mass_kg: f64,
    props: &ThermalProperties,
    incoming: f64,
    outgoing: f64,
    hours: f64,
) -> ProductLoad {
    let fp = props.freezing_point;

    let sensible_above = if incoming > fp {
        to_kw(mass_kg * props.cp_above * (incoming - fp), hours)
    } else {
        0.0
    };

    let latent = if incoming > fp && outgoing < fp {
        to_kw(mass_kg * props.latent_heat, hours)
    } else {
        0.0
    };

    let sensible_below = if outgoing < fp {
        to_kw(mass_kg * props.cp_below * (fp - outgoing), hours)
    } else {
        0.0
    };

    ProductLoad::ThreeStage {
        sensible_above,
        latent,
        sensible_below,
        total: sensible_above + latent + sensible_below,
    }
}
