//! # Engineering Constants
//!
//! Conversion factors and physical constants shared by every facility
//! calculator. Facility-specific formula constants (U-factors, air-change
//! rates, safety factors) live on [`FacilityProfile`](crate::profile::FacilityProfile).

/// Kilowatts per ton of refrigeration
pub const KW_PER_TR: f64 = 3.517;

/// Watts per ton of refrigeration, used by the airflow formula
pub const W_PER_TR: f64 = 3517.0;

/// BTU per hour per kilowatt (sizing-sheet factor)
pub const BTU_PER_HOUR_PER_KW: f64 = 3412.0;

/// Kilojoules per kilowatt-hour divided by 1000 (kJ/h per kW = 3600, scaled)
///
/// Product loads divide kJ by `hours × 3.6`; daily energy multiplies kW by `24 × 3.6`.
pub const KJ_PER_KWH: f64 = 3.6;

/// Hours in a day, the duty-cycle base for every time-weighted load
pub const HOURS_PER_DAY: f64 = 24.0;

/// Density of air (kg/m³)
pub const AIR_DENSITY: f64 = 1.2;

/// Specific heat of air (J/kg·K)
pub const AIR_SPECIFIC_HEAT_J: f64 = 1005.0;

/// Cubic feet per cubic metre
pub const CUBIC_FEET_PER_CUBIC_METER: f64 = 35.31;

/// Reference formulas, kept next to the constants they use.
///
/// These strings are reported alongside results so a reviewer can trace a
/// number back to the formula that produced it.
pub mod formula {
    /// Conduction through one envelope surface
    pub const TRANSMISSION: &str = "U × A × ΔT × hours / 24 / 1000";
    /// Stage 1 of the product load
    pub const SENSIBLE_ABOVE: &str = "m × Cp_above × (T_in − T_f) / (hours × 3.6)";
    /// Stage 2 of the product load
    pub const LATENT: &str = "m × h_latent / (hours × 3.6)";
    /// Stage 3 of the product load
    pub const SENSIBLE_BELOW: &str = "m × Cp_below × (T_f − T_out) / (hours × 3.6)";
    /// Single-stage product load (cold room)
    pub const SINGLE_STAGE: &str = "m × Cp × (T_in − T_out) / (hours × 3.6)";
    /// Respiration of stored produce
    pub const RESPIRATION: &str = "(m / 1000) × rate_W_per_tonne / 1000";
    /// Air change by flow rate
    pub const AIR_CHANGE_FLOW: &str = "flow × Δh × hours / 24 / 1000";
    /// Air change by room volume
    pub const AIR_CHANGE_VOLUME: &str = "changes × V × Δh × hours / 1000";
    /// Duty-cycled electrical load
    pub const DUTY_CYCLE: &str = "rated_kW × hours / 24";
    /// Required evaporator airflow
    pub const AIRFLOW_CFM: &str = "Q_kW × 3517 / (1.2 × 1005 × ΔT)";

    /// Every formula with a short label, in load-sheet order
    pub const ALL: [(&str, &str); 10] = [
        ("Transmission", TRANSMISSION),
        ("Product, sensible above freezing", SENSIBLE_ABOVE),
        ("Product, latent", LATENT),
        ("Product, sensible below freezing", SENSIBLE_BELOW),
        ("Product, single stage", SINGLE_STAGE),
        ("Respiration", RESPIRATION),
        ("Air change, flow rate", AIR_CHANGE_FLOW),
        ("Air change, volume", AIR_CHANGE_VOLUME),
        ("Internal loads", DUTY_CYCLE),
        ("Required airflow", AIRFLOW_CFM),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_constants_agree() {
        assert!((KW_PER_TR * 1000.0 - W_PER_TR).abs() < 1e-9);
    }

    #[test]
    fn test_formula_labels_unique() {
        let mut labels: Vec<&str> = formula::ALL.iter().map(|(label, _)| *label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), formula::ALL.len());
    }

    #[test]
    fn test_daily_kj_factor() {
        assert!((HOURS_PER_DAY * KJ_PER_KWH - 86.4).abs() < 1e-12);
    }
}
