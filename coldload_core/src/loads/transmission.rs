//! Transmission load
//!
//! Conductive heat gain through the envelope, per surface:
//!
//! `load_kW = U × A × ΔT × operating_hours / 24 / 1000`
//!
//! A negative ΔT (room warmer than ambient) gives a negative load. Nothing
//! is clamped.

use serde::{Deserialize, Serialize};

use crate::constants::HOURS_PER_DAY;

/// Envelope surface areas (m²)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvelopeAreas {
    pub wall: f64,
    pub ceiling: f64,
    pub floor: f64,
    pub door: f64,
}

/// U-factor of each surface (W/m²K)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceUFactors {
    pub walls: f64,
    pub ceiling: f64,
    pub floor: f64,
}

impl SurfaceUFactors {
    /// Same U-factor on every surface
    pub fn uniform(u: f64) -> Self {
        Self {
            walls: u,
            ceiling: u,
            floor: u,
        }
    }
}

/// Transmission load per surface (kW)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransmissionLoad {
    pub walls: f64,
    pub ceiling: f64,
    pub floor: f64,
    pub total: f64,
}

/// Load through one surface (kW)
pub fn surface_load(u_factor: f64, area_m2: f64, delta_t: f64, hours: f64) -> f64 {
    (u_factor * area_m2 * delta_t * hours) / HOURS_PER_DAY / 1000.0
}

/// Transmission load through walls, ceiling and floor
pub fn calculate(u: &SurfaceUFactors, areas: &EnvelopeAreas, delta_t: f64, hours: f64) -> TransmissionLoad {
    let walls = surface_load(u.walls, areas.wall, delta_t, hours);
    let ceiling = surface_load(u.ceiling, areas.ceiling, delta_t, hours);
    let floor = surface_load(u.floor, areas.floor, delta_t, hours);
    TransmissionLoad {
        walls,
        ceiling,
        floor,
        total: walls + ceiling + floor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freezer_areas() -> EnvelopeAreas {
        // 7 × 4 × 3.5 m
        EnvelopeAreas {
            wall: 77.0,
            ceiling: 28.0,
            floor: 28.0,
            door: 3.6,
        }
    }

    #[test]
    fn test_fixed_u_freezer() {
        let load = calculate(&SurfaceUFactors::uniform(0.295), &freezer_areas(), 80.0, 24.0);
        assert!((load.walls - 0.295 * 77.0 * 80.0 / 1000.0).abs() < 1e-12);
        assert!((load.ceiling - 0.295 * 28.0 * 80.0 / 1000.0).abs() < 1e-12);
        assert_eq!(load.total, load.walls + load.ceiling + load.floor);
    }

    #[test]
    fn test_hours_scale_linearly() {
        let full = surface_load(0.3, 10.0, 40.0, 24.0);
        let half = surface_load(0.3, 10.0, 40.0, 12.0);
        assert!((full - 2.0 * half).abs() < 1e-12);
    }

    #[test]
    fn test_negative_delta_t_not_clamped() {
        let load = calculate(&SurfaceUFactors::uniform(0.295), &freezer_areas(), -10.0, 24.0);
        assert!(load.total < 0.0);
    }
}
