//! # Unit Types
//!
//! Type-safe wrappers for the units that flow through a load calculation.
//! These are plain f64 newtypes that serialize as bare numbers.
//!
//! ## SI Units (Primary)
//!
//! ColdLoad works in SI internally, matching the refrigeration sizing sheets
//! it replaces:
//! - Length: metres (m), millimetres (mm) for insulation thickness
//! - Power: watts (W), kilowatts (kW)
//! - Capacity: tons of refrigeration (TR), BTU per hour (BTU/h)
//! - Energy: kilojoules per day (kJ/day), kilowatt-hours per day (kWh/day)
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::units::{Kilowatts, TonsOfRefrigeration, Watts};
//!
//! let lighting: Kilowatts = Watts(150.0).into();
//! assert_eq!(lighting.0, 0.15);
//!
//! let capacity: TonsOfRefrigeration = Kilowatts(35.17).into();
//! assert!((capacity.0 - 10.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{BTU_PER_HOUR_PER_KW, HOURS_PER_DAY, KJ_PER_KWH, KW_PER_TR};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres (insulation and slab thickness)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / 1000.0)
    }
}

// ============================================================================
// Refrigeration Capacity Units
// ============================================================================

/// Capacity in tons of refrigeration (1 TR = 3.517 kW)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonsOfRefrigeration(pub f64);

/// Capacity in BTU per hour
///
/// Uses the sizing-sheet factor of 3412 BTU/h per kW.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BtuPerHour(pub f64);

impl From<Kilowatts> for TonsOfRefrigeration {
    fn from(kw: Kilowatts) -> Self {
        TonsOfRefrigeration(kw.0 / KW_PER_TR)
    }
}

impl From<Kilowatts> for BtuPerHour {
    fn from(kw: Kilowatts) -> Self {
        BtuPerHour(kw.0 * BTU_PER_HOUR_PER_KW)
    }
}

// ============================================================================
// Daily Energy Units
// ============================================================================

/// Energy per day in kilojoules, for a load sustained over 24 hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilojoulesPerDay(pub f64);

/// Energy per day in kilowatt-hours, for a load sustained over 24 hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilowattHoursPerDay(pub f64);

impl From<Kilowatts> for KilojoulesPerDay {
    fn from(kw: Kilowatts) -> Self {
        KilojoulesPerDay(kw.0 * HOURS_PER_DAY * KJ_PER_KWH)
    }
}

impl From<Kilowatts> for KilowattHoursPerDay {
    fn from(kw: Kilowatts) -> Self {
        KilowattHoursPerDay(kw.0 * HOURS_PER_DAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters_to_meters() {
        let mm = Millimeters(150.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 0.15);
    }

    #[test]
    fn test_watts_to_kilowatts() {
        let kw: Kilowatts = Watts(250.0).into();
        assert_eq!(kw.0, 0.25);
    }

    #[test]
    fn test_refrigeration_conversions() {
        let load = Kilowatts(10.0);
        let tr: TonsOfRefrigeration = load.into();
        assert!((tr.0 - 10.0 / 3.517).abs() < 1e-12);

        let btu: BtuPerHour = load.into();
        assert_eq!(btu.0, 34_120.0);
    }

    #[test]
    fn test_daily_energy() {
        let kj: KilojoulesPerDay = Kilowatts(1.0).into();
        assert!((kj.0 - 86.4).abs() < 1e-12);

        let kwh: KilowattHoursPerDay = Kilowatts(2.5).into();
        assert_eq!(kwh.0, 60.0);
    }

    #[test]
    fn test_serialization() {
        let kw = Kilowatts(12.5);
        let json = serde_json::to_string(&kw).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Kilowatts = serde_json::from_str(&json).unwrap();
        assert_eq!(kw, roundtrip);
    }
}
