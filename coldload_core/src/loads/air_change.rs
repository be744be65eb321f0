//! Air-change load
//!
//! Heat carried in by outside air replacing room air. Two models are in use:
//!
//! - **Flow rate**: a fixed infiltration flow,
//!   `flow_L_per_s × Δh × hours / 24 / 1000`
//! - **Volume changes**: a number of room volumes per hour,
//!   `changes_per_hour × V × Δh × hours / 1000`

use serde::{Deserialize, Serialize};

use crate::constants::HOURS_PER_DAY;

/// Air-change model and its constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum AirChangeModel {
    FlowRate {
        /// Infiltration flow (L/s)
        flow_l_per_s: f64,
        /// Enthalpy difference between outside and room air
        enthalpy_diff: f64,
    },
    VolumeChanges {
        changes_per_hour: f64,
        enthalpy_diff: f64,
    },
}

impl AirChangeModel {
    /// Air-change load (kW) for a room of `volume_m3` over `hours` of operation
    ///
    /// ```rust
    /// use coldload_core::loads::AirChangeModel;
    ///
    /// let freezer = AirChangeModel::FlowRate { flow_l_per_s: 9.4, enthalpy_diff: 0.1203 };
    /// let load = freezer.load(98.0, 24.0);
    /// assert!((load - 9.4 * 0.1203 / 1000.0).abs() < 1e-12);
    /// ```
    pub fn load(&self, volume_m3: f64, hours: f64) -> f64 {
        match *self {
            AirChangeModel::FlowRate {
                flow_l_per_s,
                enthalpy_diff,
            } => (flow_l_per_s * enthalpy_diff * hours) / HOURS_PER_DAY / 1000.0,
            AirChangeModel::VolumeChanges {
                changes_per_hour,
                enthalpy_diff,
            } => (changes_per_hour * volume_m3 * enthalpy_diff * hours) / 1000.0,
        }
    }
}
