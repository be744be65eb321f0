//! Insulation Panels
//!
//! Thermal conductivity of the sandwich-panel cores used for cold-store
//! envelopes, and the U-factor of a panel of given thickness:
//!
//! `U = k / (thickness_mm / 1000)` (W/m²K)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::{Meters, Millimeters};

/// Thickness used when a panel thickness is zero or negative (mm)
pub const DEFAULT_THICKNESS_MM: f64 = 150.0;

/// Insulation core material
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InsulationType {
    /// Polyurethane foam
    #[default]
    PUF,
    /// Polyisocyanurate
    PIR,
    /// Expanded polystyrene
    EPS,
    /// Extruded polystyrene
    XPS,
}

impl InsulationType {
    pub const ALL: [InsulationType; 4] = [
        InsulationType::PUF,
        InsulationType::PIR,
        InsulationType::EPS,
        InsulationType::XPS,
    ];

    /// Thermal conductivity k (W/m·K)
    pub fn conductivity(&self) -> f64 {
        match self {
            InsulationType::PUF => 0.023,
            InsulationType::PIR => 0.022,
            InsulationType::EPS => 0.036,
            InsulationType::XPS => 0.029,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InsulationType::PUF => "PUF (Polyurethane)",
            InsulationType::PIR => "PIR (Polyisocyanurate)",
            InsulationType::EPS => "EPS (Expanded Polystyrene)",
            InsulationType::XPS => "XPS (Extruded Polystyrene)",
        }
    }

    /// Parse from common spellings ("puf", "Polyurethane", "pir")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "PUF" | "PU" | "POLYURETHANE" | "PUR" => Ok(InsulationType::PUF),
            "PIR" | "POLYISOCYANURATE" => Ok(InsulationType::PIR),
            "EPS" | "EXPANDEDPOLYSTYRENE" => Ok(InsulationType::EPS),
            "XPS" | "EXTRUDEDPOLYSTYRENE" => Ok(InsulationType::XPS),
            _ => Err(CalcError::unknown_reference("insulation", s)),
        }
    }

    /// Parse, resolving unknown names to PUF
    pub fn lookup(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            debug!(insulation = s, "unknown insulation type, using PUF");
            InsulationType::default()
        })
    }

    /// U-factor (W/m²K) of a panel of this material
    ///
    /// A non-positive thickness uses [`DEFAULT_THICKNESS_MM`].
    ///
    /// ```rust
    /// use coldload_core::materials::InsulationType;
    /// use coldload_core::units::Millimeters;
    ///
    /// let u = InsulationType::PUF.u_factor(Millimeters(150.0));
    /// assert!((u - 0.023 / 0.15).abs() < 1e-12);
    /// ```
    pub fn u_factor(&self, thickness: Millimeters) -> f64 {
        let thickness = if thickness.0 > 0.0 {
            thickness
        } else {
            debug!(thickness_mm = thickness.0, "non-positive panel thickness, using default");
            Millimeters(DEFAULT_THICKNESS_MM)
        };
        let meters: Meters = thickness.into();
        self.conductivity() / meters.0
    }
}

impl std::fmt::Display for InsulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
