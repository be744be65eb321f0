//! # Facility Profiles
//!
//! A [`FacilityProfile`] holds everything that differs between facility
//! types: formula constants, which load components are active, and how the
//! product load and derived outputs are computed. The aggregator in
//! [`crate::calculations::engine`] is the same for every facility; only the
//! profile changes.
//!
//! | | Cold room | Freezer | Blast freezer |
//! |---|---|---|---|
//! | Safety factor | 1.10 | 1.10 | 1.05 |
//! | U-factor | fixed 0.295 | fixed 0.295 | insulation table |
//! | Air change | 3.4 L/s × 0.10 | 9.4 L/s × 0.1203 | 4.2 changes/h × 0.14 |
//! | Occupancy per person | 1.0 kW | 0.407 kW | 0.407 kW |
//! | Product model | single stage | three stage | three stage |
//! | Extra components | respiration, door opening | fan motor | none |
//!
//! Profiles are plain values: callers may build their own to model a
//! facility that is not built in.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::profile::{FacilityProfile, FacilityType};
//! use coldload_core::loads::LoadComponent;
//!
//! let freezer = FacilityProfile::for_facility(FacilityType::Freezer);
//! assert!(freezer.is_active(LoadComponent::FanMotor));
//! assert!(!freezer.is_active(LoadComponent::Respiration));
//! assert_eq!(freezer.safety_factor, 1.10);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{AirChangeModel, LoadComponent, RespirationPolicy, SurfaceUFactors};
use crate::materials::InsulationType;
use crate::units::Millimeters;

/// Kind of cold-storage facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    /// Above-freezing storage
    ColdRoom,
    /// Below-freezing storage
    Freezer,
    /// Fast batch freezing
    BlastFreezer,
}

impl FacilityType {
    pub const ALL: [FacilityType; 3] = [
        FacilityType::ColdRoom,
        FacilityType::Freezer,
        FacilityType::BlastFreezer,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FacilityType::ColdRoom => "Cold Room",
            FacilityType::Freezer => "Freezer",
            FacilityType::BlastFreezer => "Blast Freezer",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "COLDROOM" | "CHILLER" => Ok(FacilityType::ColdRoom),
            "FREEZER" | "FREEZERROOM" => Ok(FacilityType::Freezer),
            "BLASTFREEZER" | "BLAST" => Ok(FacilityType::BlastFreezer),
            _ => Err(CalcError::unknown_reference("facility", s)),
        }
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How envelope U-factors are obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum TransmissionModel {
    /// One U-factor (W/m²K) on every surface regardless of construction
    FixedU { u_factor: f64 },
    /// Per-surface U from insulation conductivity and panel thickness
    InsulationTable,
}

impl TransmissionModel {
    pub fn u_factors(
        &self,
        insulation: InsulationType,
        wall_mm: f64,
        ceiling_mm: f64,
        floor_mm: f64,
    ) -> SurfaceUFactors {
        match *self {
            TransmissionModel::FixedU { u_factor } => SurfaceUFactors::uniform(u_factor),
            TransmissionModel::InsulationTable => SurfaceUFactors {
                walls: insulation.u_factor(Millimeters(wall_mm)),
                ceiling: insulation.u_factor(Millimeters(ceiling_mm)),
                floor: insulation.u_factor(Millimeters(floor_mm)),
            },
        }
    }
}

/// Product load model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductModel {
    /// Straight cooling, no phase change
    SingleStage,
    /// Sensible above, latent, sensible below the freezing point
    ThreeStage,
}

/// Basis for the 24-hour heat figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyHeatBasis {
    /// Final load as sensible heat, no latent heat
    FinalLoad,
    /// Product sensible and latent stages
    ProductStages,
}

/// Constants and switches for one facility type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityProfile {
    pub facility: FacilityType,
    /// Active load components in load-sheet order
    pub components: Vec<LoadComponent>,
    /// Multiplier applied to the summed load (1.10 = 10 %)
    pub safety_factor: f64,
    pub transmission: TransmissionModel,
    pub product_model: ProductModel,
    pub respiration: RespirationPolicy,
    pub air_change: AirChangeModel,
    /// Sensible heat per occupant (kW)
    pub kw_per_person: f64,
    /// Multiply maximum storage by the product's storage efficiency
    pub storage_uses_product_efficiency: bool,
    /// Minimum room air changes per hour for the recommended fan airflow
    pub min_air_changes_per_hour: Option<f64>,
    pub daily_heat_basis: DailyHeatBasis,
    /// Report the energy removed per batch
    pub reports_batch_energy: bool,
}

impl FacilityProfile {
    /// Built-in profile for a facility type
    pub fn for_facility(facility: FacilityType) -> Self {
        match facility {
            FacilityType::ColdRoom => Self::cold_room(),
            FacilityType::Freezer => Self::freezer(),
            FacilityType::BlastFreezer => Self::blast_freezer(),
        }
    }

    pub fn cold_room() -> Self {
        Self {
            facility: FacilityType::ColdRoom,
            components: vec![
                LoadComponent::Transmission,
                LoadComponent::Product,
                LoadComponent::Respiration,
                LoadComponent::AirChange,
                LoadComponent::DoorOpening,
                LoadComponent::Miscellaneous,
                LoadComponent::Heaters,
            ],
            safety_factor: 1.10,
            transmission: TransmissionModel::FixedU { u_factor: 0.295 },
            product_model: ProductModel::SingleStage,
            respiration: RespirationPolicy::Fixed { w_per_tonne: 50.0 },
            air_change: AirChangeModel::FlowRate {
                flow_l_per_s: 3.4,
                enthalpy_diff: 0.10,
            },
            kw_per_person: 1.0,
            storage_uses_product_efficiency: false,
            min_air_changes_per_hour: Some(0.3),
            daily_heat_basis: DailyHeatBasis::FinalLoad,
            reports_batch_energy: false,
        }
    }

    pub fn freezer() -> Self {
        Self {
            facility: FacilityType::Freezer,
            components: vec![
                LoadComponent::Transmission,
                LoadComponent::Product,
                LoadComponent::AirChange,
                LoadComponent::Miscellaneous,
                LoadComponent::Heaters,
                LoadComponent::FanMotor,
            ],
            safety_factor: 1.10,
            transmission: TransmissionModel::FixedU { u_factor: 0.295 },
            product_model: ProductModel::ThreeStage,
            respiration: RespirationPolicy::Fixed { w_per_tonne: 0.0 },
            air_change: AirChangeModel::FlowRate {
                flow_l_per_s: 9.4,
                enthalpy_diff: 0.1203,
            },
            kw_per_person: 0.407,
            storage_uses_product_efficiency: false,
            min_air_changes_per_hour: None,
            daily_heat_basis: DailyHeatBasis::ProductStages,
            reports_batch_energy: false,
        }
    }

    pub fn blast_freezer() -> Self {
        Self {
            facility: FacilityType::BlastFreezer,
            components: vec![
                LoadComponent::Transmission,
                LoadComponent::Product,
                LoadComponent::AirChange,
                LoadComponent::Miscellaneous,
                LoadComponent::Heaters,
            ],
            safety_factor: 1.05,
            transmission: TransmissionModel::InsulationTable,
            product_model: ProductModel::ThreeStage,
            respiration: RespirationPolicy::Fixed { w_per_tonne: 0.0 },
            air_change: AirChangeModel::VolumeChanges {
                changes_per_hour: 4.2,
                enthalpy_diff: 0.14,
            },
            kw_per_person: 407.0 / 1000.0,
            storage_uses_product_efficiency: true,
            min_air_changes_per_hour: None,
            daily_heat_basis: DailyHeatBasis::ProductStages,
            reports_batch_energy: true,
        }
    }

    pub fn is_active(&self, component: LoadComponent) -> bool {
        self.components.contains(&component)
    }

    /// Safety allowance as a percentage (1.10 → 10 %)
    pub fn safety_percentage(&self) -> f64 {
        (self.safety_factor - 1.0) * 100.0
    }
}
