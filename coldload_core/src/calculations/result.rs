//! Load calculation output
//!
//! Serializes as camelCase JSON (`totalBeforeSafety`, `finalLoad`,
//! `totalTR`, `totalBTU`, ...). Values are unrounded; rounding belongs to
//! whoever presents them.

use serde::{Deserialize, Serialize};

use crate::calculations::records::{OperatingConditions, RoomGeometry};
use crate::loads::{
    EnvelopeAreas, HeaterLoads, LoadComponent, MiscLoads, ProductLoad, SurfaceUFactors, ThermalProperties,
    TransmissionLoad,
};
use crate::profile::FacilityType;
use crate::units::{KilojoulesPerDay, Kilowatts};

/// Load per category (kW). Inactive scalar categories are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBreakdown {
    pub transmission: TransmissionLoad,
    pub product: ProductLoad,
    pub respiration: Option<f64>,
    pub air_change: f64,
    pub door_opening: Option<f64>,
    pub miscellaneous: MiscLoads,
    pub heaters: HeaterLoads,
    pub fan_motor: Option<f64>,
}

impl LoadBreakdown {
    /// Total of one category; inactive categories contribute zero
    pub fn category_total(&self, component: LoadComponent) -> f64 {
        match component {
            LoadComponent::Transmission => self.transmission.total,
            LoadComponent::Product => self.product.total(),
            LoadComponent::Respiration => self.respiration.unwrap_or(0.0),
            LoadComponent::AirChange => self.air_change,
            LoadComponent::DoorOpening => self.door_opening.unwrap_or(0.0),
            LoadComponent::Miscellaneous => self.miscellaneous.total,
            LoadComponent::Heaters => self.heaters.total,
            LoadComponent::FanMotor => self.fan_motor.unwrap_or(0.0),
        }
    }

    /// Load of one category, `None` when an optional category is inactive
    pub fn category(&self, component: LoadComponent) -> Option<f64> {
        if !component.is_optional() {
            return Some(self.category_total(component));
        }
        match component {
            LoadComponent::Respiration => self.respiration,
            LoadComponent::DoorOpening => self.door_opening,
            _ => self.fan_motor,
        }
    }

    /// Heat removed by each category over 24 hours (kJ)
    pub fn daily_kj(&self) -> CategoryHeat {
        let kj = |component: LoadComponent| {
            self.category(component)
                .map(|kw| KilojoulesPerDay::from(Kilowatts(kw)).0)
        };
        CategoryHeat {
            transmission: kj(LoadComponent::Transmission).unwrap_or_default(),
            product: kj(LoadComponent::Product).unwrap_or_default(),
            respiration: kj(LoadComponent::Respiration),
            air_change: kj(LoadComponent::AirChange).unwrap_or_default(),
            door_opening: kj(LoadComponent::DoorOpening),
            miscellaneous: kj(LoadComponent::Miscellaneous).unwrap_or_default(),
            heaters: kj(LoadComponent::Heaters).unwrap_or_default(),
            fan_motor: kj(LoadComponent::FanMotor),
        }
    }

    /// Sum of every category total
    pub fn total(&self) -> f64 {
        LoadComponent::ALL.iter().map(|&c| self.category_total(c)).sum()
    }

    /// Latent heat: product phase change plus steam humidifiers
    pub fn latent(&self) -> f64 {
        self.product.latent() + self.heaters.steam
    }

    /// Sensible heat: every sub-load except product latent and steam
    pub fn sensible(&self) -> f64 {
        self.transmission.total
            + self.product.sensible()
            + self.respiration.unwrap_or(0.0)
            + self.air_change
            + self.door_opening.unwrap_or(0.0)
            + self.miscellaneous.total
            + self.heaters.sensible()
            + self.fan_motor.unwrap_or(0.0)
    }
}

/// Sensible/latent split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadSummary {
    pub total_sensible: f64,
    pub total_latent: f64,
    /// Sensible heat ratio; 1.0 when sensible + latent is not positive
    #[serde(rename = "shr")]
    pub shr: f64,
}

/// Per-category heat over 24 hours (kJ), mirroring [`LoadBreakdown`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHeat {
    pub transmission: f64,
    pub product: f64,
    pub respiration: Option<f64>,
    pub air_change: f64,
    pub door_opening: Option<f64>,
    pub miscellaneous: f64,
    pub heaters: f64,
    pub fan_motor: Option<f64>,
}

/// Heat removed over 24 hours (kJ)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHeat {
    pub sensible_kj: f64,
    pub latent_kj: f64,
    pub total_kj: f64,
    pub by_category: CategoryHeat,
}

/// Product as used in the calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Name as entered
    pub name: String,
    /// Reference table entry the name resolved to
    pub table_entry: String,
    pub mass_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
    pub properties: ThermalProperties,
    pub density: f64,
    pub storage_efficiency: f64,
    /// Respiration rate applied (W/tonne), when respiration is active
    pub respiration_rate: Option<f64>,
}

/// Evaporator airflow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirFlowSummary {
    pub per_fan_cfm: f64,
    pub total_cfm: f64,
    /// Larger of the installed airflow and the minimum air-change airflow
    pub recommended_cfm: Option<f64>,
}

/// Room storage capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSummary {
    pub storage_type: String,
    pub storage_factor: f64,
    /// kg/m³
    pub density: f64,
    pub max_storage_kg: f64,
    pub current_load_kg: f64,
    /// `None` when the maximum is zero
    pub utilization_pct: Option<f64>,
    pub available_kg: f64,
}

/// Installed equipment at a glance (kW, CFM)
///
/// Ratings are as installed, before duty cycling; the breakdown carries the
/// duty-cycled loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSummary {
    pub fan_load_kw: f64,
    /// Electric heaters, excluding steam humidifiers
    pub heater_load_kw: f64,
    pub lighting_kw: f64,
    /// Occupants at the per-person heat rate
    pub people_kw: f64,
    pub total_air_flow_cfm: f64,
}

/// Complete result of one load calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    pub facility: FacilityType,
    pub room: RoomGeometry,
    pub conditions: OperatingConditions,
    pub areas: EnvelopeAreas,
    pub volume: f64,
    pub temperature_difference: f64,
    pub u_factors: SurfaceUFactors,
    pub product: ProductSummary,
    pub breakdown: LoadBreakdown,

    pub total_before_safety: f64,
    pub safety_factor: f64,
    pub safety_percentage: f64,
    pub safety_factor_load: f64,
    pub final_load: f64,

    #[serde(rename = "totalTR")]
    pub total_tr: f64,
    #[serde(rename = "totalBTU")]
    pub total_btu: f64,
    #[serde(rename = "dailyKJ")]
    pub daily_kj: f64,
    pub daily_energy_kwh: f64,

    pub load_summary: LoadSummary,
    pub heat_24h: DailyHeat,
    /// `None` when the temperature difference makes the formula non-finite
    pub air_qty_required_cfm: Option<f64>,
    pub air_flow: AirFlowSummary,
    pub storage: StorageSummary,
    pub equipment: EquipmentSummary,
    /// Energy removed per batch (kJ), blast freezers only
    pub load_kj_per_batch: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::product;

    fn breakdown() -> LoadBreakdown {
        LoadBreakdown {
            transmission: TransmissionLoad {
                walls: 1.0,
                ceiling: 0.5,
                floor: 0.5,
                total: 2.0,
            },
            product: ProductLoad::ThreeStage {
                sensible_above: 2.0,
                latent: 10.0,
                sensible_below: 3.0,
                total: 15.0,
            },
            respiration: None,
            air_change: 0.25,
            door_opening: None,
            miscellaneous: MiscLoads {
                occupancy: 0.5,
                lighting: 0.25,
                equipment: 0.25,
                total: 1.0,
            },
            heaters: HeaterLoads {
                peripheral: 0.0,
                door: 0.5,
                tray: 2.0,
                drain: 0.0,
                steam: 0.5,
                total: 3.0,
            },
            fan_motor: Some(2.0),
        }
    }

    #[test]
    fn test_sensible_plus_latent_is_total() {
        let b = breakdown();
        assert_eq!(b.total(), 23.25);
        assert_eq!(b.latent(), 10.5);
        assert_eq!(b.sensible(), 12.75);
    }

    #[test]
    fn test_category_distinguishes_inactive_from_zero() {
        let mut b = breakdown();
        b.door_opening = Some(0.0);
        assert_eq!(b.category(LoadComponent::Respiration), None);
        assert_eq!(b.category(LoadComponent::DoorOpening), Some(0.0));
        assert_eq!(b.category(LoadComponent::FanMotor), Some(2.0));
        assert_eq!(b.category(LoadComponent::Product), Some(15.0));
        assert_eq!(b.category_total(LoadComponent::Respiration), 0.0);
    }

    #[test]
    fn test_daily_kj_per_category() {
        let heat = breakdown().daily_kj();
        assert!((heat.transmission - 2.0 * 86.4).abs() < 1e-9);
        assert!((heat.product - 15.0 * 86.4).abs() < 1e-9);
        assert!((heat.heaters - 3.0 * 86.4).abs() < 1e-9);
        assert_eq!(heat.respiration, None);
        assert_eq!(heat.door_opening, None);
        assert!((heat.fan_motor.unwrap() - 2.0 * 86.4).abs() < 1e-9);
    }

    #[test]
    fn test_inactive_categories_serialize_null() {
        let mut b = breakdown();
        b.product = product::single_stage(0.0, 1.0, 0.0, 0.0, 1.0);
        let json = serde_json::to_value(b).unwrap();
        assert!(json["respiration"].is_null());
        assert!(json["doorOpening"].is_null());
        assert_eq!(json["fanMotor"], 2.0);
        assert_eq!(json["airChange"], 0.25);
    }
}
