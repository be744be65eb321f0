//! # Load Aggregator
//!
//! The one calculation shared by every facility type. A
//! [`FacilityProfile`] selects the active load components and supplies the
//! constants; [`run`] computes each component, sums them, applies the
//! safety factor and derives the capacity, energy, airflow and storage
//! figures.
//!
//! `run` never fails. Degenerate arithmetic is handled per output: the SHR
//! falls back to 1.0, while the required airflow and storage utilization
//! become `None` when their formulas are not finite.

use tracing::{debug, debug_span, warn};

use crate::calculations::records::LoadInput;
use crate::calculations::result::{
    AirFlowSummary, DailyHeat, EquipmentSummary, LoadBreakdown, LoadResult, LoadSummary, ProductSummary,
    StorageSummary,
};
use crate::constants::{AIR_DENSITY, AIR_SPECIFIC_HEAT_J, CUBIC_FEET_PER_CUBIC_METER, KJ_PER_KWH, W_PER_TR};
use crate::loads::{product, respiration, transmission, HeaterLoads, LoadComponent, MiscInput, MiscLoads};
use crate::materials::products;
use crate::profile::{DailyHeatBasis, FacilityProfile, ProductModel};
use crate::units::{BtuPerHour, KilojoulesPerDay, KilowattHoursPerDay, Kilowatts, TonsOfRefrigeration};

/// Sensible heat ratio, 1.0 when there is no positive load to split
pub fn sensible_heat_ratio(sensible: f64, latent: f64) -> f64 {
    let total = sensible + latent;
    if total > 0.0 {
        sensible / total
    } else {
        1.0
    }
}

/// Evaporator airflow needed to carry `load_kw` at `delta_t` (CFM)
///
/// `load_kW × 3517 / (1.2 × 1005 × ΔT)`. `None` when ΔT makes the result
/// non-finite.
pub fn required_airflow_cfm(load_kw: f64, delta_t: f64) -> Option<f64> {
    let cfm = (load_kw * W_PER_TR) / (AIR_DENSITY * AIR_SPECIFIC_HEAT_J * delta_t);
    if cfm.is_finite() {
        Some(cfm)
    } else {
        warn!(load_kw, delta_t, "required airflow is not finite");
        None
    }
}

/// Compute the load breakdown alone
pub fn breakdown(profile: &FacilityProfile, input: &LoadInput) -> LoadBreakdown {
    let room = &input.room;
    let cond = &input.conditions;
    let usage = &input.product;
    let delta_t = cond.temperature_difference();
    let hours = cond.operating_hours;

    let mut b = LoadBreakdown::default();
    for &component in &profile.components {
        match component {
            LoadComponent::Transmission => {
                let u = profile.transmission.u_factors(
                    room.insulation,
                    room.wall_thickness_mm,
                    room.ceiling_thickness_mm,
                    room.floor_thickness_mm,
                );
                b.transmission = transmission::calculate(&u, &room.areas(), delta_t, hours);
            }
            LoadComponent::Product => {
                b.product = match profile.product_model {
                    ProductModel::SingleStage => product::single_stage(
                        usage.mass_kg,
                        usage.thermal.cp_above,
                        usage.incoming_temp_c,
                        usage.outgoing_temp_c,
                        cond.pull_down_hours,
                    ),
                    ProductModel::ThreeStage => product::three_stage(
                        usage.mass_kg,
                        &usage.thermal,
                        usage.incoming_temp_c,
                        usage.outgoing_temp_c,
                        cond.pull_down_hours,
                    ),
                };
            }
            LoadComponent::Respiration => {
                let rate = profile.respiration.rate(usage.respiration_rate);
                b.respiration = Some(respiration::calculate(usage.mass_kg, rate));
            }
            LoadComponent::AirChange => {
                b.air_change = profile.air_change.load(room.volume(), hours);
            }
            // Infiltration through the door is covered by the air-change load
            LoadComponent::DoorOpening => b.door_opening = Some(0.0),
            LoadComponent::Miscellaneous => {
                b.miscellaneous = MiscLoads::calculate(&MiscInput {
                    people: usage.people,
                    kw_per_person: profile.kw_per_person,
                    working_hours: usage.working_hours,
                    lighting_kw: usage.lighting_kw,
                    equipment_kw: usage.equipment_kw,
                    operating_hours: hours,
                });
            }
            LoadComponent::Heaters => {
                b.heaters = HeaterLoads::calculate(&usage.heaters, cond.steam_kw, hours);
            }
            LoadComponent::FanMotor => b.fan_motor = Some(usage.fans.load()),
        }
    }
    b
}

/// Run a full load calculation for `input` under `profile`
pub fn run(profile: &FacilityProfile, input: &LoadInput) -> LoadResult {
    let span = debug_span!("load_calculation", facility = %profile.facility);
    let _guard = span.enter();

    let room = &input.room;
    let cond = &input.conditions;
    let usage = &input.product;
    let delta_t = cond.temperature_difference();
    let volume = room.volume();

    let b = breakdown(profile, input);

    let total_before_safety = b.total();
    let final_load = total_before_safety * profile.safety_factor;
    let safety_factor_load = final_load - total_before_safety;
    let final_kw = Kilowatts(final_load);

    let total_sensible = b.sensible();
    let total_latent = b.latent();
    let load_summary = LoadSummary {
        total_sensible,
        total_latent,
        shr: sensible_heat_ratio(total_sensible, total_latent),
    };

    let heat_24h = match profile.daily_heat_basis {
        DailyHeatBasis::FinalLoad => {
            let sensible_kj = KilojoulesPerDay::from(final_kw).0;
            DailyHeat {
                sensible_kj,
                latent_kj: 0.0,
                total_kj: sensible_kj,
                by_category: b.daily_kj(),
            }
        }
        DailyHeatBasis::ProductStages => {
            let sensible_kj = KilojoulesPerDay::from(Kilowatts(b.product.sensible())).0;
            let latent_kj = KilojoulesPerDay::from(Kilowatts(b.product.latent())).0;
            DailyHeat {
                sensible_kj,
                latent_kj,
                total_kj: sensible_kj + latent_kj,
                by_category: b.daily_kj(),
            }
        }
    };

    let total_cfm = usage.fans.total_airflow_cfm();
    let air_flow = AirFlowSummary {
        per_fan_cfm: usage.fans.airflow_cfm_per_fan,
        total_cfm,
        recommended_cfm: profile
            .min_air_changes_per_hour
            .map(|ach| total_cfm.max(volume * CUBIC_FEET_PER_CUBIC_METER * ach)),
    };

    let entry = products::lookup(&usage.product_name);
    let efficiency = if profile.storage_uses_product_efficiency {
        entry.storage_efficiency
    } else {
        1.0
    };
    let max_storage_kg = volume * usage.storage_density * efficiency;
    let utilization = usage.mass_kg / max_storage_kg * 100.0;
    let storage_type = usage.storage_type();
    let storage = StorageSummary {
        storage_type: storage_type.display_name().to_string(),
        storage_factor: storage_type.storage_factor(),
        density: usage.storage_density,
        max_storage_kg,
        current_load_kg: usage.mass_kg,
        utilization_pct: utilization.is_finite().then_some(utilization),
        available_kg: max_storage_kg - usage.mass_kg,
    };

    let equipment = EquipmentSummary {
        fan_load_kw: usage.fans.rated_kw(),
        heater_load_kw: usage.heaters.rated_kw(),
        lighting_kw: usage.lighting_kw,
        people_kw: usage.people * profile.kw_per_person,
        total_air_flow_cfm: total_cfm,
    };

    let product = ProductSummary {
        name: usage.product_name.clone(),
        table_entry: entry.name.to_string(),
        mass_kg: usage.mass_kg,
        incoming_temp_c: usage.incoming_temp_c,
        outgoing_temp_c: usage.outgoing_temp_c,
        properties: usage.thermal,
        density: entry.density,
        storage_efficiency: entry.storage_efficiency,
        respiration_rate: profile
            .is_active(LoadComponent::Respiration)
            .then(|| profile.respiration.rate(usage.respiration_rate)),
    };

    let load_kj_per_batch = profile
        .reports_batch_energy
        .then(|| total_before_safety * cond.pull_down_hours * KJ_PER_KWH);

    debug!(total_before_safety, final_load, "load calculation complete");

    LoadResult {
        facility: profile.facility,
        room: *room,
        conditions: *cond,
        areas: room.areas(),
        volume,
        temperature_difference: delta_t,
        u_factors: profile.transmission.u_factors(
            room.insulation,
            room.wall_thickness_mm,
            room.ceiling_thickness_mm,
            room.floor_thickness_mm,
        ),
        product,
        breakdown: b,
        total_before_safety,
        safety_factor: profile.safety_factor,
        safety_percentage: profile.safety_percentage(),
        safety_factor_load,
        final_load,
        total_tr: TonsOfRefrigeration::from(final_kw).0,
        total_btu: BtuPerHour::from(final_kw).0,
        daily_kj: KilojoulesPerDay::from(final_kw).0,
        daily_energy_kwh: KilowattHoursPerDay::from(final_kw).0,
        load_summary,
        heat_24h,
        air_qty_required_cfm: required_airflow_cfm(final_load, delta_t),
        air_flow,
        storage,
        equipment,
        load_kj_per_batch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shr_fallback() {
        assert_eq!(sensible_heat_ratio(0.0, 0.0), 1.0);
        assert_eq!(sensible_heat_ratio(-2.0, 1.0), 1.0);
        assert_eq!(sensible_heat_ratio(3.0, 1.0), 0.75);
    }

    #[test]
    fn test_airflow_zero_delta_t() {
        assert_eq!(required_airflow_cfm(10.0, 0.0), None);
        assert_eq!(required_airflow_cfm(0.0, 0.0), None);
    }

    #[test]
    fn test_airflow_formula() {
        let cfm = required_airflow_cfm(10.0, 80.0).unwrap();
        assert!((cfm - 10.0 * 3517.0 / (1.2 * 1005.0 * 80.0)).abs() < 1e-9);
    }
}
