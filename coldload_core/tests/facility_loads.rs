//! End-to-end load calculations through the public form API.

use approx::{assert_abs_diff_eq, assert_relative_eq};

use coldload_core::calculations::{ColdRoomForm, FacilityForm, FreezerForm, LoadResult};
use coldload_core::input::FieldValue;
use coldload_core::loads::{LoadComponent, ProductLoad};
use coldload_core::profile::{FacilityProfile, FacilityType};

fn default_results() -> Vec<LoadResult> {
    FacilityType::ALL
        .iter()
        .map(|&facility| FacilityForm::empty(facility).compute())
        .collect()
}

fn form(json: &str) -> FacilityForm {
    serde_json::from_str(json).unwrap()
}

#[test]
fn categories_sum_to_total_before_safety() {
    for result in default_results() {
        let sum: f64 = LoadComponent::ALL
            .iter()
            .map(|&c| result.breakdown.category_total(c))
            .sum();
        assert_relative_eq!(result.total_before_safety, sum, max_relative = 1e-12);
        assert_relative_eq!(
            result.breakdown.transmission.total,
            result.breakdown.transmission.walls + result.breakdown.transmission.ceiling + result.breakdown.transmission.floor,
            max_relative = 1e-12
        );
    }
}

#[test]
fn safety_factor_applies_to_total() {
    for result in default_results() {
        let profile = FacilityProfile::for_facility(result.facility);
        assert_eq!(result.safety_factor, profile.safety_factor);
        assert_relative_eq!(result.final_load, result.total_before_safety * profile.safety_factor, max_relative = 1e-12);
        assert_relative_eq!(
            result.safety_factor_load,
            result.final_load - result.total_before_safety,
            max_relative = 1e-9
        );
    }
}

#[test]
fn capacity_conversions() {
    for result in default_results() {
        assert_relative_eq!(result.total_tr, result.final_load / 3.517, max_relative = 1e-12);
        assert_relative_eq!(result.total_btu, result.final_load * 3412.0, max_relative = 1e-12);
        assert_relative_eq!(result.daily_kj, result.final_load * 24.0 * 3.6, max_relative = 1e-12);
        assert_relative_eq!(result.daily_energy_kwh, result.final_load * 24.0, max_relative = 1e-12);
    }
}

#[test]
fn inactive_components_are_absent() {
    let results = default_results();

    let cold_room = &results[0];
    assert!(cold_room.breakdown.respiration.is_some());
    assert_eq!(cold_room.breakdown.door_opening, Some(0.0));
    assert!(cold_room.breakdown.fan_motor.is_none());

    let freezer = &results[1];
    assert!(freezer.breakdown.respiration.is_none());
    assert!(freezer.breakdown.fan_motor.is_some());

    let blast = &results[2];
    assert!(blast.breakdown.respiration.is_none());
    assert!(blast.breakdown.door_opening.is_none());
    assert!(blast.breakdown.fan_motor.is_none());
    assert!(blast.load_kj_per_batch.is_some());
    assert!(cold_room.load_kj_per_batch.is_none());
}

#[test]
fn cold_room_defaults() {
    let result = FacilityForm::empty(FacilityType::ColdRoom).compute();

    assert_relative_eq!(result.volume, 3.05 * 4.5 * 3.0, max_relative = 1e-12);
    assert_relative_eq!(result.storage.max_storage_kg, 329.4, max_relative = 1e-9);
    assert_eq!(result.temperature_difference, 43.0);

    let product = 4000.0 * 4.1 * 28.0 / (24.0 * 3.6);
    assert_relative_eq!(result.breakdown.product.total(), product, max_relative = 1e-12);

    // 50 W per tonne
    assert_relative_eq!(result.breakdown.respiration.unwrap(), 4.0 * 50.0 / 1000.0, max_relative = 1e-12);

    let walls = 0.295 * (2.0 * 3.05 * 3.0 + 2.0 * 4.5 * 3.0) * 43.0 * 20.0 / 24.0 / 1000.0;
    assert_relative_eq!(result.breakdown.transmission.walls, walls, max_relative = 1e-12);

    assert_relative_eq!(result.breakdown.air_change, 3.4 * 0.10 * 20.0 / 24.0 / 1000.0, max_relative = 1e-12);

    // Cold rooms report the whole final load as sensible daily heat
    assert_relative_eq!(result.heat_24h.total_kj, result.daily_kj, max_relative = 1e-12);
    assert_eq!(result.heat_24h.latent_kj, 0.0);

    let recommended = result.air_flow.recommended_cfm.unwrap();
    assert!(recommended >= result.air_flow.total_cfm);
}

#[test]
fn freezer_worked_example() {
    let result = form(r#"{"facility":"Freezer"}"#).compute();

    assert_eq!(result.temperature_difference, 80.0);
    assert_relative_eq!(result.areas.wall, 77.0, max_relative = 1e-12);
    assert_relative_eq!(result.areas.ceiling, 28.0, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.transmission.total, 0.295 * 133.0 * 80.0 / 1000.0, max_relative = 1e-12);

    // Fruit pulp: cp 3.74 / 1.96, latent 233, freezing point -0.8
    let hours = 10.0 * 3.6;
    let above = 3000.0 * 3.74 * 25.8 / hours;
    let latent = 3000.0 * 233.0 / hours;
    let below = 3000.0 * 1.96 * 14.2 / hours;
    match result.breakdown.product {
        ProductLoad::ThreeStage {
            sensible_above,
            latent: l,
            sensible_below,
            total,
        } => {
            assert_relative_eq!(sensible_above, above, max_relative = 1e-9);
            assert_relative_eq!(l, latent, max_relative = 1e-9);
            assert_relative_eq!(sensible_below, below, max_relative = 1e-9);
            assert_relative_eq!(total, above + latent + below, max_relative = 1e-9);
        }
        other => panic!("expected three-stage product load, got {:?}", other),
    }

    // Six 0.37 kW fans running all day
    assert_relative_eq!(result.breakdown.fan_motor.unwrap(), 0.37 * 6.0, max_relative = 1e-12);
    assert_eq!(result.air_flow.total_cfm, 12000.0);

    assert_relative_eq!(result.load_summary.total_latent, latent, max_relative = 1e-9);
    assert_relative_eq!(
        result.load_summary.shr,
        result.load_summary.total_sensible / (result.load_summary.total_sensible + latent),
        max_relative = 1e-12
    );
    assert_relative_eq!(result.heat_24h.latent_kj, latent * 24.0 * 3.6, max_relative = 1e-9);
}

#[test]
fn blast_freezer_incoming_below_freezing() {
    let result = FacilityForm::empty(FacilityType::BlastFreezer).compute();

    // General food items freeze at -1.7; product arrives at -5 and is
    // cooled from the freezing point down to -30
    assert_eq!(result.breakdown.product.latent(), 0.0);
    assert_relative_eq!(
        result.breakdown.product.total(),
        2000.0 * 1.8 * 28.3 / (8.0 * 3.6),
        max_relative = 1e-12
    );

    // PUF 150 mm
    assert_relative_eq!(result.u_factors.walls, 0.023 / 0.150, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.air_change, 4.2 * 87.5 * 0.14 * 24.0 / 1000.0, max_relative = 1e-12);
    assert_relative_eq!(result.safety_percentage, 5.0, max_relative = 1e-9);

    assert_relative_eq!(
        result.storage.max_storage_kg,
        87.5 * 4.0 * 0.7,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        result.load_kj_per_batch.unwrap(),
        result.total_before_safety * 8.0 * 3.6,
        max_relative = 1e-12
    );
}

#[test]
fn cold_room_default_totals() {
    let result = FacilityForm::empty(FacilityType::ColdRoom).compute();
    let duty = 20.0 / 24.0;

    let transmission = 0.295 * 72.75 * 43.0 * duty / 1000.0;
    let product = 4000.0 * 4.1 * 28.0 / (24.0 * 3.6);
    let respiration = 0.2;
    let air_change = 3.4 * 0.10 * duty / 1000.0;
    let misc = (1.0 * 1.0 + 0.07 + 0.25) * duty;
    let heaters = 0.29 * duty;
    let total = transmission + product + respiration + air_change + misc + heaters;

    assert_relative_eq!(result.breakdown.miscellaneous.total, misc, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.heaters.total, heaters, max_relative = 1e-12);
    assert_relative_eq!(result.total_before_safety, total, max_relative = 1e-12);
    assert_relative_eq!(result.final_load, total * 1.10, max_relative = 1e-12);
    assert_relative_eq!(result.total_tr, total * 1.10 / 3.517, max_relative = 1e-12);
}

#[test]
fn freezer_default_totals() {
    let result = FacilityForm::empty(FacilityType::Freezer).compute();

    let transmission = 0.295 * 133.0 * 80.0 / 1000.0;
    let hours = 10.0 * 3.6;
    let product = 3000.0 * (3.74 * 25.8 + 233.0 + 1.96 * 14.2) / hours;
    let air_change = 9.4 * 0.1203 / 1000.0;
    let misc = 2.0 * 0.407 * 16.0 / 24.0 + 0.15 + 0.3;
    let heaters = 0.243 + 2.0;
    let fans = 0.37 * 6.0;
    let total = transmission + product + air_change + misc + heaters + fans;

    assert_relative_eq!(result.breakdown.air_change, air_change, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.miscellaneous.total, misc, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.heaters.total, heaters, max_relative = 1e-12);
    assert_relative_eq!(result.total_before_safety, total, max_relative = 1e-9);
    assert_relative_eq!(result.final_load, total * 1.10, max_relative = 1e-9);
    assert_relative_eq!(result.total_tr, total * 1.10 / 3.517, max_relative = 1e-9);
}

#[test]
fn blast_freezer_default_totals() {
    let result = FacilityForm::empty(FacilityType::BlastFreezer).compute();

    let transmission = 0.023 / 0.150 * 120.0 * 78.0 / 1000.0;
    let product = 2000.0 * 1.8 * 28.3 / (8.0 * 3.6);
    let air_change = 4.2 * 87.5 * 0.14 * 24.0 / 1000.0;
    let misc = 2.0 * 0.407 * 4.0 / 24.0 + 0.1 + 0.37;
    let heaters = 1.5 + 0.27 + 2.2 + 0.04;
    let total = transmission + product + air_change + misc + heaters;

    assert_relative_eq!(result.breakdown.transmission.total, transmission, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.miscellaneous.total, misc, max_relative = 1e-12);
    assert_relative_eq!(result.breakdown.heaters.total, heaters, max_relative = 1e-12);
    assert_relative_eq!(result.total_before_safety, total, max_relative = 1e-9);
    assert_relative_eq!(result.final_load, total * 1.05, max_relative = 1e-9);
    assert_relative_eq!(result.total_tr, total * 1.05 / 3.517, max_relative = 1e-9);
}

#[test]
fn equipment_summary_reports_installed_ratings() {
    // Cold room runs 20 h a day; the summary keeps the nameplate figures
    let cold_room = FacilityForm::empty(FacilityType::ColdRoom).compute();
    assert_relative_eq!(cold_room.equipment.heater_load_kw, 0.29, max_relative = 1e-12);
    assert_relative_eq!(cold_room.breakdown.heaters.total, 0.29 * 20.0 / 24.0, max_relative = 1e-12);
    assert_relative_eq!(cold_room.equipment.lighting_kw, 0.07, max_relative = 1e-12);
    assert_relative_eq!(cold_room.equipment.people_kw, 1.0, max_relative = 1e-12);
    assert_eq!(cold_room.equipment.fan_load_kw, 0.0);

    let blast = FacilityForm::empty(FacilityType::BlastFreezer).compute();
    assert_relative_eq!(blast.equipment.fan_load_kw, 0.37, max_relative = 1e-12);
    assert_relative_eq!(blast.equipment.heater_load_kw, 4.01, max_relative = 1e-12);
    assert_relative_eq!(blast.equipment.lighting_kw, 0.1, max_relative = 1e-12);
    assert_relative_eq!(blast.equipment.people_kw, 2.0 * 0.407, max_relative = 1e-12);
    assert_eq!(blast.equipment.total_air_flow_cfm, 5847.0);
}

#[test]
fn daily_heat_by_category_follows_breakdown() {
    for result in default_results() {
        let heat = result.heat_24h.by_category;
        assert_relative_eq!(heat.transmission, result.breakdown.transmission.total * 86.4, max_relative = 1e-12);
        assert_relative_eq!(heat.product, result.breakdown.product.total() * 86.4, max_relative = 1e-12);
        assert_relative_eq!(heat.heaters, result.breakdown.heaters.total * 86.4, max_relative = 1e-12);
        assert_eq!(heat.respiration.is_some(), result.breakdown.respiration.is_some());
        assert_eq!(heat.fan_motor.is_some(), result.breakdown.fan_motor.is_some());
    }
}

#[test]
fn zero_temperature_difference_has_no_required_airflow() {
    let result = form(r#"{"facility":"ColdRoom","conditions":{"external_temp":2,"internal_temp":2}}"#).compute();
    assert_eq!(result.temperature_difference, 0.0);
    assert_eq!(result.breakdown.transmission.total, 0.0);
    assert_eq!(result.air_qty_required_cfm, None);
    assert!(result.final_load > 0.0);
}

#[test]
fn zero_load_falls_back_to_unit_shr() {
    let result = form(
        r#"{
            "facility": "ColdRoom",
            "room": { "number_of_heaters": 0, "number_of_doors": 0 },
            "conditions": { "external_temp": 2, "internal_temp": 2, "operating_hours": 0 },
            "product": { "daily_load": 0, "number_of_people": 0 }
        }"#,
    )
    .compute();

    assert_abs_diff_eq!(result.total_before_safety, 0.0);
    assert_eq!(result.load_summary.shr, 1.0);
    assert_eq!(result.air_qty_required_cfm, None);
}

#[test]
fn text_and_number_fields_agree() {
    let text = form(r#"{"facility":"Freezer","room":{"length":"9","width":"5.5"},"product":{"daily_load":"2500"}}"#);
    let numbers = form(r#"{"facility":"Freezer","room":{"length":9,"width":5.5},"product":{"daily_load":2500}}"#);
    assert_eq!(text.compute(), numbers.compute());
}

#[test]
fn blank_fields_take_defaults_but_zero_is_kept() {
    let mut blank = ColdRoomForm::default();
    blank.room.length = Some(FieldValue::Text("  ".to_string()));
    blank.room.width = Some(FieldValue::Text("wide".to_string()));
    let result = FacilityForm::ColdRoom(blank).compute();
    assert_eq!(result.room.length_m, 3.05);
    assert_eq!(result.room.width_m, 4.5);

    let mut zero = ColdRoomForm::default();
    zero.room.length = Some(FieldValue::Number(0.0));
    let result = FacilityForm::ColdRoom(zero).compute();
    assert_eq!(result.room.length_m, 0.0);
    assert_eq!(result.volume, 0.0);
    assert_eq!(result.storage.max_storage_kg, 0.0);
    assert_eq!(result.storage.utilization_pct, None);
}

#[test]
fn freezer_custom_properties_override_table() {
    let mut custom = FreezerForm::default();
    custom.product.custom_latent_heat = Some(FieldValue::Number(300.0));
    let base = FacilityForm::Freezer(FreezerForm::default()).compute();
    let result = FacilityForm::Freezer(custom).compute();

    assert_eq!(result.product.properties.latent_heat, 300.0);
    assert!(result.breakdown.product.latent() > base.breakdown.product.latent());
    assert_eq!(result.breakdown.product.sensible(), base.breakdown.product.sensible());
}

#[test]
fn result_json_uses_camel_case_keys() {
    let result = FacilityForm::empty(FacilityType::ColdRoom).compute();
    let value = serde_json::to_value(&result).unwrap();

    for key in [
        "totalTR",
        "totalBTU",
        "dailyKJ",
        "finalLoad",
        "totalBeforeSafety",
        "safetyFactorLoad",
        "airQtyRequiredCfm",
        "loadSummary",
        "storage",
    ] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert!(value["loadSummary"].get("shr").is_some());
    assert!(value["storage"].get("maxStorageKg").is_some());
    assert_eq!(value["facility"], "ColdRoom");
}

#[test]
fn strict_validation_accepts_defaults_and_rejects_bad_hours() {
    for facility in FacilityType::ALL {
        assert!(FacilityForm::empty(facility).validate().is_ok());
    }

    let bad = form(r#"{"facility":"ColdRoom","conditions":{"operating_hours":30}}"#);
    let err = bad.compute_validated().unwrap_err();
    assert!(err.is_input_error());

    // Lenient computation still produces a result
    assert_eq!(bad.compute().conditions.operating_hours, 30.0);
}
