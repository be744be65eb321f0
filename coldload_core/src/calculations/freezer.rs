//! # Freezer Calculation
//!
//! Below-freezing storage. Three-stage product load over the pull-down
//! time, fan motor load, steam humidifier load, and door, tray and
//! peripheral heaters.
//!
//! Thermal properties come from the product table. In advanced mode the
//! form may override them with `custom_cp_above`, `custom_cp_below` and
//! `custom_latent_heat`; an override applies only when it parses to a
//! finite number.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::calculations::freezer::FreezerForm;
//!
//! let result = FreezerForm::default().compute();
//! assert_eq!(result.temperature_difference, 80.0);
//! assert!(result.breakdown.fan_motor.is_some());
//! assert!(result.load_summary.shr < 1.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::engine;
use crate::calculations::records::{LoadInput, OperatingConditions, ProductUsage, RoomGeometry};
use crate::calculations::result::LoadResult;
use crate::input::{parse_field, parse_key, parse_override, FieldValue};
use crate::loads::{FanSpec, HeaterBank, HeaterSet, ThermalProperties};
use crate::materials::{products, InsulationType};
use crate::profile::FacilityProfile;
use crate::units::{Kilowatts, Watts};

/// Documented freezer defaults
pub mod defaults {
    pub const LENGTH_M: f64 = 7.0;
    pub const WIDTH_M: f64 = 4.0;
    pub const HEIGHT_M: f64 = 3.5;
    pub const DOOR_WIDTH_M: f64 = 1.8;
    pub const DOOR_HEIGHT_M: f64 = 2.0;
    pub const DOOR_OPENINGS: f64 = 15.0;
    pub const DOOR_CLEAR_OPENING_MM: f64 = 1800.0;
    pub const INSULATION_TYPE: &str = "PUF";
    pub const INSULATION_THICKNESS_MM: f64 = 150.0;
    pub const INTERNAL_FLOOR_THICKNESS_MM: f64 = 150.0;

    pub const EXTERNAL_TEMP_C: f64 = 45.0;
    pub const INTERNAL_TEMP_C: f64 = -35.0;
    pub const OPERATING_HOURS: f64 = 24.0;
    pub const PULL_DOWN_HOURS: f64 = 10.0;
    pub const ROOM_HUMIDITY_PCT: f64 = 85.0;
    pub const STEAM_HUMIDIFIER_KW: f64 = 0.0;

    pub const PRODUCT_TYPE: &str = "Fruit Pulp";
    pub const DAILY_LOAD_KG: f64 = 3000.0;
    pub const INCOMING_TEMP_C: f64 = 25.0;
    pub const OUTGOING_TEMP_C: f64 = -15.0;
    pub const STORAGE_TYPE: &str = "Boxed";
    pub const STORAGE_DENSITY: f64 = 10.0;
    pub const NUMBER_OF_PEOPLE: f64 = 2.0;
    pub const WORKING_HOURS: f64 = 16.0;
    pub const LIGHTING_W: f64 = 150.0;
    pub const EQUIPMENT_W: f64 = 300.0;

    pub const FAN_MOTOR_RATING_KW: f64 = 0.37;
    pub const NUMBER_OF_FANS: f64 = 6.0;
    pub const FAN_OPERATING_HOURS: f64 = 24.0;
    pub const FAN_AIR_FLOW_CFM: f64 = 2000.0;

    pub const DOOR_HEATERS_KW: f64 = 0.243;
    pub const TRAY_HEATERS_KW: f64 = 2.0;
    pub const PERIPHERAL_HEATERS_KW: f64 = 0.0;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezerRoom {
    pub length: Option<FieldValue>,
    pub width: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub door_width: Option<FieldValue>,
    pub door_height: Option<FieldValue>,
    pub door_openings: Option<FieldValue>,
    pub door_clear_opening: Option<FieldValue>,
    pub insulation_type: Option<FieldValue>,
    pub insulation_thickness: Option<FieldValue>,
    pub internal_floor_thickness: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezerConditions {
    pub external_temp: Option<FieldValue>,
    pub internal_temp: Option<FieldValue>,
    pub operating_hours: Option<FieldValue>,
    pub pull_down_time: Option<FieldValue>,
    /// %RH
    pub room_humidity: Option<FieldValue>,
    /// kW
    pub steam_humidifier_load: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezerProduct {
    pub product_type: Option<FieldValue>,
    pub daily_load: Option<FieldValue>,
    pub incoming_temp: Option<FieldValue>,
    pub outgoing_temp: Option<FieldValue>,
    pub storage_type: Option<FieldValue>,
    pub storage_density: Option<FieldValue>,
    pub number_of_people: Option<FieldValue>,
    pub working_hours: Option<FieldValue>,
    /// W
    pub lighting_wattage: Option<FieldValue>,
    /// W
    pub equipment_load: Option<FieldValue>,
    /// kW per fan
    pub fan_motor_rating: Option<FieldValue>,
    pub number_of_fans: Option<FieldValue>,
    pub fan_operating_hours: Option<FieldValue>,
    /// CFM per fan
    pub fan_air_flow_rate: Option<FieldValue>,
    /// kW
    pub door_heaters_load: Option<FieldValue>,
    /// kW
    pub tray_heaters_load: Option<FieldValue>,
    /// kW
    pub peripheral_heaters_load: Option<FieldValue>,
    pub custom_cp_above: Option<FieldValue>,
    pub custom_cp_below: Option<FieldValue>,
    pub custom_latent_heat: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreezerForm {
    pub room: FreezerRoom,
    pub conditions: FreezerConditions,
    pub product: FreezerProduct,
}

/// Parse and default the three freezer sections
pub fn resolve(room: &FreezerRoom, conditions: &FreezerConditions, product: &FreezerProduct) -> LoadInput {
    use defaults as d;

    let insulation_key = parse_key(&room.insulation_type, "insulation_type", d::INSULATION_TYPE);
    let thickness = parse_field(&room.insulation_thickness, "insulation_thickness", d::INSULATION_THICKNESS_MM);
    let geometry = RoomGeometry {
        length_m: parse_field(&room.length, "length", d::LENGTH_M),
        width_m: parse_field(&room.width, "width", d::WIDTH_M),
        height_m: parse_field(&room.height, "height", d::HEIGHT_M),
        door_width_m: parse_field(&room.door_width, "door_width", d::DOOR_WIDTH_M),
        door_height_m: parse_field(&room.door_height, "door_height", d::DOOR_HEIGHT_M),
        insulation: InsulationType::lookup(&insulation_key),
        wall_thickness_mm: thickness,
        ceiling_thickness_mm: thickness,
        floor_thickness_mm: thickness,
        internal_floor_thickness_mm: parse_field(
            &room.internal_floor_thickness,
            "internal_floor_thickness",
            d::INTERNAL_FLOOR_THICKNESS_MM,
        ),
        door_openings_per_day: Some(parse_field(&room.door_openings, "door_openings", d::DOOR_OPENINGS)),
        door_clear_opening_mm: Some(parse_field(
            &room.door_clear_opening,
            "door_clear_opening",
            d::DOOR_CLEAR_OPENING_MM,
        )),
    };

    let conds = OperatingConditions {
        external_temp_c: parse_field(&conditions.external_temp, "external_temp", d::EXTERNAL_TEMP_C),
        internal_temp_c: parse_field(&conditions.internal_temp, "internal_temp", d::INTERNAL_TEMP_C),
        operating_hours: parse_field(&conditions.operating_hours, "operating_hours", d::OPERATING_HOURS),
        pull_down_hours: parse_field(&conditions.pull_down_time, "pull_down_time", d::PULL_DOWN_HOURS),
        humidity_pct: Some(parse_field(&conditions.room_humidity, "room_humidity", d::ROOM_HUMIDITY_PCT)),
        steam_kw: parse_field(
            &conditions.steam_humidifier_load,
            "steam_humidifier_load",
            d::STEAM_HUMIDIFIER_KW,
        ),
    };

    let product_name = parse_key(&product.product_type, "product_type", d::PRODUCT_TYPE);
    let entry = products::lookup(&product_name);
    let thermal = ThermalProperties {
        cp_above: parse_override(&product.custom_cp_above).unwrap_or(entry.cp_above),
        cp_below: parse_override(&product.custom_cp_below).unwrap_or(entry.cp_below),
        latent_heat: parse_override(&product.custom_latent_heat).unwrap_or(entry.latent_heat),
        freezing_point: entry.freezing_point,
    };

    let usage = ProductUsage {
        product_name,
        thermal,
        mass_kg: parse_field(&product.daily_load, "daily_load", d::DAILY_LOAD_KG),
        incoming_temp_c: parse_field(&product.incoming_temp, "incoming_temp", d::INCOMING_TEMP_C),
        outgoing_temp_c: parse_field(&product.outgoing_temp, "outgoing_temp", d::OUTGOING_TEMP_C),
        storage_key: parse_key(&product.storage_type, "storage_type", d::STORAGE_TYPE),
        storage_density: parse_field(&product.storage_density, "storage_density", d::STORAGE_DENSITY),
        people: parse_field(&product.number_of_people, "number_of_people", d::NUMBER_OF_PEOPLE),
        working_hours: parse_field(&product.working_hours, "working_hours", d::WORKING_HOURS),
        lighting_kw: Kilowatts::from(Watts(parse_field(
            &product.lighting_wattage,
            "lighting_wattage",
            d::LIGHTING_W,
        )))
        .0,
        equipment_kw: Kilowatts::from(Watts(parse_field(&product.equipment_load, "equipment_load", d::EQUIPMENT_W)))
            .0,
        heaters: HeaterSet {
            peripheral: HeaterBank::new(
                1.0,
                parse_field(
                    &product.peripheral_heaters_load,
                    "peripheral_heaters_load",
                    d::PERIPHERAL_HEATERS_KW,
                ),
            ),
            door: HeaterBank::new(
                1.0,
                parse_field(&product.door_heaters_load, "door_heaters_load", d::DOOR_HEATERS_KW),
            ),
            tray: HeaterBank::new(
                1.0,
                parse_field(&product.tray_heaters_load, "tray_heaters_load", d::TRAY_HEATERS_KW),
            ),
            drain: HeaterBank::default(),
        },
        fans: FanSpec {
            rating_kw: parse_field(&product.fan_motor_rating, "fan_motor_rating", d::FAN_MOTOR_RATING_KW),
            count: parse_field(&product.number_of_fans, "number_of_fans", d::NUMBER_OF_FANS),
            hours: parse_field(&product.fan_operating_hours, "fan_operating_hours", d::FAN_OPERATING_HOURS),
            airflow_cfm_per_fan: parse_field(&product.fan_air_flow_rate, "fan_air_flow_rate", d::FAN_AIR_FLOW_CFM),
        },
        respiration_rate: 0.0,
    };

    LoadInput {
        room: geometry,
        conditions: conds,
        product: usage,
        insulation_key,
    }
}

/// Freezer refrigeration load
pub fn compute(room: &FreezerRoom, conditions: &FreezerConditions, product: &FreezerProduct) -> LoadResult {
    engine::run(&FacilityProfile::freezer(), &resolve(room, conditions, product))
}

impl FreezerForm {
    pub fn resolve(&self) -> LoadInput {
        resolve(&self.room, &self.conditions, &self.product)
    }

    pub fn compute(&self) -> LoadResult {
        compute(&self.room, &self.conditions, &self.product)
    }
}
