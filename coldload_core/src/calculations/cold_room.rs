//! # Cold Room Calculation
//!
//! Above-freezing storage. Single-stage product load, fixed 50 W/tonne
//! respiration, a door-opening line (reported as zero; infiltration is in
//! the air-change load) and door/peripheral heaters at 0.145 kW each.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::calculations::cold_room::{self, ColdRoomForm};
//!
//! // An empty form computes the reference scenario
//! let form = ColdRoomForm::default();
//! let result = cold_room::compute(&form.room, &form.conditions, &form.product);
//! assert!((result.storage.max_storage_kg - 329.4).abs() < 1e-9);
//! assert_eq!(result.breakdown.door_opening, Some(0.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::engine;
use crate::calculations::records::{LoadInput, OperatingConditions, ProductUsage, RoomGeometry};
use crate::calculations::result::LoadResult;
use crate::input::{parse_field, parse_key, FieldValue};
use crate::loads::{FanSpec, HeaterBank, HeaterSet, ThermalProperties};
use crate::materials::{products, InsulationType};
use crate::profile::FacilityProfile;
use crate::units::{Kilowatts, Watts};

/// Documented cold room defaults
pub mod defaults {
    pub const LENGTH_M: f64 = 3.05;
    pub const WIDTH_M: f64 = 4.5;
    pub const HEIGHT_M: f64 = 3.0;
    pub const DOOR_WIDTH_M: f64 = 1.2;
    pub const DOOR_HEIGHT_M: f64 = 2.1;
    pub const DOOR_OPENINGS: f64 = 30.0;
    pub const DOOR_CLEAR_OPENING_MM: f64 = 2000.0;
    pub const STORAGE_DENSITY: f64 = 8.0;
    pub const AIR_FLOW_PER_FAN_CFM: f64 = 4163.0;
    pub const INSULATION_TYPE: &str = "PUF";
    pub const INSULATION_THICKNESS_MM: f64 = 100.0;
    pub const INTERNAL_FLOOR_THICKNESS_MM: f64 = 100.0;
    pub const NUMBER_OF_HEATERS: f64 = 1.0;
    pub const NUMBER_OF_DOORS: f64 = 1.0;
    /// Rating of each door and peripheral heater (kW)
    pub const HEATER_CAPACITY_KW: f64 = 0.145;

    pub const EXTERNAL_TEMP_C: f64 = 45.0;
    pub const INTERNAL_TEMP_C: f64 = 2.0;
    pub const OPERATING_HOURS: f64 = 20.0;
    pub const PULL_DOWN_HOURS: f64 = 24.0;

    pub const PRODUCT_TYPE: &str = "Banana";
    pub const DAILY_LOAD_KG: f64 = 4000.0;
    pub const INCOMING_TEMP_C: f64 = 30.0;
    pub const OUTGOING_TEMP_C: f64 = 2.0;
    pub const SPECIFIC_HEAT_ABOVE: f64 = 4.1;
    pub const RESPIRATION_RATE: f64 = 50.0;
    pub const STORAGE_TYPE: &str = "Palletized";
    pub const NUMBER_OF_PEOPLE: f64 = 1.0;
    pub const WORKING_HOURS: f64 = 20.0;
    pub const LIGHTING_W: f64 = 70.0;
    pub const EQUIPMENT_W: f64 = 250.0;
}

/// Room section of the cold room form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColdRoomRoom {
    pub length: Option<FieldValue>,
    pub width: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub door_width: Option<FieldValue>,
    pub door_height: Option<FieldValue>,
    pub door_openings: Option<FieldValue>,
    pub door_clear_opening: Option<FieldValue>,
    pub storage_density: Option<FieldValue>,
    pub air_flow_per_fan: Option<FieldValue>,
    pub insulation_type: Option<FieldValue>,
    pub insulation_thickness: Option<FieldValue>,
    pub internal_floor_thickness: Option<FieldValue>,
    pub number_of_heaters: Option<FieldValue>,
    pub number_of_doors: Option<FieldValue>,
}

/// Conditions section of the cold room form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColdRoomConditions {
    pub external_temp: Option<FieldValue>,
    pub internal_temp: Option<FieldValue>,
    pub operating_hours: Option<FieldValue>,
    pub pull_down_time: Option<FieldValue>,
}

/// Product section of the cold room form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColdRoomProduct {
    pub product_type: Option<FieldValue>,
    /// kg per day
    pub daily_load: Option<FieldValue>,
    pub incoming_temp: Option<FieldValue>,
    pub outgoing_temp: Option<FieldValue>,
    pub specific_heat_above: Option<FieldValue>,
    /// W/tonne; only used by profiles that take the rate from input
    pub respiration_rate: Option<FieldValue>,
    pub storage_type: Option<FieldValue>,
    pub number_of_people: Option<FieldValue>,
    pub working_hours: Option<FieldValue>,
    /// W
    pub lighting_wattage: Option<FieldValue>,
    /// W
    pub equipment_load: Option<FieldValue>,
}

/// Complete cold room form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColdRoomForm {
    pub room: ColdRoomRoom,
    pub conditions: ColdRoomConditions,
    pub product: ColdRoomProduct,
}

fn watts_to_kw(w: f64) -> f64 {
    Kilowatts::from(Watts(w)).0
}

/// Parse and default the three cold room sections
pub fn resolve(room: &ColdRoomRoom, conditions: &ColdRoomConditions, product: &ColdRoomProduct) -> LoadInput {
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

    let operating_hours = parse_field(&conditions.operating_hours, "operating_hours", d::OPERATING_HOURS);
    let conds = OperatingConditions {
        external_temp_c: parse_field(&conditions.external_temp, "external_temp", d::EXTERNAL_TEMP_C),
        internal_temp_c: parse_field(&conditions.internal_temp, "internal_temp", d::INTERNAL_TEMP_C),
        operating_hours,
        pull_down_hours: parse_field(&conditions.pull_down_time, "pull_down_time", d::PULL_DOWN_HOURS),
        humidity_pct: None,
        steam_kw: 0.0,
    };

    let product_name = parse_key(&product.product_type, "product_type", d::PRODUCT_TYPE);
    let entry = products::lookup(&product_name);
    // Cold rooms take specific heat from the form, not the product table
    let thermal = ThermalProperties {
        cp_above: parse_field(&product.specific_heat_above, "specific_heat_above", d::SPECIFIC_HEAT_ABOVE),
        cp_below: entry.cp_below,
        latent_heat: entry.latent_heat,
        freezing_point: entry.freezing_point,
    };

    let usage = ProductUsage {
        product_name,
        thermal,
        mass_kg: parse_field(&product.daily_load, "daily_load", d::DAILY_LOAD_KG),
        incoming_temp_c: parse_field(&product.incoming_temp, "incoming_temp", d::INCOMING_TEMP_C),
        outgoing_temp_c: parse_field(&product.outgoing_temp, "outgoing_temp", d::OUTGOING_TEMP_C),
        storage_key: parse_key(&product.storage_type, "storage_type", d::STORAGE_TYPE),
        storage_density: parse_field(&room.storage_density, "storage_density", d::STORAGE_DENSITY),
        people: parse_field(&product.number_of_people, "number_of_people", d::NUMBER_OF_PEOPLE),
        working_hours: parse_field(&product.working_hours, "working_hours", d::WORKING_HOURS),
        lighting_kw: watts_to_kw(parse_field(&product.lighting_wattage, "lighting_wattage", d::LIGHTING_W)),
        equipment_kw: watts_to_kw(parse_field(&product.equipment_load, "equipment_load", d::EQUIPMENT_W)),
        heaters: HeaterSet {
            peripheral: HeaterBank::new(
                parse_field(&room.number_of_heaters, "number_of_heaters", d::NUMBER_OF_HEATERS),
                d::HEATER_CAPACITY_KW,
            ),
            door: HeaterBank::new(
                parse_field(&room.number_of_doors, "number_of_doors", d::NUMBER_OF_DOORS),
                d::HEATER_CAPACITY_KW,
            ),
            ..HeaterSet::default()
        },
        fans: FanSpec {
            rating_kw: 0.0,
            count: 1.0,
            hours: operating_hours,
            airflow_cfm_per_fan: parse_field(&room.air_flow_per_fan, "air_flow_per_fan", d::AIR_FLOW_PER_FAN_CFM),
        },
        respiration_rate: parse_field(&product.respiration_rate, "respiration_rate", d::RESPIRATION_RATE),
    };

    LoadInput {
        room: geometry,
        conditions: conds,
        product: usage,
        insulation_key,
    }
}

/// Cold room refrigeration load
pub fn compute(room: &ColdRoomRoom, conditions: &ColdRoomConditions, product: &ColdRoomProduct) -> LoadResult {
    engine::run(&FacilityProfile::cold_room(), &resolve(room, conditions, product))
}

impl ColdRoomForm {
    pub fn resolve(&self) -> LoadInput {
        resolve(&self.room, &self.conditions, &self.product)
    }

    pub fn compute(&self) -> LoadResult {
        compute(&self.room, &self.conditions, &self.product)
    }
}
