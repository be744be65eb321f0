//! # Blast Freezer Calculation
//!
//! Fast batch freezing. The product load is spread over the batch time,
//! U-factors come from the insulation table per surface, air change scales
//! with room volume, and each heater class (peripheral, door, tray, drain)
//! is a quantity × capacity pair. The fan motor rating counts as the room's
//! equipment load.
//!
//! Maximum storage applies the product's storage efficiency on top of the
//! storage density.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::calculations::blast_freezer::BlastFreezerForm;
//!
//! let result = BlastFreezerForm::default().compute();
//! assert_eq!(result.safety_factor, 1.05);
//! assert!(result.load_kj_per_batch.is_some());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::engine;
use crate::calculations::records::{LoadInput, OperatingConditions, ProductUsage, RoomGeometry};
use crate::calculations::result::LoadResult;
use crate::input::{parse_field, parse_key, FieldValue};
use crate::loads::{FanSpec, HeaterBank, HeaterSet, ThermalProperties};
use crate::materials::{products, InsulationType};
use crate::profile::FacilityProfile;

/// Documented blast freezer defaults
pub mod defaults {
    pub const LENGTH_M: f64 = 5.0;
    pub const BREADTH_M: f64 = 5.0;
    pub const HEIGHT_M: f64 = 3.5;
    pub const DOOR_WIDTH_M: f64 = 2.1;
    pub const DOOR_HEIGHT_M: f64 = 2.1;
    pub const INSULATION_TYPE: &str = "PUF";
    pub const WALL_THICKNESS_MM: f64 = 150.0;
    pub const CEILING_THICKNESS_MM: f64 = 150.0;
    pub const FLOOR_THICKNESS_MM: f64 = 150.0;
    pub const INTERNAL_FLOOR_THICKNESS_MM: f64 = 150.0;

    pub const AMBIENT_TEMP_C: f64 = 43.0;
    pub const ROOM_TEMP_C: f64 = -35.0;
    pub const BATCH_HOURS: f64 = 8.0;
    pub const OPERATING_HOURS: f64 = 24.0;

    pub const PRODUCT_TYPE: &str = "General Food Items";
    pub const CAPACITY_REQUIRED_KG: f64 = 2000.0;
    pub const INCOMING_TEMP_C: f64 = -5.0;
    pub const OUTGOING_TEMP_C: f64 = -30.0;
    pub const STORAGE_TYPE: &str = "Palletized";
    pub const STORAGE_DENSITY: f64 = 4.0;
    pub const NUMBER_OF_PEOPLE: f64 = 2.0;
    pub const WORKING_HOURS: f64 = 4.0;
    pub const LIGHT_LOAD_KW: f64 = 0.1;
    pub const FAN_MOTOR_RATING_KW: f64 = 0.37;
    pub const AIR_FLOW_PER_FAN_CFM: f64 = 5847.0;

    pub const PERIPHERAL_HEATERS_QTY: f64 = 1.0;
    pub const PERIPHERAL_HEATERS_KW: f64 = 1.5;
    pub const DOOR_HEATERS_QTY: f64 = 1.0;
    pub const DOOR_HEATERS_KW: f64 = 0.27;
    pub const TRAY_HEATERS_QTY: f64 = 1.0;
    pub const TRAY_HEATERS_KW: f64 = 2.2;
    pub const DRAIN_HEATERS_QTY: f64 = 1.0;
    pub const DRAIN_HEATERS_KW: f64 = 0.04;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastFreezerRoom {
    pub length: Option<FieldValue>,
    pub breadth: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub door_width: Option<FieldValue>,
    pub door_height: Option<FieldValue>,
    pub insulation_type: Option<FieldValue>,
    pub wall_thickness: Option<FieldValue>,
    pub ceiling_thickness: Option<FieldValue>,
    pub floor_thickness: Option<FieldValue>,
    pub internal_floor_thickness: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastFreezerConditions {
    pub ambient_temp: Option<FieldValue>,
    pub room_temp: Option<FieldValue>,
    pub batch_hours: Option<FieldValue>,
    pub operating_hours: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastFreezerProduct {
    pub product_type: Option<FieldValue>,
    /// kg per batch
    pub capacity_required: Option<FieldValue>,
    pub incoming_temp: Option<FieldValue>,
    pub outgoing_temp: Option<FieldValue>,
    pub storage_type: Option<FieldValue>,
    /// Storage density (kg/m³)
    pub storage_capacity: Option<FieldValue>,
    pub number_of_people: Option<FieldValue>,
    pub working_hours: Option<FieldValue>,
    /// kW
    pub light_load: Option<FieldValue>,
    /// kW
    pub fan_motor_rating: Option<FieldValue>,
    pub air_flow_per_fan: Option<FieldValue>,
    pub peripheral_heaters_qty: Option<FieldValue>,
    pub peripheral_heaters_capacity: Option<FieldValue>,
    pub door_heaters_qty: Option<FieldValue>,
    pub door_heaters_capacity: Option<FieldValue>,
    pub tray_heaters_qty: Option<FieldValue>,
    pub tray_heaters_capacity: Option<FieldValue>,
    pub drain_heaters_qty: Option<FieldValue>,
    pub drain_heaters_capacity: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastFreezerForm {
    pub room: BlastFreezerRoom,
    pub conditions: BlastFreezerConditions,
    pub product: BlastFreezerProduct,
}

fn heater_bank(qty: &Option<FieldValue>, capacity: &Option<FieldValue>, name: &str, dq: f64, dc: f64) -> HeaterBank {
    HeaterBank::new(
        parse_field(qty, &format!("{name}_heaters_qty"), dq),
        parse_field(capacity, &format!("{name}_heaters_capacity"), dc),
    )
}

/// Parse and default the three blast freezer sections
pub fn resolve(
    room: &BlastFreezerRoom,
    conditions: &BlastFreezerConditions,
    product: &BlastFreezerProduct,
) -> LoadInput {
    use defaults as d;

    let insulation_key = parse_key(&room.insulation_type, "insulation_type", d::INSULATION_TYPE);
    let geometry = RoomGeometry {
        length_m: parse_field(&room.length, "length", d::LENGTH_M),
        width_m: parse_field(&room.breadth, "breadth", d::BREADTH_M),
        height_m: parse_field(&room.height, "height", d::HEIGHT_M),
        door_width_m: parse_field(&room.door_width, "door_width", d::DOOR_WIDTH_M),
        door_height_m: parse_field(&room.door_height, "door_height", d::DOOR_HEIGHT_M),
        insulation: InsulationType::lookup(&insulation_key),
        wall_thickness_mm: parse_field(&room.wall_thickness, "wall_thickness", d::WALL_THICKNESS_MM),
        ceiling_thickness_mm: parse_field(&room.ceiling_thickness, "ceiling_thickness", d::CEILING_THICKNESS_MM),
        floor_thickness_mm: parse_field(&room.floor_thickness, "floor_thickness", d::FLOOR_THICKNESS_MM),
        internal_floor_thickness_mm: parse_field(
            &room.internal_floor_thickness,
            "internal_floor_thickness",
            d::INTERNAL_FLOOR_THICKNESS_MM,
        ),
        door_openings_per_day: None,
        door_clear_opening_mm: None,
    };

    let operating_hours = parse_field(&conditions.operating_hours, "operating_hours", d::OPERATING_HOURS);
    let conds = OperatingConditions {
        external_temp_c: parse_field(&conditions.ambient_temp, "ambient_temp", d::AMBIENT_TEMP_C),
        internal_temp_c: parse_field(&conditions.room_temp, "room_temp", d::ROOM_TEMP_C),
        operating_hours,
        pull_down_hours: parse_field(&conditions.batch_hours, "batch_hours", d::BATCH_HOURS),
        humidity_pct: None,
        steam_kw: 0.0,
    };

    let product_name = parse_key(&product.product_type, "product_type", d::PRODUCT_TYPE);
    let entry = products::lookup(&product_name);
    let fan_rating = parse_field(&product.fan_motor_rating, "fan_motor_rating", d::FAN_MOTOR_RATING_KW);

    let usage = ProductUsage {
        product_name,
        thermal: ThermalProperties {
            cp_above: entry.cp_above,
            cp_below: entry.cp_below,
            latent_heat: entry.latent_heat,
            freezing_point: entry.freezing_point,
        },
        mass_kg: parse_field(&product.capacity_required, "capacity_required", d::CAPACITY_REQUIRED_KG),
        incoming_temp_c: parse_field(&product.incoming_temp, "incoming_temp", d::INCOMING_TEMP_C),
        outgoing_temp_c: parse_field(&product.outgoing_temp, "outgoing_temp", d::OUTGOING_TEMP_C),
        storage_key: parse_key(&product.storage_type, "storage_type", d::STORAGE_TYPE),
        storage_density: parse_field(&product.storage_capacity, "storage_capacity", d::STORAGE_DENSITY),
        people: parse_field(&product.number_of_people, "number_of_people", d::NUMBER_OF_PEOPLE),
        working_hours: parse_field(&product.working_hours, "working_hours", d::WORKING_HOURS),
        lighting_kw: parse_field(&product.light_load, "light_load", d::LIGHT_LOAD_KW),
        equipment_kw: fan_rating,
        heaters: HeaterSet {
            peripheral: heater_bank(
                &product.peripheral_heaters_qty,
                &product.peripheral_heaters_capacity,
                "peripheral",
                d::PERIPHERAL_HEATERS_QTY,
                d::PERIPHERAL_HEATERS_KW,
            ),
            door: heater_bank(
                &product.door_heaters_qty,
                &product.door_heaters_capacity,
                "door",
                d::DOOR_HEATERS_QTY,
                d::DOOR_HEATERS_KW,
            ),
            tray: heater_bank(
                &product.tray_heaters_qty,
                &product.tray_heaters_capacity,
                "tray",
                d::TRAY_HEATERS_QTY,
                d::TRAY_HEATERS_KW,
            ),
            drain: heater_bank(
                &product.drain_heaters_qty,
                &product.drain_heaters_capacity,
                "drain",
                d::DRAIN_HEATERS_QTY,
                d::DRAIN_HEATERS_KW,
            ),
        },
        fans: FanSpec {
            rating_kw: fan_rating,
            count: 1.0,
            hours: operating_hours,
            airflow_cfm_per_fan: parse_field(&product.air_flow_per_fan, "air_flow_per_fan", d::AIR_FLOW_PER_FAN_CFM),
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

/// Blast freezer refrigeration load
pub fn compute(
    room: &BlastFreezerRoom,
    conditions: &BlastFreezerConditions,
    product: &BlastFreezerProduct,
) -> LoadResult {
    engine::run(&FacilityProfile::blast_freezer(), &resolve(room, conditions, product))
}

impl BlastFreezerForm {
    pub fn resolve(&self) -> LoadInput {
        resolve(&self.room, &self.conditions, &self.product)
    }

    pub fn compute(&self) -> LoadResult {
        compute(&self.room, &self.conditions, &self.product)
    }
}
