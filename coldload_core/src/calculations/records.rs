//! Resolved input records
//!
//! The numeric records a load calculation runs on, after raw form values
//! have been parsed and defaulted. Each facility form resolves into a
//! [`LoadInput`].

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::{EnvelopeAreas, FanSpec, HeaterSet, ThermalProperties};
use crate::materials::{products, InsulationType, StorageType};

/// Room dimensions and construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomGeometry {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
    pub door_width_m: f64,
    pub door_height_m: f64,
    pub insulation: InsulationType,
    pub wall_thickness_mm: f64,
    pub ceiling_thickness_mm: f64,
    pub floor_thickness_mm: f64,
    pub internal_floor_thickness_mm: f64,
    pub door_openings_per_day: Option<f64>,
    pub door_clear_opening_mm: Option<f64>,
}

impl RoomGeometry {
    /// `2(L·H) + 2(W·H)`
    pub fn wall_area(&self) -> f64 {
        2.0 * (self.length_m * self.height_m) + 2.0 * (self.width_m * self.height_m)
    }

    /// `L·W`
    pub fn ceiling_area(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// `L·W`
    pub fn floor_area(&self) -> f64 {
        self.length_m * self.width_m
    }

    pub fn door_area(&self) -> f64 {
        self.door_width_m * self.door_height_m
    }

    pub fn volume(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }

    pub fn areas(&self) -> EnvelopeAreas {
        EnvelopeAreas {
            wall: self.wall_area(),
            ceiling: self.ceiling_area(),
            floor: self.floor_area(),
            door: self.door_area(),
        }
    }
}

/// Temperatures and operating schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingConditions {
    /// Ambient temperature outside the room (°C)
    pub external_temp_c: f64,
    /// Room design temperature (°C)
    pub internal_temp_c: f64,
    /// Hours per day the plant runs (0-24)
    pub operating_hours: f64,
    /// Pull-down time, or batch time for blast freezers (h)
    pub pull_down_hours: f64,
    /// Room relative humidity (%), reported only
    pub humidity_pct: Option<f64>,
    /// Steam humidifier rating (kW)
    pub steam_kw: f64,
}

impl OperatingConditions {
    /// `external − internal`, any sign
    pub fn temperature_difference(&self) -> f64 {
        self.external_temp_c - self.internal_temp_c
    }
}

/// Product handled and the equipment working in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUsage {
    /// Product name as entered
    pub product_name: String,
    /// Thermal properties used for the product load
    pub thermal: ThermalProperties,
    /// Daily load or batch capacity (kg)
    pub mass_kg: f64,
    pub incoming_temp_c: f64,
    pub outgoing_temp_c: f64,
    /// Storage arrangement as entered
    pub storage_key: String,
    /// Storage density (kg/m³ of room volume)
    pub storage_density: f64,
    pub people: f64,
    pub working_hours: f64,
    pub lighting_kw: f64,
    pub equipment_kw: f64,
    pub heaters: HeaterSet,
    pub fans: FanSpec,
    /// Respiration rate supplied by the caller (W/tonne)
    pub respiration_rate: f64,
}

impl ProductUsage {
    pub fn storage_type(&self) -> StorageType {
        StorageType::lookup(&self.storage_key)
    }
}

/// Everything a load calculation needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInput {
    pub room: RoomGeometry,
    pub conditions: OperatingConditions,
    pub product: ProductUsage,
    /// Insulation type as entered
    pub insulation_key: String,
}

fn require(field: &str, value: f64, ok: bool, reason: &str) -> CalcResult<()> {
    if ok {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}

impl LoadInput {
    /// Check the physical plausibility of the resolved input.
    ///
    /// The engine computes any input; this is for callers that want to
    /// reject nonsense before sizing equipment from it. Reference keys
    /// (product, insulation, storage) must name known table entries.
    pub fn validate(&self) -> CalcResult<()> {
        let room = &self.room;
        for (field, value) in [
            ("length_m", room.length_m),
            ("width_m", room.width_m),
            ("height_m", room.height_m),
            ("door_width_m", room.door_width_m),
            ("door_height_m", room.door_height_m),
        ] {
            require(field, value, value > 0.0, "Dimension must be positive")?;
        }

        let c = &self.conditions;
        require(
            "operating_hours",
            c.operating_hours,
            (0.0..=24.0).contains(&c.operating_hours),
            "Operating hours must be between 0 and 24",
        )?;
        require(
            "pull_down_hours",
            c.pull_down_hours,
            c.pull_down_hours > 0.0,
            "Pull-down time must be positive",
        )?;
        let delta_t = c.temperature_difference();
        require(
            "temperature_difference",
            delta_t,
            delta_t > 0.0,
            "External temperature must be above room temperature",
        )?;
        require("steam_kw", c.steam_kw, c.steam_kw >= 0.0, "Rating cannot be negative")?;

        let p = &self.product;
        require("mass_kg", p.mass_kg, p.mass_kg >= 0.0, "Product mass cannot be negative")?;
        require(
            "storage_density",
            p.storage_density,
            p.storage_density >= 0.0,
            "Storage density cannot be negative",
        )?;
        for (field, value) in [
            ("number_of_people", p.people),
            ("heater_quantity", p.heaters.peripheral.quantity),
            ("heater_quantity", p.heaters.door.quantity),
            ("heater_quantity", p.heaters.tray.quantity),
            ("heater_quantity", p.heaters.drain.quantity),
            ("number_of_fans", p.fans.count),
        ] {
            require(field, value, value >= 0.0, "Count cannot be negative")?;
        }
        for (field, value) in [("working_hours", p.working_hours), ("fan_operating_hours", p.fans.hours)] {
            require(
                field,
                value,
                (0.0..=24.0).contains(&value),
                "Hours must be between 0 and 24",
            )?;
        }

        products::find(&p.product_name)?;
        InsulationType::from_str_flexible(&self.insulation_key)?;
        StorageType::from_str_flexible(&p.storage_key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomGeometry {
        RoomGeometry {
            length_m: 3.05,
            width_m: 4.5,
            height_m: 3.0,
            door_width_m: 1.2,
            door_height_m: 2.1,
            insulation: InsulationType::PUF,
            wall_thickness_mm: 100.0,
            ceiling_thickness_mm: 100.0,
            floor_thickness_mm: 100.0,
            internal_floor_thickness_mm: 100.0,
            door_openings_per_day: Some(30.0),
            door_clear_opening_mm: Some(2000.0),
        }
    }

    #[test]
    fn test_cold_room_geometry() {
        let r = room();
        assert!((r.wall_area() - 45.3).abs() < 1e-9);
        assert!((r.ceiling_area() - 13.725).abs() < 1e-9);
        assert_eq!(r.ceiling_area(), r.floor_area());
        assert!((r.volume() - 41.175).abs() < 1e-9);
        assert!((r.door_area() - 2.52).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_difference_any_sign() {
        let mut c = OperatingConditions {
            external_temp_c: 45.0,
            internal_temp_c: -35.0,
            operating_hours: 24.0,
            pull_down_hours: 10.0,
            humidity_pct: Some(85.0),
            steam_kw: 0.0,
        };
        assert_eq!(c.temperature_difference(), 80.0);
        c.internal_temp_c = 50.0;
        assert_eq!(c.temperature_difference(), -5.0);
    }
}
