//! Internal loads
//!
//! Everything inside the room that gives off heat while running: people,
//! lights, equipment, heaters and fan motors. Each follows the duty-cycle
//! pattern `load_kW = rated_kW × hours / 24`.

use serde::{Deserialize, Serialize};

use crate::constants::HOURS_PER_DAY;

/// Rated power averaged over the day (kW)
pub fn duty_cycle(rated_kw: f64, hours: f64) -> f64 {
    rated_kw * hours / HOURS_PER_DAY
}

/// Occupancy, lighting and equipment loads (kW)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MiscLoads {
    pub occupancy: f64,
    pub lighting: f64,
    pub equipment: f64,
    pub total: f64,
}

/// Inputs for [`MiscLoads::calculate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiscInput {
    pub people: f64,
    pub kw_per_person: f64,
    /// Hours people spend in the room
    pub working_hours: f64,
    pub lighting_kw: f64,
    pub equipment_kw: f64,
    /// Hours lights and equipment run
    pub operating_hours: f64,
}

impl MiscLoads {
    pub fn calculate(input: &MiscInput) -> Self {
        let occupancy = input.people * input.kw_per_person * input.working_hours / HOURS_PER_DAY;
        let lighting = duty_cycle(input.lighting_kw, input.operating_hours);
        let equipment = duty_cycle(input.equipment_kw, input.operating_hours);
        Self {
            occupancy,
            lighting,
            equipment,
            total: occupancy + lighting + equipment,
        }
    }
}

/// A group of identical heaters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaterBank {
    pub quantity: f64,
    /// Rating of one heater (kW)
    pub capacity_kw: f64,
}

impl HeaterBank {
    pub fn new(quantity: f64, capacity_kw: f64) -> Self {
        Self { quantity, capacity_kw }
    }

    /// Installed rating of the bank (kW)
    pub fn rated_kw(&self) -> f64 {
        self.quantity * self.capacity_kw
    }

    /// Duty-cycled load (kW)
    pub fn load(&self, hours: f64) -> f64 {
        self.quantity * self.capacity_kw * hours / HOURS_PER_DAY
    }
}

/// Heater banks installed in a room
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaterSet {
    pub peripheral: HeaterBank,
    pub door: HeaterBank,
    pub tray: HeaterBank,
    pub drain: HeaterBank,
}

impl HeaterSet {
    pub fn rated_kw(&self) -> f64 {
        self.peripheral.rated_kw() + self.door.rated_kw() + self.tray.rated_kw() + self.drain.rated_kw()
    }
}

/// Heater loads (kW); `steam` is the humidifier and counts as latent heat
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeaterLoads {
    pub peripheral: f64,
    pub door: f64,
    pub tray: f64,
    pub drain: f64,
    pub steam: f64,
    pub total: f64,
}

impl HeaterLoads {
    pub fn calculate(heaters: &HeaterSet, steam_kw: f64, hours: f64) -> Self {
        let peripheral = heaters.peripheral.load(hours);
        let door = heaters.door.load(hours);
        let tray = heaters.tray.load(hours);
        let drain = heaters.drain.load(hours);
        let steam = duty_cycle(steam_kw, hours);
        Self {
            peripheral,
            door,
            tray,
            drain,
            steam,
            total: peripheral + door + tray + drain + steam,
        }
    }

    /// Electric heaters only (everything but steam)
    pub fn sensible(&self) -> f64 {
        self.peripheral + self.door + self.tray + self.drain
    }
}

/// Evaporator fans
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanSpec {
    /// Motor rating of one fan (kW)
    pub rating_kw: f64,
    pub count: f64,
    pub hours: f64,
    pub airflow_cfm_per_fan: f64,
}

impl FanSpec {
    /// Installed motor rating of all fans (kW)
    pub fn rated_kw(&self) -> f64 {
        self.rating_kw * self.count
    }

    /// Fan motor load (kW)
    pub fn load(&self) -> f64 {
        duty_cycle(self.rated_kw(), self.hours)
    }

    /// Combined airflow of all fans (CFM)
    pub fn total_airflow_cfm(&self) -> f64 {
        self.airflow_cfm_per_fan * self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_uses_working_hours() {
        let misc = MiscLoads::calculate(&MiscInput {
            people: 2.0,
            kw_per_person: 0.407,
            working_hours: 16.0,
            lighting_kw: 0.15,
            equipment_kw: 0.3,
            operating_hours: 24.0,
        });
        assert!((misc.occupancy - 2.0 * 0.407 * 16.0 / 24.0).abs() < 1e-12);
        assert!((misc.lighting - 0.15).abs() < 1e-12);
        assert!((misc.equipment - 0.3).abs() < 1e-12);
        assert_eq!(misc.total, misc.occupancy + misc.lighting + misc.equipment);
    }

    #[test]
    fn test_heaters() {
        let set = HeaterSet {
            peripheral: HeaterBank::new(1.0, 1.5),
            door: HeaterBank::new(1.0, 0.27),
            tray: HeaterBank::new(1.0, 2.2),
            drain: HeaterBank::new(1.0, 0.04),
        };
        let loads = HeaterLoads::calculate(&set, 0.0, 24.0);
        assert!((loads.total - 4.01).abs() < 1e-12);
        assert_eq!(loads.sensible(), loads.total - loads.steam);
        assert!((set.rated_kw() - 4.01).abs() < 1e-12);
    }

    #[test]
    fn test_steam_counted_in_total() {
        let loads = HeaterLoads::calculate(&HeaterSet::default(), 1.2, 12.0);
        assert!((loads.steam - 0.6).abs() < 1e-12);
        assert_eq!(loads.total, loads.steam);
        assert_eq!(loads.sensible(), 0.0);
    }

    #[test]
    fn test_fans() {
        let fans = FanSpec {
            rating_kw: 0.37,
            count: 6.0,
            hours: 24.0,
            airflow_cfm_per_fan: 2000.0,
        };
        assert!((fans.load() - 2.22).abs() < 1e-12);
        assert!((fans.rated_kw() - 2.22).abs() < 1e-12);

        let part_time = FanSpec { hours: 12.0, ..fans };
        assert!((part_time.load() - 1.11).abs() < 1e-12);
        assert!((part_time.rated_kw() - 2.22).abs() < 1e-12);
        assert_eq!(fans.total_airflow_cfm(), 12_000.0);
    }
}
