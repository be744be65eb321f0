//! Load component categories
//!
//! The heat-load categories a refrigeration load sheet is made of. A
//! [`FacilityProfile`](crate::profile::FacilityProfile) lists which of these
//! are active for a facility; inactive scalar categories are reported as absent.

use serde::{Deserialize, Serialize};

/// Heat-load category
///
/// # Example
/// ```
/// use coldload_core::loads::LoadComponent;
///
/// assert_eq!(LoadComponent::AirChange.display_name(), "Air change");
/// assert!(LoadComponent::FanMotor.is_optional());
/// assert!(!LoadComponent::Transmission.is_optional());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadComponent {
    /// Conduction through walls, ceiling and floor
    Transmission,
    /// Cooling (and freezing) the incoming product
    Product,
    /// Metabolic heat from living produce
    Respiration,
    /// Infiltration of warm outside air
    AirChange,
    /// Door-opening infiltration reported as its own line
    DoorOpening,
    /// Occupancy, lighting and equipment
    Miscellaneous,
    /// Peripheral, door, tray and drain heaters plus steam humidifiers
    Heaters,
    /// Evaporator fan motors
    FanMotor,
}

impl LoadComponent {
    /// All components in load-sheet order
    pub const ALL: [LoadComponent; 8] = [
        LoadComponent::Transmission,
        LoadComponent::Product,
        LoadComponent::Respiration,
        LoadComponent::AirChange,
        LoadComponent::DoorOpening,
        LoadComponent::Miscellaneous,
        LoadComponent::Heaters,
        LoadComponent::FanMotor,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LoadComponent::Transmission => "Transmission",
            LoadComponent::Product => "Product",
            LoadComponent::Respiration => "Respiration",
            LoadComponent::AirChange => "Air change",
            LoadComponent::DoorOpening => "Door opening",
            LoadComponent::Miscellaneous => "Miscellaneous",
            LoadComponent::Heaters => "Heaters",
            LoadComponent::FanMotor => "Fan motor",
        }
    }

    /// Whether the category is a single scalar that is omitted when inactive
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            LoadComponent::Respiration | LoadComponent::DoorOpening | LoadComponent::FanMotor
        )
    }
}

impl std::fmt::Display for LoadComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
