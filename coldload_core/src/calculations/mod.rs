//! # Facility Load Calculations
//!
//! One calculator per facility type, all sharing one aggregator. Each
//! calculator follows the pattern:
//!
//! - `*Room`, `*Conditions`, `*Product` - raw form sections (JSON-serializable)
//! - `resolve(room, conditions, product) -> LoadInput` - parse and default
//! - `compute(room, conditions, product) -> LoadResult` - pure calculation, never fails
//!
//! [`FacilityForm`] carries the three sections of any facility in one JSON
//! document tagged by `"facility"`.
//!
//! ## Available Calculations
//!
//! - [`cold_room`] - above-freezing storage
//! - [`freezer`] - below-freezing storage
//! - [`blast_freezer`] - fast batch freezing
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::calculations::FacilityForm;
//!
//! let form: FacilityForm = serde_json::from_str(r#"{
//!     "facility": "Freezer",
//!     "room": { "length": "7", "width": "4", "height": "3.5" },
//!     "product": { "product_type": "Fish", "daily_load": 1500 }
//! }"#).unwrap();
//!
//! let result = form.compute();
//! assert!((result.total_tr * 3.517 - result.final_load).abs() < 1e-9);
//! ```

pub mod blast_freezer;
pub mod cold_room;
pub mod engine;
pub mod freezer;
pub mod records;
pub mod result;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::profile::{FacilityProfile, FacilityType};

pub use blast_freezer::BlastFreezerForm;
pub use cold_room::ColdRoomForm;
pub use freezer::FreezerForm;
pub use records::{LoadInput, OperatingConditions, ProductUsage, RoomGeometry};
pub use result::{LoadBreakdown, LoadResult, LoadSummary};

/// Input form for any facility type.
///
/// ## JSON Example
///
/// ```json
/// {
///   "facility": "ColdRoom",
///   "room": { "length": "3.05", "width": "4.5", "height": "3.0" },
///   "conditions": { "external_temp": 45, "internal_temp": 2 },
///   "product": { "product_type": "Banana", "daily_load": "4000" }
/// }
/// ```
///
/// Missing sections and fields take the facility's documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "facility")]
pub enum FacilityForm {
    ColdRoom(ColdRoomForm),
    Freezer(FreezerForm),
    BlastFreezer(BlastFreezerForm),
}

impl FacilityForm {
    /// An empty form of the given type (every field at its default)
    pub fn empty(facility: FacilityType) -> Self {
        match facility {
            FacilityType::ColdRoom => FacilityForm::ColdRoom(ColdRoomForm::default()),
            FacilityType::Freezer => FacilityForm::Freezer(FreezerForm::default()),
            FacilityType::BlastFreezer => FacilityForm::BlastFreezer(BlastFreezerForm::default()),
        }
    }

    pub fn facility(&self) -> FacilityType {
        match self {
            FacilityForm::ColdRoom(_) => FacilityType::ColdRoom,
            FacilityForm::Freezer(_) => FacilityType::Freezer,
            FacilityForm::BlastFreezer(_) => FacilityType::BlastFreezer,
        }
    }

    pub fn profile(&self) -> FacilityProfile {
        FacilityProfile::for_facility(self.facility())
    }

    /// Parse and default every field
    pub fn resolve(&self) -> LoadInput {
        match self {
            FacilityForm::ColdRoom(f) => f.resolve(),
            FacilityForm::Freezer(f) => f.resolve(),
            FacilityForm::BlastFreezer(f) => f.resolve(),
        }
    }

    /// Compute the load. Never fails; see [`engine::run`].
    pub fn compute(&self) -> LoadResult {
        engine::run(&self.profile(), &self.resolve())
    }

    /// Check the resolved input without computing
    pub fn validate(&self) -> CalcResult<()> {
        self.resolve().validate()
    }

    /// Validate, then compute.
    ///
    /// For well-formed input the result is identical to [`compute`](Self::compute).
    /// Input that passes validation but overflows the arithmetic (absurdly
    /// large dimensions, say) is reported as [`CalcError::CalculationFailed`].
    pub fn compute_validated(&self) -> CalcResult<LoadResult> {
        let input = self.resolve();
        input.validate()?;
        let result = engine::run(&self.profile(), &input);
        if !result.final_load.is_finite() {
            return Err(CalcError::calculation_failed(
                "final load",
                format!("load is not finite ({})", result.final_load),
            ));
        }
        if result.air_qty_required_cfm.is_none() {
            return Err(CalcError::calculation_failed(
                "required airflow",
                "airflow is not finite",
            ));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::input::FieldValue;

    #[test]
    fn test_tagged_json() {
        let form: FacilityForm = serde_json::from_str(r#"{"facility":"BlastFreezer"}"#).unwrap();
        assert_eq!(form, FacilityForm::empty(FacilityType::BlastFreezer));

        let json = serde_json::to_string(&FacilityForm::empty(FacilityType::ColdRoom)).unwrap();
        assert!(json.contains("\"facility\":\"ColdRoom\""));
    }

    #[test]
    fn test_compute_matches_module_function() {
        let form = ColdRoomForm::default();
        let direct = cold_room::compute(&form.room, &form.conditions, &form.product);
        assert_eq!(FacilityForm::ColdRoom(form).compute(), direct);
    }

    #[test]
    fn test_validated_matches_unvalidated() {
        for facility in FacilityType::ALL {
            let form = FacilityForm::empty(facility);
            assert_eq!(form.compute_validated().unwrap(), form.compute());
        }
    }

    #[test]
    fn test_validation_rejects_zero_pull_down() {
        let mut form = FreezerForm::default();
        form.conditions.pull_down_time = Some(FieldValue::Number(0.0));
        let err = FacilityForm::Freezer(form).compute_validated().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "pull_down_hours"));
    }

    #[test]
    fn test_validation_rejects_unknown_product() {
        let mut form = ColdRoomForm::default();
        form.product.product_type = Some("Durian".into());
        let err = FacilityForm::ColdRoom(form.clone()).validate().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_REFERENCE");
        // Unvalidated path still computes with the fallback entry
        let result = form.compute();
        assert_eq!(result.product.table_entry, "General Food Items");
    }

    #[test]
    fn test_overflowing_dimensions_fail_calculation() {
        let mut form = ColdRoomForm::default();
        form.room.length = Some(FieldValue::Number(1e200));
        form.room.width = Some(FieldValue::Number(1e200));
        let form = FacilityForm::ColdRoom(form);

        assert!(form.validate().is_ok());
        let err = form.compute_validated().unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(!err.is_input_error());

        // Lenient path still returns the overflowed figures
        let result = form.compute();
        assert!(result.final_load.is_infinite());
        assert_eq!(result.air_qty_required_cfm, None);
    }

    #[test]
    fn test_validation_rejects_reversed_temperatures() {
        let mut form = BlastFreezerForm::default();
        form.conditions.ambient_temp = Some("-40".into());
        assert!(FacilityForm::BlastFreezer(form).validate().is_err());
    }
}
