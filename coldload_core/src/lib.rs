//! # coldload_core - Refrigeration Load Calculation Engine
//!
//! `coldload_core` estimates the cooling capacity required by cold rooms,
//! freezers and blast freezers. All inputs and outputs are JSON-serializable,
//! so a form posted by a front end can be computed and returned as-is.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Forgiving input**: Missing or unparsable form fields take documented defaults
//! - **One aggregator**: Facility types differ only by their [`profile::FacilityProfile`]
//!
//! ## Quick Start
//!
//! ```rust
//! use coldload_core::calculations::FacilityForm;
//! use coldload_core::profile::FacilityType;
//!
//! let form = FacilityForm::empty(FacilityType::ColdRoom);
//! let result = form.compute();
//!
//! assert!(result.final_load > result.total_before_safety);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"totalTR\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Facility forms, the load aggregator and result records
//! - [`profile`] - Per-facility constants and active load components
//! - [`loads`] - Individual load component formulas
//! - [`materials`] - Product, insulation and storage reference tables
//! - [`input`] - Lenient form-field parsing
//! - [`constants`] - Physical constants and conversion factors
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Form loading and atomic result saves

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod file_io;
pub mod input;
pub mod loads;
pub mod materials;
pub mod profile;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{FacilityForm, LoadInput, LoadResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_form, load_result, save_result, SavedResult};
pub use profile::{FacilityProfile, FacilityType};
