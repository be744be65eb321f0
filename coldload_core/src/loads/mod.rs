//! Heat-load sub-calculators
//!
//! One module per load category on a refrigeration load sheet. Each is a
//! plain function of already-parsed numbers; the facility aggregator in
//! [`crate::calculations::engine`] decides which ones apply.
//!
//! # Overview
//!
//! - [`transmission`] - conduction through the envelope
//! - [`product`] - cooling and freezing incoming product (single or three stage)
//! - [`respiration`] - metabolic heat of stored produce
//! - [`air_change`] - infiltration by flow rate or room volume changes
//! - [`internal`] - people, lights, equipment, heaters and fan motors
//!
//! # Example
//!
//! ```
//! use coldload_core::loads::{transmission, SurfaceUFactors, EnvelopeAreas};
//!
//! let areas = EnvelopeAreas { wall: 77.0, ceiling: 28.0, floor: 28.0, door: 3.6 };
//! let load = transmission::calculate(&SurfaceUFactors::uniform(0.295), &areas, 80.0, 24.0);
//! assert!(load.total > 0.0);
//! ```

pub mod air_change;
pub mod components;
pub mod internal;
pub mod product;
pub mod respiration;
pub mod transmission;

pub use air_change::AirChangeModel;
pub use components::LoadComponent;
pub use internal::{FanSpec, HeaterBank, HeaterLoads, HeaterSet, MiscInput, MiscLoads};
pub use product::{ProductLoad, ThermalProperties};
pub use respiration::RespirationPolicy;
pub use transmission::{EnvelopeAreas, SurfaceUFactors, TransmissionLoad};
