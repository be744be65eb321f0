//! # Reference Tables
//!
//! Built-in reference data consulted by the load calculators:
//!
//! - **Products**: thermal properties per stored product (fallback "General Food Items")
//! - **Insulation**: panel core conductivity and U-factor by thickness (fallback PUF)
//! - **Storage**: stacking arrangement and storage factor (fallback Palletized)
//!
//! Tables are immutable and built once on first use, so lookups are safe
//! from any thread.
//!
//! ## Example
//!
//! ```rust
//! use coldload_core::materials::{products, InsulationType, StorageType};
//!
//! let pulp = products::lookup("fruit pulp");
//! assert_eq!(pulp.latent_heat, 233.0);
//!
//! assert_eq!(InsulationType::lookup("unknown"), InsulationType::PUF);
//! assert_eq!(StorageType::lookup("Boxed").storage_factor(), 0.6);
//! ```

pub mod insulation;
pub mod products;
pub mod storage;

pub use insulation::{InsulationType, DEFAULT_THICKNESS_MM};
pub use products::{ProductProfile, FALLBACK_PRODUCT};
pub use storage::StorageType;
