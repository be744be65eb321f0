//! Storage Arrangements
//!
//! How product is stacked in the room. The storage factor is the fraction of
//! floor-to-ceiling volume the arrangement can fill; it is reported with the
//! storage summary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Product stacking arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StorageType {
    #[default]
    Palletized,
    Boxed,
    Crated,
    Bulk,
    Racked,
    Hanging,
}

impl StorageType {
    pub const ALL: [StorageType; 6] = [
        StorageType::Palletized,
        StorageType::Boxed,
        StorageType::Crated,
        StorageType::Bulk,
        StorageType::Racked,
        StorageType::Hanging,
    ];

    /// Fraction of room volume usable for this arrangement
    pub fn storage_factor(&self) -> f64 {
        match self {
            StorageType::Palletized => 0.7,
            StorageType::Boxed => 0.6,
            StorageType::Crated => 0.65,
            StorageType::Bulk => 0.8,
            StorageType::Racked => 0.75,
            StorageType::Hanging => 0.5,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StorageType::Palletized => "Palletized",
            StorageType::Boxed => "Boxed",
            StorageType::Crated => "Crated",
            StorageType::Bulk => "Bulk",
            StorageType::Racked => "Racked",
            StorageType::Hanging => "Hanging",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "PALLETIZED" | "PALLETISED" | "PALLET" => Ok(StorageType::Palletized),
            "BOXED" | "BOX" | "CARTON" => Ok(StorageType::Boxed),
            "CRATED" | "CRATE" => Ok(StorageType::Crated),
            "BULK" => Ok(StorageType::Bulk),
            "RACKED" | "RACK" | "SHELVED" => Ok(StorageType::Racked),
            "HANGING" | "HUNG" => Ok(StorageType::Hanging),
            _ => Err(CalcError::unknown_reference("storage type", s)),
        }
    }

    /// Parse, resolving unknown names to Palletized
    pub fn lookup(s: &str) -> Self {
        Self::from_str_flexible(s).unwrap_or_else(|_| {
            debug!(storage_type = s, "unknown storage type, using Palletized");
            StorageType::default()
        })
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
