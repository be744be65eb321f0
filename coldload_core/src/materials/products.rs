//! Product Thermal Properties
//!
//! Reference table of stored products with the thermal properties the
//! product, respiration and storage loads need. Lookups are case-insensitive
//! and tolerate `_`/`-` in place of spaces ("FRUIT_PULP" finds "Fruit Pulp").
//!
//! Unknown names resolve to [`FALLBACK_PRODUCT`] through [`lookup`]; callers
//! that must reject unknown names use [`find`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};

/// Name of the entry used when a product name is not in the table
pub const FALLBACK_PRODUCT: &str = "General Food Items";

/// Thermal and storage properties of one product
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductProfile {
    pub name: &'static str,
    /// Specific heat above freezing (kJ/kg·K)
    pub cp_above: f64,
    /// Specific heat below freezing (kJ/kg·K)
    pub cp_below: f64,
    /// Latent heat of fusion (kJ/kg)
    pub latent_heat: f64,
    /// Initial freezing point (°C)
    pub freezing_point: f64,
    /// Bulk density (kg/m³)
    pub density: f64,
    /// Usable fraction of room volume when stacked
    pub storage_efficiency: f64,
    /// Typical respiration heat (W/tonne), zero for non-living product
    pub respiration_rate: f64,
}

// (name, cp_above, cp_below, latent, freezing point, density, storage efficiency, respiration)
const PRODUCT_TABLE: [(&str, f64, f64, f64, f64, f64, f64, f64); 16] = [
    ("General Food Items", 3.5, 1.8, 250.0, -1.7, 950.0, 0.7, 0.0),
    ("Fruit Pulp", 3.74, 1.96, 233.0, -0.8, 1050.0, 0.65, 0.0),
    ("Banana", 3.35, 1.76, 250.0, -0.8, 600.0, 0.6, 50.0),
    ("Apple", 3.6, 1.9, 280.0, -1.1, 550.0, 0.6, 20.0),
    ("Orange", 3.77, 1.94, 288.0, -0.8, 600.0, 0.6, 25.0),
    ("Grapes", 3.6, 1.84, 270.0, -1.6, 500.0, 0.55, 15.0),
    ("Potato", 3.43, 1.8, 258.0, -0.6, 700.0, 0.65, 20.0),
    ("Onion", 3.77, 1.93, 288.0, -0.8, 650.0, 0.65, 15.0),
    ("Tomato", 3.98, 2.01, 312.0, -0.5, 600.0, 0.55, 40.0),
    ("Vegetables", 3.9, 1.95, 300.0, -0.8, 600.0, 0.6, 45.0),
    ("Dairy Products", 3.77, 1.97, 290.0, -0.6, 1030.0, 0.7, 0.0),
    ("Beef", 3.22, 1.68, 232.0, -1.7, 1000.0, 0.7, 0.0),
    ("Chicken", 3.31, 1.55, 247.0, -2.8, 950.0, 0.7, 0.0),
    ("Fish", 3.6, 1.88, 260.0, -2.2, 1000.0, 0.7, 0.0),
    ("Ice Cream", 2.95, 1.63, 210.0, -5.6, 550.0, 0.75, 0.0),
    ("Frozen Vegetables", 3.9, 1.95, 300.0, -0.8, 560.0, 0.7, 0.0),
];

static PRODUCTS: Lazy<Vec<ProductProfile>> = Lazy::new(|| {
    PRODUCT_TABLE
        .iter()
        .map(
            |&(name, cp_above, cp_below, latent_heat, freezing_point, density, storage_efficiency, respiration_rate)| {
                ProductProfile {
                    name,
                    cp_above,
                    cp_below,
                    latent_heat,
                    freezing_point,
                    density,
                    storage_efficiency,
                    respiration_rate,
                }
            },
        )
        .collect()
});

static INDEX: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    PRODUCTS
        .iter()
        .enumerate()
        .map(|(i, p)| (normalize(p.name), i))
        .collect()
});

fn normalize(name: &str) -> String {
    name.trim()
        .to_uppercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look up a product by name, failing on unknown names
pub fn find(name: &str) -> CalcResult<&'static ProductProfile> {
    INDEX
        .get(&normalize(name))
        .map(|&i| &PRODUCTS[i])
        .ok_or_else(|| CalcError::unknown_reference("product", name))
}

/// Look up a product by name, resolving unknown names to the fallback entry
pub fn lookup(name: &str) -> &'static ProductProfile {
    match find(name) {
        Ok(product) => product,
        Err(_) => {
            debug!(product = name, fallback = FALLBACK_PRODUCT, "unknown product, using fallback");
            fallback()
        }
    }
}

/// The fallback entry ("General Food Items")
pub fn fallback() -> &'static ProductProfile {
    &PRODUCTS[0]
}

/// Every product in table order
pub fn all() -> &'static [ProductProfile] {
    &PRODUCTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruit_pulp_properties() {
        let pulp = find("Fruit Pulp").unwrap();
        assert_eq!(pulp.cp_above, 3.74);
        assert_eq!(pulp.cp_below, 1.96);
        assert_eq!(pulp.latent_heat, 233.0);
        assert_eq!(pulp.freezing_point, -0.8);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("fruit pulp").name, "Fruit Pulp");
        assert_eq!(lookup("ICE_CREAM").name, "Ice Cream");
        assert_eq!(lookup("  banana ").name, "Banana");
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(lookup("Dragon Fruit").name, FALLBACK_PRODUCT);
        assert_eq!(fallback().name, FALLBACK_PRODUCT);
        assert!(matches!(find("Dragon Fruit"), Err(CalcError::UnknownReference { .. })));
    }

    #[test]
    fn test_table_is_physical() {
        for p in all() {
            assert!(p.cp_above > p.cp_below, "{}", p.name);
            assert!(p.latent_heat > 0.0, "{}", p.name);
            assert!(p.freezing_point < 0.0, "{}", p.name);
            assert!(p.storage_efficiency > 0.0 && p.storage_efficiency <= 1.0, "{}", p.name);
        }
    }
}
