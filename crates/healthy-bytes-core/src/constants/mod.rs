// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for serving-size parsing and nutrient plausibility checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! The calorie and macro cascades depend on empirically chosen thresholds.
//! They live here, grouped by domain, so that every consumer reads the same
//! numbers.

/// Energy unit heuristics and kJ to kcal conversion
pub mod energy;
/// Plausibility ceilings for calories and macro nutrients
pub mod plausibility;
/// Unit conversion and measurement constants
pub mod units;

/// Display defaults for products with missing metadata
pub mod product_defaults {
    /// Name used when the lookup returns no product name
    pub const UNKNOWN_PRODUCT: &str = "Unknown Product";
    /// Brand used when the lookup returns no brand
    pub const UNKNOWN_BRAND: &str = "Unknown Brand";
    /// Serving text used when the lookup returns no serving size
    pub const UNKNOWN_SERVING_SIZE: &str = "Unknown serving size";
    /// Prefix for generated food item identifiers
    pub const ITEM_ID_PREFIX: &str = "item-";
}

/// Barcode validation limits (GTIN family)
pub mod barcode {
    /// Shortest accepted barcode (UPC-E)
    pub const MIN_DIGITS: usize = 6;
    /// Longest accepted barcode (GTIN-14)
    pub const MAX_DIGITS: usize = 14;
}
