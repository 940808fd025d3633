// ABOUTME: Food item created from a resolved product lookup and stored in the ledger
// ABOUTME: ProductDetails carries display metadata with fallbacks for missing fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Barcode, ResolvedNutrition, ServingSize};
use crate::constants::product_defaults::{
    ITEM_ID_PREFIX, UNKNOWN_BRAND, UNKNOWN_PRODUCT, UNKNOWN_SERVING_SIZE,
};

/// Display metadata for a product, any of which may be missing upstream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Product name
    pub name: Option<String>,
    /// Brand (or comma-separated brands)
    pub brand: Option<String>,
    /// Image URL
    pub image: Option<String>,
    /// Free-text serving size description
    pub serving_size_text: Option<String>,
}

/// A scanned product with its resolved nutrition
///
/// Field names serialize in camelCase so persisted ledgers stay readable by
/// the web front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Unique identifier (`item-<uuid>`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Display brand
    pub brand: String,
    /// Image URL, if the product has one
    pub image: Option<String>,
    /// Serving size as written on the product
    pub serving_size: String,
    /// Serving size in grams
    pub serving_size_value: ServingSize,
    /// Barcode the product was looked up with
    pub barcode: Barcode,
    /// Resolved calories and macros
    #[serde(flatten)]
    pub nutrition: ResolvedNutrition,
    /// When the item was added
    pub added_at: DateTime<Utc>,
}

impl FoodItem {
    /// Create a food item with a fresh identifier
    ///
    /// Blank metadata falls back to the "Unknown ..." display defaults.
    #[must_use]
    pub fn from_product(
        barcode: Barcode,
        details: &ProductDetails,
        serving_size: ServingSize,
        nutrition: ResolvedNutrition,
    ) -> Self {
        Self {
            id: format!("{ITEM_ID_PREFIX}{}", Uuid::new_v4()),
            name: non_blank_or(details.name.as_deref(), UNKNOWN_PRODUCT),
            brand: non_blank_or(details.brand.as_deref(), UNKNOWN_BRAND),
            image: details
                .image
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_owned),
            serving_size: non_blank_or(details.serving_size_text.as_deref(), UNKNOWN_SERVING_SIZE),
            serving_size_value: serving_size,
            barcode,
            nutrition,
            added_at: Utc::now(),
        }
    }
}

fn non_blank_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}
