// ABOUTME: Product record returned by the product lookup and the Open Food Facts response envelope
// ABOUTME: Lenient deserialization plus display-field fallbacks for missing metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use healthy_bytes_core::models::{ProductDetails, RawNutritionRecord};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::openfoodfacts::STATUS_FOUND;

/// A product as returned by a lookup
///
/// Metadata fields that are missing, `null`, or not strings upstream are
/// `None`; nutriments are kept untyped for the resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: Option<String>,
    /// Comma-separated brands
    #[serde(default, deserialize_with = "lenient_string")]
    pub brands: Option<String>,
    /// Free-text serving size ("30 g", "2.5 oz (70g)")
    #[serde(default, deserialize_with = "lenient_string")]
    pub serving_size: Option<String>,
    /// Main image
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    /// Front-of-pack image
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_front_url: Option<String>,
    /// Small front-of-pack image
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_front_small_url: Option<String>,
    /// Nutrition facts
    #[serde(default, deserialize_with = "lenient_nutriments")]
    pub nutriments: RawNutritionRecord,
}

impl ProductRecord {
    /// First available image: main, then front, then small front
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        [
            &self.image_url,
            &self.image_front_url,
            &self.image_front_small_url,
        ]
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|url| !url.trim().is_empty())
    }

    /// Display metadata for building a food item
    #[must_use]
    pub fn details(&self) -> ProductDetails {
        ProductDetails {
            name: self.product_name.clone(),
            brand: self.brands.clone(),
            image: self.image().map(str::to_owned),
            serving_size_text: self.serving_size.clone(),
        }
    }
}

/// Response of `GET /api/v0/product/{barcode}.json`
#[derive(Debug, Deserialize)]
pub(crate) struct ProductResponse {
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    product: Option<ProductRecord>,
}

impl ProductResponse {
    /// The product, if the API reported it as found
    pub(crate) fn into_found(self) -> Option<ProductRecord> {
        if self.status == Some(STATUS_FOUND) {
            self.product
        } else {
            None
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    })
}

/// Nutriment keys from the live API use `energy-kcal_100g`; the resolver reads
/// `energy_kcal_100g`. Hyphenated keys are copied to their underscore form
/// unless that form is already present.
fn lenient_nutriments<'de, D>(deserializer: D) -> Result<RawNutritionRecord, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(fields) = Value::deserialize(deserializer)? else {
        return Ok(RawNutritionRecord::new());
    };

    let mut record: RawNutritionRecord = fields.clone().into_iter().collect();
    for (key, value) in fields {
        if key.contains('-') {
            let normalized = key.replace('-', "_");
            if record.get(&normalized).is_none() {
                record.insert(normalized, value);
            }
        }
    }
    Ok(record)
}
