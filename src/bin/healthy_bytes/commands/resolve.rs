// ABOUTME: Offline nutrition resolution command for healthy-bytes
// ABOUTME: Reads a saved product JSON file and prints the resolved values and their sources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use healthy_bytes::{
    errors::{AppError, AppResult},
    external::ProductRecord,
    nutrition::NutrientResolver,
};
use serde_json::{json, Value};
use tokio::fs;

use crate::helpers::display::display_report;

type Result<T> = AppResult<T>;

/// Resolve a JSON file holding an API response, a product, or bare nutriments
pub async fn resolve_file(path: &Path, serving_size: Option<&str>) -> Result<()> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
    })?;
    let value: Value = serde_json::from_str(&contents)?;
    let product = product_from_value(value)?;

    let serving_text = serving_size.or(product.serving_size.as_deref());
    let report = NutrientResolver::new().resolve_with_serving_text(&product.nutriments, serving_text);

    display_report(&product, serving_text, &report);
    Ok(())
}

fn product_from_value(mut value: Value) -> Result<ProductRecord> {
    if let Some(product) = value.get_mut("product").map(Value::take) {
        return Ok(serde_json::from_value(product)?);
    }
    if value.get("nutriments").is_some() {
        return Ok(serde_json::from_value(value)?);
    }
    if value.is_object() {
        return Ok(serde_json::from_value(json!({ "nutriments": value }))?);
    }
    Err(AppError::invalid_format(
        "Expected a JSON object (API response, product, or nutriments)",
    ))
}
