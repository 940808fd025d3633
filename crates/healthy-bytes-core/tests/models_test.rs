// ABOUTME: Integration tests for core models and error types
// ABOUTME: Validates barcode rules, lenient raw records, totals, and persisted food item shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthy_bytes_core::{
    errors::{AppError, ErrorCode},
    models::{
        Barcode, FoodItem, NutritionTotals, ProductDetails, RawNutritionRecord, ResolvedNutrition,
        ServingSize,
    },
};
use serde_json::json;

#[test]
fn test_barcode_lengths() {
    for code in ["012345", "03448005", "012345678905", "3017620422003", "10012345678902"] {
        assert_eq!(Barcode::parse(code).unwrap().as_str(), code);
    }
    for code in ["12345", "123456789012345"] {
        assert_eq!(
            Barcode::parse(code).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }
}

#[test]
fn test_barcode_trims_and_rejects_non_digits() {
    assert_eq!(
        Barcode::parse("  3017620422003\n").unwrap().to_string(),
        "3017620422003"
    );
    assert!(Barcode::parse("").is_err());
    assert!(Barcode::parse("30176-20422003").is_err());
    assert!(Barcode::parse("ABC1234567").is_err());
}

#[test]
fn test_barcode_deserialization_validates() {
    let ok: Barcode = serde_json::from_value(json!("03448005")).unwrap();
    assert_eq!(ok.as_str(), "03448005");
    assert!(serde_json::from_value::<Barcode>(json!("not-a-code")).is_err());
}

#[test]
fn test_raw_record_numbers_are_lenient() {
    let record = RawNutritionRecord::from_value(json!({
        "proteins_serving": "4.5",
        "fat_serving": "12g",
        "carbohydrates_serving": null,
        "salt_serving": true,
        "sugar_serving": "abc",
    }));

    assert_eq!(record.number("proteins_serving"), Some(4.5));
    assert_eq!(record.number("fat_serving"), Some(12.0));
    assert_eq!(record.number("carbohydrates_serving"), None);
    assert_eq!(record.number("salt_serving"), None);
    assert_eq!(record.number("sugar_serving"), None);
    assert_eq!(record.number("missing"), None);
}

#[test]
fn test_raw_record_from_non_object_is_empty() {
    assert!(RawNutritionRecord::from_value(json!([1, 2, 3])).is_empty());
    assert!(RawNutritionRecord::from_value(json!(null)).is_empty());
}

#[test]
fn test_serving_size_serializes_as_nullable_number() {
    assert_eq!(serde_json::to_value(ServingSize::Grams(30.0)).unwrap(), json!(30.0));
    assert_eq!(serde_json::to_value(ServingSize::Unknown).unwrap(), json!(null));
    let back: ServingSize = serde_json::from_value(json!(-4.0)).unwrap();
    assert_eq!(back, ServingSize::Unknown);
}

#[test]
fn test_totals_sum_and_round_for_display() {
    let items = [
        ResolvedNutrition::rounded(244.0, 4.3, 30.5, 11.7),
        ResolvedNutrition::rounded(139.0, 0.0, 35.0, 0.0),
        ResolvedNutrition::ZERO,
    ];
    let totals: NutritionTotals = items.iter().sum();

    assert!((totals.calories - 383.0).abs() < 1e-9);
    assert!((totals.protein - 4.3).abs() < 1e-9);

    let display = totals.rounded_for_display();
    assert_eq!(
        display,
        NutritionTotals {
            calories: 383.0,
            protein: 4.0,
            carbs: 66.0,
            fat: 12.0,
        }
    );
}

#[test]
fn test_resolved_nutrition_never_negative() {
    let nutrition = ResolvedNutrition::rounded(-5.0, f64::NAN, f64::INFINITY, 1.25);
    assert!(nutrition.calories.abs() < f64::EPSILON);
    assert!(nutrition.protein.abs() < f64::EPSILON);
    assert!(nutrition.carbs.abs() < f64::EPSILON);
    assert!((nutrition.fat - 1.3).abs() < 1e-9);
}

#[test]
fn test_food_item_loads_from_stored_json() {
    let stored = json!({
        "id": "item-5b1f0f3c-8d0e-4c8e-9a57-1d6f3e0e2a11",
        "name": "Greek Yogurt",
        "brand": "Dairy Farm",
        "image": null,
        "servingSize": "Unknown serving size",
        "servingSizeValue": null,
        "barcode": "4006040003421",
        "calories": 97.0,
        "protein": 9.0,
        "carbs": 3.6,
        "fat": 5.0,
        "addedAt": "2025-03-01T12:30:00Z"
    });

    let item: FoodItem = serde_json::from_value(stored).unwrap();

    assert_eq!(item.serving_size_value, ServingSize::Unknown);
    assert_eq!(item.barcode.as_str(), "4006040003421");
    assert!((item.nutrition.protein - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_food_item_trims_blank_metadata() {
    let details = ProductDetails {
        name: Some("   ".into()),
        brand: Some(" Mars ".into()),
        image: Some(String::new()),
        serving_size_text: None,
    };
    let item = FoodItem::from_product(
        Barcode::parse("5000159461122").unwrap(),
        &details,
        ServingSize::Unknown,
        ResolvedNutrition::ZERO,
    );

    assert_eq!(item.name, "Unknown Product");
    assert_eq!(item.brand, "Mars");
    assert!(item.image.is_none());
}

#[test]
fn test_app_error_retryability_and_display() {
    let error = AppError::external_rate_limited("Open Food Facts").with_resource_id("03448005");
    assert!(error.is_retryable());
    assert_eq!(error.code, ErrorCode::ExternalRateLimited);
    assert!(error.to_string().contains("Open Food Facts rate limit exceeded"));

    assert!(!AppError::not_found("Food item").is_retryable());
    assert!(!AppError::config("bad value").is_retryable());
}
