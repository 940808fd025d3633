// ABOUTME: Integration tests for serving-size parsing and nutrient resolution
// ABOUTME: Exercises the public resolution API against dirty real-world product records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthy_bytes_core::models::{Nutrient, RawNutritionRecord, ServingSize};
use healthy_bytes_nutrition::{
    parse_serving_size, resolve_calories, resolve_nutrient, CalorieSource, NutrientResolver,
};
use serde_json::json;

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.05,
        "expected ~{expected}, got {actual}"
    );
}

// ============================================================================
// Serving size
// ============================================================================

#[test]
fn test_gram_labels_parse_exactly() {
    for n in [1.0, 12.5, 30.0, 100.0, 250.0] {
        assert_eq!(parse_serving_size(Some(&format!("{n}g"))), ServingSize::Grams(n));
        assert_eq!(
            parse_serving_size(Some(&format!("{n} grams"))),
            ServingSize::Grams(n)
        );
    }
}

#[test]
fn test_serving_size_edge_inputs() {
    assert_eq!(parse_serving_size(Some("2.5 oz (70g)")), ServingSize::Grams(70.0));
    assert_eq!(parse_serving_size(Some("1 ml")), ServingSize::Grams(1.0));
    assert_eq!(parse_serving_size(Some("3 pieces")), ServingSize::Unknown);
    assert_eq!(parse_serving_size(Some("")), ServingSize::Unknown);
    assert_eq!(parse_serving_size(None), ServingSize::Unknown);
}

// ============================================================================
// Calories
// ============================================================================

#[test]
fn test_kcal_serving_taken_as_is() {
    let record = RawNutritionRecord::new().with_field("energy_kcal_serving", 250);
    for serving in [
        ServingSize::Unknown,
        ServingSize::Grams(30.0),
        ServingSize::Grams(70.0),
        ServingSize::Grams(500.0),
    ] {
        let estimate = resolve_calories(&record, serving);
        approx(estimate.calories, 250.0);
        assert_eq!(estimate.source, CalorieSource::KcalServing);
    }
}

#[test]
fn test_declared_kilojoules_converted() {
    let record = RawNutritionRecord::new()
        .with_field("energy_serving", 1046)
        .with_field("energy_unit", "kj");
    approx(resolve_calories(&record, ServingSize::Unknown).calories, 250.0);
}

#[test]
fn test_undeclared_kilojoules_per_100g_converted() {
    let record = RawNutritionRecord::new().with_field("energy_100g", 2000);
    approx(resolve_calories(&record, ServingSize::Unknown).calories, 478.0);
}

#[test]
fn test_string_numbers_and_nulls_tolerated() {
    let record = RawNutritionRecord::from_value(json!({
        "energy_kcal_serving": null,
        "energy_kcal_100g": "520",
        "proteins_100g": "7.5 g",
        "fat_100g": "n/a",
    }));
    let serving = parse_serving_size(Some("40 g"));
    approx(resolve_calories(&record, serving).calories, 208.0);
    approx(resolve_nutrient(&Nutrient::Proteins, &record, serving).value, 3.0);
    approx(resolve_nutrient(&Nutrient::Fat, &record, serving).value, 0.0);
}

#[test]
fn test_calorie_resolution_is_idempotent() {
    let record = RawNutritionRecord::from_value(json!({
        "energy_serving": 900,
        "energy_100g": 1800,
        "carbohydrates_serving": 40,
    }));
    let serving = ServingSize::Grams(50.0);
    let first = resolve_calories(&record, serving);
    let second = resolve_calories(&record, serving);
    assert_eq!(first, second);
}

// ============================================================================
// Empty and implausible records
// ============================================================================

#[test]
fn test_empty_record_resolves_to_zero() {
    let record = RawNutritionRecord::new();
    for serving in [ServingSize::Unknown, ServingSize::Grams(50.0)] {
        assert!(resolve_calories(&record, serving).calories.abs() < f64::EPSILON);
        for nutrient in [
            Nutrient::Proteins,
            Nutrient::Carbohydrates,
            Nutrient::Fat,
            Nutrient::Sugar,
            Nutrient::Salt,
        ] {
            assert!(resolve_nutrient(&nutrient, &record, serving).value.abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_unrecoverable_protein_falls_to_zero() {
    let record = RawNutritionRecord::new().with_field("proteins_serving", 5000);
    let estimate = resolve_nutrient(&Nutrient::Proteins, &record, ServingSize::Grams(50.0));
    assert!(estimate.value.abs() < f64::EPSILON);
}

#[test]
fn test_non_object_record_is_empty() {
    let record = RawNutritionRecord::from_value(json!([1, 2, 3]));
    assert!(record.is_empty());
    let nutrition = NutrientResolver::new().resolve(&record, ServingSize::Unknown);
    assert!(nutrition.calories.abs() < f64::EPSILON);
}

// ============================================================================
// Full resolution
// ============================================================================

#[test]
fn test_chocolate_bar_resolution() {
    let record = RawNutritionRecord::from_value(json!({
        "energy-kcal_100g": 488,
        "energy_kcal_100g": 488,
        "energy_100g": 2042,
        "energy_unit": "kJ",
        "proteins_100g": 8.6,
        "carbohydrates_100g": 61.0,
        "fat_100g": 23.4,
    }));
    let report = NutrientResolver::new().resolve_with_serving_text(&record, Some("1 bar (50 g)"));

    assert_eq!(report.serving_size, ServingSize::Grams(50.0));
    approx(report.nutrition.calories, 244.0);
    approx(report.nutrition.protein, 4.3);
    approx(report.nutrition.carbs, 30.5);
    approx(report.nutrition.fat, 11.7);
}

#[test]
fn test_resolved_values_are_non_negative_and_rounded() {
    let record = RawNutritionRecord::from_value(json!({
        "energy_kcal_serving": -120,
        "proteins_serving": 3.14159,
        "carbohydrates_serving": -4,
        "fat_serving": 0.04,
    }));
    let nutrition = NutrientResolver::new().resolve(&record, ServingSize::Unknown);

    for value in [nutrition.calories, nutrition.protein, nutrition.carbs, nutrition.fat] {
        assert!(value >= 0.0);
        assert!(((value * 10.0).round() - value * 10.0).abs() < 1e-9);
    }
    approx(nutrition.protein, 3.1);
}
