// ABOUTME: Macro nutrient resolution from per-serving and per-100g record fields
// ABOUTME: Applies per-nutrient ceilings and recovers per-100g values stored under serving keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use healthy_bytes_core::models::{Nutrient, RawNutritionRecord, ServingSize};
use serde::{Deserialize, Serialize};

/// Field (and treatment) that produced a nutrient estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientSource {
    /// `{nutrient}_serving` as reported
    Serving,
    /// `{nutrient}_100g` scaled to the serving
    Per100gScaled,
    /// `{nutrient}_100g` as reported (serving size unknown)
    Per100g,
    /// `{nutrient}_serving` reinterpreted as a per-100g figure and scaled
    ServingReinterpretedAsPer100g,
    /// Nothing plausible was found
    Default,
}

/// Nutrient value together with the source that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientEstimate {
    /// Amount per serving (unrounded)
    pub value: f64,
    /// Where the value came from
    pub source: NutrientSource,
}

fn is_reasonable_amount(value: f64, nutrient: &Nutrient) -> bool {
    value.is_finite() && value >= 0.0 && value <= nutrient.ceiling()
}

/// Resolve a nutrient amount per serving
///
/// Cascade, first plausible value wins:
/// 1. the per-serving field
/// 2. the per-100g field scaled to the serving (serving size known)
/// 3. the per-100g field as-is (serving size unknown)
/// 4. an implausible per-serving value treated as a per-100g figure and scaled
/// 5. zero
#[must_use]
pub fn resolve_nutrient(
    nutrient: &Nutrient,
    record: &RawNutritionRecord,
    serving_size: ServingSize,
) -> NutrientEstimate {
    let serving_value = record.number(&nutrient.serving_field());
    let per_100g_value = record.number(&nutrient.per_100g_field());
    let plausible = |value: &f64| is_reasonable_amount(*value, nutrient);

    if let Some(value) = serving_value.filter(plausible) {
        return NutrientEstimate {
            value,
            source: NutrientSource::Serving,
        };
    }

    let derived = match (per_100g_value, serving_size.grams()) {
        (Some(per_100g), Some(_)) => serving_size
            .scale_per_100g(per_100g)
            .filter(plausible)
            .map(|value| (value, NutrientSource::Per100gScaled)),
        (Some(per_100g), None) => {
            plausible(&per_100g).then_some((per_100g, NutrientSource::Per100g))
        }
        (None, _) => None,
    };

    // Per-100g figures are sometimes duplicated into the per-serving field
    let recovered = || {
        serving_value
            .and_then(|value| serving_size.scale_per_100g(value))
            .filter(plausible)
            .map(|value| (value, NutrientSource::ServingReinterpretedAsPer100g))
    };

    derived.or_else(recovered).map_or(
        NutrientEstimate {
            value: 0.0,
            source: NutrientSource::Default,
        },
        |(value, source)| NutrientEstimate { value, source },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_value_preferred() {
        let record = RawNutritionRecord::new()
            .with_field("proteins_serving", 8.0)
            .with_field("proteins_100g", 20.0);
        let estimate = resolve_nutrient(&Nutrient::Proteins, &record, ServingSize::Grams(40.0));
        assert_eq!(estimate.source, NutrientSource::Serving);
        assert!((estimate.value - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaled_when_serving_missing() {
        let record = RawNutritionRecord::new().with_field("fat_100g", "30");
        let estimate = resolve_nutrient(&Nutrient::Fat, &record, ServingSize::Grams(25.0));
        assert_eq!(estimate.source, NutrientSource::Per100gScaled);
        assert!((estimate.value - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_per_100g_as_is_without_serving_size() {
        let record = RawNutritionRecord::new().with_field("carbohydrates_100g", 60.0);
        let estimate = resolve_nutrient(&Nutrient::Carbohydrates, &record, ServingSize::Unknown);
        assert_eq!(estimate.source, NutrientSource::Per100g);
        assert!((estimate.value - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_implausible_serving_value_recovered() {
        // 120 g of protein per serving is implausible; as per-100g on 50 g it is 60 g
        let record = RawNutritionRecord::new().with_field("proteins_serving", 120.0);
        let estimate = resolve_nutrient(&Nutrient::Proteins, &record, ServingSize::Grams(50.0));
        assert_eq!(estimate.source, NutrientSource::ServingReinterpretedAsPer100g);
        assert!((estimate.value - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrecoverable_serving_value_is_zero() {
        let record = RawNutritionRecord::new().with_field("proteins_serving", 5000.0);
        let estimate = resolve_nutrient(&Nutrient::Proteins, &record, ServingSize::Grams(50.0));
        assert_eq!(estimate.source, NutrientSource::Default);
        assert!(estimate.value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_ceiling_is_inclusive() {
        let record = RawNutritionRecord::new().with_field("salt_serving", 10.0);
        let estimate = resolve_nutrient(&Nutrient::Salt, &record, ServingSize::Unknown);
        assert!((estimate.value - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_values_rejected() {
        let record = RawNutritionRecord::new().with_field("fat_serving", -2.0);
        let estimate = resolve_nutrient(&Nutrient::Fat, &record, ServingSize::Unknown);
        assert_eq!(estimate.source, NutrientSource::Default);
    }
}
