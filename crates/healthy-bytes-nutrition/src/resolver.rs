// ABOUTME: Combines serving-size parsing with calorie and macro cascades for one product
// ABOUTME: Produces rounded ResolvedNutrition plus a report of which fields were used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use healthy_bytes_core::models::{Nutrient, RawNutritionRecord, ResolvedNutrition, ServingSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calories::{resolve_calories, CalorieSource};
use crate::macros::{resolve_nutrient, NutrientSource};
use crate::serving_size::parse_serving_size;

/// Resolution result with provenance for each value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Serving size the values were computed for
    pub serving_size: ServingSize,
    /// Rounded nutrition values
    pub nutrition: ResolvedNutrition,
    /// Source of the calorie value
    pub calorie_source: CalorieSource,
    /// Source of the protein value
    pub protein_source: NutrientSource,
    /// Source of the carbohydrate value
    pub carbs_source: NutrientSource,
    /// Source of the fat value
    pub fat_source: NutrientSource,
}

/// Stateless resolver turning a raw record into per-item nutrition
///
/// Holds no state; concurrent use with distinct inputs needs no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct NutrientResolver;

impl NutrientResolver {
    /// Create a resolver
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolve calories and macros for an already-parsed serving size
    #[must_use]
    pub fn resolve(&self, record: &RawNutritionRecord, serving_size: ServingSize) -> ResolvedNutrition {
        self.report(record, serving_size).nutrition
    }

    /// Parse the serving text, then resolve
    #[must_use]
    pub fn resolve_with_serving_text(
        &self,
        record: &RawNutritionRecord,
        serving_size_text: Option<&str>,
    ) -> ResolutionReport {
        self.report(record, parse_serving_size(serving_size_text))
    }

    /// Resolve with provenance for every value
    #[must_use]
    pub fn report(&self, record: &RawNutritionRecord, serving_size: ServingSize) -> ResolutionReport {
        let calories = resolve_calories(record, serving_size);
        let protein = resolve_nutrient(&Nutrient::Proteins, record, serving_size);
        let carbs = resolve_nutrient(&Nutrient::Carbohydrates, record, serving_size);
        let fat = resolve_nutrient(&Nutrient::Fat, record, serving_size);

        let nutrition =
            ResolvedNutrition::rounded(calories.calories, protein.value, carbs.value, fat.value);

        debug!(
            nutrition.calories = nutrition.calories,
            nutrition.protein = nutrition.protein,
            nutrition.carbs = nutrition.carbs,
            nutrition.fat = nutrition.fat,
            "Resolved nutrition"
        );

        ResolutionReport {
            serving_size,
            nutrition,
            calorie_source: calories.source,
            protein_source: protein.source,
            carbs_source: carbs.source,
            fat_source: fat.source,
        }
    }
}
