// ABOUTME: Plausibility ceilings for calorie and macro nutrient values
// ABOUTME: Serving-size dependent calorie limits and per-nutrient gram ceilings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Calorie ceilings keyed by serving size (exclusive upper gram bound, exclusive kcal ceiling)
///
/// The first bracket whose gram bound exceeds the serving size applies.
/// Servings at or above the last bound use [`CALORIE_CEILING_LARGE_SERVING`].
pub const CALORIE_CEILINGS_BY_SERVING: [(f64, f64); 4] = [
    (10.0, 100.0),
    (30.0, 200.0),
    (70.0, 400.0),
    (150.0, 700.0),
];

/// Calorie ceiling for servings of 150g and more
pub const CALORIE_CEILING_LARGE_SERVING: f64 = 1200.0;

/// Calorie ceiling when no serving size is known
pub const CALORIE_CEILING_UNKNOWN_SERVING: f64 = 800.0;

/// Protein ceiling in grams per serving
pub const PROTEINS_MAX_G: f64 = 100.0;
/// Carbohydrate ceiling in grams per serving
pub const CARBOHYDRATES_MAX_G: f64 = 150.0;
/// Fat ceiling in grams per serving
pub const FAT_MAX_G: f64 = 100.0;
/// Sugar ceiling in grams per serving
pub const SUGAR_MAX_G: f64 = 100.0;
/// Fiber ceiling in grams per serving
pub const FIBER_MAX_G: f64 = 50.0;
/// Salt ceiling in grams per serving
pub const SALT_MAX_G: f64 = 10.0;
/// Sodium ceiling in milligrams per serving
pub const SODIUM_MAX_MG: f64 = 5000.0;
/// Ceiling for any nutrient without a dedicated limit
pub const DEFAULT_NUTRIENT_MAX: f64 = 100.0;
