// ABOUTME: Nutrient identifiers with plausibility ceilings and resolved per-item nutrition
// ABOUTME: ResolvedNutrition is the resolver output; NutritionTotals aggregates ledger items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::raw_record::fields::{PER_100G_SUFFIX, SERVING_SUFFIX};
use crate::constants::plausibility::{
    CARBOHYDRATES_MAX_G, DEFAULT_NUTRIENT_MAX, FAT_MAX_G, FIBER_MAX_G, PROTEINS_MAX_G,
    SALT_MAX_G, SODIUM_MAX_MG, SUGAR_MAX_G,
};

/// A nutrient family in the raw record (`{key}_serving` / `{key}_100g`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Protein (g)
    Proteins,
    /// Carbohydrates (g)
    Carbohydrates,
    /// Fat (g)
    Fat,
    /// Sugar (g)
    Sugar,
    /// Fiber (g)
    Fiber,
    /// Salt (g)
    Salt,
    /// Sodium (mg)
    Sodium,
    /// Any other field family, checked against the default ceiling
    Other(String),
}

impl Nutrient {
    /// Map a field family name to a nutrient
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "proteins" => Self::Proteins,
            "carbohydrates" => Self::Carbohydrates,
            "fat" => Self::Fat,
            "sugar" => Self::Sugar,
            "fiber" => Self::Fiber,
            "salt" => Self::Salt,
            "sodium" => Self::Sodium,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Field family name used in the raw record
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Proteins => "proteins",
            Self::Carbohydrates => "carbohydrates",
            Self::Fat => "fat",
            Self::Sugar => "sugar",
            Self::Fiber => "fiber",
            Self::Salt => "salt",
            Self::Sodium => "sodium",
            Self::Other(key) => key,
        }
    }

    /// Largest credible per-serving amount
    #[must_use]
    pub const fn ceiling(&self) -> f64 {
        match self {
            Self::Proteins => PROTEINS_MAX_G,
            Self::Carbohydrates => CARBOHYDRATES_MAX_G,
            Self::Fat => FAT_MAX_G,
            Self::Sugar => SUGAR_MAX_G,
            Self::Fiber => FIBER_MAX_G,
            Self::Salt => SALT_MAX_G,
            Self::Sodium => SODIUM_MAX_MG,
            Self::Other(_) => DEFAULT_NUTRIENT_MAX,
        }
    }

    /// Name of the per-serving field
    #[must_use]
    pub fn serving_field(&self) -> String {
        format!("{}{SERVING_SUFFIX}", self.key())
    }

    /// Name of the per-100g field
    #[must_use]
    pub fn per_100g_field(&self) -> String {
        format!("{}{PER_100G_SUFFIX}", self.key())
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Round to one decimal place; NaN, infinite, and negative values become 0
///
/// Rounds the scaled value half away from zero, so a stored `1.45` (binary
/// `1.4499...`) becomes `1.5`, unlike a decimal-exact `toFixed(1)` which gives `1.4`.
#[must_use]
pub fn round_to_one_decimal(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value * 10.0).round() / 10.0
}

/// Calories and macros for one food item
///
/// Every field is non-negative and rounded to one decimal place when produced
/// by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedNutrition {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl ResolvedNutrition {
    /// All-zero nutrition
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    /// Build from raw values, rounding each to one decimal
    #[must_use]
    pub fn rounded(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories: round_to_one_decimal(calories),
            protein: round_to_one_decimal(protein),
            carbs: round_to_one_decimal(carbs),
            fat: round_to_one_decimal(fat),
        }
    }
}

/// Element-wise sum of item nutrition across the ledger
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Total energy (kcal)
    pub calories: f64,
    /// Total protein (g)
    pub protein: f64,
    /// Total carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fat: f64,
}

impl NutritionTotals {
    /// Totals rounded to whole numbers for display
    #[must_use]
    pub fn rounded_for_display(&self) -> Self {
        Self {
            calories: self.calories.round(),
            protein: self.protein.round(),
            carbs: self.carbs.round(),
            fat: self.fat.round(),
        }
    }
}

impl Add<ResolvedNutrition> for NutritionTotals {
    type Output = Self;

    fn add(self, item: ResolvedNutrition) -> Self {
        Self {
            calories: self.calories + item.calories,
            protein: self.protein + item.protein,
            carbs: self.carbs + item.carbs,
            fat: self.fat + item.fat,
        }
    }
}

impl<'a> Sum<&'a ResolvedNutrition> for NutritionTotals {
    fn sum<I: Iterator<Item = &'a ResolvedNutrition>>(iter: I) -> Self {
        iter.fold(Self::default(), |totals, item| totals + *item)
    }
}
