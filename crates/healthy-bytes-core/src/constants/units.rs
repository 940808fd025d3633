// ABOUTME: Unit conversion constants for serving-size normalization
// ABOUTME: Weight and volume factors used to express serving sizes in grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Grams per avoirdupois ounce
pub const GRAMS_PER_OZ: f64 = 28.35;

/// Grams per milliliter (water density approximation)
pub const GRAMS_PER_ML: f64 = 1.0;

/// Reference quantity for `_100g` nutrient fields
pub const REFERENCE_GRAMS: f64 = 100.0;
