// ABOUTME: Core data models for barcode-driven nutrition tracking
// ABOUTME: Raw nutrition records, serving sizes, nutrients, resolved nutrition, and food items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! Models flow in one direction: a [`RawNutritionRecord`] arrives from the
//! product lookup, a [`ServingSize`] is derived from the free-text serving
//! description, the resolver produces a [`ResolvedNutrition`], and the result
//! is stored as a [`FoodItem`] in the ledger.

/// Validated product barcode
pub mod barcode;
/// Food items stored in the ledger
pub mod food_item;
/// Nutrient identifiers and resolved nutrition values
pub mod nutrition;
/// Untyped nutrition records from the product lookup
pub mod raw_record;
/// Serving size in grams
pub mod serving;

pub use barcode::Barcode;
pub use food_item::{FoodItem, ProductDetails};
pub use nutrition::{round_to_one_decimal, Nutrient, NutritionTotals, ResolvedNutrition};
pub use raw_record::{fields, RawNutritionRecord};
pub use serving::ServingSize;
