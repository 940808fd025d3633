// ABOUTME: Nutrient value resolution engine for scanned food products
// ABOUTME: Turns inconsistent nutrition records into one trustworthy calorie and macro estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Healthy Bytes Nutrition
//!
//! Upstream product data is dirty: energy arrives in kJ labelled as kcal,
//! per-100g figures are copied into per-serving fields, and serving sizes are
//! free text. This crate derives a single calorie and macro estimate per item.
//!
//! Everything here is synchronous and side-effect free. Functions take their
//! inputs by reference and never fail; implausible or malformed data degrades
//! to zero.
//!
//! ## Modules
//!
//! - **`serving_size`**: free-text serving description to grams
//! - **calories**: prioritized calorie cascade with kJ detection
//! - **macros**: per-nutrient cascade with plausibility ceilings
//! - **resolver**: combines the above into `ResolvedNutrition`

/// Prioritized calorie cascade
pub mod calories;
/// Per-nutrient macro cascade
pub mod macros;
/// Full record resolution
pub mod resolver;
/// Serving-size text parsing
pub mod serving_size;

pub use calories::{is_reasonable_calories, resolve_calories, CalorieEstimate, CalorieSource};
pub use macros::{resolve_nutrient, NutrientEstimate, NutrientSource};
pub use resolver::{NutrientResolver, ResolutionReport};
pub use serving_size::{detect_measure, parse_serving_size, ServingMeasure, ServingUnit};
