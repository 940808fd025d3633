// ABOUTME: Core types and constants for the Healthy Bytes nutrition tracker
// ABOUTME: Foundation crate with error handling, food models, and resolution constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Healthy Bytes Core
//!
//! Foundation crate providing shared types and constants for the Healthy Bytes
//! barcode nutrition tracker. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Plausibility ceilings, unit factors, and energy heuristics
//! - **models**: Raw nutrition records, serving sizes, resolved nutrition, food items

/// Unified error handling system with standard error codes
pub mod errors;

/// Resolution constants organized by domain
pub mod constants;

/// Core data models (`RawNutritionRecord`, `ServingSize`, `FoodItem`, etc.)
pub mod models;
