// ABOUTME: Energy unit constants for kilojoule detection and kcal conversion
// ABOUTME: Magnitude thresholds that flag unlabeled energy values as likely kilojoules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Multiplier converting kilojoules to kilocalories
pub const KJ_TO_KCAL: f64 = 0.239;

/// Declared unit string for kilojoules (compared lower-cased)
pub const KILOJOULE_UNIT: &str = "kj";

/// Per-serving energy above this is treated as likely kilojoules
pub const LIKELY_KJ_SERVING_THRESHOLD: f64 = 400.0;

/// Per-100g energy above this is treated as likely kilojoules
pub const LIKELY_KJ_PER_100G_THRESHOLD: f64 = 1000.0;

/// Lower bound of the band where unlabeled energy is assumed to be kJ
pub const ASSUMED_KJ_BAND_MIN: f64 = 400.0;

/// Upper bound of the band where unlabeled energy is assumed to be kJ
pub const ASSUMED_KJ_BAND_MAX: f64 = 3000.0;
