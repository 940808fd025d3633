// ABOUTME: Serving size expressed in grams, or unknown when no gram equivalent exists
// ABOUTME: Scales per-100g nutrient figures to a single serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::units::REFERENCE_GRAMS;

/// Serving size normalized to grams
///
/// Persisted as a nullable number (`null` for [`ServingSize::Unknown`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum ServingSize {
    /// A positive, finite gram quantity
    Grams(f64),
    /// No numeric gram equivalent could be derived
    #[default]
    Unknown,
}

impl ServingSize {
    /// Wrap a gram quantity; zero, negative, and non-finite values become `Unknown`
    #[must_use]
    pub fn from_grams(grams: f64) -> Self {
        if grams.is_finite() && grams > 0.0 {
            Self::Grams(grams)
        } else {
            Self::Unknown
        }
    }

    /// Gram quantity, if known
    #[must_use]
    pub const fn grams(self) -> Option<f64> {
        match self {
            Self::Grams(grams) => Some(grams),
            Self::Unknown => None,
        }
    }

    /// Whether a gram quantity is known
    #[must_use]
    pub const fn is_known(self) -> bool {
        matches!(self, Self::Grams(_))
    }

    /// Scale a per-100g figure to this serving; `None` when the size is unknown
    #[must_use]
    pub fn scale_per_100g(self, per_100g: f64) -> Option<f64> {
        self.grams().map(|grams| per_100g * (grams / REFERENCE_GRAMS))
    }
}

impl From<Option<f64>> for ServingSize {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unknown, Self::from_grams)
    }
}

impl From<ServingSize> for Option<f64> {
    fn from(value: ServingSize) -> Self {
        value.grams()
    }
}
