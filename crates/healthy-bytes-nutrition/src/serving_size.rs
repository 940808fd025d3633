// ABOUTME: Serving-size text parser normalizing product labels to grams
// ABOUTME: Recognizes gram, milliliter, ounce, parenthetical gram, and piece counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Serving-size parsing
//!
//! Product metadata describes servings as free text ("100g", "250 ml",
//! "2.5 oz (70g)", "3 pieces"). Pattern families are tried in a fixed order
//! and the first one that matches anywhere in the text wins:
//!
//! 1. grams (`g`, `gr`, `gram`, `grams`, and any spelling starting with `g`
//!    such as `gm` or `gms`)
//! 2. milliliters (`ml`, `milliliter`, `milliliters`), 1 ml taken as 1 g
//! 3. ounces (`oz`, `ounce`, `ounces`), 1 oz = 28.35 g
//! 4. a parenthetical gram annotation such as `(70g)`
//! 5. piece counts, which have no generic gram equivalent
//!
//! Matching is case-insensitive and unanchored, so a label carrying both
//! an ounce figure and a gram figure resolves to the gram figure.

use std::sync::LazyLock;

use healthy_bytes_core::constants::units::{GRAMS_PER_ML, GRAMS_PER_OZ};
use healthy_bytes_core::models::ServingSize;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Regex patterns for serving-size units
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static GRAM_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 100g, 100 g, 30 gr, 30 gm, 100 gms, 1 gram, 45.5 grams
    // Unbounded on the right so label spellings like "gm" and "gms" still count
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:grams|gram|gr|g)").ok()
});

static MILLILITER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 250ml, 330 ml, 1 milliliter, 500 milliliters
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:milliliters|milliliter|ml)\b").ok()
});

static OUNCE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1oz, 2.5 oz, 1 ounce, 12 ounces
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:ounces|ounce|oz)\b").ok()
});

static PARENTHETICAL_GRAM_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: (70g), (70 g)
    Regex::new(r"\((\d+(?:\.\d+)?)\s*g\)").ok()
});

static PIECES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1 piece, 3 pieces, 2pieces
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:pieces|piece)\b").ok()
});

/// Unit family recognized in a serving-size description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServingUnit {
    /// Weight in grams
    Grams,
    /// Volume in milliliters
    Milliliters,
    /// Weight in ounces
    Ounces,
    /// Gram figure in parentheses next to another unit
    ParentheticalGrams,
    /// Count of discrete pieces
    Pieces,
}

impl ServingUnit {
    /// Pattern families in precedence order
    const PRECEDENCE: [Self; 5] = [
        Self::Grams,
        Self::Milliliters,
        Self::Ounces,
        Self::ParentheticalGrams,
        Self::Pieces,
    ];

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::Grams => GRAM_PATTERN.as_ref(),
            Self::Milliliters => MILLILITER_PATTERN.as_ref(),
            Self::Ounces => OUNCE_PATTERN.as_ref(),
            Self::ParentheticalGrams => PARENTHETICAL_GRAM_PATTERN.as_ref(),
            Self::Pieces => PIECES_PATTERN.as_ref(),
        }
    }

    /// Grams per unit, `None` for units without a generic mass
    #[must_use]
    pub const fn grams_per_unit(self) -> Option<f64> {
        match self {
            Self::Grams | Self::ParentheticalGrams => Some(1.0),
            Self::Milliliters => Some(GRAMS_PER_ML),
            Self::Ounces => Some(GRAMS_PER_OZ),
            Self::Pieces => None,
        }
    }
}

/// Amount and unit extracted from a serving-size description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServingMeasure {
    /// Numeric amount as written
    pub amount: f64,
    /// Unit family that matched
    pub unit: ServingUnit,
}

impl ServingMeasure {
    /// Gram equivalent of this measure
    #[must_use]
    pub fn to_serving_size(self) -> ServingSize {
        self.unit
            .grams_per_unit()
            .map_or(ServingSize::Unknown, |factor| {
                ServingSize::from_grams(self.amount * factor)
            })
    }
}

/// Find the first matching unit family in a serving-size description
#[must_use]
pub fn detect_measure(text: &str) -> Option<ServingMeasure> {
    let normalized = text.to_lowercase();

    ServingUnit::PRECEDENCE.into_iter().find_map(|unit| {
        let captures = unit.pattern()?.captures(&normalized)?;
        let amount = captures.get(1)?.as_str().parse::<f64>().ok()?;
        Some(ServingMeasure { amount, unit })
    })
}

/// Parse a serving-size description into grams
///
/// Missing or blank text, piece counts, and unrecognized descriptions all
/// yield [`ServingSize::Unknown`].
///
/// # Examples
///
/// ```rust
/// use healthy_bytes_core::models::ServingSize;
/// use healthy_bytes_nutrition::parse_serving_size;
///
/// assert_eq!(parse_serving_size(Some("2.5 oz (70g)")), ServingSize::Grams(70.0));
/// assert_eq!(parse_serving_size(Some("3 pieces")), ServingSize::Unknown);
/// assert_eq!(parse_serving_size(None), ServingSize::Unknown);
/// ```
#[must_use]
pub fn parse_serving_size(text: Option<&str>) -> ServingSize {
    text.filter(|t| !t.trim().is_empty())
        .and_then(detect_measure)
        .map_or(ServingSize::Unknown, ServingMeasure::to_serving_size)
}
