// ABOUTME: Calorie resolution cascade over heterogeneous energy fields
// ABOUTME: Detects unlabeled kilojoules, filters implausible values, and falls back to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie resolution
//!
//! Product records report energy in up to seven fields with inconsistent
//! units and reporting bases. Candidates are tried in trust order and the
//! first plausible one wins:
//!
//! 1. `energy_kcal_serving`
//! 2. `calories_serving`
//! 3. `energy_serving`, converted from kJ when flagged (or forced when only
//!    the converted value is plausible)
//! 4. per-100g candidates scaled to the serving (`energy_kcal_100g`,
//!    `calories_100g`, `energy_100g`), when the serving size is known
//! 5. the same per-100g candidates unscaled
//! 6. unlabeled energy assumed to be kJ
//! 7. zero
//!
//! Every accepted value must pass [`is_reasonable_calories`].

use healthy_bytes_core::constants::energy::{
    ASSUMED_KJ_BAND_MAX, ASSUMED_KJ_BAND_MIN, KILOJOULE_UNIT, KJ_TO_KCAL,
    LIKELY_KJ_PER_100G_THRESHOLD, LIKELY_KJ_SERVING_THRESHOLD,
};
use healthy_bytes_core::constants::plausibility::{
    CALORIE_CEILINGS_BY_SERVING, CALORIE_CEILING_LARGE_SERVING, CALORIE_CEILING_UNKNOWN_SERVING,
};
use healthy_bytes_core::constants::units::REFERENCE_GRAMS;
use healthy_bytes_core::models::{fields, RawNutritionRecord, ServingSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field (and treatment) that produced a calorie estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieSource {
    /// `energy_kcal_serving` as reported
    KcalServing,
    /// `calories_serving` as reported
    CaloriesServing,
    /// `energy_serving`, converted when flagged as kJ
    EnergyServing,
    /// `energy_serving` force-converted from kJ
    EnergyServingForceConverted,
    /// `energy_kcal_100g` scaled to the serving
    Kcal100gScaled,
    /// `calories_100g` scaled to the serving
    Calories100gScaled,
    /// `energy_100g` (converted when flagged) scaled to the serving
    Energy100gScaled,
    /// `energy_100g` force-converted and scaled to the serving
    Energy100gScaledForceConverted,
    /// `energy_kcal_100g` as reported
    Kcal100g,
    /// `calories_100g` as reported
    Calories100g,
    /// `energy_100g`, converted when flagged as kJ
    Energy100g,
    /// `energy_100g` force-converted from kJ
    Energy100gForceConverted,
    /// `energy_serving` in the kJ band, assumed to be kJ
    EnergyServingAssumedKj,
    /// `energy_100g` assumed to be kJ and scaled to the serving
    Energy100gScaledAssumedKj,
    /// `energy_100g` assumed to be kJ
    Energy100gAssumedKj,
    /// Nothing plausible was found
    Default,
}

/// Calorie value together with the source that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieEstimate {
    /// Energy in kcal (unrounded)
    pub calories: f64,
    /// Where the value came from
    pub source: CalorieSource,
}

impl CalorieEstimate {
    const fn new(calories: f64, source: CalorieSource) -> Self {
        Self { calories, source }
    }

    const fn zero() -> Self {
        Self::new(0.0, CalorieSource::Default)
    }
}

/// Whether a calorie value is credible for the given serving size
///
/// Values must be positive and below a ceiling that grows with the serving
/// size (100 kcal under 10 g up to 1200 kcal from 150 g). Without a serving
/// size the ceiling is a flat 800 kcal.
#[must_use]
pub fn is_reasonable_calories(calories: f64, serving_size: ServingSize) -> bool {
    if !calories.is_finite() || calories <= 0.0 {
        return false;
    }

    let ceiling = serving_size.grams().map_or(CALORIE_CEILING_UNKNOWN_SERVING, |grams| {
        CALORIE_CEILINGS_BY_SERVING
            .iter()
            .find(|(max_grams, _)| grams < *max_grams)
            .map_or(CALORIE_CEILING_LARGE_SERVING, |(_, ceiling)| *ceiling)
    });

    calories < ceiling
}

/// Energy-related candidates extracted from a raw record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalorieCandidates {
    /// `energy_kcal_serving`
    pub kcal_serving: Option<f64>,
    /// `energy_kcal_100g`
    pub kcal_100g: Option<f64>,
    /// `energy_serving`
    pub energy_serving: Option<f64>,
    /// `energy_100g`
    pub energy_100g: Option<f64>,
    /// `energy_unit`, lower-cased (empty when absent)
    pub energy_unit: String,
    /// `calories_serving`
    pub calories_serving: Option<f64>,
    /// `calories_100g`
    pub calories_100g: Option<f64>,
}

impl CalorieCandidates {
    /// Extract candidates, treating malformed fields as absent
    #[must_use]
    pub fn from_record(record: &RawNutritionRecord) -> Self {
        Self {
            kcal_serving: record.number(fields::ENERGY_KCAL_SERVING),
            kcal_100g: record.number(fields::ENERGY_KCAL_100G),
            energy_serving: record.number(fields::ENERGY_SERVING),
            energy_100g: record.number(fields::ENERGY_100G),
            energy_unit: record
                .text(fields::ENERGY_UNIT)
                .map(|unit| unit.trim().to_lowercase())
                .unwrap_or_default(),
            calories_serving: record.number(fields::CALORIES_SERVING),
            calories_100g: record.number(fields::CALORIES_100G),
        }
    }

    /// Energy is explicitly declared in kilojoules
    #[must_use]
    pub fn declared_kilojoules(&self) -> bool {
        self.energy_unit == KILOJOULE_UNIT
    }

    /// Energy is declared in kJ, or undeclared with kJ-sized magnitudes
    #[must_use]
    pub fn likely_kilojoules(&self) -> bool {
        self.declared_kilojoules()
            || (self.energy_unit.is_empty()
                && (self
                    .energy_serving
                    .is_some_and(|e| e > LIKELY_KJ_SERVING_THRESHOLD)
                    || self
                        .energy_100g
                        .is_some_and(|e| e > LIKELY_KJ_PER_100G_THRESHOLD)))
    }

    fn convert_if_needed(&self, energy: f64) -> f64 {
        if self.likely_kilojoules() {
            energy * KJ_TO_KCAL
        } else {
            energy
        }
    }

    /// Accept an energy figure (times `factor`) after conversion, or force-convert it
    ///
    /// Returns the value and whether the forced conversion was needed.
    fn accept_energy(
        &self,
        energy: f64,
        factor: f64,
        serving_size: ServingSize,
    ) -> Option<(f64, bool)> {
        let converted = self.convert_if_needed(energy) * factor;
        if is_reasonable_calories(converted, serving_size) {
            return Some((converted, false));
        }

        // Forced conversion never applies once kJ was declared
        let forced = energy * KJ_TO_KCAL * factor;
        (!self.declared_kilojoules() && is_reasonable_calories(forced, serving_size))
            .then_some((forced, true))
    }

    fn accept_as_is(value: Option<f64>, factor: f64, serving_size: ServingSize) -> Option<f64> {
        value
            .map(|v| v * factor)
            .filter(|v| is_reasonable_calories(*v, serving_size))
    }

    /// Steps 1-3: per-serving fields
    fn from_serving_fields(&self, serving_size: ServingSize) -> Option<CalorieEstimate> {
        if let Some(kcal) = Self::accept_as_is(self.kcal_serving, 1.0, serving_size) {
            return Some(CalorieEstimate::new(kcal, CalorieSource::KcalServing));
        }
        if let Some(kcal) = Self::accept_as_is(self.calories_serving, 1.0, serving_size) {
            return Some(CalorieEstimate::new(kcal, CalorieSource::CaloriesServing));
        }
        let (kcal, forced) = self.accept_energy(self.energy_serving?, 1.0, serving_size)?;
        Some(CalorieEstimate::new(
            kcal,
            if forced {
                CalorieSource::EnergyServingForceConverted
            } else {
                CalorieSource::EnergyServing
            },
        ))
    }

    /// Steps 4-5: per-100g fields, scaled (`factor` = grams / 100) or as-is (`factor` = 1)
    ///
    /// Every candidate is tried in order, so an implausible `energy_kcal_100g`
    /// falls through to `calories_100g` at the same scale instead of jumping
    /// straight to the unscaled step.
    fn from_per_100g_fields(
        &self,
        factor: f64,
        scaled: bool,
        serving_size: ServingSize,
    ) -> Option<CalorieEstimate> {
        if let Some(kcal) = Self::accept_as_is(self.kcal_100g, factor, serving_size) {
            let source = if scaled {
                CalorieSource::Kcal100gScaled
            } else {
                CalorieSource::Kcal100g
            };
            return Some(CalorieEstimate::new(kcal, source));
        }
        if let Some(kcal) = Self::accept_as_is(self.calories_100g, factor, serving_size) {
            let source = if scaled {
                CalorieSource::Calories100gScaled
            } else {
                CalorieSource::Calories100g
            };
            return Some(CalorieEstimate::new(kcal, source));
        }
        let (kcal, forced) = self.accept_energy(self.energy_100g?, factor, serving_size)?;
        let source = match (scaled, forced) {
            (true, false) => CalorieSource::Energy100gScaled,
            (true, true) => CalorieSource::Energy100gScaledForceConverted,
            (false, false) => CalorieSource::Energy100g,
            (false, true) => CalorieSource::Energy100gForceConverted,
        };
        Some(CalorieEstimate::new(kcal, source))
    }

    /// Step 6: assume unlabeled energy is kJ
    fn from_assumed_kilojoules(&self, serving_size: ServingSize) -> Option<CalorieEstimate> {
        if let Some(energy) = self
            .energy_serving
            .filter(|e| (ASSUMED_KJ_BAND_MIN..=ASSUMED_KJ_BAND_MAX).contains(e))
        {
            let kcal = energy * KJ_TO_KCAL;
            if is_reasonable_calories(kcal, serving_size) {
                return Some(CalorieEstimate::new(
                    kcal,
                    CalorieSource::EnergyServingAssumedKj,
                ));
            }
        }

        let energy_100g = self.energy_100g?;
        let kcal_100g = energy_100g * KJ_TO_KCAL;

        if let Some(kcal) = serving_size
            .scale_per_100g(kcal_100g)
            .filter(|kcal| is_reasonable_calories(*kcal, serving_size))
        {
            return Some(CalorieEstimate::new(
                kcal,
                CalorieSource::Energy100gScaledAssumedKj,
            ));
        }

        is_reasonable_calories(kcal_100g, serving_size)
            .then(|| CalorieEstimate::new(kcal_100g, CalorieSource::Energy100gAssumedKj))
    }

    /// Run the full cascade
    #[must_use]
    pub fn resolve(&self, serving_size: ServingSize) -> CalorieEstimate {
        let scaled = || {
            let grams = serving_size.grams()?;
            self.from_per_100g_fields(grams / REFERENCE_GRAMS, true, serving_size)
        };

        self.from_serving_fields(serving_size)
            .or_else(scaled)
            .or_else(|| self.from_per_100g_fields(1.0, false, serving_size))
            .or_else(|| self.from_assumed_kilojoules(serving_size))
            .unwrap_or_else(CalorieEstimate::zero)
    }
}

/// Resolve the calories of a record for the given serving size
///
/// Always returns a non-negative value (zero when nothing plausible exists).
/// The result is unrounded; callers round to one decimal.
#[must_use]
pub fn resolve_calories(record: &RawNutritionRecord, serving_size: ServingSize) -> CalorieEstimate {
    let candidates = CalorieCandidates::from_record(record);
    let estimate = candidates.resolve(serving_size);

    debug!(
        calories.value = estimate.calories,
        calories.source = ?estimate.source,
        energy.likely_kj = candidates.likely_kilojoules(),
        serving.grams = ?serving_size.grams(),
        "Resolved calories"
    );

    estimate
}
