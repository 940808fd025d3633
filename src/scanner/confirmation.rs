// ABOUTME: Confirmation state machine for camera barcode detections
// ABOUTME: Requires consecutive identical high-confidence reads before accepting a code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ScanDetection;
use crate::constants::scanner::{DEFAULT_MIN_CONFIDENCE, DEFAULT_REQUIRED_CONFIRMATIONS};
use crate::errors::{AppError, AppResult};
use crate::models::Barcode;

/// Scanner confirmation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Detections below this confidence are ignored (0.0..=1.0)
    pub min_confidence: f64,
    /// Consecutive identical detections needed to confirm a code
    pub required_confirmations: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            required_confirmations: DEFAULT_REQUIRED_CONFIRMATIONS,
        }
    }
}

impl ScannerConfig {
    /// Check that the settings can ever confirm a code
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a confidence outside `0.0..=1.0` or zero
    /// required confirmations.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(AppError::config(format!(
                "Scanner confidence must be between 0 and 1, got {}",
                self.min_confidence
            )));
        }
        if self.required_confirmations == 0 {
            return Err(AppError::config(
                "Scanner confirmations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Tracks the last detected code and how many times in a row it was seen
///
/// Low-confidence detections are dropped without touching progress. A
/// different code restarts the count at one. Reaching the required count
/// confirms the code and resets the state.
#[derive(Debug, Clone, Default)]
pub struct ScanConfirmer {
    config: ScannerConfig,
    last_code: Option<String>,
    count: u32,
}

impl ScanConfirmer {
    /// Create a confirmer with the given settings
    #[must_use]
    pub const fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            last_code: None,
            count: 0,
        }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Code currently being confirmed and its consecutive count
    #[must_use]
    pub fn pending(&self) -> Option<(&str, u32)> {
        self.last_code.as_deref().map(|code| (code, self.count))
    }

    /// Forget any progress
    pub fn reset(&mut self) {
        self.last_code = None;
        self.count = 0;
    }

    /// Feed one detection; returns the barcode once it is confirmed
    pub fn observe(&mut self, detection: &ScanDetection) -> Option<Barcode> {
        if detection.confidence.is_nan() || detection.confidence < self.config.min_confidence {
            debug!(
                code = %detection.code,
                confidence = detection.confidence,
                "Ignoring low-confidence detection"
            );
            return None;
        }

        let code = detection.code.trim();
        if self.last_code.as_deref() == Some(code) {
            self.count += 1;
        } else {
            self.last_code = Some(code.to_owned());
            self.count = 1;
        }

        if self.count < self.config.required_confirmations {
            return None;
        }

        self.reset();
        match Barcode::parse(code) {
            Ok(barcode) => {
                debug!(barcode = %barcode, "Barcode confirmed");
                Some(barcode)
            }
            Err(e) => {
                warn!(code = %code, error = %e, "Confirmed code is not a product barcode");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn detection(code: &str, confidence: f64) -> ScanDetection {
        ScanDetection::new(code, confidence)
    }

    #[test]
    fn test_two_identical_reads_confirm() {
        let mut confirmer = ScanConfirmer::default();
        assert!(confirmer.observe(&detection("3017620422003", 0.9)).is_none());
        let confirmed = confirmer.observe(&detection("3017620422003", 0.8)).unwrap();
        assert_eq!(confirmed.as_str(), "3017620422003");
        assert!(confirmer.pending().is_none());
    }

    #[test]
    fn test_low_confidence_does_not_reset() {
        let mut confirmer = ScanConfirmer::default();
        assert!(confirmer.observe(&detection("3017620422003", 0.9)).is_none());
        assert!(confirmer.observe(&detection("5449000000996", 0.3)).is_none());
        assert_eq!(confirmer.pending(), Some(("3017620422003", 1)));
        assert!(confirmer.observe(&detection("3017620422003", 0.7)).is_some());
    }

    #[test]
    fn test_different_code_restarts_count() {
        let mut confirmer = ScanConfirmer::default();
        confirmer.observe(&detection("3017620422003", 0.9));
        confirmer.observe(&detection("5449000000996", 0.9));
        assert_eq!(confirmer.pending(), Some(("5449000000996", 1)));
    }

    #[test]
    fn test_nan_confidence_ignored() {
        let mut confirmer = ScanConfirmer::default();
        confirmer.observe(&detection("3017620422003", f64::NAN));
        assert!(confirmer.pending().is_none());
    }

    #[test]
    fn test_invalid_code_never_confirms() {
        let mut confirmer = ScanConfirmer::default();
        confirmer.observe(&detection("HELLO-WORLD", 0.95));
        assert!(confirmer.observe(&detection("HELLO-WORLD", 0.95)).is_none());
        assert!(confirmer.pending().is_none());
    }

    #[test]
    fn test_config_validation() {
        assert!(ScannerConfig::default().validate().is_ok());
        let config = ScannerConfig {
            required_confirmations: 0,
            ..ScannerConfig::default()
        };
        assert!(config.validate().is_err());
        let config = ScannerConfig {
            min_confidence: 1.5,
            ..ScannerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
