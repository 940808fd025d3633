// ABOUTME: Environment configuration for the tracker (lookup client, data directory, scanner)
// ABOUTME: Parses environment variables with defaults and reports invalid values as ConfigInvalid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;
use url::Url;

use crate::constants::env_vars;
use crate::constants::storage::APP_DIR_NAME;
use crate::errors::{AppError, AppResult};
use crate::external::OpenFoodFactsConfig;
use crate::scanner::ScannerConfig;

/// Complete tracker configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Product lookup client settings
    pub openfoodfacts: OpenFoodFactsConfig,
    /// Directory holding the persisted ledger
    pub data_dir: PathBuf,
    /// Scan confirmation settings
    pub scanner: ScannerConfig,
}

impl TrackerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is set to an unparseable or
    /// out-of-range value.
    pub fn from_env() -> AppResult<Self> {
        let defaults = OpenFoodFactsConfig::default();

        let base_url = env_var_or(env_vars::OPENFOODFACTS_BASE_URL, &defaults.base_url);
        validate_base_url(&base_url)?;

        let openfoodfacts = OpenFoodFactsConfig {
            base_url,
            user_agent: env_var_or(env_vars::OPENFOODFACTS_USER_AGENT, &defaults.user_agent),
            timeout_secs: parse_env(env_vars::OPENFOODFACTS_TIMEOUT_SECS, defaults.timeout_secs)?,
            cache_ttl_secs: parse_env(
                env_vars::OPENFOODFACTS_CACHE_TTL_SECS,
                defaults.cache_ttl_secs,
            )?,
            rate_limit_per_minute: parse_env(
                env_vars::OPENFOODFACTS_RATE_LIMIT_PER_MINUTE,
                defaults.rate_limit_per_minute,
            )?,
        };
        if openfoodfacts.timeout_secs == 0 {
            return Err(AppError::config(format!(
                "Invalid {} value: must be at least 1",
                env_vars::OPENFOODFACTS_TIMEOUT_SECS
            )));
        }
        if openfoodfacts.rate_limit_per_minute == 0 {
            return Err(AppError::config(format!(
                "Invalid {} value: must be at least 1",
                env_vars::OPENFOODFACTS_RATE_LIMIT_PER_MINUTE
            )));
        }

        let scanner_defaults = ScannerConfig::default();
        let scanner = ScannerConfig {
            min_confidence: parse_env(
                env_vars::SCAN_MIN_CONFIDENCE,
                scanner_defaults.min_confidence,
            )?,
            required_confirmations: parse_env(
                env_vars::SCAN_CONFIRMATIONS,
                scanner_defaults.required_confirmations,
            )?,
        };
        scanner.validate()?;

        let data_dir = env::var(env_vars::HEALTHY_BYTES_DATA_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        Ok(Self {
            openfoodfacts,
            data_dir,
            scanner,
        })
    }

    /// Replace the data directory (e.g. from a command-line flag)
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = data_dir.as_ref().to_path_buf();
        self
    }
}

/// Platform data directory joined with the application name
///
/// Falls back to a directory relative to the working directory when the
/// platform has no data directory.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || {
            warn!("No platform data directory, using ./{APP_DIR_NAME}");
            PathBuf::from(".").join(APP_DIR_NAME)
        },
        |dir| dir.join(APP_DIR_NAME),
    )
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config(format!("Invalid {key} value '{raw}': {e}")).with_resource_id(key)
        }),
        Err(_) => Ok(default),
    }
}

fn validate_base_url(base_url: &str) -> AppResult<()> {
    let url = Url::parse(base_url).map_err(|e| {
        AppError::config(format!(
            "Invalid {} value '{base_url}': {e}",
            env_vars::OPENFOODFACTS_BASE_URL
        ))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "Invalid {} value '{base_url}': scheme must be http or https",
            env_vars::OPENFOODFACTS_BASE_URL
        )));
    }
    Ok(())
}
