// ABOUTME: Application-level constants for the tracker service
// ABOUTME: Service names, Open Food Facts defaults, scanner defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Resolution thresholds live in `healthy_bytes_core::constants`; this module
//! holds the defaults of the surrounding service.

/// Service identity
pub mod service_names {
    /// Service name used in logs and the User-Agent header
    pub const HEALTHY_BYTES: &str = "healthy-bytes";

    /// Version from Cargo.toml
    pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Open Food Facts API defaults
pub mod openfoodfacts {
    /// Service label used in error messages
    pub const SERVICE_LABEL: &str = "Open Food Facts";

    /// Public API host
    pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

    /// Product endpoint path prefix; the barcode and `.json` are appended
    pub const PRODUCT_PATH: &str = "api/v0/product";

    /// `status` value of a found product
    pub const STATUS_FOUND: i64 = 1;

    /// Request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Cache lifetime of lookup results in seconds
    pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

    /// Client-side request budget per minute
    pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u32 = 60;

    /// Rate limiter window in seconds
    pub const RATE_LIMIT_WINDOW_SECS: u64 = 60;
}

/// Scanner confirmation defaults
pub mod scanner {
    /// Detections below this confidence are ignored
    pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.7;

    /// Consecutive identical detections required to confirm a code
    pub const DEFAULT_REQUIRED_CONFIRMATIONS: u32 = 2;
}

/// Ledger persistence
pub mod storage {
    /// Storage key of the food list (and file stem of the JSON store)
    pub const LEDGER_KEY: &str = "foodItems";

    /// Application directory under the platform data dir
    pub const APP_DIR_NAME: &str = "healthy-bytes";
}

/// Environment variable names
pub mod env_vars {
    /// Open Food Facts base URL
    pub const OPENFOODFACTS_BASE_URL: &str = "OPENFOODFACTS_BASE_URL";
    /// User-Agent sent with lookups
    pub const OPENFOODFACTS_USER_AGENT: &str = "OPENFOODFACTS_USER_AGENT";
    /// Request timeout in seconds
    pub const OPENFOODFACTS_TIMEOUT_SECS: &str = "OPENFOODFACTS_TIMEOUT_SECS";
    /// Lookup cache TTL in seconds
    pub const OPENFOODFACTS_CACHE_TTL_SECS: &str = "OPENFOODFACTS_CACHE_TTL_SECS";
    /// Requests per minute
    pub const OPENFOODFACTS_RATE_LIMIT_PER_MINUTE: &str = "OPENFOODFACTS_RATE_LIMIT_PER_MINUTE";
    /// Ledger directory
    pub const HEALTHY_BYTES_DATA_DIR: &str = "HEALTHY_BYTES_DATA_DIR";
    /// Scanner confidence floor
    pub const SCAN_MIN_CONFIDENCE: &str = "SCAN_MIN_CONFIDENCE";
    /// Scanner confirmation count
    pub const SCAN_CONFIRMATIONS: &str = "SCAN_CONFIRMATIONS";

    /// Log filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Include file and line in log events when set
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Include thread details in log events when set
    pub const LOG_INCLUDE_THREAD: &str = "LOG_INCLUDE_THREAD";
    /// Service name reported at startup
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
}
