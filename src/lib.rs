// ABOUTME: Main library entry point for the Healthy Bytes nutrition tracker
// ABOUTME: Wires barcode scanning, product lookup, nutrient resolution, and the food ledger
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Healthy Bytes
//!
//! A barcode-driven nutrition tracker. A scanned (or typed) barcode is looked
//! up in Open Food Facts, the product's dirty nutrition data is resolved into
//! plausible per-serving calories and macros, and the result is appended to a
//! persisted food ledger with running totals.
//!
//! ## Architecture
//!
//! - **scanner**: confirmation of camera detections before a barcode is accepted
//! - **external**: the `ProductLookup` capability and its Open Food Facts client
//! - **ledger**: the ordered list of food items and its persistence
//! - **session**: orchestration of lookup, resolution, and persistence
//! - **config** / **logging**: environment-only configuration and tracing setup
//!
//! Nutrient resolution itself lives in the `healthy-bytes-nutrition` crate and
//! is pure and synchronous.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use healthy_bytes::config::environment::TrackerConfig;
//! use healthy_bytes::errors::AppResult;
//! use healthy_bytes::external::OpenFoodFactsClient;
//! use healthy_bytes::ledger::JsonFileStore;
//! use healthy_bytes::models::Barcode;
//! use healthy_bytes::session::{ScanOutcome, TrackerSession};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = TrackerConfig::from_env()?;
//!     let lookup = OpenFoodFactsClient::new(config.openfoodfacts.clone())?;
//!     let store = JsonFileStore::new(&config.data_dir);
//!     let mut session = TrackerSession::open(lookup, store, config.scanner).await?;
//!
//!     let barcode = Barcode::parse("3017620422003")?;
//!     if let ScanOutcome::Added(item) = session.add_barcode(&barcode).await? {
//!         println!("{} - {} kcal", item.name, item.nutrition.calories);
//!     }
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling (re-exported from `healthy-bytes-core`)
pub mod errors;

/// External product lookup clients
pub mod external;

/// Food ledger and persistence
pub mod ledger;

/// Structured logging setup
pub mod logging;

/// Barcode scan confirmation
pub mod scanner;

/// Tracker session orchestrating lookup, resolution, and persistence
pub mod session;

/// Domain models (re-exported from `healthy-bytes-core`)
pub mod models {
    pub use healthy_bytes_core::models::*;
}

/// Nutrient resolution (re-exported from `healthy-bytes-nutrition`)
pub mod nutrition {
    pub use healthy_bytes_nutrition::*;
}
