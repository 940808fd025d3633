// ABOUTME: External product lookup modules (Open Food Facts)
// ABOUTME: Defines the ProductLookup capability consumed by the tracker session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! A lookup has three distinguishable outcomes:
//! - `Ok(Some(product))`: the product exists
//! - `Ok(None)`: the barcode is unknown upstream
//! - `Err(e)`: the lookup failed; `e.is_retryable()` tells transient failures apart

pub mod openfoodfacts_client;
pub mod product;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::Barcode;

pub use openfoodfacts_client::{MockProductLookup, OpenFoodFactsClient, OpenFoodFactsConfig};
pub use product::ProductRecord;

/// Capability to look up a product by barcode
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Look up a product
    ///
    /// # Errors
    ///
    /// Returns an `External*` error when the lookup could not be completed.
    async fn lookup(&self, barcode: &Barcode) -> AppResult<Option<ProductRecord>>;
}
