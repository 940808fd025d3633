// ABOUTME: Open Food Facts API client for barcode product lookup
// ABOUTME: Implements product retrieval with TTL caching, rate limiting, and a mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Open Food Facts API Client
//!
//! Open Food Facts is a free, collaborative database of food products keyed
//! by barcode. No API key is required, but clients must identify themselves
//! with a descriptive User-Agent.
//!
//! # Features
//! - Product lookup by barcode
//! - TTL cache for found and not-found results
//! - Sliding-window rate limiting (60 requests per minute by default)
//! - Mock lookup for testing
//!
//! # API Reference
//! <https://openfoodfacts.github.io/openfoodfacts-server/api/>
//!
//! # Example
//! ```rust,no_run
//! use healthy_bytes::external::{OpenFoodFactsClient, OpenFoodFactsConfig, ProductLookup};
//! use healthy_bytes::models::Barcode;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenFoodFactsClient::new(OpenFoodFactsConfig::default())?;
//! let barcode = Barcode::parse("3017620422003")?;
//! if let Some(product) = client.lookup(&barcode).await? {
//!     println!("{:?}", product.product_name);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::product::{ProductRecord, ProductResponse};
use super::ProductLookup;
use crate::constants::openfoodfacts::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_TTL_SECS, DEFAULT_RATE_LIMIT_PER_MINUTE, DEFAULT_TIMEOUT_SECS,
    PRODUCT_PATH, RATE_LIMIT_WINDOW_SECS, SERVICE_LABEL,
};
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use crate::models::Barcode;

/// Open Food Facts client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFoodFactsConfig {
    /// Base URL (default: <https://world.openfoodfacts.org>)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Cache TTL in seconds (default: 3600)
    pub cache_ttl_secs: u64,
    /// Rate limit per minute (default: 60)
    pub rate_limit_per_minute: u32,
}

impl Default for OpenFoodFactsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: format!(
                "{}/{}",
                service_names::HEALTHY_BYTES,
                service_names::SERVICE_VERSION
            ),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
        }
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// Rate limiter for API requests
#[derive(Debug)]
struct RateLimiter {
    requests: Vec<Instant>,
    limit: u32,
    window: Duration,
}

impl RateLimiter {
    const fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: Vec::new(),
            limit,
            window,
        }
    }

    /// Drop expired entries and report whether another request fits
    fn can_request(&mut self) -> bool {
        let now = Instant::now();
        self.requests
            .retain(|&t| now.duration_since(t) < self.window);
        self.requests.len() < self.limit as usize
    }

    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    /// Time until the oldest request leaves the window
    fn time_until_slot(&self) -> Duration {
        self.requests.first().map_or(Duration::ZERO, |oldest| {
            self.window.saturating_sub(oldest.elapsed())
        })
    }
}

/// Open Food Facts product lookup client
#[derive(Debug)]
pub struct OpenFoodFactsClient {
    config: OpenFoodFactsConfig,
    http_client: reqwest::Client,
    cache: Arc<RwLock<HashMap<Barcode, CacheEntry<Option<ProductRecord>>>>>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl OpenFoodFactsClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the limits are zero, or an internal error if
    /// the HTTP client cannot be built.
    pub fn new(config: OpenFoodFactsConfig) -> AppResult<Self> {
        if config.rate_limit_per_minute == 0 {
            return Err(AppError::config("Rate limit per minute must be at least 1"));
        }
        if config.timeout_secs == 0 {
            return Err(AppError::config("Request timeout must be at least 1 second"));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        let rate_limiter = RateLimiter::new(
            config.rate_limit_per_minute,
            Duration::from_secs(RATE_LIMIT_WINDOW_SECS),
        );

        Ok(Self {
            config,
            http_client,
            cache: Arc::new(RwLock::new(HashMap::new())),
            rate_limiter: Arc::new(RwLock::new(rate_limiter)),
        })
    }

    /// Client configuration
    #[must_use]
    pub const fn config(&self) -> &OpenFoodFactsConfig {
        &self.config
    }

    fn product_url(&self, barcode: &Barcode) -> String {
        format!(
            "{}/{PRODUCT_PATH}/{barcode}.json",
            self.config.base_url.trim_end_matches('/')
        )
    }

    async fn cached(&self, barcode: &Barcode) -> Option<Option<ProductRecord>> {
        let cache = self.cache.read().await;
        cache
            .get(barcode)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.data.clone())
    }

    /// Insert a lookup result, evicting entries whose TTL has passed
    async fn store(&self, barcode: &Barcode, product: Option<ProductRecord>) {
        let now = Instant::now();
        let mut cache = self.cache.write().await;
        cache.retain(|_, entry| now < entry.expires_at);
        cache.insert(
            barcode.clone(),
            CacheEntry {
                data: product,
                expires_at: now + Duration::from_secs(self.config.cache_ttl_secs),
            },
        );
    }

    /// Wait for a free slot in the rate limit window, then claim it
    async fn acquire_slot(&self) {
        loop {
            let wait = {
                let mut limiter = self.rate_limiter.write().await;
                if limiter.can_request() {
                    limiter.record_request();
                    return;
                }
                limiter.time_until_slot()
            };
            debug!(wait = ?wait, "Rate limit reached, waiting");
            sleep(wait.max(Duration::from_millis(10))).await;
        }
    }

    async fn fetch(&self, barcode: &Barcode) -> AppResult<Option<ProductRecord>> {
        self.acquire_slot().await;

        let url = self.product_url(barcode);
        let response = self.http_client.get(&url).send().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_LABEL, e.to_string())
                .with_resource_id(barcode.as_str())
                .with_source(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status_details = json!({ "status": status.as_u16() });
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::external_rate_limited(SERVICE_LABEL)
                .with_resource_id(barcode.as_str())
                .with_details(status_details));
        }
        if status.is_server_error() {
            return Err(
                AppError::external_unavailable(SERVICE_LABEL, format!("HTTP {status}"))
                    .with_resource_id(barcode.as_str())
                    .with_details(status_details),
            );
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                AppError::external_service(SERVICE_LABEL, format!("HTTP {status}: {body}"))
                    .with_resource_id(barcode.as_str())
                    .with_details(status_details),
            );
        }

        let body = response.text().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_LABEL, e.to_string())
                .with_resource_id(barcode.as_str())
                .with_source(e)
        })?;
        let parsed: ProductResponse = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(SERVICE_LABEL, format!("JSON parse error: {e}"))
                .with_resource_id(barcode.as_str())
        })?;

        Ok(parsed.into_found())
    }

    /// Clear the lookup cache
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
    }

    /// Number of cached lookups (found and not found)
    pub async fn cache_size(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl ProductLookup for OpenFoodFactsClient {
    async fn lookup(&self, barcode: &Barcode) -> AppResult<Option<ProductRecord>> {
        if let Some(cached) = self.cached(barcode).await {
            debug!(
                barcode = %barcode,
                found = cached.is_some(),
                "Product lookup served from cache"
            );
            return Ok(cached);
        }

        let result = self.fetch(barcode).await;
        match &result {
            Ok(product) => {
                info!(barcode = %barcode, found = product.is_some(), "Product lookup completed");
                self.store(barcode, product.clone()).await;
            }
            Err(e) => {
                warn!(
                    barcode = %barcode,
                    retryable = e.is_retryable(),
                    error = %e,
                    "Product lookup failed"
                );
            }
        }
        result
    }
}

/// Mock product lookup for testing (no API calls)
#[derive(Debug, Default)]
pub struct MockProductLookup {
    products: HashMap<Barcode, ProductRecord>,
    failures: HashMap<Barcode, AppError>,
    calls: AtomicUsize,
}

impl MockProductLookup {
    /// Create an empty mock; every barcode is not found
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `product` for `barcode`
    #[must_use]
    pub fn with_product(mut self, barcode: Barcode, product: ProductRecord) -> Self {
        self.products.insert(barcode, product);
        self
    }

    /// Fail lookups of `barcode` with `error`
    #[must_use]
    pub fn with_failure(mut self, barcode: Barcode, error: AppError) -> Self {
        self.failures.insert(barcode, error);
        self
    }

    /// Number of lookups performed
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProductLookup for MockProductLookup {
    async fn lookup(&self, barcode: &Barcode) -> AppResult<Option<ProductRecord>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(error) = self.failures.get(barcode) {
            return Err(AppError::new(error.code, error.message.clone())
                .with_resource_id(barcode.as_str()));
        }
        Ok(self.products.get(barcode).cloned())
    }
}
