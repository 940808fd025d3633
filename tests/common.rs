// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, sample products, and session builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `healthy_bytes`

use std::sync::Once;

use healthy_bytes::{
    external::{MockProductLookup, ProductRecord},
    ledger::MemoryStore,
    models::Barcode,
    scanner::ScannerConfig,
    session::TrackerSession,
};
use serde_json::json;

static INIT_LOGGER: Once = Once::new();

/// Barcode of the chocolate bar fixture
pub const CHOCOLATE_BARCODE: &str = "3017620422003";

/// Barcode of the cola fixture
pub const COLA_BARCODE: &str = "5449000000996";

/// Barcode no fixture knows about
pub const UNKNOWN_BARCODE: &str = "0000000000000";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn barcode(code: &str) -> Barcode {
    Barcode::parse(code).unwrap()
}

/// A 50 g chocolate bar with per-100g values only
pub fn chocolate_product() -> ProductRecord {
    serde_json::from_value(json!({
        "product_name": "Hazelnut Chocolate Bar",
        "brands": "Choco Co",
        "serving_size": "1 bar (50 g)",
        "image_front_url": "https://images.example.org/choco.jpg",
        "nutriments": {
            "energy-kcal_100g": 488,
            "proteins_100g": 8.6,
            "carbohydrates_100g": 61.0,
            "fat_100g": 23.4
        }
    }))
    .unwrap()
}

/// A 330 ml can with per-serving values reported as strings
pub fn cola_product() -> ProductRecord {
    serde_json::from_value(json!({
        "product_name": "Cola",
        "brands": null,
        "serving_size": "330 ml",
        "nutriments": {
            "energy-kcal_serving": "139",
            "proteins_serving": 0,
            "carbohydrates_serving": "35",
            "fat_serving": 0
        }
    }))
    .unwrap()
}

/// Mock lookup serving both fixtures
pub fn fixture_lookup() -> MockProductLookup {
    MockProductLookup::new()
        .with_product(barcode(CHOCOLATE_BARCODE), chocolate_product())
        .with_product(barcode(COLA_BARCODE), cola_product())
}

/// Session over the fixture lookup and an in-memory store
pub async fn fixture_session(
    store: MemoryStore,
) -> TrackerSession<MockProductLookup, MemoryStore> {
    init_test_logging();
    TrackerSession::open(fixture_lookup(), store, ScannerConfig::default())
        .await
        .unwrap()
}
