// ABOUTME: Integration tests for the tracker session
// ABOUTME: Covers add, not-found, retryable failures, removal, totals, scanning, and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    barcode, fixture_lookup, fixture_session, init_test_logging, CHOCOLATE_BARCODE, COLA_BARCODE,
    UNKNOWN_BARCODE,
};
use healthy_bytes::{
    errors::{AppError, ErrorCode},
    external::MockProductLookup,
    ledger::MemoryStore,
    scanner::{ReplaySource, ScanDetection, ScannerConfig},
    session::{ScanOutcome, TrackerSession},
};
use healthy_bytes_core::constants::product_defaults::{UNKNOWN_BRAND, UNKNOWN_PRODUCT};

fn added(outcome: ScanOutcome) -> healthy_bytes::models::FoodItem {
    match outcome {
        ScanOutcome::Added(item) => item,
        ScanOutcome::NotFound(code) => panic!("expected product for {code}"),
    }
}

#[tokio::test]
async fn test_add_barcode_resolves_and_appends() {
    let mut session = fixture_session(MemoryStore::new()).await;

    let item = added(
        session
            .add_barcode(&barcode(CHOCOLATE_BARCODE))
            .await
            .unwrap(),
    );

    assert_eq!(item.name, "Hazelnut Chocolate Bar");
    assert_eq!(item.brand, "Choco Co");
    assert_eq!(item.serving_size, "1 bar (50 g)");
    assert_eq!(item.serving_size_value.grams(), Some(50.0));
    assert_eq!(
        item.image.as_deref(),
        Some("https://images.example.org/choco.jpg")
    );
    assert!((item.nutrition.calories - 244.0).abs() < 1e-9);
    assert!((item.nutrition.protein - 4.3).abs() < 1e-9);
    assert!((item.nutrition.carbs - 30.5).abs() < 1e-9);
    assert!((item.nutrition.fat - 11.7).abs() < 1e-9);
    assert_eq!(session.items(), std::slice::from_ref(&item));
}

#[tokio::test]
async fn test_missing_metadata_uses_display_defaults() {
    let lookup = MockProductLookup::new().with_product(
        barcode(COLA_BARCODE),
        healthy_bytes::external::ProductRecord::default(),
    );
    let mut session = TrackerSession::open(lookup, MemoryStore::new(), ScannerConfig::default())
        .await
        .unwrap();

    let item = added(session.add_barcode(&barcode(COLA_BARCODE)).await.unwrap());
    assert_eq!(item.name, UNKNOWN_PRODUCT);
    assert_eq!(item.brand, UNKNOWN_BRAND);
    assert!(item.image.is_none());
    assert!(item.nutrition.calories.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_string_serving_values_are_accepted() {
    let mut session = fixture_session(MemoryStore::new()).await;

    let item = added(session.add_barcode(&barcode(COLA_BARCODE)).await.unwrap());
    assert_eq!(item.brand, UNKNOWN_BRAND);
    assert_eq!(item.serving_size_value.grams(), Some(330.0));
    assert!((item.nutrition.calories - 139.0).abs() < 1e-9);
    assert!((item.nutrition.carbs - 35.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_unknown_barcode_is_not_found_and_list_unchanged() {
    let store = MemoryStore::new();
    let mut session = fixture_session(store.clone()).await;

    let outcome = session
        .add_barcode(&barcode(UNKNOWN_BARCODE))
        .await
        .unwrap();

    assert_eq!(outcome, ScanOutcome::NotFound(barcode(UNKNOWN_BARCODE)));
    assert!(session.items().is_empty());
    assert!(store.snapshot().await.is_empty());
}

#[tokio::test]
async fn test_lookup_failure_is_retryable_and_list_unchanged() {
    init_test_logging();
    let lookup = MockProductLookup::new().with_failure(
        barcode(CHOCOLATE_BARCODE),
        AppError::external_unavailable("Open Food Facts", "connection refused"),
    );
    let mut session = TrackerSession::open(lookup, MemoryStore::new(), ScannerConfig::default())
        .await
        .unwrap();

    let error = session
        .add_barcode(&barcode(CHOCOLATE_BARCODE))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(error.is_retryable());
    assert!(session.items().is_empty());
}

#[tokio::test]
async fn test_same_product_twice_gives_distinct_items() {
    let mut session = fixture_session(MemoryStore::new()).await;
    let code = barcode(CHOCOLATE_BARCODE);

    let first = added(session.add_barcode(&code).await.unwrap());
    let second = added(session.add_barcode(&code).await.unwrap());

    assert_ne!(first.id, second.id);
    assert_eq!(session.items().len(), 2);
    assert_eq!(session.lookup().calls(), 2);
}

#[tokio::test]
async fn test_totals_sum_all_items() {
    let mut session = fixture_session(MemoryStore::new()).await;
    session
        .add_barcode(&barcode(CHOCOLATE_BARCODE))
        .await
        .unwrap();
    session.add_barcode(&barcode(COLA_BARCODE)).await.unwrap();

    let totals = session.totals();
    assert!((totals.calories - 383.0).abs() < 1e-9);
    assert!((totals.carbs - 65.5).abs() < 1e-9);

    let display = totals.rounded_for_display();
    assert!((display.protein - 4.0).abs() < f64::EPSILON);
    assert!((display.fat - 12.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_remove_item_updates_list_and_store() {
    let store = MemoryStore::new();
    let mut session = fixture_session(store.clone()).await;
    let chocolate = added(
        session
            .add_barcode(&barcode(CHOCOLATE_BARCODE))
            .await
            .unwrap(),
    );
    let cola = added(session.add_barcode(&barcode(COLA_BARCODE)).await.unwrap());

    let removed = session.remove_item(&chocolate.id).await.unwrap();
    assert_eq!(removed.map(|item| item.id), Some(chocolate.id.clone()));
    assert_eq!(store.snapshot().await, vec![cola.clone()]);

    assert!(session.remove_item(&chocolate.id).await.unwrap().is_none());
    assert_eq!(session.items(), std::slice::from_ref(&cola));
}

#[tokio::test]
async fn test_clear_empties_list_and_store() {
    let store = MemoryStore::new();
    let mut session = fixture_session(store.clone()).await;
    session
        .add_barcode(&barcode(CHOCOLATE_BARCODE))
        .await
        .unwrap();

    session.clear().await.unwrap();

    assert!(session.items().is_empty());
    assert!(store.snapshot().await.is_empty());
    assert!(session.totals().calories.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_reopen_restores_items_and_totals() {
    let store = MemoryStore::new();
    let mut session = fixture_session(store.clone()).await;
    session
        .add_barcode(&barcode(CHOCOLATE_BARCODE))
        .await
        .unwrap();
    session.add_barcode(&barcode(COLA_BARCODE)).await.unwrap();
    let before_items = session.items().to_vec();
    let before_totals = session.totals();
    drop(session);

    let reopened = TrackerSession::open(fixture_lookup(), store, ScannerConfig::default())
        .await
        .unwrap();

    assert_eq!(reopened.items(), before_items.as_slice());
    assert_eq!(reopened.totals(), before_totals);
}

#[tokio::test]
async fn test_scan_and_add_requires_consecutive_confident_reads() {
    let mut session = fixture_session(MemoryStore::new()).await;
    let mut source = ReplaySource::new(vec![
        ScanDetection::new(COLA_BARCODE, 0.95),
        ScanDetection::new(CHOCOLATE_BARCODE, 0.4),
        ScanDetection::new(CHOCOLATE_BARCODE, 0.9),
        ScanDetection::new(CHOCOLATE_BARCODE, 0.8),
        ScanDetection::new(COLA_BARCODE, 0.99),
    ]);

    let outcome = session.scan_and_add(&mut source).await.unwrap().unwrap();

    let item = added(outcome);
    assert_eq!(item.barcode, barcode(CHOCOLATE_BARCODE));
    assert_eq!(session.items().len(), 1);
}

#[tokio::test]
async fn test_scan_without_confirmation_returns_none() {
    let mut session = fixture_session(MemoryStore::new()).await;
    let mut source = ReplaySource::new(vec![
        ScanDetection::new(COLA_BARCODE, 0.9),
        ScanDetection::new(CHOCOLATE_BARCODE, 0.9),
    ]);

    assert!(session.scan_and_add(&mut source).await.unwrap().is_none());
    assert!(session.items().is_empty());
    assert_eq!(session.lookup().calls(), 0);
}

#[tokio::test]
async fn test_confirm_detection_follows_scanner_config() {
    init_test_logging();
    let config = ScannerConfig {
        min_confidence: 0.5,
        required_confirmations: 3,
    };
    let mut session = TrackerSession::open(fixture_lookup(), MemoryStore::new(), config)
        .await
        .unwrap();
    let read = ScanDetection::new(COLA_BARCODE, 0.6);

    assert!(session.confirm_detection(&read).is_none());
    assert!(session.confirm_detection(&read).is_none());
    assert_eq!(
        session.confirm_detection(&read),
        Some(barcode(COLA_BARCODE))
    );
}
