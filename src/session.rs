// ABOUTME: Tracker session owning the ledger, scan confirmation state, and collaborators
// ABOUTME: Runs lookup, serving-size parsing, nutrient resolution, append, and persist per barcode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tracker session
//!
//! All mutable state of a tracking session (the item list and the scanner's
//! "last code / count" progress) lives here. The nutrient resolver stays
//! stateless and only sees the fully fetched record.

use tracing::{info, instrument};

use crate::errors::AppResult;
use crate::external::{ProductLookup, ProductRecord};
use crate::ledger::{FoodLedger, LedgerStore};
use crate::models::{Barcode, FoodItem, NutritionTotals};
use crate::nutrition::NutrientResolver;
use crate::scanner::{
    confirm_from_stream, BarcodeSource, ScanConfirmer, ScanDetection, ScannerConfig,
};

/// Result of adding a barcode
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The product was found and appended
    Added(FoodItem),
    /// The lookup succeeded but the product does not exist
    NotFound(Barcode),
}

/// Build a food item from a looked-up product
#[must_use]
pub fn food_item_from_product(barcode: Barcode, product: &ProductRecord) -> FoodItem {
    let report = NutrientResolver::new()
        .resolve_with_serving_text(&product.nutriments, product.serving_size.as_deref());
    FoodItem::from_product(
        barcode,
        &product.details(),
        report.serving_size,
        report.nutrition,
    )
}

/// A tracking session over a product lookup and a ledger store
pub struct TrackerSession<L, S> {
    lookup: L,
    store: S,
    ledger: FoodLedger,
    confirmer: ScanConfirmer,
}

impl<L, S> TrackerSession<L, S>
where
    L: ProductLookup,
    S: LedgerStore,
{
    /// Open a session, loading previously stored items
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds duplicate ids.
    pub async fn open(lookup: L, store: S, scanner: ScannerConfig) -> AppResult<Self> {
        let ledger = FoodLedger::from_items(store.load().await?)?;
        Ok(Self {
            lookup,
            store,
            ledger,
            confirmer: ScanConfirmer::new(scanner),
        })
    }

    /// Look up, resolve, append, and persist one barcode
    ///
    /// # Errors
    ///
    /// Returns the lookup error (check `is_retryable`) or a storage error. On
    /// a storage error the item stays in the in-memory ledger.
    #[instrument(skip_all, fields(barcode = %barcode))]
    pub async fn add_barcode(&mut self, barcode: &Barcode) -> AppResult<ScanOutcome> {
        let Some(product) = self.lookup.lookup(barcode).await? else {
            info!("Product not found");
            return Ok(ScanOutcome::NotFound(barcode.clone()));
        };

        let item = food_item_from_product(barcode.clone(), &product);
        info!(
            item.id = %item.id,
            item.name = %item.name,
            item.calories = item.nutrition.calories,
            "Adding food item"
        );

        self.ledger.add(item.clone())?;
        self.persist().await?;
        Ok(ScanOutcome::Added(item))
    }

    /// Remove an item by id and persist; `None` if no such item
    ///
    /// # Errors
    ///
    /// Returns a storage error if the ledger cannot be saved.
    pub async fn remove_item(&mut self, id: &str) -> AppResult<Option<FoodItem>> {
        let removed = self.ledger.remove(id);
        if removed.is_some() {
            self.persist().await?;
        }
        Ok(removed)
    }

    /// Remove every item and persist
    ///
    /// # Errors
    ///
    /// Returns a storage error if the ledger cannot be saved.
    pub async fn clear(&mut self) -> AppResult<()> {
        self.ledger.clear();
        self.persist().await
    }

    /// Current nutrition totals
    #[must_use]
    pub fn totals(&self) -> NutritionTotals {
        self.ledger.totals()
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        self.ledger.items()
    }

    /// Feed one scanner detection; returns the barcode once confirmed
    pub fn confirm_detection(&mut self, detection: &ScanDetection) -> Option<Barcode> {
        self.confirmer.observe(detection)
    }

    /// Read detections from `source` until a barcode is confirmed, then add it
    ///
    /// Returns `None` if the source ends without a confirmation.
    ///
    /// # Errors
    ///
    /// Returns source, lookup, or storage errors.
    pub async fn scan_and_add<B: BarcodeSource>(
        &mut self,
        source: &mut B,
    ) -> AppResult<Option<ScanOutcome>> {
        let detections = source.detections().await?;
        let Some(barcode) = confirm_from_stream(detections, &mut self.confirmer).await else {
            return Ok(None);
        };
        self.add_barcode(&barcode).await.map(Some)
    }

    /// The ledger
    #[must_use]
    pub const fn ledger(&self) -> &FoodLedger {
        &self.ledger
    }

    /// The lookup collaborator
    #[must_use]
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }

    async fn persist(&self) -> AppResult<()> {
        self.store.save(self.ledger.items()).await
    }
}
