// ABOUTME: Ordered list of food items with running nutrition totals
// ABOUTME: Totals are recomputed from the items on every call so removal never drifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, NutritionTotals};

/// Food items in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodLedger {
    items: Vec<FoodItem>,
}

impl FoodLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from previously stored items
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if two items share an id.
    pub fn from_items(items: Vec<FoodItem>) -> AppResult<Self> {
        let mut ledger = Self::new();
        for item in items {
            ledger.add(item)?;
        }
        Ok(ledger)
    }

    /// Append an item
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if an item with the same id is already present.
    pub fn add(&mut self, item: FoodItem) -> AppResult<()> {
        if self.get(&item.id).is_some() {
            return Err(AppError::invalid_input("Food item id already in ledger")
                .with_resource_id(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove an item by id
    pub fn remove(&mut self, id: &str) -> Option<FoodItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up an item by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FoodItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element-wise sum of item nutrition
    #[must_use]
    pub fn totals(&self) -> NutritionTotals {
        self.items.iter().map(|item| &item.nutrition).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::{Barcode, ProductDetails, ResolvedNutrition, ServingSize};

    fn item(calories: f64, protein: f64) -> FoodItem {
        FoodItem::from_product(
            Barcode::parse("3017620422003").unwrap(),
            &ProductDetails::default(),
            ServingSize::Unknown,
            ResolvedNutrition::rounded(calories, protein, 0.0, 0.0),
        )
    }

    #[test]
    fn test_empty_totals_are_zero() {
        assert_eq!(FoodLedger::new().totals(), NutritionTotals::default());
    }

    #[test]
    fn test_add_then_remove_restores_totals() {
        let mut ledger = FoodLedger::new();
        ledger.add(item(120.3, 4.1)).unwrap();
        ledger.add(item(80.7, 0.3)).unwrap();
        let before = ledger.totals();

        let extra = item(33.3, 1.1);
        let id = extra.id.clone();
        ledger.add(extra).unwrap();
        assert_ne!(ledger.totals(), before);

        ledger.remove(&id).unwrap();
        assert_eq!(ledger.totals(), before);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut ledger = FoodLedger::new();
        let first = item(10.0, 1.0);
        let duplicate = first.clone();
        ledger.add(first).unwrap();
        assert!(ledger.add(duplicate).is_err());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut ledger = FoodLedger::new();
        ledger.add(item(10.0, 1.0)).unwrap();
        assert!(ledger.remove("item-missing").is_none());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let mut ledger = FoodLedger::new();
        let items = [item(1.0, 0.0), item(2.0, 0.0), item(3.0, 0.0)];
        for i in items.clone() {
            ledger.add(i).unwrap();
        }
        let ids: Vec<_> = ledger.items().iter().map(|i| i.id.clone()).collect();
        let expected: Vec<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, expected);
    }
}
