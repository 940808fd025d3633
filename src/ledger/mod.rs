// ABOUTME: Food ledger module with in-memory list and persistence backends
// ABOUTME: Re-exports FoodLedger, LedgerStore, JsonFileStore, and MemoryStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ordered item list and totals
pub mod food_ledger;
/// Ledger persistence
pub mod storage;

pub use food_ledger::FoodLedger;
pub use storage::{JsonFileStore, LedgerStore, MemoryStore};
