// ABOUTME: Persistence backends for the food ledger
// ABOUTME: JSON file store with atomic replace, plus an in-memory store for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::constants::storage::LEDGER_KEY;
use crate::errors::{AppError, AppResult};
use crate::models::FoodItem;

/// Persistence of the ledger's item list
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Load all stored items; an absent store yields an empty list
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure or `SerializationError` for
    /// unreadable contents.
    async fn load(&self) -> AppResult<Vec<FoodItem>>;

    /// Replace the stored items
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on I/O failure.
    async fn save(&self, items: &[FoodItem]) -> AppResult<()>;
}

/// Stores the ledger as `<data_dir>/foodItems.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store inside `data_dir` (created on first save)
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{LEDGER_KEY}.json")),
        }
    }

    /// Path of the ledger file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn storage_error(&self, action: &str, error: io::Error) -> AppError {
        AppError::storage(format!("Failed to {action} ledger: {error}"))
            .with_resource_id(self.path.display().to_string())
            .with_source(error)
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn load(&self) -> AppResult<Vec<FoodItem>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored ledger, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.storage_error("read", e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<FoodItem> = serde_json::from_str(&contents).map_err(|e| {
            AppError::serialization(format!("Stored ledger is corrupt: {e}"))
                .with_resource_id(self.path.display().to_string())
                .with_source(e)
        })?;

        info!(path = %self.path.display(), items = items.len(), "Loaded ledger");
        Ok(items)
    }

    async fn save(&self, items: &[FoodItem]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.storage_error("create directory for", e))?;
        }

        let json = serde_json::to_string_pretty(items)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)
            .await
            .map_err(|e| self.storage_error("write", e))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.storage_error("replace", e))?;

        debug!(path = %self.path.display(), items = items.len(), "Saved ledger");
        Ok(())
    }
}

/// In-memory store; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<Vec<FoodItem>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `items`
    #[must_use]
    pub fn with_items(items: Vec<FoodItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Copy of the stored items
    pub async fn snapshot(&self) -> Vec<FoodItem> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn load(&self) -> AppResult<Vec<FoodItem>> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, items: &[FoodItem]) -> AppResult<()> {
        *self.items.write().await = items.to_vec();
        Ok(())
    }
}
