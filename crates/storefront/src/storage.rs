//! Cart persistence adapter.
//!
//! The cart survives across runs in a single JSON document under a fixed
//! storage slot name inside the data directory. Loading is forgiving:
//! a missing file is simply an empty cart, and corrupt data is logged and
//! discarded rather than ever crashing startup. Saving is strict - a failed
//! write surfaces as an error, because silently dropping it would leave the
//! persisted cart stale.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use shopmaster_core::LineItem;

/// Fixed storage slot name for the persisted cart.
pub const CART_STORAGE_KEY: &str = "shopmaster-cart";

/// Errors that can occur while persisting the cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cart serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value slot for the cart, backed by a JSON file.
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    /// Create a storage adapter rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{CART_STORAGE_KEY}.json")),
        }
    }

    /// Path of the underlying storage file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted line items.
    ///
    /// Returns an empty sequence when no prior state exists or the stored
    /// data is malformed; corruption is logged, never propagated.
    #[must_use]
    pub fn load(&self) -> Vec<LineItem> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read stored cart, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Stored cart is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the given line items, replacing any prior state.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the data directory cannot be created or
    /// the file cannot be written.
    pub fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shopmaster_core::{Product, ProductId};
    use std::str::FromStr;

    fn line_item(id: i64, quantity: u32) -> LineItem {
        LineItem {
            product: Product {
                id: ProductId::new(id),
                title: format!("Product {id}"),
                price: Decimal::from_str("9.99").expect("price"),
                description: "Stored".to_string(),
                category: "test".to_string(),
                image: String::new(),
            },
            quantity,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = CartStorage::new(dir.path());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_round_trip_preserves_items_and_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = CartStorage::new(dir.path());
        let items = vec![line_item(3, 2), line_item(1, 1), line_item(2, 5)];

        storage.save(&items).expect("save");
        let loaded = storage.load();

        assert_eq!(loaded, items);
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = CartStorage::new(dir.path());
        fs::write(storage.path(), "{ not json at all").expect("write");

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_creates_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("nested").join("state");
        let storage = CartStorage::new(&nested);

        storage.save(&[line_item(1, 1)]).expect("save");
        assert_eq!(storage.load().len(), 1);
    }
}
