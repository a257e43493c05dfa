//! Unified application error type.
//!
//! Subsystem errors (`CatalogError`, `StorageError`) convert into
//! `StorefrontError` via `#[from]`; callers return `Result<T>` and
//! propagate with `?`. Nothing in this layer is fatal: catalog failures
//! abort the triggering action with the cart unchanged, and corrupt
//! persisted data degrades to an empty cart before ever reaching here.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart persistence failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;
    use shopmaster_core::ProductId;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::from(CatalogError::NotFound(ProductId::new(9)));
        assert_eq!(err.to_string(), "Catalog error: Product not found: 9");
    }
}
