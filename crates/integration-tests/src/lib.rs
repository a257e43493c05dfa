//! Integration tests for Shopmaster.
//!
//! These tests exercise the storefront layer end to end against a real
//! filesystem (in a temp directory): cart hydration, write-through
//! persistence, and the checkout flow. No network access is required -
//! carts are seeded with locally built products, never through the
//! catalog client.
//!
//! # Test Categories
//!
//! - `cart_persistence` - Storage round trips and hydration recovery
//! - `checkout_flow` - Receipts, ticket rendering, and cart clearing

#![allow(clippy::unwrap_used)]

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use shopmaster_core::{Product, ProductId};
use shopmaster_storefront::{
    CartSession, CartStorage, Storefront, StorefrontConfig, TracingNotifier,
};

/// Build a product fixture with the given id and price.
#[must_use]
pub fn sample_product(id: i64, title: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Decimal::from_str(price).unwrap(),
        description: format!("{title} (test fixture)"),
        category: "fixtures".to_string(),
        image: format!("https://example.com/{id}.jpg"),
    }
}

/// Create a cart storage adapter rooted in a fresh temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
#[must_use]
pub fn temp_storage() -> (TempDir, CartStorage) {
    let dir = TempDir::new().unwrap();
    let storage = CartStorage::new(dir.path());
    (dir, storage)
}

/// Create a storefront whose durable state lives in `data_dir`.
///
/// The cart is hydrated from whatever that directory already holds, so
/// seed the slot first (see [`seed_cart`]) to start with a non-empty cart.
#[must_use]
pub fn storefront_in(data_dir: &std::path::Path) -> Storefront {
    let config = StorefrontConfig {
        data_dir: data_dir.to_path_buf(),
        ..StorefrontConfig::default()
    };
    Storefront::new(config, Arc::new(TracingNotifier))
}

/// Create a storefront whose durable state lives in a fresh temp directory.
#[must_use]
pub fn temp_storefront() -> (TempDir, Storefront) {
    let dir = TempDir::new().unwrap();
    let storefront = storefront_in(dir.path());
    (dir, storefront)
}

/// Seed the persisted cart slot in `dir` by driving a short-lived session.
pub fn seed_cart(storage: &CartStorage, items: &[(Product, i64)]) {
    let mut session = CartSession::open(storage.clone());
    for (product, quantity) in items {
        session.add(product, *quantity).unwrap();
    }
}
