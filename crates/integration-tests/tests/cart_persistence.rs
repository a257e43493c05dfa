//! Integration tests for cart persistence.
//!
//! Exercise the storage adapter and the write-through session against a
//! real filesystem: round trips, hydration from corrupt data, and the
//! guarantee that persisted state never lags the in-memory cart.

#![allow(clippy::unwrap_used)]

use shopmaster_core::ProductId;
use shopmaster_integration_tests::{sample_product, seed_cart, temp_storage};
use shopmaster_storefront::CartSession;

#[test]
fn round_trip_reproduces_an_equivalent_cart() {
    let (_dir, storage) = temp_storage();
    seed_cart(
        &storage,
        &[
            (sample_product(3, "Backpack", "109.95"), 1),
            (sample_product(1, "T-Shirt", "22.30"), 4),
            (sample_product(9, "Mug", "5.50"), 2),
        ],
    );

    let session = CartSession::open(storage);
    let snapshot = session.store().snapshot();

    let loaded: Vec<(i64, u32)> = snapshot
        .iter()
        .map(|item| (item.product.id.as_i64(), item.quantity))
        .collect();
    assert_eq!(loaded, vec![(3, 1), (1, 4), (9, 2)]);
}

#[test]
fn corrupt_slot_hydrates_an_empty_cart() {
    let (_dir, storage) = temp_storage();
    std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
    std::fs::write(storage.path(), r#"{"definitely": "not a cart"}"#).unwrap();

    let session = CartSession::open(storage);
    assert!(session.store().is_empty());
}

#[test]
fn partially_invalid_slot_is_repaired_on_hydration() {
    // Parseable JSON whose contents violate the cart invariants: a zero
    // quantity and a duplicate product id. Hydration drops and merges.
    let (_dir, storage) = temp_storage();
    let json = serde_json::json!([
        { "product": { "id": 1, "title": "A", "price": "2.00", "description": "", "category": "c", "image": "" }, "quantity": 2 },
        { "product": { "id": 2, "title": "B", "price": "3.00", "description": "", "category": "c", "image": "" }, "quantity": 0 },
        { "product": { "id": 1, "title": "A", "price": "2.00", "description": "", "category": "c", "image": "" }, "quantity": 1 }
    ]);
    std::fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
    std::fs::write(storage.path(), json.to_string()).unwrap();

    let session = CartSession::open(storage);
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().total_quantity(), 3);
}

#[test]
fn every_effective_mutation_is_observable_after_reopen() {
    let (_dir, storage) = temp_storage();

    {
        let mut session = CartSession::open(storage.clone());
        session.add(&sample_product(1, "T-Shirt", "22.30"), 2).unwrap();
    }
    {
        let session = CartSession::open(storage.clone());
        assert_eq!(session.store().total_quantity(), 2);
    }

    {
        let mut session = CartSession::open(storage.clone());
        session.update_quantity(ProductId::new(1), -1).unwrap();
    }
    {
        let session = CartSession::open(storage.clone());
        assert_eq!(session.store().total_quantity(), 1);
    }

    {
        let mut session = CartSession::open(storage.clone());
        session.remove(ProductId::new(1)).unwrap();
    }
    let session = CartSession::open(storage);
    assert!(session.store().is_empty());
}

#[test]
fn decrement_to_zero_removes_and_persists_the_removal() {
    let (_dir, storage) = temp_storage();
    seed_cart(&storage, &[(sample_product(7, "Mug", "3.00"), 2)]);

    let mut session = CartSession::open(storage.clone());
    session.update_quantity(ProductId::new(7), -2).unwrap();

    let reopened = CartSession::open(storage);
    assert!(reopened.store().is_empty());
}
