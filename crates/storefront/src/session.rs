//! Cart session: the cart store with write-through persistence.
//!
//! Hydrates the [`CartStore`] from storage once at construction and writes
//! the snapshot back after every mutation that changed state, so the
//! persisted cart is never stale relative to memory. Mutations the store
//! ignored write nothing.

use shopmaster_core::{CartMutation, CartStore, Product, ProductId};

use crate::storage::{CartStorage, StorageError};

/// A hydrated cart bound to its durable storage slot.
#[derive(Debug)]
pub struct CartSession {
    store: CartStore,
    storage: CartStorage,
}

impl CartSession {
    /// Open a session, hydrating the cart from storage.
    ///
    /// Missing or corrupt stored state yields an empty cart.
    #[must_use]
    pub fn open(storage: CartStorage) -> Self {
        let store = CartStore::from_items(storage.load());
        Self { store, storage }
    }

    /// Read-only access to the underlying cart store.
    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// Add units of a product; persists on success.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the mutation changed state but could not
    /// be persisted.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<CartMutation, StorageError> {
        let mutation = self.store.add(product, quantity);
        self.persist(mutation)?;
        Ok(mutation)
    }

    /// Apply a signed quantity delta; persists on success.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the mutation changed state but could not
    /// be persisted.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        delta: i64,
    ) -> Result<CartMutation, StorageError> {
        let mutation = self.store.update_quantity(id, delta);
        self.persist(mutation)?;
        Ok(mutation)
    }

    /// Remove a line item; persists on success.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the mutation changed state but could not
    /// be persisted.
    pub fn remove(&mut self, id: ProductId) -> Result<CartMutation, StorageError> {
        let mutation = self.store.remove(id);
        self.persist(mutation)?;
        Ok(mutation)
    }

    /// Empty the cart and persist the empty state.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the empty cart could not be persisted.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear();
        self.storage.save(self.store.snapshot())
    }

    fn persist(&self, mutation: CartMutation) -> Result<(), StorageError> {
        if mutation.changed_state() {
            self.storage.save(self.store.snapshot())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shopmaster_core::ProductId;
    use std::str::FromStr;

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Decimal::from_str("4.25").expect("price"),
            description: String::new(),
            category: "test".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_mutations_are_write_through() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = CartStorage::new(dir.path());

        let mut session = CartSession::open(storage.clone());
        session.add(&product(1), 2).expect("add");
        session.add(&product(2), 1).expect("add");
        session
            .update_quantity(ProductId::new(1), -1)
            .expect("update");

        // A fresh session sees every mutation.
        let reopened = CartSession::open(storage);
        assert_eq!(reopened.store().total_quantity(), 2);
        assert_eq!(reopened.store().len(), 2);
    }

    #[test]
    fn test_ignored_mutation_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = CartStorage::new(dir.path());

        let mut session = CartSession::open(storage.clone());
        let mutation = session.add(&product(1), 0).expect("add");

        assert_eq!(mutation, CartMutation::Ignored);
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_clear_persists_empty_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = CartStorage::new(dir.path());

        let mut session = CartSession::open(storage.clone());
        session.add(&product(1), 3).expect("add");
        session.clear().expect("clear");

        let reopened = CartSession::open(storage);
        assert!(reopened.store().is_empty());
    }
}
