//! Inventory manager
//!
//! Holds a non-authoritative in-memory mirror of the product collection.
//! Every mutation goes through the store and then reloads the mirror;
//! `refresh` must also be called after a sibling component mutates products
//! (checkout does this itself).

use crate::models::{Product, ProductUpdate};
use crate::store::{PosStore, StoreResult};

pub struct Inventory {
    store: PosStore,
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(store: PosStore) -> StoreResult<Self> {
        let mut inventory = Self {
            store,
            products: Vec::new(),
        };
        inventory.refresh()?;
        Ok(inventory)
    }

    /// Reload the mirror from the store
    pub fn refresh(&mut self) -> StoreResult<()> {
        self.products = self.store.products()?;
        Ok(())
    }

    pub fn add(&mut self, product: Product) -> StoreResult<()> {
        tracing::info!(product_id = %product.id, name = %product.name, "Adding product");
        self.store.add_product(&product)?;
        self.refresh()
    }

    pub fn update(&mut self, id: &str, patch: &ProductUpdate) -> StoreResult<()> {
        self.store.update_product(id, patch)?;
        self.refresh()
    }

    /// Unconditional delete; historical transactions keep their snapshots.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        tracing::info!(product_id = %id, "Deleting product");
        self.store.delete_product(id)?;
        self.refresh()
    }

    /// Lookup against the mirror; stale if the store changed since the last
    /// refresh.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products at or below their own threshold, in mirror order
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub(crate) fn store(&self) -> &PosStore {
        &self.store
    }
}
