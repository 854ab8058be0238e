//! The in-memory product store.
//!
//! This module owns the authoritative product collection and the
//! auto-increment id counter. Every mutation is mirrored to the
//! [`FileStore`] snapshot; a failed save never fails the mutation, the
//! in-memory state stays authoritative until the next successful save.

use crate::domain::product::{Product, ProductFields};
use crate::storage::file::FileStore;
use serde_json::Number;
use std::collections::BTreeMap;

/// Exclusive owner of the product collection and the `next_id` counter.
///
/// The collection is an ordered map keyed by id. Because ids are assigned
/// monotonically and never reused, iteration order is also creation order.
pub struct ProductStore {
    products: BTreeMap<u64, Product>,
    next_id: u64,
    file: FileStore,
}

impl ProductStore {
    /// Loads the snapshot (if any) and positions `next_id` past the highest
    /// existing id, so ids stay unique across restarts.
    pub fn open(file: FileStore) -> Self {
        let loaded = file.load();
        let next_id = loaded.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let products = loaded.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products,
            next_id,
            file,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the full collection in id (= creation) order.
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Assigns the next id, appends the record, and persists the snapshot.
    pub fn create(&mut self, fields: ProductFields) -> Product {
        let product = Product::new(self.next_id, fields);
        self.next_id += 1;
        self.products.insert(product.id, product.clone());
        self.persist();
        product
    }

    pub fn get(&self, id: u64) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    /// Replaces `name`, `price`, `quantity` in place, preserving the id.
    /// Returns `None` (with no side effects) if the id does not exist.
    pub fn update(&mut self, id: u64, fields: ProductFields) -> Option<Product> {
        let updated = {
            let existing = self.products.get_mut(&id)?;
            existing.name = fields.name;
            existing.price = fields.price;
            existing.quantity = Number::from(fields.quantity);
            existing.clone()
        };
        self.persist();
        Some(updated)
    }

    /// Removes the record if present. The freed id is never reassigned.
    pub fn delete(&mut self, id: u64) -> bool {
        if self.products.remove(&id).is_none() {
            return false;
        }
        self.persist();
        true
    }

    /// Total inventory value: sum of `price * quantity` over the collection.
    ///
    /// Deliberately lenient over malformed stored values (the snapshot can be
    /// hand-edited): a negative or non-finite price contributes 0, as does a
    /// quantity that is not an integer >= 0, and any subtotal that overflows
    /// to a non-finite value is skipped rather than poisoning the total.
    /// Stored records are never mutated or rejected.
    pub fn total_balance(&self) -> f64 {
        self.products.values().fold(0.0, |acc, p| {
            let price = if p.price.is_finite() && p.price >= 0.0 {
                p.price
            } else {
                0.0
            };
            let quantity = p.quantity.as_u64().map(|q| q as f64).unwrap_or(0.0);
            let subtotal = price * quantity;
            if subtotal.is_finite() {
                acc + subtotal
            } else {
                acc
            }
        })
    }

    /// Writes the current collection to the snapshot file (best-effort).
    pub fn persist(&self) {
        let snapshot: Vec<Product> = self.products.values().cloned().collect();
        self.file.save(&snapshot);
    }
}
