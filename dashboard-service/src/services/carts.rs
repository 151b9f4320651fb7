//! In-memory cart storage.
//!
//! Each view owns one cart, addressed by a string key ("po", "customer-1",
//! "vendor-2", ...). Mutations go through order-core's value-in/value-out
//! operations; the store just swaps the owned collection for the result.
//! Cart edits are never written back to the directory or the database.

use std::mem;
use std::sync::Arc;

use dashmap::DashMap;
use order_core::LineItem;

use crate::services::directory;

/// Key of the purchase-order review cart.
pub const PURCHASE_ORDER_KEY: &str = "po";

#[derive(Clone)]
pub struct CartStore {
    carts: Arc<DashMap<String, Vec<LineItem>>>,
}

impl CartStore {
    /// Build a store seeded with the demo snapshots: the purchase-order cart
    /// plus one cart per directory customer and vendor.
    pub fn seeded() -> Self {
        let carts = DashMap::new();
        carts.insert(
            PURCHASE_ORDER_KEY.to_string(),
            directory::purchase_order_cart(),
        );
        for customer in directory::customers() {
            carts.insert(
                format!("customer-{}", customer.id),
                directory::customer_cart(customer.id),
            );
        }
        for vendor in directory::vendors() {
            carts.insert(
                format!("vendor-{}", vendor.id),
                directory::vendor_cart(vendor.id),
            );
        }
        Self {
            carts: Arc::new(carts),
        }
    }

    /// Snapshot of one cart, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<Vec<LineItem>> {
        self.carts.get(key).map(|entry| entry.value().clone())
    }

    /// Apply a quantity change and return the resulting cart.
    ///
    /// Quantities below 1 (including negatives, which cannot even reach the
    /// calculator) and unknown item ids leave the cart untouched.
    pub fn set_quantity(&self, key: &str, item_id: i64, quantity: i64) -> Option<Vec<LineItem>> {
        let mut entry = self.carts.get_mut(key)?;
        if let Ok(quantity) = u32::try_from(quantity) {
            let updated = order_core::update_quantity(mem::take(entry.value_mut()), item_id, quantity);
            *entry.value_mut() = updated;
        }
        Some(entry.value().clone())
    }

    /// Remove an item and return the resulting cart. Unknown item ids are a
    /// no-op, matching the calculator's permissive policy.
    pub fn remove_item(&self, key: &str, item_id: i64) -> Option<Vec<LineItem>> {
        let mut entry = self.carts.get_mut(key)?;
        let updated = order_core::remove_item(mem::take(entry.value_mut()), item_id);
        *entry.value_mut() = updated;
        Some(entry.value().clone())
    }
}
