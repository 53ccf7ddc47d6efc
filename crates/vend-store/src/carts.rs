//! # Cart Manager
//!
//! Owns one cart per user identifier. Carts are created lazily on first
//! reference and emptied - never deleted - after a successful checkout, so a
//! user id keeps its cart entry for the process lifetime.

use std::collections::HashMap;

use vend_core::{Cart, CoreResult};

/// Per-user cart ownership.
///
/// Catalog membership of product ids is checked by the calling layer before
/// mutation; the manager itself only routes operations to the right cart.
#[derive(Debug, Default)]
pub struct CartManager {
    carts: HashMap<String, Cart>,
}

impl CartManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        CartManager::default()
    }

    /// Returns the user's cart, creating an empty one on first reference.
    /// Never fails.
    pub fn get_or_create(&mut self, user_id: &str) -> &mut Cart {
        self.carts.entry(user_id.to_string()).or_default()
    }

    /// Applies a quantity delta to the user's cart and returns the updated
    /// cart.
    pub fn add_item(&mut self, user_id: &str, product_id: &str, delta: i64) -> &Cart {
        let cart = self.get_or_create(user_id);
        cart.add(product_id, delta);
        cart
    }

    /// Deletes a line from the user's cart and returns the updated cart.
    pub fn remove_item(&mut self, user_id: &str, product_id: &str) -> CoreResult<&Cart> {
        let cart = self.get_or_create(user_id);
        cart.remove(product_id)?;
        Ok(cart)
    }

    /// Empties the user's cart, retaining the entry.
    pub fn clear(&mut self, user_id: &str) {
        self.get_or_create(user_id).clear();
    }

    /// Number of user ids with a cart entry (empty ones included).
    pub fn user_count(&self) -> usize {
        self.carts.len()
    }
}
