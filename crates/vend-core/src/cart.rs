//! # Cart
//!
//! The shopping cart and its mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutation Rules                                  │
//! │                                                                         │
//! │  add(product, +n)  line exists ──► quantity += n                       │
//! │                    no line     ──► insert line with quantity n         │
//! │                                                                         │
//! │  add(product, -n)  line exists ──► quantity -= n                       │
//! │                                    quantity <= 0 ──► line removed      │
//! │                    no line     ──► no-op                               │
//! │                                                                         │
//! │  remove(product)   line exists ──► line deleted                        │
//! │                    no line     ──► ItemNotInCart                       │
//! │                                                                         │
//! │  INVARIANT: at most one line per product id, and no line ever holds    │
//! │  a quantity <= 0.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines carry no price: pricing happens at checkout against the catalog, so
//! a cart that sits for a while is charged current prices, and the resulting
//! order freezes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// A line in the shopping cart: which product, and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product ID (UUID).
    pub product_id: String,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product_id: &str, quantity: i64) -> Self {
        CartLine {
            product_id: product_id.to_string(),
            quantity,
            added_at: Utc::now(),
        }
    }
}

/// The shopping cart: an insertion-ordered collection of lines, owned by
/// exactly one user id.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product accumulates)
/// - Quantity is always > 0 (a delta driving it to <= 0 removes the line)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Applies a quantity delta for a product.
    ///
    /// ## Behavior
    /// - Existing line: quantity += delta (delta may be negative, enabling
    ///   decrement-via-add); the line is removed when the result is <= 0
    /// - No line and delta > 0: a new line is inserted
    /// - No line and delta <= 0: no-op - a negative-quantity line is never
    ///   created
    ///
    /// Catalog membership of `product_id` is the caller's responsibility;
    /// the cart itself only knows ids.
    pub fn add(&mut self, product_id: &str, delta: i64) {
        if let Some(pos) = self.lines.iter().position(|l| l.product_id == product_id) {
            self.lines[pos].quantity += delta;
            if self.lines[pos].quantity <= 0 {
                self.lines.remove(pos);
            }
        } else if delta > 0 {
            self.lines.push(CartLine::new(product_id, delta));
        }
    }

    /// Deletes a line entirely, regardless of quantity.
    pub fn remove(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);

        if self.lines.len() == initial_len {
            Err(CoreError::ItemNotInCart(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_inserts_line() {
        let mut cart = Cart::new();
        cart.add("p1", 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.line("p1").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_same_product_accumulates() {
        let mut cart = Cart::new();
        cart.add("p1", 2);
        cart.add("p1", 3);

        assert_eq!(cart.line_count(), 1); // Still one unique line
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_negative_delta_decrements() {
        let mut cart = Cart::new();
        cart.add("p1", 5);
        cart.add("p1", -2);

        assert_eq!(cart.line("p1").unwrap().quantity, 3);
    }

    #[test]
    fn test_delta_to_zero_or_below_removes_line() {
        let mut cart = Cart::new();
        cart.add("p1", 2);
        cart.add("p1", -2);
        assert!(cart.is_empty());

        cart.add("p2", 1);
        cart.add("p2", -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_non_positive_delta_on_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add("p1", 0);
        cart.add("p1", -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_deletes_line() {
        let mut cart = Cart::new();
        cart.add("p1", 4);

        cart.remove("p1").unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_line_fails() {
        let mut cart = Cart::new();
        let err = cart.remove("p1").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotInCart(_)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add("p2", 1);
        cart.add("p1", 1);
        cart.add("p3", 1);

        let ids: Vec<&str> = cart.lines.iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1", "p3"]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("p1", 2);
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
