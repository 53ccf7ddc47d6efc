//! # Order Ledger
//!
//! Append-only sequence of completed orders; the source of truth for
//! statistics. No component ever mutates or removes a stored order.

use vend_core::Order;

/// The append-only order history.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        OrderLedger::default()
    }

    /// Appends a completed order.
    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// All orders, oldest first.
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Number of completed orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if any order has been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The global order counter that drives the milestone trigger.
    ///
    /// Appending IS the increment: the counter and the ledger length are two
    /// reads of one fact, so they cannot diverge.
    pub fn order_count(&self) -> u64 {
        self.orders.len() as u64
    }

    /// The identifier the next order will receive. Dense and strictly
    /// increasing starting at 1.
    pub fn next_order_id(&self) -> u64 {
        self.order_count() + 1
    }
}
