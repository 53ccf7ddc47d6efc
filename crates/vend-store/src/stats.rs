//! # Stats Aggregator
//!
//! Derives summary metrics by folding over the order ledger. Recomputed in
//! full on every call - no caching. O(orders × lines) per call, acceptable
//! for an in-memory, process-lifetime history.

use vend_core::{Money, Order, Stats};

/// Folds the full ledger into aggregate metrics.
pub fn compute_stats(orders: &[Order]) -> Stats {
    let mut stats = Stats {
        total_orders: orders.len() as u64,
        total_items_purchased: 0,
        total_purchase_amount: Money::zero(),
        discount_codes: Vec::new(),
        total_discount_amount: Money::zero(),
    };

    for order in orders {
        stats.total_items_purchased += order.item_count();
        stats.total_purchase_amount += order.final_amount;
        stats.total_discount_amount += order.discount_amount;
        if let Some(code) = &order.discount_code {
            stats.discount_codes.push(code.clone());
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vend_core::OrderLine;

    fn order(id: u64, quantity: i64, final_cents: i64, code: Option<&str>) -> Order {
        let unit_price = Money::from_cents(final_cents / quantity.max(1));
        Order {
            id,
            user_id: format!("u{}", id),
            lines: vec![OrderLine {
                product_id: "p1".to_string(),
                name_snapshot: "Product".to_string(),
                unit_price,
                quantity,
                line_total: unit_price.multiply_quantity(quantity),
            }],
            total_amount: Money::from_cents(final_cents),
            discount_code: code.map(str::to_string),
            discount_amount: Money::zero(),
            final_amount: Money::from_cents(final_cents),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_ledger() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_items_purchased, 0);
        assert_eq!(stats.total_purchase_amount, Money::zero());
        assert!(stats.discount_codes.is_empty());
        assert_eq!(stats.total_discount_amount, Money::zero());
    }

    #[test]
    fn test_fold_over_orders() {
        let orders = vec![
            order(1, 2, 59998, None),
            order(2, 1, 29999, Some("DISCOUNT10-1")),
            order(3, 3, 10500, Some("DISCOUNT10-2")),
        ];

        let stats = compute_stats(&orders);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_items_purchased, 6);
        assert_eq!(stats.total_purchase_amount, Money::from_cents(100497));
        // Codes in ledger order
        assert_eq!(stats.discount_codes, vec!["DISCOUNT10-1", "DISCOUNT10-2"]);
    }
}
