//! # Checkout Engine
//!
//! The central algorithm: converts a user's cart into a priced, immutable
//! order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Sequence                                  │
//! │                                                                         │
//! │  1. Read cart ───────────► empty? ──► EmptyCart                        │
//! │  2. Price lines ─────────► catalog miss? ──► ProductNotFound           │
//! │  3. Redeem code (if any) ► unknown? ──► InvalidDiscountCode            │
//! │         │                                                               │
//! │         ▼  (no failure possible past this point)                        │
//! │  4. final = total - discount                                            │
//! │  5. Snapshot order, id = ledger length + 1                             │
//! │  6. Append ──► clear cart (entry retained)                             │
//! │  7. Return the order                                                    │
//! │                                                                         │
//! │  All-or-nothing: steps 1-3 validate before steps 5-6 mutate. The one   │
//! │  mutation inside validation - redemption - precedes the append by      │
//! │  construction, and nothing after it can fail in-memory.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use vend_core::{Cart, CoreError, CoreResult, Money, Order, OrderLine};

use crate::carts::CartManager;
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::discounts::DiscountRegistry;
use crate::ledger::OrderLedger;

/// Runs one checkout for `user_id`, optionally redeeming a discount code.
///
/// The caller serializes access to the mutable components; this function
/// assumes it is the only writer for the duration of the call.
pub(crate) fn run_checkout(
    catalog: &Catalog,
    config: &StoreConfig,
    carts: &mut CartManager,
    discounts: &mut DiscountRegistry,
    ledger: &mut OrderLedger,
    user_id: &str,
    discount_code: Option<&str>,
) -> CoreResult<Order> {
    let cart = carts.get_or_create(user_id);
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    // Price every line from the catalog at checkout time. A cart should
    // never reference a product the catalog does not know; if it somehow
    // does, the whole checkout is rejected and no state changes.
    let lines = price_lines(catalog, cart)?;
    let total_amount = lines
        .iter()
        .fold(Money::zero(), |acc, line| acc + line.line_total);

    // A supplied code must redeem or the whole checkout fails - it is never
    // silently ignored. Redemption removes the code, enforcing single use.
    let discount_amount = match discount_code {
        Some(code) => {
            discounts.redeem(code)?;
            config.discount_rate.of(total_amount)
        }
        None => Money::zero(),
    };
    let final_amount = total_amount - discount_amount;

    let order = Order {
        id: ledger.next_order_id(),
        user_id: user_id.to_string(),
        lines,
        total_amount,
        discount_code: discount_code.map(str::to_string),
        discount_amount,
        final_amount,
        created_at: Utc::now(),
    };

    ledger.append(order.clone());
    carts.clear(user_id);

    Ok(order)
}

/// Deep-copies the cart into price-frozen order lines.
fn price_lines(catalog: &Catalog, cart: &Cart) -> CoreResult<Vec<OrderLine>> {
    cart.lines
        .iter()
        .map(|line| {
            let product = catalog.require(&line.product_id)?;
            Ok(OrderLine::from_product(product, line.quantity))
        })
        .collect()
}
