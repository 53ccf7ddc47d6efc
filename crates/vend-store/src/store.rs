//! # Store Context
//!
//! The explicitly constructed context object the transport layer owns and
//! passes around - never a hidden singleton. Lifecycle: create at process
//! start, discard at process stop. Tests construct a fresh one each.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Architecture                                │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────────┐  │
//! │  │ StoreConfig  │  │   Catalog    │  │     Mutex<SharedState>       │  │
//! │  │              │  │              │  │                              │  │
//! │  │  read-only   │  │  read-only   │  │  carts      (per user)      │  │
//! │  │  after init  │  │  after seed  │  │  discounts  (shared)        │  │
//! │  │              │  │              │  │  ledger     (shared)        │  │
//! │  └──────────────┘  └──────────────┘  └──────────────────────────────┘  │
//! │                                                                         │
//! │  One mutex over all mutable state: the checkout sequence               │
//! │  (read cart → redeem code → append order → clear cart) runs as one     │
//! │  atomic unit, and two checkouts racing for the same code resolve to    │
//! │  exactly one winner.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};
use vend_core::discount::milestone_code;
use vend_core::{Cart, CoreResult, Order, Product, Stats};

use crate::carts::CartManager;
use crate::catalog::{seed_catalog, Catalog};
use crate::checkout::run_checkout;
use crate::config::StoreConfig;
use crate::discounts::DiscountRegistry;
use crate::ledger::OrderLedger;
use crate::stats::compute_stats;

/// All mutable state, behind one lock.
#[derive(Debug, Default)]
struct SharedState {
    carts: CartManager,
    discounts: DiscountRegistry,
    ledger: OrderLedger,
}

/// The in-process commerce store.
///
/// Cart mutations return the updated cart so the transport layer can echo it
/// in response payloads without a second call.
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    catalog: Catalog,
    state: Mutex<SharedState>,
}

impl Store {
    /// Creates a store with the seeded storefront catalog.
    pub fn new(config: StoreConfig) -> Self {
        Store::with_catalog(config, seed_catalog())
    }

    /// Creates a store over a specific catalog. Used by tests to get full
    /// isolation: fresh context per test instead of resetting shared fields.
    pub fn with_catalog(config: StoreConfig, catalog: Catalog) -> Self {
        Store {
            config,
            catalog,
            state: Mutex::new(SharedState::default()),
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The read-only product catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All products, in seed order.
    pub fn products(&self) -> &[Product] {
        self.catalog.list()
    }

    /// A single product by id.
    pub fn product(&self, product_id: &str) -> CoreResult<&Product> {
        self.catalog.require(product_id)
    }

    /// Applies a quantity delta to the user's cart.
    ///
    /// Fails with `ProductNotFound` before any mutation when the product id
    /// is not in the catalog. Delta semantics live in [`vend_core::Cart`]:
    /// accumulate, remove at <= 0, no-op insert on non-positive delta.
    pub fn add_to_cart(&self, user_id: &str, product_id: &str, quantity: i64) -> CoreResult<Cart> {
        debug!(user_id, product_id, quantity, "add_to_cart");
        self.catalog.require(product_id)?;

        let mut state = self.lock();
        Ok(state.carts.add_item(user_id, product_id, quantity).clone())
    }

    /// The user's cart, created empty on first reference. Never fails.
    pub fn get_cart(&self, user_id: &str) -> Cart {
        debug!(user_id, "get_cart");
        self.lock().carts.get_or_create(user_id).clone()
    }

    /// Deletes a line from the user's cart entirely.
    pub fn remove_from_cart(&self, user_id: &str, product_id: &str) -> CoreResult<Cart> {
        debug!(user_id, product_id, "remove_from_cart");
        let mut state = self.lock();
        Ok(state.carts.remove_item(user_id, product_id)?.clone())
    }

    /// Read-only redeemability check (exists and hasn't been used).
    pub fn validate_discount(&self, code: &str) -> bool {
        debug!(code, "validate_discount");
        self.lock().discounts.is_redeemable(code)
    }

    /// Converts the user's cart into an order, optionally redeeming a
    /// discount code. See [`crate::checkout`] for the sequence and its
    /// all-or-nothing guarantees.
    pub fn checkout(&self, user_id: &str, discount_code: Option<&str>) -> CoreResult<Order> {
        debug!(user_id, ?discount_code, "checkout");

        let mut state = self.lock();
        let SharedState {
            carts,
            discounts,
            ledger,
        } = &mut *state;

        let order = run_checkout(
            &self.catalog,
            &self.config,
            carts,
            discounts,
            ledger,
            user_id,
            discount_code,
        )?;

        info!(
            order_id = order.id,
            user_id,
            total = %order.final_amount,
            "Order placed"
        );
        Ok(order)
    }

    /// Evaluates the milestone rule against the current order counter and,
    /// when it fires, issues the new code. Returns `None` when the condition
    /// is not met. Invoked on demand (admin trigger), not automatically
    /// after each checkout.
    pub fn generate_discount(&self) -> Option<String> {
        let mut state = self.lock();
        let order_count = state.ledger.order_count();
        let code = milestone_code(order_count, self.config.milestone_n, &self.config.code_prefix)?;

        state.discounts.issue(&code);
        info!(code = %code, order_count, "Discount code issued");
        Some(code)
    }

    /// Aggregate statistics, folded from the full ledger on every call.
    pub fn stats(&self) -> Stats {
        debug!("stats");
        compute_stats(self.lock().ledger.all())
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().expect("Store mutex poisoned")
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(StoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use vend_core::{CoreError, Money};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn store_with_milestone(milestone_n: u64) -> Store {
        Store::new(StoreConfig {
            milestone_n,
            ..StoreConfig::default()
        })
    }

    fn sku_id(store: &Store, sku: &str) -> String {
        store.catalog().find_by_sku(sku).unwrap().id.clone()
    }

    #[test]
    fn test_products_listing() {
        let store = Store::default();
        assert_eq!(store.products().len(), 10);

        let first = &store.products()[0];
        assert_eq!(store.product(&first.id).unwrap().sku, first.sku);
        assert!(matches!(
            store.product("nope").unwrap_err(),
            CoreError::ProductNotFound(_)
        ));
    }

    #[test]
    fn test_add_to_cart_and_get_cart() {
        let store = Store::default();
        let headphones = sku_id(&store, "HDPH-NC100");

        let cart = store.add_to_cart("test_user", &headphones, 1).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(&headphones).unwrap().quantity, 1);

        // get_cart sees the same state
        assert_eq!(store.get_cart("test_user").total_quantity(), 1);
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let store = Store::default();
        let err = store.add_to_cart("test_user", "item-999", 1).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(_)));

        // Nothing was created for the user beyond an untouched cart
        assert!(store.get_cart("test_user").is_empty());
    }

    #[test]
    fn test_get_cart_is_lazily_created() {
        let store = Store::default();
        assert!(store.get_cart("brand_new_user").is_empty());
    }

    #[test]
    fn test_remove_from_cart() {
        let store = Store::default();
        let bottle = sku_id(&store, "BTL-STL32");

        store.add_to_cart("u1", &bottle, 2).unwrap();
        let cart = store.remove_from_cart("u1", &bottle).unwrap();
        assert!(cart.is_empty());

        let err = store.remove_from_cart("u1", &bottle).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotInCart(_)));
    }

    #[test]
    fn test_checkout_flow() {
        init_tracing();
        let store = Store::default();
        let headphones = sku_id(&store, "HDPH-NC100");

        store.add_to_cart("checkout_user", &headphones, 1).unwrap();
        let order = store.checkout("checkout_user", None).unwrap();

        assert_eq!(order.user_id, "checkout_user");
        assert_eq!(order.total_amount, Money::from_cents(29999));
        assert_eq!(order.discount_amount, Money::zero());
        assert_eq!(order.final_amount, Money::from_cents(29999));

        // Critical check: cart is empty after buying
        assert!(store.get_cart("checkout_user").is_empty());
    }

    #[test]
    fn test_nth_order_unlocks_discount() {
        init_tracing();
        let store = store_with_milestone(3);
        let headphones = sku_id(&store, "HDPH-NC100");

        // Orders 1 and 2: condition not met
        for user in ["u1", "u2"] {
            store.add_to_cart(user, &headphones, 1).unwrap();
            store.checkout(user, None).unwrap();
            assert_eq!(store.generate_discount(), None);
        }

        // Order 3: milestone hit
        store.add_to_cart("u3", &headphones, 1).unwrap();
        store.checkout("u3", None).unwrap();

        let code = store.generate_discount().unwrap();
        assert_eq!(code, "DISCOUNT10-3");
        assert!(store.validate_discount(&code));

        // A 4th independent checkout redeems it: 10% of $299.99 = $29.999
        store.add_to_cart("u4", &headphones, 1).unwrap();
        let order = store.checkout("u4", Some(&code)).unwrap();
        assert_eq!(order.discount_code.as_deref(), Some(code.as_str()));
        assert_eq!(order.discount_amount, Money::new(Decimal::new(29999, 3)));
        assert_eq!(order.final_amount, Money::new(Decimal::new(269991, 3)));

        // Single use: immediately non-redeemable, second attempt fails whole
        assert!(!store.validate_discount(&code));
        store.add_to_cart("u5", &headphones, 1).unwrap();
        let err = store.checkout("u5", Some(&code)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDiscountCode(_)));
        assert!(!store.get_cart("u5").is_empty());
    }

    #[test]
    fn test_retrigger_at_same_counter_reissues() {
        let store = store_with_milestone(1);
        let bottle = sku_id(&store, "BTL-STL32");

        store.add_to_cart("u1", &bottle, 1).unwrap();
        store.checkout("u1", None).unwrap();

        // Deterministic generation: same counter, same code, overwritten
        assert_eq!(store.generate_discount().as_deref(), Some("DISCOUNT10-1"));
        assert_eq!(store.generate_discount().as_deref(), Some("DISCOUNT10-1"));
        assert!(store.validate_discount("DISCOUNT10-1"));
    }

    #[test]
    fn test_admin_stats() {
        let store = Store::default();
        let headphones = sku_id(&store, "HDPH-NC100");

        store.add_to_cart("stats_user", &headphones, 2).unwrap();
        store.checkout("stats_user", None).unwrap();

        let stats = store.stats();
        assert_eq!(stats.total_orders, 1);
        assert_eq!(stats.total_items_purchased, 2);
        assert_eq!(stats.total_purchase_amount, Money::from_cents(59998));
        assert!(stats.discount_codes.is_empty());
        assert_eq!(stats.total_discount_amount, Money::zero());
    }

    #[test]
    fn test_stats_json_shape() {
        // The admin dashboard consumes this serialization directly
        let store = Store::default();
        let bottle = sku_id(&store, "BTL-STL32");
        store.add_to_cart("u1", &bottle, 1).unwrap();
        store.checkout("u1", None).unwrap();

        let json = serde_json::to_value(store.stats()).unwrap();
        assert_eq!(json["total_orders"], 1);
        assert_eq!(json["total_items_purchased"], 1);
        // Normalized decimal: whole-dollar amounts serialize without zeros
        assert_eq!(json["total_purchase_amount"], "35");
    }

    #[test]
    fn test_concurrent_checkouts() {
        init_tracing();
        let store = Arc::new(store_with_milestone(1000));
        let bottle = sku_id(&store, "BTL-STL32");

        // 10 distinct users, one item each
        let users: Vec<String> = (0..10).map(|i| format!("conc_user_{}", i)).collect();
        for user in &users {
            store.add_to_cart(user, &bottle, 1).unwrap();
        }

        // All call checkout at once
        let handles: Vec<_> = users
            .into_iter()
            .map(|user| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.checkout(&user, None).unwrap())
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .map(|h| h.join().unwrap().id)
            .collect();
        ids.sort_unstable();

        // Ledger grew by exactly 10; ids unique and contiguous from 1
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
        assert_eq!(store.stats().total_orders, 10);
    }

    #[test]
    fn test_concurrent_same_code_single_winner() {
        let store = Arc::new(store_with_milestone(1));
        let bottle = sku_id(&store, "BTL-STL32");

        store.add_to_cart("u0", &bottle, 1).unwrap();
        store.checkout("u0", None).unwrap();
        let code = store.generate_discount().unwrap();

        for user in ["r1", "r2"] {
            store.add_to_cart(user, &bottle, 1).unwrap();
        }

        let handles: Vec<_> = ["r1", "r2"]
            .into_iter()
            .map(|user| {
                let store = Arc::clone(&store);
                let code = code.clone();
                std::thread::spawn(move || store.checkout(user, Some(&code)))
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners = results.iter().filter(|r| r.is_ok()).count();
        let losers = results
            .iter()
            .filter(|r| matches!(r, Err(CoreError::InvalidDiscountCode(_))))
            .count();

        // Exactly one success and one InvalidDiscountCode failure
        assert_eq!(winners, 1);
        assert_eq!(losers, 1);
    }
}
