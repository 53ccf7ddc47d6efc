//! # vend-store: In-Memory Commerce Store
//!
//! This crate owns all process-lifetime state for Vend and exposes the
//! narrow synchronous API the transport layer calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Vend Data Flow                                 │
//! │                                                                         │
//! │  HTTP transport (external caller)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vend-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │  catalog  │  │   carts   │  │ discounts  │  │  ledger   │ │   │
//! │  │   │  (seeded, │  │ (per-user │  │ (redeemable│  │ (append-  │ │   │
//! │  │   │ read-only)│  │   carts)  │  │   codes)   │  │   only)   │ │   │
//! │  │   └─────┬─────┘  └─────┬─────┘  └─────┬──────┘  └─────┬─────┘ │   │
//! │  │         │              │              │               │        │   │
//! │  │         └──────────────┴──────┬───────┴───────────────┘        │   │
//! │  │                               ▼                                 │   │
//! │  │                    checkout engine + stats                      │   │
//! │  │                 (orchestrated by the Store context)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  vend-core (pure business logic)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Configuration with environment overrides
//! - [`catalog`] - Seeded read-only product catalog
//! - [`carts`] - Per-user cart ownership
//! - [`discounts`] - Redeemable discount code registry
//! - [`ledger`] - Append-only order history
//! - [`checkout`] - The cart-to-order conversion sequence
//! - [`stats`] - Ledger fold for the admin dashboard
//! - [`store`] - The `Store` context object tying it all together
//!
//! ## Usage
//!
//! ```rust
//! use vend_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::default());
//! let product_id = store.products()[0].id.clone();
//!
//! store.add_to_cart("demo_user", &product_id, 1)?;
//! let order = store.checkout("demo_user", None)?;
//! assert_eq!(order.id, 1);
//! # Ok::<(), vend_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod carts;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod discounts;
pub mod ledger;
pub mod stats;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use carts::CartManager;
pub use catalog::{seed_catalog, Catalog};
pub use config::StoreConfig;
pub use discounts::DiscountRegistry;
pub use ledger::OrderLedger;
pub use stats::compute_stats;
pub use store::Store;
