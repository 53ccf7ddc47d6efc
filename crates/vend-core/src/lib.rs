//! # vend-core: Pure Business Logic for Vend
//!
//! This crate is the **heart** of Vend. It contains all business logic as
//! pure types and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Vend Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               HTTP Transport (external caller)                  │   │
//! │  │    products ──► cart ──► checkout ──► admin stats              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ synchronous calls                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vend-store (Store context)                   │   │
//! │  │    catalog, cart manager, discount registry, order ledger      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ discount  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ milestone │  │   │
//! │  │   │   Order   │  │  Decimal  │  │ CartLine  │  │   rule    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, DiscountCode, Stats, ...)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`cart`] - Cart lines and their mutation rules
//! - [`discount`] - The "every Nth order" milestone rule
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values are exact decimals - a 10%
//!    discount on $299.99 is $29.999, never $29.998999...
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod discount;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vend_core::Money` instead of
// `use vend_core::money::Money`

pub use cart::{Cart, CartLine};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Checkout discount rate in basis points (1000 = 10%).
///
/// One rate for every code: codes are one-time-use unlocks of this rate,
/// not carriers of their own percentages.
pub const DEFAULT_DISCOUNT_RATE_BPS: u32 = 1000;

/// Default milestone interval: a new code becomes available every Nth order.
pub const DEFAULT_MILESTONE_INTERVAL: u64 = 5;

/// Prefix for generated discount codes. The counter value is appended, so
/// the third order under a milestone of 3 yields `DISCOUNT10-3`.
pub const DISCOUNT_CODE_PREFIX: &str = "DISCOUNT10-";
