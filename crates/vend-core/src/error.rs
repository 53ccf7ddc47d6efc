//! # Error Types
//!
//! Domain-specific error types for vend-core.
//!
//! Every variant is a caller-input validation failure, never a system fault:
//! the store rejects the operation, leaves all state unchanged, and surfaces
//! the reason. There are no retryable or process-fatal error classes in the
//! core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, code, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught by
/// the transport layer and translated to client-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// Also raised when a cart line references a product that has vanished
    /// from the catalog between add and checkout: the checkout is rejected
    /// as a whole rather than panicking on the broken reference.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The user's cart has no line for the given product.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Checkout was attempted on a cart with no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// The supplied discount code is not redeemable.
    ///
    /// A code that was never issued and a code already redeemed are
    /// indistinguishable here: redemption removes the code entirely.
    #[error("Invalid discount code: {0}")]
    InvalidDiscountCode(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
