//! # Domain Types
//!
//! Core domain types used throughout Vend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │  DiscountCode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (dense u64) │   │  code           │       │
//! │  │  sku (business) │   │  lines snapshot │   │  issued_at      │       │
//! │  │  name, price    │   │  totals, code   │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DiscountRate   │   │     Stats       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  bps (u32)      │   │  folded from    │                             │
//! │  │  1000 = 10%     │   │  the ledger     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Products carry two identifiers:
//! - `id`: UUID v4 - immutable, what carts and orders reference
//! - `sku`: human-readable business identifier

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = the 10% rate applied at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Computes the discount amount for a given total. Exact:
    /// 1000 bps of $299.99 is $29.999, not a rounded approximation.
    ///
    /// ## Example
    /// ```rust
    /// use vend_core::{DiscountRate, Money};
    ///
    /// let rate = DiscountRate::from_bps(1000); // 10%
    /// let discount = rate.of(Money::from_cents(29999));
    /// assert_eq!(discount.to_string(), "$29.999");
    /// ```
    pub fn of(&self, total: Money) -> Money {
        Money::new(total.amount() * Decimal::new(self.0 as i64, 4))
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::from_bps(crate::DEFAULT_DISCOUNT_RATE_BPS)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Created once at catalog seed time and immutable thereafter. The display
/// attributes (image, rating, features, ...) exist to serve the storefront
/// frontend; `stock` is display metadata only and is never decremented.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Display name shown in the storefront and on orders.
    pub name: String,

    /// Marketing description.
    pub description: String,

    /// Unit price. Non-negative.
    pub price: Money,

    /// Pre-sale price, when the product is discounted on the storefront.
    pub original_price: Option<Money>,

    /// Image path served by the transport layer.
    pub image: String,

    /// Category for storefront grouping.
    pub category: String,

    /// Average review rating (0.0 - 5.0).
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// Feature bullet points.
    pub features: Vec<String>,

    /// Units on hand. Display only - checkout never decrements it.
    pub stock: i64,

    /// Whether the product is flagged as on sale.
    pub on_sale: bool,

    /// When the product was seeded.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Discount Code
// =============================================================================

/// A redeemable one-time-use discount code.
///
/// Presence in the registry IS redeemability: a redeemed code is removed
/// entirely, never retained in a "used" state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountCode {
    /// The code string customers type at checkout.
    pub code: String,

    /// When the code was issued.
    #[ts(as = "String")]
    pub issued_at: DateTime<Utc>,
}

impl DiscountCode {
    /// Creates a freshly-issued code.
    pub fn new(code: impl Into<String>) -> Self {
        DiscountCode {
            code: code.into(),
            issued_at: Utc::now(),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line item in a completed order.
/// Uses snapshot pattern to freeze product data at checkout time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub product_id: String,
    /// Product name at checkout time (frozen).
    pub name_snapshot: String,
    /// Unit price at checkout time (frozen).
    pub unit_price: Money,
    /// Quantity purchased.
    pub quantity: i64,
    /// Line total (unit_price × quantity).
    pub line_total: Money,
}

impl OrderLine {
    /// Freezes a product's current name and price into an order line.
    ///
    /// If catalog data ever changed after checkout, past orders would keep
    /// displaying and summing what the customer actually paid.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        OrderLine {
            product_id: product.id.clone(),
            name_snapshot: product.name.clone(),
            unit_price: product.price,
            quantity,
            line_total: product.price.multiply_quantity(quantity),
        }
    }
}

/// Snapshot of a completed order.
///
/// Immutable once created. Identifiers are dense and strictly increasing
/// starting at 1, assigned as ledger length + 1 at append time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: u64,
    pub user_id: String,
    pub lines: Vec<OrderLine>,
    /// Pre-discount total.
    pub total_amount: Money,
    /// Discount code applied, if any.
    pub discount_code: Option<String>,
    /// Amount deducted by the discount (zero when no code was applied).
    pub discount_amount: Money,
    /// total_amount - discount_amount.
    pub final_amount: Money,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Total item units in this order.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Aggregate metrics folded from the order ledger.
/// What the admin dashboard sees.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stats {
    /// Number of completed orders.
    pub total_orders: u64,
    /// Sum of line quantities across all orders.
    pub total_items_purchased: i64,
    /// Sum of final amounts across all orders.
    pub total_purchase_amount: Money,
    /// Discount codes ever applied, in ledger order.
    pub discount_codes: Vec<String>,
    /// Total discount amount granted.
    pub total_discount_amount: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
