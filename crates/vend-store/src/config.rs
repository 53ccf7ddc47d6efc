//! # Store Configuration
//!
//! Configuration loaded once at process start.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VEND_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use vend_core::{DiscountRate, DEFAULT_MILESTONE_INTERVAL, DISCOUNT_CODE_PREFIX};

/// Store configuration.
///
/// The discount policy lives here rather than as literals in the checkout
/// path, so test suites can run with small milestones and different rates
/// without code changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Milestone interval: a new discount code becomes available every
    /// Nth order.
    pub milestone_n: u64,

    /// Percentage applied when a code is redeemed at checkout.
    pub discount_rate: DiscountRate,

    /// Prefix for generated code strings; the order counter is appended.
    pub code_prefix: String,
}

impl Default for StoreConfig {
    /// Returns the production defaults: every 5th order unlocks a 10% code.
    fn default() -> Self {
        StoreConfig {
            milestone_n: DEFAULT_MILESTONE_INTERVAL,
            discount_rate: DiscountRate::default(),
            code_prefix: DISCOUNT_CODE_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VEND_NTH_ORDER`: Override the milestone interval (e.g., "3")
    /// - `VEND_DISCOUNT_RATE`: Override the rate as a percentage (e.g., "10")
    /// - `VEND_CODE_PREFIX`: Override the generated-code prefix
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(n_str) = std::env::var("VEND_NTH_ORDER") {
            if let Ok(n) = n_str.parse::<u64>() {
                config.milestone_n = n;
            }
        }

        if let Ok(rate_str) = std::env::var("VEND_DISCOUNT_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.discount_rate = DiscountRate::from_percentage(rate);
            }
        }

        if let Ok(prefix) = std::env::var("VEND_CODE_PREFIX") {
            config.code_prefix = prefix;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.milestone_n, 5);
        assert_eq!(config.discount_rate.bps(), 1000);
        assert_eq!(config.code_prefix, "DISCOUNT10-");
    }
}
