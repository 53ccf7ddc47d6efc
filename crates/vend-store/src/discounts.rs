//! # Discount Registry
//!
//! The set of currently-redeemable discount codes. Presence IS
//! redeemability: redeeming removes the entry entirely, so a used code and a
//! never-issued code are indistinguishable afterwards.

use std::collections::HashMap;

use vend_core::{CoreError, CoreResult, DiscountCode};

/// Owns the redeemable code set.
#[derive(Debug, Default)]
pub struct DiscountRegistry {
    codes: HashMap<String, DiscountCode>,
}

impl DiscountRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        DiscountRegistry::default()
    }

    /// True iff the code is currently redeemable.
    pub fn is_redeemable(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    /// Inserts a new redeemable code, overwriting any prior entry with the
    /// same string. Codes are generated deterministically from the order
    /// counter, so re-triggering at the same counter reissues the same code.
    pub fn issue(&mut self, code: &str) -> &DiscountCode {
        self.codes.insert(code.to_string(), DiscountCode::new(code));
        &self.codes[code]
    }

    /// Redeems a code: a single atomic check-and-remove. This is the sole
    /// way a code's lifetime ends before process restart.
    pub fn redeem(&mut self, code: &str) -> CoreResult<DiscountCode> {
        self.codes
            .remove(code)
            .ok_or_else(|| CoreError::InvalidDiscountCode(code.to_string()))
    }

    /// Number of currently-redeemable codes.
    pub fn active_count(&self) -> usize {
        self.codes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_makes_redeemable() {
        let mut registry = DiscountRegistry::new();
        assert!(!registry.is_redeemable("DISCOUNT10-5"));

        registry.issue("DISCOUNT10-5");
        assert!(registry.is_redeemable("DISCOUNT10-5"));
        assert_eq!(registry.active_count(), 1);
    }

    #[test]
    fn test_redeem_is_single_use() {
        let mut registry = DiscountRegistry::new();
        registry.issue("DISCOUNT10-5");

        let redeemed = registry.redeem("DISCOUNT10-5").unwrap();
        assert_eq!(redeemed.code, "DISCOUNT10-5");

        // Gone - a second redemption fails
        assert!(!registry.is_redeemable("DISCOUNT10-5"));
        let err = registry.redeem("DISCOUNT10-5").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDiscountCode(_)));
    }

    #[test]
    fn test_redeem_unknown_code_fails() {
        let mut registry = DiscountRegistry::new();
        let err = registry.redeem("FAKE").unwrap_err();
        assert!(matches!(err, CoreError::InvalidDiscountCode(_)));
    }

    #[test]
    fn test_reissue_overwrites() {
        let mut registry = DiscountRegistry::new();
        let first_issued_at = registry.issue("DISCOUNT10-5").issued_at;
        registry.issue("DISCOUNT10-5");

        assert_eq!(registry.active_count(), 1);
        assert!(registry.is_redeemable("DISCOUNT10-5"));
        // Still one code; the entry was replaced, not duplicated
        let reissued = registry.redeem("DISCOUNT10-5").unwrap();
        assert!(reissued.issued_at >= first_issued_at);
    }
}
