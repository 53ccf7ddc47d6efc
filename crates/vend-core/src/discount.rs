//! # Milestone Discount Trigger
//!
//! Pure evaluation of the "every Nth order" rule: once the order counter hits
//! a multiple of the milestone interval, a new one-time discount code becomes
//! available for issuance.
//!
//! The code string is a deterministic function of the counter value, so
//! re-evaluating at the same counter yields the same code. The registry's
//! issue semantics decide what that means (it overwrites).

/// Evaluates the milestone rule against the current order counter.
///
/// Fires iff `order_count > 0 && order_count % milestone == 0`. A milestone
/// of zero never fires; misconfiguration must not panic the core.
///
/// ## Example
/// ```rust
/// use vend_core::discount::milestone_code;
///
/// assert_eq!(milestone_code(2, 3, "DISCOUNT10-"), None);
/// assert_eq!(milestone_code(3, 3, "DISCOUNT10-"), Some("DISCOUNT10-3".to_string()));
/// ```
pub fn milestone_code(order_count: u64, milestone: u64, prefix: &str) -> Option<String> {
    if milestone == 0 || order_count == 0 {
        return None;
    }
    if order_count % milestone != 0 {
        return None;
    }
    Some(format!("{}{}", prefix, order_count))
}
