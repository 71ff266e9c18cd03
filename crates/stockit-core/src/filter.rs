//! # Sales Listing Filter
//!
//! Filters a branch's sales by branch identity and optional payment method.
//!
//! ## Ordering
//! The listing screen shows most-recent-first. Rather than blindly
//! reversing ingestion order (which would make repeated filtering flip the
//! order back and forth), the filter orders by `created_at` descending with
//! a stable sort. For a chronologically ingested ledger that is exactly the
//! reversed ingestion order, and the operation is idempotent:
//! `filter_sales(filter_sales(s, b, m), b, m) == filter_sales(s, b, m)`.
//!
//! Pure, no I/O, safe on empty input.

use crate::types::{PaymentMethod, Sale};

/// Returns the sales for `branch_id`, optionally restricted to a payment
/// method, ordered most-recent-first.
///
/// ## Example
/// ```rust
/// use stockit_core::filter::filter_sales;
///
/// let none: Vec<stockit_core::types::Sale> = vec![];
/// assert!(filter_sales(&none, "branch-1", None).is_empty());
/// ```
pub fn filter_sales(
    sales: &[Sale],
    branch_id: &str,
    method: Option<PaymentMethod>,
) -> Vec<Sale> {
    let mut matching: Vec<Sale> = sales
        .iter()
        .filter(|sale| sale.branch_id == branch_id)
        .filter(|sale| method.map_or(true, |m| sale.payment_method == m))
        .cloned()
        .collect();

    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    matching
}

// =============================================================================
// Unit Tests
// =============================================================================
