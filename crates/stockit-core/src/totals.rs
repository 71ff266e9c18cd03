//! # Receipt Line Aggregator
//!
//! Computes subtotal, discounted total, and outstanding balance from a
//! sale's line items.
//!
//! ## Aggregation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Totals Pipeline                                    │
//! │                                                                         │
//! │  items [{price, quantity}, ...]                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  subtotal = Σ(price × quantity)        exact i64 arithmetic            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = subtotal - discount           discount ∈ [0, subtotal]        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  balance = total - paid                paid ≥ 0; overpayment yields    │
//! │                                        a negative balance              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This module is pure: no I/O, no side effects, identical inputs always
//! yield identical outputs. It is safe to call on every render.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::SaleItem;

// =============================================================================
// Sale Totals
// =============================================================================

/// The derived monetary summary of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleTotals {
    /// Sum of line totals before discount.
    pub subtotal: Money,
    /// Subtotal minus discount.
    pub total: Money,
    /// `total - paid` when a paid amount was recorded.
    ///
    /// Negative means the customer overpaid; the caller decides how to
    /// display that (change due vs. credit).
    pub balance: Option<Money>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Aggregates sale line items into [`SaleTotals`].
///
/// ## Arguments
/// * `items` - ordered line items (`price`, `quantity` pairs)
/// * `discount` - optional whole-sale discount, defaults to zero
/// * `paid` - optional amount the customer paid
///
/// ## Errors
/// - [`ValidationError::NonPositiveQuantity`] for a zero/negative quantity
/// - [`ValidationError::NegativeAmount`] for a negative discount or payment
/// - [`ValidationError::DiscountExceedsSubtotal`] when the discount is
///   larger than the subtotal it applies to
///
/// ## Example
/// ```rust
/// use stockit_core::money::Money;
/// use stockit_core::totals::aggregate_lines;
/// use stockit_core::types::SaleItem;
///
/// let items = vec![
///     SaleItem { product_id: "p1".into(), variant_name: None, price: Money::from_units(1000), quantity: 2 },
///     SaleItem { product_id: "p2".into(), variant_name: None, price: Money::from_units(500), quantity: 1 },
/// ];
///
/// let totals = aggregate_lines(
///     &items,
///     Some(Money::from_units(200)),
///     Some(Money::from_units(2000)),
/// ).unwrap();
///
/// assert_eq!(totals.subtotal.units(), 2500);
/// assert_eq!(totals.total.units(), 2300);
/// assert_eq!(totals.balance.unwrap().units(), 300);
/// ```
pub fn aggregate_lines(
    items: &[SaleItem],
    discount: Option<Money>,
    paid: Option<Money>,
) -> ValidationResult<SaleTotals> {
    let mut subtotal = Money::zero();
    for item in items {
        if item.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity {
                quantity: item.quantity,
            });
        }
        subtotal += item.line_total();
    }

    let discount = discount.unwrap_or_default();
    if discount.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: "discount".to_string(),
        });
    }
    if discount > subtotal {
        return Err(ValidationError::DiscountExceedsSubtotal { discount, subtotal });
    }

    let total = subtotal - discount;

    let balance = match paid {
        Some(paid) if paid.is_negative() => {
            return Err(ValidationError::NegativeAmount {
                field: "paidAmount".to_string(),
            });
        }
        Some(paid) => Some(total - paid),
        None => None,
    };

    Ok(SaleTotals {
        subtotal,
        total,
        balance,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: i64, quantity: i64) -> SaleItem {
        SaleItem {
            product_id: "p".to_string(),
            variant_name: None,
            price: Money::from_units(price),
            quantity,
        }
    }

    #[test]
    fn test_reference_round_trip() {
        // [{price:1000, qty:2}, {price:500, qty:1}], discount 200
        let items = vec![item(1000, 2), item(500, 1)];
        let totals = aggregate_lines(&items, Some(Money::from_units(200)), None).unwrap();
        assert_eq!(totals.subtotal, Money::from_units(2500));
        assert_eq!(totals.total, Money::from_units(2300));
        assert_eq!(totals.balance, None);

        // With paidAmount 2000 the outstanding balance is 300
        let totals = aggregate_lines(
            &items,
            Some(Money::from_units(200)),
            Some(Money::from_units(2000)),
        )
        .unwrap();
        assert_eq!(totals.balance, Some(Money::from_units(300)));
    }

    #[test]
    fn test_discount_defaults_to_zero() {
        let items = vec![item(1000, 2)];
        let totals = aggregate_lines(&items, None, None).unwrap();
        assert_eq!(totals.subtotal, totals.total);
    }

    #[test]
    fn test_discount_exceeding_subtotal_rejected() {
        let items = vec![item(1000, 2), item(500, 1)];
        let err = aggregate_lines(&items, Some(Money::from_units(3000)), None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DiscountExceedsSubtotal {
                discount: Money::from_units(3000),
                subtotal: Money::from_units(2500),
            }
        );
    }

    #[test]
    fn test_discount_equal_to_subtotal_allowed() {
        // Discounting to free is legal; below zero is not
        let items = vec![item(1000, 1)];
        let totals = aggregate_lines(&items, Some(Money::from_units(1000)), None).unwrap();
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_negative_discount_rejected() {
        let items = vec![item(1000, 1)];
        let err = aggregate_lines(&items, Some(Money::from_units(-1)), None).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { ref field } if field == "discount"));
    }

    #[test]
    fn test_negative_payment_rejected() {
        let items = vec![item(1000, 1)];
        let err = aggregate_lines(&items, None, Some(Money::from_units(-50))).unwrap_err();
        assert!(
            matches!(err, ValidationError::NegativeAmount { ref field } if field == "paidAmount")
        );
    }

    #[test]
    fn test_overpayment_yields_negative_balance() {
        let items = vec![item(1000, 1)];
        let totals = aggregate_lines(&items, None, Some(Money::from_units(1500))).unwrap();
        assert_eq!(totals.balance, Some(Money::from_units(-500)));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        let items = vec![item(1000, 0)];
        let err = aggregate_lines(&items, None, None).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity { quantity: 0 });
    }

    #[test]
    fn test_empty_items_zero_subtotal() {
        let totals = aggregate_lines(&[], None, None).unwrap();
        assert_eq!(totals.subtotal, Money::zero());
        assert_eq!(totals.total, Money::zero());
    }

    #[test]
    fn test_idempotent_over_repeated_calls() {
        // Called on every render - must be referentially transparent
        let items = vec![item(750, 4), item(120, 3)];
        let first = aggregate_lines(&items, Some(Money::from_units(60)), None).unwrap();
        let second = aggregate_lines(&items, Some(Money::from_units(60)), None).unwrap();
        assert_eq!(first, second);
    }
}
