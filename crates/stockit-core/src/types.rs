//! # Domain Types
//!
//! Core domain types used throughout Stockit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StockReceipt   │   │      Sale       │   │     Branch      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  id (opaque)    │   │  id (opaque)    │       │
//! │  │  supplier       │   │  branch_id (FK) │   │  name           │       │
//! │  │  items[]        │   │  items[]        │   │  address        │       │
//! │  │  status         │   │  total_amount   │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ReceiptStatus  │   │ PaymentMethod   │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Pending        │   │  Cash           │   │  id (opaque)    │       │
//! │  │  Verified       │   │  Pos            │   │  name           │       │
//! │  │  Rejected       │   │  Transfer       │   └─────────────────┘       │
//! │  └─────────────────┘   │  Other          │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries an opaque string id minted by the remote service.
//! Display code derives a short human code ([`display_code`]) by uppercasing
//! the last 8 characters - that derived code is for display only and must
//! never be used as a lookup key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::TransitionError;
use crate::money::Money;

// =============================================================================
// Display Code
// =============================================================================

/// Derives the short human-readable code shown on screens and printouts.
///
/// ## Example
/// ```rust
/// use stockit_core::types::display_code;
///
/// assert_eq!(display_code("64f1a2b3c4d5e6f7a8b9c0d1"), "A8B9C0D1");
/// assert_eq!(display_code("abc"), "ABC");
/// ```
pub fn display_code(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(8);
    chars[start..].iter().collect::<String>().to_uppercase()
}

// =============================================================================
// Receipt Status
// =============================================================================

/// The status of a stock receipt.
///
/// The wire protocol uses upper-case strings (`"PENDING"`, `"VERIFIED"`,
/// `"REJECTED"`); invalid strings fail deserialization instead of leaking
/// into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReceiptStatus {
    /// Awaiting verification by an operator.
    Pending,
    /// Verified; stock quantities have been incremented. Terminal.
    Verified,
    /// Rejected with a recorded reason. Terminal.
    Rejected,
}

impl ReceiptStatus {
    /// Whether this status admits no further transitions.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ReceiptStatus::Verified | ReceiptStatus::Rejected)
    }

    /// Whether the state machine defines a transition to `next`.
    ///
    /// Only `Pending → Verified` and `Pending → Rejected` exist.
    pub const fn can_transition_to(&self, next: ReceiptStatus) -> bool {
        matches!(
            (self, next),
            (ReceiptStatus::Pending, ReceiptStatus::Verified)
                | (ReceiptStatus::Pending, ReceiptStatus::Rejected)
        )
    }
}

impl Default for ReceiptStatus {
    fn default() -> Self {
        ReceiptStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid. Upper-case strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on a POS terminal.
    Pos,
    /// Bank transfer.
    Transfer,
    /// Anything else (store credit, mixed tender, ...).
    Other,
}

// =============================================================================
// Stock Receipt
// =============================================================================

/// The supplier reference populated onto a receipt by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierRef {
    /// Supplier display name.
    pub name: String,
}

/// A line item on a stock receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// Product reference (opaque id).
    pub product_id: String,
    /// Quantity received.
    pub quantity: i64,
    /// Cost per unit in whole currency units.
    pub unit_cost: Money,
}

impl ReceiptItem {
    /// Line cost (unit cost × quantity).
    #[inline]
    pub fn line_cost(&self) -> Money {
        self.unit_cost.multiply_quantity(self.quantity)
    }
}

/// A stock receipt awaiting (or past) verification.
///
/// ## Invariants
/// - Status transitions are one-directional from [`ReceiptStatus::Pending`];
///   Verified and Rejected are terminal.
/// - `rejection_reason` is present iff status is Rejected.
/// - Created by the external receiving workflow, mutated only through the
///   verify/reject operations, never deleted through this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockReceipt {
    /// Opaque identifier minted by the remote service.
    #[serde(rename = "_id")]
    pub id: String,

    /// When the receipt was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Populated supplier reference, when one was recorded.
    #[serde(rename = "supplierId")]
    pub supplier: Option<SupplierRef>,

    /// Ordered line items received.
    pub items: Vec<ReceiptItem>,

    /// Current verification status.
    pub status: ReceiptStatus,

    /// Why the receipt was rejected. Present iff status is Rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

impl StockReceipt {
    /// Short human code for screens and printouts. Display only.
    #[inline]
    pub fn display_code(&self) -> String {
        display_code(&self.id)
    }

    /// Total cost across all line items.
    pub fn total_cost(&self) -> Money {
        self.items.iter().map(ReceiptItem::line_cost).sum()
    }

    /// Checks the precondition shared by verify and reject.
    ///
    /// Returns a [`TransitionError`] carrying the observed status when the
    /// receipt is no longer Pending.
    pub fn ensure_pending(&self) -> Result<(), TransitionError> {
        if self.status == ReceiptStatus::Pending {
            Ok(())
        } else {
            Err(TransitionError {
                receipt_id: self.id.clone(),
                from: self.status,
            })
        }
    }

    /// Whether the rejection-reason invariant holds for this record.
    pub fn reason_consistent(&self) -> bool {
        match self.status {
            ReceiptStatus::Rejected => self.rejection_reason.is_some(),
            _ => self.rejection_reason.is_none(),
        }
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    /// Product reference (opaque id).
    pub product_id: String,
    /// Variant name shown on the receipt, when the product has variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,
    /// Unit price in whole currency units.
    pub price: Money,
    /// Quantity sold.
    pub quantity: i64,
}

impl SaleItem {
    /// Line total (price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// A sale from the append-only sales ledger.
///
/// ## Invariants
/// - `total_amount == Σ(price × quantity) - discount` (discount defaults 0).
/// - `paid_amount`, when present, is non-negative; balance is
///   `total - paid` and may be negative for overpayment.
/// - Immutable once created; only read in this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Opaque identifier minted by the remote service.
    #[serde(rename = "_id")]
    pub id: String,

    /// Branch the sale was made at (foreign key, never embedded).
    pub branch_id: String,

    /// When the sale was recorded.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Ordered line items.
    pub items: Vec<SaleItem>,

    /// Ledger total in whole currency units.
    pub total_amount: Money,

    /// How the sale was paid.
    pub payment_method: PaymentMethod,

    /// Discount applied across the sale, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Money>,

    /// Amount the customer paid, when recorded separately from the total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<Money>,
}

impl Sale {
    /// Short human code for screens and printouts. Display only.
    #[inline]
    pub fn display_code(&self) -> String {
        display_code(&self.id)
    }

    /// Subtotal across line items, before discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(SaleItem::line_total).sum()
    }
}

// =============================================================================
// Branch & Category
// =============================================================================

/// A branch of the tenant's business.
///
/// Referenced by [`Sale`] and [`StockReceipt`] via foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
}

/// A product category.
///
/// Deleting a category must not cascade to referencing products; they fall
/// back to [`Category::UNCATEGORIZED`] for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Category {
    /// Display name for products whose category was deleted.
    pub const UNCATEGORIZED: &'static str = "Uncategorized";
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_code_last_eight_uppercased() {
        assert_eq!(display_code("64f1a2b3c4d5e6f7a8b9c0d1"), "A8B9C0D1");
        // Shorter than eight characters: the whole id, uppercased
        assert_eq!(display_code("ab12"), "AB12");
        assert_eq!(display_code(""), "");
    }

    #[test]
    fn test_receipt_status_transitions() {
        use ReceiptStatus::*;

        assert!(Pending.can_transition_to(Verified));
        assert!(Pending.can_transition_to(Rejected));

        // Terminal states admit nothing
        for terminal in [Verified, Rejected] {
            assert!(terminal.is_terminal());
            for next in [Pending, Verified, Rejected] {
                assert!(!terminal.can_transition_to(next));
            }
        }

        // Pending is not terminal and can't "transition" to itself
        assert!(!Pending.is_terminal());
        assert!(!Pending.can_transition_to(Pending));
    }

    #[test]
    fn test_receipt_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ReceiptStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let status: ReceiptStatus = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(status, ReceiptStatus::Rejected);

        // Invalid status strings are rejected at the type level
        assert!(serde_json::from_str::<ReceiptStatus>("\"pending\"").is_err());
    }

    #[test]
    fn test_payment_method_wire_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Pos).unwrap(),
            "\"POS\""
        );
        let method: PaymentMethod = serde_json::from_str("\"TRANSFER\"").unwrap();
        assert_eq!(method, PaymentMethod::Transfer);
    }

    #[test]
    fn test_receipt_deserializes_wire_shape() {
        let json = r#"{
            "_id": "64f1a2b3c4d5e6f7a8b9c0d1",
            "createdAt": "2026-01-15T09:30:00Z",
            "supplierId": { "name": "Acme Distributors" },
            "items": [
                { "productId": "p1", "quantity": 4, "unitCost": 1200 }
            ],
            "status": "PENDING"
        }"#;

        let receipt: StockReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.display_code(), "A8B9C0D1");
        assert_eq!(receipt.supplier.as_ref().unwrap().name, "Acme Distributors");
        assert_eq!(receipt.status, ReceiptStatus::Pending);
        assert_eq!(receipt.rejection_reason, None);
        assert_eq!(receipt.total_cost(), Money::from_units(4800));
        assert!(receipt.reason_consistent());
    }

    #[test]
    fn test_sale_deserializes_wire_shape() {
        let json = r#"{
            "_id": "64aa00000000000011112222",
            "branchId": "branch-1",
            "createdAt": "2026-02-01T12:00:00Z",
            "items": [
                { "productId": "p1", "price": 1000, "quantity": 2 },
                { "productId": "p2", "variantName": "Large", "price": 500, "quantity": 1 }
            ],
            "totalAmount": 2300,
            "paymentMethod": "CASH",
            "discount": 200,
            "paidAmount": 2000
        }"#;

        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.subtotal(), Money::from_units(2500));
        assert_eq!(sale.total_amount, Money::from_units(2300));
        assert_eq!(sale.discount, Some(Money::from_units(200)));
        assert_eq!(sale.items[1].variant_name.as_deref(), Some("Large"));
    }

    #[test]
    fn test_ensure_pending() {
        let mut receipt = StockReceipt {
            id: "r1".to_string(),
            created_at: Utc::now(),
            supplier: None,
            items: vec![],
            status: ReceiptStatus::Pending,
            rejection_reason: None,
        };
        assert!(receipt.ensure_pending().is_ok());

        receipt.status = ReceiptStatus::Verified;
        let err = receipt.ensure_pending().unwrap_err();
        assert_eq!(err.from, ReceiptStatus::Verified);
        assert_eq!(err.receipt_id, "r1");
    }

    #[test]
    fn test_reason_consistency() {
        let mut receipt = StockReceipt {
            id: "r1".to_string(),
            created_at: Utc::now(),
            supplier: None,
            items: vec![],
            status: ReceiptStatus::Rejected,
            rejection_reason: Some("Damaged goods".to_string()),
        };
        assert!(receipt.reason_consistent());

        receipt.rejection_reason = None;
        assert!(!receipt.reason_consistent());
    }
}
