//! # Error Types
//!
//! Domain-specific error types for stockit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockit-core errors (this file)                                       │
//! │  ├── ValidationError  - Bad caller input (empty reason, bad discount)  │
//! │  └── TransitionError  - Receipt status machine violations              │
//! │                                                                         │
//! │  stockit-store errors (separate crate)                                 │
//! │  ├── GatewayError     - Remote service transport/auth failures         │
//! │  └── StoreError       - What the UI layer sees                         │
//! │                                                                         │
//! │  Flow: ValidationError/TransitionError → StoreError → UI notice        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (receipt id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::money::Money;
use crate::types::ReceiptStatus;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before any mutation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    ///
    /// ## When This Occurs
    /// - Rejecting a receipt with an empty (or whitespace-only) reason
    /// - Creating a branch/category with a blank name
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A monetary amount that must be non-negative is negative.
    ///
    /// ## When This Occurs
    /// - Negative discount passed to the line aggregator
    /// - Negative paid amount passed to the line aggregator
    #[error("{field} must not be negative")]
    NegativeAmount { field: String },

    /// Discount exceeds the subtotal it applies to.
    ///
    /// A sale can be discounted to free, never below zero.
    #[error("discount {discount} exceeds subtotal {subtotal}")]
    DiscountExceedsSubtotal { discount: Money, subtotal: Money },

    /// A line item quantity must be positive.
    #[error("quantity must be positive, got {quantity}")]
    NonPositiveQuantity { quantity: i64 },
}

// =============================================================================
// Transition Error
// =============================================================================

/// A receipt status transition that the state machine forbids.
///
/// ## The State Machine
/// ```text
/// PENDING ──verify──► VERIFIED (terminal)
///    │
///    └────reject────► REJECTED (terminal)
/// ```
/// No transition is defined out of VERIFIED or REJECTED. Any attempt
/// produces this error and leaves the receipt untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("receipt {receipt_id} is {from:?}, only PENDING receipts can transition")]
pub struct TransitionError {
    /// The receipt whose transition was refused.
    pub receipt_id: String,
    /// The status the receipt was observed in.
    pub from: ReceiptStatus,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
