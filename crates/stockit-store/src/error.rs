//! # Store Error Types
//!
//! The error taxonomy surfaced to the UI layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  GatewayError (transport, auth, not-found, conflict)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← plus local validation/transition checks    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI layer displays a human-readable failure notice                     │
//! │                                                                         │
//! │  Nothing here retries automatically: a retry, if any, is the user      │
//! │  repeating the action. Every failed mutation leaves previously         │
//! │  displayed state unchanged.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::gateway::GatewayError;
use stockit_core::error::{TransitionError, ValidationError};
use stockit_core::types::ReceiptStatus;

/// Errors surfaced by the stores, propagated to the invoking UI layer
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Bad caller input (empty rejection reason, negative discount).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The receipt is not in the PENDING state.
    ///
    /// ## When This Occurs
    /// - Verifying or rejecting an already-terminal receipt
    /// - A concurrent attempt committed first (observed locally or
    ///   reported by the service as a conflict)
    #[error("receipt {receipt_id} is {status:?}, only PENDING receipts can be verified or rejected")]
    InvalidTransition {
        receipt_id: String,
        status: ReceiptStatus,
    },

    /// The identifier is unknown.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Transport/network/auth failure from the data-access interface.
    #[error("fetch failed: {0}")]
    Fetch(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// The core state machine refusal maps onto the UI-facing taxonomy.
impl From<TransitionError> for StoreError {
    fn from(err: TransitionError) -> Self {
        StoreError::InvalidTransition {
            receipt_id: err.receipt_id,
            status: err.from,
        }
    }
}

/// Convert gateway errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// GatewayError::Transport     → StoreError::Fetch
/// GatewayError::Unauthorized  → StoreError::Fetch
/// GatewayError::NotFound      → StoreError::NotFound
/// GatewayError::Conflict      → StoreError::InvalidTransition
/// ```
impl From<GatewayError> for StoreError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport(msg) => StoreError::Fetch(msg),
            GatewayError::Unauthorized(msg) => StoreError::Fetch(format!("unauthorized: {msg}")),
            GatewayError::NotFound { entity, id } => StoreError::NotFound { entity, id },
            GatewayError::Conflict { receipt_id, status } => {
                StoreError::InvalidTransition { receipt_id, status }
            }
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
