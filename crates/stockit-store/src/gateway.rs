//! # Inventory Gateway
//!
//! The abstract data-access interface to the remote persistence service.
//!
//! ## The Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Gateway Boundary                                     │
//! │                                                                         │
//! │  ReceiptStore / SalesStore                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dyn InventoryGateway (THIS TRAIT)                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Concrete transport (HTTP client, outside this workspace)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Remote persistence service                                            │
//! │     GET  /receipts            → sequence of StockReceipt               │
//! │     PATCH /receipts/:id/verify                                         │
//! │     PATCH /receipts/:id/reject  { reason }                             │
//! │     GET  /sales               → sequence of Sale                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All entities are owned by the remote service; the in-process caches hold
//! copies with no authority. Verification is atomic from this side of the
//! seam: the service performs the inventory quantity increase together with
//! the status change, or the whole call fails and the status stays PENDING.
//!
//! Callers may impose their own timeout at this boundary; the stores do not.

use async_trait::async_trait;
use thiserror::Error;

use stockit_core::types::{ReceiptStatus, Sale, StockReceipt};

// =============================================================================
// Gateway Error
// =============================================================================

/// Failures reported by the remote service or its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network/transport failure (connection refused, timeout, 5xx).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The session is no longer authorized (expired token, revoked scope).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The identifier is unknown to the service.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The service refused a transition because the receipt is no longer
    /// PENDING on its side. Carries the authoritative status.
    #[error("receipt {receipt_id} is {status:?} on the server")]
    Conflict {
        receipt_id: String,
        status: ReceiptStatus,
    },
}

impl GatewayError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        GatewayError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

// =============================================================================
// Gateway Trait
// =============================================================================

/// The data-access interface consumed by the stores.
///
/// Implementations wrap the concrete transport (HTTP in production, an
/// in-memory double in tests). Mutating calls return the confirmed record
/// as persisted, which the stores apply to their caches verbatim.
#[async_trait]
pub trait InventoryGateway: Send + Sync {
    /// Fetches all stock receipts visible to the session's scope.
    ///
    /// Tenant/branch scoping is applied by the service from the session
    /// credentials, not by this interface.
    async fn fetch_receipts(&self) -> GatewayResult<Vec<StockReceipt>>;

    /// Marks a receipt VERIFIED, triggering the stock increment remotely.
    async fn mark_verified(&self, receipt_id: &str) -> GatewayResult<StockReceipt>;

    /// Marks a receipt REJECTED with the given reason.
    async fn mark_rejected(&self, receipt_id: &str, reason: &str) -> GatewayResult<StockReceipt>;

    /// Fetches all sales visible to the session's scope.
    async fn fetch_sales(&self) -> GatewayResult<Vec<Sale>>;
}

// =============================================================================
// Unit Tests
// =============================================================================
