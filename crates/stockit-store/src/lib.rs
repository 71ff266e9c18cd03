//! # stockit-store: Session Data Layer for Stockit
//!
//! This crate provides the per-session caches and the stock receipt
//! verification workflow over the remote persistence service.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockit Data Flow                                │
//! │                                                                         │
//! │  UI action (verify button, branch filter, print receipt)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockit-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Stores     │    │ ReceiptStore  │    │  SalesStore  │  │   │
//! │  │   │ (stores.rs)   │───►│ (receipts.rs) │    │  (sales.rs)  │  │   │
//! │  │   │ session handle│    │ verify/reject │    │ filter/print │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────┬───────┘  │   │
//! │  │                                │                   │          │   │
//! │  │                         dyn InventoryGateway (gateway.rs)     │   │
//! │  └────────────────────────────────┬────────────────────────────────┘   │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     Remote persistence service                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`gateway`] - The abstract data-access trait and its error type
//! - [`receipts`] - Receipt cache + PENDING → {VERIFIED, REJECTED} workflow
//! - [`sales`] - Sales ledger cache, branch listings, printable receipts
//! - [`stores`] - The per-session handle grouping the sub-slices
//! - [`error`] - The error taxonomy surfaced to the UI layer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockit_store::{InventoryGateway, Stores};
//!
//! let gateway: Arc<dyn InventoryGateway> = Arc::new(HttpGateway::new(config));
//! let stores = Stores::new(gateway);
//!
//! stores.receipts().load().await?;
//! let verified = stores.receipts().verify(&receipt_id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gateway;
pub mod receipts;
pub mod sales;
pub mod stores;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use gateway::{GatewayError, GatewayResult, InventoryGateway};
pub use receipts::ReceiptStore;
pub use sales::SalesStore;
pub use stores::Stores;
