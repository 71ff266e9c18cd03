//! # Receipt Store & Verification Workflow
//!
//! The per-session cache of stock receipts plus the PENDING → {VERIFIED,
//! REJECTED} workflow over the gateway.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Verify / Reject Flow                                   │
//! │                                                                         │
//! │  1. ACQUIRE the receipt's in-flight lock                               │
//! │     └── serializes concurrent attempts on the SAME id; independent     │
//! │         receipts proceed concurrently                                  │
//! │                                                                         │
//! │  2. PRECHECK the cached status is Pending                              │
//! │     └── a terminal status fails fast with InvalidTransition            │
//! │                                                                         │
//! │  3. CALL the gateway (mark_verified / mark_rejected)                   │
//! │     └── the service performs the status change (and, for verify, the   │
//! │         stock increment) atomically, or fails leaving PENDING          │
//! │                                                                         │
//! │  4. PATCH the single cached record with the confirmed row              │
//! │     └── subsequent reads reflect the new status immediately; a stale   │
//! │         cached status after a confirmed transition is a correctness    │
//! │         bug                                                            │
//! │                                                                         │
//! │  Any failure between 2 and 4 leaves the cache byte-for-byte unchanged. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::gateway::InventoryGateway;
use stockit_core::types::{ReceiptStatus, StockReceipt};
use stockit_core::validation::validate_rejection_reason;

/// The session-side stock receipt store.
///
/// ## Thread Safety
/// - `cache` is an async `RwLock`: listings are frequent, mutations rare.
/// - `in_flight` maps receipt id → a lock held for the duration of a
///   transition. The map itself sits behind a std `Mutex` (held only to
///   look up/insert an entry, never across an await point). Entries live
///   for the session, which is discarded at logout, so the map is bounded
///   by the number of receipts ever transitioned.
pub struct ReceiptStore {
    gateway: Arc<dyn InventoryGateway>,
    cache: RwLock<Vec<StockReceipt>>,
    in_flight: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ReceiptStore {
    /// Creates an empty store over the given gateway.
    pub fn new(gateway: Arc<dyn InventoryGateway>) -> Self {
        ReceiptStore {
            gateway,
            cache: RwLock::new(Vec::new()),
            in_flight: StdMutex::new(HashMap::new()),
        }
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Fetches all receipts in the session's scope and replaces the cache.
    ///
    /// On failure the prior cache is left untouched and the error is
    /// surfaced; the caller shows an error state, never a crash.
    pub async fn load(&self) -> StoreResult<Vec<StockReceipt>> {
        debug!("loading stock receipts");
        let receipts = self.gateway.fetch_receipts().await?;

        info!(count = receipts.len(), "stock receipts loaded");
        let mut cache = self.cache.write().await;
        *cache = receipts.clone();
        Ok(receipts)
    }

    /// Returns the cached listing in ingestion order.
    pub async fn list(&self) -> Vec<StockReceipt> {
        self.cache.read().await.clone()
    }

    /// Looks up a single cached receipt.
    pub async fn get(&self, receipt_id: &str) -> Option<StockReceipt> {
        self.cache
            .read()
            .await
            .iter()
            .find(|r| r.id == receipt_id)
            .cloned()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Verifies a PENDING receipt.
    ///
    /// The stock quantity increase happens remotely as part of the same
    /// service call; from here the whole verification either succeeds or
    /// fails with the status still PENDING.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] - id not in the loaded listing
    /// - [`StoreError::InvalidTransition`] - receipt is not Pending (locally
    ///   cached or reported by the service)
    /// - [`StoreError::Fetch`] - transport/auth failure, cache unchanged
    pub async fn verify(&self, receipt_id: &str) -> StoreResult<StockReceipt> {
        let guard = self.transition_lock(receipt_id);
        let _held = guard.lock().await;

        self.precheck_pending(receipt_id).await?;

        debug!(receipt_id = %receipt_id, "verifying receipt");
        let confirmed = self.gateway.mark_verified(receipt_id).await?;

        if confirmed.status != ReceiptStatus::Verified {
            // The service confirmed the call but returned an unexpected row
            warn!(receipt_id = %receipt_id, status = ?confirmed.status, "verify returned non-verified status");
        }

        self.patch(&confirmed).await;
        info!(receipt_id = %receipt_id, code = %confirmed.display_code(), "receipt verified");
        Ok(confirmed)
    }

    /// Rejects a PENDING receipt with a reason.
    ///
    /// The reason arrives as a parameter - the workflow never assumes an
    /// interactive prompt exists, so headless callers and tests go through
    /// the same path. The reason is trimmed before validation and
    /// persistence.
    ///
    /// ## Errors
    /// - [`StoreError::Validation`] - empty/overlong reason; status stays
    ///   Pending and nothing is sent to the service
    /// - otherwise the same error set as [`verify`](Self::verify)
    pub async fn reject(&self, receipt_id: &str, reason: &str) -> StoreResult<StockReceipt> {
        let reason = reason.trim();
        validate_rejection_reason(reason)?;

        let guard = self.transition_lock(receipt_id);
        let _held = guard.lock().await;

        self.precheck_pending(receipt_id).await?;

        debug!(receipt_id = %receipt_id, "rejecting receipt");
        let confirmed = self.gateway.mark_rejected(receipt_id, reason).await?;

        if !confirmed.reason_consistent() {
            warn!(receipt_id = %receipt_id, "rejected receipt came back without a reason");
        }

        self.patch(&confirmed).await;
        info!(receipt_id = %receipt_id, code = %confirmed.display_code(), "receipt rejected");
        Ok(confirmed)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Returns the in-flight lock for a receipt id, creating it on first use.
    fn transition_lock(&self, receipt_id: &str) -> Arc<Mutex<()>> {
        let mut map = self
            .in_flight
            .lock()
            .expect("in-flight lock table poisoned");
        map.entry(receipt_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Checks the cached record is present and Pending.
    ///
    /// A second transition attempt that waited on the in-flight lock runs
    /// this check against the already-patched cache and fails here instead
    /// of silently overwriting.
    async fn precheck_pending(&self, receipt_id: &str) -> StoreResult<()> {
        let cache = self.cache.read().await;
        let receipt = cache
            .iter()
            .find(|r| r.id == receipt_id)
            .ok_or_else(|| StoreError::not_found("StockReceipt", receipt_id))?;
        receipt.ensure_pending()?;
        Ok(())
    }

    /// Replaces the single cached record with the service-confirmed row.
    async fn patch(&self, confirmed: &StockReceipt) {
        let mut cache = self.cache.write().await;
        if let Some(slot) = cache.iter_mut().find(|r| r.id == confirmed.id) {
            *slot = confirmed.clone();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
