//! # Session Store Handle
//!
//! The explicit application-state handle that replaces an ambient global
//! context: one value owning the per-session sub-slices, each with its own
//! fetch/mutate interface, so the workflow components stay independently
//! testable.
//!
//! The handle is owned by the current session and discarded at logout;
//! nothing here outlives it.

use std::sync::Arc;

use crate::gateway::InventoryGateway;
use crate::receipts::ReceiptStore;
use crate::sales::SalesStore;

/// The per-session store handle.
///
/// ## Usage
/// ```rust,ignore
/// let stores = Stores::new(gateway);
/// stores.receipts().load().await?;
/// let verified = stores.receipts().verify(&id).await?;
/// let listing = stores.sales().list_for_branch(&branch_id, None).await;
/// ```
pub struct Stores {
    receipts: ReceiptStore,
    sales: SalesStore,
}

impl Stores {
    /// Creates the session stores over one shared gateway.
    pub fn new(gateway: Arc<dyn InventoryGateway>) -> Self {
        Stores {
            receipts: ReceiptStore::new(gateway.clone()),
            sales: SalesStore::new(gateway),
        }
    }

    /// The stock receipt slice (verification workflow).
    pub fn receipts(&self) -> &ReceiptStore {
        &self.receipts
    }

    /// The sales slice (ledger listings, printable receipts).
    pub fn sales(&self) -> &SalesStore {
        &self.sales
    }
}

// =============================================================================
// End-to-End Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::testing::{pending_receipt, InMemoryGateway};
    use stockit_core::types::ReceiptStatus;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("stockit_store=debug")
            .with_test_writer()
            .try_init();
    }

    #[tokio::test]
    async fn test_three_receipt_scenario() {
        // Given three PENDING receipts R1, R2, R3:
        //  - verifying R1 yields VERIFIED with R2, R3 unchanged
        //  - rejecting R2 with "Damaged goods" yields REJECTED + reason
        //  - re-fetching the listing shows [VERIFIED, REJECTED, PENDING]
        //    in original order
        init_tracing();

        let gateway = Arc::new(InMemoryGateway::with_receipts(vec![
            pending_receipt("r1"),
            pending_receipt("r2"),
            pending_receipt("r3"),
        ]));
        let stores = Stores::new(gateway);
        stores.receipts().load().await.unwrap();

        let r1 = stores.receipts().verify("r1").await.unwrap();
        assert_eq!(r1.status, ReceiptStatus::Verified);
        assert_eq!(
            stores.receipts().get("r2").await.unwrap().status,
            ReceiptStatus::Pending
        );
        assert_eq!(
            stores.receipts().get("r3").await.unwrap().status,
            ReceiptStatus::Pending
        );

        let r2 = stores.receipts().reject("r2", "Damaged goods").await.unwrap();
        assert_eq!(r2.status, ReceiptStatus::Rejected);
        assert_eq!(r2.rejection_reason.as_deref(), Some("Damaged goods"));

        // Re-fetch: the service agrees with the session's view
        let listing = stores.receipts().load().await.unwrap();
        let statuses: Vec<ReceiptStatus> = listing.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                ReceiptStatus::Verified,
                ReceiptStatus::Rejected,
                ReceiptStatus::Pending,
            ]
        );
        let ids: Vec<&str> = listing.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[tokio::test]
    async fn test_slices_share_one_gateway() {
        let gateway = Arc::new(InMemoryGateway::with_receipts(vec![pending_receipt("r1")]));
        let stores = Stores::new(gateway);

        assert_eq!(stores.receipts().load().await.unwrap().len(), 1);
        assert!(stores.sales().load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_transition_then_user_retry_succeeds() {
        // No automatic retry: the failed attempt changes nothing, and a
        // user-initiated repeat of the action goes through
        let gateway = Arc::new(InMemoryGateway::with_receipts(vec![pending_receipt("r1")]));
        let stores = Stores::new(gateway.clone());
        stores.receipts().load().await.unwrap();

        gateway.fail_mutations(true);
        assert!(matches!(
            stores.receipts().verify("r1").await.unwrap_err(),
            StoreError::Fetch(_)
        ));

        gateway.fail_mutations(false);
        let verified = stores.receipts().verify("r1").await.unwrap();
        assert_eq!(verified.status, ReceiptStatus::Verified);
    }
}
