//! # Test Doubles & Fixtures
//!
//! An in-memory [`InventoryGateway`] standing in for the remote service,
//! plus fixture builders shared by the store tests. The double enforces the
//! same server-side rules the real service does (status conflicts, unknown
//! ids), so the stores are exercised against realistic responses.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use uuid::Uuid;

use crate::gateway::{GatewayError, GatewayResult, InventoryGateway};
use stockit_core::money::Money;
use stockit_core::types::{
    PaymentMethod, ReceiptItem, ReceiptStatus, Sale, SaleItem, StockReceipt, SupplierRef,
};

// =============================================================================
// Fixtures
// =============================================================================

/// A PENDING receipt with one line item and a generated supplier.
pub fn pending_receipt(id: &str) -> StockReceipt {
    StockReceipt {
        id: id.to_string(),
        created_at: Utc::now(),
        supplier: Some(SupplierRef {
            name: format!("Supplier {}", Uuid::new_v4()),
        }),
        items: vec![ReceiptItem {
            product_id: Uuid::new_v4().to_string(),
            quantity: 3,
            unit_cost: Money::from_units(400),
        }],
        status: ReceiptStatus::Pending,
        rejection_reason: None,
    }
}

/// A sale with the reference line items (subtotal 2500), created
/// `minutes_ago` minutes in the past.
pub fn fixture_sale(id: &str, branch_id: &str, method: PaymentMethod, minutes_ago: i64) -> Sale {
    Sale {
        id: id.to_string(),
        branch_id: branch_id.to_string(),
        created_at: Utc::now() - ChronoDuration::minutes(minutes_ago),
        items: vec![
            SaleItem {
                product_id: Uuid::new_v4().to_string(),
                variant_name: None,
                price: Money::from_units(1000),
                quantity: 2,
            },
            SaleItem {
                product_id: Uuid::new_v4().to_string(),
                variant_name: Some("Standard".to_string()),
                price: Money::from_units(500),
                quantity: 1,
            },
        ],
        total_amount: Money::from_units(2500),
        payment_method: method,
        discount: None,
        paid_amount: None,
    }
}

// =============================================================================
// In-Memory Gateway
// =============================================================================

/// An in-memory stand-in for the remote persistence service.
pub struct InMemoryGateway {
    receipts: Mutex<Vec<StockReceipt>>,
    sales: Mutex<Vec<Sale>>,
    fail_fetches: AtomicBool,
    fail_mutations: AtomicBool,
    latency: Option<Duration>,
}

impl InMemoryGateway {
    pub fn with_receipts(receipts: Vec<StockReceipt>) -> Self {
        InMemoryGateway {
            receipts: Mutex::new(receipts),
            sales: Mutex::new(Vec::new()),
            fail_fetches: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            latency: None,
        }
    }

    pub fn with_sales(sales: Vec<Sale>) -> Self {
        InMemoryGateway {
            receipts: Mutex::new(Vec::new()),
            sales: Mutex::new(sales),
            fail_fetches: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            latency: None,
        }
    }

    /// Adds artificial latency to mutating calls, for interleaving tests.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes subsequent fetches fail with a transport error.
    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent mutations fail with a transport error.
    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn transition(
        &self,
        receipt_id: &str,
        to: ReceiptStatus,
        reason: Option<&str>,
    ) -> GatewayResult<StockReceipt> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("connection reset".to_string()));
        }

        let mut receipts = self.receipts.lock().expect("receipts fixture poisoned");
        let receipt = receipts
            .iter_mut()
            .find(|r| r.id == receipt_id)
            .ok_or_else(|| GatewayError::not_found("StockReceipt", receipt_id))?;

        // The service is the authority on the state machine
        if receipt.status != ReceiptStatus::Pending {
            return Err(GatewayError::Conflict {
                receipt_id: receipt_id.to_string(),
                status: receipt.status,
            });
        }

        receipt.status = to;
        receipt.rejection_reason = reason.map(str::to_string);
        Ok(receipt.clone())
    }
}

#[async_trait]
impl InventoryGateway for InMemoryGateway {
    async fn fetch_receipts(&self) -> GatewayResult<Vec<StockReceipt>> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(self.receipts.lock().expect("receipts fixture poisoned").clone())
    }

    async fn mark_verified(&self, receipt_id: &str) -> GatewayResult<StockReceipt> {
        self.simulate_latency().await;
        self.transition(receipt_id, ReceiptStatus::Verified, None)
    }

    async fn mark_rejected(&self, receipt_id: &str, reason: &str) -> GatewayResult<StockReceipt> {
        self.simulate_latency().await;
        self.transition(receipt_id, ReceiptStatus::Rejected, Some(reason))
    }

    async fn fetch_sales(&self) -> GatewayResult<Vec<Sale>> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(self.sales.lock().expect("sales fixture poisoned").clone())
    }
}
