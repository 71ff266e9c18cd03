//! # Sales Store
//!
//! The per-session cache of the append-only sales ledger: load, branch
//! filtering, and printable receipt views. Sales are immutable once
//! created, so this store only ever reads.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::gateway::InventoryGateway;
use stockit_core::filter::filter_sales;
use stockit_core::money::CurrencyFormat;
use stockit_core::receipt::ReceiptView;
use stockit_core::types::{PaymentMethod, Sale};

/// The session-side sales store.
pub struct SalesStore {
    gateway: Arc<dyn InventoryGateway>,
    cache: RwLock<Vec<Sale>>,
}

impl SalesStore {
    /// Creates an empty store over the given gateway.
    pub fn new(gateway: Arc<dyn InventoryGateway>) -> Self {
        SalesStore {
            gateway,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Fetches all sales in the session's scope and replaces the cache.
    ///
    /// Same failure contract as the receipt store: on error the prior
    /// cache is untouched and the error surfaces.
    pub async fn load(&self) -> StoreResult<Vec<Sale>> {
        debug!("loading sales");
        let sales = self.gateway.fetch_sales().await?;

        info!(count = sales.len(), "sales loaded");
        let mut cache = self.cache.write().await;
        *cache = sales.clone();
        Ok(sales)
    }

    /// Returns the cached ledger in ingestion order.
    pub async fn list(&self) -> Vec<Sale> {
        self.cache.read().await.clone()
    }

    /// Returns a branch's sales, optionally restricted to a payment method,
    /// most-recent-first.
    pub async fn list_for_branch(
        &self,
        branch_id: &str,
        method: Option<PaymentMethod>,
    ) -> Vec<Sale> {
        let cache = self.cache.read().await;
        filter_sales(&cache, branch_id, method)
    }

    /// Builds the printable receipt view for a cached sale.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] - the sale is not in the loaded ledger
    /// - [`StoreError::Validation`] - the sale's discount/paid fields fail
    ///   the aggregator's checks
    pub async fn receipt_view(
        &self,
        sale_id: &str,
        format: &CurrencyFormat,
    ) -> StoreResult<ReceiptView> {
        let cache = self.cache.read().await;
        let sale = cache
            .iter()
            .find(|s| s.id == sale_id)
            .ok_or_else(|| StoreError::not_found("Sale", sale_id))?;

        Ok(ReceiptView::build(sale, format)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
