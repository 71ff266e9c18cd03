//! # Printable Receipt Builder
//!
//! Turns a [`Sale`] into display-ready strings for the printable receipt
//! screen: short code, timestamp line, per-item lines, and the formatted
//! totals block. All monetary strings come from one [`CurrencyFormat`], so
//! a receipt never mixes symbols or grouping.
//!
//! Pure: composes the line aggregator and the money formatter, no I/O.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::money::CurrencyFormat;
use crate::totals::aggregate_lines;
use crate::types::{display_code, PaymentMethod, Sale};

// =============================================================================
// Receipt View
// =============================================================================

/// A single rendered line of the receipt body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    /// Item label: variant name when present, else the short product code.
    pub label: String,
    pub quantity: i64,
    /// Formatted unit price.
    pub unit_price: String,
    /// Formatted line total.
    pub line_total: String,
}

/// The fully rendered receipt, ready for the print layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    /// Short human code derived from the sale id. Display only.
    pub code: String,
    /// Formatted issue timestamp, e.g. `01 Feb 2026, 12:00`.
    pub issued_at: String,
    pub payment_method: PaymentMethod,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: String,
    /// Present only when the sale carried a discount.
    pub discount: Option<String>,
    pub total: String,
    /// Present only when a paid amount was recorded.
    pub paid: Option<String>,
    /// Present only when a paid amount was recorded; negative balances are
    /// rendered with the sign (change due).
    pub balance: Option<String>,
}

impl ReceiptView {
    /// Builds the printable view for a sale.
    ///
    /// Totals are recomputed from the line items through the aggregator
    /// rather than trusting pre-derived fields, so a receipt can never show
    /// numbers that disagree with its own lines.
    ///
    /// ## Errors
    /// Propagates the aggregator's [`ValidationError`](crate::error::ValidationError)
    /// for malformed discount/paid amounts.
    pub fn build(sale: &Sale, format: &CurrencyFormat) -> ValidationResult<ReceiptView> {
        let totals = aggregate_lines(&sale.items, sale.discount, sale.paid_amount)?;

        let lines = sale
            .items
            .iter()
            .map(|item| ReceiptLine {
                label: item
                    .variant_name
                    .clone()
                    .unwrap_or_else(|| display_code(&item.product_id)),
                quantity: item.quantity,
                unit_price: format.format(item.price),
                line_total: format.format(item.line_total()),
            })
            .collect();

        Ok(ReceiptView {
            code: sale.display_code(),
            issued_at: sale.created_at.format("%d %b %Y, %H:%M").to_string(),
            payment_method: sale.payment_method,
            lines,
            subtotal: format.format(totals.subtotal),
            discount: sale.discount.map(|d| format.format(d)),
            total: format.format(totals.total),
            paid: sale.paid_amount.map(|p| format.format(p)),
            balance: totals.balance.map(|b| format.format(b)),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
