//! # stockit-core: Pure Business Logic for Stockit
//!
//! This crate is the **heart** of Stockit. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Web Frontend                              │   │
//! │  │    Receipts UI ──► Sales UI ──► Printable Receipt              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              stockit-store (Session Data Layer)                 │   │
//! │  │      ReceiptStore, SalesStore, InventoryGateway trait           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stockit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  totals   │  │  filter   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │ aggregate │  │   sales   │  │   │
//! │  │   │   Sale    │  │  Format   │  │   lines   │  │  listing  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (StockReceipt, Sale, Branch, Category)
//! - [`money`] - Money type and currency formatting (no floating point!)
//! - [`totals`] - Receipt line aggregation (subtotal/total/balance)
//! - [`filter`] - Sales listing filter
//! - [`receipt`] - Printable receipt view builder
//! - [`error`] - Domain error types
//! - [`validation`] - Caller input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access are FORBIDDEN here
//! 3. **Integer Money**: Amounts are whole currency units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockit_core::money::{CurrencyFormat, Money};
//!
//! let naira = CurrencyFormat::default();
//! assert_eq!(naira.format(Money::from_units(1234567)), "₦1,234,567");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod money;
pub mod receipt;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockit_core::Money` instead of
// `use stockit_core::money::Money`

pub use error::{TransitionError, ValidationError};
pub use filter::filter_sales;
pub use money::{CurrencyFormat, Money};
pub use receipt::{ReceiptLine, ReceiptView};
pub use totals::{aggregate_lines, SaleTotals};
pub use types::*;
