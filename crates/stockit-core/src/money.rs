//! # Money Module
//!
//! Provides the `Money` type and the `CurrencyFormat` display configuration.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: i64 whole currency units                                 │
//! │    The remote service transmits amounts as plain numbers of WHOLE       │
//! │    units of the tenant's base currency (₦1,000 is the number 1000).     │
//! │    Minor units are not used on the wire, so we store exactly what we    │
//! │    receive and never convert. Repeated aggregation and formatting       │
//! │    round-trip without drift.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockit_core::money::{CurrencyFormat, Money};
//!
//! let price = Money::from_units(1500);
//! let total = price * 2 + Money::from_units(250);
//! assert_eq!(total.units(), 3250);
//!
//! // Display formatting is explicit configuration, never ambient locale
//! let naira = CurrencyFormat::default();
//! assert_eq!(naira.format(total), "₦3,250");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole units of the tenant's base currency.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for overpayment balances
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Whole units, not minor units**: Preserves the wire convention of the
///   remote service exactly - no conversion on ingest or egress
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use stockit_core::money::Money;
    ///
    /// let price = Money::from_units(1000); // ₦1,000
    /// assert_eq!(price.units(), 1000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use stockit_core::money::Money;
    ///
    /// let unit_price = Money::from_units(500);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.units(), 1500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the raw unit count.
///
/// ## Note
/// This is for debugging and error messages. Use [`CurrencyFormat`] for
/// anything user-facing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line item streams.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Currency Format
// =============================================================================

/// Explicit display configuration for monetary amounts.
///
/// Formatting must be deterministic within a session, so the symbol and
/// separators travel as a value instead of being read from ambient locale
/// state that could change between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// Currency symbol rendered as a prefix.
    pub symbol: String,

    /// Thousands separator inserted every three digits.
    pub grouping_separator: char,

    /// Number of fractional digits to render.
    ///
    /// Wire amounts are whole units, so fractional digits are always zeros;
    /// the reference behavior renders none.
    pub fraction_digits: u8,
}

impl Default for CurrencyFormat {
    /// The tenant default: Nigerian Naira, comma grouping, no decimals.
    fn default() -> Self {
        CurrencyFormat {
            symbol: "₦".to_string(),
            grouping_separator: ',',
            fraction_digits: 0,
        }
    }
}

impl CurrencyFormat {
    /// Creates a format with a custom symbol and the default separators.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            ..CurrencyFormat::default()
        }
    }

    /// Renders an amount as a grouped, symbol-prefixed string.
    ///
    /// ## Example
    /// ```rust
    /// use stockit_core::money::{CurrencyFormat, Money};
    ///
    /// let naira = CurrencyFormat::default();
    /// assert_eq!(naira.format(Money::from_units(1234567)), "₦1,234,567");
    /// assert_eq!(naira.format(Money::from_units(-250)), "-₦250");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let grouped = group_digits(amount.units().unsigned_abs(), self.grouping_separator);

        let mut out = format!("{}{}{}", sign, self.symbol, grouped);
        if self.fraction_digits > 0 {
            out.push('.');
            for _ in 0..self.fraction_digits {
                out.push('0');
            }
        }
        out
    }
}

/// Inserts `separator` every three digits, counting from the right.
fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
