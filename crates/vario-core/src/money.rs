//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Every price in the catalog and every cart snapshot is an i64 in      │
//! │    the smallest currency unit. The UI alone formats for display.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vario_core::money::Money;
//!
//! // Create from minor units (the only constructor)
//! let price = Money::from_minor(1099); // $10.99
//!
//! // Line totals stay in integer space
//! let line_total = price.multiply_quantity(3); // $32.97
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serde**: Serializes as a bare number, matching the catalog JSON
///   (`"price": 29900`) the storefront frontend already consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents for USD, yuan-fen, etc).
    ///
    /// ## Example
    /// ```rust
    /// use vario_core::money::Money;
    ///
    /// let price = Money::from_minor(1099); // Represents $10.99
    /// assert_eq!(price.minor(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units (smallest currency unit).
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99, absolute).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use vario_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.minor(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logging and debugging. Use frontend formatting for actual
/// UI display to handle currency and localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_minor(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_minor(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_minor(0)), "$0.00");
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.minor(), 897);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let price = Money::from_minor(29900);
        assert_eq!(serde_json::to_string(&price).unwrap(), "29900");

        let back: Money = serde_json::from_str("29900").unwrap();
        assert_eq!(back, price);
    }
}
