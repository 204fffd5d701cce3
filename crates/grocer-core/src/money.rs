//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Units                                        │
//! │    Catalog prices are whole rupees. Every total is an exact i64.    │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog carries no minor units, so unlike cent-based systems there
//! is no rounding anywhere. The only arithmetic the storefront performs is
//! unit-price × quantity and sums of line totals.
//!
//! ## Usage
//! ```rust
//! use grocer_core::money::Money;
//!
//! let price = Money::from_units(99); // ₹99
//! let line_total = price * 3u32;     // ₹297
//! assert_eq!(line_total.units(), 297);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units (rupees).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction stays closed under the type
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let price = Money::from_units(99); // ₹99
    /// assert_eq!(price.units(), 99);
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
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert!(zero.is_zero());
    /// ```
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use grocer_core::money::Money;
    ///
    /// let unit_price = Money::from_units(59); // Bananas, ₹59
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.units(), 177);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the text view. A real frontend formats money
/// itself to handle localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity (for line totals).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of line totals.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(99);
        assert_eq!(money.units(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(99)), "₹99");
        assert_eq!(format!("{}", Money::from_units(0)), "₹0");
        assert_eq!(format!("{}", Money::from_units(-50)), "-₹50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(100);
        let b = Money::from_units(59);

        assert_eq!((a + b).units(), 159);
        assert_eq!((a - b).units(), 41);
        assert_eq!((a * 3u32).units(), 300);
        assert_eq!((a * 3i64).units(), 300);
    }

    #[test]
    fn test_add_assign() {
        let mut total = Money::zero();
        total += Money::from_units(99);
        total += Money::from_units(59);
        assert_eq!(total.units(), 158);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_units(199);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.units(), 398);
    }

    #[test]
    fn test_sum() {
        let totals = vec![Money::from_units(99), Money::from_units(59)];
        let sum: Money = totals.into_iter().sum();
        assert_eq!(sum.units(), 158);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());

        let positive = Money::from_units(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
    }
}
