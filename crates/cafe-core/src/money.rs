//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64:                                                              │
//! │    100.0 × 0.13 = 13.000000000000002  ❌ drift on every receipt         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (paisa)                              │
//! │    10000 paisa × 1300 bps / 10000 = 1300 paisa exactly                  │
//! │    The only rounding step is the tax, and it is explicit               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cafe_core::money::{Currency, Money};
//!
//! let price = Money::from_major_minor(100, 0); // Rs.100.00
//! let line = price * 2;                        // Rs.200.00
//! assert_eq!(Currency::default().format(line), "Rs.200.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paisa for PKR).
///
/// ## Design Decisions
/// - **i64 (signed)**: same representation the arithmetic uses everywhere
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No symbol**: `Display` prints `226.00`; [`Currency`] adds `Rs.`
///
/// ## Where Money Flows
/// ```text
/// MenuItem.price ──► OrderLineItem.unit_price ──► OrderLineItem.line_total
///                                                        │
///                            OrderTotals.subtotal ◄──────┘
///                                   │
///                                   ├──► tax (rounded once)
///                                   ├──► donation (0 or fixed)
///                                   ▼
///                            OrderTotals.total ──► receipt, orders.txt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let price = Money::from_cents(12_050); // Rs.120.50
    /// assert_eq!(price.cents(), 12_050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (rupees and paisa).
    ///
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half up to one minor unit.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 is the half-up step (5000/10000 = 0.5). Amounts are never
    /// negative in this system, so the truncating division always rounds
    /// toward the larger value at the half.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    /// use cafe_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(20_000); // Rs.200.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1300));
    /// assert_eq!(tax.cents(), 2_600);          // Rs.26.00
    ///
    /// // Rs.0.50 × 13% = 6.5 paisa → 7 paisa
    /// assert_eq!(Money::from_cents(50).calculate_tax(TaxRate::from_bps(1300)).cents(), 7);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so that large subtotals cannot overflow before the division
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(25_000); // Chocolate Shake
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 75_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals and no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Currency
// =============================================================================

/// The one currency this till works in.
///
/// There is no localization: a fixed ISO code and a display symbol that is
/// glued in front of the amount (`Rs.226.00`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, informational only.
    pub code: String,

    /// Prefix printed before every amount.
    pub symbol: String,
}

impl Currency {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Currency {
            code: code.into(),
            symbol: symbol.into(),
        }
    }

    /// Formats an amount for receipts, reports and the order log.
    pub fn format(&self, amount: Money) -> String {
        if amount.is_negative() {
            format!("-{}{}", self.symbol, Money::from_cents(-amount.cents()))
        } else {
            format!("{}{}", self.symbol, amount)
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::new("PKR", "Rs.")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
