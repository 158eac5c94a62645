//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    $130.00 × 10% = exactly 1300 centavos, every time                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gama_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(10_99); // $10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // $21.98
//! let total = price + Money::from_cents(5_00);   // $15.99
//! ```
//!
//! Floats only exist at the wire boundary: the backend speaks decimal pesos,
//! so [`Money::from_pesos`] / [`Money::as_pesos`] do the (rounded) conversion
//! there and nowhere else.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (MXN smallest unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediates (e.g. subtotal − discount)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from decimal pesos, rounding to the nearest
    /// centavo.
    ///
    /// This is the boundary constructor for amounts arriving as JSON numbers
    /// (`precio_venta`, `monto_recibido`, ...). Non-finite input collapses to
    /// zero so a broken backend value can never poison a receipt with `NaN`.
    pub fn from_pesos(pesos: f64) -> Self {
        if !pesos.is_finite() {
            return Money::zero();
        }
        Money((pesos * 100.0).round() as i64)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-peso portion.
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavo portion (always 0-99, absolute value).
    #[inline]
    pub const fn centavos_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as decimal pesos for the wire.
    ///
    /// Only the API payload builder should call this; everything internal
    /// stays in centavos.
    #[inline]
    pub fn as_pesos(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Subtraction floored at zero.
    ///
    /// Totals, change and shortfall are all `max(0, a − b)` by contract: a
    /// discount larger than the subtotal yields a $0.00 total, never a
    /// negative one.
    #[inline]
    pub const fn saturating_sub_zero(&self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff < 0 { Money(0) } else { Money(diff) }
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use gama_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(50_00); // $50.00
    /// let importe = unit_price.multiply_quantity(2);
    /// assert_eq!(importe.cents(), 100_00); // $100.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Computes a percentage of this amount, given in basis points
    /// (1000 = 10%), rounded to the nearest centavo.
    ///
    /// `$130.00 × 10% = $13.00`, exactly, every time.
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 intermediate prevents overflow on large amounts
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(part as i64)
    }

    /// Formats the amount the way the terminal displays it: `$1,234.56`,
    /// thousands separators, always two decimals.
    ///
    /// Defensive by contract: a negative amount renders as `$0.00`; a
    /// receipt never shows negative currency.
    pub fn formato_mx(&self) -> String {
        let value = if self.0 < 0 { Money::zero() } else { *self };
        let pesos = value.pesos();
        let centavos = value.centavos_part();

        // Insert thousands separators into the integer part
        let digits = pesos.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        format!("${}.{:02}", grouped, centavos)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging and error messages; receipts use
/// [`Money::formato_mx`] which applies the display conventions.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.pesos().abs(), self.centavos_part())
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
