//! # Money Module
//!
//! Provides the `Money` type for shipping amounts and the `Multiplier` used
//! to surcharge or discount them.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    1.2 × 12 = 14.399999999999999  ❌ needs a tolerance to compare       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    100 cents × 12000 bps / 10000 = 120 cents                           │
//! │    120 cents × 12 units          = 1440 cents ($14.40) exactly          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use waybill_core::money::{Money, Multiplier};
//!
//! let base = Money::from_cents(100);            // $1.00 per unit
//! let rate = base.scale(Multiplier::from_bps(12_000)).unwrap(); // ×1.2
//! assert_eq!(rate.cents(), 120);
//! assert_eq!(rate.checked_mul_quantity(12).unwrap().cents(), 1440);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Shipping costs are never negative, but the type stays signed so that
/// subtraction in callers cannot silently wrap. Arithmetic is checked:
/// every operation that can overflow returns an `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use waybill_core::money::Money;
    ///
    /// let cost = Money::from_cents(1440); // $14.40
    /// assert_eq!(cost.cents(), 1440);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use waybill_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(15).cents(), 1500);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Multiplies money by a unit count.
    ///
    /// Returns `None` if the product does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use waybill_core::money::Money;
    ///
    /// let per_unit = Money::from_cents(250); // Express, same city
    /// assert_eq!(per_unit.checked_mul_quantity(10).unwrap().cents(), 2500);
    /// assert!(Money::from_cents(i64::MAX).checked_mul_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Applies a multiplier, rounding half up to the nearest cent.
    ///
    /// Returns `None` if the scaled amount does not fit in an `i64`.
    ///
    /// ## Implementation
    /// Integer math: `floor((amount * bps + 5000) / 10000)`, widened to i128
    /// so the intermediate product cannot overflow. Flooring division keeps
    /// the rounding direction the same on both sides of zero, so ×1.0 is
    /// exact for negative amounts too.
    ///
    /// ## Example
    /// ```rust
    /// use waybill_core::money::{Money, Multiplier};
    ///
    /// let base = Money::from_cents(1500);        // international
    /// let express = Multiplier::from_bps(25_000); // ×2.5
    /// assert_eq!(base.scale(express).unwrap().cents(), 3750);
    /// ```
    pub fn scale(&self, multiplier: Multiplier) -> Option<Money> {
        let scaled = (i128::from(self.0) * i128::from(multiplier.bps()) + 5000).div_euclid(10_000);
        i64::try_from(scaled).ok().map(Money::from_cents)
    }
}

/// Display shows money as `$14.40` (debugging and CLI output only).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Multiplier
// =============================================================================

/// A scalar factor in basis points.
///
/// ## Why Basis Points?
/// 10 000 bps = ×1.0, so every table multiplier (1.0, 1.2, 2.0, 2.5)
/// is an exact integer: 10 000, 12 000, 20 000, 25 000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Multiplier(u32);

impl Multiplier {
    /// The identity multiplier (×1.0).
    pub const ONE: Multiplier = Multiplier(10_000);

    /// Creates a multiplier from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Multiplier(bps)
    }

    /// Returns the multiplier in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the factor as a float (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / 10_000.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Multiplier::ONE
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}.{:04}", self.0 / 10_000, self.0 % 10_000)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1440);
        assert_eq!(money.cents(), 1440);
        assert_eq!(money.dollars(), 14);
        assert_eq!(money.cents_part(), 40);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1440)), "$14.40");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_scale_is_exact_for_table_multipliers() {
        let base = Money::from_cents(100);
        let scaled = |bps| base.scale(Multiplier::from_bps(bps)).unwrap().cents();
        assert_eq!(scaled(10_000), 100);
        assert_eq!(scaled(12_000), 120);
        assert_eq!(scaled(20_000), 200);
        assert_eq!(scaled(25_000), 250);
    }

    #[test]
    fn test_scale_rounds_half_up() {
        // 5 cents × 1.1 = 5.5 cents → 6
        let amount = Money::from_cents(5);
        assert_eq!(amount.scale(Multiplier::from_bps(11_000)).unwrap().cents(), 6);
    }

    #[test]
    fn test_scale_negative_amounts() {
        assert_eq!(Money::from_cents(-100).scale(Multiplier::ONE).unwrap().cents(), -100);
        // -5.5 cents rounds half up to -5
        let amount = Money::from_cents(-5);
        assert_eq!(amount.scale(Multiplier::from_bps(11_000)).unwrap().cents(), -5);
        // -5.6 cents → -6
        assert_eq!(
            Money::from_cents(-7).scale(Multiplier::from_bps(8_000)).unwrap().cents(),
            -6
        );
    }

    #[test]
    fn test_scale_overflow() {
        let max = Money::from_cents(i64::MAX);
        assert!(max.scale(Multiplier::from_bps(20_000)).is_none());
        assert_eq!(max.scale(Multiplier::ONE), Some(max));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(440);
        assert_eq!(a.checked_add(b).unwrap().cents(), 1440);
        assert_eq!(b.checked_mul_quantity(3).unwrap().cents(), 1320);
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Money::from_cents(4_611_686_018_427_387_904);
        assert!(huge.checked_mul_quantity(2).is_none());
        assert!(huge.checked_add(huge).is_none());
        assert_eq!(
            Money::from_cents(i64::MAX).checked_mul_quantity(1),
            Some(Money::from_cents(i64::MAX))
        );
    }

    #[test]
    fn test_multiply_by_zero_quantity() {
        assert!(Money::from_cents(3750).checked_mul_quantity(0).unwrap().is_zero());
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::from_bps(12_000).to_string(), "x1.2000");
        assert_eq!(Multiplier::ONE.to_string(), "x1.0000");
        assert!((Multiplier::from_bps(25_000).factor() - 2.5).abs() < f64::EPSILON);
    }
}
