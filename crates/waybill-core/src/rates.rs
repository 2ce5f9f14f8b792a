//! # Rate Tables
//!
//! Enum-keyed lookup tables for the two pricing axes.
//!
//! ## Standard Tables
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base rate per unit            Method/customer multiplier               │
//! │  ──────────────────            ──────────────────────────               │
//! │  SameCity        $1.00                    Standard   Premium            │
//! │  SameCountry     $2.00         Standard     x1.0      x1.0              │
//! │  International  $15.00         Expedited    x1.2      x1.0              │
//! │                                Priority     x2.0      x1.0              │
//! │                                Express      x2.5      x2.5              │
//! │                                                                         │
//! │  per-unit rate = base[tier] × multiplier[method][customer]              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Premium customers pay the Standard rate for Expedited and Priority.
//! Express is never discounted.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{Money, Multiplier};
use crate::types::{CustomerTier, LocalityTier, ShippingMethod};
use crate::validation::ValidationResult;

/// Base rates and multipliers, indexed by enum ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTable {
    /// Indexed by [`LocalityTier::index`].
    base_rates: [Money; 3],
    /// Indexed by [`ShippingMethod::index`] then [`CustomerTier::index`].
    multipliers: [[Multiplier; 2]; 4],
}

const X1_0: Multiplier = Multiplier::from_bps(10_000);
const X1_2: Multiplier = Multiplier::from_bps(12_000);
const X2_0: Multiplier = Multiplier::from_bps(20_000);
const X2_5: Multiplier = Multiplier::from_bps(25_000);

impl RateTable {
    /// The published rate card.
    pub const STANDARD: RateTable = RateTable {
        base_rates: [
            Money::from_cents(100),  // SameCity
            Money::from_cents(200),  // SameCountry
            Money::from_cents(1500), // International
        ],
        multipliers: [
            [X1_0, X1_0], // Standard
            [X1_2, X1_0], // Expedited
            [X2_0, X1_0], // Priority
            [X2_5, X2_5], // Express
        ],
    };

    /// Builds a custom table.
    ///
    /// ## Errors
    /// [`ValidationError::Negative`] when any base rate is below zero.
    /// Multipliers are unsigned, so a table that passes here can never
    /// produce a negative cost.
    pub fn new(
        base_rates: [Money; 3],
        multipliers: [[Multiplier; 2]; 4],
    ) -> ValidationResult<Self> {
        if base_rates.iter().any(|rate| rate.cents() < 0) {
            return Err(ValidationError::Negative {
                field: "base_rate".to_string(),
            });
        }

        Ok(RateTable {
            base_rates,
            multipliers,
        })
    }

    /// Per-unit rate before any method surcharge.
    #[inline]
    pub fn base_rate(&self, tier: LocalityTier) -> Money {
        self.base_rates[tier.index()]
    }

    /// Surcharge factor for a method/customer combination.
    #[inline]
    pub fn multiplier(&self, method: ShippingMethod, customer: CustomerTier) -> Multiplier {
        self.multipliers[method.index()][customer.index()]
    }

    /// Effective per-unit rate: base × multiplier.
    ///
    /// ## Errors
    /// [`CoreError::AmountOverflow`] when a custom table scales a rate past
    /// `i64` cents.
    pub fn per_unit_rate(
        &self,
        tier: LocalityTier,
        method: ShippingMethod,
        customer: CustomerTier,
    ) -> CoreResult<Money> {
        self.base_rate(tier)
            .scale(self.multiplier(method, customer))
            .ok_or(CoreError::AmountOverflow("per-unit rate"))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        RateTable::STANDARD
    }
}
