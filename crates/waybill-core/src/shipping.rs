//! # Shipping Cost Calculator
//!
//! Prices a cart's delivery from the configured warehouse.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_shipping_cost(cart)                                          │
//! │       │                                                                 │
//! │       ├── items empty? ─────────────────────────────► $0.00             │
//! │       │                                                                 │
//! │       ├── shipping_address missing? ──► Err(MissingShippingAddress)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  classify(origin, destination) ──► LocalityTier                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  per_unit = base[tier] × multiplier[method][customer]                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  total = Σ per_unit × item.quantity     (unit price never read)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The calculator holds only its origin address and rate table, both
//! immutable after construction, so one instance can serve every request.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::locality::classify;
use crate::money::{Money, Multiplier};
use crate::rates::RateTable;
use crate::types::{Address, Cart, CustomerTier, LocalityTier, ShippingMethod};

// =============================================================================
// Quote
// =============================================================================

/// How the per-unit rate was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct RateBreakdown {
    pub locality: LocalityTier,
    pub base_rate: Money,
    pub multiplier: Multiplier,
    pub per_unit_rate: Money,
}

/// A priced cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ShippingQuote {
    pub customer_tier: CustomerTier,
    pub shipping_method: ShippingMethod,
    /// `None` for an empty cart: nothing was classified or looked up.
    pub breakdown: Option<RateBreakdown>,
    pub total_units: u64,
    pub total: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Computes shipping costs from a fixed origin.
#[derive(Debug, Clone)]
pub struct ShippingCalculator {
    origin: Address,
    rates: RateTable,
}

impl ShippingCalculator {
    /// Creates a calculator shipping from `origin` with the standard rate card.
    pub fn new(origin: Address) -> Self {
        ShippingCalculator {
            origin,
            rates: RateTable::STANDARD,
        }
    }

    /// Replaces the rate card.
    pub fn with_rate_table(mut self, rates: RateTable) -> Self {
        self.rates = rates;
        self
    }

    /// The warehouse this calculator ships from.
    pub fn origin(&self) -> &Address {
        &self.origin
    }

    /// The rate card quotes are priced against.
    pub fn rate_table(&self) -> &RateTable {
        &self.rates
    }

    /// Returns the total shipping cost for a cart.
    ///
    /// ## Example
    /// ```rust
    /// use waybill_core::shipping::ShippingCalculator;
    /// use waybill_core::types::{Address, Cart, CustomerTier, Item, ShippingMethod};
    ///
    /// let warehouse = Address::new("USA", "Dallas", "1234 left lane.");
    /// let calculator = ShippingCalculator::new(warehouse.clone());
    ///
    /// let cart = Cart::new("c-1", CustomerTier::Standard)
    ///     .with_method(ShippingMethod::Expedited)
    ///     .with_item(Item::new("p-1", 1000, 12))
    ///     .ship_to(warehouse);
    ///
    /// let cost = calculator.calculate_shipping_cost(&cart).unwrap();
    /// assert_eq!(cost.cents(), 1440); // $14.40
    /// ```
    ///
    /// ## Errors
    /// - [`CoreError::MissingShippingAddress`] when the cart has items but
    ///   no destination
    /// - [`CoreError::AmountOverflow`] when the total exceeds `i64` cents
    pub fn calculate_shipping_cost(&self, cart: &Cart) -> CoreResult<Money> {
        self.quote(cart).map(|quote| quote.total)
    }

    /// Prices a cart and returns the rate breakdown alongside the total.
    pub fn quote(&self, cart: &Cart) -> CoreResult<ShippingQuote> {
        if cart.is_empty() {
            debug!(customer_id = %cart.customer_id, "Empty cart, no shipping cost");
            return Ok(ShippingQuote {
                customer_tier: cart.customer_tier,
                shipping_method: cart.shipping_method,
                breakdown: None,
                total_units: 0,
                total: Money::zero(),
            });
        }

        let destination =
            cart.shipping_address
                .as_ref()
                .ok_or_else(|| CoreError::MissingShippingAddress {
                    customer_id: cart.customer_id.clone(),
                })?;

        let locality = classify(&self.origin, destination);
        let base_rate = self.rates.base_rate(locality);
        let multiplier = self.rates.multiplier(cart.shipping_method, cart.customer_tier);
        let per_unit_rate =
            self.rates
                .per_unit_rate(locality, cart.shipping_method, cart.customer_tier)?;

        let total = cart.items.iter().try_fold(Money::zero(), |total, item| {
            per_unit_rate
                .checked_mul_quantity(item.quantity)
                .and_then(|line| total.checked_add(line))
                .ok_or(CoreError::AmountOverflow("shipping cost"))
        })?;

        debug!(
            customer_id = %cart.customer_id,
            %locality,
            method = %cart.shipping_method,
            customer_tier = %cart.customer_tier,
            %per_unit_rate,
            %total,
            "Shipping cost calculated"
        );

        Ok(ShippingQuote {
            customer_tier: cart.customer_tier,
            shipping_method: cart.shipping_method,
            breakdown: Some(RateBreakdown {
                locality,
                base_rate,
                multiplier,
                per_unit_rate,
            }),
            total_units: cart.total_units(),
            total,
        })
    }
}

/// Ships from the built-in warehouse.
impl Default for ShippingCalculator {
    fn default() -> Self {
        ShippingCalculator::new(Address::default_warehouse())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
