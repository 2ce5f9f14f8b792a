//! # Checkout
//!
//! Combines address validation and shipping into the figures the cart
//! service shows at checkout. No tax, no currency conversion.
//!
//! ```text
//! check_out(cart)
//!      │
//!      ├── items empty? ──────────────► all zeros
//!      │
//!      ├── validator rejects address? ─► Err(InvalidAddress)
//!      │
//!      ▼
//! items_subtotal + shipping_cost = total
//! ```

use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::shipping::ShippingCalculator;
use crate::types::Cart;
use crate::validation::{validate_shipping_address, AddressValidator, RequiredFieldsValidator};

/// Totals for a cart at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CheckoutSummary {
    pub total_units: u64,
    pub items_subtotal: Money,
    pub shipping_cost: Money,
    pub total: Money,
}

/// Runs the address precondition, then prices the cart.
#[derive(Debug, Clone, Default)]
pub struct CheckoutEngine<V = RequiredFieldsValidator> {
    validator: V,
    calculator: ShippingCalculator,
}

impl CheckoutEngine<RequiredFieldsValidator> {
    /// Uses the required-fields validator.
    pub fn new(calculator: ShippingCalculator) -> Self {
        CheckoutEngine::with_validator(RequiredFieldsValidator, calculator)
    }
}

impl<V: AddressValidator> CheckoutEngine<V> {
    /// Uses a caller-supplied address validator.
    pub fn with_validator(validator: V, calculator: ShippingCalculator) -> Self {
        CheckoutEngine {
            validator,
            calculator,
        }
    }

    /// The calculator used for the shipping line.
    pub fn calculator(&self) -> &ShippingCalculator {
        &self.calculator
    }

    /// Computes the checkout totals for a cart.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidAddress`] when the cart has items and the
    ///   validator rejects its shipping address
    /// - [`CoreError::AmountOverflow`] when the subtotal or total exceeds
    ///   `i64` cents
    pub fn check_out(&self, cart: &Cart) -> CoreResult<CheckoutSummary> {
        if cart.is_empty() {
            return Ok(CheckoutSummary {
                total_units: 0,
                items_subtotal: Money::zero(),
                shipping_cost: Money::zero(),
                total: Money::zero(),
            });
        }

        let address = cart.shipping_address.as_ref();
        if !self.validator.is_valid(address) {
            warn!(customer_id = %cart.customer_id, "Checkout rejected: invalid shipping address");
            // Name the missing field when there is one; a custom validator
            // may turn down an address that has every field populated.
            let reason = validate_shipping_address(address)
                .err()
                .unwrap_or_else(|| ValidationError::Rejected {
                    field: "shipping_address".to_string(),
                });
            return Err(CoreError::InvalidAddress(reason));
        }

        let items_subtotal = cart.items_subtotal()?;
        let shipping_cost = self.calculator.calculate_shipping_cost(cart)?;
        let total = items_subtotal
            .checked_add(shipping_cost)
            .ok_or(CoreError::AmountOverflow("checkout total"))?;

        debug!(
            customer_id = %cart.customer_id,
            %items_subtotal,
            %shipping_cost,
            %total,
            "Checkout totals computed"
        );

        Ok(CheckoutSummary {
            total_units: cart.total_units(),
            items_subtotal,
            shipping_cost,
            total,
        })
    }
}
