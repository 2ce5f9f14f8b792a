//! # waybill-core: Shipping-Cost Pricing for Waybill
//!
//! This crate is the only part of the cart service with real pricing
//! decisions. It contains them as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Waybill Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │         Cart service / waybill-quote CLI                        │   │
//! │  │    load cart ──► validate address ──► quote ──► checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ waybill-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ locality  │  │   rates   │  │ shipping  │  │ checkout  │  │   │
//! │  │   │ classify  │  │ RateTable │  │Calculator │  │  Engine   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   types   │  │   money   │  │validation │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Address, Item, Cart and the pricing enums
//! - [`money`] - Integer-cent Money and basis-point Multiplier
//! - [`locality`] - Origin/destination distance classification
//! - [`rates`] - Base-rate and multiplier lookup tables
//! - [`shipping`] - The shipping cost calculator
//! - [`validation`] - Address completeness checks
//! - [`checkout`] - Subtotal + shipping at checkout
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use waybill_core::{Address, Cart, CustomerTier, Item, ShippingCalculator, ShippingMethod};
//!
//! let calculator = ShippingCalculator::default(); // ships from the built-in warehouse
//!
//! let cart = Cart::new("customer-1", CustomerTier::Premium)
//!     .with_method(ShippingMethod::Express)
//!     .with_item(Item::new("sku-1", 1999, 10))
//!     .ship_to(Address::new("BRA", "Rio de Janeiro", "Celso queiroz"));
//!
//! // $15.00 international × 2.5 express × 10 units
//! let cost = calculator.calculate_shipping_cost(&cart).unwrap();
//! assert_eq!(cost.cents(), 37_500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod error;
pub mod locality;
pub mod money;
pub mod rates;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checkout::{CheckoutEngine, CheckoutSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Multiplier};
pub use rates::RateTable;
pub use shipping::{RateBreakdown, ShippingCalculator, ShippingQuote};
pub use types::*;
pub use validation::{AddressValidator, RequiredFieldsValidator};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Country of the built-in warehouse.
pub const DEFAULT_WAREHOUSE_COUNTRY: &str = "USA";

/// City of the built-in warehouse.
pub const DEFAULT_WAREHOUSE_CITY: &str = "Dallas";

/// Street of the built-in warehouse.
pub const DEFAULT_WAREHOUSE_STREET: &str = "1234 left lane.";

/// Maximum quantity of a single item in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Checked by [`validation::validate_item`] when a cart enters from outside;
/// the calculator itself prices any quantity.
pub const MAX_ITEM_QUANTITY: u32 = 999;
