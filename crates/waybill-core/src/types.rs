//! # Domain Types
//!
//! Value objects the pricing engine reads. All of them are transient:
//! built per request, never mutated by the engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Cart       │   │      Item       │   │    Address      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  customer_id    │──►│  product_id     │   │  country        │       │
//! │  │  customer_tier  │   │  unit_price     │   │  city           │       │
//! │  │  items          │   │  quantity       │   │  street         │       │
//! │  │  shipping_addr  │──────────────────────────►                │       │
//! │  │  shipping_meth  │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CustomerTier   │   │ ShippingMethod  │   │  LocalityTier   │       │
//! │  │  Standard       │   │  Standard       │   │  SameCity       │       │
//! │  │  Premium        │   │  Expedited      │   │  SameCountry    │       │
//! │  └─────────────────┘   │  Priority       │   │  International  │       │
//! │                        │  Express        │   │  (derived)      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{DEFAULT_WAREHOUSE_CITY, DEFAULT_WAREHOUSE_COUNTRY, DEFAULT_WAREHOUSE_STREET};

// =============================================================================
// Address
// =============================================================================

/// A postal address.
///
/// Fields are free text and compared byte-for-byte. A field that is absent
/// in the incoming JSON deserializes as an empty string so that the
/// validator, not the parser, decides whether the address is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
}

impl Address {
    /// Creates an address from its three parts.
    pub fn new(
        country: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Address {
            country: country.into(),
            city: city.into(),
            street: street.into(),
        }
    }

    /// The built-in warehouse used when no origin is configured.
    pub fn default_warehouse() -> Self {
        Address::new(
            DEFAULT_WAREHOUSE_COUNTRY,
            DEFAULT_WAREHOUSE_CITY,
            DEFAULT_WAREHOUSE_STREET,
        )
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.city, self.country)
    }
}

// =============================================================================
// Customer Tier
// =============================================================================

/// The customer's loyalty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CustomerTier {
    #[default]
    Standard,
    /// Expedited and Priority surcharges are waived.
    Premium,
}

impl CustomerTier {
    /// Every tier, in table order.
    pub const ALL: [CustomerTier; 2] = [CustomerTier::Standard, CustomerTier::Premium];

    /// Column index into the multiplier table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerTier::Standard => write!(f, "standard"),
            CustomerTier::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for CustomerTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(CustomerTier::Standard),
            "premium" => Ok(CustomerTier::Premium),
            _ => Err(CoreError::UnknownCustomerTier(s.to_string())),
        }
    }
}

// =============================================================================
// Shipping Method
// =============================================================================

/// The delivery speed requested for the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Expedited,
    Priority,
    /// Surcharge applies to every customer tier.
    Express,
}

impl ShippingMethod {
    /// Every method, in table order.
    pub const ALL: [ShippingMethod; 4] = [
        ShippingMethod::Standard,
        ShippingMethod::Expedited,
        ShippingMethod::Priority,
        ShippingMethod::Express,
    ];

    /// Row index into the multiplier table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingMethod::Standard => write!(f, "standard"),
            ShippingMethod::Expedited => write!(f, "expedited"),
            ShippingMethod::Priority => write!(f, "priority"),
            ShippingMethod::Express => write!(f, "express"),
        }
    }
}

impl std::str::FromStr for ShippingMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ShippingMethod::Standard),
            "expedited" => Ok(ShippingMethod::Expedited),
            "priority" => Ok(ShippingMethod::Priority),
            "express" => Ok(ShippingMethod::Express),
            _ => Err(CoreError::UnknownShippingMethod(s.to_string())),
        }
    }
}

// =============================================================================
// Locality Tier
// =============================================================================

/// Distance class between the warehouse and the destination.
///
/// Derived by [`crate::locality::classify`], never stored on the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LocalityTier {
    /// Same country and same city as the warehouse.
    SameCity,
    /// Same country, different city.
    SameCountry,
    /// Different country.
    International,
}

impl LocalityTier {
    /// Every tier, nearest first.
    pub const ALL: [LocalityTier; 3] = [
        LocalityTier::SameCity,
        LocalityTier::SameCountry,
        LocalityTier::International,
    ];

    /// Index into the base-rate table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for LocalityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalityTier::SameCity => write!(f, "same_city"),
            LocalityTier::SameCountry => write!(f, "same_country"),
            LocalityTier::International => write!(f, "international"),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub product_id: String,

    /// Unit price in cents. Shipping ignores it; checkout uses it for the subtotal.
    #[serde(default)]
    pub unit_price_cents: i64,

    /// Units ordered. Zero is allowed and ships for free.
    pub quantity: u32,
}

impl Item {
    /// Creates a line for `quantity` units at `unit_price_cents` each.
    pub fn new(product_id: impl Into<String>, unit_price_cents: i64, quantity: u32) -> Self {
        Item {
            product_id: product_id.into(),
            unit_price_cents,
            quantity,
        }
    }

    /// Unit price as [`Money`].
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    ///
    /// ## Errors
    /// [`CoreError::AmountOverflow`] when the product exceeds `i64` cents.
    #[inline]
    pub fn line_total(&self) -> CoreResult<Money> {
        self.unit_price()
            .checked_mul_quantity(self.quantity)
            .ok_or(CoreError::AmountOverflow("line total"))
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A customer's cart as handed over by the cart service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub customer_id: String,

    #[serde(default)]
    pub customer_tier: CustomerTier,

    /// Ordered lines; empty is valid and ships for free.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Destination. `None` until the customer has entered one.
    #[serde(default)]
    pub shipping_address: Option<Address>,

    #[serde(default)]
    pub shipping_method: ShippingMethod,
}

impl Cart {
    /// Creates an empty cart for a customer.
    pub fn new(customer_id: impl Into<String>, customer_tier: CustomerTier) -> Self {
        Cart {
            customer_id: customer_id.into(),
            customer_tier,
            ..Cart::default()
        }
    }

    /// Sets the destination address.
    pub fn ship_to(mut self, address: Address) -> Self {
        self.shipping_address = Some(address);
        self
    }

    /// Sets the shipping method.
    pub fn with_method(mut self, method: ShippingMethod) -> Self {
        self.shipping_method = method;
        self
    }

    /// Appends an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// `true` when the cart has no lines. Quantities are not inspected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of line totals (before shipping).
    ///
    /// ## Errors
    /// [`CoreError::AmountOverflow`] when a line total or the running sum
    /// exceeds `i64` cents.
    pub fn items_subtotal(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |subtotal, item| {
            subtotal
                .checked_add(item.line_total()?)
                .ok_or(CoreError::AmountOverflow("items subtotal"))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
