//! # Validation Module
//!
//! Address completeness checks consumed by the cart service before checkout.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Validation Happens                           │
//! │                                                                         │
//! │  Cart service                                                           │
//! │  ├── AddressValidator::is_valid(address) ← THIS MODULE                 │
//! │  │        │                                                             │
//! │  │        ├── false → reject checkout                                   │
//! │  │        └── true  → continue                                          │
//! │  │                                                                      │
//! │  └── ShippingCalculator::calculate_shipping_cost(cart)                  │
//! │           (assumes the address was already checked)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use waybill_core::types::Address;
//! use waybill_core::validation::{AddressValidator, RequiredFieldsValidator};
//!
//! let validator = RequiredFieldsValidator;
//! let address = Address::new("USA", "Dallas", "1234 left lane.");
//! assert!(validator.is_valid(Some(&address)));
//! assert!(!validator.is_valid(None));
//! ```

use crate::error::ValidationError;
use crate::types::{Address, Item};
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Address Validators
// =============================================================================

/// Capability to decide whether an address can be shipped to.
///
/// Implemented by the cart service's collaborator; the calculator never
/// calls it.
pub trait AddressValidator {
    /// Returns `true` only for a present, usable address.
    fn is_valid(&self, address: Option<&Address>) -> bool;
}

/// Accepts an address when country, city and street are all non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFieldsValidator;

impl AddressValidator for RequiredFieldsValidator {
    fn is_valid(&self, address: Option<&Address>) -> bool {
        address.is_some_and(|a| validate_address(a).is_ok())
    }
}

/// Validates that every address field is populated.
///
/// ## Rules
/// - `country`, `city` and `street` must be non-empty
/// - The first missing field is reported, in that order
///
/// ## Example
/// ```rust
/// use waybill_core::types::Address;
/// use waybill_core::validation::validate_address;
///
/// assert!(validate_address(&Address::new("USA", "Dallas", "Main St")).is_ok());
/// assert!(validate_address(&Address::new("USA", "", "Main St")).is_err());
/// ```
pub fn validate_address(address: &Address) -> ValidationResult<()> {
    let fields = [
        ("country", &address.country),
        ("city", &address.city),
        ("street", &address.street),
    ];

    for (field, value) in fields {
        if value.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates an address that may be absent.
pub fn validate_shipping_address(address: Option<&Address>) -> ValidationResult<()> {
    match address {
        Some(address) => validate_address(address),
        None => Err(ValidationError::Required {
            field: "shipping_address".to_string(),
        }),
    }
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item quantity for cart updates.
///
/// ## Rules
/// - Must not exceed MAX_ITEM_QUANTITY (999)
/// - Zero is allowed (the line ships for free)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::from(MAX_ITEM_QUANTITY),
        });
    }

    Ok(())
}

/// Validates a cart line as received from outside.
///
/// ## Rules
/// - `quantity` within [`validate_quantity`]'s bound
/// - `unit_price_cents` not negative
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_quantity(item.quantity)?;

    if item.unit_price_cents < 0 {
        return Err(ValidationError::Negative {
            field: "unit_price_cents".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address(country: &str, city: &str, street: &str) -> Address {
        Address::new(country, city, street)
    }

    #[test]
    fn test_required_fields_presence_table() {
        let validator = RequiredFieldsValidator;
        let cases = [
            (None, false),
            (Some(address("Country", "", "")), false),
            (Some(address("", "City", "")), false),
            (Some(address("", "", "Street")), false),
            (Some(address("Country", "City", "")), false),
            (Some(address("Country", "", "Street")), false),
            (Some(address("", "City", "Street")), false),
            (Some(address("Country", "City", "Street")), true),
        ];

        for (candidate, expected) in cases {
            assert_eq!(
                validator.is_valid(candidate.as_ref()),
                expected,
                "address: {:?}",
                candidate
            );
        }
    }

    #[test]
    fn test_validate_address_reports_first_missing_field() {
        let err = validate_address(&address("", "", "")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "country".to_string()
            }
        );

        let err = validate_address(&address("USA", "Dallas", "")).unwrap_err();
        assert_eq!(err.to_string(), "street is required");
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        // Only emptiness is checked; trimming is the form layer's job.
        assert!(validate_address(&address(" ", " ", " ")).is_ok());
    }

    #[test]
    fn test_validate_shipping_address_absent() {
        let err = validate_shipping_address(None).unwrap_err();
        assert_eq!(err.to_string(), "shipping_address is required");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_item() {
        assert!(validate_item(&Item::new("p-1", 0, 0)).is_ok());
        assert!(validate_item(&Item::new("p-1", 1999, 999)).is_ok());

        let err = validate_item(&Item::new("p-1", 1999, 1000)).unwrap_err();
        assert_eq!(err.to_string(), "quantity must be between 0 and 999");

        let err = validate_item(&Item::new("p-1", -1, 1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "unit_price_cents".to_string()
            }
        );
    }
}
