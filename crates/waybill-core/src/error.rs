//! # Error Types
//!
//! Domain-specific error types for waybill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  waybill-core errors (this file)                                       │
//! │  ├── CoreError        - Pricing and checkout failures                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quote-cli errors (app)                                                │
//! │  ├── ConfigError      - Bad warehouse/logging configuration            │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing is all-or-nothing: any error aborts the whole cart, there is no
//! partial quote.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing and checkout errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart has items but no destination to classify.
    ///
    /// ## When This Occurs
    /// - The customer never entered an address
    /// - The cart service skipped address validation before quoting
    #[error("Cart for customer {customer_id} has items but no shipping address")]
    MissingShippingAddress { customer_id: String },

    /// The destination address failed validation at checkout.
    #[error("Invalid shipping address: {0}")]
    InvalidAddress(#[source] ValidationError),

    /// A shipping method name did not match any known method.
    #[error("Unknown shipping method '{0}'. Valid options: standard, expedited, priority, express")]
    UnknownShippingMethod(String),

    /// A customer tier name did not match any known tier.
    #[error("Unknown customer tier '{0}'. Valid options: standard, premium")]
    UnknownCustomerTier(String),

    /// An amount left the range of `i64` cents.
    ///
    /// ## When This Occurs
    /// - A unit price × quantity line total is absurdly large
    /// - A custom rate table scales a base rate past the limit
    #[error("Amount overflow while computing {0}")]
    AmountOverflow(&'static str),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A monetary field is below zero.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// The address validator turned down a field that is present.
    #[error("{field} was rejected")]
    Rejected { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
