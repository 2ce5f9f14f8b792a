//! # CLI Error Types
//!
//! Everything that can stop `waybill-quote`, mapped to a message on stderr
//! and a non-zero exit code.

use thiserror::Error;
use waybill_core::CoreError;

use crate::config::ConfigError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command-line arguments.
    #[error("{0}\n\nUsage: waybill-quote [--cart <path>|-] [--config <path>] [--checkout]")]
    Usage(String),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The cart document could not be read.
    #[error("Failed to read cart: {0}")]
    Io(#[from] std::io::Error),

    /// The cart document is not a valid cart.
    #[error("Invalid cart JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Pricing rejected the cart.
    #[error(transparent)]
    Pricing(#[from] CoreError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 64,
            CliError::Config(_) => 78,
            CliError::Io(_) => 74,
            CliError::Json(_) => 65,
            CliError::Pricing(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = CoreError::MissingShippingAddress {
            customer_id: "c-1".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Cart for customer c-1 has items but no shipping address"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_usage_message() {
        let err = CliError::Usage("Unknown argument: --fast".to_string());
        assert!(err.to_string().starts_with("Unknown argument: --fast"));
        assert_eq!(err.exit_code(), 64);
    }
}
