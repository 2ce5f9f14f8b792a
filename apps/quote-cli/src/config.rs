//! # Quote Configuration
//!
//! Where the warehouse is and how loudly to log.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     WAYBILL_WAREHOUSE_COUNTRY=USA                                      │
//! │     WAYBILL_LOG_LEVEL=debug                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/waybill/quote.toml (Linux)                               │
//! │     ~/Library/Application Support/com.waybill.quote/quote.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Built-in Dallas warehouse, log level "info"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # quote.toml
//! [warehouse]
//! country = "USA"
//! city = "Dallas"
//! street = "1234 left lane."
//!
//! [logging]
//! level = "info"
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use waybill_core::validation::validate_address;
use waybill_core::{Address, ValidationError};

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid warehouse address: {0}")]
    InvalidWarehouse(#[source] ValidationError),

    #[error("Invalid log level '{0}'. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

// =============================================================================
// Sections
// =============================================================================

/// The origin every quote ships from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseConfig {
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_street")]
    pub street: String,
}

fn default_country() -> String {
    waybill_core::DEFAULT_WAREHOUSE_COUNTRY.to_string()
}

fn default_city() -> String {
    waybill_core::DEFAULT_WAREHOUSE_CITY.to_string()
}

fn default_street() -> String {
    waybill_core::DEFAULT_WAREHOUSE_STREET.to_string()
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        WarehouseConfig {
            country: default_country(),
            city: default_city(),
            street: default_street(),
        }
    }
}

impl WarehouseConfig {
    pub fn address(&self) -> Address {
        Address::new(&self.country, &self.city, &self.street)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
        }
    }
}

// =============================================================================
// Quote Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub warehouse: WarehouseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// File the values were read from; `None` when no file was found.
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// `WAYBILL_*` variables that overrode file or default values.
    #[serde(skip)]
    pub env_overrides: Vec<&'static str>,
}

impl QuoteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (quote.toml)
    /// 3. Environment variables
    ///
    /// Runs before logging is installed, so nothing is logged here; the
    /// caller reports `source` and `env_overrides` afterwards.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::load_with_env(config_path.or_else(Self::default_config_path), &env)
    }

    fn load_with_env(path: Option<PathBuf>, env: &HashMap<String, String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = path.filter(|p| p.exists()) {
            let contents = std::fs::read_to_string(&path).map_err(|source| {
                ConfigError::Read {
                    path: path.clone(),
                    source,
                }
            })?;
            config = Self::from_toml(&contents)?;
            config.source = Some(path);
        }

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections and keys take defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks the warehouse is a complete address and the log level is known.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_address(&self.warehouse.address()).map_err(ConfigError::InvalidWarehouse)?;

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::InvalidLogLevel(self.logging.level.clone())),
        }
    }

    /// Applies `WAYBILL_*` overrides from an environment snapshot.
    fn apply_env_overrides(&mut self, env: &HashMap<String, String>) {
        let targets: [(&'static str, &mut String); 4] = [
            ("WAYBILL_WAREHOUSE_COUNTRY", &mut self.warehouse.country),
            ("WAYBILL_WAREHOUSE_CITY", &mut self.warehouse.city),
            ("WAYBILL_WAREHOUSE_STREET", &mut self.warehouse.street),
            ("WAYBILL_LOG_LEVEL", &mut self.logging.level),
        ];

        for (key, target) in targets {
            if let Some(value) = env.get(key) {
                *target = value.clone();
                self.env_overrides.push(key);
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "waybill", "quote")
            .map(|dirs| dirs.config_dir().join("quote.toml"))
    }
}
