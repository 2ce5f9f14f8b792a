//! # Waybill Quote
//!
//! Prices a cart document from the command line.
//!
//! ## Usage
//! ```bash
//! # Shipping quote for a cart file
//! cargo run -p waybill-quote -- --cart ./cart.json
//!
//! # Checkout totals, cart on stdin, explicit config
//! cat cart.json | cargo run -p waybill-quote -- --checkout --config ./quote.toml
//! ```
//!
//! ## Cart Document
//! ```json
//! {
//!   "customer_id": "c-1",
//!   "customer_tier": "premium",
//!   "shipping_method": "express",
//!   "shipping_address": { "country": "USA", "city": "Seatle", "street": "1 Pike St" },
//!   "items": [{ "product_id": "p-1", "unit_price_cents": 1999, "quantity": 3 }]
//! }
//! ```

mod config;
mod error;

use std::env;
use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use waybill_core::validation::validate_item;
use waybill_core::{Cart, CheckoutEngine, CoreError, ShippingCalculator};

use crate::config::QuoteConfig;
use crate::error::{CliError, CliResult};

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    /// `None` reads the cart from stdin.
    cart: Option<PathBuf>,
    config: Option<PathBuf>,
    checkout: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CliResult<Args> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--cart" | "-c" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--cart requires a path".to_string()))?;
                parsed.cart = (value != "-").then(|| PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config requires a path".to_string()))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--checkout" => parsed.checkout = true,
            other => return Err(CliError::Usage(format!("Unknown argument: {other}"))),
        }
    }

    Ok(parsed)
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,waybill={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn read_cart(path: Option<&PathBuf>) -> CliResult<Cart> {
    let contents = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse_cart(&contents)
}

/// Parses a cart document and checks every line.
fn parse_cart(contents: &str) -> CliResult<Cart> {
    let cart: Cart = serde_json::from_str(contents)?;
    for item in &cart.items {
        validate_item(item).map_err(CoreError::from)?;
    }
    Ok(cart)
}

/// Prices `cart` and renders the result as pretty JSON.
fn render(calculator: ShippingCalculator, cart: &Cart, checkout: bool) -> CliResult<String> {
    let output = if checkout {
        let summary = CheckoutEngine::new(calculator).check_out(cart)?;
        serde_json::to_string_pretty(&summary)?
    } else {
        let quote = calculator.quote(cart)?;
        serde_json::to_string_pretty(&quote)?
    };
    Ok(output)
}

fn run(args: Args) -> CliResult<()> {
    let config = QuoteConfig::load(args.config)?;
    init_tracing(&config.logging.level);

    match &config.source {
        Some(path) => info!(?path, "Loaded quote config from file"),
        None => debug!("No config file found, using defaults"),
    }
    if !config.env_overrides.is_empty() {
        debug!(overrides = ?config.env_overrides, "Applied environment overrides");
    }

    let origin = config.warehouse.address();
    info!(%origin, "Configuration loaded");

    let cart = read_cart(args.cart.as_ref())?;
    info!(
        customer_id = %cart.customer_id,
        items = cart.items.len(),
        method = %cart.shipping_method,
        "Pricing cart"
    );

    let output = render(ShippingCalculator::new(origin), &cart, args.checkout)?;
    println!("{output}");
    Ok(())
}

fn main() {
    let result = parse_args(env::args().skip(1)).and_then(run);

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}
