pub mod gas;
pub mod rates;

pub use gas::{from_gwei, GasPrices};
pub use rates::{exchange_rates_from_json, find_exchange_rate, ExchangeRate, USD_SYMBOL};

/// Errors raised while parsing provider market-data payloads.
#[derive(Debug, thiserror::Error)]
pub enum MarketDataError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
