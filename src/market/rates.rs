use rust_decimal::Decimal;

use crate::assets::BridgeCurrency;
use crate::market::MarketDataError;

/// Quote symbol all USD-equivalent values are priced in.
pub const USD_SYMBOL: &str = "USD";

/// A single quote from the exchange-rate provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRate {
    pub base: BridgeCurrency,
    pub quote: String,
    pub rate: Decimal,
}

impl ExchangeRate {
    pub fn new(base: BridgeCurrency, quote: &str, rate: Decimal) -> Self {
        Self {
            base,
            quote: quote.to_string(),
            rate,
        }
    }
}

/// Looks up the rate for a (base, quote) pair.
///
/// Returns `None` when the provider has not supplied that pair; callers must
/// treat the absence as "data unavailable" rather than substituting a
/// placeholder number.
pub fn find_exchange_rate(
    rates: &[ExchangeRate],
    base: BridgeCurrency,
    quote: &str,
) -> Option<Decimal> {
    rates
        .iter()
        .find(|entry| entry.base == base && entry.quote == quote)
        .map(|entry| entry.rate)
}

/// Parses the rate-provider payload: an array of
/// `{ "base": "BTC", "quote": "USD", "rate": 39000.5 }` objects.
///
/// Entries quoting assets the bridge does not support are skipped; the
/// provider covers a wider universe than we do.
pub fn exchange_rates_from_json(
    payload: serde_json::Value,
) -> Result<Vec<ExchangeRate>, MarketDataError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| MarketDataError::InvalidFormat("Rates payload must be a JSON array".to_string()))?;

    let mut rates = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let obj = entry.as_object().ok_or_else(|| {
            MarketDataError::InvalidFormat(format!("Rate at index {} must be a JSON object", idx))
        })?;

        let base_symbol = obj
            .get("base")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MarketDataError::MissingField(format!("base (rate at index {})", idx)))?;
        let base = match BridgeCurrency::from_symbol(base_symbol) {
            Some(currency) => currency,
            None => continue,
        };

        let quote = obj
            .get("quote")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MarketDataError::MissingField(format!("quote (rate at index {})", idx)))?;

        let rate = super::gas::parse_decimal(
            obj.get("rate")
                .ok_or_else(|| MarketDataError::MissingField(format!("rate (rate at index {})", idx)))?,
        )?;

        rates.push(ExchangeRate::new(base, quote, rate));
    }
    Ok(rates)
}
