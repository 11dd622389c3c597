use std::str::FromStr;

use rust_decimal::Decimal;

use crate::market::MarketDataError;

const GWEI_PER_ETH: u64 = 1_000_000_000;

/// Current gas price tiers from the gas-price provider, in gwei.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasPrices {
    pub standard: Decimal,
    pub fast: Decimal,
    pub slow: Decimal,
}

impl GasPrices {
    pub fn new(standard: Decimal, fast: Decimal, slow: Decimal) -> Self {
        Self {
            standard,
            fast,
            slow,
        }
    }

    /// Numeric fields may be JSON numbers or numeric strings.
    pub fn from_json(payload: serde_json::Value) -> Result<Self, MarketDataError> {
        let obj = payload.as_object().ok_or_else(|| {
            MarketDataError::InvalidFormat("Gas price payload must be a JSON object".to_string())
        })?;

        let standard = parse_decimal(
            obj.get("standard")
                .ok_or_else(|| MarketDataError::MissingField("standard".to_string()))?,
        )?;
        let fast = parse_decimal(
            obj.get("fast")
                .ok_or_else(|| MarketDataError::MissingField("fast".to_string()))?,
        )?;
        let slow = parse_decimal(
            obj.get("slow")
                .ok_or_else(|| MarketDataError::MissingField("slow".to_string()))?,
        )?;

        Ok(Self::new(standard, fast, slow))
    }
}

/// Converts a gwei figure to ETH.
pub fn from_gwei(gwei: Decimal) -> Decimal {
    gwei / Decimal::from(GWEI_PER_ETH)
}

pub(crate) fn parse_decimal(value: &serde_json::Value) -> Result<Decimal, MarketDataError> {
    match value {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string())
            .map_err(|e| MarketDataError::InvalidFormat(format!("Invalid number '{}': {}", n, e))),
        serde_json::Value::String(s) => Decimal::from_str(s)
            .map_err(|e| MarketDataError::InvalidFormat(format!("Invalid numeric string '{}': {}", s, e))),
        _ => Err(MarketDataError::InvalidFormat(
            "Value must be a number or numeric string".to_string(),
        )),
    }
}
