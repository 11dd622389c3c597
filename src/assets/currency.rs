/// Display configuration for a bridgeable currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConfig {
    /// Short ticker used as a value suffix (e.g. "BTC")
    pub short: &'static str,
    /// Full human-readable name
    pub full: &'static str,
    /// Number of decimal places the asset is quoted with
    pub decimals: u8,
}

/// A currency the bridge knows how to move.
///
/// The registry is an exhaustive enum, so every currency resolves to a
/// configuration; there is no "unregistered currency" case at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeCurrency {
    Btc,
    Bch,
    Zec,
    Doge,
    Eth,
    RenBtc,
    RenBch,
    RenZec,
    RenDoge,
}

impl BridgeCurrency {
    pub fn config(&self) -> &'static CurrencyConfig {
        match self {
            BridgeCurrency::Btc => &CurrencyConfig { short: "BTC", full: "Bitcoin", decimals: 8 },
            BridgeCurrency::Bch => &CurrencyConfig { short: "BCH", full: "Bitcoin Cash", decimals: 8 },
            BridgeCurrency::Zec => &CurrencyConfig { short: "ZEC", full: "Zcash", decimals: 8 },
            BridgeCurrency::Doge => &CurrencyConfig { short: "DOGE", full: "Dogecoin", decimals: 8 },
            BridgeCurrency::Eth => &CurrencyConfig { short: "ETH", full: "Ether", decimals: 18 },
            BridgeCurrency::RenBtc => &CurrencyConfig { short: "renBTC", full: "Ren Bitcoin", decimals: 8 },
            BridgeCurrency::RenBch => &CurrencyConfig { short: "renBCH", full: "Ren Bitcoin Cash", decimals: 8 },
            BridgeCurrency::RenZec => &CurrencyConfig { short: "renZEC", full: "Ren Zcash", decimals: 8 },
            BridgeCurrency::RenDoge => &CurrencyConfig { short: "renDOGE", full: "Ren Dogecoin", decimals: 8 },
        }
    }

    /// The counterpart asset on the other side of the bridge.
    ///
    /// Native assets map to their wrapped representation and wrapped assets
    /// back to the native one; ETH has no wrapped counterpart here and maps
    /// to itself.
    pub fn released_currency(&self) -> BridgeCurrency {
        match self {
            BridgeCurrency::Btc => BridgeCurrency::RenBtc,
            BridgeCurrency::Bch => BridgeCurrency::RenBch,
            BridgeCurrency::Zec => BridgeCurrency::RenZec,
            BridgeCurrency::Doge => BridgeCurrency::RenDoge,
            BridgeCurrency::RenBtc => BridgeCurrency::Btc,
            BridgeCurrency::RenBch => BridgeCurrency::Bch,
            BridgeCurrency::RenZec => BridgeCurrency::Zec,
            BridgeCurrency::RenDoge => BridgeCurrency::Doge,
            BridgeCurrency::Eth => BridgeCurrency::Eth,
        }
    }

    /// Resolves a provider ticker to a currency; `None` for assets the
    /// bridge does not support.
    pub fn from_symbol(symbol: &str) -> Option<BridgeCurrency> {
        match symbol {
            "BTC" => Some(BridgeCurrency::Btc),
            "BCH" => Some(BridgeCurrency::Bch),
            "ZEC" => Some(BridgeCurrency::Zec),
            "DOGE" => Some(BridgeCurrency::Doge),
            "ETH" => Some(BridgeCurrency::Eth),
            "renBTC" => Some(BridgeCurrency::RenBtc),
            "renBCH" => Some(BridgeCurrency::RenBch),
            "renZEC" => Some(BridgeCurrency::RenZec),
            "renDOGE" => Some(BridgeCurrency::RenDoge),
            _ => None,
        }
    }
}
