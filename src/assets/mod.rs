pub mod chain;
pub mod currency;

pub use chain::BridgeChain;
pub use currency::{BridgeCurrency, CurrencyConfig};
