use rust_decimal::Decimal;
use tracing::debug;

use crate::assets::{BridgeChain, BridgeCurrency};

/// Locally known balance of one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBalance {
    pub symbol: BridgeCurrency,
    pub balance: Decimal,
}

impl AssetBalance {
    pub fn new(symbol: BridgeCurrency, balance: Decimal) -> Self {
        Self { symbol, balance }
    }
}

/// Single source of truth for the user's chain selection and balances.
///
/// Mutations are serialized by `&mut self`; the hosting UI dispatches them
/// one at a time. Balances keep insertion order, with at most one entry per
/// symbol: updating an existing symbol replaces the entry in place.
#[derive(Debug, Clone)]
pub struct WalletStore {
    chain: BridgeChain,
    picker_opened: bool,
    balances: Vec<AssetBalance>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self {
            chain: BridgeChain::default(),
            picker_opened: false,
            balances: Vec::new(),
        }
    }

    /// Replaces the selected chain unconditionally; callers validate against
    /// their supported-chains list.
    pub fn set_chain(&mut self, chain: BridgeChain) {
        debug!(?chain, "wallet chain selected");
        self.chain = chain;
    }

    /// Shows or hides the chain-picker overlay. Cosmetic only.
    pub fn set_wallet_picker_opened(&mut self, opened: bool) {
        self.picker_opened = opened;
    }

    /// Records a balance: replaces the existing entry for the symbol in
    /// place, or appends a new one. Linear scan; the collection is bounded
    /// by the number of supported assets.
    pub fn add_or_update_balance(&mut self, entry: AssetBalance) {
        debug!(symbol = ?entry.symbol, balance = %entry.balance, "balance updated");
        match self.balances.iter_mut().find(|b| b.symbol == entry.symbol) {
            Some(existing) => *existing = entry,
            None => self.balances.push(entry),
        }
    }

    pub fn chain(&self) -> BridgeChain {
        self.chain
    }

    pub fn picker_opened(&self) -> bool {
        self.picker_opened
    }

    pub fn balances(&self) -> &[AssetBalance] {
        &self.balances
    }

    /// Multiwallet identifier of the selected chain.
    pub fn multiwallet_chain(&self) -> &'static str {
        self.chain.multiwallet_chain()
    }

    pub fn balance_of(&self, symbol: BridgeCurrency) -> Option<Decimal> {
        self.balances
            .iter()
            .find(|b| b.symbol == symbol)
            .map(|b| b.balance)
    }
}

impl Default for WalletStore {
    fn default() -> Self {
        Self::new()
    }
}
