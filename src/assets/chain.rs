/// A host chain the user can point their wallet at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeChain {
    Ethereum,
    BinanceSmartChain,
}

impl BridgeChain {
    /// Identifier of this chain in the multiwallet connector.
    pub fn multiwallet_chain(&self) -> &'static str {
        match self {
            BridgeChain::Ethereum => "ethereum",
            BridgeChain::BinanceSmartChain => "bsc",
        }
    }

    /// Resolves a provider chain identifier; `None` for unsupported chains.
    pub fn from_id(id: &str) -> Option<BridgeChain> {
        match id {
            "ethereum" => Some(BridgeChain::Ethereum),
            "bsc" => Some(BridgeChain::BinanceSmartChain),
            _ => None,
        }
    }
}

impl Default for BridgeChain {
    fn default() -> Self {
        BridgeChain::Ethereum
    }
}
