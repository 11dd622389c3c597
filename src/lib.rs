pub mod assets;
pub mod fees;
pub mod market;
pub mod wallet;

// Re-export commonly used types for convenience
pub use assets::{BridgeChain, BridgeCurrency};
pub use fees::{build_fee_display, BridgeFees, FeeDisplay, TxType, WalletStatus};
pub use wallet::{AssetBalance, WalletStore};
