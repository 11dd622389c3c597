pub mod display;
pub mod format;
pub mod schedule;
pub mod tooltips;

pub use display::{
    build_fee_display, fee_in_gwei, FeeDisplay, FeeFetchState, FeeRow, MarketSnapshot,
    TransactionFeesProps, WalletStatus, CONNECT_WALLET_PROMPT, MINT_GAS_UNIT_COST,
};
pub use schedule::{
    mint_and_release_fees, transaction_fees, BridgeFees, ChainFeeEntry, MintAndReleaseFees,
    ScheduleError, TransactionFees,
};
pub use tooltips::{fee_tooltips, FeeTooltips};

/// Direction of a bridging transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    /// Lock a native asset, mint its wrapped representation.
    Mint,
    /// Burn the wrapped asset, release the native one.
    Release,
}
