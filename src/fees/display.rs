//! Fee display: turns market and fee-schedule snapshots into a render model.
//!
//! There is no ambient state here. The hosting UI layer gathers the current
//! snapshots, calls [`build_fee_display`], and re-invokes it whenever an
//! input changes; the function itself is pure.

use rust_decimal::Decimal;
use tracing::debug;

use crate::assets::BridgeCurrency;
use crate::fees::format::{format_amount, format_usd};
use crate::fees::schedule::{transaction_fees, BridgeFees};
use crate::fees::tooltips::fee_tooltips;
use crate::fees::TxType;
use crate::market::{find_exchange_rate, from_gwei, ExchangeRate, GasPrices, USD_SYMBOL};

/// Gas units consumed by a mint on the destination chain.
pub const MINT_GAS_UNIT_COST: u64 = 150_000;

/// Shown instead of the fee rows while no wallet is connected.
pub const CONNECT_WALLET_PROMPT: &str = "Connect a wallet to view fees";

/// Placeholder for a value whose inputs are unavailable.
const VALUE_PLACEHOLDER: &str = "-";

/// Connection state of the wallet on the active chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletStatus {
    Connected,
    Disconnected,
    Connecting,
    WrongNetwork,
}

/// Inputs describing the transaction being quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFeesProps {
    pub tx_type: TxType,
    pub currency: BridgeCurrency,
    /// Transaction amount in source-currency units; callers pass a
    /// non-negative value
    pub amount: Decimal,
}

/// Snapshot of the shared market state the quote depends on.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub wallet_status: WalletStatus,
    pub rates: Vec<ExchangeRate>,
    /// `None` until the gas-price provider has delivered a figure
    pub gas_prices: Option<GasPrices>,
}

/// Snapshot of the asynchronous fee-schedule fetch, tagged with the inputs
/// it was requested for so a stale result can be recognized and discarded.
#[derive(Debug, Clone)]
pub struct FeeFetchState {
    pub currency: BridgeCurrency,
    pub tx_type: TxType,
    pub pending: bool,
    pub fees: Option<BridgeFees>,
}

/// One rendered fee line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeRow {
    pub label: String,
    pub tooltip: String,
    pub value: String,
    /// USD equivalent; `None` when the needed exchange rate is unavailable
    pub value_usd: Option<String>,
}

/// Render model for the fee display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeDisplay {
    /// No wallet connected: render [`CONNECT_WALLET_PROMPT`] and nothing else
    NotConnected,
    /// Fee schedule still loading: render a progress indicator
    Pending,
    /// Protocol fee, source-network miner fee, destination-network gas fee
    Ready(Vec<FeeRow>),
}

/// Destination-chain gas fee in gwei: `ceil(units × price)`.
///
/// Ceiling, so the gas cost is never under-estimated.
pub fn fee_in_gwei(gas_unit_cost: u64, gas_price_standard: Decimal) -> Decimal {
    (Decimal::from(gas_unit_cost) * gas_price_standard).ceil()
}

/// Computes the fee render model for the given inputs.
///
/// Wallet-connection state wins over everything: anything but `Connected`
/// short-circuits to [`FeeDisplay::NotConnected`] with no fee computation. A
/// pending, absent, or stale fee-schedule snapshot yields
/// [`FeeDisplay::Pending`]. Otherwise three rows are derived; a zero amount
/// produces zero-valued rows, and a missing exchange rate suppresses the USD
/// text of the rows that need it.
pub fn build_fee_display(
    props: &TransactionFeesProps,
    snapshot: &MarketSnapshot,
    fetch: &FeeFetchState,
) -> FeeDisplay {
    if snapshot.wallet_status != WalletStatus::Connected {
        return FeeDisplay::NotConnected;
    }

    if fetch.currency != props.currency || fetch.tx_type != props.tx_type {
        debug!(
            fetched = ?(fetch.currency, fetch.tx_type),
            requested = ?(props.currency, props.tx_type),
            "discarding stale fee-schedule snapshot"
        );
        return FeeDisplay::Pending;
    }
    let fees = match (&fetch.fees, fetch.pending) {
        (Some(fees), false) => fees,
        _ => return FeeDisplay::Pending,
    };

    let currency_config = props.currency.config();
    let currency_usd_rate = find_exchange_rate(&snapshot.rates, props.currency, USD_SYMBOL);
    let eth_usd_rate = find_exchange_rate(&snapshot.rates, BridgeCurrency::Eth, USD_SYMBOL);

    let breakdown = transaction_fees(props.amount, fees, props.tx_type);
    let destination = props.currency.released_currency();
    let tooltips = fee_tooltips(
        fees.protocol_fee_fraction(TxType::Mint),
        fees.protocol_fee_fraction(TxType::Release),
        props.currency,
        destination,
        props.tx_type,
    );

    let ren_vm_fee_usd = currency_usd_rate.map(|rate| breakdown.ren_vm_fee_amount * rate);
    let network_fee_usd = currency_usd_rate.map(|rate| breakdown.network_fee * rate);

    let (gas_fee_label, gas_fee_usd) = match &snapshot.gas_prices {
        Some(gas_prices) => {
            let gwei = fee_in_gwei(MINT_GAS_UNIT_COST, gas_prices.standard);
            let usd = eth_usd_rate.map(|rate| from_gwei(gwei) * rate);
            (format!("{} Gwei", gwei.normalize()), usd)
        }
        None => (VALUE_PLACEHOLDER.to_string(), None),
    };

    FeeDisplay::Ready(vec![
        FeeRow {
            label: "RenVM Fee".to_string(),
            tooltip: tooltips.ren_vm_fee,
            value: format_amount(breakdown.ren_vm_fee_amount, currency_config.short),
            value_usd: ren_vm_fee_usd.map(format_usd),
        },
        FeeRow {
            label: format!("{} Miner Fee", currency_config.full),
            tooltip: tooltips.source_miner_fee,
            value: format_amount(breakdown.network_fee, currency_config.short),
            value_usd: network_fee_usd.map(format_usd),
        },
        FeeRow {
            label: "Esti. Ethereum Fee".to_string(),
            tooltip: tooltips.destination_gas_fee,
            value: gas_fee_label,
            value_usd: gas_fee_usd.map(format_usd),
        },
    ])
}
