use rust_decimal::Decimal;

use crate::assets::BridgeCurrency;
use crate::fees::format::format_percent;
use crate::fees::TxType;

/// Tooltip text for the three fee rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTooltips {
    pub ren_vm_fee: String,
    pub source_miner_fee: String,
    pub destination_gas_fee: String,
}

/// Builds the tooltip strings for a quote.
///
/// The protocol-fee text quotes the fraction for the transaction's actual
/// direction: `mint_fraction` for mints, `release_fraction` for releases.
pub fn fee_tooltips(
    mint_fraction: Decimal,
    release_fraction: Decimal,
    source: BridgeCurrency,
    destination: BridgeCurrency,
    tx_type: TxType,
) -> FeeTooltips {
    let (fraction, direction) = match tx_type {
        TxType::Mint => (mint_fraction, "mint"),
        TxType::Release => (release_fraction, "release"),
    };
    let source_config = source.config();
    let destination_config = destination.config();
    FeeTooltips {
        ren_vm_fee: format!(
            "RenVM takes a {} fee per {} transaction. This is shared evenly between all active nodes in the decentralized network.",
            format_percent(fraction),
            direction,
        ),
        source_miner_fee: format!(
            "The fee required by {} miners to move {}. This does not go to the RenVM network.",
            source_config.full, source_config.short,
        ),
        destination_gas_fee: format!(
            "The estimated cost of minting {} on the Ethereum network. This fee goes to Ethereum miners and is paid in ETH.",
            destination_config.short,
        ),
    }
}
