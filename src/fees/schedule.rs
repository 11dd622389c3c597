use rust_decimal::Decimal;

use crate::assets::BridgeChain;
use crate::fees::TxType;
use crate::market::gas::parse_decimal;

/// Variable protocol fees are quoted in basis points.
const BPS_DENOM: u32 = 10_000;

/// Errors raised while parsing a fee-schedule payload.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Fixed per-chain fee figures, in source-currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFeeEntry {
    pub chain: BridgeChain,
    /// Minimum fee charged on a mint
    pub min: Decimal,
    /// Fee charged on a burn (release)
    pub burn: Decimal,
}

/// Fee schedule for one currency, fetched from the fee provider.
///
/// Variable protocol-fee fractions are carried in basis points; the fixed
/// per-chain figures live in `chains`, first entry being the primary host
/// chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeFees {
    /// Protocol fee on mints, in basis points
    pub mint_bps: u32,
    /// Protocol fee on burns, in basis points
    pub burn_bps: u32,
    pub chains: Vec<ChainFeeEntry>,
}

impl BridgeFees {
    /// Protocol fee fraction for the given transaction direction.
    pub fn protocol_fee_fraction(&self, tx_type: TxType) -> Decimal {
        let bps = match tx_type {
            TxType::Mint => self.mint_bps,
            TxType::Release => self.burn_bps,
        };
        Decimal::from(bps) / Decimal::from(BPS_DENOM)
    }

    /// Parses a fee-schedule payload:
    /// `{ "mint": 10, "burn": 10, "chains": [ { "chain": "ethereum",
    /// "min": "0.0007", "burn": "0.00035" }, ... ] }`.
    ///
    /// Entries for chains the bridge does not support are skipped.
    pub fn from_json(payload: serde_json::Value) -> Result<Self, ScheduleError> {
        let obj = payload.as_object().ok_or_else(|| {
            ScheduleError::InvalidFormat("Fee schedule must be a JSON object".to_string())
        })?;

        let mint_bps = parse_bps(
            obj.get("mint")
                .ok_or_else(|| ScheduleError::MissingField("mint".to_string()))?,
        )?;
        let burn_bps = parse_bps(
            obj.get("burn")
                .ok_or_else(|| ScheduleError::MissingField("burn".to_string()))?,
        )?;

        let chains_array = obj
            .get("chains")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ScheduleError::MissingField("chains".to_string()))?;

        let mut chains = Vec::with_capacity(chains_array.len());
        for (idx, entry) in chains_array.iter().enumerate() {
            let entry_obj = entry.as_object().ok_or_else(|| {
                ScheduleError::InvalidFormat(format!("Chain entry at index {} must be a JSON object", idx))
            })?;

            let chain_id = entry_obj
                .get("chain")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ScheduleError::MissingField(format!("chain (entry at index {})", idx)))?;
            let chain = match BridgeChain::from_id(chain_id) {
                Some(chain) => chain,
                None => continue,
            };

            let min = parse_schedule_decimal(entry_obj.get("min"), "min", idx)?;
            let burn = parse_schedule_decimal(entry_obj.get("burn"), "burn", idx)?;

            chains.push(ChainFeeEntry { chain, min, burn });
        }

        Ok(Self {
            mint_bps,
            burn_bps,
            chains,
        })
    }
}

fn parse_bps(value: &serde_json::Value) -> Result<u32, ScheduleError> {
    value
        .as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            ScheduleError::InvalidFormat(format!("Basis-point value must be a small non-negative integer: {}", value))
        })
}

fn parse_schedule_decimal(
    value: Option<&serde_json::Value>,
    field: &str,
    idx: usize,
) -> Result<Decimal, ScheduleError> {
    let value = value
        .ok_or_else(|| ScheduleError::MissingField(format!("{} (entry at index {})", field, idx)))?;
    parse_decimal(value).map_err(|e| ScheduleError::InvalidFormat(e.to_string()))
}

/// Fixed mint and release fee figures, read from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintAndReleaseFees {
    pub mint: Decimal,
    pub release: Decimal,
}

/// Reads the fixed fee figures from the first chain entry, which must be the
/// Ethereum entry. An empty table, or a table whose first entry is for
/// another chain, yields zero fees.
pub fn mint_and_release_fees(fees: &BridgeFees) -> MintAndReleaseFees {
    match fees.chains.first() {
        Some(entry) if entry.chain == BridgeChain::Ethereum => MintAndReleaseFees {
            mint: entry.min,
            release: entry.burn,
        },
        _ => MintAndReleaseFees {
            mint: Decimal::ZERO,
            release: Decimal::ZERO,
        },
    }
}

/// Per-transaction fee breakdown derived from a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionFees {
    /// Protocol fee as a fraction of the amount
    pub ren_vm_fee: Decimal,
    /// Protocol fee in source-currency units
    pub ren_vm_fee_amount: Decimal,
    /// Source-network miner fee in source-currency units
    pub network_fee: Decimal,
}

/// Derives the fee breakdown for a transaction.
///
/// `ren_vm_fee_amount` is `amount × fraction`, so it is non-negative whenever
/// `amount` is; a zero amount simply yields zero fees.
pub fn transaction_fees(amount: Decimal, fees: &BridgeFees, tx_type: TxType) -> TransactionFees {
    let ren_vm_fee = fees.protocol_fee_fraction(tx_type);
    let fixed = mint_and_release_fees(fees);
    let network_fee = match tx_type {
        TxType::Mint => fixed.mint,
        TxType::Release => fixed.release,
    };
    TransactionFees {
        ren_vm_fee,
        ren_vm_fee_amount: amount * ren_vm_fee,
        network_fee,
    }
}
