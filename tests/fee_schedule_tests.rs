use rust_decimal::Decimal;

use bridge_fees::assets::BridgeChain;
use bridge_fees::fees::{
    mint_and_release_fees, transaction_fees, BridgeFees, ChainFeeEntry, ScheduleError, TxType,
};

fn ethereum_entry() -> ChainFeeEntry {
    ChainFeeEntry {
        chain: BridgeChain::Ethereum,
        min: Decimal::new(35, 5),  // 0.00035
        burn: Decimal::new(70, 5), // 0.0007
    }
}

fn schedule(chains: Vec<ChainFeeEntry>) -> BridgeFees {
    BridgeFees {
        mint_bps: 10,
        burn_bps: 10,
        chains,
    }
}

#[test]
fn test_mint_and_release_fees_reads_first_ethereum_entry() {
    let fees = schedule(vec![ethereum_entry()]);
    let fixed = mint_and_release_fees(&fees);
    assert_eq!(fixed.mint, Decimal::new(35, 5));
    assert_eq!(fixed.release, Decimal::new(70, 5));
}

#[test]
fn test_mint_and_release_fees_empty_table_is_zero() {
    let fees = schedule(vec![]);
    let fixed = mint_and_release_fees(&fees);
    assert_eq!(fixed.mint, Decimal::ZERO);
    assert_eq!(fixed.release, Decimal::ZERO);
}

#[test]
fn test_mint_and_release_fees_non_ethereum_first_entry_is_zero() {
    let fees = schedule(vec![
        ChainFeeEntry {
            chain: BridgeChain::BinanceSmartChain,
            min: Decimal::ONE,
            burn: Decimal::ONE,
        },
        ethereum_entry(),
    ]);
    let fixed = mint_and_release_fees(&fees);
    assert_eq!(fixed.mint, Decimal::ZERO);
    assert_eq!(fixed.release, Decimal::ZERO);
}

#[test]
fn test_protocol_fee_fraction_from_basis_points() {
    let fees = BridgeFees {
        mint_bps: 10,
        burn_bps: 25,
        chains: vec![],
    };
    assert_eq!(fees.protocol_fee_fraction(TxType::Mint), Decimal::new(1, 3));
    assert_eq!(fees.protocol_fee_fraction(TxType::Release), Decimal::new(25, 4));
}

#[test]
fn test_transaction_fees_amount_times_fraction() {
    let fees = schedule(vec![ethereum_entry()]);
    let amount = Decimal::new(15, 1); // 1.5
    let breakdown = transaction_fees(amount, &fees, TxType::Mint);
    assert_eq!(breakdown.ren_vm_fee, Decimal::new(1, 3));
    assert_eq!(breakdown.ren_vm_fee_amount, amount * breakdown.ren_vm_fee);
    assert!(breakdown.ren_vm_fee_amount >= Decimal::ZERO);
    assert_eq!(breakdown.network_fee, Decimal::new(35, 5));
}

#[test]
fn test_transaction_fees_zero_amount_yields_zero_protocol_fee() {
    let fees = schedule(vec![ethereum_entry()]);
    let breakdown = transaction_fees(Decimal::ZERO, &fees, TxType::Mint);
    assert_eq!(breakdown.ren_vm_fee_amount, Decimal::ZERO);
    // Fixed miner fee is unaffected by the amount
    assert_eq!(breakdown.network_fee, Decimal::new(35, 5));
}

#[test]
fn test_transaction_fees_release_uses_burn_figures() {
    let fees = BridgeFees {
        mint_bps: 10,
        burn_bps: 20,
        chains: vec![ethereum_entry()],
    };
    let breakdown = transaction_fees(Decimal::ONE, &fees, TxType::Release);
    assert_eq!(breakdown.ren_vm_fee, Decimal::new(2, 3));
    assert_eq!(breakdown.network_fee, Decimal::new(70, 5));
}

#[test]
fn test_from_json_parses_schedule() {
    let payload = serde_json::json!({
        "mint": 10,
        "burn": 15,
        "chains": [
            { "chain": "ethereum", "min": "0.00035", "burn": 0.0007 },
            { "chain": "bsc", "min": "0.0001", "burn": "0.0002" }
        ]
    });
    let fees = BridgeFees::from_json(payload).unwrap();
    assert_eq!(fees.mint_bps, 10);
    assert_eq!(fees.burn_bps, 15);
    assert_eq!(fees.chains.len(), 2);
    assert_eq!(fees.chains[0].chain, BridgeChain::Ethereum);
    assert_eq!(fees.chains[0].min, Decimal::new(35, 5));
    assert_eq!(fees.chains[1].chain, BridgeChain::BinanceSmartChain);
}

#[test]
fn test_from_json_skips_unknown_chains() {
    let payload = serde_json::json!({
        "mint": 10,
        "burn": 10,
        "chains": [
            { "chain": "solana", "min": "1", "burn": "1" },
            { "chain": "ethereum", "min": "0.00035", "burn": "0.0007" }
        ]
    });
    let fees = BridgeFees::from_json(payload).unwrap();
    assert_eq!(fees.chains.len(), 1);
    assert_eq!(fees.chains[0].chain, BridgeChain::Ethereum);
}

#[test]
fn test_from_json_missing_field() {
    let payload = serde_json::json!({ "mint": 10, "chains": [] });
    let err = BridgeFees::from_json(payload).unwrap_err();
    assert!(matches!(err, ScheduleError::MissingField(_)));
}

#[test]
fn test_from_json_rejects_negative_basis_points() {
    let payload = serde_json::json!({ "mint": -5, "burn": 10, "chains": [] });
    let err = BridgeFees::from_json(payload).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidFormat(_)));
}
