use rust_decimal::Decimal;

use bridge_fees::assets::BridgeChain;
use bridge_fees::{AssetBalance, BridgeCurrency, WalletStore};

fn balance(symbol: BridgeCurrency, value: i64) -> AssetBalance {
    AssetBalance::new(symbol, Decimal::from(value))
}

#[test]
fn test_defaults() {
    let store = WalletStore::new();
    assert_eq!(store.chain(), BridgeChain::Ethereum);
    assert!(!store.picker_opened());
    assert!(store.balances().is_empty());
}

#[test]
fn test_set_chain_replaces_unconditionally() {
    let mut store = WalletStore::new();
    store.set_chain(BridgeChain::BinanceSmartChain);
    assert_eq!(store.chain(), BridgeChain::BinanceSmartChain);
    store.set_chain(BridgeChain::Ethereum);
    assert_eq!(store.chain(), BridgeChain::Ethereum);
}

#[test]
fn test_picker_flag_toggles_freely() {
    let mut store = WalletStore::new();
    store.set_wallet_picker_opened(true);
    assert!(store.picker_opened());
    store.set_wallet_picker_opened(false);
    assert!(!store.picker_opened());
}

#[test]
fn test_add_balance_appends_new_symbol() {
    let mut store = WalletStore::new();
    store.add_or_update_balance(balance(BridgeCurrency::Btc, 1));
    store.add_or_update_balance(balance(BridgeCurrency::Eth, 2));
    assert_eq!(store.balances().len(), 2);
    assert_eq!(store.balances()[0].symbol, BridgeCurrency::Btc);
    assert_eq!(store.balances()[1].symbol, BridgeCurrency::Eth);
}

#[test]
fn test_update_balance_replaces_in_place() {
    let mut store = WalletStore::new();
    store.add_or_update_balance(balance(BridgeCurrency::Btc, 1));
    store.add_or_update_balance(balance(BridgeCurrency::Eth, 2));
    store.add_or_update_balance(balance(BridgeCurrency::Btc, 5));
    // Position preserved, value replaced, no duplicate entry
    assert_eq!(store.balances().len(), 2);
    assert_eq!(store.balances()[0].symbol, BridgeCurrency::Btc);
    assert_eq!(store.balances()[0].balance, Decimal::from(5));
    assert_eq!(store.balances()[1].symbol, BridgeCurrency::Eth);
}

#[test]
fn test_add_or_update_balance_is_idempotent() {
    let mut once = WalletStore::new();
    once.add_or_update_balance(balance(BridgeCurrency::Btc, 3));

    let mut twice = WalletStore::new();
    twice.add_or_update_balance(balance(BridgeCurrency::Btc, 3));
    twice.add_or_update_balance(balance(BridgeCurrency::Btc, 3));

    assert_eq!(once.balances(), twice.balances());
}

#[test]
fn test_balance_of() {
    let mut store = WalletStore::new();
    store.add_or_update_balance(balance(BridgeCurrency::Btc, 7));
    assert_eq!(store.balance_of(BridgeCurrency::Btc), Some(Decimal::from(7)));
    assert_eq!(store.balance_of(BridgeCurrency::Zec), None);
}

#[test]
fn test_multiwallet_chain_mapping() {
    let mut store = WalletStore::new();
    assert_eq!(store.multiwallet_chain(), "ethereum");
    store.set_chain(BridgeChain::BinanceSmartChain);
    assert_eq!(store.multiwallet_chain(), "bsc");
}
