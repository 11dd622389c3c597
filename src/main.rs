use rust_decimal::Decimal;

use bridge_fees::fees::{
    build_fee_display, FeeDisplay, FeeFetchState, MarketSnapshot, TransactionFeesProps,
    WalletStatus,
};
use bridge_fees::market::{ExchangeRate, GasPrices, USD_SYMBOL};
use bridge_fees::{BridgeCurrency, BridgeFees, TxType};

fn main() {
    let schedule = serde_json::json!({
        "mint": 10,
        "burn": 10,
        "chains": [
            { "chain": "ethereum", "min": "0.00035", "burn": "0.0007" }
        ]
    });
    let fees = BridgeFees::from_json(schedule).expect("static schedule is well-formed");

    let props = TransactionFeesProps {
        tx_type: TxType::Mint,
        currency: BridgeCurrency::Btc,
        amount: Decimal::new(15, 1), // 1.5 BTC
    };
    let snapshot = MarketSnapshot {
        wallet_status: WalletStatus::Connected,
        rates: vec![
            ExchangeRate::new(BridgeCurrency::Btc, USD_SYMBOL, Decimal::from(39_000)),
            ExchangeRate::new(BridgeCurrency::Eth, USD_SYMBOL, Decimal::from(2_400)),
        ],
        gas_prices: Some(GasPrices::new(
            Decimal::from(50),
            Decimal::from(70),
            Decimal::from(35),
        )),
    };
    let fetch = FeeFetchState {
        currency: props.currency,
        tx_type: props.tx_type,
        pending: false,
        fees: Some(fees),
    };

    match build_fee_display(&props, &snapshot, &fetch) {
        FeeDisplay::NotConnected => println!("Connect a wallet to view fees"),
        FeeDisplay::Pending => println!("Loading fees..."),
        FeeDisplay::Ready(rows) => {
            for row in rows {
                println!(
                    "{}: {} ({})",
                    row.label,
                    row.value,
                    row.value_usd.unwrap_or_else(|| "-".to_string()),
                );
            }
        }
    }
}
