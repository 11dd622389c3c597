use rust_decimal::Decimal;

/// Formats a USD-equivalent value with a fixed two-decimal scale,
/// e.g. `12.3` → `"$12.30"`.
pub fn format_usd(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    format!("${}", rounded)
}

/// Formats a native-currency value with a spaced ticker suffix, trailing
/// zeros trimmed, e.g. `0.1000` → `"0.1 BTC"`.
pub fn format_amount(value: Decimal, suffix: &str) -> String {
    format!("{} {}", value.normalize(), suffix)
}

/// Formats a fee fraction as a percentage, e.g. `0.001` → `"0.1%"`.
pub fn format_percent(fraction: Decimal) -> String {
    format!("{}%", (fraction * Decimal::ONE_HUNDRED).normalize())
}
