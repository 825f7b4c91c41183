//! Currency display formatting.

use sole_core::Money;

/// Format a monetary amount as a display string, e.g. `"$149.99"`.
///
/// Two-decimal precision always; amounts are minor-unit integers so no
/// rounding happens here (decimal input is rounded once, at [`Money`]
/// construction).
pub fn format_money(money: &Money) -> String {
    format!(
        "{}{}.{:02}",
        money.currency().symbol(),
        money.units(),
        money.subunits()
    )
}

/// Format an optional amount, returning an empty string when absent.
///
/// Views call this unconditionally (e.g. on `sale_price` for a record that is
/// not discounted) and simply render nothing.
pub fn format_price(price: Option<&Money>) -> String {
    price.map(format_money).unwrap_or_default()
}
