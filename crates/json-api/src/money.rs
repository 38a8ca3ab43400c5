//! Money formatting for cart totals.

use rusty_money::{Findable, Money, iso::Currency};

/// Look up an ISO 4217 currency by code, case-insensitively.
pub(crate) fn find_currency(code: &str) -> Option<&'static Currency> {
    Currency::find(&code.trim().to_ascii_uppercase())
}

/// Render an amount of minor units, e.g. `1000` in GBP as `£10.00`.
///
/// Amounts beyond `i64::MAX` cannot be represented and fall back to the raw
/// minor-unit figure with the currency code.
pub(crate) fn format_minor(amount: u64, currency: &'static Currency) -> String {
    match i64::try_from(amount) {
        Ok(minor) => Money::from_minor(minor, currency).to_string(),
        Err(_) => format!("{amount} {}", currency.iso_alpha_code),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};

    use super::*;

    #[test]
    fn finds_currency_case_insensitively() {
        assert_eq!(find_currency("gbp"), Some(GBP));
        assert_eq!(find_currency(" USD "), Some(USD));
    }

    #[test]
    fn unknown_currency_is_none() {
        assert_eq!(find_currency("XYZ"), None);
    }

    #[test]
    fn formats_minor_units_with_symbol() {
        assert_eq!(format_minor(1_000, GBP), "£10.00");
        assert_eq!(format_minor(1_999, USD), "$19.99");
    }

    #[test]
    fn oversized_amounts_fall_back_to_minor_units() {
        assert_eq!(format_minor(u64::MAX, GBP), format!("{} GBP", u64::MAX));
    }
}
