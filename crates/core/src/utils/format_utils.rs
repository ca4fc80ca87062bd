use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats a money amount as `<symbol><sign><grouped digits>.<2 decimals>`.
///
/// Integer digits are grouped in threes with `,`. The sign sits after the
/// symbol, e.g. `DH -1,234.50`. Amounts that round to zero carry no sign.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = round_for_display(value, DISPLAY_DECIMAL_PRECISION);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}{}{}.{}", symbol, sign, group_thousands(int_part), frac_part)
}

/// Formats a percentage with a fixed number of decimals and a trailing `%`.
pub fn format_percentage(value: Decimal, digits: u32) -> String {
    let rounded = round_for_display(value, digits);
    format!("{:.*}%", digits as usize, rounded)
}

fn round_for_display(value: Decimal, digits: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CURRENCY_SYMBOL;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(1234.5), "$"), "$1,234.50");
        assert_eq!(format_currency(dec!(1234567.891), "$"), "$1,234,567.89");
        assert_eq!(format_currency(dec!(999.999), "$"), "$1,000.00");
        assert_eq!(format_currency(dec!(12), "$"), "$12.00");
    }

    #[test]
    fn test_format_currency_default_symbol() {
        assert_eq!(format_currency(dec!(1234.5), DEFAULT_CURRENCY_SYMBOL), "DH 1,234.50");
    }

    #[test]
    fn test_format_currency_keeps_sign() {
        assert_eq!(format_currency(dec!(-1234.5), "$"), "$-1,234.50");
        assert_eq!(format_currency(dec!(-0.001), "$"), "$0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(0.005), "$"), "$0.01");
        assert_eq!(format_currency(dec!(-0.005), "$"), "$-0.01");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(12.345), 2), "12.35%");
        assert_eq!(format_percentage(dec!(-50), 2), "-50.00%");
        assert_eq!(format_percentage(dec!(7.25), 1), "7.3%");
        assert_eq!(format_percentage(dec!(-0.0001), 2), "0.00%");
    }
}
