use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percentage change from `old_value` to `new_value`.
///
/// Returns zero when `old_value` is zero. The denominator is the absolute
/// old value, so a move from -100 to -50 reads as +50%. A result beyond the
/// Decimal range is clamped to `Decimal::MAX` / `Decimal::MIN`.
pub fn percentage_change(old_value: Decimal, new_value: Decimal) -> Decimal {
    checked_percentage_change(old_value, new_value).unwrap_or_else(|| {
        if new_value > old_value {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// [`percentage_change`], or `None` when the result overflows.
pub fn checked_percentage_change(old_value: Decimal, new_value: Decimal) -> Option<Decimal> {
    if old_value.is_zero() {
        return Some(Decimal::ZERO);
    }
    new_value
        .checked_sub(old_value)?
        .checked_div(old_value.abs())?
        .checked_mul(dec!(100))
}

/// Share of `part` in `total`, as a percentage. Zero when `total` is zero.
/// Clamped like [`percentage_change`].
pub fn percentage_of(part: Decimal, total: Decimal) -> Decimal {
    checked_percentage_of(part, total).unwrap_or_else(|| {
        if part.is_sign_negative() == total.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// [`percentage_of`], or `None` when the result overflows.
pub fn checked_percentage_of(part: Decimal, total: Decimal) -> Option<Decimal> {
    if total.is_zero() {
        return Some(Decimal::ZERO);
    }
    part.checked_div(total)?.checked_mul(dec!(100))
}
