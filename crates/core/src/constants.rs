/// Currency symbol prepended by `format_currency` when none is configured
pub const DEFAULT_CURRENCY_SYMBOL: &str = "DH ";

/// Decimal places used for displayed money amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places used for displayed percentages
pub const PERCENTAGE_DECIMAL_PRECISION: u32 = 2;

/// Rendered by `format_date` for input that is not a date
pub const INVALID_DATE: &str = "Invalid Date";
