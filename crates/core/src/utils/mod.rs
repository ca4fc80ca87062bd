//! Pure numeric and formatting helpers shared by the aggregation engine and
//! the runtimes that render its output.

pub mod format_utils;
pub mod math_utils;
pub mod time_utils;

pub use format_utils::{format_currency, format_percentage};
pub use math_utils::{
    checked_percentage_change, checked_percentage_of, percentage_change, percentage_of,
};
pub use time_utils::{format_date, format_date_str, parse_date, DateStyle};
