use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Look-back windows offered for the history chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimePeriod {
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "MTD")]
    MonthToDate,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "LAST_60_DAYS")]
    Last60Days,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::OneYear,
        TimePeriod::SixMonths,
        TimePeriod::MonthToDate,
        TimePeriod::YearToDate,
        TimePeriod::Last60Days,
    ];

    /// First date of the window ending on `anchor`.
    pub fn start_date(self, anchor: NaiveDate) -> NaiveDate {
        let start = match self {
            TimePeriod::OneYear => anchor.checked_sub_months(Months::new(12)),
            TimePeriod::SixMonths => anchor.checked_sub_months(Months::new(6)),
            TimePeriod::MonthToDate => anchor.with_day(1),
            TimePeriod::YearToDate => NaiveDate::from_ymd_opt(anchor.year(), 1, 1),
            TimePeriod::Last60Days => anchor.checked_sub_signed(chrono::Duration::days(60)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    pub fn code(self) -> &'static str {
        match self {
            TimePeriod::OneYear => "1Y",
            TimePeriod::SixMonths => "6M",
            TimePeriod::MonthToDate => "MTD",
            TimePeriod::YearToDate => "YTD",
            TimePeriod::Last60Days => "LAST_60_DAYS",
        }
    }
}

impl FromStr for TimePeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "1Y" => Ok(TimePeriod::OneYear),
            "6M" => Ok(TimePeriod::SixMonths),
            "MTD" => Ok(TimePeriod::MonthToDate),
            "YTD" => Ok(TimePeriod::YearToDate),
            "LAST_60_DAYS" | "60D" => Ok(TimePeriod::Last60Days),
            _ => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown time period '{}'",
                s
            )))),
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Change in portfolio value across a [`TimePeriod`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryChange {
    pub period: TimePeriod,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_value: Decimal,
    pub end_value: Decimal,
    pub value_change: Decimal,
    pub percent_change: Decimal,
}

impl HistoryChange {
    /// No measurable change: fewer than two points in the window.
    pub fn flat(period: TimePeriod) -> Self {
        Self {
            period,
            start_date: None,
            end_date: None,
            start_value: Decimal::ZERO,
            end_value: Decimal::ZERO,
            value_change: Decimal::ZERO,
            percent_change: Decimal::ZERO,
        }
    }
}
