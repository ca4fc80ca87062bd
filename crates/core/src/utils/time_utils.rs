use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::INVALID_DATE;
use crate::errors::{Error, Result, ValidationError};

/// Named date rendering styles (en-US conventions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `Jan 5, 2024`
    #[default]
    Short,
    /// `January 5, 2024`
    Long,
    /// `01/05/2024`
    Numeric,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Short => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::Numeric => "%m/%d/%Y",
        }
    }
}

impl FromStr for DateStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(DateStyle::Short),
            "long" => Ok(DateStyle::Long),
            "numeric" => Ok(DateStyle::Numeric),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown date style '{}'",
                other
            )))),
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateStyle::Short => "short",
            DateStyle::Long => "long",
            DateStyle::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// Renders a date in the given style.
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    date.format(style.pattern()).to_string()
}

/// Renders a date given as text.
///
/// Input that does not parse renders as `Invalid Date` instead of failing,
/// so a bad value shows up in the output rather than being normalized away.
pub fn format_date_str(input: &str, style: DateStyle) -> String {
    match parse_date(input) {
        Ok(date) => format_date(date, style),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Parses the date formats the tracker accepts: ISO dates, RFC 3339
/// timestamps, naive ISO timestamps, US numeric dates, and the short/long
/// display forms produced by [`format_date`].
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(dt.date());
        }
    }
    for pattern in ["%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, pattern) {
            return Ok(date);
        }
    }

    Err(Error::Validation(ValidationError::InvalidDate(
        input.to_string(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_styles() {
        let d = date(2024, 1, 5);
        assert_eq!(format_date(d, DateStyle::Short), "Jan 5, 2024");
        assert_eq!(format_date(d, DateStyle::Long), "January 5, 2024");
        assert_eq!(format_date(d, DateStyle::Numeric), "01/05/2024");
    }

    #[test]
    fn test_format_date_str_accepts_common_inputs() {
        assert_eq!(format_date_str("2023-11-30", DateStyle::Short), "Nov 30, 2023");
        assert_eq!(
            format_date_str("2023-11-30T15:04:05Z", DateStyle::Numeric),
            "11/30/2023"
        );
        assert_eq!(
            format_date_str("2023-11-30T15:04:05", DateStyle::Long),
            "November 30, 2023"
        );
        assert_eq!(format_date_str("11/30/2023", DateStyle::Short), "Nov 30, 2023");
    }

    #[test]
    fn test_format_date_str_invalid_input() {
        assert_eq!(format_date_str("not a date", DateStyle::Short), INVALID_DATE);
        assert_eq!(format_date_str("2023-02-30", DateStyle::Long), INVALID_DATE);
        assert_eq!(format_date_str("", DateStyle::Numeric), INVALID_DATE);
    }

    #[test]
    fn test_parse_date_round_trips_display_forms() {
        let d = date(2022, 7, 4);
        for style in [DateStyle::Short, DateStyle::Long, DateStyle::Numeric] {
            assert_eq!(parse_date(&format_date(d, style)).unwrap(), d);
        }
    }

    #[test]
    fn test_date_style_from_str() {
        assert_eq!("LONG".parse::<DateStyle>().unwrap(), DateStyle::Long);
        assert_eq!(" numeric ".parse::<DateStyle>().unwrap(), DateStyle::Numeric);
        assert!("weekday".parse::<DateStyle>().is_err());
        assert_eq!(DateStyle::default(), DateStyle::Short);
    }
}
