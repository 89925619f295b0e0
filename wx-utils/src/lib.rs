//! Shared utility functions for the forecast crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateCodeError;
    use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
    use std::fmt::Display;

    /// Display format for forecast cards, e.g. "Mon Jan 2024".
    pub const CARD_DATE_FORMAT: &str = "%a %b %Y";

    /// Parse a compact "YYYYMMDD" date code (the forecast API's `date` field).
    ///
    /// The code must be exactly eight ASCII digits naming a real calendar day.
    pub fn parse_date_code(code: &str) -> Result<NaiveDate, DateCodeError> {
        if code.len() != 8 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateCodeError::Malformed(code.to_string()));
        }
        let field = |range: std::ops::Range<usize>| {
            code[range]
                .parse::<u32>()
                .map_err(|_| DateCodeError::Malformed(code.to_string()))
        };
        let year = field(0..4)?;
        let month = field(4..6)?;
        let day = field(6..8)?;
        NaiveDate::from_ymd_opt(year as i32, month, day)
            .ok_or_else(|| DateCodeError::NotACalendarDate(code.to_string()))
    }

    /// Format a date code as "<Day> <Mon> <Year>" in the given time zone.
    ///
    /// Names are taken from local midnight of the coded day in `tz`. If that
    /// midnight falls in a DST gap the calendar date is formatted directly.
    pub fn format_date_code_in<Tz>(code: &str, tz: &Tz) -> Result<String, DateCodeError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let date = parse_date_code(code)?;
        let midnight = date.and_time(NaiveTime::default());
        let formatted = match tz.from_local_datetime(&midnight).earliest() {
            Some(local) => local.format(CARD_DATE_FORMAT).to_string(),
            None => date.format(CARD_DATE_FORMAT).to_string(),
        };
        Ok(formatted)
    }

    /// Format a date code using the executing environment's local time zone.
    ///
    /// Output depends on the host's zone settings; use [`format_date_code_in`]
    /// where a fixed zone is needed.
    pub fn format_date_code(code: &str) -> Result<String, DateCodeError> {
        format_date_code_in(code, &Local)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{FixedOffset, Utc};

        #[test]
        fn test_parse_date_code() {
            let date = parse_date_code("20240101").unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

            let last = parse_date_code("20231231").unwrap();
            assert_eq!(last, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        }

        #[test]
        fn test_format_new_year_2024() {
            assert_eq!(format_date_code("20240101").unwrap(), "Mon Jan 2024");
            assert_eq!(format_date_code_in("20240101", &Utc).unwrap(), "Mon Jan 2024");
        }

        #[test]
        fn test_format_is_stable_across_fixed_offsets() {
            let west = FixedOffset::west_opt(10 * 3600).unwrap();
            let east = FixedOffset::east_opt(13 * 3600).unwrap();
            assert_eq!(format_date_code_in("20240101", &west).unwrap(), "Mon Jan 2024");
            assert_eq!(format_date_code_in("20240101", &east).unwrap(), "Mon Jan 2024");
        }

        #[test]
        fn test_format_leap_day() {
            assert_eq!(format_date_code_in("20240229", &Utc).unwrap(), "Thu Feb 2024");
        }

        #[test]
        fn test_malformed_codes() {
            for code in [
                "",
                "2024011",
                "202401011",
                "2024-1-1",
                "abcdefgh",
                "+2024010",
                " 20231231 ",
                "20231231\n",
            ] {
                assert!(
                    matches!(parse_date_code(code), Err(DateCodeError::Malformed(_))),
                    "expected malformed for {code:?}"
                );
            }
        }

        #[test]
        fn test_impossible_dates() {
            for code in ["20241301", "20240230", "20230229", "20240100"] {
                assert!(
                    matches!(parse_date_code(code), Err(DateCodeError::NotACalendarDate(_))),
                    "expected invalid calendar date for {code:?}"
                );
            }
            assert!(format_date_code("20240230").is_err());
        }
    }
}

/// Error types
pub mod error {
    use thiserror::Error;

    /// A date code that could not be turned into a calendar date.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum DateCodeError {
        #[error("Date code must be 8 digits (YYYYMMDD): {0:?}")]
        Malformed(String),

        #[error("Date code is not a calendar date: {0}")]
        NotACalendarDate(String),
    }
}
