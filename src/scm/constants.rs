//! Collection defaults
//!
//! Centralized definitions for default paths, time windows and the date
//! formats accepted for window bounds.

/// Repository path used when none is given
pub const DEFAULT_PATH: &str = ".";

/// How far back collection goes when no `after` bound is given
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Date formats accepted by [`DateBound::parse`](super::DateBound::parse)
pub mod formats {
    /// Date and time without offset (parsed as a naive bound)
    pub const NAIVE_DATETIME: &str = "%Y-%m-%d %H:%M:%S";
    /// Calendar date without offset (parsed as a naive bound at midnight)
    pub const NAIVE_DATE: &str = "%Y-%m-%d";
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    #[test]
    fn test_naive_date_format() {
        let date = NaiveDate::parse_from_str("2023-06-01", formats::NAIVE_DATE).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        // Trailing time or offset is not part of a calendar date
        assert!(NaiveDate::parse_from_str("2023-06-01T00:00:00Z", formats::NAIVE_DATE).is_err());
    }

    #[test]
    fn test_naive_datetime_format_needs_space_separator() {
        let date =
            NaiveDateTime::parse_from_str("2023-06-01 12:30:00", formats::NAIVE_DATETIME).unwrap();
        assert_eq!(date.to_string(), "2023-06-01 12:30:00");
        assert!(
            NaiveDateTime::parse_from_str("2023-06-01T12:30:00", formats::NAIVE_DATETIME).is_err()
        );
        assert!(NaiveDateTime::parse_from_str("2023-06-01", formats::NAIVE_DATETIME).is_err());
    }
}
