//! Time window of a log collection

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::ScmError;
use super::constants::formats;

/// A window bound as supplied by the caller
///
/// Only [`DateBound::Aware`] is accepted by [`CollectorConfig`]; naive
/// bounds are representable so that they can be rejected explicitly
/// instead of being silently read as local or UTC time.
///
/// [`CollectorConfig`]: super::CollectorConfig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// Date with a known offset
    Aware(DateTime<FixedOffset>),

    /// Date without timezone information
    Naive(NaiveDateTime),
}

impl DateBound {
    /// Parse a bound from text
    ///
    /// RFC 3339 strings (`2023-01-01T00:00:00Z`) are aware. `2023-01-01
    /// 12:00:00` and `2023-01-01` are accepted but naive.
    pub fn parse(text: &str) -> Result<Self, ScmError> {
        let text = text.trim();

        if let Ok(date) = DateTime::parse_from_rfc3339(text) {
            return Ok(DateBound::Aware(date));
        }
        if let Ok(date) = NaiveDateTime::parse_from_str(text, formats::NAIVE_DATETIME) {
            return Ok(DateBound::Naive(date));
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, formats::NAIVE_DATE)
            && let Some(midnight) = date.and_hms_opt(0, 0, 0)
        {
            return Ok(DateBound::Naive(midnight));
        }

        Err(ScmError::InvalidArgument(format!(
            "cannot parse date: {:?}",
            text
        )))
    }

    /// Resolve to a UTC instant, rejecting naive dates
    pub(super) fn into_utc(self, name: &str) -> Result<DateTime<Utc>, ScmError> {
        match self {
            DateBound::Aware(date) => Ok(date.with_timezone(&Utc)),
            DateBound::Naive(date) => Err(ScmError::InvalidArgument(format!(
                "dates are expected to be timezone-aware, got naive {} = {}",
                name, date
            ))),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateBound {
    fn from(date: DateTime<Tz>) -> Self {
        DateBound::Aware(date.fixed_offset())
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(date: NaiveDateTime) -> Self {
        DateBound::Naive(date)
    }
}

/// Validated `[after, before]` bounds, both in UTC
///
/// `None` on either side means the window is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
}

impl TimeWindow {
    pub(super) fn new(after: Option<DateTime<Utc>>, before: Option<DateTime<Utc>>) -> Self {
        Self { after, before }
    }

    /// Start of the window
    pub fn after(&self) -> Option<DateTime<Utc>> {
        self.after
    }

    /// End of the window (`None` = up to the latest revision)
    pub fn before(&self) -> Option<DateTime<Utc>> {
        self.before
    }

    /// End of the window, falling back to `now` when open-ended
    pub fn end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.before.unwrap_or(now)
    }

    /// Is the date inside the window (bounds included)?
    pub fn contains<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> bool {
        let date = date.with_timezone(&Utc);
        self.after.is_none_or(|after| after <= date)
            && self.before.is_none_or(|before| date <= before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_parse_rfc3339_is_aware() {
        let bound = DateBound::parse("2023-01-01T00:00:00Z").unwrap();
        assert!(matches!(bound, DateBound::Aware(_)));

        let bound = DateBound::parse("2023-01-01T09:00:00+09:00").unwrap();
        assert_eq!(bound.into_utc("after").unwrap(), utc("2023-01-01T00:00:00Z"));
    }

    #[test]
    fn test_parse_naive_formats() {
        assert!(matches!(
            DateBound::parse("2023-01-01 12:30:00").unwrap(),
            DateBound::Naive(_)
        ));
        assert!(matches!(
            DateBound::parse("2023-01-01").unwrap(),
            DateBound::Naive(_)
        ));
    }

    #[test]
    fn test_parse_garbage() {
        let err = DateBound::parse("last tuesday").unwrap_err();
        assert!(matches!(err, ScmError::InvalidArgument(_)));
    }

    #[test]
    fn test_naive_bound_rejected() {
        let bound = DateBound::parse("2023-01-01").unwrap();
        let err = bound.into_utc("before").unwrap_err();
        match err {
            ScmError::InvalidArgument(msg) => assert!(msg.contains("before")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_utc_datetime() {
        let date = utc("2023-06-01T00:00:00Z");
        assert_eq!(DateBound::from(date).into_utc("after").unwrap(), date);
    }

    #[test]
    fn test_contains() {
        let window = TimeWindow::new(
            Some(utc("2023-01-01T00:00:00Z")),
            Some(utc("2023-12-31T00:00:00Z")),
        );
        assert!(window.contains(&utc("2023-01-01T00:00:00Z")));
        assert!(window.contains(&utc("2023-06-01T00:00:00Z")));
        assert!(!window.contains(&utc("2022-12-31T23:59:59Z")));
        assert!(!window.contains(&utc("2024-01-01T00:00:00Z")));
    }

    #[test]
    fn test_open_window() {
        let window = TimeWindow::new(None, None);
        assert!(window.contains(&utc("1970-01-01T00:00:00Z")));
        let now = utc("2024-01-01T00:00:00Z");
        assert_eq!(window.end(now), now);
    }
}
