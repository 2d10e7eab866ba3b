//! Inclusive calendar-date ranges for scoping corpus queries.
//!
//! Bounds parse from `YYYY-MM-DD` strings. When the caller supplies no
//! bounds the range defaults to the last 30 days, matching the scan
//! command's contract.

use chrono::{Days, NaiveDate, Utc};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default lookback window when no bounds are given.
const DEFAULT_LOOKBACK_DAYS: u64 = 30;

#[derive(Debug, Error)]
pub enum DateRangeError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    Unparseable(String),

    #[error("date-after {after} is later than date-before {before}")]
    Inverted { after: NaiveDate, before: NaiveDate },
}

/// An inclusive range of calendar dates: `after ..= before`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub after: NaiveDate,
    /// Inclusive upper bound.
    pub before: NaiveDate,
}

impl DateRange {
    /// Build a range from explicit bounds.
    ///
    /// An inverted range (`after > before`) is rejected up front
    /// rather than paging through an always-empty result set; see
    /// DESIGN.md.
    pub fn new(after: NaiveDate, before: NaiveDate) -> Result<Self, DateRangeError> {
        if after > before {
            return Err(DateRangeError::Inverted { after, before });
        }
        Ok(Self { after, before })
    }

    /// Parse optional `YYYY-MM-DD` bounds, applying defaults for
    /// missing ones: `before` defaults to today, `after` to 30 days
    /// earlier.
    pub fn parse(after: Option<&str>, before: Option<&str>) -> Result<Self, DateRangeError> {
        let today = Utc::now().date_naive();
        let before = match before {
            Some(s) => parse_date(s)?,
            None => today,
        };
        let after = match after {
            Some(s) => parse_date(s)?,
            None => today
                .checked_sub_days(Days::new(DEFAULT_LOOKBACK_DAYS))
                .unwrap_or(today),
        };
        Self::new(after, before)
    }

    /// Whether `date` falls within the range (both bounds inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.after <= date && date <= self.before
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| DateRangeError::Unparseable(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn parses_explicit_bounds() {
        let range = DateRange::parse(Some("2025-01-01"), Some("2025-01-31")).unwrap();
        assert_eq!(range.after, date("2025-01-01"));
        assert_eq!(range.before, date("2025-01-31"));
    }

    #[test]
    fn rejects_unparseable_bound() {
        let err = DateRange::parse(Some("01/02/2025"), Some("2025-01-31")).unwrap_err();
        assert!(matches!(err, DateRangeError::Unparseable(_)));

        let err = DateRange::parse(Some("2025-01-01"), Some("not-a-date")).unwrap_err();
        assert!(matches!(err, DateRangeError::Unparseable(_)));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = DateRange::parse(Some("2025-02-01"), Some("2025-01-01")).unwrap_err();
        assert!(matches!(err, DateRangeError::Inverted { .. }));
    }

    #[test]
    fn defaults_to_last_30_days() {
        let range = DateRange::parse(None, None).unwrap();
        let today = Utc::now().date_naive();
        assert_eq!(range.before, today);
        assert_eq!(range.after, today - Days::new(30));
    }

    #[test]
    fn single_day_range_is_valid() {
        let range = DateRange::parse(Some("2025-06-15"), Some("2025-06-15")).unwrap();
        assert!(range.contains(date("2025-06-15")));
        assert!(!range.contains(date("2025-06-16")));
        assert!(!range.contains(date("2025-06-14")));
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = DateRange::parse(Some("2025-01-01"), Some("2025-01-31")).unwrap();
        assert!(range.contains(date("2025-01-01")));
        assert!(range.contains(date("2025-01-31")));
        assert!(!range.contains(date("2024-12-31")));
        assert!(!range.contains(date("2025-02-01")));
    }
}
