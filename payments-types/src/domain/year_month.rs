//! Calendar month within a specific year.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A year plus a calendar month, with no day component.
///
/// Ordering is chronological (year first, then month). Serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new YearMonth. `month` is 1-based.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The year-month a date falls in.
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month number, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// True when `date` falls in this year-month.
    pub fn contains<D: Datelike>(&self, date: &D) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidYearMonth(s.to_string());

        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_year_month_creation() {
        let ym = YearMonth::new(2024, 5).unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 5);
    }

    #[test]
    fn test_invalid_month_fails() {
        assert!(matches!(
            YearMonth::new(2024, 0),
            Err(DomainError::InvalidMonth(0))
        ));
        assert!(matches!(
            YearMonth::new(2024, 13),
            Err(DomainError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2024-05".parse().unwrap();
        assert_eq!(ym, YearMonth::new(2024, 5).unwrap());
        assert_eq!(ym.to_string(), "2024-05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "2024/05".parse::<YearMonth>(),
            Err(DomainError::InvalidYearMonth(_))
        ));
        assert!(matches!(
            "2024-xx".parse::<YearMonth>(),
            Err(DomainError::InvalidYearMonth(_))
        ));
        assert!(matches!(
            "2024-14".parse::<YearMonth>(),
            Err(DomainError::InvalidMonth(14))
        ));
    }

    #[test]
    fn test_contains_checks_year_and_month() {
        let ym = YearMonth::new(2024, 5).unwrap();
        let in_may = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let may_last_year = NaiveDate::from_ymd_opt(2023, 5, 31).unwrap();
        let june = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assert!(ym.contains(&in_may));
        assert!(!ym.contains(&may_last_year));
        assert!(!ym.contains(&june));
        assert_eq!(YearMonth::of(&in_may), ym);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dec_2023 = YearMonth::new(2023, 12).unwrap();
        let jan_2024 = YearMonth::new(2024, 1).unwrap();
        assert!(dec_2023 < jan_2024);
    }

    #[test]
    fn test_serde_as_string() {
        let ym = YearMonth::new(2024, 5).unwrap();
        let json = serde_json::to_string(&ym).unwrap();
        assert_eq!(json, "\"2024-05\"");
        let back: YearMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ym);
    }
}
