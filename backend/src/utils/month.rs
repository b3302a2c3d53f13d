use chrono::{Datelike, Months, NaiveDate};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthParseError {
    #[error("month must be formatted as YYYY-MM, got '{0}'")]
    Format(String),
    #[error("month number {0} is outside 1-12")]
    OutOfRange(u32),
}

/// A calendar month as the half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::OutOfRange(month));
        }
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| MonthParseError::Format(format!("{year:04}-{month:02}")))?;
        let end = start
            .checked_add_months(Months::new(1))
            .ok_or_else(|| MonthParseError::Format(format!("{year:04}-{month:02}")))?;
        Ok(Self { start, end })
    }

    /// Parses `YYYY-MM` (four or more year digits).
    pub fn parse(value: &str) -> Result<Self, MonthParseError> {
        let trimmed = value.trim();
        let format_err = || MonthParseError::Format(trimmed.to_string());
        let (year_part, month_part) = trimmed.split_once('-').ok_or_else(format_err)?;
        if year_part.len() < 4
            || month_part.len() != 2
            || !year_part.chars().all(|c| c.is_ascii_digit())
            || !month_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(format_err());
        }
        let year: i32 = year_part.parse().map_err(|_| format_err())?;
        let month: u32 = month_part.parse().map_err(|_| format_err())?;
        if year == 0 {
            return Err(format_err());
        }
        Self::new(year, month)
    }

    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = start.checked_add_months(Months::new(1)).unwrap_or(start);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day of the following month (exclusive bound).
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.start.year(), self.start.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_into_half_open_range() {
        let period = MonthPeriod::parse("2025-06").unwrap();
        assert_eq!(period.start(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(period.end(), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(period.to_string(), "2025-06");
    }

    #[test]
    fn december_rolls_into_next_year() {
        let period = MonthPeriod::parse("2024-12").unwrap();
        assert_eq!(period.end(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn rejects_malformed_months() {
        assert_eq!(
            MonthPeriod::parse("2025-13"),
            Err(MonthParseError::OutOfRange(13))
        );
        assert_eq!(
            MonthPeriod::parse("2025-00"),
            Err(MonthParseError::OutOfRange(0))
        );
        assert!(matches!(
            MonthPeriod::parse("25-06"),
            Err(MonthParseError::Format(_))
        ));
        assert!(matches!(
            MonthPeriod::parse("2025-6"),
            Err(MonthParseError::Format(_))
        ));
        assert!(matches!(
            MonthPeriod::parse("June"),
            Err(MonthParseError::Format(_))
        ));
    }

    #[test]
    fn containing_snaps_to_first_of_month() {
        let period = MonthPeriod::containing(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(period.to_string(), "2024-02");
        assert_eq!(period.end(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
