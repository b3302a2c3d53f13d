use chrono::{Datelike, Local, NaiveDate};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("month must be formatted as YYYY-MM, got '{0}'")]
    Format(String),
    #[error("month {0} is outside 1-12")]
    MonthOutOfRange(u32),
    #[error("year {0} is not supported")]
    YearOutOfRange(i32),
}

/// A validated calendar month, serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    first_day: NaiveDate,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        if year < 1 {
            return Err(MonthKeyError::YearOutOfRange(year));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(MonthKeyError::YearOutOfRange(year))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The month of the browser's local date.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let format_err = || MonthKeyError::Format(trimmed.to_string());
        let (year_part, month_part) = trimmed.split_once('-').ok_or_else(format_err)?;
        let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if year_part.len() < 4 || month_part.len() != 2 || !digits(year_part) || !digits(month_part)
        {
            return Err(format_err());
        }
        let year: i32 = year_part.parse().map_err(|_| format_err())?;
        let month: u32 = month_part.parse().map_err(|_| format_err())?;
        Self::new(year, month)
    }
}
