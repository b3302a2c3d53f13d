//! Month grid construction, independent of any view toolkit.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

use crate::api::AttendanceEntry;
use crate::utils::MonthKey;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The only status string that marks a day as worked.
pub const PRESENT_MARKER: &str = "PRESENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Present,
    Absent,
}

impl DayStatus {
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(PRESENT_MARKER) => Self::Present,
            _ => Self::Absent,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { day: u32, status: DayStatus },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub month: MonthKey,
    pub weekdays: [&'static str; 7],
    pub leading_blanks: u32,
    pub days_in_month: u32,
    /// Blanks first, then one cell per day. Never padded at the end.
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    pub fn status_of(&self, day: u32) -> Option<DayStatus> {
        self.cells.iter().find_map(|cell| match cell {
            CalendarCell::Day { day: d, status } if *d == day => Some(*status),
            _ => None,
        })
    }
}

/// Counts days by stepping back one day from the first of the next month.
pub fn days_in_month(month: MonthKey) -> u32 {
    let (year, next) = if month.month() == 12 {
        (month.year() + 1, 1)
    } else {
        (month.year(), month.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, next, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// 0 for Sunday through 6 for Saturday.
pub fn first_weekday_offset(month: MonthKey) -> u32 {
    month.first_day().weekday().num_days_from_sunday()
}

fn date_key(month: MonthKey, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", month.year(), month.month(), day)
}

pub fn render_calendar(entries: &[AttendanceEntry], month: MonthKey) -> CalendarGrid {
    let days = days_in_month(month);
    let offset = first_weekday_offset(month);

    let lookup: HashMap<&str, Option<&str>> = entries
        .iter()
        .filter_map(|entry| Some((entry.date.as_deref()?, entry.marker())))
        .collect();

    let mut cells = Vec::with_capacity((offset + days) as usize);
    cells.extend((0..offset).map(|_| CalendarCell::Blank));
    cells.extend((1..=days).map(|day| {
        let marker = lookup.get(date_key(month, day).as_str()).copied().flatten();
        CalendarCell::Day {
            day,
            status: DayStatus::from_marker(marker),
        }
    }));

    CalendarGrid {
        month,
        weekdays: WEEKDAY_LABELS,
        leading_blanks: offset,
        days_in_month: days,
        cells,
    }
}
