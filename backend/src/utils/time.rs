use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::month::MonthPeriod;

/// Returns the current time in the configured timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

/// The month containing today in the configured timezone.
pub fn current_month(tz: &Tz) -> MonthPeriod {
    MonthPeriod::containing(today_local(tz))
}
