use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string accepted by the monthly-summary endpoint.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MonthlySummaryQuery {
    /// `YYYY-MM`; defaults to the current month in the configured zone.
    pub month: Option<String>,
    /// Restricts attendance and advances to one site (manager view).
    #[validate(range(min = 1))]
    pub site_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub status: CalendarStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabourIdentity {
    pub name: String,
    pub phone: String,
    pub site: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub day_shifts: u32,
    pub night_shifts: u32,
    pub total_shifts: u32,
    pub absent_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub daily_wage: f64,
    pub earned_pay: f64,
    pub advance_paid: f64,
    pub mess_canteen: f64,
    pub net_payable: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummaryResponse {
    pub labour: LabourIdentity,
    pub attendance_summary: AttendanceSummary,
    pub payment_summary: PaymentSummary,
    pub calendar: Vec<CalendarEntry>,
}
