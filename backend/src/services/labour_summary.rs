use std::sync::Arc;

use crate::{
    error::AppError,
    models::{
        labour::{AttendanceRecord, Labour, LabourMonthlyExpense},
        summary::{
            AttendanceSummary, CalendarEntry, CalendarStatus, LabourIdentity,
            MonthlySummaryResponse, PaymentSummary,
        },
    },
    repositories::labour_repository::LabourRepositoryTrait,
    types::{LabourId, SiteId},
    utils::month::MonthPeriod,
};

/// Folds one month of attendance, the cumulative advances and the month's
/// mess/canteen expense into the summary payload.
///
/// `attendance` is expected in date order; the calendar keeps that order.
pub fn build_monthly_summary(
    labour: &Labour,
    attendance: &[AttendanceRecord],
    advance_paid: f64,
    expense: Option<&LabourMonthlyExpense>,
) -> MonthlySummaryResponse {
    let mut counts = AttendanceSummary::default();
    let mut calendar = Vec::with_capacity(attendance.len());

    for record in attendance {
        if record.day_shift_flag {
            counts.day_shifts += 1;
        }
        if record.night_shift_flag {
            counts.night_shifts += 1;
        }
        let status = if record.worked() {
            CalendarStatus::Present
        } else {
            counts.absent_days += 1;
            CalendarStatus::Absent
        };
        calendar.push(CalendarEntry {
            date: record.date,
            status,
        });
    }
    counts.total_shifts = counts.day_shifts + counts.night_shifts;

    let daily_wage = labour.daily_wage.unwrap_or(0.0);
    let earned_pay = daily_wage * f64::from(counts.total_shifts);
    let mess_canteen = expense.map(LabourMonthlyExpense::total).unwrap_or(0.0);

    MonthlySummaryResponse {
        labour: LabourIdentity {
            name: labour.name.clone(),
            phone: labour.phone.clone(),
            site: labour.site_name.clone(),
        },
        attendance_summary: counts,
        payment_summary: PaymentSummary {
            daily_wage,
            earned_pay,
            advance_paid,
            mess_canteen,
            net_payable: earned_pay - advance_paid - mess_canteen,
        },
        calendar,
    }
}

#[derive(Clone)]
pub struct LabourSummaryService {
    repo: Arc<dyn LabourRepositoryTrait>,
}

impl LabourSummaryService {
    pub fn new(repo: Arc<dyn LabourRepositoryTrait>) -> Self {
        Self { repo }
    }

    /// Loads everything the summary needs. With `site_id` the attendance and
    /// advances are restricted to that site and the expense row is looked up
    /// for it; otherwise the labour's own site is used for the expense.
    pub async fn monthly_summary(
        &self,
        labour_id: LabourId,
        period: MonthPeriod,
        site_id: Option<SiteId>,
    ) -> Result<MonthlySummaryResponse, AppError> {
        let labour = self
            .repo
            .find_labour(labour_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Labour not found".to_string()))?;

        let attendance = self
            .repo
            .list_attendance(labour_id, period.start(), period.end(), site_id)
            .await?;
        let advance_paid = self
            .repo
            .sum_advances(labour_id, period.end(), site_id)
            .await?;
        let expense_site = site_id.unwrap_or(labour.site_id);
        let expense = self
            .repo
            .find_monthly_expense(labour_id, expense_site, &period.to_string())
            .await?;

        tracing::debug!(
            labour_id = %labour_id,
            month = %period,
            site_id = ?site_id,
            attendance_rows = attendance.len(),
            "Built monthly summary inputs"
        );

        Ok(build_monthly_summary(
            &labour,
            &attendance,
            advance_paid,
            expense.as_ref(),
        ))
    }
}
