//! Labour repository trait for dependency injection and testing.
//!
//! The trait is mocked with mockall in unit tests; `PgLabourRepository`
//! is the PostgreSQL implementation used by the server.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::labour::{AttendanceRecord, Labour, LabourMonthlyExpense};
use crate::types::{LabourId, SiteId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LabourRepositoryTrait: Send + Sync {
    /// Find a labour by ID, joined with its site name
    async fn find_labour(&self, id: LabourId) -> Result<Option<Labour>, AppError>;

    /// Attendance rows dated in `[from, to)`, ordered by date
    async fn list_attendance(
        &self,
        labour_id: LabourId,
        from: NaiveDate,
        to: NaiveDate,
        site_id: Option<SiteId>,
    ) -> Result<Vec<AttendanceRecord>, AppError>;

    /// Sum of advances dated strictly before `before`
    async fn sum_advances(
        &self,
        labour_id: LabourId,
        before: NaiveDate,
        site_id: Option<SiteId>,
    ) -> Result<f64, AppError>;

    /// Mess and canteen amounts recorded for one labour, site and `YYYY-MM` month
    async fn find_monthly_expense(
        &self,
        labour_id: LabourId,
        site_id: SiteId,
        month: &str,
    ) -> Result<Option<LabourMonthlyExpense>, AppError>;
}

#[derive(Debug, Clone)]
pub struct PgLabourRepository {
    pool: DbPool,
}

impl PgLabourRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LabourRepositoryTrait for PgLabourRepository {
    async fn find_labour(&self, id: LabourId) -> Result<Option<Labour>, AppError> {
        let row = sqlx::query_as::<_, Labour>(
            "SELECT l.id, l.name, l.phone, l.site_id, s.site_name, l.daily_wage \
             FROM labours l JOIN sites s ON s.id = l.site_id \
             WHERE l.id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;
        Ok(row)
    }

    async fn list_attendance(
        &self,
        labour_id: LabourId,
        from: NaiveDate,
        to: NaiveDate,
        site_id: Option<SiteId>,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT date, site_id, day_shift_flag, night_shift_flag \
             FROM attendance \
             WHERE labour_id = $1 AND date >= $2 AND date < $3 \
               AND ($4::BIGINT IS NULL OR site_id = $4) \
             ORDER BY date",
        )
        .bind(labour_id)
        .bind(from)
        .bind(to)
        .bind(site_id)
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(rows)
    }

    async fn sum_advances(
        &self,
        labour_id: LabourId,
        before: NaiveDate,
        site_id: Option<SiteId>,
    ) -> Result<f64, AppError> {
        let total: f64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(advance), 0)::DOUBLE PRECISION \
             FROM payments \
             WHERE labour_id = $1 AND date < $2 \
               AND ($3::BIGINT IS NULL OR site_id = $3)",
        )
        .bind(labour_id)
        .bind(before)
        .bind(site_id)
        .fetch_one(self.pool.as_ref())
        .await?;
        Ok(total)
    }

    async fn find_monthly_expense(
        &self,
        labour_id: LabourId,
        site_id: SiteId,
        month: &str,
    ) -> Result<Option<LabourMonthlyExpense>, AppError> {
        let row = sqlx::query_as::<_, LabourMonthlyExpense>(
            "SELECT mess_amount, canteen_amount \
             FROM labour_monthly_expenses \
             WHERE labour_id = $1 AND site_id = $2 AND month = $3 \
             LIMIT 1",
        )
        .bind(labour_id)
        .bind(site_id)
        .bind(month)
        .fetch_optional(self.pool.as_ref())
        .await?;
        Ok(row)
    }
}
