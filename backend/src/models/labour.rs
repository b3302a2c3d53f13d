use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::{LabourId, SiteId};

/// A worker together with the name of the site they are assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Labour {
    pub id: LabourId,
    pub name: String,
    pub phone: String,
    pub site_id: SiteId,
    pub site_name: String,
    pub daily_wage: Option<f64>,
}

/// One attendance row; a day with neither shift flag counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub site_id: SiteId,
    pub day_shift_flag: bool,
    pub night_shift_flag: bool,
}

impl AttendanceRecord {
    pub fn worked(&self) -> bool {
        self.day_shift_flag || self.night_shift_flag
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LabourMonthlyExpense {
    pub mess_amount: f64,
    pub canteen_amount: f64,
}

impl LabourMonthlyExpense {
    pub fn total(&self) -> f64 {
        self.mess_amount + self.canteen_amount
    }
}
