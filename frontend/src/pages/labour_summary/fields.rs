use crate::api::{DisplayValue, SummaryRecord};

pub const PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    Name,
    Phone,
    Site,
    DayShifts,
    NightShifts,
    TotalShifts,
    AbsentDays,
    DailyWage,
    EarnedPay,
    AdvancePaid,
    MessCanteen,
    NetPayable,
}

impl SummaryField {
    pub const ALL: [SummaryField; 12] = [
        Self::Name,
        Self::Phone,
        Self::Site,
        Self::DayShifts,
        Self::NightShifts,
        Self::TotalShifts,
        Self::AbsentDays,
        Self::DailyWage,
        Self::EarnedPay,
        Self::AdvancePaid,
        Self::MessCanteen,
        Self::NetPayable,
    ];

    /// Element id of the mount point the value is written into.
    pub fn target_id(self) -> &'static str {
        match self {
            Self::Name => "ls-name",
            Self::Phone => "ls-phone",
            Self::Site => "ls-site",
            Self::DayShifts => "as-day",
            Self::NightShifts => "as-night",
            Self::TotalShifts => "as-total",
            Self::AbsentDays => "as-absent",
            Self::DailyWage => "ps-wage",
            Self::EarnedPay => "ps-earned",
            Self::AdvancePaid => "ps-advance",
            Self::MessCanteen => "ps-expense",
            Self::NetPayable => "ps-net",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Site => "Site",
            Self::DayShifts => "Day shifts",
            Self::NightShifts => "Night shifts",
            Self::TotalShifts => "Total shifts",
            Self::AbsentDays => "Absent days",
            Self::DailyWage => "Daily wage",
            Self::EarnedPay => "Earned pay",
            Self::AdvancePaid => "Advance paid",
            Self::MessCanteen => "Mess / canteen",
            Self::NetPayable => "Net payable",
        }
    }

    fn value(self, record: &SummaryRecord) -> &DisplayValue {
        let labour = &record.labour;
        let attendance = &record.attendance_summary;
        let payment = &record.payment_summary;
        match self {
            Self::Name => &labour.name,
            Self::Phone => &labour.phone,
            Self::Site => &labour.site,
            Self::DayShifts => &attendance.day_shifts,
            Self::NightShifts => &attendance.night_shifts,
            Self::TotalShifts => &attendance.total_shifts,
            Self::AbsentDays => &attendance.absent_days,
            Self::DailyWage => &payment.daily_wage,
            Self::EarnedPay => &payment.earned_pay,
            Self::AdvancePaid => &payment.advance_paid,
            Self::MessCanteen => &payment.mess_canteen,
            Self::NetPayable => &payment.net_payable,
        }
    }
}

pub fn display_text(value: &DisplayValue) -> String {
    if value.is_missing() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

pub fn field_values(record: &SummaryRecord) -> [(SummaryField, String); 12] {
    SummaryField::ALL.map(|field| (field, display_text(field.value(record))))
}

/// Somewhere field text can be written. Returns `false` when the view has no
/// mount point for the field.
pub trait DisplayTargets {
    fn set_text(&mut self, field: SummaryField, text: &str) -> bool;
}

/// Writes every field, skipping targets the view lacks. Returns how many were written.
pub fn populate_fields<T: DisplayTargets + ?Sized>(record: &SummaryRecord, targets: &mut T) -> usize {
    let mut written = 0;
    for (field, text) in field_values(record) {
        if targets.set_text(field, &text) {
            written += 1;
        }
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Default)]
    struct RecordingTargets {
        present: Vec<SummaryField>,
        written: HashMap<SummaryField, String>,
    }

    impl DisplayTargets for RecordingTargets {
        fn set_text(&mut self, field: SummaryField, text: &str) -> bool {
            if !self.present.contains(&field) {
                return false;
            }
            self.written.insert(field, text.to_string());
            true
        }
    }

    fn record() -> SummaryRecord {
        serde_json::from_value(json!({
            "labour": { "name": "Meena", "phone": "9000000001", "site": "East Gate" },
            "attendance_summary": {
                "day_shifts": 12, "night_shifts": 3, "total_shifts": 15, "absent_days": 2
            },
            "payment_summary": {
                "daily_wage": 500.0,
                "earned_pay": 7500.0,
                "advance_paid": null,
                "mess_canteen": 312.5,
                "net_payable": 7187.5
            },
            "calendar": []
        }))
        .unwrap()
    }

    #[test]
    fn target_ids_are_unique() {
        let mut ids: Vec<_> = SummaryField::ALL.iter().map(|f| f.target_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn null_advance_renders_placeholder() {
        let values: HashMap<_, _> = field_values(&record()).into_iter().collect();
        assert_eq!(values[&SummaryField::AdvancePaid], PLACEHOLDER);
        assert_eq!(values[&SummaryField::Name], "Meena");
        assert_eq!(values[&SummaryField::EarnedPay], "7500");
        assert_eq!(values[&SummaryField::MessCanteen], "312.5");
        assert_eq!(values[&SummaryField::TotalShifts], "15");
    }

    #[test]
    fn empty_record_renders_placeholder_everywhere() {
        let values = field_values(&SummaryRecord::default());
        assert!(values.iter().all(|(_, text)| text == PLACEHOLDER));
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut targets = RecordingTargets {
            present: vec![SummaryField::Name, SummaryField::NetPayable],
            ..Default::default()
        };
        let written = populate_fields(&record(), &mut targets);
        assert_eq!(written, 2);
        assert_eq!(targets.written[&SummaryField::NetPayable], "7187.5");
        assert!(!targets.written.contains_key(&SummaryField::Phone));
    }
}
