use leptos::*;

use crate::api::{ApiClient, FetchError, SummaryRecord};
use crate::pages::labour_summary::calendar::{render_calendar, CalendarGrid};
use crate::utils::MonthKey;

/// One issued fetch. Only the most recently issued token may update state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryQuery {
    pub labour_id: String,
    pub month: MonthKey,
    pub token: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabourSummaryState {
    pub open: bool,
    pub labour_id: Option<String>,
    pub month: Option<MonthKey>,
    pub loading: bool,
    pub record: Option<SummaryRecord>,
    pub grid: Option<CalendarGrid>,
    pub error: Option<String>,
    latest_token: u64,
}

impl LabourSummaryState {
    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Selects a worker and month and issues a fresh token. Anything still in
    /// flight becomes stale.
    pub fn begin(&mut self, labour_id: impl Into<String>, month: MonthKey) -> SummaryQuery {
        self.latest_token = self.latest_token.wrapping_add(1);
        let labour_id = labour_id.into();
        self.open = true;
        self.labour_id = Some(labour_id.clone());
        self.month = Some(month);
        self.loading = true;
        self.error = None;
        SummaryQuery {
            labour_id,
            month,
            token: self.latest_token,
        }
    }

    /// Applies a fetch outcome. Returns `false` and leaves state untouched
    /// when the query has been superseded.
    pub fn finish(
        &mut self,
        query: &SummaryQuery,
        outcome: Result<SummaryRecord, FetchError>,
    ) -> bool {
        if query.token != self.latest_token {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(record) => {
                self.grid = Some(render_calendar(&record.calendar, query.month));
                self.record = Some(record);
                self.error = None;
            }
            Err(err) => {
                self.record = None;
                self.grid = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn close(&mut self) {
        let token = self.latest_token.wrapping_add(1);
        *self = Self {
            latest_token: token,
            ..Self::default()
        };
    }
}

pub fn use_labour_summary() -> (ReadSignal<LabourSummaryState>, WriteSignal<LabourSummaryState>) {
    create_signal(LabourSummaryState::default())
}

pub async fn load_summary(
    api: &ApiClient,
    set_state: WriteSignal<LabourSummaryState>,
    query: SummaryQuery,
) {
    let outcome = api.fetch_monthly_summary(&query.labour_id, query.month).await;
    if let Err(err) = &outcome {
        log::error!(
            "monthly summary for labour {} ({}) failed: {err}",
            query.labour_id,
            query.month
        );
    }
    set_state.update(|state| {
        if !state.finish(&query, outcome) {
            log::warn!(
                "discarding stale summary response for labour {} ({}), token {}",
                query.labour_id,
                query.month,
                query.token
            );
        }
    });
}
