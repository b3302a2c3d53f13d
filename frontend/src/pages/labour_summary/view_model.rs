use leptos::*;

use crate::api::ApiClient;
use crate::state::labour_summary::{
    load_summary, use_labour_summary, LabourSummaryState, SummaryQuery,
};
use crate::utils::MonthKey;

#[derive(Clone, Copy)]
pub struct LabourSummaryViewModel {
    api: StoredValue<ApiClient>,
    pub state: ReadSignal<LabourSummaryState>,
    pub(crate) set_state: WriteSignal<LabourSummaryState>,
    pub month_error: RwSignal<Option<String>>,
}

impl LabourSummaryViewModel {
    pub fn new(api: ApiClient) -> Self {
        let (state, set_state) = use_labour_summary();
        Self {
            api: store_value(api),
            state,
            set_state,
            month_error: create_rw_signal(None),
        }
    }

    /// Opens the modal for a worker on the current month.
    pub fn open(&self, labour_id: String) {
        self.month_error.set(None);
        self.start(labour_id, MonthKey::current());
    }

    /// Re-fetches the selected worker for the month picked in the selector.
    pub fn select_month(&self, raw: &str) {
        let month = match raw.parse::<MonthKey>() {
            Ok(month) => month,
            Err(err) => {
                log::warn!("ignoring month selection: {err}");
                self.month_error.set(Some(err.to_string()));
                return;
            }
        };
        self.month_error.set(None);
        let Some(labour_id) = self.state.with_untracked(|s| s.labour_id.clone()) else {
            return;
        };
        self.start(labour_id, month);
    }

    pub fn close(&self) {
        self.month_error.set(None);
        self.set_state.update(LabourSummaryState::close);
    }

    pub(crate) fn begin(&self, labour_id: String, month: MonthKey) -> SummaryQuery {
        let mut query = None;
        self.set_state
            .update(|state| query = Some(state.begin(labour_id.clone(), month)));
        query.unwrap_or(SummaryQuery {
            labour_id,
            month,
            token: 0,
        })
    }

    fn start(&self, labour_id: String, month: MonthKey) {
        let query = self.begin(labour_id, month);
        let api = self.api.get_value();
        let set_state = self.set_state;
        spawn_local(async move {
            load_summary(&api, set_state, query).await;
        });
    }
}
