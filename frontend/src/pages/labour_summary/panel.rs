use leptos::*;

use super::components::{CalendarView, SummaryFields};
use super::view_model::LabourSummaryViewModel;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn LabourSummaryModal(vm: LabourSummaryViewModel) -> impl IntoView {
    let state = vm.state;
    let is_open = move || state.with(|s| s.open);
    let loading = move || state.with(|s| s.loading);
    let month_value = move || {
        state
            .with(|s| s.month.map(|m| m.to_string()))
            .unwrap_or_default()
    };
    let error = move || state.with(|s| s.error.clone());
    let record = Signal::derive(move || state.with(|s| s.record.clone()));
    let grid = Signal::derive(move || state.with(|s| s.grid.clone()));

    view! {
        <Show when=is_open>
            <div class="fixed inset-0 z-40 bg-black/40" on:click=move |_| vm.close()></div>
            <div
                id="labourSummaryModal"
                class="fixed inset-x-0 top-12 z-50 mx-auto max-w-2xl rounded-lg bg-white shadow-xl"
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-center justify-between border-b px-6 py-4">
                    <h2 class="text-lg font-semibold text-gray-900">"Monthly summary"</h2>
                    <button
                        type="button"
                        class="labour-summary-close text-gray-500 hover:text-gray-800"
                        aria-label="Close"
                        on:click=move |_| vm.close()
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="space-y-4 px-6 py-4">
                    <label class="block text-sm text-gray-700">
                        "Month"
                        <input
                            type="month"
                            id="month-selector"
                            class="ml-2 rounded border px-2 py-1"
                            prop:value=month_value
                            on:change=move |ev| vm.select_month(&event_target_value(&ev))
                        />
                    </label>
                    {move || vm.month_error.get().map(|message| view! { <ErrorMessage message=message /> })}
                    {move || error().map(|message| view! { <ErrorMessage message=message /> })}
                    <Show when=loading>
                        <LoadingSpinner />
                    </Show>
                    <SummaryFields record=record />
                    <CalendarView grid=grid />
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, FetchError, SummaryRecord};
    use crate::test_support::ssr::{count_class, render_to_string};
    use crate::utils::MonthKey;
    use serde_json::json;

    fn june() -> MonthKey {
        "2025-06".parse().unwrap()
    }

    fn opened_view_model(outcome: Result<SummaryRecord, FetchError>) -> LabourSummaryViewModel {
        let vm = LabourSummaryViewModel::new(ApiClient::new_with_base_url("http://unused"));
        let query = vm.begin("12".into(), june());
        vm.set_state.update(|state| {
            state.finish(&query, outcome);
        });
        vm
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render_to_string(move || {
            let vm = LabourSummaryViewModel::new(ApiClient::new_with_base_url("http://unused"));
            view! { <LabourSummaryModal vm=vm /> }
        });
        assert!(!html.contains("labourSummaryModal"));
    }

    #[test]
    fn successful_load_renders_fields_and_calendar() {
        let html = render_to_string(move || {
            let record: SummaryRecord = serde_json::from_value(json!({
                "labour": { "name": "Prakash", "phone": "9000000002", "site": "Dock 4" },
                "attendance_summary": { "day_shifts": 1, "night_shifts": 0, "total_shifts": 1, "absent_days": 0 },
                "payment_summary": { "daily_wage": 700, "earned_pay": 700, "advance_paid": 100, "mess_canteen": 0, "net_payable": 600 },
                "calendar": [{ "date": "2025-06-05", "status": "PRESENT" }]
            }))
            .unwrap();
            let vm = opened_view_model(Ok(record));
            view! { <LabourSummaryModal vm=vm /> }
        });
        assert!(html.contains("labourSummaryModal"));
        assert!(html.contains("id=\"month-selector\""));
        assert!(html.contains("id=\"attendance-calendar\""));
        assert!(html.contains("Prakash"));
        assert_eq!(count_class(&html, "calendar-empty"), 0);
        assert_eq!(count_class(&html, "calendar-day present"), 1);
        assert_eq!(count_class(&html, "calendar-day absent"), 29);
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn failed_load_shows_banner_without_calendar() {
        let html = render_to_string(move || {
            let vm = opened_view_model(Err(FetchError::Status {
                status: 404,
                message: "Labour 12 not found".into(),
            }));
            view! { <LabourSummaryModal vm=vm /> }
        });
        assert!(html.contains("Labour 12 not found"));
        assert!(!html.contains("calendar-grid"));
    }
}
