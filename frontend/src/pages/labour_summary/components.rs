use leptos::*;
use std::collections::HashMap;

use super::calendar::{CalendarCell, CalendarGrid};
use super::fields::{populate_fields, DisplayTargets, SummaryField, PLACEHOLDER};
use crate::api::SummaryRecord;

/// Text signals behind each rendered field.
#[derive(Clone)]
pub struct FieldSignals {
    signals: HashMap<SummaryField, RwSignal<String>>,
}

impl FieldSignals {
    pub fn new(fields: &[SummaryField]) -> Self {
        Self {
            signals: fields
                .iter()
                .map(|field| (*field, create_rw_signal(PLACEHOLDER.to_string())))
                .collect(),
        }
    }

    pub fn text(&self, field: SummaryField) -> Option<RwSignal<String>> {
        self.signals.get(&field).copied()
    }

    pub fn reset(&self) {
        for signal in self.signals.values() {
            signal.set(PLACEHOLDER.to_string());
        }
    }
}

impl DisplayTargets for FieldSignals {
    fn set_text(&mut self, field: SummaryField, text: &str) -> bool {
        match self.signals.get(&field) {
            Some(signal) => {
                signal.set(text.to_string());
                true
            }
            None => false,
        }
    }
}

#[component]
fn FieldRow(field: SummaryField, text: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="flex justify-between py-1 text-sm">
            <span class="text-gray-600">{field.label()}</span>
            <span id=field.target_id() class="font-medium text-gray-900">{move || text.get()}</span>
        </div>
    }
}

#[component]
pub fn SummaryFields(record: Signal<Option<SummaryRecord>>) -> impl IntoView {
    let targets = FieldSignals::new(&SummaryField::ALL);
    {
        let targets = targets.clone();
        create_isomorphic_effect(move |_| match record.get() {
            Some(record) => {
                let mut targets = targets.clone();
                populate_fields(&record, &mut targets);
            }
            None => targets.reset(),
        });
    }

    let section = move |title: &'static str, fields: &[SummaryField]| {
        let rows = fields
            .iter()
            .filter_map(|field| {
                targets
                    .text(*field)
                    .map(|text| view! { <FieldRow field=*field text=text /> })
            })
            .collect_view();
        view! {
            <section class="mb-4">
                <h3 class="text-xs font-semibold uppercase text-gray-500 mb-1">{title}</h3>
                {rows}
            </section>
        }
    };

    view! {
        <div class="labour-summary-fields">
            {section("Labour", &SummaryField::ALL[0..3])}
            {section("Attendance", &SummaryField::ALL[3..7])}
            {section("Payment", &SummaryField::ALL[7..12])}
        </div>
    }
}

#[component]
pub fn CalendarView(grid: Signal<Option<CalendarGrid>>) -> impl IntoView {
    move || {
        grid.get().map(|grid| {
            let header = grid
                .weekdays
                .iter()
                .map(|label| view! { <div class="calendar-weekday">{*label}</div> })
                .collect_view();
            let cells = grid
                .cells
                .iter()
                .map(|cell| match *cell {
                    CalendarCell::Blank => view! { <div class="calendar-empty"></div> },
                    CalendarCell::Day { day, status } => view! {
                        <div class=format!("calendar-day {}", status.css_class())>{day}</div>
                    },
                })
                .collect_view();
            view! {
                <div id="attendance-calendar" class="labour-calendar">
                    <div class="calendar-weekdays">{header}</div>
                    <div class="calendar-grid">{cells}</div>
                </div>
            }
        })
    }
}
