#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod calendar;
mod components;
pub mod fields;
mod panel;
mod view_model;

pub use panel::LabourSummaryModal;
pub use view_model::LabourSummaryViewModel;
