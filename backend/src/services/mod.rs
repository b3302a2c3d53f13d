pub mod labour_summary;

pub use labour_summary::{build_monthly_summary, LabourSummaryService};
