pub mod month;

pub use month::{MonthKey, MonthKeyError};
