pub mod month;
pub mod time;

pub use month::*;
pub use time::*;
