pub mod id;

pub use id::{LabourId, SiteId};
