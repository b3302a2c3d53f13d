//! Data models shared across database access and API handlers.

pub mod labour;
pub mod summary;
