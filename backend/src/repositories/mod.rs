//! Database access layer.

pub mod labour_repository;

pub use labour_repository::{LabourRepositoryTrait, PgLabourRepository};

#[cfg(test)]
pub use labour_repository::MockLabourRepositoryTrait;
