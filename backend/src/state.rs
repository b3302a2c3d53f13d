use std::sync::Arc;

use crate::{config::Config, repositories::labour_repository::LabourRepositoryTrait};

#[derive(Clone)]
pub struct AppState {
    pub labour_repo: Arc<dyn LabourRepositoryTrait>,
    pub config: Config,
}

impl AppState {
    pub fn new(labour_repo: Arc<dyn LabourRepositoryTrait>, config: Config) -> Self {
        Self {
            labour_repo,
            config,
        }
    }
}
