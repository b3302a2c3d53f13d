use axum::{
    extract::{Path, Query, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::summary::{MonthlySummaryQuery, MonthlySummaryResponse},
    services::LabourSummaryService,
    state::AppState,
    types::{LabourId, SiteId},
    utils::{month::MonthPeriod, time},
};

pub async fn get_monthly_summary(
    State(state): State<AppState>,
    Path(labour_id): Path<String>,
    Query(params): Query<MonthlySummaryQuery>,
) -> Result<Json<MonthlySummaryResponse>, AppError> {
    params.validate()?;

    let labour_id: LabourId = labour_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid labour id: {}", labour_id)))?;

    let period = match params.month.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(month) => {
            MonthPeriod::parse(month).map_err(|err| AppError::BadRequest(err.to_string()))?
        }
        None => time::current_month(&state.config.time_zone),
    };
    let site_id = params.site_id.map(SiteId::new);

    let service = LabourSummaryService::new(state.labour_repo.clone());
    let summary = service.monthly_summary(labour_id, period, site_id).await?;
    Ok(Json(summary))
}
