use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::costing::FinancialRates;
use crate::domain::{FinancialSettings, Project, UpdateFinancialSettingsRequest};
use crate::error::{ApiError, ApiResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub project_id: Uuid,
    #[serde(flatten)]
    pub rates: FinancialRates,
}

/// Get a project's financial settings. A project that has never saved
/// settings reads back as all-zero rates.
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<SettingsResponse>> {
    ensure_project(&state, project_id).await?;

    let rates = FinancialSettings::find_by_project(&state.db, project_id)
        .await?
        .map(|s| s.rates())
        .unwrap_or_default();

    Ok(DataResponse::new(SettingsResponse { project_id, rates }))
}

/// Replace a project's financial settings
pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<UpdateFinancialSettingsRequest>,
) -> ApiResult<DataResponse<SettingsResponse>> {
    ensure_project(&state, project_id).await?;

    for (field, value) in [
        ("overhead_percent", req.overhead_percent),
        ("contingency_percent", req.contingency_percent),
        ("markup_percent", req.markup_percent),
        ("tax_percent", req.tax_percent),
    ] {
        if value.is_sign_negative() {
            return Err(ApiError::BadRequest(format!("{field} must not be negative")));
        }
    }

    let settings = FinancialSettings::upsert(&state.db, project_id, &req).await?;
    tracing::info!(project_id = %project_id, "Financial settings updated");

    Ok(DataResponse::new(SettingsResponse {
        project_id,
        rates: settings.rates(),
    }))
}

async fn ensure_project(state: &AppState, project_id: Uuid) -> ApiResult<()> {
    Project::find_by_id(&state.db, project_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))
}
