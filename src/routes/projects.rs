use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, NoContent, Paginated, PaginationParams};
use crate::app::AppState;
use crate::domain::{currency, CreateProjectRequest, Project, UpdateProjectRequest};
use crate::error::{ApiError, ApiResult};

/// Create a new project
pub async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(mut req): Json<CreateProjectRequest>,
) -> ApiResult<Created<DataResponse<Project>>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Project name must not be empty".into()));
    }
    if let Some(code) = &req.currency {
        req.currency = Some(normalize_currency(code)?);
    }

    let project = Project::create(&state.db, &req).await?;
    tracing::info!(project_id = %project.id, name = %project.name, "Project created");

    Ok(Created(DataResponse::new(project)))
}

/// List projects, newest first
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Paginated<Project>> {
    let total = Project::count(&state.db).await? as u64;
    let projects = Project::list(
        &state.db,
        pagination.limit() as i64,
        pagination.offset() as i64,
    )
    .await?;

    Ok(Paginated::new(projects, &pagination, total))
}

/// Get a specific project by ID
pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Project>> {
    let project = Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))?;

    Ok(DataResponse::new(project))
}

/// Partially update a project
pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(mut req): Json<UpdateProjectRequest>,
) -> ApiResult<DataResponse<Project>> {
    if matches!(&req.name, Some(name) if name.trim().is_empty()) {
        return Err(ApiError::BadRequest("Project name must not be empty".into()));
    }
    if let Some(code) = &req.currency {
        req.currency = Some(normalize_currency(code)?);
    }

    let project = Project::update(&state.db, project_id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))?;

    Ok(DataResponse::new(project))
}

/// Delete a project and everything under it
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let deleted = Project::delete(&state.db, project_id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Project {project_id} not found")));
    }

    tracing::info!(project_id = %project_id, "Project deleted");
    Ok(NoContent)
}

/// Uppercase the project currency so it always matches rate-table rows.
fn normalize_currency(code: &str) -> ApiResult<String> {
    currency::normalize_code(code).ok_or_else(|| {
        ApiError::BadRequest("Currency must be a 3-letter ISO code".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_currency_is_uppercased() {
        assert_eq!(normalize_currency("usd").unwrap(), "USD");
    }

    #[test]
    fn malformed_project_currency_is_a_bad_request() {
        assert!(matches!(
            normalize_currency("dollars"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
