pub mod currencies;
pub mod health;
pub mod items;
pub mod projects;
pub mod settings;
pub mod summary;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Projects
        .route("/projects", post(projects::create_project))
        .route("/projects", get(projects::list_projects))
        .route("/projects/:project_id", get(projects::get_project))
        .route("/projects/:project_id", patch(projects::update_project))
        .route("/projects/:project_id", delete(projects::delete_project))
        // Financial settings (one per project)
        .route("/projects/:project_id/settings", get(settings::get_settings))
        .route("/projects/:project_id/settings", put(settings::put_settings))
        // Material items
        .route(
            "/projects/:project_id/materials",
            post(items::create_material).get(items::list_materials),
        )
        .route(
            "/projects/:project_id/materials/:item_id",
            patch(items::update_material).delete(items::delete_material),
        )
        // Labor items
        .route(
            "/projects/:project_id/labor",
            post(items::create_labor).get(items::list_labor),
        )
        .route(
            "/projects/:project_id/labor/:item_id",
            patch(items::update_labor).delete(items::delete_labor),
        )
        // Equipment items
        .route(
            "/projects/:project_id/equipment",
            post(items::create_equipment).get(items::list_equipment),
        )
        .route(
            "/projects/:project_id/equipment/:item_id",
            patch(items::update_equipment).delete(items::delete_equipment),
        )
        // Additional costs
        .route(
            "/projects/:project_id/additional",
            post(items::create_additional).get(items::list_additional),
        )
        .route(
            "/projects/:project_id/additional/:item_id",
            patch(items::update_additional).delete(items::delete_additional),
        )
        // Risks
        .route(
            "/projects/:project_id/risks",
            post(items::create_risk).get(items::list_risks),
        )
        .route(
            "/projects/:project_id/risks/:item_id",
            patch(items::update_risk).delete(items::delete_risk),
        )
        // Computed financial summary
        .route("/projects/:project_id/summary", get(summary::get_summary))
        // Currency rates
        .route("/currencies", get(currencies::list_rates))
        .route("/currencies/:code", put(currencies::put_rate))
}
