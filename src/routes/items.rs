//! Line-item CRUD handlers for the five cost categories.
//!
//! Responses echo the computed per-item cost next to the raw figures so
//! clients never re-implement the arithmetic. Write paths reject negative
//! figures; the costing engine itself stays total and unvalidating.

use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::costing::EquipmentCost;
use crate::domain::{
    AdditionalItem, CreateAdditionalItem, CreateEquipmentItem, CreateLaborItem,
    CreateMaterialItem, CreateRiskItem, EquipmentItem, LaborItem, MaterialItem, Project, RiskItem,
    UpdateAdditionalItem, UpdateEquipmentItem, UpdateLaborItem, UpdateMaterialItem, UpdateRiskItem,
};
use crate::error::{ApiError, ApiResult};

async fn ensure_project(pool: &PgPool, project_id: Uuid) -> ApiResult<()> {
    Project::find_by_id(pool, project_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))
}

fn require_non_negative(field: &str, value: Decimal) -> ApiResult<()> {
    if value.is_sign_negative() {
        return Err(ApiError::BadRequest(format!("{field} must not be negative")));
    }
    Ok(())
}

fn require_non_negative_opt(field: &str, value: Option<Decimal>) -> ApiResult<()> {
    match value {
        Some(v) => require_non_negative(field, v),
        None => Ok(()),
    }
}

fn require_name(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MaterialItemResponse {
    #[serde(flatten)]
    pub item: MaterialItem,
    pub cost: Decimal,
}

impl From<MaterialItem> for MaterialItemResponse {
    fn from(item: MaterialItem) -> Self {
        let cost = item.cost();
        Self { item, cost }
    }
}

pub async fn create_material(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateMaterialItem>,
) -> ApiResult<Created<DataResponse<MaterialItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    require_name("name", &req.name)?;
    require_non_negative("quantity", req.quantity)?;
    require_non_negative("unit_price", req.unit_price)?;

    let item = MaterialItem::create(&state.db, project_id, &req).await?;
    Ok(Created(DataResponse::new(item.into())))
}

pub async fn list_materials(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Vec<MaterialItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    let items = MaterialItem::find_by_project(&state.db, project_id).await?;
    Ok(DataResponse::new(items.into_iter().map(Into::into).collect()))
}

pub async fn update_material(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateMaterialItem>,
) -> ApiResult<DataResponse<MaterialItemResponse>> {
    require_non_negative_opt("quantity", req.quantity)?;
    require_non_negative_opt("unit_price", req.unit_price)?;

    let item = MaterialItem::update(&state.db, project_id, item_id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Material item {item_id} not found")))?;
    Ok(DataResponse::new(item.into()))
}

pub async fn delete_material(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    if !MaterialItem::delete(&state.db, project_id, item_id).await? {
        return Err(ApiError::NotFound(format!("Material item {item_id} not found")));
    }
    Ok(NoContent)
}

// ---------------------------------------------------------------------------
// Labor
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LaborItemResponse {
    #[serde(flatten)]
    pub item: LaborItem,
    pub cost: Decimal,
}

impl From<LaborItem> for LaborItemResponse {
    fn from(item: LaborItem) -> Self {
        let cost = item.cost();
        Self { item, cost }
    }
}

pub async fn create_labor(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateLaborItem>,
) -> ApiResult<Created<DataResponse<LaborItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    require_name("role", &req.role)?;
    require_non_negative("workers", req.workers)?;
    require_non_negative("daily_rate", req.daily_rate)?;
    require_non_negative("days", req.days)?;

    let item = LaborItem::create(&state.db, project_id, &req).await?;
    Ok(Created(DataResponse::new(item.into())))
}

pub async fn list_labor(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Vec<LaborItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    let items = LaborItem::find_by_project(&state.db, project_id).await?;
    Ok(DataResponse::new(items.into_iter().map(Into::into).collect()))
}

pub async fn update_labor(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateLaborItem>,
) -> ApiResult<DataResponse<LaborItemResponse>> {
    require_non_negative_opt("workers", req.workers)?;
    require_non_negative_opt("daily_rate", req.daily_rate)?;
    require_non_negative_opt("days", req.days)?;

    let item = LaborItem::update(&state.db, project_id, item_id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Labor item {item_id} not found")))?;
    Ok(DataResponse::new(item.into()))
}

pub async fn delete_labor(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    if !LaborItem::delete(&state.db, project_id, item_id).await? {
        return Err(ApiError::NotFound(format!("Labor item {item_id} not found")));
    }
    Ok(NoContent)
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EquipmentItemResponse {
    #[serde(flatten)]
    pub item: EquipmentItem,
    #[serde(flatten)]
    pub cost: EquipmentCost,
}

impl From<EquipmentItem> for EquipmentItemResponse {
    fn from(item: EquipmentItem) -> Self {
        let cost = item.cost();
        Self { item, cost }
    }
}

pub async fn create_equipment(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateEquipmentItem>,
) -> ApiResult<Created<DataResponse<EquipmentItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    require_name("name", &req.name)?;
    require_non_negative("quantity", req.quantity)?;
    require_non_negative("cost_per_period", req.cost_per_period)?;
    require_non_negative("usage_duration", req.usage_duration)?;
    require_non_negative_opt("maintenance_cost", req.maintenance_cost)?;
    require_non_negative_opt("fuel_cost", req.fuel_cost)?;

    let item = EquipmentItem::create(&state.db, project_id, &req).await?;
    Ok(Created(DataResponse::new(item.into())))
}

pub async fn list_equipment(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Vec<EquipmentItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    let items = EquipmentItem::find_by_project(&state.db, project_id).await?;
    Ok(DataResponse::new(items.into_iter().map(Into::into).collect()))
}

pub async fn update_equipment(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateEquipmentItem>,
) -> ApiResult<DataResponse<EquipmentItemResponse>> {
    require_non_negative_opt("quantity", req.quantity)?;
    require_non_negative_opt("cost_per_period", req.cost_per_period)?;
    require_non_negative_opt("usage_duration", req.usage_duration)?;
    require_non_negative_opt("maintenance_cost", req.maintenance_cost)?;
    require_non_negative_opt("fuel_cost", req.fuel_cost)?;

    let item = EquipmentItem::update(&state.db, project_id, item_id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Equipment item {item_id} not found")))?;
    Ok(DataResponse::new(item.into()))
}

pub async fn delete_equipment(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    if !EquipmentItem::delete(&state.db, project_id, item_id).await? {
        return Err(ApiError::NotFound(format!("Equipment item {item_id} not found")));
    }
    Ok(NoContent)
}

// ---------------------------------------------------------------------------
// Additional costs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AdditionalItemResponse {
    #[serde(flatten)]
    pub item: AdditionalItem,
    pub cost: Decimal,
}

impl From<AdditionalItem> for AdditionalItemResponse {
    fn from(item: AdditionalItem) -> Self {
        let cost = item.cost();
        Self { item, cost }
    }
}

pub async fn create_additional(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateAdditionalItem>,
) -> ApiResult<Created<DataResponse<AdditionalItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    require_name("name", &req.name)?;
    require_non_negative("amount", req.amount)?;

    let item = AdditionalItem::create(&state.db, project_id, &req).await?;
    Ok(Created(DataResponse::new(item.into())))
}

pub async fn list_additional(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Vec<AdditionalItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    let items = AdditionalItem::find_by_project(&state.db, project_id).await?;
    Ok(DataResponse::new(items.into_iter().map(Into::into).collect()))
}

pub async fn update_additional(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateAdditionalItem>,
) -> ApiResult<DataResponse<AdditionalItemResponse>> {
    require_non_negative_opt("amount", req.amount)?;

    let item = AdditionalItem::update(&state.db, project_id, item_id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Additional cost {item_id} not found")))?;
    Ok(DataResponse::new(item.into()))
}

pub async fn delete_additional(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    if !AdditionalItem::delete(&state.db, project_id, item_id).await? {
        return Err(ApiError::NotFound(format!("Additional cost {item_id} not found")));
    }
    Ok(NoContent)
}

// ---------------------------------------------------------------------------
// Risks
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RiskItemResponse {
    #[serde(flatten)]
    pub item: RiskItem,
    pub contingency: Decimal,
}

impl From<RiskItem> for RiskItemResponse {
    fn from(item: RiskItem) -> Self {
        let contingency = item.contingency();
        Self { item, contingency }
    }
}

pub async fn create_risk(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateRiskItem>,
) -> ApiResult<Created<DataResponse<RiskItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    require_name("name", &req.name)?;
    require_non_negative("impact_amount", req.impact_amount)?;

    let item = RiskItem::create(&state.db, project_id, &req).await?;
    Ok(Created(DataResponse::new(item.into())))
}

pub async fn list_risks(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<DataResponse<Vec<RiskItemResponse>>> {
    ensure_project(&state.db, project_id).await?;
    let items = RiskItem::find_by_project(&state.db, project_id).await?;
    Ok(DataResponse::new(items.into_iter().map(Into::into).collect()))
}

pub async fn update_risk(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateRiskItem>,
) -> ApiResult<DataResponse<RiskItemResponse>> {
    require_non_negative_opt("impact_amount", req.impact_amount)?;

    let item = RiskItem::update(&state.db, project_id, item_id, &req)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Risk {item_id} not found")))?;
    Ok(DataResponse::new(item.into()))
}

pub async fn delete_risk(
    State(state): State<Arc<AppState>>,
    Path((project_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoContent> {
    if !RiskItem::delete(&state.db, project_id, item_id).await? {
        return Err(ApiError::NotFound(format!("Risk {item_id} not found")));
    }
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn negative_values_are_rejected() {
        assert!(matches!(
            require_non_negative("quantity", dec!(-1)),
            Err(ApiError::BadRequest(msg)) if msg.contains("quantity")
        ));
        assert!(require_non_negative("quantity", Decimal::ZERO).is_ok());
        assert!(require_non_negative("quantity", dec!(10.5)).is_ok());
    }

    #[test]
    fn optional_values_only_reject_present_negatives() {
        assert!(require_non_negative_opt("fuel_cost", None).is_ok());
        assert!(require_non_negative_opt("fuel_cost", Some(dec!(0.01))).is_ok());
        assert!(matches!(
            require_non_negative_opt("fuel_cost", Some(dec!(-0.01))),
            Err(ApiError::BadRequest(msg)) if msg.contains("fuel_cost")
        ));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(
            require_name("name", ""),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            require_name("role", "   "),
            Err(ApiError::BadRequest(msg)) if msg.contains("role")
        ));
        assert!(require_name("name", "Rebar").is_ok());
    }
}
