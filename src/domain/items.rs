//! Cost line-item entities and DTOs.
//!
//! One table per cost category. Entities carry their raw figures; computed
//! costs are derived through `costing` and echoed on responses, never stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::costing::{
    additional_cost, equipment_cost, labor_cost, material_cost, risk_contingency,
    EquipmentCost, EquipmentInput,
};

/// Material line item
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct MaterialItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaterialItem {
    pub fn cost(&self) -> Decimal {
        material_cost(self.quantity, self.unit_price)
    }

    pub async fn create(
        pool: &PgPool,
        project_id: Uuid,
        req: &CreateMaterialItem,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO material_items (id, project_id, name, unit, quantity, unit_price)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(&req.name)
        .bind(&req.unit)
        .bind(req.quantity)
        .bind(req.unit_price)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM material_items WHERE project_id = $1 ORDER BY created_at",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: Uuid,
        id: Uuid,
        req: &UpdateMaterialItem,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE material_items
               SET name = COALESCE($3, name),
                   unit = COALESCE($4, unit),
                   quantity = COALESCE($5, quantity),
                   unit_price = COALESCE($6, unit_price),
                   updated_at = now()
               WHERE id = $1 AND project_id = $2
               RETURNING *"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(&req.name)
        .bind(&req.unit)
        .bind(req.quantity)
        .bind(req.unit_price)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, project_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM material_items WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterialItem {
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

fn default_unit() -> String {
    "unit".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMaterialItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub unit_price: Option<Decimal>,
}

/// Labor line item
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LaborItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub role: String,
    pub workers: Decimal,
    pub daily_rate: Decimal,
    pub days: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LaborItem {
    pub fn cost(&self) -> Decimal {
        labor_cost(self.workers, self.daily_rate, self.days)
    }

    pub async fn create(
        pool: &PgPool,
        project_id: Uuid,
        req: &CreateLaborItem,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO labor_items (id, project_id, role, workers, daily_rate, days)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(&req.role)
        .bind(req.workers)
        .bind(req.daily_rate)
        .bind(req.days)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM labor_items WHERE project_id = $1 ORDER BY created_at",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: Uuid,
        id: Uuid,
        req: &UpdateLaborItem,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE labor_items
               SET role = COALESCE($3, role),
                   workers = COALESCE($4, workers),
                   daily_rate = COALESCE($5, daily_rate),
                   days = COALESCE($6, days),
                   updated_at = now()
               WHERE id = $1 AND project_id = $2
               RETURNING *"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(&req.role)
        .bind(req.workers)
        .bind(req.daily_rate)
        .bind(req.days)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, project_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labor_items WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLaborItem {
    pub role: String,
    pub workers: Decimal,
    pub daily_rate: Decimal,
    pub days: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLaborItem {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub workers: Option<Decimal>,
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    #[serde(default)]
    pub days: Option<Decimal>,
}

/// Equipment line item
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub cost_per_period: Decimal,
    pub usage_duration: Decimal,
    pub maintenance_cost: Option<Decimal>,
    pub fuel_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EquipmentItem {
    pub fn cost(&self) -> EquipmentCost {
        equipment_cost(EquipmentInput {
            quantity: self.quantity,
            cost_per_period: self.cost_per_period,
            usage_duration: self.usage_duration,
            maintenance_cost: self.maintenance_cost,
            fuel_cost: self.fuel_cost,
        })
    }

    pub async fn create(
        pool: &PgPool,
        project_id: Uuid,
        req: &CreateEquipmentItem,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO equipment_items
                   (id, project_id, name, quantity, cost_per_period, usage_duration,
                    maintenance_cost, fuel_cost)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(&req.name)
        .bind(req.quantity)
        .bind(req.cost_per_period)
        .bind(req.usage_duration)
        .bind(req.maintenance_cost)
        .bind(req.fuel_cost)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM equipment_items WHERE project_id = $1 ORDER BY created_at",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: Uuid,
        id: Uuid,
        req: &UpdateEquipmentItem,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE equipment_items
               SET name = COALESCE($3, name),
                   quantity = COALESCE($4, quantity),
                   cost_per_period = COALESCE($5, cost_per_period),
                   usage_duration = COALESCE($6, usage_duration),
                   maintenance_cost = COALESCE($7, maintenance_cost),
                   fuel_cost = COALESCE($8, fuel_cost),
                   updated_at = now()
               WHERE id = $1 AND project_id = $2
               RETURNING *"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(&req.name)
        .bind(req.quantity)
        .bind(req.cost_per_period)
        .bind(req.usage_duration)
        .bind(req.maintenance_cost)
        .bind(req.fuel_cost)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, project_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment_items WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipmentItem {
    pub name: String,
    pub quantity: Decimal,
    pub cost_per_period: Decimal,
    pub usage_duration: Decimal,
    #[serde(default)]
    pub maintenance_cost: Option<Decimal>,
    #[serde(default)]
    pub fuel_cost: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEquipmentItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub cost_per_period: Option<Decimal>,
    #[serde(default)]
    pub usage_duration: Option<Decimal>,
    #[serde(default)]
    pub maintenance_cost: Option<Decimal>,
    #[serde(default)]
    pub fuel_cost: Option<Decimal>,
}

/// Additional-cost line item
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AdditionalItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AdditionalItem {
    pub fn cost(&self) -> Decimal {
        additional_cost(self.amount)
    }

    pub async fn create(
        pool: &PgPool,
        project_id: Uuid,
        req: &CreateAdditionalItem,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO additional_items (id, project_id, name, amount)
               VALUES ($1, $2, $3, $4)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(&req.name)
        .bind(req.amount)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM additional_items WHERE project_id = $1 ORDER BY created_at",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: Uuid,
        id: Uuid,
        req: &UpdateAdditionalItem,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE additional_items
               SET name = COALESCE($3, name),
                   amount = COALESCE($4, amount),
                   updated_at = now()
               WHERE id = $1 AND project_id = $2
               RETURNING *"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(&req.name)
        .bind(req.amount)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, project_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM additional_items WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdditionalItem {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdditionalItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// Risk line item. Probability is a free-form label; the weighting in
/// `costing::risk` resolves it by substring, so "High", "high risk" and
/// "HIGH" all weigh the same.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub probability: String,
    pub impact_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RiskItem {
    pub fn contingency(&self) -> Decimal {
        risk_contingency(self.impact_amount, &self.probability)
    }

    pub async fn create(
        pool: &PgPool,
        project_id: Uuid,
        req: &CreateRiskItem,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO risk_items (id, project_id, name, probability, impact_amount)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(project_id)
        .bind(&req.name)
        .bind(&req.probability)
        .bind(req.impact_amount)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM risk_items WHERE project_id = $1 ORDER BY created_at",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        project_id: Uuid,
        id: Uuid,
        req: &UpdateRiskItem,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE risk_items
               SET name = COALESCE($3, name),
                   probability = COALESCE($4, probability),
                   impact_amount = COALESCE($5, impact_amount),
                   updated_at = now()
               WHERE id = $1 AND project_id = $2
               RETURNING *"#,
        )
        .bind(id)
        .bind(project_id)
        .bind(&req.name)
        .bind(&req.probability)
        .bind(req.impact_amount)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, project_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM risk_items WHERE id = $1 AND project_id = $2")
            .bind(id)
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRiskItem {
    pub name: String,
    pub probability: String,
    pub impact_amount: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRiskItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub probability: Option<String>,
    #[serde(default)]
    pub impact_amount: Option<Decimal>,
}
