//! Per-project financial settings.
//!
//! The four percentage rates the rollup applies on top of direct costs.
//! A project without a settings row computes with all rates at zero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::costing::FinancialRates;

/// Financial settings entity, one row per project
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct FinancialSettings {
    pub project_id: Uuid,
    pub overhead_percent: Decimal,
    pub contingency_percent: Decimal,
    pub markup_percent: Decimal,
    pub tax_percent: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl FinancialSettings {
    pub fn rates(&self) -> FinancialRates {
        FinancialRates {
            overhead_percent: self.overhead_percent,
            contingency_percent: self.contingency_percent,
            markup_percent: self.markup_percent,
            tax_percent: self.tax_percent,
        }
    }

    pub async fn find_by_project(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM financial_settings WHERE project_id = $1")
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn upsert(
        pool: &PgPool,
        project_id: Uuid,
        req: &UpdateFinancialSettingsRequest,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO financial_settings
                   (project_id, overhead_percent, contingency_percent, markup_percent, tax_percent)
               VALUES ($1, $2, $3, $4, $5)
               ON CONFLICT (project_id) DO UPDATE
               SET overhead_percent = EXCLUDED.overhead_percent,
                   contingency_percent = EXCLUDED.contingency_percent,
                   markup_percent = EXCLUDED.markup_percent,
                   tax_percent = EXCLUDED.tax_percent,
                   updated_at = now()
               RETURNING *"#,
        )
        .bind(project_id)
        .bind(req.overhead_percent)
        .bind(req.contingency_percent)
        .bind(req.markup_percent)
        .bind(req.tax_percent)
        .fetch_one(pool)
        .await
    }
}

/// Request DTO for replacing a project's financial settings. Absent rates
/// are written as zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFinancialSettingsRequest {
    #[serde(default)]
    pub overhead_percent: Decimal,
    #[serde(default)]
    pub contingency_percent: Decimal,
    #[serde(default)]
    pub markup_percent: Decimal,
    #[serde(default)]
    pub tax_percent: Decimal,
}
