//! Computed financial summary endpoint.
//!
//! Loads everything a project owns, aggregates it through the costing
//! engine and returns the cascade. Nothing here is read back from storage;
//! the summary is recomputed on every request so it can never go stale.

use axum::extract::{Path, Query, State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::costing::{
    additional_total, calculate_project_financials, convert_amount, equipment_total, labor_total,
    material_total, risk_contingency_total, CategoryTotals, FinancialSummary,
};
use crate::domain::{
    AdditionalItem, CurrencyRate, EquipmentItem, FinancialSettings, LaborItem, MaterialItem,
    Project, RiskItem,
};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryQuery {
    /// Optional target currency; amounts convert through the rate table.
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub project_id: Uuid,
    /// Currency the figures are denominated in after any conversion
    pub currency: String,
    #[serde(flatten)]
    pub summary: FinancialSummary,
    /// Sum of probability-weighted risk impacts, reported alongside the
    /// cascade. Distinct from the contingency-percent reserve.
    pub risk_contingency_total: Decimal,
}

pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<DataResponse<SummaryResponse>> {
    let project = Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {project_id} not found")))?;

    let (materials, labor, equipment, additional, risks, settings) = tokio::try_join!(
        MaterialItem::find_by_project(&state.db, project_id),
        LaborItem::find_by_project(&state.db, project_id),
        EquipmentItem::find_by_project(&state.db, project_id),
        AdditionalItem::find_by_project(&state.db, project_id),
        RiskItem::find_by_project(&state.db, project_id),
        FinancialSettings::find_by_project(&state.db, project_id),
    )?;

    let totals = CategoryTotals {
        materials_total: material_total(&materials),
        labor_total: labor_total(&labor),
        equipment_total: equipment_total(&equipment),
        additional_total: additional_total(&additional),
    };
    let rates = settings.map(|s| s.rates()).unwrap_or_default();

    let mut summary = calculate_project_financials(totals, rates);
    let mut risk_total = risk_contingency_total(&risks);
    let mut currency = project.currency.clone();

    if let Some(target) = query
        .currency
        .as_deref()
        .map(str::to_uppercase)
        .filter(|target| *target != project.currency)
    {
        let (from_rate, to_rate) = tokio::try_join!(
            CurrencyRate::find(&state.db, &project.currency),
            CurrencyRate::find(&state.db, &target),
        )?;
        let from_rate = from_rate.map(|r| r.rate_to_usd);
        let to_rate = to_rate.map(|r| r.rate_to_usd);

        // Amounts stay unconverted (and keep the project currency label)
        // when either rate is missing or zero.
        if from_rate.is_some_and(|r| !r.is_zero()) && to_rate.is_some_and(|r| !r.is_zero()) {
            summary = convert_summary(&summary, from_rate, to_rate);
            risk_total = convert_amount(risk_total, from_rate, to_rate);
            currency = target;
        } else {
            tracing::warn!(
                project_id = %project_id,
                from = %project.currency,
                to = %target,
                "currency rate missing, returning summary unconverted"
            );
        }
    }

    Ok(DataResponse::new(SummaryResponse {
        project_id,
        currency,
        summary,
        risk_contingency_total: risk_total,
    }))
}

/// Apply the rate ratio to every monetary field of the cascade.
fn convert_summary(
    summary: &FinancialSummary,
    from_rate: Option<Decimal>,
    to_rate: Option<Decimal>,
) -> FinancialSummary {
    let convert = |amount| convert_amount(amount, from_rate, to_rate);
    FinancialSummary {
        materials_total: convert(summary.materials_total),
        labor_total: convert(summary.labor_total),
        equipment_total: convert(summary.equipment_total),
        additional_total: convert(summary.additional_total),
        direct_costs: convert(summary.direct_costs),
        overhead_amount: convert(summary.overhead_amount),
        contingency_amount: convert(summary.contingency_amount),
        prime_cost: convert(summary.prime_cost),
        markup_amount: convert(summary.markup_amount),
        bid_price: convert(summary.bid_price),
        tax_amount: convert(summary.tax_amount),
        grand_total: convert(summary.grand_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::costing::{calculate_project_financials, FinancialRates};

    #[test]
    fn convert_summary_scales_every_field() {
        let summary = calculate_project_financials(
            CategoryTotals {
                materials_total: dec!(1000),
                labor_total: dec!(2000),
                equipment_total: dec!(500),
                additional_total: dec!(500),
            },
            FinancialRates {
                overhead_percent: dec!(10),
                contingency_percent: dec!(5),
                markup_percent: dec!(20),
                tax_percent: dec!(10),
            },
        );

        // Doubling rate ratio doubles every figure
        let converted = convert_summary(&summary, Some(dec!(2)), Some(dec!(1)));
        assert_eq!(converted.materials_total, dec!(2000));
        assert_eq!(converted.direct_costs, dec!(8000));
        assert_eq!(converted.prime_cost, dec!(9200));
        assert_eq!(converted.grand_total, dec!(12144));
    }

    #[test]
    fn convert_summary_missing_rate_is_identity() {
        let summary = calculate_project_financials(
            CategoryTotals {
                materials_total: dec!(100),
                ..Default::default()
            },
            FinancialRates::default(),
        );
        let converted = convert_summary(&summary, None, Some(dec!(1.25)));
        assert_eq!(converted, summary);
    }
}
