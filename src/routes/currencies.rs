use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::{currency, CurrencyRate, UpsertCurrencyRateRequest};
use crate::error::{ApiError, ApiResult};

/// List all known exchange rates
pub async fn list_rates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<DataResponse<Vec<CurrencyRate>>> {
    let rates = CurrencyRate::list(&state.db).await?;
    Ok(DataResponse::new(rates))
}

/// Create or replace the rate for a currency code
pub async fn put_rate(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(req): Json<UpsertCurrencyRateRequest>,
) -> ApiResult<DataResponse<CurrencyRate>> {
    let code = currency::normalize_code(&code).ok_or_else(|| {
        ApiError::BadRequest("Currency code must be a 3-letter ISO code".into())
    })?;
    if req.rate_to_usd <= rust_decimal::Decimal::ZERO {
        return Err(ApiError::BadRequest("rate_to_usd must be positive".into()));
    }

    let rate = CurrencyRate::upsert(&state.db, &code, req.rate_to_usd).await?;
    tracing::info!(code = %rate.code, rate = %rate.rate_to_usd, "Currency rate updated");
    Ok(DataResponse::new(rate))
}
