//! Currency rate table.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// Uppercase and validate a 3-letter ISO 4217 code. Rate rows and project
/// currencies both go through this, so "usd" and "USD" always compare equal.
pub fn normalize_code(code: &str) -> Option<String> {
    let code = code.trim().to_uppercase();
    (code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())).then_some(code)
}

/// Exchange rate row: how many USD one unit of `code` buys.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub code: String,
    pub rate_to_usd: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl CurrencyRate {
    pub async fn find(pool: &PgPool, code: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM currency_rates WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM currency_rates ORDER BY code")
            .fetch_all(pool)
            .await
    }

    pub async fn upsert(
        pool: &PgPool,
        code: &str,
        rate_to_usd: Decimal,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO currency_rates (code, rate_to_usd)
               VALUES ($1, $2)
               ON CONFLICT (code) DO UPDATE
               SET rate_to_usd = EXCLUDED.rate_to_usd,
                   updated_at = now()
               RETURNING *"#,
        )
        .bind(code)
        .bind(rate_to_usd)
        .fetch_one(pool)
        .await
    }
}

/// Request DTO for setting a rate
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCurrencyRateRequest {
    pub rate_to_usd: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_normalize_to_uppercase() {
        assert_eq!(normalize_code("usd"), Some("USD".to_string()));
        assert_eq!(normalize_code(" eur "), Some("EUR".to_string()));
        assert_eq!(normalize_code("GBP"), Some("GBP".to_string()));
    }

    #[test]
    fn malformed_codes_are_rejected() {
        assert_eq!(normalize_code(""), None);
        assert_eq!(normalize_code("US"), None);
        assert_eq!(normalize_code("USDT"), None);
        assert_eq!(normalize_code("U1D"), None);
    }
}
