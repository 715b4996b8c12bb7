//! Currency conversion via USD cross rates.

use rust_decimal::Decimal;

use super::decimal::round2;

/// Convert `amount` between two currencies given their `rate_to_usd` values.
///
/// The conversion multiplies by the ratio of the two rates and rounds to
/// cents. When either rate is missing or zero the amount is returned
/// unconverted with a warning, so a stale or incomplete rate table degrades
/// to "no conversion" rather than an error.
pub fn convert_amount(
    amount: Decimal,
    from_rate_to_usd: Option<Decimal>,
    to_rate_to_usd: Option<Decimal>,
) -> Decimal {
    match (from_rate_to_usd, to_rate_to_usd) {
        (Some(from), Some(to)) if !from.is_zero() && !to.is_zero() => {
            round2(amount * from / to)
        }
        _ => {
            tracing::warn!(
                %amount,
                from_rate = ?from_rate_to_usd,
                to_rate = ?to_rate_to_usd,
                "currency rate missing or zero, returning amount unconverted"
            );
            amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_through_usd_ratio() {
        // 100 EUR at 1.10 USD/EUR into GBP at 1.25 USD/GBP
        assert_eq!(
            convert_amount(dec!(100), Some(dec!(1.10)), Some(dec!(1.25))),
            dec!(88.00)
        );
    }

    #[test]
    fn identity_when_rates_equal() {
        assert_eq!(
            convert_amount(dec!(42.42), Some(dec!(1)), Some(dec!(1))),
            dec!(42.42)
        );
    }

    #[test]
    fn missing_rate_falls_back_to_original() {
        assert_eq!(convert_amount(dec!(100), None, Some(dec!(1.25))), dec!(100));
        assert_eq!(convert_amount(dec!(100), Some(dec!(1.10)), None), dec!(100));
    }

    #[test]
    fn zero_rate_falls_back_to_original() {
        assert_eq!(
            convert_amount(dec!(100), Some(Decimal::ZERO), Some(dec!(1.25))),
            dec!(100)
        );
        assert_eq!(
            convert_amount(dec!(100), Some(dec!(1.10)), Some(Decimal::ZERO)),
            dec!(100)
        );
    }
}
