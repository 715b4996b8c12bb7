//! Risk probability weighting.

use rust_decimal::Decimal;

use super::items::risk_cost;

/// Weight attached to a probability label. Matching is case-insensitive and
/// by substring, so "High risk" and "medium probability" resolve the way the
/// label reads; anything unrecognised weighs zero.
pub fn probability_weight(label: &str) -> Decimal {
    let label = label.to_lowercase();
    if label.contains("high") {
        Decimal::new(5, 1) // 0.5
    } else if label.contains("medium") {
        Decimal::new(3, 1) // 0.3
    } else if label.contains("low") {
        Decimal::new(1, 1) // 0.1
    } else {
        Decimal::ZERO
    }
}

/// Contingency reserve for a single risk: impact x probability weight,
/// rounded to cents.
pub fn risk_contingency(impact: Decimal, probability_label: &str) -> Decimal {
    risk_cost(impact, probability_weight(probability_label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn weights_are_case_insensitive() {
        assert_eq!(probability_weight("High"), dec!(0.5));
        assert_eq!(probability_weight("MEDIUM"), dec!(0.3));
        assert_eq!(probability_weight("low"), dec!(0.1));
    }

    #[test]
    fn substring_labels_match() {
        assert_eq!(probability_weight("Very high likelihood"), dec!(0.5));
        assert_eq!(probability_weight("medium probability"), dec!(0.3));
    }

    #[test]
    fn unknown_label_weighs_zero() {
        assert_eq!(probability_weight("certain"), Decimal::ZERO);
        assert_eq!(probability_weight(""), Decimal::ZERO);
    }

    #[test]
    fn contingency_is_weighted_impact() {
        assert_eq!(risk_contingency(dec!(1000), "medium"), dec!(300));
        assert_eq!(risk_contingency(dec!(1000), "unknown"), Decimal::ZERO);
    }
}
