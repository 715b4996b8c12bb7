//! Category aggregators.
//!
//! Each reducer folds a slice of line items through its per-item calculator,
//! accumulating with `safe_add` so every intermediate sum is already rounded
//! to cents. An empty slice is zero.

use rust_decimal::Decimal;

use super::decimal::safe_add;
use crate::domain::items::{
    AdditionalItem, EquipmentItem, LaborItem, MaterialItem, RiskItem,
};

pub fn material_total(items: &[MaterialItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| safe_add(acc, item.cost()))
}

pub fn labor_total(items: &[LaborItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| safe_add(acc, item.cost()))
}

/// Equipment sums the full per-item figure (base plus maintenance and fuel).
pub fn equipment_total(items: &[EquipmentItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| safe_add(acc, item.cost().total_cost))
}

pub fn additional_total(items: &[AdditionalItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| safe_add(acc, item.cost()))
}

/// Sum of weighted risk impacts. Reported alongside the financial cascade,
/// distinct from the contingency-percent reserve on direct costs.
pub fn risk_contingency_total(items: &[RiskItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, item| safe_add(acc, item.contingency()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::costing::decimal::{round2, safe_add};

    fn material(quantity: Decimal, unit_price: Decimal) -> MaterialItem {
        MaterialItem {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            name: "test".to_string(),
            unit: "unit".to_string(),
            quantity,
            unit_price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn risk(probability: &str, impact_amount: Decimal) -> RiskItem {
        RiskItem {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            name: "test".to_string(),
            probability: probability.to_string(),
            impact_amount,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_slice_sums_to_zero() {
        assert_eq!(material_total(&[]), Decimal::ZERO);
        assert_eq!(risk_contingency_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn materials_sum_item_costs() {
        let items = vec![material(dec!(10), dec!(5)), material(dec!(2), dec!(10))];
        assert_eq!(material_total(&items), dec!(70));
    }

    #[test]
    fn equipment_sums_total_not_base() {
        let item = EquipmentItem {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            name: "excavator".to_string(),
            quantity: dec!(2),
            cost_per_period: dec!(100),
            usage_duration: dec!(5),
            maintenance_cost: Some(dec!(50)),
            fuel_cost: Some(dec!(100)),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(equipment_total(&[item]), dec!(1150));
    }

    #[test]
    fn risks_sum_weighted_impacts() {
        let items = vec![risk("high", dec!(1000)), risk("low", dec!(500))];
        // 500 + 50
        assert_eq!(risk_contingency_total(&items), dec!(550));
    }

    proptest! {
        // Accumulating already-rounded cent amounts is order-independent:
        // any permutation and any batching produce the same total.
        #[test]
        fn accumulation_is_permutation_invariant(cents in prop::collection::vec(0i64..1_000_000, 0..40)) {
            let amounts: Vec<Decimal> = cents.iter().map(|&c| Decimal::new(c, 2)).collect();

            let forward = amounts.iter().fold(Decimal::ZERO, |acc, &a| safe_add(acc, a));
            let reverse = amounts.iter().rev().fold(Decimal::ZERO, |acc, &a| safe_add(acc, a));
            let batch = round2(amounts.iter().copied().sum::<Decimal>());

            prop_assert_eq!(forward, reverse);
            prop_assert_eq!(forward, batch);
        }
    }
}
