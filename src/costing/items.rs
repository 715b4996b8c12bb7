//! Per-item cost calculators, one per cost category.

use rust_decimal::Decimal;
use serde::Serialize;

use super::decimal::{round2, safe_add, safe_mul};

/// Material line: quantity times unit price.
pub fn material_cost(quantity: Decimal, unit_price: Decimal) -> Decimal {
    safe_mul(quantity, unit_price)
}

/// Labor line: crew size times daily rate times duration.
pub fn labor_cost(workers: Decimal, daily_rate: Decimal, days: Decimal) -> Decimal {
    round2(workers * daily_rate * days)
}

/// Equipment calculator input. Maintenance and fuel are optional add-ons on
/// top of the rental base; absent values count as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquipmentInput {
    pub quantity: Decimal,
    pub cost_per_period: Decimal,
    pub usage_duration: Decimal,
    pub maintenance_cost: Option<Decimal>,
    pub fuel_cost: Option<Decimal>,
}

/// Equipment cost split into the rental base and the grand figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentCost {
    pub base_cost: Decimal,
    pub total_cost: Decimal,
}

/// Equipment line: quantity x cost-per-period x duration, plus maintenance
/// and fuel.
pub fn equipment_cost(input: EquipmentInput) -> EquipmentCost {
    let base_cost = round2(input.quantity * input.cost_per_period * input.usage_duration);
    let extras = safe_add(
        input.maintenance_cost.unwrap_or_default(),
        input.fuel_cost.unwrap_or_default(),
    );
    EquipmentCost {
        base_cost,
        total_cost: safe_add(base_cost, extras),
    }
}

/// Additional-cost line: the amount is already the cost.
pub fn additional_cost(amount: Decimal) -> Decimal {
    round2(amount)
}

/// Risk line: impact scaled by the probability weight.
pub fn risk_cost(impact: Decimal, probability_weight: Decimal) -> Decimal {
    safe_mul(impact, probability_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn material_is_quantity_times_price() {
        assert_eq!(material_cost(dec!(10), dec!(5.5)), dec!(55));
    }

    #[test]
    fn labor_is_triple_product() {
        assert_eq!(labor_cost(dec!(5), dec!(100), dec!(10)), dec!(5000));
    }

    #[test]
    fn equipment_splits_base_and_total() {
        let cost = equipment_cost(EquipmentInput {
            quantity: dec!(2),
            cost_per_period: dec!(100),
            usage_duration: dec!(5),
            maintenance_cost: Some(dec!(50)),
            fuel_cost: Some(dec!(100)),
        });
        assert_eq!(cost.base_cost, dec!(1000));
        assert_eq!(cost.total_cost, dec!(1150));
    }

    #[test]
    fn equipment_extras_default_to_zero() {
        let cost = equipment_cost(EquipmentInput {
            quantity: dec!(1),
            cost_per_period: dec!(200),
            usage_duration: dec!(3),
            maintenance_cost: None,
            fuel_cost: None,
        });
        assert_eq!(cost.base_cost, dec!(600));
        assert_eq!(cost.total_cost, dec!(600));
    }

    #[test]
    fn additional_passes_through_rounded() {
        assert_eq!(additional_cost(dec!(19.999)), dec!(20.00));
    }

    #[test]
    fn risk_scales_impact() {
        assert_eq!(risk_cost(dec!(1000), dec!(0.3)), dec!(300));
    }
}
