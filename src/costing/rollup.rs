//! Project-level financial rollup.
//!
//! Takes the four category totals plus the percentage settings and derives
//! the cascading summary: direct costs, overhead, contingency, prime cost,
//! markup, bid price, tax, grand total. Each step is rounded to cents before
//! the next consumes it, so the summary a client sees is exactly the one the
//! arithmetic produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::{safe_add, safe_div};

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Summed line-item costs per category. Non-negative by construction: item
/// inputs are validated at the write path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub materials_total: Decimal,
    pub labor_total: Decimal,
    pub equipment_total: Decimal,
    pub additional_total: Decimal,
}

/// Percentage settings applied on top of direct costs. A project with no
/// settings row uses the default of all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRates {
    #[serde(default)]
    pub overhead_percent: Decimal,
    #[serde(default)]
    pub contingency_percent: Decimal,
    #[serde(default)]
    pub markup_percent: Decimal,
    #[serde(default)]
    pub tax_percent: Decimal,
}

/// Immutable snapshot of the full cascade: the four input totals plus the
/// eight derived figures. Recomputed from scratch whenever inputs change,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    pub materials_total: Decimal,
    pub labor_total: Decimal,
    pub equipment_total: Decimal,
    pub additional_total: Decimal,
    pub direct_costs: Decimal,
    pub overhead_amount: Decimal,
    pub contingency_amount: Decimal,
    pub prime_cost: Decimal,
    pub markup_amount: Decimal,
    pub bid_price: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

fn percent_of(base: Decimal, rate: Decimal) -> Decimal {
    safe_div(base * rate, ONE_HUNDRED)
}

/// Compute the full financial cascade for a project.
pub fn calculate_project_financials(
    totals: CategoryTotals,
    rates: FinancialRates,
) -> FinancialSummary {
    let direct_costs = safe_add(
        safe_add(totals.materials_total, totals.labor_total),
        safe_add(totals.equipment_total, totals.additional_total),
    );

    let overhead_amount = percent_of(direct_costs, rates.overhead_percent);
    let contingency_amount = percent_of(direct_costs, rates.contingency_percent);
    let prime_cost = safe_add(safe_add(direct_costs, overhead_amount), contingency_amount);

    let markup_amount = percent_of(prime_cost, rates.markup_percent);
    let bid_price = safe_add(prime_cost, markup_amount);

    let tax_amount = percent_of(bid_price, rates.tax_percent);
    let grand_total = safe_add(bid_price, tax_amount);

    FinancialSummary {
        materials_total: totals.materials_total,
        labor_total: totals.labor_total,
        equipment_total: totals.equipment_total,
        additional_total: totals.additional_total,
        direct_costs,
        overhead_amount,
        contingency_amount,
        prime_cost,
        markup_amount,
        bid_price,
        tax_amount,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn reference_cascade() {
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

        assert_eq!(summary.direct_costs, dec!(4000));
        assert_eq!(summary.overhead_amount, dec!(400));
        assert_eq!(summary.contingency_amount, dec!(200));
        assert_eq!(summary.prime_cost, dec!(4600));
        assert_eq!(summary.markup_amount, dec!(920));
        assert_eq!(summary.bid_price, dec!(5520));
        assert_eq!(summary.tax_amount, dec!(552));
        assert_eq!(summary.grand_total, dec!(6072));
    }

    #[test]
    fn input_totals_pass_through_unchanged() {
        let totals = CategoryTotals {
            materials_total: dec!(123.45),
            labor_total: dec!(0),
            equipment_total: dec!(67.89),
            additional_total: dec!(1.01),
        };
        let summary = calculate_project_financials(totals, FinancialRates::default());
        assert_eq!(summary.materials_total, totals.materials_total);
        assert_eq!(summary.equipment_total, totals.equipment_total);
        assert_eq!(summary.additional_total, totals.additional_total);
    }

    #[test]
    fn zero_totals_give_zero_grand_total() {
        let summary = calculate_project_financials(
            CategoryTotals::default(),
            FinancialRates {
                overhead_percent: dec!(10),
                contingency_percent: dec!(5),
                markup_percent: dec!(20),
                tax_percent: dec!(10),
            },
        );
        assert_eq!(summary.grand_total, Decimal::ZERO);
    }

    #[test]
    fn zero_rates_collapse_cascade_to_direct_costs() {
        let summary = calculate_project_financials(
            CategoryTotals {
                materials_total: dec!(100),
                labor_total: dec!(50),
                equipment_total: dec!(25),
                additional_total: dec!(25),
            },
            FinancialRates::default(),
        );
        assert_eq!(summary.direct_costs, dec!(200));
        assert_eq!(summary.prime_cost, dec!(200));
        assert_eq!(summary.bid_price, dec!(200));
        assert_eq!(summary.grand_total, dec!(200));
    }

    #[test]
    fn percent_amounts_round_to_cents() {
        let summary = calculate_project_financials(
            CategoryTotals {
                materials_total: dec!(33.33),
                labor_total: Decimal::ZERO,
                equipment_total: Decimal::ZERO,
                additional_total: Decimal::ZERO,
            },
            FinancialRates {
                overhead_percent: dec!(7.5),
                ..Default::default()
            },
        );
        // 33.33 * 7.5% = 2.49975 -> 2.50 half-up
        assert_eq!(summary.overhead_amount, dec!(2.50));
        assert_eq!(summary.prime_cost, dec!(35.83));
    }
}
