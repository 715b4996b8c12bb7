//! Pure cost-estimation arithmetic.
//!
//! Everything in this module is a total, synchronous function over
//! `rust_decimal::Decimal`: no I/O, no shared state, safe to call from any
//! number of handlers concurrently. The rounding contract (2 decimal places,
//! half-up) lives in [`decimal`] and every monetary result passes through it.

pub mod aggregate;
pub mod currency;
pub mod decimal;
pub mod items;
pub mod risk;
pub mod rollup;

pub use aggregate::{
    additional_total, equipment_total, labor_total, material_total, risk_contingency_total,
};
pub use currency::convert_amount;
pub use decimal::{round2, safe_add, safe_div, safe_mul, safe_sub};
pub use items::{
    additional_cost, equipment_cost, labor_cost, material_cost, risk_cost, EquipmentCost,
    EquipmentInput,
};
pub use risk::{probability_weight, risk_contingency};
pub use rollup::{calculate_project_financials, CategoryTotals, FinancialRates, FinancialSummary};
