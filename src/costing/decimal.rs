//! Monetary decimal helpers.
//!
//! All monetary values are carried as `Decimal` and rounded to exactly two
//! decimal places after every operation, so cent-level drift cannot
//! accumulate across repeated additions. The tie-break is half-up
//! (`MidpointAwayFromZero`); `round2(2.005) == 2.01`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to 2 decimal places, half-up.
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Add two monetary amounts, rounding the result.
#[inline]
pub fn safe_add(a: Decimal, b: Decimal) -> Decimal {
    round2(a + b)
}

/// Subtract two monetary amounts, rounding the result.
#[allow(dead_code)]
#[inline]
pub fn safe_sub(a: Decimal, b: Decimal) -> Decimal {
    round2(a - b)
}

/// Multiply two amounts, rounding the result.
#[inline]
pub fn safe_mul(a: Decimal, b: Decimal) -> Decimal {
    round2(a * b)
}

/// Divide two amounts, rounding the result. Division by zero yields zero
/// rather than an error; the costing functions are total over their domain.
#[inline]
pub fn safe_div(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        Decimal::ZERO
    } else {
        round2(a / b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round2_halves_go_up() {
        assert_eq!(round2(dec!(2.005)), dec!(2.01));
        assert_eq!(round2(dec!(2.004)), dec!(2.00));
        assert_eq!(round2(dec!(-2.005)), dec!(-2.01));
    }

    #[test]
    fn add_has_no_binary_float_artifacts() {
        assert_eq!(safe_add(dec!(0.1), dec!(0.2)), dec!(0.3));
    }

    #[test]
    fn div_by_zero_is_zero() {
        assert_eq!(safe_div(dec!(123.45), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(safe_div(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn div_rounds_to_cents() {
        assert_eq!(safe_div(dec!(10), dec!(3)), dec!(3.33));
    }

    #[test]
    fn sub_and_mul_round() {
        assert_eq!(safe_sub(dec!(1.005), dec!(0)), dec!(1.01));
        assert_eq!(safe_mul(dec!(1.105), dec!(3)), dec!(3.32));
    }
}
