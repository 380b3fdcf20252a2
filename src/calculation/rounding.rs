//! Monetary rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value to two decimal places (one kuruş), half away from zero.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("4211.325").unwrap()), Decimal::from_str("4211.33").unwrap());
/// assert_eq!(round2(Decimal::from_str("250.6977").unwrap()), Decimal::from_str("250.70").unwrap());
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(round2(dec("123.454")), dec("123.45"));
    }

    #[test]
    fn test_rounds_up_at_midpoint() {
        assert_eq!(round2(dec("123.455")), dec("123.46"));
    }

    #[test]
    fn test_preserves_already_rounded_values() {
        assert_eq!(round2(dec("75.90")), dec("75.90"));
        assert_eq!(round2(dec("0")), dec("0"));
    }

    #[test]
    fn test_carries_into_integer_part() {
        assert_eq!(round2(dec("999999.995")), dec("1000000.00"));
    }
}
