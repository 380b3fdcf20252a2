//! Percentage deductions, with and without a contribution ceiling.
//!
//! SGK and unemployment contributions are charged on the salary only up to
//! the monthly ceiling; stamp duty is charged on the whole amount.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::round2;

/// Computes `round2(base_amount * rate)`.
///
/// # Errors
///
/// - [`EngineError::InvalidAmount`] if `base_amount` is negative.
/// - [`EngineError::InvalidRate`] if `rate` is outside [0, 1].
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let stamp_duty = deduction(Decimal::from(10_000), Decimal::from_str("0.00759").unwrap()).unwrap();
/// assert_eq!(stamp_duty, Decimal::from_str("75.90").unwrap());
/// ```
pub fn deduction(base_amount: Decimal, rate: Decimal) -> EngineResult<Decimal> {
    if base_amount < Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            amount: base_amount,
        });
    }
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::InvalidRate { rate });
    }

    Ok(round2(base_amount * rate))
}

/// Computes a deduction on `gross_amount` capped at `ceiling`.
///
/// Income above the ceiling is not contribution-bearing, so the result is
/// `deduction(min(gross_amount, ceiling), rate)`. Exceeding the ceiling is
/// not an error.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::capped_deduction;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ceiling = Decimal::from_str("69007.5").unwrap();
/// let rate = Decimal::from_str("0.14").unwrap();
///
/// let capped = capped_deduction(Decimal::from(100_000), rate, ceiling).unwrap();
/// assert_eq!(capped, Decimal::from_str("9661.05").unwrap());
/// ```
pub fn capped_deduction(
    gross_amount: Decimal,
    rate: Decimal,
    ceiling: Decimal,
) -> EngineResult<Decimal> {
    deduction(gross_amount.min(ceiling), rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// DD-001: plain percentage
    #[test]
    fn test_calculates_percentage_deduction() {
        assert_eq!(deduction(dec("10000"), dec("0.14")).unwrap(), dec("1400"));
    }

    /// DD-002: zero rate
    #[test]
    fn test_zero_rate_yields_zero() {
        assert_eq!(deduction(dec("10000"), Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    /// DD-003: full rate
    #[test]
    fn test_full_rate_yields_whole_amount() {
        assert_eq!(deduction(dec("10000"), Decimal::ONE).unwrap(), dec("10000"));
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(deduction(dec("33030"), dec("0.00759")).unwrap(), dec("250.70"));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        assert_eq!(
            deduction(dec("-1000"), dec("0.14")),
            Err(EngineError::InvalidAmount {
                amount: dec("-1000")
            })
        );
    }

    #[test]
    fn test_rate_below_zero_is_rejected() {
        assert_eq!(
            deduction(dec("1000"), dec("-0.1")),
            Err(EngineError::InvalidRate { rate: dec("-0.1") })
        );
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        assert_eq!(
            deduction(dec("1000"), dec("1.5")),
            Err(EngineError::InvalidRate { rate: dec("1.5") })
        );
    }

    /// CD-001: below ceiling
    #[test]
    fn test_capped_below_ceiling() {
        let result = capped_deduction(dec("30000"), dec("0.14"), dec("69007.5")).unwrap();
        assert_eq!(result, dec("4200"));
    }

    /// CD-002: above ceiling
    #[test]
    fn test_capped_above_ceiling() {
        let result = capped_deduction(dec("100000"), dec("0.14"), dec("69007.5")).unwrap();
        assert_eq!(result, dec("9661.05"));
    }

    /// CD-003: exactly at ceiling
    #[test]
    fn test_capped_exactly_at_ceiling() {
        let result = capped_deduction(dec("69007.5"), dec("0.14"), dec("69007.5")).unwrap();
        assert_eq!(result, dec("9661.05"));
    }

    #[test]
    fn test_capped_zero_salary() {
        let result = capped_deduction(Decimal::ZERO, dec("0.14"), dec("69007.5")).unwrap();
        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn test_capped_employer_rate() {
        let result = capped_deduction(dec("30000"), dec("0.205"), dec("69007.5")).unwrap();
        assert_eq!(result, dec("6150"));
    }

    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..=100_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    fn rate() -> impl Strategy<Value = Decimal> {
        (0i64..=100_000).prop_map(|units| Decimal::new(units, 5))
    }

    proptest! {
        #[test]
        fn prop_deduction_matches_rounded_product(base in amount(), r in rate()) {
            prop_assert_eq!(deduction(base, r).unwrap(), round2(base * r));
        }

        #[test]
        fn prop_deduction_never_exceeds_base(base in amount(), r in rate()) {
            prop_assert!(deduction(base, r).unwrap() <= base);
        }

        #[test]
        fn prop_above_ceiling_charges_ceiling(
            ceiling in amount(),
            excess in 1i64..=10_000_000,
            r in rate(),
        ) {
            let gross = ceiling + Decimal::new(excess, 2);
            prop_assert_eq!(
                capped_deduction(gross, r, ceiling).unwrap(),
                deduction(ceiling, r).unwrap()
            );
        }
    }
}
