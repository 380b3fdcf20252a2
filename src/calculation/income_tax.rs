//! Progressive income tax.

use rust_decimal::Decimal;

use crate::config::IncomeTaxBracket;

use super::round2;

/// Computes income tax on `taxable_income` across marginal brackets.
///
/// Brackets are sorted by `min_income` before use, so input order does not
/// matter. Each bracket taxes the part of the income inside its half-open
/// range `[min_income, max_income)` at its own rate. Income exactly at a
/// boundary is taxed entirely by the brackets below it.
///
/// Zero or negative income owes nothing. The sum is rounded once at the end,
/// never per bracket.
///
/// Brackets are trusted: gaps or overlaps are not detected here. Use
/// [`TaxConfiguration::validate`](crate::config::TaxConfiguration::validate)
/// on untrusted input.
///
/// # Examples
///
/// ```
/// use bordro_engine::calculation::income_tax;
/// use bordro_engine::config::TaxConfiguration;
/// use rust_decimal::Decimal;
///
/// let brackets = TaxConfiguration::reference_2026().income_tax.brackets;
///
/// // 190000 * 15% + 10000 * 20%
/// assert_eq!(income_tax(Decimal::from(200_000), &brackets), Decimal::from(30_500));
/// assert_eq!(income_tax(Decimal::ZERO, &brackets), Decimal::ZERO);
/// ```
pub fn income_tax(taxable_income: Decimal, brackets: &[IncomeTaxBracket]) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut sorted: Vec<&IncomeTaxBracket> = brackets.iter().collect();
    sorted.sort_by(|a, b| a.min_income.cmp(&b.min_income));

    let mut total = Decimal::ZERO;
    for bracket in sorted {
        if taxable_income <= bracket.min_income {
            break;
        }

        let upper = match bracket.max_income {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        let in_bracket = (upper - bracket.min_income).max(Decimal::ZERO);
        total += in_bracket * bracket.rate;
    }

    round2(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(id: &str, min: &str, max: Option<&str>, rate: &str) -> IncomeTaxBracket {
        IncomeTaxBracket {
            id: id.to_string(),
            min_income: dec(min),
            max_income: max.map(dec),
            rate: dec(rate),
        }
    }

    fn brackets() -> Vec<IncomeTaxBracket> {
        vec![
            bracket("1", "0", Some("110000"), "0.15"),
            bracket("2", "110000", Some("230000"), "0.20"),
            bracket("3", "230000", Some("580000"), "0.27"),
            bracket("4", "580000", Some("3000000"), "0.35"),
            bracket("5", "3000000", None, "0.40"),
        ]
    }

    /// IT-001: zero income
    #[test]
    fn test_zero_income_owes_nothing() {
        assert_eq!(income_tax(Decimal::ZERO, &brackets()), Decimal::ZERO);
    }

    /// IT-002: negative income
    #[test]
    fn test_negative_income_owes_nothing() {
        assert_eq!(income_tax(dec("-1000"), &brackets()), Decimal::ZERO);
    }

    /// IT-003: first bracket only
    #[test]
    fn test_income_in_first_bracket() {
        assert_eq!(income_tax(dec("50000"), &brackets()), dec("7500"));
    }

    /// IT-004: exactly at the first boundary
    #[test]
    fn test_income_at_first_boundary() {
        assert_eq!(income_tax(dec("110000"), &brackets()), dec("16500"));
    }

    /// IT-005: spans two brackets
    #[test]
    fn test_income_spanning_two_brackets() {
        // 110000 * 0.15 + 40000 * 0.20
        assert_eq!(income_tax(dec("150000"), &brackets()), dec("24500"));
    }

    /// IT-006: spans three brackets
    #[test]
    fn test_income_spanning_multiple_brackets() {
        // 16500 + 24000 + 70000 * 0.27
        assert_eq!(income_tax(dec("300000"), &brackets()), dec("59400"));
    }

    /// IT-007: reaches the unbounded bracket
    #[test]
    fn test_very_high_income() {
        // 16500 + 24000 + 94500 + 847000 + 800000
        assert_eq!(income_tax(dec("5000000"), &brackets()), dec("1782000"));
    }

    #[test]
    fn test_bracket_order_does_not_matter() {
        let mut shuffled = brackets();
        shuffled.swap(0, 4);
        shuffled.swap(1, 3);
        assert_eq!(
            income_tax(dec("300000"), &shuffled),
            income_tax(dec("300000"), &brackets())
        );
    }

    #[test]
    fn test_rounds_once_at_the_end() {
        // 28075.50 * 0.15 = 4211.325
        assert_eq!(income_tax(dec("28075.50"), &brackets()), dec("4211.33"));
    }

    #[test]
    fn test_no_brackets_owes_nothing() {
        assert_eq!(income_tax(dec("50000"), &[]), Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_continuous_at_boundaries() {
        let kurus = dec("0.01");
        for bracket in brackets().iter().skip(1) {
            let below = income_tax(bracket.min_income - kurus, &brackets());
            let above = income_tax(bracket.min_income + kurus, &brackets());
            // One kuruş either side moves the tax by at most a kuruş
            assert!(above - below <= kurus, "jump at {}", bracket.min_income);
        }
    }

    fn income() -> impl Strategy<Value = Decimal> {
        (0i64..=1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #[test]
        fn prop_tax_is_non_decreasing(a in income(), b in income()) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(income_tax(low, &brackets()) <= income_tax(high, &brackets()));
        }
    }
}
