//! The published 2026 Turkish payroll parameters.

use rust_decimal::Decimal;

use super::types::{
    IncomeTaxBracket, IncomeTaxConfig, MinimumWageConfig, SgkRates, StampDutyConfig,
    TaxConfiguration, UnemploymentRates,
};

fn bracket(index: u32, min_income: i64, max_income: Option<i64>, rate_percent: i64) -> IncomeTaxBracket {
    IncomeTaxBracket {
        id: format!("bracket-{}", index),
        min_income: Decimal::from(min_income),
        max_income: max_income.map(Decimal::from),
        rate: Decimal::new(rate_percent, 2),
    }
}

impl TaxConfiguration {
    /// Returns the 2026 reference configuration.
    ///
    /// | Parameter | Value |
    /// |---|---|
    /// | SGK employee / employer / incentive | 14% / 20.5% / 5% |
    /// | Unemployment employee / employer | 1% / 2% |
    /// | Stamp duty | 0.759% |
    /// | Minimum wage gross / net | 33,030.00 / 28,075.50 |
    /// | SGK ceiling | 297,270.00 (9x minimum wage gross) |
    /// | Brackets | 15% to 190k, 20% to 400k, 27% to 1.5M, 35% to 5.3M, 40% above |
    ///
    /// This is the only place the engine constructs default values. Every
    /// calculation still takes the configuration as an explicit argument.
    ///
    /// # Example
    ///
    /// ```
    /// use bordro_engine::config::TaxConfiguration;
    /// use rust_decimal::Decimal;
    ///
    /// let config = TaxConfiguration::reference_2026();
    /// assert_eq!(config.income_tax.brackets.len(), 5);
    /// assert_eq!(config.sgk_ceiling, Decimal::new(29727000, 2));
    /// ```
    pub fn reference_2026() -> Self {
        Self {
            sgk: SgkRates {
                employee_rate: Decimal::new(14, 2),
                employer_rate: Decimal::new(205, 3),
                employer_incentive_rate: Decimal::new(5, 2),
            },
            unemployment: UnemploymentRates {
                employee_rate: Decimal::new(1, 2),
                employer_rate: Decimal::new(2, 2),
            },
            stamp_duty: StampDutyConfig {
                rate: Decimal::new(759, 5),
            },
            income_tax: IncomeTaxConfig {
                brackets: vec![
                    bracket(1, 0, Some(190_000), 15),
                    bracket(2, 190_000, Some(400_000), 20),
                    bracket(3, 400_000, Some(1_500_000), 27),
                    bracket(4, 1_500_000, Some(5_300_000), 35),
                    bracket(5, 5_300_000, None, 40),
                ],
            },
            minimum_wage: MinimumWageConfig {
                gross: Decimal::new(3303000, 2),
                net: Decimal::new(2807550, 2),
            },
            sgk_ceiling: Decimal::new(29727000, 2),
        }
    }
}
